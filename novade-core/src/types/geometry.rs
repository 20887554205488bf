//! Geometric primitives: points, sizes and integer rectangles.

use num_traits::{Num, Zero};
use serde::{Deserialize, Serialize};

/// Represents a 2D point with generic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point<T: Num + Copy> {
    /// The x-coordinate of the point.
    pub x: T,
    /// The y-coordinate of the point.
    pub y: T,
}

impl<T: Num + Copy> Point<T> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

impl<T: Num + Copy + Zero> Point<T> {
    /// The origin `(0, 0)`.
    pub fn zero() -> Self {
        Point::new(T::zero(), T::zero())
    }
}

/// Represents a 2D size with generic dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size<T: Num + Copy> {
    /// The width component.
    pub width: T,
    /// The height component.
    pub height: T,
}

impl<T: Num + Copy> Size<T> {
    /// Creates a new size.
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

/// An integer rectangle with `i32` origin and `u32` size.
///
/// Edges are inclusive for left/top and exclusive for right/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RectInt {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl RectInt {
    /// Creates a new `RectInt` from individual coordinate and dimension values.
    pub const fn from_coords(x: i32, y: i32, width: u32, height: u32) -> Self {
        RectInt { x, y, width, height }
    }

    /// Calculates the x-coordinate of the right edge (exclusive).
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Calculates the y-coordinate of the bottom edge (exclusive).
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Calculates the intersection of this rectangle with another.
    /// Returns `None` if they do not overlap.
    pub fn intersection(&self, other: &RectInt) -> Option<RectInt> {
        let x1 = (self.x as i64).max(other.x as i64);
        let y1 = (self.y as i64).max(other.y as i64);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x1 < x2 && y1 < y2 {
            Some(RectInt::from_coords(x1 as i32, y1 as i32, (x2 - x1) as u32, (y2 - y1) as u32))
        } else {
            None
        }
    }
}
