//! Pointer overlay: position and a fixed-size RGBA8 bitmap.

use novade_core::types::{Color, Point, Size};
use tracing::trace;

use crate::error::{CompositorError, Result};

/// Cursor width and height in pixels.
pub const CURSOR_SIZE: u32 = 16;

const BITMAP_LEN: usize = (CURSOR_SIZE * CURSOR_SIZE * 4) as usize;

/// The cursor. Its position is always `>= 0` on both axes and, once screen
/// bounds are known, never further right or down than `screen - CURSOR_SIZE`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    position: Point<i32>,
    bounds: Option<Size<u32>>,
    bitmap: Vec<u8>,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl Cursor {
    /// A cursor at `(0, 0)` filled opaquely with `fill`.
    pub fn new(fill: Color) -> Self {
        let (r, g, b, _) = fill.to_rgba8();
        let bitmap = [r, g, b, 0xff].repeat(BITMAP_LEN / 4);
        Self {
            position: Point::zero(),
            bounds: None,
            bitmap,
        }
    }

    pub fn position(&self) -> Point<i32> {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn size(&self) -> Size<u32> {
        Size::new(CURSOR_SIZE, CURSOR_SIZE)
    }

    /// The `CURSOR_SIZE x CURSOR_SIZE` RGBA8 bitmap.
    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    /// Records the screen size and re-clamps the current position to it.
    pub fn set_bounds(&mut self, width: u32, height: u32) {
        self.bounds = Some(Size::new(width, height));
        self.position = self.clamp(self.position.x as i64, self.position.y as i64);
    }

    /// Moves by `(dx, dy)` and clamps the result.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        let x = self.position.x.saturating_add(dx) as i64;
        let y = self.position.y.saturating_add(dy) as i64;
        self.position = self.clamp(x, y);
        trace!(x = self.position.x, y = self.position.y, "Cursor moved");
    }

    /// Replaces the bitmap.
    ///
    /// # Errors
    ///
    /// [`CompositorError::SizeMismatch`] unless `pixels` is exactly
    /// `CURSOR_SIZE * CURSOR_SIZE * 4` bytes; the old bitmap is kept.
    pub fn set_bitmap(&mut self, pixels: &[u8]) -> Result<()> {
        if pixels.len() != BITMAP_LEN {
            return Err(CompositorError::SizeMismatch { expected: BITMAP_LEN, actual: pixels.len() });
        }
        self.bitmap.clear();
        self.bitmap.extend_from_slice(pixels);
        Ok(())
    }

    fn clamp(&self, x: i64, y: i64) -> Point<i32> {
        let (max_x, max_y) = match self.bounds {
            Some(bounds) => (
                (bounds.width as i64 - CURSOR_SIZE as i64).max(0),
                (bounds.height as i64 - CURSOR_SIZE as i64).max(0),
            ),
            None => (i32::MAX as i64, i32::MAX as i64),
        };
        Point::new(x.clamp(0, max_x) as i32, y.clamp(0, max_y) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_new_cursor_is_opaque_fill_at_origin() {
        let cursor = Cursor::new(Color::from_rgb8(10, 20, 30));
        assert_eq!(cursor.position(), Point::new(0, 0));
        assert_eq!(cursor.bitmap().len(), 16 * 16 * 4);
        assert!(cursor.bitmap().chunks_exact(4).all(|px| px == [10, 20, 30, 255]));
    }

    #[test]
    fn test_move_by_clamps_at_zero() {
        let mut cursor = Cursor::default();
        cursor.move_by(-5, -5);
        assert_eq!(cursor.position(), Point::new(0, 0));
    }

    #[test]
    fn test_move_by_accumulates() {
        let mut cursor = Cursor::default();
        cursor.move_by(10, 10);
        cursor.move_by(5, 5);
        assert_eq!(cursor.position(), Point::new(15, 15));
    }

    #[rstest]
    #[case((1000, 1000), (1264, 704))]
    #[case((-3000, 50), (0, 50))]
    #[case((i32::MAX, i32::MAX), (1264, 704))]
    fn test_move_by_clamps_to_screen(#[case] delta: (i32, i32), #[case] expected: (i32, i32)) {
        let mut cursor = Cursor::default();
        cursor.set_bounds(1280, 720);
        cursor.move_by(delta.0, delta.1);
        cursor.move_by(delta.0, delta.1);
        assert_eq!((cursor.x(), cursor.y()), expected);
    }

    #[test]
    fn test_screen_smaller_than_cursor_pins_to_origin() {
        let mut cursor = Cursor::default();
        cursor.set_bounds(8, 8);
        cursor.move_by(4, 4);
        assert_eq!(cursor.position(), Point::new(0, 0));
    }

    #[test]
    fn test_set_bounds_reclamps_position() {
        let mut cursor = Cursor::default();
        cursor.move_by(500, 500);
        cursor.set_bounds(100, 200);
        assert_eq!(cursor.position(), Point::new(84, 184));
    }

    #[test]
    fn test_set_bitmap() {
        let mut cursor = Cursor::default();
        assert_eq!(
            cursor.set_bitmap(&[0u8; 10]),
            Err(CompositorError::SizeMismatch { expected: 1024, actual: 10 })
        );
        assert!(cursor.bitmap().iter().all(|&b| b == 0xff));

        cursor.set_bitmap(&[7u8; 1024]).unwrap();
        assert!(cursor.bitmap().iter().all(|&b| b == 7));
    }
}
