//! Core data types shared across the NovaDE compositor crates.
//!
//! - [`geometry`]: `Point`, `Size`, `RectInt`.
//! - [`color`]: `Color` and `ColorParseError`.

pub mod color;
pub mod geometry;

pub use color::{Color, ColorParseError};
pub use geometry::{Point, RectInt, Size};
