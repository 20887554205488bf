//! The rendering collaborator the composition driver draws through.

use novade_core::types::Color;

use crate::error::Result;
use crate::window::WindowId;

/// Borrowed view of a tightly packed RGBA8 image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelView<'a> {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes, row-major.
    pub pixels: &'a [u8],
}

/// Everything a renderer needs to draw one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRenderParams<'a> {
    pub window_id: WindowId,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// The window's RGBA8 buffer, `width * height * 4` bytes.
    pub pixels: &'a [u8],
    pub is_focused: bool,
    pub border_color: Color,
}

/// Abstract interface for a frame renderer.
///
/// A frame is always `begin_frame`, any number of draw calls in back-to-front
/// order, then `present`. Implementations report failures as
/// [`crate::CompositorError::Render`].
pub trait FrameRenderer: Send {
    /// Starts a frame with the whole target cleared to `clear_color`.
    fn begin_frame(&mut self, clear_color: Color) -> Result<()>;

    /// Draws `wallpaper` scaled to cover the whole target.
    fn render_wallpaper(&mut self, wallpaper: &PixelView<'_>) -> Result<()>;

    /// Draws one window's buffer at its geometry, with a border in
    /// `params.border_color`.
    fn render_surface(&mut self, params: &SurfaceRenderParams<'_>) -> Result<()>;

    /// Draws the cursor bitmap with its top-left corner at `(x, y)`.
    fn render_cursor(&mut self, x: i32, y: i32, bitmap: &PixelView<'_>) -> Result<()>;

    /// Finishes the frame and makes it visible.
    fn present(&mut self) -> Result<()>;
}
