//! Composition driver: turns the window table, wallpaper and cursor into the
//! draw calls of one frame.

use novade_buffer_manager::rgba_byte_len;
use novade_core::types::Color;
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::{CompositorError, Result};
use crate::renderer_interface::{FrameRenderer, PixelView, SurfaceRenderParams};
use crate::window_table::WindowTable;

/// Border of the focused window, `#0080ff`.
pub const FOCUSED_BORDER_COLOR: Color = Color { r: 0.0, g: 128.0 / 255.0, b: 1.0, a: 1.0 };

/// Border of every other window, `#808080`.
pub const UNFOCUSED_BORDER_COLOR: Color = Color { r: 128.0 / 255.0, g: 128.0 / 255.0, b: 128.0 / 255.0, a: 1.0 };

/// A background image, drawn scaled to the full screen under all windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallpaper {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Wallpaper {
    /// # Errors
    ///
    /// [`CompositorError::InvalidDimensions`] for a zero dimension,
    /// [`CompositorError::SizeMismatch`] unless `pixels` is `width * height * 4` bytes.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = rgba_byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(CompositorError::SizeMismatch { expected, actual: pixels.len() });
        }
        Ok(Self { width, height, pixels })
    }

    pub fn view(&self) -> PixelView<'_> {
        PixelView {
            width: self.width,
            height: self.height,
            pixels: &self.pixels,
        }
    }
}

/// Draws every visible window, bottom of the stack first.
pub fn render_all(windows: &WindowTable, renderer: &mut dyn FrameRenderer) -> Result<()> {
    for &id in windows.stacking_order() {
        let window = windows.get(id)?;
        if !window.is_visible() {
            continue;
        }
        let shared = windows.buffer(id)?;
        let buffer = shared
            .lock()
            .map_err(|_| CompositorError::Internal(format!("buffer lock of window {} is poisoned", id)))?;

        let is_focused = window.is_focused();
        let params = SurfaceRenderParams {
            window_id: id,
            x: window.x(),
            y: window.y(),
            width: window.width(),
            height: window.height(),
            pixels: buffer.data(),
            is_focused,
            border_color: if is_focused { FOCUSED_BORDER_COLOR } else { UNFOCUSED_BORDER_COLOR },
        };
        renderer.render_surface(&params)?;
    }
    Ok(())
}

/// Produces one complete frame: clear, wallpaper, windows, cursor, present.
pub fn present_frame(
    windows: &WindowTable,
    cursor: &Cursor,
    background: Color,
    wallpaper: Option<&Wallpaper>,
    renderer: &mut dyn FrameRenderer,
) -> Result<()> {
    renderer.begin_frame(background)?;
    if let Some(wallpaper) = wallpaper {
        renderer.render_wallpaper(&wallpaper.view())?;
    }
    render_all(windows, renderer)?;

    let size = cursor.size();
    let bitmap = PixelView {
        width: size.width,
        height: size.height,
        pixels: cursor.bitmap(),
    };
    renderer.render_cursor(cursor.x(), cursor.y(), &bitmap)?;
    renderer.present()?;
    trace!(windows = windows.len(), "Presented frame");
    Ok(())
}
