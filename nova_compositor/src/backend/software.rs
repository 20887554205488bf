//! CPU renderer drawing into an in-memory double-buffered framebuffer.

use novade_compositor_core::{CompositorError, FrameRenderer, PixelView, Result, SurfaceRenderParams};
use novade_core::types::Color;
use tracing::{debug, trace};

use super::framebuffer::Framebuffer;

/// Rasterizes frames into a back buffer; [`FrameRenderer::present`] copies it
/// to the front buffer, which is what a display would scan out.
#[derive(Debug)]
pub struct SoftwareRenderer {
    back: Framebuffer,
    front: Framebuffer,
    in_frame: bool,
    frames_presented: u64,
}

impl SoftwareRenderer {
    /// Allocates the back and front buffers for a `width x height` output.
    ///
    /// # Errors
    ///
    /// [`CompositorError::AllocationFailure`] if either buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let back = Framebuffer::new(width, height)?;
        let front = Framebuffer::new(width, height)?;
        debug!(width, height, "Software renderer created");
        Ok(Self {
            back,
            front,
            in_frame: false,
            frames_presented: 0,
        })
    }

    /// The last presented frame.
    pub fn front_buffer(&self) -> &Framebuffer {
        &self.front
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn ensure_in_frame(&self, call: &str) -> Result<()> {
        if self.in_frame {
            Ok(())
        } else {
            Err(CompositorError::Render(format!("{} called outside of a frame", call)))
        }
    }
}

fn check_len(what: &str, width: u32, height: u32, pixels: &[u8]) -> Result<()> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() < expected {
        return Err(CompositorError::Render(format!(
            "{} of {}x{} needs {} bytes, got {}",
            what,
            width,
            height,
            expected,
            pixels.len()
        )));
    }
    Ok(())
}

impl FrameRenderer for SoftwareRenderer {
    /// Starts a new frame. A frame left open by a failed draw call is discarded.
    fn begin_frame(&mut self, clear_color: Color) -> Result<()> {
        if self.in_frame {
            debug!(frame = self.frames_presented + 1, "Discarding unfinished frame");
        }
        self.back.clear(clear_color.to_argb_u32());
        self.in_frame = true;
        trace!(clear = %clear_color, "Begin frame");
        Ok(())
    }

    fn render_wallpaper(&mut self, wallpaper: &PixelView<'_>) -> Result<()> {
        self.ensure_in_frame("render_wallpaper")?;
        check_len("wallpaper", wallpaper.width, wallpaper.height, wallpaper.pixels)?;
        self.back
            .blit_rgba_scaled_to_fit(wallpaper.width, wallpaper.height, wallpaper.pixels);
        trace!(width = wallpaper.width, height = wallpaper.height, "Drew wallpaper");
        Ok(())
    }

    fn render_surface(&mut self, params: &SurfaceRenderParams<'_>) -> Result<()> {
        self.ensure_in_frame("render_surface")?;
        check_len("surface", params.width, params.height, params.pixels)?;
        self.back
            .blit_rgba(params.x, params.y, params.width, params.height, params.pixels);
        self.back.outline_rect(
            params.x,
            params.y,
            params.width,
            params.height,
            params.border_color.to_argb_u32(),
        );
        trace!(
            window = %params.window_id,
            x = params.x,
            y = params.y,
            width = params.width,
            height = params.height,
            focused = params.is_focused,
            "Drew window"
        );
        Ok(())
    }

    fn render_cursor(&mut self, x: i32, y: i32, bitmap: &PixelView<'_>) -> Result<()> {
        self.ensure_in_frame("render_cursor")?;
        check_len("cursor", bitmap.width, bitmap.height, bitmap.pixels)?;
        self.back.blit_rgba(x, y, bitmap.width, bitmap.height, bitmap.pixels);
        trace!(x, y, "Drew cursor");
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.ensure_in_frame("present")?;
        self.front.copy_from(&self.back);
        self.in_frame = false;
        self.frames_presented += 1;
        trace!(frame = self.frames_presented, "Presented frame");
        Ok(())
    }
}
