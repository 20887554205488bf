//! In-memory ARGB8888 framebuffer with clipped drawing primitives.
//!
//! Pixels are `u32` in `0xAARRGGBB`, row-major, top-left origin. Every
//! primitive clips against the framebuffer; off-screen parts are dropped.

use novade_compositor_core::{CompositorError, Result};
use novade_core::types::RectInt;

const BYTES_PER_PIXEL: usize = std::mem::size_of::<u32>();

/// Fast `x / 255` for `x <= 255 * 255`.
#[inline]
fn div255(x: u32) -> u32 {
    (x + 1 + (x >> 8)) >> 8
}

/// Source-over blend of `src` onto `dst`, both ARGB8888.
#[inline]
pub fn alpha_blend(src: u32, dst: u32) -> u32 {
    let sa = src >> 24;
    if sa == 0 {
        return dst;
    }
    if sa == 0xff {
        return src;
    }
    let inv = 255 - sa;
    let r = div255(((src >> 16) & 0xff) * sa + ((dst >> 16) & 0xff) * inv);
    let g = div255(((src >> 8) & 0xff) * sa + ((dst >> 8) & 0xff) * inv);
    let b = div255((src & 0xff) * sa + (dst & 0xff) * inv);
    let a = sa + div255((dst >> 24) * inv);
    (a << 24) | (r << 16) | (g << 8) | b
}

/// Packs one RGBA8 pixel (4 bytes) into ARGB8888.
#[inline]
pub fn rgba_to_argb(px: &[u8]) -> u32 {
    u32::from_be_bytes([px[3], px[0], px[1], px[2]])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Allocates a framebuffer cleared to transparent black.
    ///
    /// # Errors
    ///
    /// [`CompositorError::AllocationFailure`] if `width * height` pixels
    /// overflow or cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(CompositorError::AllocationFailure { bytes: usize::MAX })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| CompositorError::AllocationFailure {
                bytes: len.saturating_mul(BYTES_PER_PIXEL),
            })?;
        pixels.resize(len, 0);
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn clear(&mut self, argb: u32) {
        self.pixels.fill(argb);
    }

    pub fn copy_from(&mut self, other: &Framebuffer) {
        self.width = other.width;
        self.height = other.height;
        self.pixels.clone_from(&other.pixels);
    }

    /// Visible part of `(x, y, w, h)` as `(x0, y0, x1, y1)` in framebuffer
    /// coordinates, exclusive end, or `None` if nothing is visible.
    fn clip(&self, x: i32, y: i32, w: u32, h: u32) -> Option<(usize, usize, usize, usize)> {
        let bounds = RectInt::from_coords(0, 0, self.width, self.height);
        let visible = bounds.intersection(&RectInt::from_coords(x, y, w, h))?;
        // Inside `bounds`, so all edges are non-negative.
        Some((
            visible.x as usize,
            visible.y as usize,
            visible.right() as usize,
            visible.bottom() as usize,
        ))
    }

    /// Fills a rectangle with an opaque colour (no blending).
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, argb: u32) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) else {
            return;
        };
        let stride = self.width as usize;
        for row in y0..y1 {
            self.pixels[row * stride + x0..row * stride + x1].fill(argb);
        }
    }

    /// Draws a one-pixel outline along the inside edge of the rectangle.
    pub fn outline_rect(&mut self, x: i32, y: i32, w: u32, h: u32, argb: u32) {
        if w == 0 || h == 0 {
            return;
        }
        let right = x.saturating_add(i32::try_from(w - 1).unwrap_or(i32::MAX));
        let bottom = y.saturating_add(i32::try_from(h - 1).unwrap_or(i32::MAX));
        self.fill_rect(x, y, w, 1, argb);
        self.fill_rect(x, bottom, w, 1, argb);
        self.fill_rect(x, y, 1, h, argb);
        self.fill_rect(right, y, 1, h, argb);
    }

    /// Blends a `w x h` RGBA8 image with its top-left corner at `(x, y)`.
    ///
    /// `rgba` must hold at least `w * h * 4` bytes; missing rows are skipped.
    pub fn blit_rgba(&mut self, x: i32, y: i32, w: u32, h: u32, rgba: &[u8]) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) else {
            return;
        };
        let stride = self.width as usize;
        let src_stride = w as usize * 4;
        for row in y0..y1 {
            let src_y = (row as i64 - y as i64) as usize;
            let src_x0 = (x0 as i64 - x as i64) as usize;
            let start = src_y * src_stride + src_x0 * 4;
            let end = start + (x1 - x0) * 4;
            let Some(src_row) = rgba.get(start..end) else {
                continue;
            };
            let dst_row = &mut self.pixels[row * stride + x0..row * stride + x1];
            for (dst, px) in dst_row.iter_mut().zip(src_row.chunks_exact(4)) {
                *dst = alpha_blend(rgba_to_argb(px), *dst);
            }
        }
    }

    /// Blends a `src_w x src_h` RGBA8 image stretched over the whole
    /// framebuffer, nearest-neighbour sampled.
    pub fn blit_rgba_scaled_to_fit(&mut self, src_w: u32, src_h: u32, rgba: &[u8]) {
        if src_w == 0 || src_h == 0 || rgba.len() < src_w as usize * src_h as usize * 4 {
            return;
        }
        let (dst_w, dst_h) = (self.width as usize, self.height as usize);
        for row in 0..dst_h {
            let src_y = row * src_h as usize / dst_h;
            for col in 0..dst_w {
                let src_x = col * src_w as usize / dst_w;
                let offset = (src_y * src_w as usize + src_x) * 4;
                let dst = &mut self.pixels[row * dst_w + col];
                *dst = alpha_blend(rgba_to_argb(&rgba[offset..offset + 4]), *dst);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0x00ff_0000, 0xff00_00ff, 0xff00_00ff)]
    #[case(0xffff_0000, 0xff00_00ff, 0xffff_0000)]
    #[case(0x80ff_0000, 0xff00_0000, 0xff80_0000)]
    fn test_alpha_blend(#[case] src: u32, #[case] dst: u32, #[case] expected: u32) {
        assert_eq!(alpha_blend(src, dst), expected);
    }

    #[test]
    fn test_rgba_to_argb() {
        assert_eq!(rgba_to_argb(&[0x11, 0x22, 0x33, 0x44]), 0x4411_2233);
    }

    #[test]
    fn test_new_framebuffer_is_cleared() {
        let fb = Framebuffer::new(3, 2).unwrap();
        assert_eq!((fb.width(), fb.height()), (3, 2));
        assert_eq!(fb.pixels(), &[0; 6]);
    }

    #[test]
    fn test_oversized_framebuffer_is_allocation_error() {
        assert!(matches!(
            Framebuffer::new(u32::MAX, u32::MAX),
            Err(CompositorError::AllocationFailure { .. })
        ));
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.fill_rect(-2, 2, 4, 10, 0xffff_ffff);
        assert_eq!(fb.pixel(0, 2), Some(0xffff_ffff));
        assert_eq!(fb.pixel(1, 3), Some(0xffff_ffff));
        assert_eq!(fb.pixel(2, 2), Some(0));
        assert_eq!(fb.pixel(0, 1), Some(0));
        assert_eq!(fb.pixel(4, 0), None);
    }

    #[test]
    fn test_outline_rect_leaves_interior() {
        let mut fb = Framebuffer::new(5, 5).unwrap();
        fb.outline_rect(0, 0, 5, 5, 0xff00_80ff);
        assert_eq!(fb.pixel(0, 0), Some(0xff00_80ff));
        assert_eq!(fb.pixel(4, 4), Some(0xff00_80ff));
        assert_eq!(fb.pixel(4, 2), Some(0xff00_80ff));
        assert_eq!(fb.pixel(2, 2), Some(0));
    }

    #[test]
    fn test_blit_rgba_offscreen_origin() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        #[rustfmt::skip]
        let image: &[u8] = &[
            1, 0, 0, 255,   2, 0, 0, 255,
            3, 0, 0, 255,   4, 0, 0, 255,
        ];
        fb.blit_rgba(-1, -1, 2, 2, image);
        assert_eq!(fb.pixel(0, 0), Some(0xff04_0000));
        assert_eq!(fb.pixel(1, 0), Some(0));
        assert_eq!(fb.pixel(0, 1), Some(0));
    }

    #[test]
    fn test_blit_far_outside_is_dropped() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        fb.fill_rect(i32::MIN, i32::MIN, u32::MAX, 1, 0xffff_ffff);
        fb.fill_rect(2, 0, 4, 4, 0xffff_ffff);
        fb.outline_rect(i32::MAX, i32::MAX, u32::MAX, u32::MAX, 0xffff_ffff);
        assert_eq!(fb.pixels(), &[0; 4]);
    }

    #[test]
    fn test_blit_rgba_transparent_keeps_destination() {
        let mut fb = Framebuffer::new(1, 1).unwrap();
        fb.clear(0xff12_3456);
        fb.blit_rgba(0, 0, 1, 1, &[0xff, 0xff, 0xff, 0]);
        assert_eq!(fb.pixel(0, 0), Some(0xff12_3456));
    }

    #[test]
    fn test_scaled_blit_covers_screen() {
        let mut fb = Framebuffer::new(4, 2).unwrap();
        #[rustfmt::skip]
        let image: &[u8] = &[
            255, 0, 0, 255,   0, 0, 255, 255,
        ];
        fb.blit_rgba_scaled_to_fit(2, 1, image);
        assert_eq!(fb.pixels(), &[
            0xffff_0000, 0xffff_0000, 0xff00_00ff, 0xff00_00ff,
            0xffff_0000, 0xffff_0000, 0xff00_00ff, 0xff00_00ff,
        ]);
    }
}
