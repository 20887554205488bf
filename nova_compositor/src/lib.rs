//! NovaDE compositor process plumbing.
//!
//! [`init_compositor`] builds a [`CompositorState`] from the loaded
//! configuration, including the wallpaper and the configured demo windows;
//! [`run`] wires it to the [`backend::SoftwareRenderer`] and an input source
//! and drives the [`event_loop::EventLoop`] until quit.

pub mod backend;
pub mod error;
pub mod event_loop;

use std::fs;

use novade_compositor_core::{CompositorState, InputSource, Wallpaper, WindowId};
use novade_core::config::{CoreConfig, WallpaperConfig};
use tracing::{debug, info};

use crate::backend::SoftwareRenderer;
use crate::error::NovaCompositorError;
use crate::event_loop::{EventLoop, RunSummary};

/// Deterministic RGBA8 test image: a red/green gradient over `x`/`y` with a
/// blue channel that differs per window.
pub fn demo_pattern(width: u32, height: u32, id: WindowId) -> Vec<u8> {
    let blue = (id.as_u32().wrapping_mul(64) & 0xff) as u8;
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        let green = (y as u64 * 255 / height.max(1) as u64) as u8;
        for x in 0..width {
            let red = (x as u64 * 255 / width.max(1) as u64) as u8;
            pixels.extend_from_slice(&[red, green, blue, 0xff]);
        }
    }
    pixels
}

/// Builds the configured wallpaper. A gradient is generated one pixel wide and
/// `screen_height` rows tall; the renderer stretches it over the screen.
///
/// # Errors
///
/// [`NovaCompositorError::WallpaperRead`] if a raw file cannot be read, and a
/// [`NovaCompositorError::Compositor`] size mismatch if its length is not
/// `width * height * 4`.
pub fn load_wallpaper(config: &WallpaperConfig, screen_height: u32) -> Result<Wallpaper, NovaCompositorError> {
    match config {
        WallpaperConfig::Gradient { top, bottom } => {
            let height = screen_height.max(1);
            let (top, bottom) = (top.to_rgba8(), bottom.to_rgba8());
            let (top, bottom) = ([top.0, top.1, top.2, top.3], [bottom.0, bottom.1, bottom.2, bottom.3]);
            let span = i64::from(height - 1).max(1);
            let mut pixels = Vec::with_capacity(height as usize * 4);
            for y in 0..i64::from(height) {
                for (from, to) in top.iter().zip(&bottom) {
                    let (from, to) = (i64::from(*from), i64::from(*to));
                    pixels.push((from + (to - from) * y / span) as u8);
                }
            }
            Ok(Wallpaper::new(1, height, pixels)?)
        }
        WallpaperConfig::RawRgba { path, width, height } => {
            let pixels = fs::read(path).map_err(|source| NovaCompositorError::WallpaperRead {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), bytes = pixels.len(), "Read wallpaper file");
            Ok(Wallpaper::new(*width, *height, pixels)?)
        }
    }
}

/// Creates the compositor state, installs the wallpaper and the configured
/// demo windows, each filled with [`demo_pattern`].
pub fn init_compositor(config: &CoreConfig) -> Result<CompositorState, NovaCompositorError> {
    let compositor = &config.compositor;
    info!(
        screen_width = compositor.screen_width,
        screen_height = compositor.screen_height,
        demo_windows = compositor.demo_windows.len(),
        "NovaDE compositor initializing"
    );
    let mut state = CompositorState::from_config(compositor)?;
    if let Some(wallpaper) = &compositor.wallpaper {
        state.set_wallpaper(Some(load_wallpaper(wallpaper, compositor.screen_height)?));
        info!(?wallpaper, "Wallpaper installed");
    }
    for demo in &compositor.demo_windows {
        let id = state.create_window(demo.width, demo.height, &demo.title)?;
        state.update_buffer(id, &demo_pattern(demo.width, demo.height, id))?;
    }
    Ok(state)
}

/// Runs the compositor with the software renderer until `input` asks to quit
/// or the configured frame limit is reached.
pub fn run(config: &CoreConfig, input: &mut dyn InputSource) -> Result<RunSummary, NovaCompositorError> {
    let mut state = init_compositor(config)?;
    let size = state.screen_size();
    let mut renderer = SoftwareRenderer::new(size.width, size.height)?;
    let summary = EventLoop::from_config(&config.compositor).run(&mut state, &mut renderer, input)?;
    info!(frames = summary.frames, quit = summary.quit_requested, "NovaDE compositor shut down");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ScriptedInput;
    use novade_compositor_core::CompositorError;
    use novade_core::config::WindowSpec;
    use novade_core::types::Color;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn present_once(state: &mut CompositorState) -> SoftwareRenderer {
        let size = state.screen_size();
        let mut renderer = SoftwareRenderer::new(size.width, size.height).unwrap();
        state.present_frame(&mut renderer).unwrap();
        renderer
    }

    fn config_with_windows(windows: Vec<WindowSpec>) -> CoreConfig {
        let mut config = CoreConfig::default();
        config.compositor.screen_width = 320;
        config.compositor.screen_height = 240;
        config.compositor.frame_interval_ms = 1;
        config.compositor.demo_windows = windows;
        config
    }

    #[test]
    fn test_demo_pattern_shape() {
        let pixels = demo_pattern(4, 2, WindowId::new(1));
        assert_eq!(pixels.len(), 4 * 2 * 4);
        assert_eq!(&pixels[..4], &[0, 0, 64, 255]);
        assert_eq!(&pixels[pixels.len() - 4..], &[191, 127, 64, 255]);
    }

    #[test]
    fn test_init_compositor_creates_demo_windows() {
        let config = config_with_windows(vec![
            WindowSpec { width: 100, height: 100, title: "A".into() },
            WindowSpec { width: 200, height: 150, title: "B".into() },
            WindowSpec { width: 50, height: 50, title: "C".into() },
        ]);
        let state = init_compositor(&config).unwrap();
        let titles: Vec<&str> = state.windows().iter().map(|w| w.title()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(state.focused(), Some(WindowId::new(0)));

        let buffer = state.windows().buffer(WindowId::new(2)).unwrap();
        assert_eq!(buffer.lock().unwrap().data(), &demo_pattern(50, 50, WindowId::new(2))[..]);
    }

    #[test]
    fn test_init_compositor_rejects_zero_sized_window() {
        let config = config_with_windows(vec![WindowSpec { width: 0, height: 10, title: "bad".into() }]);
        assert!(matches!(init_compositor(&config), Err(NovaCompositorError::Compositor(_))));
    }

    #[test]
    fn test_run_until_frame_limit() {
        let mut config = config_with_windows(vec![WindowSpec { width: 10, height: 10, title: "A".into() }]);
        config.compositor.max_frames = Some(2);
        let summary = run(&config, &mut ScriptedInput::new()).unwrap();
        assert_eq!(summary, RunSummary { frames: 2, quit_requested: false });
    }

    #[test]
    fn test_gradient_wallpaper_reaches_front_buffer() {
        let mut config = config_with_windows(Vec::new());
        config.compositor.wallpaper = Some(WallpaperConfig::Gradient {
            top: Color::from_rgb8(0xff, 0, 0),
            bottom: Color::from_rgb8(0, 0, 0xff),
        });
        let mut state = init_compositor(&config).unwrap();
        assert!(state.wallpaper().is_some());

        let renderer = present_once(&mut state);
        let front = renderer.front_buffer();
        // The cursor sits at the origin, so sample clear of it.
        assert_eq!(front.pixel(20, 0), Some(0xffff_0000));
        assert_eq!(front.pixel(319, 0), Some(0xffff_0000));
        assert_eq!(front.pixel(0, 239), Some(0xff00_00ff));
        assert_eq!(front.pixel(10, 120), Some(0xff7f_0080));
    }

    #[test]
    fn test_raw_wallpaper_file_is_scaled() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wallpaper.rgba");
        fs::write(&path, [0u8, 255, 0, 255, 0, 0, 255, 255]).unwrap();

        let mut config = config_with_windows(Vec::new());
        config.compositor.wallpaper = Some(WallpaperConfig::RawRgba { path, width: 2, height: 1 });
        let mut state = init_compositor(&config).unwrap();

        let renderer = present_once(&mut state);
        let front = renderer.front_buffer();
        assert_eq!(front.pixel(20, 0), Some(0xff00_ff00));
        assert_eq!(front.pixel(159, 239), Some(0xff00_ff00));
        assert_eq!(front.pixel(160, 0), Some(0xff00_00ff));
        assert_eq!(front.pixel(319, 239), Some(0xff00_00ff));
    }

    #[test]
    fn test_bad_wallpaper_files_are_errors() {
        let dir = TempDir::new().unwrap();
        let missing = WallpaperConfig::RawRgba { path: dir.path().join("absent.rgba"), width: 1, height: 1 };
        assert!(matches!(load_wallpaper(&missing, 240), Err(NovaCompositorError::WallpaperRead { .. })));

        let path = dir.path().join("short.rgba");
        fs::write(&path, [0u8; 4]).unwrap();
        let short = WallpaperConfig::RawRgba { path, width: 2, height: 2 };
        assert!(matches!(
            load_wallpaper(&short, 240),
            Err(NovaCompositorError::Compositor(CompositorError::SizeMismatch { expected: 16, actual: 4 }))
        ));
    }

    #[test]
    fn test_oversized_screen_fails_without_panicking() {
        let mut config = config_with_windows(Vec::new());
        config.compositor.screen_width = u32::MAX;
        config.compositor.screen_height = u32::MAX;
        config.compositor.max_frames = Some(1);
        assert!(matches!(
            run(&config, &mut ScriptedInput::new()),
            Err(NovaCompositorError::Compositor(CompositorError::AllocationFailure { .. }))
        ));
    }
}
