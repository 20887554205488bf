//! Configuration Data Structures for NovaDE Core.
//!
//! - [`CoreConfig`]: The root configuration structure.
//! - [`LoggingConfig`]: Configuration for the logging subsystem.
//! - [`CompositorConfig`]: Screen geometry, frame pacing and colours for the compositor.
//! - [`WallpaperConfig`]: Where the full-screen wallpaper comes from.
//!
//! All structs deserialize with `serde`, take defaults from [`super::defaults`]
//! for missing fields and reject unknown fields.

use super::defaults;
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration settings for the logging subsystem.
///
/// ```
/// use novade_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/novade_wc.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/novade_wc.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum log level: "trace", "debug", "info", "warn" or "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Relative paths are resolved against the application's state directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level(),
            file_path: defaults::default_log_file_path(),
            format: defaults::default_log_format(),
        }
    }
}

/// A window the bootstrap creates at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSpec {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub title: String,
}

/// Largest accepted screen width or height, in pixels.
pub const MAX_SCREEN_DIMENSION: u32 = 16_384;

/// Source of the wallpaper drawn beneath all windows, scaled to the screen.
///
/// ```
/// use novade_core::config::{CompositorConfig, WallpaperConfig};
///
/// let toml_str = r##"
/// [wallpaper]
/// kind = "gradient"
/// top = "#203040"
/// bottom = "#000000"
/// "##;
/// let config: CompositorConfig = toml::from_str(toml_str).unwrap();
/// assert!(matches!(config.wallpaper, Some(WallpaperConfig::Gradient { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum WallpaperConfig {
    /// Vertical gradient from `top` to `bottom`.
    Gradient { top: Color, bottom: Color },
    /// Raw RGBA8 pixels, `width * height * 4` bytes, row-major without padding.
    RawRgba { path: PathBuf, width: u32, height: u32 },
}

/// Compositor settings: output size, frame pacing and the colours used when
/// composing a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositorConfig {
    /// Output width in pixels.
    #[serde(default = "defaults::default_screen_width")]
    pub screen_width: u32,
    /// Output height in pixels.
    #[serde(default = "defaults::default_screen_height")]
    pub screen_height: u32,
    /// Target time between frames. The loop sleeps for whatever remains of it.
    #[serde(default = "defaults::default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Stop after this many frames. `None` runs until a quit event arrives.
    #[serde(default)]
    pub max_frames: Option<u64>,
    /// Colour the frame is cleared to before the wallpaper and windows are drawn.
    #[serde(default = "defaults::default_background_color")]
    pub background_color: Color,
    /// Fill colour of the default cursor bitmap.
    #[serde(default = "defaults::default_cursor_color")]
    pub cursor_color: Color,
    /// Wallpaper drawn after clearing. `None` leaves the background colour visible.
    #[serde(default)]
    pub wallpaper: Option<WallpaperConfig>,
    #[serde(default)]
    pub demo_windows: Vec<WindowSpec>,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            screen_width: defaults::default_screen_width(),
            screen_height: defaults::default_screen_height(),
            frame_interval_ms: defaults::default_frame_interval_ms(),
            max_frames: None,
            background_color: defaults::default_background_color(),
            cursor_color: defaults::default_cursor_color(),
            wallpaper: None,
            demo_windows: Vec::new(),
        }
    }
}

/// Root configuration structure.
///
/// ```
/// use novade_core::config::CoreConfig;
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
///
/// [compositor]
/// screen_width = 800
/// screen_height = 600
/// "#;
/// let loaded: CoreConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(loaded.logging.level, "warn");
/// assert_eq!(loaded.compositor.screen_width, 800);
/// assert_eq!(loaded.compositor.frame_interval_ms, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub compositor: CompositorConfig,
}
