//! Default configuration values.
//!
//! Referenced from `#[serde(default = ...)]` attributes in [`super::types`].

use crate::types::Color;
use std::path::PathBuf;

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

/// No log file by default.
pub(crate) fn default_log_file_path() -> Option<PathBuf> {
    None
}

pub(crate) fn default_log_format() -> String {
    "text".to_string()
}

pub(crate) fn default_screen_width() -> u32 {
    1280
}

pub(crate) fn default_screen_height() -> u32 {
    720
}

/// ~60 Hz.
pub(crate) fn default_frame_interval_ms() -> u64 {
    16
}

pub(crate) fn default_background_color() -> Color {
    Color::BLACK
}

pub(crate) fn default_cursor_color() -> Color {
    Color::WHITE
}
