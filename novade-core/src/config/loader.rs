//! Configuration Loading for NovaDE Core.
//!
//! [`ConfigLoader::load()`] reads the system-wide configuration
//! (`/etc/novade/config.toml`, or `$NOVADE_SYSTEM_CONFIG_PATH`) and the user
//! configuration (`config.toml` in the application config directory), merges
//! them with the user file taking precedence, fills in defaults and validates
//! the result. Missing files are not an error.
//!
//! ```rust,ignore
//! use novade_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => println!("Screen: {}x{}", config.compositor.screen_width, config.compositor.screen_height),
//!     Err(e) => {
//!         novade_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration loading failed: {}", e);
//!     }
//! }
//! ```

use std::path::Path;
use toml::Value;
use tracing::debug;

use crate::config::{CompositorConfig, CoreConfig, WallpaperConfig, MAX_SCREEN_DIMENSION};
use crate::error::{ConfigError, CoreError};
use crate::utils::fs as nova_fs;
use crate::utils::paths::{get_app_config_dir, get_app_state_dir, get_system_config_path_with_override};

/// Namespace for configuration loading and validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads, merges and validates the system and user configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ReadError`] if a file exists but cannot be read.
    /// - [`ConfigError::ParseError`] for invalid TOML or unknown fields.
    /// - [`ConfigError::ValidationError`] for out-of-range values.
    /// - [`ConfigError::DirectoryUnavailable`] if the config or state directory cannot be determined.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let system_config_path = get_system_config_path_with_override();
        let user_config_path = get_app_config_dir()?.join("config.toml");
        Self::load_from_paths(&system_config_path, &user_config_path)
    }

    /// Same as [`Self::load`] with explicit file locations.
    pub fn load_from_paths(system_path: &Path, user_path: &Path) -> Result<CoreConfig, CoreError> {
        let system_toml = Self::read_toml(system_path)?;
        let user_toml = Self::read_toml(user_path)?;
        debug!(
            system = %system_path.display(),
            user = %user_path.display(),
            system_found = system_toml.is_some(),
            user_found = user_toml.is_some(),
            "Resolved configuration sources"
        );

        let mut config = match Self::merge_toml_values(system_toml, user_toml) {
            Some(value) => value
                .try_into::<CoreConfig>()
                .map_err(|e| CoreError::Config(ConfigError::ParseError(e)))?,
            None => CoreConfig::default(),
        };

        Self::validate_config(&mut config)?;
        Ok(config)
    }

    /// Loads a single configuration file, which must exist.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(ConfigError::ReadError { path: path.to_path_buf(), source: e })
        })?;
        let mut config: CoreConfig =
            toml::from_str(&content).map_err(|e| CoreError::Config(ConfigError::ParseError(e)))?;
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    fn read_toml(path: &Path) -> Result<Option<Value>, CoreError> {
        match nova_fs::read_optional_config(path)? {
            Some(content) => toml::from_str::<toml::Table>(&content)
                .map(|table| Some(Value::Table(table)))
                .map_err(|e| CoreError::Config(ConfigError::ParseError(e))),
            None => Ok(None),
        }
    }

    /// Merges two optional TOML values. `override_val` takes precedence.
    fn merge_toml_values(base: Option<Value>, override_val: Option<Value>) -> Option<Value> {
        match (base, override_val) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(Value::Table(mut base_table)), Some(Value::Table(override_table))) => {
                Self::merge_toml_tables(&mut base_table, &override_table);
                Some(Value::Table(base_table))
            }
            (_, Some(o)) => Some(o),
        }
    }

    /// Recursively merges `override_table` into `base_table`.
    fn merge_toml_tables(
        base_table: &mut toml::map::Map<String, Value>,
        override_table: &toml::map::Map<String, Value>,
    ) {
        for (key, override_item) in override_table {
            match base_table.get_mut(key) {
                Some(base_item) => {
                    if let (Value::Table(bt), Value::Table(ot)) = (&mut *base_item, override_item) {
                        Self::merge_toml_tables(bt, ot);
                    } else {
                        *base_item = override_item.clone();
                    }
                }
                None => {
                    base_table.insert(key.clone(), override_item.clone());
                }
            }
        }
    }

    /// Normalizes and validates a parsed configuration.
    ///
    /// - log level must be one of trace/debug/info/warn/error, format text/json (lower-cased);
    /// - a relative log file path is anchored in the application state directory and
    ///   the parent directory of any log file is created;
    /// - screen dimensions, frame interval and demo window sizes must be non-zero;
    /// - screen and raw wallpaper dimensions must not exceed [`MAX_SCREEN_DIMENSION`].
    pub fn validate_config(config: &mut CoreConfig) -> Result<(), CoreError> {
        let level_lower = config.logging.level.to_lowercase();
        match level_lower.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => config.logging.level = level_lower,
            _ => {
                return Err(CoreError::Config(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                ))));
            }
        }

        let format_lower = config.logging.format.to_lowercase();
        match format_lower.as_str() {
            "text" | "json" => config.logging.format = format_lower,
            _ => {
                return Err(CoreError::Config(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                ))));
            }
        }

        if let Some(log_path) = &config.logging.file_path {
            let absolute_path = if log_path.is_absolute() {
                log_path.clone()
            } else {
                get_app_state_dir()?.join(log_path)
            };
            if let Some(parent_dir) = absolute_path.parent() {
                if !parent_dir.exists() {
                    nova_fs::ensure_dir_exists(parent_dir)?;
                }
            }
            config.logging.file_path = Some(absolute_path);
        }

        Self::validate_compositor_config(&config.compositor)
    }

    fn validate_compositor_config(compositor: &CompositorConfig) -> Result<(), CoreError> {
        if compositor.screen_width == 0 || compositor.screen_height == 0 {
            return Err(CoreError::Config(ConfigError::ValidationError(format!(
                "Invalid screen size {}x{}: both dimensions must be positive.",
                compositor.screen_width, compositor.screen_height
            ))));
        }
        if compositor.screen_width > MAX_SCREEN_DIMENSION || compositor.screen_height > MAX_SCREEN_DIMENSION {
            return Err(CoreError::Config(ConfigError::ValidationError(format!(
                "Invalid screen size {}x{}: dimensions are limited to {}.",
                compositor.screen_width, compositor.screen_height, MAX_SCREEN_DIMENSION
            ))));
        }
        if compositor.frame_interval_ms == 0 {
            return Err(CoreError::Config(ConfigError::ValidationError(
                "frame_interval_ms must be positive.".to_string(),
            )));
        }
        if let Some(window) = compositor.demo_windows.iter().find(|w| w.width == 0 || w.height == 0) {
            return Err(CoreError::Config(ConfigError::ValidationError(format!(
                "Demo window '{}' has invalid size {}x{}.",
                window.title, window.width, window.height
            ))));
        }
        if let Some(WallpaperConfig::RawRgba { path, width, height }) = &compositor.wallpaper {
            let in_range = |d: u32| d > 0 && d <= MAX_SCREEN_DIMENSION;
            if !in_range(*width) || !in_range(*height) {
                return Err(CoreError::Config(ConfigError::ValidationError(format!(
                    "Wallpaper '{}' has invalid size {}x{}.",
                    path.display(),
                    width,
                    height
                ))));
            }
        }
        Ok(())
    }
}
