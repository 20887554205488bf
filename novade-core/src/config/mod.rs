//! Configuration Management for NovaDE Core.
//!
//! - [`types`]: the configuration schema ([`CoreConfig`], [`LoggingConfig`],
//!   [`CompositorConfig`], [`WallpaperConfig`], [`WindowSpec`]).
//! - [`defaults`]: default values used by `serde` for missing fields.
//! - [`loader`]: [`ConfigLoader`], which locates, merges, parses and validates
//!   the TOML files.
//!
//! ## Loading process
//!
//! 1. The system file and the user file are read; a missing or blank file counts as absent.
//! 2. Both are parsed as TOML tables and merged recursively, user values winning.
//! 3. The merged table is deserialized into [`CoreConfig`]; absent sections fall back to defaults.
//! 4. The result is validated and normalized by [`ConfigLoader::validate_config`].

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CompositorConfig, CoreConfig, LoggingConfig, WallpaperConfig, WindowSpec, MAX_SCREEN_DIMENSION};
