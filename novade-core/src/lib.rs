//! # NovaDE Core Library (`novade-core`)
//!
//! `novade-core` is the foundational library shared by the NovaDE compositor crates.
//! It provides the ambient infrastructure every other crate builds on:
//!
//! - **Error Handling**: A unified error system through the `CoreError` enum and its
//!   associated specific error types like `ConfigError` and `LoggingError`.
//! - **Core Data Types**: Geometry (`Point`, `Size`, `RectInt`) and colour
//!   representation (`Color`).
//! - **Configuration Management**: TOML-based loading, merging and validation of
//!   `CoreConfig` through `ConfigLoader`.
//! - **Logging**: A logging setup built on the `tracing` crate, configurable for
//!   console and rolling file output in text or JSON format.
//! - **Utility Functions**: Filesystem helpers (`utils::fs`), XDG path resolution
//!   (`utils::paths`) and string helpers (`utils::string_utils`).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use novade_core::config::ConfigLoader;
//! use novade_core::logging::initialize_logging;
//! use novade_core::error::CoreError;
//!
//! fn main() -> Result<(), CoreError> {
//!     let core_config = ConfigLoader::load()?;
//!     initialize_logging(&core_config.logging, false)?;
//!     tracing::info!("NovaDE core initialized.");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod types;
pub mod config;
pub mod logging;
pub mod utils;

// Re-export key types for convenience
pub use error::{CoreError, ConfigError, LoggingError};
pub use types::{Point, Size, RectInt, Color, ColorParseError};
pub use config::{CoreConfig, LoggingConfig, CompositorConfig, WallpaperConfig, WindowSpec, ConfigLoader};
pub use logging::{initialize_logging, init_minimal_logging};
pub use utils::{ensure_dir_exists, truncate_to_byte_limit};
