//! General Utilities for NovaDE Core.
//!
//! # Submodules
//!
//! - [`fs`]: Filesystem utilities (directory creation, optional config reads).
//! - [`paths`]: XDG and application-specific directory resolution.
//! - [`string_utils`]: String helpers such as byte-bounded truncation.

pub mod fs;
pub mod paths;
pub mod string_utils;

pub use fs::ensure_dir_exists;
pub use string_utils::truncate_to_byte_limit;
