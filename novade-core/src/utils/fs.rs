//! Filesystem Utilities.
//!
//! Helpers for the few filesystem operations the compositor needs: making sure
//! log directories exist and reading optional configuration files. Errors are
//! mapped into [`CoreError`] / [`ConfigError`].

use crate::error::{ConfigError, CoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Ensures that a directory exists at the given path.
///
/// Missing directories (including parents) are created. If the path exists but
/// is not a directory, [`CoreError::Filesystem`] is returned.
///
/// # Examples
///
/// ```no_run
/// # use novade_core::utils::fs::ensure_dir_exists;
/// # use tempfile::tempdir;
/// let temp_dir = tempdir().unwrap();
/// let dir_path = temp_dir.path().join("logs");
/// ensure_dir_exists(&dir_path).unwrap();
/// assert!(dir_path.is_dir());
/// ```
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if !path.is_dir() {
            Err(CoreError::Filesystem {
                message: "Path exists but is not a directory".to_string(),
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    ErrorKind::AlreadyExists,
                    "Path exists but is not a directory",
                ),
            })
        } else {
            Ok(())
        }
    } else {
        fs::create_dir_all(path).map_err(|e| CoreError::Filesystem {
            message: "Failed to create directory".to_string(),
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Reads a configuration file that is allowed to be absent.
///
/// Returns `Ok(None)` if the file does not exist or contains only whitespace,
/// `Ok(Some(content))` otherwise. Any other read failure becomes
/// [`ConfigError::ReadError`].
pub fn read_optional_config(path: &Path) -> Result<Option<String>, CoreError> {
    match fs::read_to_string(path) {
        Ok(content) if content.trim().is_empty() => Ok(None),
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CoreError::Config(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })),
    }
}
