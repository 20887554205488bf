//! Errors of the ambient layer: configuration, logging and filesystem access.
//!
//! [`CoreError`] is what bootstrap code sees; [`ConfigError`] and
//! [`LoggingError`] convert into it with `?`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error returned by every fallible `novade-core` function.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// Creating or inspecting a directory failed.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Loading, parsing or validating the TOML configuration failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Not valid TOML, an unknown field, or a value of the wrong type.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// No home directory, so the XDG config or state directory is unknown.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

#[derive(Error, Debug)]
pub enum LoggingError {
    /// Invalid level, or a global subscriber was already installed.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_core_error_config_variant() {
        let core_err = CoreError::Config(ConfigError::ValidationError("Test validation".to_string()));

        assert_eq!(
            format!("{}", core_err),
            "Configuration Error: Configuration validation failed: Test validation"
        );
        match core_err.source().unwrap().downcast_ref::<ConfigError>() {
            Some(ConfigError::ValidationError(msg)) => assert_eq!(msg, "Test validation"),
            _ => panic!("Incorrect source for CoreError::Config"),
        }
    }

    #[test]
    fn test_core_error_logging_variant() {
        let core_err = CoreError::from(LoggingError::InitializationFailure("already set".to_string()));
        assert_eq!(
            format!("{}", core_err),
            "Logging Error: Failed to initialize logging: already set"
        );
        assert!(core_err.source().is_some());
    }

    #[test]
    fn test_core_error_filesystem_variant() {
        let path = PathBuf::from("/tmp/test.txt");
        let core_err = CoreError::Filesystem {
            message: "File operation failed".to_string(),
            path: path.clone(),
            source: IoError::new(ErrorKind::PermissionDenied, "Permission denied for fs"),
        };

        assert_eq!(
            format!("{}", core_err),
            format!("Filesystem Error: File operation failed (Path: {:?})", path)
        );
        assert_eq!(
            core_err.source().unwrap().downcast_ref::<IoError>().unwrap().kind(),
            ErrorKind::PermissionDenied
        );
    }

    #[test]
    fn test_config_error_parse_error_variant() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("this is not valid toml").unwrap_err();
        let display = format!("{}", toml_err);
        let config_err = ConfigError::ParseError(toml_err);

        assert_eq!(
            format!("{}", config_err),
            format!("Failed to parse configuration file: {}", display)
        );
        assert!(config_err.source().unwrap().is::<toml::de::Error>());
    }

    #[test]
    fn test_config_error_directory_unavailable_variant() {
        let config_err = ConfigError::DirectoryUnavailable { dir_type: "App Config".to_string() };
        assert_eq!(format!("{}", config_err), "Could not determine base directory for App Config");
        assert!(config_err.source().is_none());
    }
}
