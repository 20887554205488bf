//! XDG Base Directory and Application-Specific Path Resolution.
//!
//! Resolves the directories NovaDE reads configuration from and writes state
//! (log files) to. It relies on the `directories-next` crate.
//!
//! - [`get_app_config_dir()`]: e.g., `~/.config/NovaDE`.
//! - [`get_app_state_dir()`]: e.g., `~/.local/state/NovaDE/NovaDE`.
//! - [`get_system_config_path_with_override()`]: `/etc/novade/config.toml`, or the
//!   value of `NOVADE_SYSTEM_CONFIG_PATH` when set.

use crate::error::{ConfigError, CoreError};
use directories_next::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "NovaDE";
const APPLICATION: &str = "NovaDE";

/// Environment variable overriding the system-wide configuration file path.
pub const SYSTEM_CONFIG_ENV: &str = "NOVADE_SYSTEM_CONFIG_PATH";

const DEFAULT_SYSTEM_CONFIG_PATH: &str = "/etc/novade/config.toml";

/// Returns the application-specific configuration directory.
///
/// # Errors
/// Returns [`CoreError::Config(ConfigError::DirectoryUnavailable)`] if no home
/// directory can be determined.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CoreError::Config(ConfigError::DirectoryUnavailable {
            dir_type: "App Config".to_string(),
        }))
}

/// Returns the base directory for user-specific state files (`$XDG_STATE_HOME`).
///
/// `directories-next` has no state directory, so on Linux `XDG_STATE_HOME` is
/// honoured with `~/.local/state` as fallback; elsewhere the local data
/// directory is used.
pub fn get_state_base_dir() -> Result<PathBuf, CoreError> {
    BaseDirs::new()
        .map(|dirs| {
            #[cfg(target_os = "linux")]
            {
                match std::env::var("XDG_STATE_HOME") {
                    Ok(state_home) if !state_home.is_empty() => PathBuf::from(state_home),
                    _ => dirs.home_dir().join(".local/state"),
                }
            }
            #[cfg(not(target_os = "linux"))]
            {
                dirs.data_local_dir().to_path_buf()
            }
        })
        .ok_or_else(|| CoreError::Config(ConfigError::DirectoryUnavailable {
            dir_type: "State Base".to_string(),
        }))
}

/// Returns the application-specific state directory, where relative log file
/// paths are anchored.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    get_state_base_dir().map(|base_state| base_state.join(ORGANIZATION).join(APPLICATION))
}

/// Returns the system-wide configuration file path.
///
/// An empty override is treated as unset.
pub fn get_system_config_path_with_override() -> PathBuf {
    match std::env::var(SYSTEM_CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_SYSTEM_CONFIG_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_valid_path(res: Result<PathBuf, CoreError>, dir_type: &str) {
        match res {
            Ok(path) => {
                assert!(path.is_absolute(), "Path for {} is not absolute: {:?}", dir_type, path);
            }
            // HOME may be unset on CI.
            Err(CoreError::Config(ConfigError::DirectoryUnavailable { .. })) => {}
            Err(e) => panic!("Expected Ok or DirectoryUnavailable for {}, got {:?}", dir_type, e),
        }
    }

    #[test]
    fn test_get_app_config_dir() {
        assert_is_valid_path(get_app_config_dir(), "App Config");
    }

    #[test]
    fn test_get_app_state_dir_ends_with_app_components() {
        let res = get_app_state_dir();
        if let Ok(path) = &res {
            assert!(path.ends_with("NovaDE/NovaDE"), "unexpected state dir {:?}", path);
        }
        assert_is_valid_path(res, "App State");
    }
}
