//! Logging setup for the NovaDE compositor.
//!
//! Built on the `tracing` ecosystem: a console layer (text or JSON) plus an
//! optional daily-rolling file layer from `tracing-appender`. Call
//! [`init_minimal_logging`] as early as possible, then [`initialize_logging`]
//! once the configuration has been loaded.

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};
use crate::utils;

use once_cell::sync::Lazy;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Keeps the non-blocking file writer alive so buffered lines get flushed.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Filters by `RUST_LOG`, defaulting to "info". Errors (e.g. a global
/// subscriber already being set) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

fn level_filter(level: &str) -> Result<String, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE.to_string()),
        "debug" => Ok(Level::DEBUG.to_string()),
        "info" => Ok(Level::INFO.to_string()),
        "warn" => Ok(Level::WARN.to_string()),
        "error" => Ok(Level::ERROR.to_string()),
        invalid_level => Err(LoggingError::InitializationFailure(format!(
            "Invalid log level in config: {}",
            invalid_level
        ))),
    }
}

/// Creates a daily-rolling file logging layer in text or JSON format.
///
/// The parent directory of `log_path` is created if missing.
fn create_file_layer(log_path: &Path, format: &str) -> Result<(BoxedLayer, WorkerGuard), CoreError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    utils::fs::ensure_dir_exists(directory)?;

    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("compositor.log"));
    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer: BoxedLayer = match format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(non_blocking_writer)
            .with_ansi(false)
            .boxed(),
        _ => fmt::layer()
            .with_writer(non_blocking_writer)
            .with_ansi(false)
            .boxed(),
    };
    Ok((layer, guard))
}

/// Initializes the global logging system from a [`LoggingConfig`].
///
/// With `is_reload == true` a failure to install the subscriber (because one is
/// already installed) is reported at info level instead of returned, and the
/// file writer guard is still swapped.
///
/// # Errors
///
/// [`LoggingError::InitializationFailure`] for an invalid level or, on initial
/// setup, when a global subscriber already exists. [`CoreError::Filesystem`]
/// if the log directory cannot be created.
pub fn initialize_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let level = level_filter(&config.level)?;

    let stdout_layer: BoxedLayer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(EnvFilter::new(level.clone()))
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(EnvFilter::new(level.clone()))
            .boxed(),
    };

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer];
    let mut new_file_guard: Option<WorkerGuard> = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        new_file_guard = Some(guard);
        layers.push(file_layer.with_filter(EnvFilter::new(level)).boxed());
    }

    let result = Registry::default().with(layers).try_init();

    match LOG_WORKER_GUARD.lock() {
        Ok(mut guard_slot) => {
            // Dropping the previous guard flushes its pending lines.
            *guard_slot = new_file_guard;
        }
        Err(e) => {
            eprintln!("[ERROR] Failed to lock LOG_WORKER_GUARD to update: {}. Log flushing may be affected.", e);
        }
    }

    match result {
        Ok(()) => {
            tracing::debug!(level = %config.level, format = %config.format, file = ?config.file_path, "Logging initialized");
            Ok(())
        }
        Err(e) if is_reload => {
            tracing::info!("Logging re-initialization kept the existing subscriber: {}", e);
            Ok(())
        }
        Err(e) => Err(CoreError::Logging(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_minimal_logging_runs_twice_without_panic() {
        init_minimal_logging();
        init_minimal_logging();
        tracing::info!("Minimal logging test message.");
    }

    #[test]
    fn test_create_file_layer_formats() {
        let temp_dir = TempDir::new().unwrap();
        for format in ["text", "json", "TEXT"] {
            let log_path = temp_dir.path().join(format!("{}.log", format));
            let result = create_file_layer(&log_path, format);
            assert!(result.is_ok(), "create_file_layer failed for {}: {:?}", format, result.err());
        }
    }

    #[test]
    fn test_create_file_layer_ensures_parent_dir_exists() {
        let temp_dir = TempDir::new().unwrap();
        let nested_log_path = temp_dir.path().join("new_parent_dir/nested_log.log");
        assert!(!nested_log_path.parent().unwrap().exists());

        let result = create_file_layer(&nested_log_path, "text");
        assert!(result.is_ok(), "create_file_layer failed: {:?}", result.err());
        assert!(nested_log_path.parent().unwrap().exists());
    }

    #[test]
    fn test_initialize_logging_invalid_level_returns_error() {
        let config = LoggingConfig {
            level: "supertrace".to_string(),
            file_path: None,
            format: "text".to_string(),
        };
        match initialize_logging(&config, false) {
            Err(CoreError::Logging(LoggingError::InitializationFailure(msg))) => {
                assert!(msg.contains("Invalid log level in config: supertrace"));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_reload_swaps_worker_guard() {
        let temp_dir = TempDir::new().unwrap();
        let with_file = LoggingConfig {
            level: "info".to_string(),
            file_path: Some(temp_dir.path().join("guard_test.log")),
            format: "text".to_string(),
        };
        initialize_logging(&with_file, true).expect("reload with file should succeed");
        assert!(LOG_WORKER_GUARD.lock().unwrap().is_some());

        let without_file = LoggingConfig { file_path: None, ..with_file };
        initialize_logging(&without_file, true).expect("reload without file should succeed");
        assert!(LOG_WORKER_GUARD.lock().unwrap().is_none());
    }
}
