//! File-based logging setup.
//!
//! Logs are written to a file (never stdout, since the menu owns the
//! terminal). If the log file cannot be opened the session runs without
//! logging rather than aborting.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};

/// Default log file name, placed in the system temp directory.
pub const DEFAULT_LOG_FILE: &str = "todolist.log";

/// Errors that can occur when opening the log file.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The path has no usable parent directory or file name.
    #[error("invalid log file path {0}")]
    InvalidPath(String),

    /// The log directory or file could not be created.
    #[error("failed to open log file: {0}")]
    Appender(#[from] InitError),
}

/// Opens a non-rotating appender writing to exactly `path`.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`LoggingError`] if `path` has no file name or the file cannot be
/// created.
pub fn file_appender(path: &Path) -> Result<RollingFileAppender, LoggingError> {
    let invalid = || LoggingError::InvalidPath(path.display().to_string());
    let file_name = path.file_name().and_then(|n| n.to_str()).ok_or_else(invalid)?;
    let log_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    Ok(RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(log_dir)?)
}

/// Initialize file-based logging.
///
/// `RUST_LOG` overrides `level`. Returns a [`WorkerGuard`] that must be held
/// until shutdown to ensure all buffered log entries are flushed, or `None`
/// if the log file could not be opened (a warning goes to stderr).
pub fn init(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join(DEFAULT_LOG_FILE);
    let log_path = file_path.unwrap_or(&default_path);

    let appender = match file_appender(log_path) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Warning: logging disabled: {e}");
            return None;
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}
