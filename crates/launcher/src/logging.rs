// Chunk: docs/chunks/launcher_logging - Structured logging to a file
//! Logging to a file in the user's cache directory.
//!
//! The terminal owns stdout and stderr while the launcher runs, so log output
//! goes to `<cache_dir>/arun/arun.log` through a non-blocking writer. The
//! level comes from `RUST_LOG` and defaults to `warn`.
//!
//! # Usage
//!
//! ```rust,ignore
//! // Keep the guard alive for the duration of the program
//! let _guard = arun::logging::init();
//! tracing::info!(command = "firefox", "committing");
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Application name used for the cache directory.
const APP_NAME: &str = "arun";

/// Log file name.
const LOG_FILENAME: &str = "arun.log";

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Returns the path of the log file, if the cache directory is known.
pub fn log_path() -> Option<PathBuf> {
    Some(dirs::cache_dir()?.join(APP_NAME).join(LOG_FILENAME))
}

/// Initializes logging.
///
/// Returns `None`, leaving logging disabled, when the log file cannot be
/// opened. Logging is never fatal.
pub fn init() -> Option<LoggingGuard> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let (writer, file_guard) = tracing_appender::non_blocking(file);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    tracing::debug!(log_path = %path.display(), "logging initialized");

    Some(LoggingGuard {
        _file_guard: file_guard,
    })
}
