//! Tracing setup.
//!
//! Logs go to a file under the vitrine home directory, never to
//! stdout/stderr: the TUI owns both streams while it runs. The returned
//! guard must be kept alive for the life of the process so buffered log
//! lines are flushed on exit.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber with a non-blocking file
/// writer under `log_dir`.
///
/// Filter resolution: `RUST_LOG` if set, otherwise `default_filter`,
/// otherwise "info". Returns `None` if a subscriber is already installed
/// (tests install their own).
pub fn init(log_dir: &Path, default_filter: Option<&str>) -> Result<Option<WorkerGuard>> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log dir {}", log_dir.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter.unwrap_or("info")));

    let file_appender = tracing_appender::rolling::never(log_dir, "vitrine.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => Ok(Some(guard)),
        // Global subscriber already installed; drop the guard so the
        // writer thread shuts down.
        Err(_) => Ok(None),
    }
}
