//! Logging bootstrap.
//!
//! Responsibilities:
//! - Install the global `tracing` subscriber once per process.
//! - Route logs to daily-rotated files when a log directory is given.
//!
//! Invariants:
//! - The interactive editor never logs to stderr; it would draw over the UI.
//! - The returned guard must live until exit so buffered lines are flushed.

use std::path::Path;

use anyhow::{Context, Result};
use keyscope_config::constants::LOG_FILE_NAME;
use tracing_appender::non_blocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter when `RUST_LOG` is unset and logs go to stderr.
const STDERR_DEFAULT_FILTER: &str = "warn";

/// Initialise logging. Honors `RUST_LOG` through `EnvFilter`.
pub fn init_logging(log_dir: Option<&Path>, interactive: bool) -> Result<Option<WorkerGuard>> {
    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Ok(Some(guard))
        }
        None if interactive => Ok(None),
        None => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(STDERR_DEFAULT_FILTER));
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
            Ok(None)
        }
    }
}
