//! Tracing subscriber setup.
//!
//! The interactive form owns the terminal, so it logs to a daily-rolling file
//! under `$THOUGHTBOX_HOME/logs`. One-shot commands log to stderr.
//! The filter is read from `THOUGHTBOX_LOG` (e.g. `debug`, `thoughtbox_core=trace`).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "THOUGHTBOX_LOG";

const LOG_FILE_PREFIX: &str = "thoughtbox.log";

/// Where log records go.
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Human-readable records on stderr (default level `warn`).
    Stderr,
    /// Daily-rolling files in the given directory (default level `info`).
    File(PathBuf),
}

/// Installs the global subscriber.
///
/// Keep the returned guard alive until exit so buffered file records flush.
///
/// # Errors
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init(target: LogTarget) -> Result<Option<WorkerGuard>> {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter("warn"))
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .try_init()
                .context("Failed to install stderr logger")?;
            Ok(None)
        }
        LogTarget::File(dir) => {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(env_filter("info"))
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .try_init()
                .context("Failed to install file logger")?;
            Ok(Some(guard))
        }
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}
