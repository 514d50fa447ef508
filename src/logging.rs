//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the level given on the command line. When a log file
//! is given, output goes there so the full-screen UI stays intact.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor `--log-level` is set
pub const DEFAULT_LEVEL: &str = "warn";

/// Build the filter from `RUST_LOG`, falling back to `level`
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter directive.
pub fn filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log level: {level}"))
}

/// Install the global subscriber
///
/// Calling it again after a subscriber is installed has no effect.
///
/// # Errors
///
/// Returns an error if the level is invalid or the log file cannot be opened.
pub fn init(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = filter(level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };

    // Already installed (tests, embedding) is fine
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
