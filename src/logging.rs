//! Tracing subscriber setup.

use crate::settings::LogSettings;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Sends logs to the configured file so they don't draw over the TUI.
pub fn init_file(settings: &LogSettings) -> Result<()> {
    let log_file = std::fs::File::create(settings.file())
        .with_context(|| format!("Failed to create log file {}", settings.file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings.filter()))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Sends logs to stderr, keeping stdout for command output.
pub fn init_stderr(settings: &LogSettings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings.filter()))
        .with_writer(std::io::stderr)
        .try_init();
}
