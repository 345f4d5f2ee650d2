//! Diagnostic logging to disk.
//!
//! The terminal is owned by the UI, so `tracing` output is written to a daily
//! log file instead. Files are named `star-countdown_<date>.log` and stored in
//! the configured log directory (default: `~/.local/share/star-countdown/logs/`).
//! `RUST_LOG` overrides the configured level.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns the log file path, or `None` if
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let path = log_dir.join(log_file_name(chrono::Local::now().date_naive()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("star_countdown={}", config.level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}

fn log_file_name(date: NaiveDate) -> String {
    format!("star-countdown_{}.log", date.format("%Y-%m-%d"))
}

/// Expand a leading `~` to the home directory.
fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches(['/', '\\']));
        }
    }
    Path::new(dir).to_path_buf()
}
