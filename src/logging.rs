//! Logging setup
//!
//! Filter comes from `WORDLE_LOG` (standard `tracing` directives), falling
//! back to the given default level.

use anyhow::{Result, anyhow};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "WORDLE_LOG";

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Log to stderr
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_stderr(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}

/// Log to a file, appending
///
/// Used by the TUI, where stderr output would corrupt the screen.
///
/// # Errors
///
/// Returns an error if the file can't be opened or a subscriber is already
/// installed.
pub fn init_file(path: &Path, default_level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}

/// Log the TUI to `path`, or not at all
///
/// Anything written to stderr would land on the alternate screen, so when
/// there is no usable log file no subscriber is installed. Returns whether
/// logging is active.
pub fn init_tui(path: Option<&Path>, default_level: &str) -> bool {
    path.is_some_and(|path| init_file(path, default_level).is_ok())
}
