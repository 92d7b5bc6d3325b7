//! Runtime configuration
//!
//! Resolved once from CLI flags and the environment, then handed to the
//! commands. Precedence for the data directory: `--data-dir`, then
//! `WORDLE_DATA_DIR` (both via clap), then the platform data directory.

use crate::core::{SecretWord, WordError};
use crate::storage::{GAME_NAMESPACE, JsonFileStore, MemoryStore, Store};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Directory name under the platform data directory
pub const APP_DIR: &str = "wordle_daily";

/// Default secret word
pub const DEFAULT_WORD: &str = "hello";

/// Log file name inside the data directory
pub const LOG_FILE: &str = "wordle.log";

#[derive(Debug, Clone)]
pub struct Config {
    pub secret: SecretWord,
    /// `None` when no data directory could be determined
    pub data_dir: Option<PathBuf>,
    pub namespace: String,
}

impl Config {
    /// Build a config, falling back to the platform data directory
    ///
    /// # Errors
    ///
    /// Returns `WordError` if `word` is not a valid secret.
    pub fn new(word: &str, data_dir: Option<PathBuf>) -> Result<Self, WordError> {
        Ok(Self {
            secret: SecretWord::new(word)?,
            data_dir: data_dir.or_else(default_data_dir),
            namespace: GAME_NAMESPACE.to_string(),
        })
    }

    /// The history store for this config
    ///
    /// Without a data directory the history lives in memory only.
    #[must_use]
    pub fn store(&self) -> Arc<dyn Store> {
        if let Some(dir) = &self.data_dir {
            Arc::new(JsonFileStore::new(dir, &self.namespace))
        } else {
            tracing::warn!("no data directory available, history will not be saved");
            Arc::new(MemoryStore::new())
        }
    }

    /// Where the TUI writes its log, if anywhere
    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.data_dir.as_deref().map(|dir| dir.join(LOG_FILE))
    }

    #[must_use]
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }
}

fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR))
}
