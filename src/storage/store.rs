//! Durable key-value storage for the play history
//!
//! A store holds one raw payload per namespace (e.g. `@game`). The payload is
//! the JSON-serialized [`History`].

use super::{History, Snapshot};
use crate::error::StoreError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Namespace the history is stored under
pub const GAME_NAMESPACE: &str = "@game";

/// Backing storage for the history payload
///
/// Implementors only move raw strings; parsing and the read-modify-write
/// cycle of [`Store::save`] are shared.
#[async_trait]
pub trait Store: Send + Sync {
    /// Read the raw payload, `None` if nothing has ever been written
    async fn read_raw(&self) -> Result<Option<String>, StoreError>;

    /// Replace the raw payload. Readers never observe a partial write.
    async fn write_raw(&self, payload: &str) -> Result<(), StoreError>;

    /// Load the whole history
    ///
    /// An absent or blank payload is an empty history, not an error.
    ///
    /// # Errors
    ///
    /// `StoreError::Deserialization` if the payload is present but malformed,
    /// `StoreError::StorageUnavailable` if it can't be read.
    async fn load(&self) -> Result<History, StoreError> {
        match self.read_raw().await? {
            Some(raw) if !raw.trim().is_empty() => {
                serde_json::from_str(&raw).map_err(StoreError::Deserialization)
            }
            _ => Ok(History::new()),
        }
    }

    /// Store `snapshot` under `key`, keeping every other day
    ///
    /// A malformed existing payload is left untouched and nothing is written.
    ///
    /// # Errors
    ///
    /// `StoreError::Deserialization` if the existing payload is malformed,
    /// `StoreError::StorageUnavailable` if it can't be read or written.
    async fn save(&self, key: &str, snapshot: &Snapshot) -> Result<(), StoreError> {
        let mut history = self.load().await?;
        history.insert(key, snapshot.clone());

        let payload = serde_json::to_string(&history)
            .map_err(|e| StoreError::StorageUnavailable(std::io::Error::other(e)))?;
        self.write_raw(&payload).await
    }
}

/// History stored as a JSON file on disk
///
/// The namespace maps to a file name (`@game` → `game.json`). Writes go to a
/// sibling temp file which is then renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store for `namespace` inside `dir`
    #[must_use]
    pub fn new(dir: impl AsRef<Path>, namespace: &str) -> Self {
        let name = namespace.trim_start_matches('@');
        Self {
            path: dir.as_ref().join(format!("{name}.json")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn read_raw(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_raw(&self, payload: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let tmp_path = self.temp_path();
        let mut tmp_file = fs::File::create(&tmp_path).await?;
        tmp_file.write_all(payload.as_bytes()).await?;
        tmp_file.sync_all().await?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).await?;
        tracing::trace!(path = %self.path.display(), bytes = payload.len(), "history written");
        Ok(())
    }
}

/// In-memory store, for tests and for running without a data directory
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: Mutex<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw payload
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Mutex::new(Some(payload.into())),
        }
    }

    /// Current raw payload
    pub async fn payload(&self) -> Option<String> {
        self.payload.lock().await.clone()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn read_raw(&self) -> Result<Option<String>, StoreError> {
        Ok(self.payload.lock().await.clone())
    }

    async fn write_raw(&self, payload: &str) -> Result<(), StoreError> {
        *self.payload.lock().await = Some(payload.to_string());
        Ok(())
    }
}
