//! Error types shared across the crate
//!
//! None of these are fatal: callers log them and fall back to in-memory play.

use thiserror::Error;

/// Failures of the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// Stored payload exists but is not a valid history
    #[error("Stored history is malformed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The backing store could not be read or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),
}

/// Failures rebuilding a session from stored data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The snapshot describes a state the session could never reach
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}
