//! Storage errors.

use thiserror::Error;

/// Errors from the key-value store and session layers.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to acquire the store.
    #[error("Store error: {0}")]
    Store(String),

    /// Key not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Insert-only write hit an existing key.
    #[error("Key already exists: {0}")]
    Conflict(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}
