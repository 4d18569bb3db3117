//! Storage trait abstraction.

use async_trait::async_trait;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Key/value persistence for Habitally collections.
///
/// Keys are the collection names (`habits`, `goals`, ...); values are the
/// encoded bytes. Backends are swappable so tests can run in memory.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Bytes stored under `key`, or `None` if nothing was stored.
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `bytes` under `key`, replacing any previous value.
    async fn save(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Forget `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<()>;
}
