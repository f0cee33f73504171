//! Key-Value Store Port
//!
//! A process-wide text store holding one value per key, the way a browser's
//! local storage does. Snapshot adapters sit on top of it.

/// Key-value text store port
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Storage error
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("failed to encode snapshot: {0}")]
    Encode(String),

    #[error("store lock poisoned")]
    LockPoisoned,
}
