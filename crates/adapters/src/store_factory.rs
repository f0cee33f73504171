//! Key-value store factory
//!
//! Picks the backend named by the store configuration.

use crate::config::StoreConfig;
use crate::redb::RedbKeyValueStore;
use jobboard_ports::{KeyValueStore, StoreError};
use std::sync::Arc;
use tracing::info;

/// Open the key-value store described by `config`
pub fn open_key_value_store(config: &StoreConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    if config.is_in_memory() {
        info!("Using in-memory snapshot store; nothing will persist");
        return Ok(Arc::new(RedbKeyValueStore::in_memory()?));
    }

    Ok(Arc::new(RedbKeyValueStore::open(&config.path)?))
}
