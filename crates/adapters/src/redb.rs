//! Redb (Embedded Key-Value Store) backend
//!
//! Holds snapshot text in a single `snapshots` table keyed by collection
//! name. Works against a database file or a purely in-memory backend.

use jobboard_ports::{KeyValueStore, StoreError};
use redb::backends::InMemoryBackend;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use tracing::{debug, info};

/// Table definition for snapshots - collection key to serialized text
const SNAPSHOTS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("snapshots");

/// Redb key-value store
pub struct RedbKeyValueStore {
    db: Database,
}

impl RedbKeyValueStore {
    /// Open (or create) a store backed by the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let db = Database::create(path).map_err(|e| {
            StoreError::Backend(format!(
                "Failed to open Redb database {}: {}",
                path.display(),
                e
            ))
        })?;

        info!("Opened Redb snapshot store at {}", path.display());
        Self::with_schema(db)
    }

    /// Create a store that lives only as long as this value
    pub fn in_memory() -> Result<Self, StoreError> {
        let db = Database::builder()
            .create_with_backend(InMemoryBackend::new())
            .map_err(|e| {
                StoreError::Backend(format!("Failed to create in-memory Redb database: {}", e))
            })?;

        Self::with_schema(db)
    }

    /// Make sure the snapshots table exists so reads never hit a missing table
    fn with_schema(db: Database) -> Result<Self, StoreError> {
        let tx = db.begin_write().map_err(|e| {
            StoreError::Backend(format!("Failed to begin transaction: {}", e))
        })?;

        tx.open_table(SNAPSHOTS_TABLE).map_err(|e| {
            StoreError::Backend(format!("Failed to create snapshots table: {}", e))
        })?;

        tx.commit().map_err(|e| {
            StoreError::Backend(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(Self { db })
    }
}

impl KeyValueStore for RedbKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let tx = self.db.begin_read().map_err(|e| {
            StoreError::Backend(format!("Failed to begin transaction: {}", e))
        })?;

        let table = tx.open_table(SNAPSHOTS_TABLE).map_err(|e| {
            StoreError::Backend(format!("Failed to open snapshots table: {}", e))
        })?;

        let value = table
            .get(key)
            .map_err(|e| StoreError::Backend(format!("Failed to read key {}: {}", key, e)))?;

        Ok(value.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let tx = self.db.begin_write().map_err(|e| {
            StoreError::Backend(format!("Failed to begin transaction: {}", e))
        })?;

        {
            let mut table = tx.open_table(SNAPSHOTS_TABLE).map_err(|e| {
                StoreError::Backend(format!("Failed to open snapshots table: {}", e))
            })?;

            table.insert(key, value).map_err(|e| {
                StoreError::Backend(format!("Failed to write key {}: {}", key, e))
            })?;
        }

        tx.commit().map_err(|e| {
            StoreError::Backend(format!("Failed to commit transaction: {}", e))
        })?;

        debug!("Wrote {} bytes under key {}", value.len(), key);
        Ok(())
    }
}
