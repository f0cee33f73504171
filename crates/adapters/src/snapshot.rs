//! Key-value snapshot store
//!
//! Serializes whole collections to JSON text and writes them under one key
//! per collection. Loading is permissive: a missing key or unreadable text
//! yields an empty collection, and a bad record is skipped rather than
//! failing the rest of the snapshot.
//!
//! Every save rewrites the full collection, so write cost grows with the
//! collection size. That is fine for a single user's board and is the known
//! scaling limit of this store.

use jobboard_core::{Builder, Job, SnapshotRecord};
use jobboard_ports::{KeyValueStore, SnapshotStore, StoreError};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Default key for the job collection
pub const DEFAULT_JOBS_KEY: &str = "painting-jobs";

/// Default key for the builder collection
pub const DEFAULT_BUILDERS_KEY: &str = "painting-builders";

/// Snapshot store over any key-value backend
#[derive(Clone)]
pub struct KeyValueSnapshotStore {
    backend: Arc<dyn KeyValueStore>,
    jobs_key: String,
    builders_key: String,
}

impl KeyValueSnapshotStore {
    /// Snapshot store using the default collection keys
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_keys(backend, DEFAULT_JOBS_KEY, DEFAULT_BUILDERS_KEY)
    }

    pub fn with_keys(
        backend: Arc<dyn KeyValueStore>,
        jobs_key: impl Into<String>,
        builders_key: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            jobs_key: jobs_key.into(),
            builders_key: builders_key.into(),
        }
    }

    /// Serialize `records` in order and overwrite whatever `key` held
    pub fn save<R: SnapshotRecord>(&self, key: &str, records: &[R]) -> Result<(), StoreError> {
        let rows: Vec<R::Record> = records.iter().map(SnapshotRecord::to_record).collect();
        let text = serde_json::to_string(&rows).map_err(|e| StoreError::Encode(e.to_string()))?;

        self.backend.set(key, &text)?;
        debug!("Saved {} records under {}", records.len(), key);
        Ok(())
    }

    /// Read the collection stored under `key`, in stored order
    pub fn load<R: SnapshotRecord>(&self, key: &str) -> Vec<R> {
        let text = match self.backend.get(key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("No snapshot stored under {}", key);
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read snapshot {}: {}", key, e);
                return Vec::new();
            }
        };

        let rows: Vec<serde_json::Value> = match serde_json::from_str(&text) {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Discarding unreadable snapshot {}: {}", key, e);
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(rows.len());

        for (index, row) in rows.into_iter().enumerate() {
            let record = match serde_json::from_value::<R::Record>(row) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping record {} in {}: {}", index, key, e);
                    continue;
                }
            };

            match R::from_record(record) {
                Ok(entity) => {
                    if seen.insert(entity.record_id().to_string()) {
                        records.push(entity);
                    } else {
                        warn!(
                            "Skipping record {} in {}: duplicate id {}",
                            index,
                            key,
                            entity.record_id()
                        );
                    }
                }
                Err(e) => warn!("Skipping record {} in {}: {}", index, key, e),
            }
        }

        debug!("Loaded {} records from {}", records.len(), key);
        records
    }
}

impl SnapshotStore for KeyValueSnapshotStore {
    fn save_jobs(&self, jobs: &[Job]) -> Result<(), StoreError> {
        self.save(&self.jobs_key, jobs)
    }

    fn load_jobs(&self) -> Vec<Job> {
        self.load(&self.jobs_key)
    }

    fn save_builders(&self, builders: &[Builder]) -> Result<(), StoreError> {
        self.save(&self.builders_key, builders)
    }

    fn load_builders(&self) -> Vec<Builder> {
        self.load(&self.builders_key)
    }
}
