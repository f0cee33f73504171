//! Snapshot Store Port
//!
//! Durable snapshots of the job and builder collections. Every save is a
//! full-collection overwrite; every load returns the whole collection.

use crate::StoreError;
use jobboard_core::{Builder, Job};

/// Snapshot persistence port
pub trait SnapshotStore: Send + Sync {
    /// Overwrite the stored job collection, preserving order
    fn save_jobs(&self, jobs: &[Job]) -> Result<(), StoreError>;

    /// Stored job collection; empty when absent or unreadable
    fn load_jobs(&self) -> Vec<Job>;

    /// Overwrite the stored builder collection, preserving order
    fn save_builders(&self, builders: &[Builder]) -> Result<(), StoreError>;

    /// Stored builder collection; empty when absent or unreadable
    fn load_builders(&self) -> Vec<Builder>;
}
