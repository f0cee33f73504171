//! Ports - Abstraction Layer
//!
//! This crate defines ports (traits) that represent the interfaces
//! needed by the application layer. These are implemented by adapters
//! in the infrastructure layer.

pub mod key_value_store;
pub mod notification_sink;
pub mod snapshot_store;

pub use crate::key_value_store::{KeyValueStore, StoreError};
pub use crate::notification_sink::NotificationSink;
pub use crate::snapshot_store::SnapshotStore;
