//! Adapters - Infrastructure Implementations
//!
//! This crate contains the implementations of the ports defined in jobboard-ports.

pub mod bus;
pub mod config;
pub mod memory;
pub mod redb;
pub mod snapshot;
pub mod store_factory;

pub use crate::bus::{BroadcastNotificationSink, NotificationReceiver};
pub use crate::config::{AppConfig, ConfigError, LogFormat, LoggingConfig, NotificationConfig, StoreConfig};
pub use crate::memory::InMemoryKeyValueStore;
pub use crate::redb::RedbKeyValueStore;
pub use crate::snapshot::KeyValueSnapshotStore;
pub use crate::store_factory::open_key_value_store;
