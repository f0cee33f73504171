//! Builder Repository
//!
//! Append-only builder collection, newest first.

use jobboard_core::{BoardEvent, Builder, BuilderId, NewBuilder};
use jobboard_ports::{NotificationSink, SnapshotStore};
use std::sync::Arc;
use tracing::{error, info};

pub struct BuilderRepository {
    builders: Vec<Builder>,
    store: Arc<dyn SnapshotStore>,
    notifications: Arc<dyn NotificationSink>,
}

impl BuilderRepository {
    pub fn new(store: Arc<dyn SnapshotStore>, notifications: Arc<dyn NotificationSink>) -> Self {
        Self {
            builders: Vec::new(),
            store,
            notifications,
        }
    }

    /// Repository holding the builders last written to the store
    pub fn rehydrate(
        store: Arc<dyn SnapshotStore>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        let builders = store.load_builders();
        info!("Rehydrated {} builders", builders.len());
        Self {
            builders,
            store,
            notifications,
        }
    }

    pub fn builders(&self) -> &[Builder] {
        &self.builders
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Add a builder at the head of the collection
    pub fn create_builder(&mut self, new_builder: NewBuilder) -> Builder {
        let builder = Builder::new(new_builder);
        info!(builder_id = %builder.id, name = %builder.name, "Builder added");

        self.builders.insert(0, builder.clone());
        self.notifications.notify(BoardEvent::builder_added(&builder));

        if let Err(e) = self.store.save_builders(&self.builders) {
            error!("Failed to persist {} builders: {}", self.builders.len(), e);
        }
        builder
    }

    pub fn find_by_id(&self, id: &BuilderId) -> Option<&Builder> {
        self.builders.iter().find(|builder| &builder.id == id)
    }
}
