//! Test doubles for the storage and notification ports

use jobboard_core::{BoardEvent, Builder, Job};
use jobboard_ports::{NotificationSink, SnapshotStore, StoreError};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Snapshot store keeping the last saved collections in memory
#[derive(Default)]
pub struct MockSnapshotStore {
    jobs: Mutex<Vec<Job>>,
    builders: Mutex<Vec<Builder>>,
    saves: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MockSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(jobs: Vec<Job>, builders: Vec<Builder>) -> Self {
        Self {
            jobs: Mutex::new(jobs),
            builders: Mutex::new(builders),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        let store = Self::default();
        store.fail_writes.store(true, Ordering::SeqCst);
        store
    }

    pub fn saved_jobs(&self) -> Vec<Job> {
        self.jobs.lock().unwrap().clone()
    }

    pub fn saved_builders(&self) -> Vec<Builder> {
        self.builders.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("store full".to_string()));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl SnapshotStore for MockSnapshotStore {
    fn save_jobs(&self, jobs: &[Job]) -> Result<(), StoreError> {
        self.check_writable()?;
        *self.jobs.lock().unwrap() = jobs.to_vec();
        Ok(())
    }

    fn load_jobs(&self) -> Vec<Job> {
        self.saved_jobs()
    }

    fn save_builders(&self, builders: &[Builder]) -> Result<(), StoreError> {
        self.check_writable()?;
        *self.builders.lock().unwrap() = builders.to_vec();
        Ok(())
    }

    fn load_builders(&self) -> Vec<Builder> {
        self.saved_builders()
    }
}

/// Notification sink remembering every event it received
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<BoardEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<BoardEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.events().iter().map(BoardEvent::kind).collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, event: BoardEvent) {
        self.events.lock().unwrap().push(event);
    }
}
