//! Broadcast notification sink using tokio::broadcast
//!
//! Concrete implementation of the NotificationSink port. Every subscriber
//! gets its own copy of each board event. Publishing never blocks and never
//! fails the operation that raised the event: with no subscribers the event
//! is only logged.

use jobboard_core::{BoardEvent, EventSeverity};
use jobboard_ports::NotificationSink;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;
use tracing::{debug, info, warn};

/// Default channel capacity
pub const DEFAULT_CAPACITY: usize = 64;

/// Notification sink fanning events out to any number of receivers
pub struct BroadcastNotificationSink {
    sender: broadcast::Sender<BoardEvent>,
    capacity: usize,
}

impl BroadcastNotificationSink {
    /// Create a new sink with the specified capacity
    ///
    /// A zero capacity is raised to one, since the channel needs room for at
    /// least one event.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self { sender, capacity }
    }

    /// Get the configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get number of receivers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Receive every event published from now on
    pub fn subscribe(&self) -> NotificationReceiver {
        NotificationReceiver {
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for BroadcastNotificationSink {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl NotificationSink for BroadcastNotificationSink {
    fn notify(&self, event: BoardEvent) {
        match event.severity() {
            EventSeverity::Destructive => warn!(kind = event.kind(), "{}", event.description()),
            EventSeverity::Info => info!(kind = event.kind(), "{}", event.description()),
        }

        if self.sender.send(event).is_err() {
            debug!("No notification subscribers; event dropped");
        }
    }
}

/// Event receiver wrapper
#[derive(Debug)]
pub struct NotificationReceiver {
    receiver: broadcast::Receiver<BoardEvent>,
}

impl NotificationReceiver {
    /// Next pending event, without waiting
    ///
    /// Events this receiver fell too far behind on are skipped.
    pub fn try_next(&mut self) -> Option<BoardEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(missed)) => {
                    warn!("Notification receiver lagged; {} events skipped", missed);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    /// All events currently pending, oldest first
    pub fn drain(&mut self) -> Vec<BoardEvent> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}
