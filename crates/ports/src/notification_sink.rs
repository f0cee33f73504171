//! Notification Sink Port
//!
//! Receives human-readable board events. Delivery is fire-and-forget: the
//! sink acknowledges nothing and cannot fail the operation that raised the
//! event.

use jobboard_core::BoardEvent;

/// Notification sink port
pub trait NotificationSink: Send + Sync {
    fn notify(&self, event: BoardEvent);
}
