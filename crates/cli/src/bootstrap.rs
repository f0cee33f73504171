//! Board Bootstrap
//!
//! Turns an `AppConfig` into a rehydrated board plus a receiver for the
//! notifications its commands raise.

use jobboard_adapters::{
    AppConfig, BroadcastNotificationSink, ConfigError, KeyValueSnapshotStore, LogFormat,
    NotificationReceiver, open_key_value_store,
};
use jobboard_application::JobBoard;
use jobboard_ports::StoreError;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, BootstrapError>;

pub struct BoardComponents {
    pub board: JobBoard,
    pub notifications: NotificationReceiver,
}

/// Install the global subscriber; logs go to stderr so command output stays clean
pub fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub fn initialize_board(config: &AppConfig) -> Result<BoardComponents> {
    let backend = open_key_value_store(&config.store).map_err(|e| {
        error!("Failed to open snapshot store {}: {}", config.store.path, e);
        BootstrapError::Store(e)
    })?;
    let store = Arc::new(KeyValueSnapshotStore::with_keys(
        backend,
        config.store.jobs_key.clone(),
        config.store.builders_key.clone(),
    ));
    debug!("Snapshot store ready");

    let sink = Arc::new(BroadcastNotificationSink::new(
        config.notifications.capacity,
    ));
    let notifications = sink.subscribe();

    let board = JobBoard::open(store, sink);
    info!(
        jobs = board.jobs().len(),
        builders = board.builders().len(),
        "Job board loaded"
    );

    Ok(BoardComponents {
        board,
        notifications,
    })
}

pub fn log_config_summary(config: &AppConfig) {
    info!("Configuration Summary:");
    info!(
        "   Store: {} (jobs: {}, builders: {})",
        config.store.path, config.store.jobs_key, config.store.builders_key
    );
    info!(
        "   Notifications: capacity {}",
        config.notifications.capacity
    );
    info!(
        "   Logging: {} ({})",
        config.logging.level, config.logging.format
    );
}
