//! Job Board Core - Domain entities and value objects
//!
//! This crate contains the job and builder entities, the job status
//! lifecycle, the notification events raised by the board and the
//! persisted record shapes used by snapshot storage.

pub mod builder;
pub mod error;
pub mod events;
pub mod job;
pub mod job_status;
pub mod mappers;
pub mod timestamp;

pub use crate::builder::{Builder, BuilderDraft, BuilderId, NewBuilder};
pub use crate::error::DomainError;
pub use crate::events::{BoardEvent, EventSeverity};
pub use crate::job::{Job, JobDraft, JobId, LegacyBuilder, NewJob};
pub use crate::job_status::{JobStatus, StatusCounts};
pub use crate::mappers::{BuilderRecord, JobRecord, SnapshotRecord};
pub use chrono::{DateTime, Utc};

// Domain result type
pub type Result<T> = std::result::Result<T, DomainError>;
