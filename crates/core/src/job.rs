//! Job Domain Entity
//!
//! A job is a painting work order moving through the status lifecycle.
//! Builders are referenced by id only; a job never owns its builder.

use crate::builder::BuilderId;
use crate::error::DomainError;
use crate::job_status::JobStatus;
use crate::{Result, timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Job identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Builder details stored inline on jobs written before builders became
/// their own collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyBuilder {
    pub name: Option<String>,
    pub contact: Option<String>,
}

/// Job aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub job_number: String,
    pub address: String,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub builder_id: Option<BuilderId>,
    pub legacy_builder: Option<LegacyBuilder>,
}

impl Job {
    /// Create a job with a fresh id; `created_at == updated_at`
    pub fn new(new_job: NewJob) -> Self {
        let now = timestamp::now();
        Self {
            id: JobId::generate(),
            job_number: new_job.job_number,
            address: new_job.address,
            status: new_job.status,
            created_at: now,
            updated_at: now,
            notes: new_job.notes,
            builder_id: new_job.builder_id,
            legacy_builder: None,
        }
    }

    /// Move the job to `status`, whatever its current status is.
    ///
    /// Returns the previous status.
    pub fn set_status(&mut self, status: JobStatus) -> JobStatus {
        let previous = self.status;
        self.status = status;
        // updated_at never precedes created_at, even if the clock stepped back
        self.updated_at = timestamp::now().max(self.created_at);
        previous
    }
}

/// Raw job form input
#[derive(Debug, Clone, Default)]
pub struct JobDraft {
    pub job_number: String,
    pub address: String,
    pub status: JobStatus,
    pub notes: Option<String>,
    pub builder_id: Option<BuilderId>,
}

impl JobDraft {
    pub fn new(job_number: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            job_number: job_number.into(),
            address: address.into(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_builder(mut self, builder_id: BuilderId) -> Self {
        self.builder_id = Some(builder_id);
        self
    }

    /// Trim the form fields and reject blank required values
    ///
    /// Blank notes become absent.
    ///
    /// # Errors
    /// Returns `DomainError::Validation` if the job number or address is blank
    pub fn validate(self) -> Result<NewJob> {
        let job_number = self.job_number.trim();
        if job_number.is_empty() {
            return Err(DomainError::empty_field("job number"));
        }

        let address = self.address.trim();
        if address.is_empty() {
            return Err(DomainError::empty_field("address"));
        }

        let notes = self
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
            .map(str::to_string);

        Ok(NewJob {
            job_number: job_number.to_string(),
            address: address.to_string(),
            status: self.status,
            notes,
            builder_id: self.builder_id,
        })
    }
}

/// Validated job input, accepted by the job repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    job_number: String,
    address: String,
    status: JobStatus,
    notes: Option<String>,
    builder_id: Option<BuilderId>,
}

impl NewJob {
    pub fn job_number(&self) -> &str {
        &self.job_number
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn builder_id(&self) -> Option<&BuilderId> {
        self.builder_id.as_ref()
    }
}
