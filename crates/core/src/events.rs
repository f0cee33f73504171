//! Board notification events
//!
//! Events raised by the repositories for the notification sink. The sink's
//! only job is to show them to the user.

use crate::builder::Builder;
use crate::job::Job;

/// How an event should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSeverity {
    Info,
    Destructive,
}

/// Event raised by a board mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A job was added to the board
    JobCreated { job_number: String },

    /// A job was moved to `ready`
    JobReady { job_number: String, address: String },

    /// A job was removed from the board
    JobDeleted { job_number: String },

    /// A builder was added
    BuilderAdded { name: String },
}

impl BoardEvent {
    pub fn job_created(job: &Job) -> Self {
        Self::JobCreated {
            job_number: job.job_number.clone(),
        }
    }

    pub fn job_ready(job: &Job) -> Self {
        Self::JobReady {
            job_number: job.job_number.clone(),
            address: job.address.clone(),
        }
    }

    pub fn job_deleted(job: &Job) -> Self {
        Self::JobDeleted {
            job_number: job.job_number.clone(),
        }
    }

    pub fn builder_added(builder: &Builder) -> Self {
        Self::BuilderAdded {
            name: builder.name.clone(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            BoardEvent::JobCreated { .. } => "created",
            BoardEvent::JobReady { .. } => "ready",
            BoardEvent::JobDeleted { .. } => "deleted",
            BoardEvent::BuilderAdded { .. } => "builder-added",
        }
    }

    pub fn severity(&self) -> EventSeverity {
        match self {
            BoardEvent::JobDeleted { .. } => EventSeverity::Destructive,
            _ => EventSeverity::Info,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BoardEvent::JobCreated { .. } => "Job Added",
            BoardEvent::JobReady { .. } => "Job Ready!",
            BoardEvent::JobDeleted { .. } => "Job Deleted",
            BoardEvent::BuilderAdded { .. } => "Builder Added",
        }
    }

    pub fn description(&self) -> String {
        match self {
            BoardEvent::JobCreated { job_number } => {
                format!("Job #{} has been created successfully.", job_number)
            }
            BoardEvent::JobReady {
                job_number,
                address,
            } => format!("Job #{} at {} is ready for review.", job_number, address),
            BoardEvent::JobDeleted { job_number } => {
                format!("Job #{} has been removed.", job_number)
            }
            BoardEvent::BuilderAdded { name } => {
                format!("{} has been added to your builders.", name)
            }
        }
    }
}
