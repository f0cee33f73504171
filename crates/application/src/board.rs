//! Job Board
//!
//! Wires both repositories to one snapshot store and one notification sink,
//! rehydrating them before first use.

use crate::builder_repository::BuilderRepository;
use crate::job_repository::JobRepository;
use jobboard_core::{Builder, Job, LegacyBuilder, StatusCounts};
use jobboard_ports::{NotificationSink, SnapshotStore};
use std::sync::Arc;

/// Builder shown for a job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignedBuilder<'a> {
    /// Builder found in the builder collection
    Registered(&'a Builder),
    /// Name/contact stored on the job itself by older snapshots
    Inline(&'a LegacyBuilder),
}

impl AssignedBuilder<'_> {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Registered(builder) => Some(&builder.name),
            Self::Inline(legacy) => legacy.name.as_deref(),
        }
    }

    pub fn contact(&self) -> Option<&str> {
        match self {
            Self::Registered(builder) => Some(&builder.contact),
            Self::Inline(legacy) => legacy.contact.as_deref(),
        }
    }
}

pub struct JobBoard {
    jobs: JobRepository,
    builders: BuilderRepository,
}

impl JobBoard {
    /// Load both collections from `store`
    pub fn open(store: Arc<dyn SnapshotStore>, notifications: Arc<dyn NotificationSink>) -> Self {
        Self {
            jobs: JobRepository::rehydrate(store.clone(), notifications.clone()),
            builders: BuilderRepository::rehydrate(store, notifications),
        }
    }

    pub fn jobs(&self) -> &JobRepository {
        &self.jobs
    }

    pub fn jobs_mut(&mut self) -> &mut JobRepository {
        &mut self.jobs
    }

    pub fn builders(&self) -> &BuilderRepository {
        &self.builders
    }

    pub fn builders_mut(&mut self) -> &mut BuilderRepository {
        &mut self.builders
    }

    /// Resolve the builder for `job`.
    ///
    /// A `builder_id` that matches no builder counts as unassigned; the
    /// inline fields of legacy jobs are used only when no registered builder
    /// is found.
    pub fn builder_for<'a>(&'a self, job: &'a Job) -> Option<AssignedBuilder<'a>> {
        if let Some(builder) = job
            .builder_id
            .as_ref()
            .and_then(|id| self.builders.find_by_id(id))
        {
            return Some(AssignedBuilder::Registered(builder));
        }

        job.legacy_builder.as_ref().map(AssignedBuilder::Inline)
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.jobs.status_counts()
    }
}
