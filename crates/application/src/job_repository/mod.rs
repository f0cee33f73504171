//! Job Repository
//!
//! Owns the ordered job collection (newest first). Every mutation raises
//! its notification and then rewrites the job snapshot.

use jobboard_core::{BoardEvent, Job, JobId, JobStatus, NewJob, StatusCounts};
use jobboard_ports::{NotificationSink, SnapshotStore};
use std::sync::Arc;
use tracing::{debug, error, info};

pub struct JobRepository {
    jobs: Vec<Job>,
    store: Arc<dyn SnapshotStore>,
    notifications: Arc<dyn NotificationSink>,
}

impl JobRepository {
    /// Empty repository; nothing is read from the store
    pub fn new(store: Arc<dyn SnapshotStore>, notifications: Arc<dyn NotificationSink>) -> Self {
        Self {
            jobs: Vec::new(),
            store,
            notifications,
        }
    }

    /// Repository holding the collection last written to the store
    pub fn rehydrate(
        store: Arc<dyn SnapshotStore>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        let jobs = store.load_jobs();
        info!("Rehydrated {} jobs", jobs.len());
        Self {
            jobs,
            store,
            notifications,
        }
    }

    /// Jobs, newest first
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(&self, id: &JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| &job.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Add a job at the head of the collection
    pub fn create_job(&mut self, new_job: NewJob) -> Job {
        let job = Job::new(new_job);
        info!(job_id = %job.id, job_number = %job.job_number, "Job created");

        self.jobs.insert(0, job.clone());
        self.notifications.notify(BoardEvent::job_created(&job));
        self.persist();
        job
    }

    /// Move a job to `status`; any status may follow any other.
    ///
    /// Unknown ids are ignored and `None` is returned.
    pub fn update_status(&mut self, id: &JobId, status: JobStatus) -> Option<&Job> {
        let Some(index) = self.jobs.iter().position(|job| &job.id == id) else {
            debug!(job_id = %id, "Status update for unknown job ignored");
            return None;
        };

        let job = &mut self.jobs[index];
        let previous = job.set_status(status);
        info!(job_id = %id, from = %previous, to = %status, "Job status changed");

        if status == JobStatus::Ready {
            self.notifications.notify(BoardEvent::job_ready(job));
        }

        self.persist();
        self.jobs.get(index)
    }

    /// Remove a job; unknown ids are ignored and `None` is returned
    pub fn delete_job(&mut self, id: &JobId) -> Option<Job> {
        let Some(index) = self.jobs.iter().position(|job| &job.id == id) else {
            debug!(job_id = %id, "Delete for unknown job ignored");
            return None;
        };

        let job = self.jobs.remove(index);
        info!(job_id = %id, job_number = %job.job_number, "Job deleted");

        self.notifications.notify(BoardEvent::job_deleted(&job));
        self.persist();
        Some(job)
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::tally(self.jobs.iter().map(|job| job.status))
    }

    // Fire-and-forget: the in-memory collection stays authoritative
    fn persist(&self) {
        if let Err(e) = self.store.save_jobs(&self.jobs) {
            error!("Failed to persist {} jobs: {}", self.jobs.len(), e);
        }
    }
}
