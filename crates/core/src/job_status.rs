//! Job status lifecycle
//!
//! The lifecycle is a flat enumeration. Any status may move to any other
//! status; there is no transition graph.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a painting job
///
/// Ordering follows display order; it places no constraint on transitions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum JobStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "touch-ups-1")]
    TouchUps1,
    #[serde(rename = "touch-ups-2")]
    TouchUps2,
    #[serde(rename = "ready")]
    Ready,
    #[serde(rename = "completed")]
    Completed,
}

impl JobStatus {
    /// Every status, in board display order
    pub const ALL: [JobStatus; 6] = [
        JobStatus::Pending,
        JobStatus::InProgress,
        JobStatus::TouchUps1,
        JobStatus::TouchUps2,
        JobStatus::Ready,
        JobStatus::Completed,
    ];

    /// Wire value stored in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::InProgress => "in-progress",
            JobStatus::TouchUps1 => "touch-ups-1",
            JobStatus::TouchUps2 => "touch-ups-2",
            JobStatus::Ready => "ready",
            JobStatus::Completed => "completed",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::InProgress => "In Progress",
            JobStatus::TouchUps1 => "Touch Ups 1",
            JobStatus::TouchUps2 => "Touch Ups 2",
            JobStatus::Ready => "Ready",
            JobStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::InvalidStatus(s.to_string()))
    }
}

/// Number of jobs per status, plus the collection size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub touch_ups_1: usize,
    pub touch_ups_2: usize,
    pub ready: usize,
    pub completed: usize,
}

impl StatusCounts {
    /// Tally a sequence of statuses
    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = JobStatus>,
    {
        statuses.into_iter().fold(Self::default(), |mut counts, status| {
            counts.total += 1;
            *counts.slot_mut(status) += 1;
            counts
        })
    }

    pub fn get(&self, status: JobStatus) -> usize {
        match status {
            JobStatus::Pending => self.pending,
            JobStatus::InProgress => self.in_progress,
            JobStatus::TouchUps1 => self.touch_ups_1,
            JobStatus::TouchUps2 => self.touch_ups_2,
            JobStatus::Ready => self.ready,
            JobStatus::Completed => self.completed,
        }
    }

    /// Per-status counts in display order
    pub fn iter(&self) -> impl Iterator<Item = (JobStatus, usize)> + '_ {
        JobStatus::ALL
            .into_iter()
            .map(move |status| (status, self.get(status)))
    }

    /// Sum of the per-status buckets; always equals `total`
    pub fn bucket_sum(&self) -> usize {
        self.iter().map(|(_, count)| count).sum()
    }

    fn slot_mut(&mut self, status: JobStatus) -> &mut usize {
        match status {
            JobStatus::Pending => &mut self.pending,
            JobStatus::InProgress => &mut self.in_progress,
            JobStatus::TouchUps1 => &mut self.touch_ups_1,
            JobStatus::TouchUps2 => &mut self.touch_ups_2,
            JobStatus::Ready => &mut self.ready,
            JobStatus::Completed => &mut self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values_round_trip_through_from_str() {
        for status in JobStatus::ALL {
            assert_eq!(status.as_str().parse::<JobStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_rejects_unknown_values() {
        let err = "done".parse::<JobStatus>().unwrap_err();
        assert_eq!(err, DomainError::InvalidStatus("done".to_string()));

        // Wire values are case-sensitive
        assert!("Pending".parse::<JobStatus>().is_err());
        assert!("touch-ups-3".parse::<JobStatus>().is_err());
    }

    #[test]
    fn test_status_serde_uses_wire_values() {
        let json = serde_json::to_string(&JobStatus::TouchUps2).unwrap();
        assert_eq!(json, "\"touch-ups-2\"");

        let status: JobStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, JobStatus::InProgress);
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(JobStatus::default(), JobStatus::Pending);
    }

    #[test]
    fn test_labels() {
        assert_eq!(JobStatus::InProgress.label(), "In Progress");
        assert_eq!(JobStatus::TouchUps1.label(), "Touch Ups 1");
        assert_eq!(JobStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_tally_empty_collection() {
        let counts = StatusCounts::tally(std::iter::empty());
        assert_eq!(counts.total, 0);
        assert_eq!(counts.bucket_sum(), 0);
    }

    #[test]
    fn test_tally_buckets_sum_to_total() {
        let statuses = [
            JobStatus::Pending,
            JobStatus::Pending,
            JobStatus::Ready,
            JobStatus::TouchUps1,
            JobStatus::Completed,
            JobStatus::TouchUps2,
            JobStatus::InProgress,
        ];
        let counts = StatusCounts::tally(statuses);

        assert_eq!(counts.total, 7);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.get(JobStatus::Ready), 1);
        assert_eq!(counts.bucket_sum(), counts.total);
        assert_eq!(
            counts.iter().map(|(status, _)| status).collect::<Vec<_>>(),
            JobStatus::ALL.to_vec()
        );
    }
}
