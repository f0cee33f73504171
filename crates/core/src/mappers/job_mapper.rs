//! Job record mapper
//!
//! Persisted job shape (camelCase JSON):
//! `id`, `jobNumber`, `address`, `status`, `createdAt`, `updatedAt`,
//! optional `notes`, and either `builderId` or the legacy inline
//! `builderName`/`builderContact` pair.

use super::{SnapshotRecord, lenient_text, non_blank, required};
use crate::{BuilderId, Job, JobId, JobStatus, LegacyBuilder, timestamp};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Stored representation of a [`Job`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub builder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub builder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_text")]
    pub builder_contact: Option<String>,
}

impl SnapshotRecord for Job {
    type Record = JobRecord;

    fn to_record(&self) -> JobRecord {
        let legacy = self.legacy_builder.as_ref();
        JobRecord {
            id: Some(self.id.to_string()),
            job_number: Some(self.job_number.clone()),
            address: Some(self.address.clone()),
            status: Some(self.status.as_str().to_string()),
            created_at: Some(timestamp::format(&self.created_at)),
            updated_at: Some(timestamp::format(&self.updated_at)),
            notes: self.notes.clone(),
            builder_id: self.builder_id.as_ref().map(ToString::to_string),
            builder_name: legacy.and_then(|b| b.name.clone()),
            builder_contact: legacy.and_then(|b| b.contact.clone()),
        }
    }

    fn from_record(record: JobRecord) -> crate::Result<Self> {
        let id = required(record.id, "id")?;
        let job_number = required(record.job_number, "jobNumber")?;
        let address = required(record.address, "address")?;
        let status = required(record.status, "status")?.parse::<JobStatus>()?;
        let created_at = timestamp::parse(&required(record.created_at, "createdAt")?)?;

        // Missing or unreadable updatedAt falls back to createdAt; it can
        // never precede createdAt
        let updated_at = match non_blank(record.updated_at) {
            Some(text) => match timestamp::parse(&text) {
                Ok(ts) => ts.max(created_at),
                Err(e) => {
                    warn!("Job {}: {}; using createdAt", id, e);
                    created_at
                }
            },
            None => created_at,
        };

        let builder_name = non_blank(record.builder_name);
        let builder_contact = non_blank(record.builder_contact);
        let legacy_builder = if builder_name.is_some() || builder_contact.is_some() {
            Some(LegacyBuilder {
                name: builder_name,
                contact: builder_contact,
            })
        } else {
            None
        };

        Ok(Job {
            id: JobId::new(id),
            job_number,
            address,
            status,
            created_at,
            updated_at,
            notes: non_blank(record.notes),
            builder_id: non_blank(record.builder_id).map(BuilderId::new),
            legacy_builder,
        })
    }

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DomainError, JobDraft};
    use chrono::{TimeZone, Utc};

    fn create_test_job() -> Job {
        Job::new(
            JobDraft::new("PJ-001", "123 Main St")
                .with_notes("Two coats on the trim")
                .with_builder(BuilderId::from("builder-1"))
                .validate()
                .unwrap(),
        )
    }

    #[test]
    fn test_to_record_from_record() {
        let job = create_test_job();

        let record = job.to_record();
        assert_eq!(record.status.as_deref(), Some("pending"));
        assert_eq!(record.builder_id.as_deref(), Some("builder-1"));
        assert!(record.builder_name.is_none());

        let restored = Job::from_record(record).unwrap();
        assert_eq!(restored, job);
    }

    #[test]
    fn test_record_json_shape() {
        let mut job = create_test_job();
        job.notes = None;
        job.builder_id = None;
        job.created_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        job.updated_at = job.created_at;

        let json = serde_json::to_value(job.to_record()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object["jobNumber"], "PJ-001");
        assert_eq!(object["createdAt"], "2024-05-01T09:30:00.000Z");
        assert!(!object.contains_key("notes"));
        assert!(!object.contains_key("builderId"));
    }

    #[test]
    fn test_from_record_reads_legacy_inline_builder() {
        let json = r#"{
            "id": "a1",
            "jobNumber": "PJ-9",
            "address": "1 Oak Ave",
            "status": "ready",
            "createdAt": "2024-01-02T03:04:05.006Z",
            "updatedAt": "2024-01-03T03:04:05.006Z",
            "builderName": "Old Mate Builders",
            "builderContact": ""
        }"#;
        let record: JobRecord = serde_json::from_str(json).unwrap();
        let job = Job::from_record(record).unwrap();

        assert_eq!(job.status, JobStatus::Ready);
        assert!(job.builder_id.is_none());
        let legacy = job.legacy_builder.clone().unwrap();
        assert_eq!(legacy.name.as_deref(), Some("Old Mate Builders"));
        assert!(legacy.contact.is_none());

        // Legacy fields survive a save
        let record = job.to_record();
        assert_eq!(record.builder_name.as_deref(), Some("Old Mate Builders"));
        assert!(record.builder_contact.is_none());
    }

    #[test]
    fn test_from_record_missing_updated_at_falls_back_to_created_at() {
        let record = JobRecord {
            id: Some("a1".to_string()),
            job_number: Some("PJ-1".to_string()),
            address: Some("1 Oak Ave".to_string()),
            status: Some("pending".to_string()),
            created_at: Some("2024-01-02T03:04:05.006Z".to_string()),
            ..Default::default()
        };

        let job = Job::from_record(record).unwrap();
        assert_eq!(job.updated_at, job.created_at);
    }

    #[test]
    fn test_from_record_clamps_updated_at_before_created_at() {
        let record = JobRecord {
            id: Some("a1".to_string()),
            job_number: Some("PJ-1".to_string()),
            address: Some("1 Oak Ave".to_string()),
            status: Some("completed".to_string()),
            created_at: Some("2024-01-02T00:00:00.000Z".to_string()),
            updated_at: Some("2024-01-01T00:00:00.000Z".to_string()),
            ..Default::default()
        };

        let job = Job::from_record(record).unwrap();
        assert_eq!(job.updated_at, job.created_at);
    }

    #[test]
    fn test_from_record_malformed_updated_at_falls_back_to_created_at() {
        let record = JobRecord {
            id: Some("a1".to_string()),
            job_number: Some("PJ-1".to_string()),
            address: Some("1 Oak Ave".to_string()),
            status: Some("pending".to_string()),
            created_at: Some("2024-01-02T03:04:05.006Z".to_string()),
            updated_at: Some("garbage".to_string()),
            ..Default::default()
        };

        let job = Job::from_record(record).unwrap();
        assert_eq!(job.updated_at, job.created_at);
        assert_eq!(job.job_number, "PJ-1");
    }

    #[test]
    fn test_wrongly_typed_optional_fields_read_as_absent() {
        let json = r#"{
            "id": "a1",
            "jobNumber": "PJ-1",
            "address": "1 Oak Ave",
            "status": "ready",
            "createdAt": "2024-01-02T00:00:00.000Z",
            "updatedAt": 1704153600000,
            "notes": 5,
            "builderId": {"id": "b-1"},
            "builderName": ["Old Mate"],
            "builderContact": null
        }"#;
        let record: JobRecord = serde_json::from_str(json).unwrap();
        assert!(record.notes.is_none());
        assert!(record.builder_id.is_none());

        let job = Job::from_record(record).unwrap();
        assert_eq!(job.status, JobStatus::Ready);
        assert_eq!(job.updated_at, job.created_at);
        assert!(job.notes.is_none());
        assert!(job.legacy_builder.is_none());
    }

    #[test]
    fn test_from_record_rejects_missing_required_fields() {
        let record = JobRecord {
            id: Some("a1".to_string()),
            address: Some("1 Oak Ave".to_string()),
            status: Some("pending".to_string()),
            created_at: Some("2024-01-02T00:00:00.000Z".to_string()),
            ..Default::default()
        };

        assert_eq!(
            Job::from_record(record),
            Err(DomainError::missing_field("jobNumber"))
        );
    }

    #[test]
    fn test_from_record_rejects_unknown_status() {
        let record = JobRecord {
            id: Some("a1".to_string()),
            job_number: Some("PJ-1".to_string()),
            address: Some("1 Oak Ave".to_string()),
            status: Some("archived".to_string()),
            created_at: Some("2024-01-02T00:00:00.000Z".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            Job::from_record(record),
            Err(DomainError::InvalidStatus(_))
        ));
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let json = r#"{
            "id": "a1",
            "jobNumber": "PJ-1",
            "address": "1 Oak Ave",
            "status": "in-progress",
            "createdAt": "2024-01-02T00:00:00.000Z",
            "priority": 3
        }"#;
        let record: JobRecord = serde_json::from_str(json).unwrap();
        let job = Job::from_record(record).unwrap();

        assert_eq!(job.status, JobStatus::InProgress);
        assert_eq!(job.record_id(), "a1");
    }
}
