//! Snapshot record mappers
//!
//! This module provides the mapping layer between domain objects and the
//! records written to snapshot storage. Records mirror the stored JSON
//! shape: every field is optional so old or partial snapshots still decode,
//! and the mapper decides which gaps are fatal for a record.

pub mod builder_mapper;
pub mod job_mapper;

pub use builder_mapper::BuilderRecord;
pub use job_mapper::JobRecord;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Domain entity stored as part of a snapshot collection
pub trait SnapshotRecord: Sized {
    /// Persisted shape of the entity
    type Record: Serialize + DeserializeOwned;

    /// Convert the entity to its persisted record
    fn to_record(&self) -> Self::Record;

    /// Rebuild the entity from a persisted record
    ///
    /// # Errors
    /// Returns `DomainError::Mapping` (or a more specific variant) if a
    /// required field is missing or malformed
    fn from_record(record: Self::Record) -> crate::Result<Self>;

    /// Identifier used to detect duplicate records in a collection
    fn record_id(&self) -> &str;
}

/// Treat empty or whitespace-only strings as absent
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Required string field: present and not blank
pub(crate) fn required(value: Option<String>, field: &str) -> crate::Result<String> {
    non_blank(value).ok_or_else(|| crate::DomainError::missing_field(field))
}

/// Optional text field that reads any non-string value as absent, so one
/// malformed field never costs the whole record
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Other(IgnoredAny),
    }

    match Option::<Field>::deserialize(deserializer)? {
        Some(Field::Text(text)) => Ok(Some(text)),
        Some(Field::Other(_)) => {
            warn!("Ignoring optional field with a non-text value");
            Ok(None)
        }
        None => Ok(None),
    }
}
