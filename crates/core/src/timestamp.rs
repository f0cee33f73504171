//! Timestamp helpers
//!
//! Snapshots store timestamps as ISO-8601 text with millisecond precision
//! (`2024-05-01T09:30:00.000Z`). Domain timestamps are truncated to the same
//! precision when they are taken so a save/load cycle yields equal instants.

use crate::error::DomainError;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

/// Current time, truncated to milliseconds
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Render a timestamp in the stored ISO-8601 form
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp back into an instant.
///
/// Accepts RFC 3339 text with any offset. Text without an offset is read as
/// UTC.
pub fn parse(text: &str) -> Result<DateTime<Utc>, DomainError> {
    let text = text.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| DomainError::InvalidTimestamp(text.to_string()))
}
