//! Builder record mapper

use super::{SnapshotRecord, required};
use crate::{Builder, BuilderId};
use serde::{Deserialize, Serialize};

/// Stored representation of a [`Builder`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl SnapshotRecord for Builder {
    type Record = BuilderRecord;

    fn to_record(&self) -> BuilderRecord {
        BuilderRecord {
            id: Some(self.id.to_string()),
            name: Some(self.name.clone()),
            contact: Some(self.contact.clone()),
        }
    }

    fn from_record(record: BuilderRecord) -> crate::Result<Self> {
        Ok(Builder {
            id: BuilderId::new(required(record.id, "id")?),
            name: required(record.name, "name")?,
            contact: required(record.contact, "contact")?,
        })
    }

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuilderDraft, DomainError};

    #[test]
    fn test_to_record_from_record() {
        let builder = Builder::new(
            BuilderDraft::new("Acme Construction", "acme@example.com")
                .validate()
                .unwrap(),
        );

        let restored = Builder::from_record(builder.to_record()).unwrap();
        assert_eq!(restored, builder);
    }

    #[test]
    fn test_from_record_requires_contact() {
        let record: BuilderRecord =
            serde_json::from_str(r#"{"id": "b1", "name": "Acme"}"#).unwrap();

        assert_eq!(
            Builder::from_record(record),
            Err(DomainError::missing_field("contact"))
        );
    }
}
