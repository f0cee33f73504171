//! Builder Domain Entity
//!
//! Builders are contacts a job may point at. They are never updated or
//! removed once added.

use crate::Result;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Builder identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuilderId(String);

impl BuilderId {
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

impl From<&str> for BuilderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for BuilderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A builder contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Builder {
    pub id: BuilderId,
    pub name: String,
    pub contact: String,
}

impl Builder {
    /// Create a builder with a fresh identifier
    pub fn new(new_builder: NewBuilder) -> Self {
        Self {
            id: BuilderId::generate(),
            name: new_builder.name,
            contact: new_builder.contact,
        }
    }
}

/// Raw builder form input
#[derive(Debug, Clone, Default)]
pub struct BuilderDraft {
    pub name: String,
    pub contact: String,
}

impl BuilderDraft {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }

    /// Trim both fields and reject empty values
    ///
    /// # Errors
    /// Returns `DomainError::Validation` if the name or contact is blank
    pub fn validate(self) -> Result<NewBuilder> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::empty_field("builder name"));
        }

        let contact = self.contact.trim();
        if contact.is_empty() {
            return Err(DomainError::empty_field("builder contact"));
        }

        Ok(NewBuilder {
            name: name.to_string(),
            contact: contact.to_string(),
        })
    }
}

/// Validated builder input, accepted by the builder repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBuilder {
    name: String,
    contact: String,
}

impl NewBuilder {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_id_generate_unique() {
        assert_ne!(BuilderId::generate(), BuilderId::generate());
        assert!(!BuilderId::generate().as_str().is_empty());
    }

    #[test]
    fn test_draft_trims_fields() {
        let new_builder = BuilderDraft::new("  Acme Construction ", "\t(555) 123-4567\n")
            .validate()
            .unwrap();

        assert_eq!(new_builder.name(), "Acme Construction");
        assert_eq!(new_builder.contact(), "(555) 123-4567");
    }

    #[test]
    fn test_draft_rejects_blank_name() {
        let result = BuilderDraft::new("   ", "someone@example.com").validate();
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_draft_rejects_blank_contact() {
        let result = BuilderDraft::new("Acme", "").validate();
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_builder_new_assigns_id() {
        let a = Builder::new(BuilderDraft::new("A", "a@x").validate().unwrap());
        let b = Builder::new(BuilderDraft::new("A", "a@x").validate().unwrap());

        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "A");
        assert_eq!(a.contact, "a@x");
    }
}
