//! Contact model

use serde::{Deserialize, Serialize};

use super::{ContactId, RecordId};

/// A person tracked in Circle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier
    pub id: ContactId,
    /// Display name
    pub name: String,
    /// Subject this contact belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<RecordId>,
    /// Organization the contact works for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<RecordId>,
    /// Occupation of the contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation_id: Option<RecordId>,
    /// Creation timestamp (Unix ms)
    #[serde(default)]
    pub created_at: i64,
}

impl Contact {
    /// Create a new contact with a generated ID
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(ContactId::generate(), name)
    }

    /// Create a contact with an explicit ID
    #[must_use]
    pub fn with_id(id: impl Into<ContactId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subject_id: None,
            organization_id: None,
            occupation_id: None,
            created_at: crate::util::unix_millis_now(),
        }
    }

    /// Initials used by avatar badges, at most two characters
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_new() {
        let contact = Contact::new("Ada Lovelace");
        assert_eq!(contact.name, "Ada Lovelace");
        assert!(!contact.id.is_numeric());
        assert!(contact.created_at > 0);
    }

    #[test]
    fn test_initials() {
        assert_eq!(Contact::new("ada lovelace").initials(), "AL");
        assert_eq!(Contact::new("Plato").initials(), "P");
        assert_eq!(Contact::new("  ").initials(), "");
    }

    #[test]
    fn test_deserialize_remote_row() {
        let contact: Contact = serde_json::from_str(r#"{"id":"a1","name":"Ada"}"#).unwrap();
        assert_eq!(contact.id.as_str(), "a1");
        assert_eq!(contact.created_at, 0);
        assert!(contact.subject_id.is_none());
    }
}
