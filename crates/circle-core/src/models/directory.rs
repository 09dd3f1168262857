//! Auxiliary records carried by the local snapshot

use serde::{Deserialize, Serialize};

use super::{ContactId, RecordId};

/// A grouping contacts can belong to (family, work, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: RecordId,
    pub name: String,
}

/// A labelled link between two contacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RecordId,
    pub from: ContactId,
    pub to: ContactId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupation {
    pub id: RecordId,
    pub name: String,
}

impl Relationship {
    /// Whether this relationship touches the given contact
    #[must_use]
    pub fn involves(&self, contact_id: &ContactId) -> bool {
        &self.from == contact_id || &self.to == contact_id
    }
}
