//! Local snapshot of every record, persisted as one JSON blob
//!
//! # Schema versions
//!
//! - `0`: legacy blob without a `version` field. Contact and note IDs may be
//!   small integers.
//! - `1`: adds the `version` field. Content is otherwise identical, so a
//!   version 0 blob upgrades by stamping the version.

use serde::{Deserialize, Serialize};

use super::{
    Contact, ContactId, Note, NoteId, Occupation, Organization, Relationship, Subject,
};
use crate::error::{Error, Result};

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Storage key the snapshot blob lives under
pub const SNAPSHOT_KEY: &str = "circle-data";

/// All locally persisted records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSnapshot {
    /// Schema version; absent in legacy blobs
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub occupations: Vec<Occupation>,
}

impl Default for LocalSnapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_SCHEMA_VERSION,
            contacts: Vec::new(),
            subjects: Vec::new(),
            relationships: Vec::new(),
            notes: Vec::new(),
            organizations: Vec::new(),
            occupations: Vec::new(),
        }
    }
}

impl LocalSnapshot {
    /// Parse a snapshot blob, upgrading older schema versions.
    ///
    /// Blobs from a newer schema are rejected rather than guessed at.
    pub fn from_json(payload: &str) -> Result<Self> {
        let mut snapshot: Self = serde_json::from_str(payload)?;
        if snapshot.version > SNAPSHOT_SCHEMA_VERSION {
            return Err(Error::UnsupportedSnapshotVersion {
                found: snapshot.version,
                supported: SNAPSHOT_SCHEMA_VERSION,
            });
        }
        if snapshot.version < SNAPSHOT_SCHEMA_VERSION {
            tracing::info!(
                "Upgrading snapshot from schema version {} to {}",
                snapshot.version,
                SNAPSHOT_SCHEMA_VERSION
            );
            snapshot.version = SNAPSHOT_SCHEMA_VERSION;
        }
        Ok(snapshot)
    }

    /// Serialize the snapshot blob
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Look up a contact by ID
    #[must_use]
    pub fn contact(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.id == id)
    }

    /// Insert or replace a contact, keyed by ID
    pub fn upsert_contact(&mut self, contact: Contact) {
        match self.contacts.iter_mut().find(|existing| existing.id == contact.id) {
            Some(existing) => *existing = contact,
            None => self.contacts.push(contact),
        }
    }

    /// Insert or replace a note, keyed by ID
    pub fn upsert_note(&mut self, note: Note) {
        match self.notes.iter_mut().find(|existing| existing.id == note.id) {
            Some(existing) => *existing = note,
            None => self.notes.push(note),
        }
    }

    /// Remove a note by ID, returning it if present
    pub fn remove_note(&mut self, id: &NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|note| &note.id == id)?;
        Some(self.notes.remove(index))
    }

    /// Whether the snapshot holds no records at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
            && self.subjects.is_empty()
            && self.relationships.is_empty()
            && self.notes.is_empty()
            && self.organizations.is_empty()
            && self.occupations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_current_version_and_empty() {
        let snapshot = LocalSnapshot::default();
        assert_eq!(snapshot.version, SNAPSHOT_SCHEMA_VERSION);
        assert!(snapshot.is_empty());
    }

    #[test]
    fn legacy_blob_is_upgraded() {
        let payload = r#"{
            "contacts": [{"id": 1, "name": "Ada"}, {"id": 2, "name": "Grace"}],
            "notes": [{"id": 1, "text": "Met {{contact:1}}"}]
        }"#;

        let snapshot = LocalSnapshot::from_json(payload).unwrap();
        assert_eq!(snapshot.version, SNAPSHOT_SCHEMA_VERSION);
        assert_eq!(snapshot.contacts.len(), 2);
        assert_eq!(snapshot.contacts[0].id.as_str(), "1");
        assert!(snapshot.subjects.is_empty());
        assert_eq!(snapshot.notes[0].references(), vec!["1"]);
    }

    #[test]
    fn newer_version_is_rejected() {
        let error = LocalSnapshot::from_json(r#"{"version": 9}"#).unwrap_err();
        assert!(matches!(
            error,
            Error::UnsupportedSnapshotVersion { found: 9, .. }
        ));
    }

    #[test]
    fn malformed_blob_is_a_serialization_error() {
        let error = LocalSnapshot::from_json("{not json").unwrap_err();
        assert!(matches!(error, Error::Serialization(_)));
    }

    #[test]
    fn json_round_trip_preserves_records() {
        let mut snapshot = LocalSnapshot::default();
        snapshot.upsert_contact(Contact::with_id("a1", "Ada"));
        snapshot.upsert_note(Note::new("hello"));

        let parsed = LocalSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn upsert_contact_replaces_by_id() {
        let mut snapshot = LocalSnapshot::default();
        snapshot.upsert_contact(Contact::with_id("a1", "Ada"));
        snapshot.upsert_contact(Contact::with_id("a1", "Ada Lovelace"));

        assert_eq!(snapshot.contacts.len(), 1);
        assert_eq!(
            snapshot.contact(&ContactId::from("a1")).map(|c| c.name.as_str()),
            Some("Ada Lovelace")
        );
    }

    #[test]
    fn remove_note_by_id() {
        let mut snapshot = LocalSnapshot::default();
        let note = Note::new("bye");
        snapshot.upsert_note(note.clone());

        assert_eq!(snapshot.remove_note(&note.id), Some(note));
        assert!(snapshot.notes.is_empty());
    }
}
