//! Note model

use serde::{Deserialize, Serialize};

use super::{ContactId, NoteId};
use crate::references;

/// A note in the system
///
/// `text` is free text that may embed `{{contact:<id>}}` reference tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Free text content
    pub text: String,
    /// Contact this note was written about, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<ContactId>,
    /// Creation timestamp (Unix ms)
    #[serde(default)]
    pub created_at: i64,
    /// Last update timestamp (Unix ms)
    #[serde(default)]
    pub updated_at: i64,
}

impl Note {
    /// Create a new note with the given text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let now = crate::util::unix_millis_now();
        Self {
            id: NoteId::generate(),
            text: text.into(),
            contact_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the note to a contact
    #[must_use]
    pub fn for_contact(mut self, contact_id: ContactId) -> Self {
        self.contact_id = Some(contact_id);
        self
    }

    /// All contact references embedded in the text, in order of appearance
    #[must_use]
    pub fn references(&self) -> Vec<&str> {
        references::find_references(&self.text)
    }

    /// Whether this note belongs to or mentions the given contact
    #[must_use]
    pub fn concerns(&self, contact_id: &ContactId) -> bool {
        self.contact_id.as_ref() == Some(contact_id)
            || self
                .references()
                .iter()
                .any(|reference| *reference == contact_id.as_str())
    }

    /// Get first line as title preview, truncated to `max_len` characters
    #[must_use]
    pub fn title_preview(&self, max_len: usize) -> String {
        self.text
            .lines()
            .next()
            .unwrap_or("")
            .chars()
            .take(max_len)
            .collect()
    }

    /// Check if note text is empty (whitespace-only counts as empty)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_new() {
        let note = Note::new("Coffee with {{contact:a1}}");
        assert_eq!(note.text, "Coffee with {{contact:a1}}");
        assert!(note.created_at > 0);
        assert_eq!(note.created_at, note.updated_at);
        assert!(note.contact_id.is_none());
    }

    #[test]
    fn test_references() {
        let note = Note::new("{{contact:a1}} met {{contact:b2}}");
        assert_eq!(note.references(), vec!["a1", "b2"]);
    }

    #[test]
    fn test_concerns_owner_and_mentions() {
        let owned = Note::new("Birthday in May").for_contact(ContactId::from("a1"));
        let mentioned = Note::new("Lunch with {{contact:a1}}");
        let unrelated = Note::new("Lunch with {{contact:b2}}");

        let a1 = ContactId::from("a1");
        assert!(owned.concerns(&a1));
        assert!(mentioned.concerns(&a1));
        assert!(!unrelated.concerns(&a1));
    }

    #[test]
    fn test_title_preview() {
        let note = Note::new("First line\nSecond line\nThird line");
        assert_eq!(note.title_preview(50), "First line");
        assert_eq!(note.title_preview(5), "First");
    }

    #[test]
    fn test_is_empty() {
        assert!(Note::new("   ").is_empty());
        assert!(!Note::new("Hello").is_empty());
    }

    #[test]
    fn test_deserialize_remote_row() {
        let note: Note = serde_json::from_str(r#"{"id":12,"text":"hi"}"#).unwrap();
        assert_eq!(note.id.as_str(), "12");
        assert_eq!(note.updated_at, 0);
    }
}
