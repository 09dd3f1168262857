//! Drafts: unsent note text pending extraction or deletion

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{ContactId, DraftId, Note};

/// A timestamped text fragment written against a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub id: DraftId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub text: String,
}

impl Draft {
    /// Create a draft stamped with the current local date and time
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let now = Local::now().naive_local();
        Self::at(now.date(), now.time(), text)
    }

    /// Create a draft with an explicit timestamp
    #[must_use]
    pub fn at(date: NaiveDate, time: NaiveTime, text: impl Into<String>) -> Self {
        Self {
            id: DraftId::generate(),
            date,
            time,
            text: text.into(),
        }
    }

    /// Timestamp of the draft as Unix ms, treating the local wall clock as UTC
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        NaiveDateTime::new(self.date, self.time)
            .and_utc()
            .timestamp_millis()
    }

    /// Human readable stamp, e.g. `2024-03-01 09:30`
    #[must_use]
    pub fn stamp(&self) -> String {
        format!("{} {}", self.date.format("%Y-%m-%d"), self.time.format("%H:%M"))
    }

    /// Turn the draft into a note attached to `contact_id`
    #[must_use]
    pub fn into_note(self, contact_id: ContactId) -> Note {
        let timestamp = self.timestamp_millis();
        let mut note = Note::new(self.text).for_contact(contact_id);
        note.created_at = timestamp;
        note.updated_at = timestamp;
        note
    }
}

/// Drafts grouped by the contact they were written for
///
/// Drafts are never edited in place: [`DraftBook::replace`] swaps the whole
/// value for one with the same ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftBook {
    drafts: BTreeMap<ContactId, Vec<Draft>>,
}

impl DraftBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drafts for a contact, oldest first
    #[must_use]
    pub fn drafts(&self, contact_id: &ContactId) -> &[Draft] {
        self.drafts.get(contact_id).map_or(&[], Vec::as_slice)
    }

    /// Append a draft for a contact
    pub fn add(&mut self, contact_id: ContactId, draft: Draft) {
        self.drafts.entry(contact_id).or_default().push(draft);
    }

    /// Replace the draft with the same ID, returning the previous value
    pub fn replace(&mut self, contact_id: &ContactId, draft: Draft) -> Option<Draft> {
        let slot = self
            .drafts
            .get_mut(contact_id)?
            .iter_mut()
            .find(|existing| existing.id == draft.id)?;
        Some(std::mem::replace(slot, draft))
    }

    /// Remove a draft, returning it if it existed
    pub fn remove(&mut self, contact_id: &ContactId, draft_id: &DraftId) -> Option<Draft> {
        let drafts = self.drafts.get_mut(contact_id)?;
        let index = drafts.iter().position(|draft| &draft.id == draft_id)?;
        let removed = drafts.remove(index);
        if drafts.is_empty() {
            self.drafts.remove(contact_id);
        }
        Some(removed)
    }

    /// Remove a draft and convert it into a note for the same contact
    pub fn extract(&mut self, contact_id: &ContactId, draft_id: &DraftId) -> Option<Note> {
        self.remove(contact_id, draft_id)
            .map(|draft| draft.into_note(contact_id.clone()))
    }

    /// Total number of drafts across all contacts
    #[must_use]
    pub fn len(&self) -> usize {
        self.drafts.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(text: &str) -> Draft {
        Draft::at(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            text,
        )
    }

    #[test]
    fn test_stamp() {
        assert_eq!(draft("x").stamp(), "2024-03-01 09:30");
    }

    #[test]
    fn test_add_and_list() {
        let mut book = DraftBook::new();
        let contact = ContactId::from("a1");
        book.add(contact.clone(), draft("one"));
        book.add(contact.clone(), draft("two"));

        let texts: Vec<_> = book.drafts(&contact).iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
        assert!(book.drafts(&ContactId::from("zz")).is_empty());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_replace_swaps_whole_value() {
        let mut book = DraftBook::new();
        let contact = ContactId::from("a1");
        let original = draft("before");
        book.add(contact.clone(), original.clone());

        let replacement = Draft {
            text: "after".to_string(),
            ..original.clone()
        };
        let previous = book.replace(&contact, replacement).unwrap();

        assert_eq!(previous, original);
        assert_eq!(book.drafts(&contact)[0].text, "after");
    }

    #[test]
    fn test_replace_unknown_draft_is_none() {
        let mut book = DraftBook::new();
        let contact = ContactId::from("a1");
        book.add(contact.clone(), draft("one"));
        assert!(book.replace(&contact, draft("other")).is_none());
        assert_eq!(book.drafts(&contact)[0].text, "one");
    }

    #[test]
    fn test_remove() {
        let mut book = DraftBook::new();
        let contact = ContactId::from("a1");
        let first = draft("one");
        book.add(contact.clone(), first.clone());

        assert_eq!(book.remove(&contact, &first.id), Some(first.clone()));
        assert!(book.is_empty());
        assert!(book.remove(&contact, &first.id).is_none());
    }

    #[test]
    fn test_extract_into_note() {
        let mut book = DraftBook::new();
        let contact = ContactId::from("a1");
        let pending = draft("Call back about the trip");
        book.add(contact.clone(), pending.clone());

        let note = book.extract(&contact, &pending.id).unwrap();
        assert_eq!(note.text, "Call back about the trip");
        assert_eq!(note.contact_id, Some(contact));
        assert_eq!(note.created_at, pending.timestamp_millis());
        assert!(book.is_empty());
    }
}
