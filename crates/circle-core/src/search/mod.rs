//! Search and filtering over loaded records
//!
//! Matching is a case-insensitive substring test; an empty or
//! whitespace-only query matches everything.

use crate::models::{Contact, ContactId, Note};

fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Contacts whose name contains `query`
#[must_use]
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let Some(query) = normalize_query(query) else {
        return contacts.iter().collect();
    };
    contacts
        .iter()
        .filter(|contact| contact.name.to_lowercase().contains(&query))
        .collect()
}

/// Notes whose text contains `query`
#[must_use]
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let Some(query) = normalize_query(query) else {
        return notes.iter().collect();
    };
    notes
        .iter()
        .filter(|note| note.text.to_lowercase().contains(&query))
        .collect()
}

/// Notes owned by or referencing a contact, newest first
#[must_use]
pub fn notes_for_contact<'a>(notes: &'a [Note], contact_id: &ContactId) -> Vec<&'a Note> {
    let mut matching: Vec<&Note> = notes.iter().filter(|note| note.concerns(contact_id)).collect();
    matching.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    matching
}
