//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use circle_core::interaction::DeleteConfirmation;
use circle_core::models::{Contact, ContactId, DraftBook, LocalSnapshot, Note, NoteId};
use circle_core::search::{filter_contacts, notes_for_contact};
use circle_core::services::DatabaseService;

use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Every record loaded from the local snapshot
    pub snapshot: Signal<LocalSnapshot>,
    /// Contact whose notes are shown
    pub selected_contact: Signal<Option<ContactId>>,
    /// Note shown in the detail panel
    pub selected_note: Signal<Option<NoteId>>,
    /// Contact search query
    pub search_query: Signal<String>,
    /// Unsent drafts, per contact
    pub drafts: Signal<DraftBook>,
    /// Note awaiting delete confirmation
    pub note_deletion: Signal<DeleteConfirmation<Note>>,
    pub theme: Signal<ResolvedTheme>,
    pub db_service: Signal<Option<DatabaseService>>,
    /// Last load or save error for display
    pub last_error: Signal<Option<String>>,
}

impl AppState {
    /// Contacts matching the search query
    #[must_use]
    pub fn filtered_contacts(&self) -> Vec<Contact> {
        let snapshot = self.snapshot.read();
        let query = self.search_query.read();
        filter_contacts(&snapshot.contacts, &query)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn selected_contact(&self) -> Option<Contact> {
        let id = (self.selected_contact)()?;
        self.snapshot.read().contact(&id).cloned()
    }

    /// Notes about the selected contact, newest first
    #[must_use]
    pub fn contact_notes(&self) -> Vec<Note> {
        let Some(id) = (self.selected_contact)() else {
            return Vec::new();
        };
        let snapshot = self.snapshot.read();
        notes_for_contact(&snapshot.notes, &id)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn selected_note(&self) -> Option<Note> {
        let id = (self.selected_note)()?;
        self.snapshot
            .read()
            .notes
            .iter()
            .find(|note| note.id == id)
            .cloned()
    }

    /// Select a contact and clear the note selection
    pub fn select_contact(&mut self, id: ContactId) {
        self.selected_contact.set(Some(id));
        self.selected_note.set(None);
    }

    /// Add or replace a note locally and persist it
    pub fn save_note(&mut self, note: Note) {
        tracing::debug!("Saving note {}", note.id);
        self.snapshot.write().upsert_note(note.clone());
        let mut state = *self;
        spawn(async move {
            let db = state.db_service.read().clone();
            if let Some(db) = ready_database(db, "save", &note.id) {
                if let Err(e) = db.save_note(note).await {
                    tracing::error!("Failed to save note: {}", e);
                    state.last_error.set(Some(e.to_string()));
                }
            }
        });
    }

    /// Remove a note locally and from the database
    pub fn delete_note(&mut self, id: &NoteId) {
        if self.snapshot.write().remove_note(id).is_none() {
            return;
        }
        if (self.selected_note)().as_ref() == Some(id) {
            self.selected_note.set(None);
        }

        let id = id.clone();
        let mut state = *self;
        spawn(async move {
            let db = state.db_service.read().clone();
            if let Some(db) = ready_database(db, "delete", &id) {
                match db.delete_note(&id).await {
                    Ok(_) => tracing::info!("Deleted note: {}", id),
                    Err(e) => {
                        tracing::error!("Failed to delete note {}: {}", id, e);
                        state.last_error.set(Some(e.to_string()));
                    }
                }
            }
        });
    }
}

/// Pass the database through, warning when a write has nowhere to go
fn ready_database<T>(db: Option<T>, action: &str, id: &NoteId) -> Option<T> {
    if db.is_none() {
        tracing::warn!(
            "Database not ready, {} of note {} kept in memory only",
            action,
            id
        );
    }
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_database_skips_the_write() {
        let id = NoteId::from("n1");
        assert_eq!(ready_database::<u8>(None, "save", &id), None);
        assert_eq!(ready_database(Some(7_u8), "delete", &id), Some(7));
    }
}
