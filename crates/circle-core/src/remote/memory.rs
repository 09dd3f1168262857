//! In-process remote store
//!
//! Mirrors the hosted tables closely enough for tests and offline runs,
//! including insert conflicts and injectable update failures.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{RemoteError, RemoteResult, RemoteStore};
use crate::models::{Contact, Note, NoteId};

#[derive(Debug, Default)]
struct Tables {
    contacts: Vec<Contact>,
    notes: Vec<Note>,
}

/// Remote store kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    failing_updates: HashSet<NoteId>,
    updates: Arc<AtomicUsize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the contacts table
    ///
    /// Waits for the table lock, so clones sharing this store see the rows.
    #[must_use]
    pub fn with_contacts(self, contacts: Vec<Contact>) -> Self {
        self.tables().contacts = contacts;
        self
    }

    /// Seed the notes table
    #[must_use]
    pub fn with_notes(self, notes: Vec<Note>) -> Self {
        self.tables().notes = notes;
        self
    }

    // Guards are never held across an await.
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every update of this note fail
    #[must_use]
    pub fn fail_updates_for(mut self, id: NoteId) -> Self {
        self.failing_updates.insert(id);
        self
    }

    /// Current contents of the contacts table
    pub async fn contacts(&self) -> Vec<Contact> {
        self.tables().contacts.clone()
    }

    /// Current contents of the notes table
    pub async fn notes(&self) -> Vec<Note> {
        self.tables().notes.clone()
    }

    /// Number of successful note text updates
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl RemoteStore for MemoryStore {
    async fn list_contacts(&self) -> RemoteResult<Vec<Contact>> {
        Ok(self.contacts().await)
    }

    async fn list_notes(&self) -> RemoteResult<Vec<Note>> {
        Ok(self.notes().await)
    }

    async fn find_notes_containing(&self, needle: &str) -> RemoteResult<Vec<Note>> {
        let tables = self.tables();
        Ok(tables
            .notes
            .iter()
            .filter(|note| note.text.contains(needle))
            .cloned()
            .collect())
    }

    async fn update_note_text(&self, id: &NoteId, text: &str) -> RemoteResult<()> {
        if self.failing_updates.contains(id) {
            return Err(RemoteError::Api(format!("update rejected for note {id} (500)")));
        }

        let mut tables = self.tables();
        // PostgREST reports success for a filter matching no rows.
        if let Some(note) = tables.notes.iter_mut().find(|note| &note.id == id) {
            note.text = text.to_string();
            note.updated_at = crate::util::unix_millis_now();
        }
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn insert_contact(&self, contact: &Contact) -> RemoteResult<()> {
        let mut tables = self.tables();
        if tables.contacts.iter().any(|existing| existing.id == contact.id) {
            return Err(RemoteError::Api(format!(
                "duplicate key value violates unique constraint on contacts.id = {} (409)",
                contact.id
            )));
        }
        tables.contacts.push(contact.clone());
        Ok(())
    }

    async fn insert_note(&self, note: &Note) -> RemoteResult<()> {
        let mut tables = self.tables();
        if tables.notes.iter().any(|existing| existing.id == note.id) {
            return Err(RemoteError::Api(format!(
                "duplicate key value violates unique constraint on notes.id = {} (409)",
                note.id
            )));
        }
        tables.notes.push(note.clone());
        Ok(())
    }

    async fn delete_note(&self, id: &NoteId) -> RemoteResult<()> {
        self.tables().notes.retain(|note| &note.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn substring_filter_and_delete() {
        let keep = Note::new("{{contact:1}} lunch");
        let other = Note::new("groceries");
        let store = MemoryStore::new().with_notes(vec![keep.clone(), other.clone()]);

        let found = store.find_notes_containing("{{contact:").await.unwrap();
        assert_eq!(found, vec![keep.clone()]);

        store.delete_note(&keep.id).await.unwrap();
        assert_eq!(store.notes().await, vec![other]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn injected_failure_leaves_note_untouched() {
        let note = Note::new("before");
        let store = MemoryStore::new()
            .with_notes(vec![note.clone()])
            .fail_updates_for(note.id.clone());

        assert!(store.update_note_text(&note.id, "after").await.is_err());
        assert_eq!(store.notes().await[0].text, "before");
        assert_eq!(store.update_count(), 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn seeding_waits_for_a_held_lock() {
        let observer = MemoryStore::new();
        let store = observer.clone();
        let (locked_tx, locked_rx) = std::sync::mpsc::channel();

        let holder = {
            let tables = Arc::clone(&observer.tables);
            std::thread::spawn(move || {
                let _guard = tables.lock().unwrap();
                locked_tx.send(()).unwrap();
                std::thread::sleep(std::time::Duration::from_millis(50));
            })
        };
        locked_rx.recv().unwrap();

        let store = store
            .with_contacts(vec![Contact::with_id("a1", "Ada")])
            .with_notes(vec![Note::new("seeded")]);
        holder.join().unwrap();

        assert_eq!(observer.contacts().await, vec![Contact::with_id("a1", "Ada")]);
        assert_eq!(store.notes().await.len(), 1);
        assert_eq!(observer.notes().await[0].text, "seeded");
    }
}
