//! Shared database service wrapper used across clients.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::db::{Database, LibSqlSnapshotRepository, SnapshotRepository};
use crate::models::{Contact, LocalSnapshot, Note, NoteId};
use crate::{Error, Result};

/// Thread-safe service for local snapshot operations.
#[derive(Clone)]
pub struct DatabaseService {
    db: Arc<Mutex<Database>>,
    db_path: Option<PathBuf>,
}

impl DatabaseService {
    /// Open a database service at the given filesystem path.
    pub async fn open_path(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&db_path).await?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            db_path: Some(db_path),
        })
    }

    /// Open an in-memory database service (primarily for tests).
    pub async fn open_in_memory() -> Result<Self> {
        let db = Database::open_in_memory().await?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            db_path: None,
        })
    }

    /// Path of the backing file, if any
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Load the local snapshot
    pub async fn load_snapshot(&self) -> Result<LocalSnapshot> {
        let db = self.db.lock().await;
        LibSqlSnapshotRepository::new(db.connection()).load().await
    }

    /// Replace the local snapshot
    pub async fn save_snapshot(&self, snapshot: &LocalSnapshot) -> Result<()> {
        let db = self.db.lock().await;
        LibSqlSnapshotRepository::new(db.connection())
            .save(snapshot)
            .await
    }

    /// Remove the local snapshot
    pub async fn clear_snapshot(&self) -> Result<()> {
        let db = self.db.lock().await;
        LibSqlSnapshotRepository::new(db.connection()).clear().await
    }

    /// Insert or replace a contact
    pub async fn save_contact(&self, contact: Contact) -> Result<LocalSnapshot> {
        self.modify(|snapshot| {
            snapshot.upsert_contact(contact);
            Ok(())
        })
        .await
    }

    /// Insert or replace a note
    pub async fn save_note(&self, note: Note) -> Result<LocalSnapshot> {
        self.modify(|snapshot| {
            snapshot.upsert_note(note);
            Ok(())
        })
        .await
    }

    /// Delete a note
    pub async fn delete_note(&self, id: &NoteId) -> Result<LocalSnapshot> {
        self.modify(|snapshot| {
            snapshot
                .remove_note(id)
                .map(|_| ())
                .ok_or_else(|| Error::NotFound(id.to_string()))
        })
        .await
    }

    /// Load, change and save the snapshot while holding the lock
    async fn modify(
        &self,
        change: impl FnOnce(&mut LocalSnapshot) -> Result<()>,
    ) -> Result<LocalSnapshot> {
        let db = self.db.lock().await;
        let repo = LibSqlSnapshotRepository::new(db.connection());
        let mut snapshot = repo.load().await?;
        change(&mut snapshot)?;
        repo.save(&snapshot).await?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn save_and_delete_note() {
        let service = DatabaseService::open_in_memory().await.unwrap();
        let note = Note::new("hello");

        let snapshot = service.save_note(note.clone()).await.unwrap();
        assert_eq!(snapshot.notes, vec![note.clone()]);

        let snapshot = service.delete_note(&note.id).await.unwrap();
        assert!(snapshot.notes.is_empty());
        assert!(service.load_snapshot().await.unwrap().notes.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delete_missing_note_is_not_found() {
        let service = DatabaseService::open_in_memory().await.unwrap();
        let error = service.delete_note(&NoteId::from("nope")).await.unwrap_err();
        assert!(matches!(error, Error::NotFound(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn open_path_creates_parent_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("circle.db");

        let service = DatabaseService::open_path(&path).await.unwrap();
        service
            .save_contact(Contact::with_id("a1", "Ada"))
            .await
            .unwrap();
        assert_eq!(service.db_path(), Some(path.as_path()));

        let reopened = DatabaseService::open_path(&path).await.unwrap();
        assert_eq!(reopened.load_snapshot().await.unwrap().contacts.len(), 1);
    }
}
