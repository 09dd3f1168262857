//! Moving records between a local snapshot and the remote store

use serde::Serialize;

use crate::error::Result;
use crate::models::LocalSnapshot;
use crate::remote::RemoteStore;

/// Summary of a snapshot push
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransferReport {
    pub contacts_written: usize,
    pub notes_written: usize,
    /// IDs of records the store rejected
    pub failed: Vec<String>,
}

/// Insert every contact and note of `snapshot` into the remote store.
///
/// Contacts go first so references in note text point at existing rows.
/// Records are written one at a time; a rejected record is logged and
/// skipped.
pub async fn push_snapshot<S: RemoteStore>(
    snapshot: &LocalSnapshot,
    store: &S,
) -> Result<TransferReport> {
    let mut report = TransferReport::default();

    for contact in &snapshot.contacts {
        match store.insert_contact(contact).await {
            Ok(()) => report.contacts_written += 1,
            Err(e) => {
                tracing::error!("Failed to insert contact {}: {}", contact.id, e);
                report.failed.push(contact.id.to_string());
            }
        }
    }

    for note in &snapshot.notes {
        match store.insert_note(note).await {
            Ok(()) => report.notes_written += 1,
            Err(e) => {
                tracing::error!("Failed to insert note {}: {}", note.id, e);
                report.failed.push(note.id.to_string());
            }
        }
    }

    tracing::info!(
        "Pushed snapshot: {} contacts, {} notes, {} failed",
        report.contacts_written,
        report.notes_written,
        report.failed.len()
    );
    Ok(report)
}

/// Read remote contacts and notes into a fresh snapshot.
///
/// Only contacts and notes live remotely; the other collections come back
/// empty.
pub async fn pull_snapshot<S: RemoteStore>(store: &S) -> Result<LocalSnapshot> {
    let contacts = store.list_contacts().await?;
    let notes = store.list_notes().await?;
    tracing::info!(
        "Pulled {} contacts and {} notes from remote store",
        contacts.len(),
        notes.len()
    );

    Ok(LocalSnapshot {
        contacts,
        notes,
        ..LocalSnapshot::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, ContactId, Note};
    use crate::remote::MemoryStore;
    use pretty_assertions::assert_eq;

    #[tokio::test(flavor = "multi_thread")]
    async fn push_then_pull_carries_contacts_and_notes() {
        let mut snapshot = LocalSnapshot::default();
        snapshot.upsert_contact(Contact::with_id("a1", "Ada"));
        snapshot.upsert_note(Note::new("Met {{contact:a1}}"));

        let store = MemoryStore::new();
        let report = push_snapshot(&snapshot, &store).await.unwrap();
        assert_eq!(report.contacts_written, 1);
        assert_eq!(report.notes_written, 1);
        assert!(report.failed.is_empty());

        let pulled = pull_snapshot(&store).await.unwrap();
        assert_eq!(pulled.contacts, snapshot.contacts);
        assert_eq!(pulled.notes, snapshot.notes);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn push_skips_duplicates() {
        let store = MemoryStore::new().with_contacts(vec![Contact::with_id("a1", "Ada")]);
        let mut snapshot = LocalSnapshot::default();
        snapshot.upsert_contact(Contact::with_id("a1", "Ada again"));
        snapshot.upsert_contact(Contact::with_id("b2", "Grace"));

        let report = push_snapshot(&snapshot, &store).await.unwrap();
        assert_eq!(report.contacts_written, 1);
        assert_eq!(report.failed, vec!["a1".to_string()]);

        let names: Vec<_> = store
            .contacts()
            .await
            .into_iter()
            .filter(|contact| contact.id == ContactId::from("a1"))
            .map(|contact| contact.name)
            .collect();
        assert_eq!(names, vec!["Ada".to_string()]);
    }
}
