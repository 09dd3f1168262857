//! One-shot data migrations
//!
//! # Positional remapping hazard
//!
//! Legacy numeric references are resolved by treating the number as a
//! 1-based position into the contact list *as currently returned by the
//! store*. Nothing guarantees that order matches the order the numbers were
//! originally assigned in, so the mapping can be silently wrong. The
//! behavior is kept as-is so already-migrated data stays consistent with
//! this tool; it is a known bug, not a resolution strategy.

pub mod snapshot;

use std::collections::HashMap;

use regex::Captures;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Contact, ContactId, NoteId};
use crate::references::{self, CONTACT_TOKEN_PREFIX};
use crate::remote::RemoteStore;

pub use snapshot::{pull_snapshot, push_snapshot, TransferReport};

/// Contacts indexed by name and by list position
#[derive(Debug, Clone, Default)]
pub struct ContactLookup {
    by_name: HashMap<String, ContactId>,
    ordered: Vec<ContactId>,
}

impl ContactLookup {
    /// Build the lookup, keeping the contacts in the order given
    #[must_use]
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        let mut by_name = HashMap::with_capacity(contacts.len());
        for contact in contacts {
            by_name
                .entry(normalize_name(&contact.name))
                .or_insert_with(|| contact.id.clone());
        }
        Self {
            by_name,
            ordered: contacts.iter().map(|contact| contact.id.clone()).collect(),
        }
    }

    /// ID at a 1-based position; `0` and out-of-range positions are `None`
    #[must_use]
    pub fn by_position(&self, position: usize) -> Option<&ContactId> {
        position.checked_sub(1).and_then(|index| self.ordered.get(index))
    }

    /// ID of the first contact with this name (case-insensitive)
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&ContactId> {
        self.by_name.get(&normalize_name(name))
    }

    /// Resolve a user-supplied contact ID or name
    #[must_use]
    pub fn resolve(&self, id_or_name: &str) -> Option<ContactId> {
        let trimmed = id_or_name.trim();
        self.ordered
            .iter()
            .find(|id| id.as_str() == trimmed)
            .or_else(|| self.by_name(trimmed))
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Result of rewriting one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remapped {
    /// Rewritten text
    pub text: String,
    /// Number of tokens substituted
    pub substituted: usize,
    /// Legacy numbers, as written, with no contact at that position
    pub unresolved: Vec<String>,
}

impl Remapped {
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.substituted > 0
    }
}

/// Rewrite legacy numeric references in `text` to current contact IDs.
///
/// Each `{{contact:N}}` becomes `{{contact:<id>}}` where `<id>` is the
/// contact at 1-based position `N` of `lookup`. Tokens with no contact at
/// that position, including numbers too large to be a position, are left
/// untouched and reported in `unresolved`.
/// Non-numeric references never match, so rewriting is idempotent.
///
/// # Examples
///
/// ```
/// use circle_core::migrate::{remap_legacy_references, ContactLookup};
/// use circle_core::Contact;
///
/// let contacts = [Contact::with_id("a1", "Ada"), Contact::with_id("b2", "Grace")];
/// let lookup = ContactLookup::from_contacts(&contacts);
/// let remapped = remap_legacy_references("Meet {{contact:1}} and {{contact:2}}", &lookup);
/// assert_eq!(remapped.text, "Meet {{contact:a1}} and {{contact:b2}}");
/// ```
#[must_use]
pub fn remap_legacy_references(text: &str, lookup: &ContactLookup) -> Remapped {
    let mut substituted = 0;
    let mut unresolved = Vec::new();

    let rewritten = references::legacy_pattern().replace_all(text, |cap: &Captures<'_>| {
        let resolved = cap[1]
            .parse::<usize>()
            .ok()
            .and_then(|position| lookup.by_position(position));
        match resolved {
            Some(id) => {
                substituted += 1;
                references::token(id.as_str())
            }
            None => {
                unresolved.push(cap[1].to_string());
                cap[0].to_string()
            }
        }
    });

    Remapped {
        text: rewritten.into_owned(),
        substituted,
        unresolved,
    }
}

/// Options for [`run_contact_reference_migration`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationOptions {
    /// Compute rewrites without writing them
    pub dry_run: bool,
}

/// A legacy reference that could not be mapped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    pub note_id: NoteId,
    /// The legacy number as it appears in the note
    pub reference: String,
}

/// Summary of a contact-reference migration run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Notes containing a reference token
    pub scanned: usize,
    /// Notes written back (or that would be, in a dry run)
    pub rewritten: usize,
    /// Notes with nothing to rewrite
    pub unchanged: usize,
    /// Notes whose update failed
    pub failed: Vec<NoteId>,
    /// References left as-is because no contact exists at that position
    pub unresolved: Vec<UnresolvedReference>,
    pub dry_run: bool,
}

/// Rewrite legacy numeric contact references in every remote note.
///
/// Runs strictly sequentially: each update is awaited before the next note
/// is processed. A failed update is logged and skipped; there is no
/// transaction and nothing is rolled back. Only failures to read contacts or
/// notes abort the run.
pub async fn run_contact_reference_migration<S: RemoteStore>(
    store: &S,
    options: MigrationOptions,
) -> Result<MigrationReport> {
    tracing::warn!(
        "Legacy contact numbers are mapped by position in the store's current contact order; \
         verify results if contacts were added, removed or reordered"
    );

    let contacts = store.list_contacts().await?;
    let lookup = ContactLookup::from_contacts(&contacts);
    tracing::info!("Loaded {} contacts", lookup.len());

    let notes = store.find_notes_containing(CONTACT_TOKEN_PREFIX).await?;
    tracing::info!("Found {} notes with contact references", notes.len());

    let mut report = MigrationReport {
        dry_run: options.dry_run,
        ..MigrationReport::default()
    };

    for note in notes {
        report.scanned += 1;
        let remapped = remap_legacy_references(&note.text, &lookup);

        for reference in &remapped.unresolved {
            tracing::warn!(
                "Note {}: no contact at position {}, leaving {{{{contact:{}}}}} unresolved",
                note.id,
                reference,
                reference
            );
            report.unresolved.push(UnresolvedReference {
                note_id: note.id.clone(),
                reference: reference.clone(),
            });
        }

        if !remapped.changed() {
            report.unchanged += 1;
            continue;
        }

        if options.dry_run {
            tracing::info!(
                "Would rewrite note {} ({} references)",
                note.id,
                remapped.substituted
            );
            report.rewritten += 1;
            continue;
        }

        match store.update_note_text(&note.id, &remapped.text).await {
            Ok(()) => {
                tracing::debug!(
                    "Rewrote note {} ({} references)",
                    note.id,
                    remapped.substituted
                );
                report.rewritten += 1;
            }
            Err(e) => {
                tracing::error!("Failed to update note {}: {}", note.id, e);
                report.failed.push(note.id.clone());
            }
        }
    }

    tracing::info!(
        "Contact reference migration finished: {} scanned, {} rewritten, {} unchanged, {} failed, {} unresolved",
        report.scanned,
        report.rewritten,
        report.unchanged,
        report.failed.len(),
        report.unresolved.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Note;
    use crate::remote::MemoryStore;
    use pretty_assertions::assert_eq;

    fn contacts() -> Vec<Contact> {
        vec![Contact::with_id("a1", "Ada"), Contact::with_id("b2", "Grace")]
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: NoteId::from(id),
            ..Note::new(text)
        }
    }

    #[test]
    fn remaps_by_position() {
        let lookup = ContactLookup::from_contacts(&contacts());
        let remapped = remap_legacy_references("Meet {{contact:1}} and {{contact:2}}", &lookup);

        assert_eq!(remapped.text, "Meet {{contact:a1}} and {{contact:b2}}");
        assert_eq!(remapped.substituted, 2);
        assert!(remapped.unresolved.is_empty());
    }

    #[test]
    fn out_of_range_reference_is_left_and_reported() {
        let lookup = ContactLookup::from_contacts(&contacts());
        let remapped = remap_legacy_references("Ask {{contact:99}} about {{contact:1}}", &lookup);

        assert_eq!(remapped.text, "Ask {{contact:99}} about {{contact:a1}}");
        assert_eq!(remapped.unresolved, vec!["99".to_string()]);
    }

    #[test]
    fn oversized_reference_is_left_and_reported() {
        let lookup = ContactLookup::from_contacts(&contacts());
        let text = "x {{contact:99999999999999999999999}} and {{contact:2}}";
        let remapped = remap_legacy_references(text, &lookup);

        assert_eq!(remapped.text, "x {{contact:99999999999999999999999}} and {{contact:b2}}");
        assert_eq!(
            remapped.unresolved,
            vec!["99999999999999999999999".to_string()]
        );
    }

    #[test]
    fn position_zero_is_unresolved() {
        let lookup = ContactLookup::from_contacts(&contacts());
        let remapped = remap_legacy_references("{{contact:0}}", &lookup);

        assert!(!remapped.changed());
        assert_eq!(remapped.unresolved, vec!["0".to_string()]);
    }

    #[test]
    fn remapping_is_idempotent() {
        let lookup = ContactLookup::from_contacts(&contacts());
        let once = remap_legacy_references("{{contact:2}} and {{contact:1}}", &lookup);
        let twice = remap_legacy_references(&once.text, &lookup);

        assert_eq!(twice.text, once.text);
        assert_eq!(twice.substituted, 0);
        assert!(twice.unresolved.is_empty());
    }

    #[test]
    fn mapping_follows_current_order_not_names() {
        let reordered = vec![Contact::with_id("b2", "Grace"), Contact::with_id("a1", "Ada")];
        let lookup = ContactLookup::from_contacts(&reordered);

        assert_eq!(
            remap_legacy_references("{{contact:1}}", &lookup).text,
            "{{contact:b2}}"
        );
    }

    #[test]
    fn lookup_resolves_ids_and_names() {
        let lookup = ContactLookup::from_contacts(&contacts());
        assert_eq!(lookup.resolve("b2"), Some(ContactId::from("b2")));
        assert_eq!(lookup.resolve(" ada "), Some(ContactId::from("a1")));
        assert_eq!(lookup.resolve("nobody"), None);
        assert_eq!(lookup.by_position(3), None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn migration_rewrites_and_skips_failures() {
        let store = MemoryStore::new()
            .with_contacts(contacts())
            .with_notes(vec![
                note("n1", "Meet {{contact:1}}"),
                note("n2", "Call {{contact:2}}"),
                note("n3", "Already {{contact:a1}}"),
                note("n4", "Lost {{contact:99}}"),
                note("n5", "no tokens at all"),
            ])
            .fail_updates_for(NoteId::from("n2"));

        let report = run_contact_reference_migration(&store, MigrationOptions::default())
            .await
            .unwrap();

        assert_eq!(report.scanned, 4);
        assert_eq!(report.rewritten, 1);
        assert_eq!(report.unchanged, 2);
        assert_eq!(report.failed, vec![NoteId::from("n2")]);
        assert_eq!(
            report.unresolved,
            vec![UnresolvedReference {
                note_id: NoteId::from("n4"),
                reference: "99".to_string(),
            }]
        );

        let stored = store.notes().await;
        assert_eq!(stored[0].text, "Meet {{contact:a1}}");
        assert_eq!(stored[1].text, "Call {{contact:2}}");
        assert_eq!(stored[3].text, "Lost {{contact:99}}");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn dry_run_writes_nothing() {
        let store = MemoryStore::new()
            .with_contacts(contacts())
            .with_notes(vec![note("n1", "Meet {{contact:1}}")]);

        let report = run_contact_reference_migration(&store, MigrationOptions { dry_run: true })
            .await
            .unwrap();

        assert!(report.dry_run);
        assert_eq!(report.rewritten, 1);
        assert_eq!(store.update_count(), 0);
        assert_eq!(store.notes().await[0].text, "Meet {{contact:1}}");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn second_run_is_a_no_op() {
        let store = MemoryStore::new()
            .with_contacts(contacts())
            .with_notes(vec![note("n1", "{{contact:1}} + {{contact:2}}")]);

        run_contact_reference_migration(&store, MigrationOptions::default())
            .await
            .unwrap();
        let second = run_contact_reference_migration(&store, MigrationOptions::default())
            .await
            .unwrap();

        assert_eq!(second.rewritten, 0);
        assert_eq!(second.unchanged, 1);
        assert_eq!(store.update_count(), 1);
    }
}
