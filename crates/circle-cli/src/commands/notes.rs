use std::path::Path;

use circle_core::migrate::ContactLookup;
use circle_core::search::{filter_notes, notes_for_contact};
use circle_core::{LocalSnapshot, Note};

use crate::commands::common::{
    format_note_lines, load_local_snapshot, normalize_contact_query, note_to_list_item,
    NoteListItem,
};
use crate::error::CliError;

pub async fn run_notes(
    query: Option<&str>,
    contact: Option<&str>,
    limit: usize,
    as_json: bool,
    db_path: &Path,
) -> Result<(), CliError> {
    let snapshot = load_local_snapshot(db_path).await?;
    let notes = select_notes(&snapshot, query, contact, limit)?;

    if as_json {
        let json_items = notes
            .iter()
            .map(|note| note_to_list_item(note, &snapshot.contacts))
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
        return Ok(());
    }

    if notes.is_empty() {
        println!("No notes found.");
        return Ok(());
    }

    for line in format_note_lines(&notes, &snapshot.contacts) {
        println!("{line}");
    }
    Ok(())
}

/// Notes matching the filters, newest first
pub fn select_notes<'a>(
    snapshot: &'a LocalSnapshot,
    query: Option<&str>,
    contact: Option<&str>,
    limit: usize,
) -> Result<Vec<&'a Note>, CliError> {
    let mut notes = match contact {
        Some(contact) => {
            let contact = normalize_contact_query(contact)?;
            let contact_id = ContactLookup::from_contacts(&snapshot.contacts)
                .resolve(&contact)
                .ok_or(CliError::ContactNotFound(contact))?;
            notes_for_contact(&snapshot.notes, &contact_id)
        }
        None => snapshot.notes.iter().collect(),
    };

    if let Some(query) = query {
        let matching = filter_notes(&snapshot.notes, query);
        notes.retain(|note| matching.iter().any(|candidate| candidate.id == note.id));
    }

    notes.sort_by(|left, right| right.updated_at.cmp(&left.updated_at));
    notes.truncate(limit);
    Ok(notes)
}
