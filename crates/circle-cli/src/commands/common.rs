use std::env;
use std::path::{Path, PathBuf};

use chrono::Utc;
use circle_core::config::{RemoteConfig, DB_PATH_ENV};
use circle_core::references::render_with_names;
use circle_core::remote::SupabaseStore;
use circle_core::services::DatabaseService;
use circle_core::{Contact, LocalSnapshot, Note};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct ContactListItem {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub note_count: usize,
}

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: String,
    pub preview: String,
    pub text: String,
    pub contact_id: Option<String>,
    pub references: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub relative_time: String,
}

pub async fn load_local_snapshot(db_path: &Path) -> Result<LocalSnapshot, CliError> {
    let db = open_database(db_path).await?;
    Ok(db.load_snapshot().await?)
}

pub fn contact_to_list_item(contact: &Contact, snapshot: &LocalSnapshot) -> ContactListItem {
    ContactListItem {
        id: contact.id.to_string(),
        name: contact.name.clone(),
        initials: contact.initials(),
        note_count: circle_core::search::notes_for_contact(&snapshot.notes, &contact.id).len(),
    }
}

pub fn format_contact_lines(contacts: &[&Contact]) -> Vec<String> {
    contacts
        .iter()
        .map(|contact| {
            let id = contact.id.to_string();
            let short_id = id.chars().take(13).collect::<String>();
            format!("{short_id:<13}  {:<3}  {}", contact.initials(), contact.name)
        })
        .collect()
}

pub fn note_to_list_item(note: &Note, contacts: &[Contact]) -> NoteListItem {
    let now_ms = Utc::now().timestamp_millis();
    NoteListItem {
        id: note.id.to_string(),
        preview: note_preview(note, contacts, 80),
        text: note.text.clone(),
        contact_id: note.contact_id.as_ref().map(ToString::to_string),
        references: note.references().into_iter().map(str::to_string).collect(),
        created_at: note.created_at,
        updated_at: note.updated_at,
        relative_time: format_relative_time(note.updated_at, now_ms),
    }
}

pub fn format_note_lines(notes: &[&Note], contacts: &[Contact]) -> Vec<String> {
    let now_ms = Utc::now().timestamp_millis();
    notes
        .iter()
        .map(|note| {
            let id = note.id.to_string();
            let short_id = id.chars().take(13).collect::<String>();
            let preview = note_preview(note, contacts, 40);
            let relative_time = format_relative_time(note.updated_at, now_ms);
            format!("{short_id:<13}  {preview:<40}  {relative_time}")
        })
        .collect()
}

/// First line of the note with contact tokens shown as names
pub fn note_preview(note: &Note, contacts: &[Contact], max_chars: usize) -> String {
    let rendered = render_with_names(&note.text, contacts);
    let first_line = rendered.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}

pub fn normalize_contact_query(query: &str) -> Result<String, CliError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyContactQuery)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Read and parse a snapshot JSON file
pub fn read_snapshot_file(path: &Path) -> Result<LocalSnapshot, CliError> {
    let payload = std::fs::read_to_string(path).map_err(|source| CliError::SnapshotFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LocalSnapshot::from_json(&payload)?)
}

/// Write a snapshot as pretty-printed JSON
pub fn write_snapshot_file(path: &Path, snapshot: &LocalSnapshot) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(snapshot)?)?;
    Ok(())
}

pub fn remote_store_from_env() -> Result<SupabaseStore, CliError> {
    let config = RemoteConfig::from_env()?;
    tracing::debug!("Using remote store at {}", config.url);
    Ok(SupabaseStore::new(&config)?)
}

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> PathBuf {
    cli_db_path
        .or_else(|| env::var_os(DB_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(default_db_path)
}

pub fn default_db_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("circle.db"),
        |dir| dir.join("circle").join("circle.db"),
    )
}

pub async fn open_database(path: &Path) -> Result<DatabaseService, CliError> {
    Ok(DatabaseService::open_path(path.to_path_buf()).await?)
}
