//! Remote data store access
//!
//! The hosted store exposes two tables, `contacts (id, name)` and
//! `notes (id, text)`, queried with substring and equality filters.

mod memory;
mod supabase;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Contact, Note, NoteId};

pub use memory::MemoryStore;
pub use supabase::{normalize_rest_url, SupabaseStore};

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Invalid remote store configuration: {0}")]
    InvalidConfiguration(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Remote store error: {0}")]
    Api(String),
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Operations the migration scripts and clients need from the hosted store
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    /// All contacts, in the store's default order
    async fn list_contacts(&self) -> RemoteResult<Vec<Contact>>;

    /// All notes
    async fn list_notes(&self) -> RemoteResult<Vec<Note>>;

    /// Notes whose text contains `needle`
    async fn find_notes_containing(&self, needle: &str) -> RemoteResult<Vec<Note>>;

    /// Replace a note's text
    async fn update_note_text(&self, id: &NoteId, text: &str) -> RemoteResult<()>;

    /// Insert a new contact row
    async fn insert_contact(&self, contact: &Contact) -> RemoteResult<()>;

    /// Insert a new note row
    async fn insert_note(&self, note: &Note) -> RemoteResult<()>;

    /// Delete a note row
    async fn delete_note(&self, id: &NoteId) -> RemoteResult<()>;
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
    error: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            let detail = payload.details.or(payload.hint);
            return match detail {
                Some(detail) if !detail.trim().is_empty() => {
                    format!("{} - {} ({})", message.trim(), detail.trim(), status.as_u16())
                }
                _ => format!("{} ({})", message.trim(), status.as_u16()),
            };
        }
    }

    let trimmed = crate::util::compact_text(body);
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}
