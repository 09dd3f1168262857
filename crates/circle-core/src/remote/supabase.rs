//! PostgREST client for a Supabase project

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;

use super::{parse_api_error, RemoteError, RemoteResult, RemoteStore};
use crate::config::RemoteConfig;
use crate::models::{Contact, ContactId, Note, NoteId};

const CONTACT_COLUMNS: &str = "id,name";
const NOTE_COLUMNS: &str = "id,text";

#[derive(Serialize)]
struct ContactRow<'a> {
    id: &'a ContactId,
    name: &'a str,
}

#[derive(Serialize)]
struct NoteRow<'a> {
    id: &'a NoteId,
    text: &'a str,
}

#[derive(Serialize)]
struct NoteTextPatch<'a> {
    text: &'a str,
}

/// Remote store backed by the Supabase REST API
#[derive(Clone)]
pub struct SupabaseStore {
    rest_url: String,
    anon_key: String,
    client: Client,
}

impl SupabaseStore {
    pub fn new(config: &RemoteConfig) -> RemoteResult<Self> {
        let rest_url = normalize_rest_url(&config.url)?;
        Ok(Self {
            rest_url,
            anon_key: config.anon_key.clone(),
            client: Client::builder().timeout(config.timeout).build()?,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.rest_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> RemoteResult<Response> {
        let response = self.authorized(request).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Api(parse_api_error(status, &body)));
        }
        Ok(response)
    }

    async fn insert<T: Serialize + Sync>(&self, table: &str, row: &T) -> RemoteResult<()> {
        let request = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=minimal")
            .json(row);
        self.send(request).await?;
        Ok(())
    }
}

impl RemoteStore for SupabaseStore {
    async fn list_contacts(&self) -> RemoteResult<Vec<Contact>> {
        // No explicit order: legacy positions were resolved against the
        // default order and existing data depends on it.
        let request = self
            .client
            .get(self.table_url("contacts"))
            .query(&[("select", CONTACT_COLUMNS)]);
        Ok(self.send(request).await?.json().await?)
    }

    async fn list_notes(&self) -> RemoteResult<Vec<Note>> {
        let request = self
            .client
            .get(self.table_url("notes"))
            .query(&[("select", NOTE_COLUMNS)]);
        Ok(self.send(request).await?.json().await?)
    }

    async fn find_notes_containing(&self, needle: &str) -> RemoteResult<Vec<Note>> {
        let pattern = format!("like.*{needle}*");
        let request = self
            .client
            .get(self.table_url("notes"))
            .query(&[("select", NOTE_COLUMNS), ("text", pattern.as_str())]);
        Ok(self.send(request).await?.json().await?)
    }

    async fn update_note_text(&self, id: &NoteId, text: &str) -> RemoteResult<()> {
        let filter = format!("eq.{id}");
        let request = self
            .client
            .patch(self.table_url("notes"))
            .query(&[("id", filter.as_str())])
            .header("Prefer", "return=minimal")
            .json(&NoteTextPatch { text });
        self.send(request).await?;
        Ok(())
    }

    async fn insert_contact(&self, contact: &Contact) -> RemoteResult<()> {
        self.insert(
            "contacts",
            &ContactRow {
                id: &contact.id,
                name: &contact.name,
            },
        )
        .await
    }

    async fn insert_note(&self, note: &Note) -> RemoteResult<()> {
        self.insert(
            "notes",
            &NoteRow {
                id: &note.id,
                text: &note.text,
            },
        )
        .await
    }

    async fn delete_note(&self, id: &NoteId) -> RemoteResult<()> {
        let filter = format!("eq.{id}");
        let request = self
            .client
            .delete(self.table_url("notes"))
            .query(&[("id", filter.as_str())]);
        self.send(request).await?;
        Ok(())
    }
}

/// Derive the REST endpoint from a project URL
pub fn normalize_rest_url(url: &str) -> RemoteResult<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(RemoteError::InvalidConfiguration(
            "Supabase URL must not be empty".to_string(),
        ));
    }
    if !crate::util::is_http_url(trimmed) {
        return Err(RemoteError::InvalidConfiguration(
            "Supabase URL must include http:// or https://".to_string(),
        ));
    }
    if trimmed.ends_with("/rest/v1") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}/rest/v1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rest_url_appends_rest_path() {
        assert_eq!(
            normalize_rest_url("https://demo.supabase.co/").unwrap(),
            "https://demo.supabase.co/rest/v1"
        );
    }

    #[test]
    fn normalize_rest_url_keeps_existing_rest_path() {
        assert_eq!(
            normalize_rest_url("https://demo.supabase.co/rest/v1").unwrap(),
            "https://demo.supabase.co/rest/v1"
        );
    }

    #[test]
    fn normalize_rest_url_rejects_invalid_values() {
        assert!(normalize_rest_url("").is_err());
        assert!(normalize_rest_url("demo.supabase.co").is_err());
    }

    #[test]
    fn store_builds_table_urls() {
        let config = RemoteConfig::new("https://demo.supabase.co", "anon").unwrap();
        let store = SupabaseStore::new(&config).unwrap();
        assert_eq!(
            store.table_url("notes"),
            "https://demo.supabase.co/rest/v1/notes"
        );
    }

    #[test]
    fn rows_serialize_only_remote_columns() {
        let contact = Contact::with_id("a1", "Ada");
        let row = ContactRow {
            id: &contact.id,
            name: &contact.name,
        };
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"id":"a1","name":"Ada"}"#
        );
    }
}
