//! Snapshot repository implementation

use crate::error::{Error, Result};
use crate::models::{LocalSnapshot, SNAPSHOT_KEY};
use libsql::Connection;

/// Typed access to the persisted snapshot (async)
#[allow(async_fn_in_trait)]
pub trait SnapshotRepository {
    /// Load the snapshot.
    ///
    /// A missing blob yields an empty snapshot. A malformed blob is logged,
    /// discarded and also yields an empty snapshot.
    async fn load(&self) -> Result<LocalSnapshot>;

    /// Persist the snapshot, stamped with the current schema version
    async fn save(&self, snapshot: &LocalSnapshot) -> Result<()>;

    /// Remove the persisted snapshot
    async fn clear(&self) -> Result<()>;
}

/// libSQL implementation of `SnapshotRepository`
pub struct LibSqlSnapshotRepository<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlSnapshotRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for LibSqlSnapshotRepository<'_> {
    async fn load(&self) -> Result<LocalSnapshot> {
        let Some(raw) = self.get_value(SNAPSHOT_KEY).await? else {
            return Ok(LocalSnapshot::default());
        };

        match LocalSnapshot::from_json(&raw) {
            Ok(snapshot) => Ok(snapshot),
            Err(Error::Serialization(e)) => {
                tracing::warn!("Discarding malformed snapshot: {}", e);
                self.delete_value(SNAPSHOT_KEY).await?;
                Ok(LocalSnapshot::default())
            }
            Err(e) => Err(e),
        }
    }

    async fn save(&self, snapshot: &LocalSnapshot) -> Result<()> {
        let stamped = LocalSnapshot {
            version: crate::models::SNAPSHOT_SCHEMA_VERSION,
            ..snapshot.clone()
        };
        self.set_value(SNAPSHOT_KEY, &stamped.to_json()?).await
    }

    async fn clear(&self) -> Result<()> {
        self.delete_value(SNAPSHOT_KEY).await
    }
}

impl LibSqlSnapshotRepository<'_> {
    async fn get_value(&self, key: &str) -> Result<Option<String>> {
        let mut rows = self
            .conn
            .query("SELECT value FROM local_store WHERE key = ?", [key])
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(row.get::<String>(0)?))
        } else {
            Ok(None)
        }
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let now = crate::util::unix_millis_now();
        self.conn
            .execute(
                "INSERT OR REPLACE INTO local_store (key, value, updated_at) VALUES (?, ?, ?)",
                libsql::params![key, value, now],
            )
            .await?;
        Ok(())
    }

    async fn delete_value(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM local_store WHERE key = ?", [key])
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::{Contact, Note};
    use pretty_assertions::assert_eq;

    async fn setup() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_load_missing_returns_default() {
        let db = setup().await;
        let repo = LibSqlSnapshotRepository::new(db.connection());

        let snapshot = repo.load().await.unwrap();
        assert_eq!(snapshot, LocalSnapshot::default());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_save_and_load() {
        let db = setup().await;
        let repo = LibSqlSnapshotRepository::new(db.connection());

        let mut snapshot = LocalSnapshot::default();
        snapshot.upsert_contact(Contact::with_id("a1", "Ada"));
        snapshot.upsert_note(Note::new("Met {{contact:a1}}"));
        repo.save(&snapshot).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), snapshot);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_malformed_blob_is_discarded() {
        let db = setup().await;
        let repo = LibSqlSnapshotRepository::new(db.connection());
        repo.set_value(SNAPSHOT_KEY, "{\"contacts\": 42").await.unwrap();

        assert_eq!(repo.load().await.unwrap(), LocalSnapshot::default());
        assert_eq!(repo.get_value(SNAPSHOT_KEY).await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_newer_version_is_kept_and_reported() {
        let db = setup().await;
        let repo = LibSqlSnapshotRepository::new(db.connection());
        repo.set_value(SNAPSHOT_KEY, r#"{"version": 5}"#).await.unwrap();

        assert!(matches!(
            repo.load().await,
            Err(Error::UnsupportedSnapshotVersion { found: 5, .. })
        ));
        assert!(repo.get_value(SNAPSHOT_KEY).await.unwrap().is_some());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_legacy_blob_upgrades_on_save() {
        let db = setup().await;
        let repo = LibSqlSnapshotRepository::new(db.connection());
        repo.set_value(SNAPSHOT_KEY, r#"{"contacts":[{"id":1,"name":"Ada"}]}"#)
            .await
            .unwrap();

        let loaded = repo.load().await.unwrap();
        repo.save(&loaded).await.unwrap();

        let raw = repo.get_value(SNAPSHOT_KEY).await.unwrap().unwrap();
        assert!(raw.contains("\"version\":1"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_clear() {
        let db = setup().await;
        let repo = LibSqlSnapshotRepository::new(db.connection());
        repo.save(&LocalSnapshot::default()).await.unwrap();
        repo.clear().await.unwrap();

        assert_eq!(repo.get_value(SNAPSHOT_KEY).await.unwrap(), None);
    }
}
