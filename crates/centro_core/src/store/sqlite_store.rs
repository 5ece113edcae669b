//! SQLite-backed collection store.
//!
//! Each collection is one row of `collections`, its payload a JSON array.

use super::{CollectionStore, StoreError, StoreResult};
use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use log::{debug, error, warn};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value as JsonValue;

/// Collection store over a migrated SQLite connection.
///
/// Surfaces that share one connection see each other's writes on their next
/// `load`; there is no change notification.
pub struct SqliteCollectionStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCollectionStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    ///
    /// # Errors
    /// - `DbError::NotReady` when the schema is not at the latest version.
    pub fn try_new(conn: &'conn Connection) -> Result<Self, DbError> {
        let version = current_user_version(conn)?;
        if version != latest_version() {
            return Err(DbError::NotReady(format!(
                "schema version {version}, expected {}",
                latest_version()
            )));
        }
        Ok(Self { conn })
    }

    fn read_payload(&self, name: &str) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT payload FROM collections WHERE name = ?1;",
                [name],
                |row| row.get(0),
            )
            .optional()
    }
}

impl CollectionStore for SqliteCollectionStore<'_> {
    fn load(&self, name: &str) -> Vec<JsonValue> {
        let payload = match self.read_payload(name) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!("event=collection_load module=store status=ok collection={name} found=false");
                return Vec::new();
            }
            Err(err) => {
                error!(
                    "event=collection_load module=store status=degraded collection={name} error_code=read_failed error={err}"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<JsonValue>>(&payload) {
            Ok(records) => {
                debug!(
                    "event=collection_load module=store status=ok collection={name} count={}",
                    records.len()
                );
                records
            }
            Err(err) => {
                warn!(
                    "event=collection_load module=store status=degraded collection={name} error_code=malformed_payload error={err}"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, name: &str, records: &[JsonValue]) -> StoreResult<()> {
        let payload = serde_json::to_string(records).map_err(StoreError::Encode)?;
        self.conn.execute(
            "INSERT INTO collections (name, payload, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![name, payload],
        )?;
        debug!(
            "event=collection_save module=store status=ok collection={name} count={}",
            records.len()
        );
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        match self.read_payload(name) {
            Ok(payload) => payload.is_some(),
            Err(err) => {
                error!(
                    "event=collection_exists module=store status=degraded collection={name} error={err}"
                );
                false
            }
        }
    }
}
