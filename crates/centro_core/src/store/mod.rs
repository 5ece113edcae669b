//! Named persisted collections.
//!
//! # Responsibility
//! - Load/save a whole named collection of raw JSON records.
//! - Hide the storage engine from typed repositories.
//!
//! # Invariants
//! - The store never inspects record shape; repositories own it.
//! - `load` never fails: absent, unreadable or malformed data is an empty
//!   collection.
//! - `save` replaces the entire collection in one statement.

use crate::db::DbError;
use serde_json::Value as JsonValue;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite_store;

pub use sqlite_store::SqliteCollectionStore;

/// Collection holding calendar events.
pub const EVENTS_COLLECTION: &str = "events";
/// Collection holding inventory items.
pub const INVENTORY_COLLECTION: &str = "inventory";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persisted-collection primitive shared by every repository.
pub trait CollectionStore {
    /// Returns the records of `name` in insertion order, or an empty list.
    fn load(&self, name: &str) -> Vec<JsonValue>;
    /// Overwrites the whole collection `name` with `records`.
    fn save(&self, name: &str, records: &[JsonValue]) -> StoreResult<()>;
    /// Whether `name` has ever been saved (an empty saved list counts).
    fn exists(&self, name: &str) -> bool;
}
