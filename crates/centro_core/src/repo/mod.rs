//! Typed repositories over the collection store.
//!
//! # Responsibility
//! - Own the serialized shape of each record kind.
//! - Validate writes, then persist the full updated collection.
//!
//! # Invariants
//! - Every mutating call saves through the store before returning.
//! - A rejected write leaves the persisted collection untouched.
//! - Writes overwrite the collection with the repository's fresh read
//!   (last writer wins, no merge).
//! - Writes edit the raw records; a record that fails to decode is hidden
//!   from reads but written back untouched.

use crate::model::event::EventValidationError;
use crate::model::inventory::ItemValidationError;
use crate::store::StoreError;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod event_repo;
pub mod inventory_repo;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    EventValidation(EventValidationError),
    ItemValidation(ItemValidationError),
    Store(StoreError),
    Serialization(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventValidation(err) => write!(f, "{err}"),
            Self::ItemValidation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "failed to encode record: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventValidation(err) => Some(err),
            Self::ItemValidation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl RepoError {
    /// Whether the caller should keep its form open and let the user fix input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EventValidation(_) | Self::ItemValidation(_))
    }
}

impl From<EventValidationError> for RepoError {
    fn from(value: EventValidationError) -> Self {
        Self::EventValidation(value)
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::ItemValidation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Decodes raw records, skipping any that no longer match the typed shape.
pub(crate) fn decode_records<T: DeserializeOwned>(
    collection: &str,
    raw: Vec<JsonValue>,
) -> Vec<T> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(
                    "event=record_decode module=repo status=degraded collection={collection} index={index} error={err}"
                );
                None
            }
        })
        .collect()
}

pub(crate) fn encode_records<T: Serialize>(records: &[T]) -> RepoResult<Vec<JsonValue>> {
    records.iter().map(encode_record).collect()
}

pub(crate) fn encode_record<T: Serialize>(record: &T) -> RepoResult<JsonValue> {
    serde_json::to_value(record).map_err(RepoError::from)
}

/// Index of the first raw record whose `id` equals `id`.
///
/// Works on undecoded values so writes never drop records that no longer
/// match the typed shape.
pub(crate) fn position_of(raw: &[JsonValue], id: &str) -> Option<usize> {
    raw.iter().position(|value| record_id(value) == Some(id))
}

pub(crate) fn record_id(value: &JsonValue) -> Option<&str> {
    value.get("id").and_then(JsonValue::as_str)
}
