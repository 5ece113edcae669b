//! Event repository contract and collection-backed implementation.
//!
//! # Invariants
//! - Events are append-only: there is no update or delete path.
//! - `find_events_by_date` matches the exact calendar day, never a range.
//! - Creating an event on a past day is allowed here; the scheduling guard
//!   lives with the caller (`calendar::can_schedule_on`).

use super::{decode_records, encode_record, RepoResult};
use crate::model::event::{Event, NewEvent};
use crate::store::{CollectionStore, EVENTS_COLLECTION};
use chrono::NaiveDate;
use log::{info, warn};

/// Repository interface for calendar events.
pub trait EventRepository {
    /// Validates, assigns an id, appends and persists the new event.
    fn create_event(&self, new_event: NewEvent) -> RepoResult<Event>;
    /// All persisted events in insertion order.
    fn list_events(&self) -> Vec<Event>;
    /// Events whose `date` equals `date`.
    fn find_events_by_date(&self, date: NaiveDate) -> Vec<Event>;
}

/// Event repository persisting into the `events` collection.
pub struct CollectionEventRepository<'store> {
    store: &'store dyn CollectionStore,
}

impl<'store> CollectionEventRepository<'store> {
    pub fn new(store: &'store dyn CollectionStore) -> Self {
        Self { store }
    }
}

impl EventRepository for CollectionEventRepository<'_> {
    fn create_event(&self, new_event: NewEvent) -> RepoResult<Event> {
        if let Err(err) = new_event.validate() {
            warn!("event=event_create module=repo status=rejected reason={err}");
            return Err(err.into());
        }

        let mut raw = self.store.load(EVENTS_COLLECTION);
        let event = new_event.into_event();
        raw.push(encode_record(&event)?);
        self.store.save(EVENTS_COLLECTION, &raw)?;

        info!(
            "event=event_create module=repo status=ok event_id={} date={} count={}",
            event.id,
            event.date,
            raw.len()
        );
        Ok(event)
    }

    fn list_events(&self) -> Vec<Event> {
        decode_records(EVENTS_COLLECTION, self.store.load(EVENTS_COLLECTION))
    }

    fn find_events_by_date(&self, date: NaiveDate) -> Vec<Event> {
        self.list_events()
            .into_iter()
            .filter(|event| event.date == date)
            .collect()
    }
}
