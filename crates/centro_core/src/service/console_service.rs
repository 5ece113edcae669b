//! Console use-case service.
//!
//! # Invariants
//! - Every read goes back to the repositories; no view model is cached, so a
//!   surface sees other surfaces' writes on its next call.
//! - Service APIs never bypass repository validation/persistence contracts.

use crate::agenda::{project_agenda, AgendaEntry};
use crate::calendar::{build_month_grid, CalendarCursor, CalendarError, MonthGrid};
use crate::model::event::{Event, NewEvent};
use crate::model::inventory::{InventoryItem, ItemDraft};
use crate::repo::event_repo::{CollectionEventRepository, EventRepository};
use crate::repo::inventory_repo::{CollectionInventoryRepository, InventoryRepository};
use crate::repo::RepoResult;
use crate::stock::{self, InventorySummary};
use crate::store::CollectionStore;
use chrono::{NaiveDate, NaiveDateTime};

/// Facade over the event and inventory repositories.
pub struct ConsoleService<E: EventRepository, I: InventoryRepository> {
    events: E,
    inventory: I,
}

impl<'store> ConsoleService<CollectionEventRepository<'store>, CollectionInventoryRepository<'store>> {
    /// Builds a service whose repositories share `store`.
    pub fn over_store(store: &'store dyn CollectionStore) -> Self {
        Self::new(
            CollectionEventRepository::new(store),
            CollectionInventoryRepository::new(store),
        )
    }
}

impl<E: EventRepository, I: InventoryRepository> ConsoleService<E, I> {
    pub fn new(events: E, inventory: I) -> Self {
        Self { events, inventory }
    }

    pub fn create_event(&self, new_event: NewEvent) -> RepoResult<Event> {
        self.events.create_event(new_event)
    }

    pub fn list_events(&self) -> Vec<Event> {
        self.events.list_events()
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        self.events.find_events_by_date(date)
    }

    /// Day grid for the cursor's month with each day's events attached.
    pub fn month_view(
        &self,
        cursor: CalendarCursor,
        today: NaiveDate,
    ) -> Result<MonthGrid, CalendarError> {
        build_month_grid(cursor.year(), cursor.month(), today, &self.events.list_events())
    }

    pub fn agenda(&self, now: NaiveDateTime) -> Vec<AgendaEntry> {
        project_agenda(&self.events.list_events(), now)
    }

    pub fn create_item(&self, draft: ItemDraft) -> RepoResult<InventoryItem> {
        self.inventory.create_item(draft)
    }

    pub fn update_item(&self, id: &str, draft: ItemDraft) -> RepoResult<Option<InventoryItem>> {
        self.inventory.update_item(id, draft)
    }

    pub fn delete_item(&self, id: &str) -> RepoResult<bool> {
        self.inventory.delete_item(id)
    }

    pub fn adjust_quantity(&self, id: &str, delta: i64) -> RepoResult<Option<InventoryItem>> {
        self.inventory.adjust_quantity(id, delta)
    }

    pub fn list_items(&self) -> Vec<InventoryItem> {
        self.inventory.list_items()
    }

    pub fn seed_defaults_if_absent(&self) -> RepoResult<bool> {
        self.inventory.seed_defaults_if_absent()
    }

    pub fn inventory_summary(&self) -> InventorySummary {
        stock::summarize(&self.inventory.list_items())
    }

    pub fn low_stock_items(&self) -> Vec<InventoryItem> {
        stock::low_stock(&self.inventory.list_items())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn search_items(&self, term: &str) -> Vec<InventoryItem> {
        stock::search_items(&self.inventory.list_items(), term)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Compact ledger rows for the dashboard.
    pub fn dashboard_items(&self) -> Vec<InventoryItem> {
        stock::dashboard_preview(&self.inventory.list_items()).to_vec()
    }
}
