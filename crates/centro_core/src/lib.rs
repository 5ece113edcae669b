//! Shared local data layer for the community console.
//! Every view surface reads and writes calendar events and inventory items
//! through this crate.

pub mod agenda;
pub mod calendar;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod stock;
pub mod store;

pub use agenda::{project_agenda, AgendaCategory, AgendaEntry, AgendaStatus, AgendaWhen};
pub use calendar::{
    build_month_grid, can_schedule_on, month_from_name, year_options, CalendarCell,
    CalendarCursor, CalendarError, DayCell, MonthGrid,
};
pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::event::{Event, EventId, EventValidationError, NewEvent, Period, PeriodDescriptor};
pub use model::inventory::{InventoryItem, ItemDraft, ItemId, ItemValidationError};
pub use repo::event_repo::{CollectionEventRepository, EventRepository};
pub use repo::inventory_repo::{default_stock, CollectionInventoryRepository, InventoryRepository};
pub use repo::{RepoError, RepoResult};
pub use service::console_service::ConsoleService;
pub use stock::{InventorySummary, LOW_STOCK_THRESHOLD};
pub use store::{
    CollectionStore, SqliteCollectionStore, StoreError, StoreResult, EVENTS_COLLECTION,
    INVENTORY_COLLECTION,
};

/// Version of the data layer, reported by the CLI snapshot.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_matches_manifest() {
        assert_eq!(core_version(), env!("CARGO_PKG_VERSION"));
        assert!(!core_version().is_empty());
    }
}
