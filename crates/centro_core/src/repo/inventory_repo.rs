//! Inventory repository contract and collection-backed implementation.
//!
//! # Invariants
//! - `create_item`/`update_item` reject invalid drafts before touching storage.
//! - `adjust_quantity` never stores a negative quantity; it clamps at zero.
//! - Operations on an unknown id do not write.
//! - Records that fail to decode survive every write unchanged.

use super::{decode_records, encode_record, encode_records, position_of, record_id, RepoResult};
use crate::model::inventory::{InventoryItem, ItemDraft};
use crate::store::{CollectionStore, INVENTORY_COLLECTION};
use log::{debug, info, warn};
use serde_json::Value as JsonValue;

/// Repository interface for inventory items.
pub trait InventoryRepository {
    /// Validates, assigns an id, appends and persists the new item.
    fn create_item(&self, draft: ItemDraft) -> RepoResult<InventoryItem>;
    /// Replaces every non-key field of item `id`; `Ok(None)` when absent.
    fn update_item(&self, id: &str, draft: ItemDraft) -> RepoResult<Option<InventoryItem>>;
    /// Removes item `id`; returns whether a record was removed.
    fn delete_item(&self, id: &str) -> RepoResult<bool>;
    /// Sets `quantity = max(0, quantity + delta)`; `Ok(None)` when absent.
    fn adjust_quantity(&self, id: &str, delta: i64) -> RepoResult<Option<InventoryItem>>;
    /// All persisted items in insertion order.
    fn list_items(&self) -> Vec<InventoryItem>;
    /// Persists [`default_stock`] if the collection was never saved.
    fn seed_defaults_if_absent(&self) -> RepoResult<bool>;
}

/// Starter stock written on first use of an empty installation.
pub fn default_stock() -> Vec<InventoryItem> {
    vec![
        InventoryItem::with_id(
            "1",
            ItemDraft::new("White candle", 25, 3.5)
                .with_description("White candle for spiritual cleansing"),
        ),
        InventoryItem::with_id(
            "2",
            ItemDraft::new("Red candle", 12, 18.0).with_description("Red and black candle"),
        ),
        InventoryItem::with_id(
            "3",
            ItemDraft::new("Smudge herbs", 8, 15.0).with_description("Herbs for smudging"),
        ),
    ]
}

/// Inventory repository persisting into the `inventory` collection.
pub struct CollectionInventoryRepository<'store> {
    store: &'store dyn CollectionStore,
}

impl<'store> CollectionInventoryRepository<'store> {
    pub fn new(store: &'store dyn CollectionStore) -> Self {
        Self { store }
    }

    fn load_raw(&self) -> Vec<JsonValue> {
        self.store.load(INVENTORY_COLLECTION)
    }

    fn persist(&self, raw: &[JsonValue]) -> RepoResult<()> {
        self.store.save(INVENTORY_COLLECTION, raw)?;
        Ok(())
    }
}

impl InventoryRepository for CollectionInventoryRepository<'_> {
    fn create_item(&self, draft: ItemDraft) -> RepoResult<InventoryItem> {
        if let Err(err) = draft.validate() {
            warn!("event=item_create module=repo status=rejected reason={err}");
            return Err(err.into());
        }

        let mut raw = self.load_raw();
        let item = InventoryItem::from_draft(draft);
        raw.push(encode_record(&item)?);
        self.persist(&raw)?;

        info!(
            "event=item_create module=repo status=ok item_id={} count={}",
            item.id,
            raw.len()
        );
        Ok(item)
    }

    fn update_item(&self, id: &str, draft: ItemDraft) -> RepoResult<Option<InventoryItem>> {
        if let Err(err) = draft.validate() {
            warn!("event=item_update module=repo status=rejected item_id={id} reason={err}");
            return Err(err.into());
        }

        let mut raw = self.load_raw();
        let Some(index) = position_of(&raw, id) else {
            debug!("event=item_update module=repo status=skipped item_id={id} found=false");
            return Ok(None);
        };
        // Full replacement of non-key fields, so the old record need not decode.
        let updated = InventoryItem::with_id(id, draft);
        raw[index] = encode_record(&updated)?;
        self.persist(&raw)?;

        info!("event=item_update module=repo status=ok item_id={id}");
        Ok(Some(updated))
    }

    fn delete_item(&self, id: &str) -> RepoResult<bool> {
        let mut raw = self.load_raw();
        let before = raw.len();
        raw.retain(|value| record_id(value) != Some(id));
        if raw.len() == before {
            debug!("event=item_delete module=repo status=skipped item_id={id} found=false");
            return Ok(false);
        }
        self.persist(&raw)?;

        info!("event=item_delete module=repo status=ok item_id={id} count={}", raw.len());
        Ok(true)
    }

    fn adjust_quantity(&self, id: &str, delta: i64) -> RepoResult<Option<InventoryItem>> {
        let mut raw = self.load_raw();
        let Some(index) = position_of(&raw, id) else {
            debug!("event=item_adjust module=repo status=skipped item_id={id} found=false");
            return Ok(None);
        };
        let mut item: InventoryItem = match serde_json::from_value(raw[index].clone()) {
            Ok(item) => item,
            Err(err) => {
                warn!(
                    "event=item_adjust module=repo status=skipped item_id={id} error_code=undecodable error={err}"
                );
                return Ok(None);
            }
        };
        item.adjust_quantity(delta);
        raw[index] = encode_record(&item)?;
        self.persist(&raw)?;

        info!(
            "event=item_adjust module=repo status=ok item_id={id} delta={delta} quantity={}",
            item.quantity
        );
        Ok(Some(item))
    }

    fn list_items(&self) -> Vec<InventoryItem> {
        decode_records(INVENTORY_COLLECTION, self.load_raw())
    }

    fn seed_defaults_if_absent(&self) -> RepoResult<bool> {
        if self.store.exists(INVENTORY_COLLECTION) {
            return Ok(false);
        }
        let items = default_stock();
        self.persist(&encode_records(&items)?)?;
        info!("event=item_seed module=repo status=ok count={}", items.len());
        Ok(true)
    }
}
