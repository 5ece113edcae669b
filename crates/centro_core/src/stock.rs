//! Derived inventory figures.
//!
//! Everything here is recomputed from the collection on each call.

use crate::model::inventory::InventoryItem;

/// Items at or below this quantity count as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 5;
/// Items shown in the dashboard's compact ledger.
pub const DASHBOARD_PREVIEW_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventorySummary {
    pub total_count: usize,
    pub total_value: f64,
    pub low_stock_count: usize,
}

/// Sum of `quantity * price` over all items.
pub fn total_value(items: &[InventoryItem]) -> f64 {
    items.iter().map(line_total).sum()
}

/// Stock value of a single item.
pub fn line_total(item: &InventoryItem) -> f64 {
    item.quantity as f64 * item.price
}

pub fn low_stock(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items
        .iter()
        .filter(|item| is_low_stock(item))
        .collect()
}

pub fn is_low_stock(item: &InventoryItem) -> bool {
    item.quantity <= LOW_STOCK_THRESHOLD
}

/// Number of distinct item records, not the summed quantity.
pub fn total_count(items: &[InventoryItem]) -> usize {
    items.len()
}

pub fn summarize(items: &[InventoryItem]) -> InventorySummary {
    InventorySummary {
        total_count: total_count(items),
        total_value: total_value(items),
        low_stock_count: items.iter().filter(|item| is_low_stock(item)).count(),
    }
}

/// Case-insensitive match on name or description; a blank term keeps all.
pub fn search_items<'a>(items: &'a [InventoryItem], term: &str) -> Vec<&'a InventoryItem> {
    let needle = term.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// First items in insertion order, as shown on the dashboard.
pub fn dashboard_preview(items: &[InventoryItem]) -> &[InventoryItem] {
    &items[..items.len().min(DASHBOARD_PREVIEW_LEN)]
}
