//! Inventory item model.
//!
//! # Invariants
//! - `name` is non-empty; `quantity` and `price` are never negative.
//! - Quantity decrements clamp at zero instead of failing.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque inventory item identifier.
pub type ItemId = String;

/// One stocked material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    /// Unit price.
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl InventoryItem {
    /// Creates an item from validated input under a fresh id.
    pub fn from_draft(draft: ItemDraft) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    /// Creates an item with a caller-provided id (seed data, imports).
    pub fn with_id(id: impl Into<ItemId>, draft: ItemDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            quantity: draft.quantity,
            price: draft.price,
            description: draft.description,
        }
    }

    /// Replaces every non-key field.
    pub fn apply(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.quantity = draft.quantity;
        self.price = draft.price;
        self.description = draft.description;
    }

    /// Adds `delta` to the quantity, clamping the result at zero.
    pub fn adjust_quantity(&mut self, delta: i64) {
        self.quantity = self.quantity.saturating_add(delta).max(0);
    }
}

/// Editable fields of an item, used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub description: String,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        if self.quantity < 0 {
            return Err(ItemValidationError::NegativeQuantity(self.quantity));
        }
        if !self.price.is_finite() {
            return Err(ItemValidationError::NonFinitePrice);
        }
        if self.price < 0.0 {
            return Err(ItemValidationError::NegativePrice(self.price));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemValidationError {
    EmptyName,
    NegativeQuantity(i64),
    NegativePrice(f64),
    NonFinitePrice,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "item name must not be empty"),
            Self::NegativeQuantity(value) => write!(f, "item quantity {value} is negative"),
            Self::NegativePrice(value) => write!(f, "item price {value} is negative"),
            Self::NonFinitePrice => write!(f, "item price must be a finite number"),
        }
    }
}

impl Error for ItemValidationError {}

#[cfg(test)]
mod tests {
    use super::{InventoryItem, ItemDraft, ItemValidationError};

    #[test]
    fn adjust_quantity_clamps_at_zero() {
        let mut item = InventoryItem::with_id("1", ItemDraft::new("Candle", 2, 3.5));
        item.adjust_quantity(-5);
        assert_eq!(item.quantity, 0);
        item.adjust_quantity(3);
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn validate_rejects_each_invalid_field() {
        assert_eq!(
            ItemDraft::new("", 1, 1.0).validate(),
            Err(ItemValidationError::EmptyName)
        );
        assert_eq!(
            ItemDraft::new("Herbs", -1, 1.0).validate(),
            Err(ItemValidationError::NegativeQuantity(-1))
        );
        assert_eq!(
            ItemDraft::new("Herbs", 1, -0.5).validate(),
            Err(ItemValidationError::NegativePrice(-0.5))
        );
        assert_eq!(
            ItemDraft::new("Herbs", 1, f64::NAN).validate(),
            Err(ItemValidationError::NonFinitePrice)
        );
        assert!(ItemDraft::new("Herbs", 0, 0.0).validate().is_ok());
    }

    #[test]
    fn description_defaults_to_empty_when_missing() {
        let item: InventoryItem =
            serde_json::from_str(r#"{"id":"9","name":"Salt","quantity":4,"price":2.0}"#).unwrap();
        assert_eq!(item.description, "");
    }
}
