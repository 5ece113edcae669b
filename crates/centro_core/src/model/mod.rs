//! Record shapes persisted in the console's collections.
//!
//! # Responsibility
//! - Define the serialized shape of every record kind.
//! - Validate caller input before a repository persists it.
//!
//! # Invariants
//! - Every record carries an opaque, immutable `id` assigned at creation.
//! - Field names match the persisted JSON layout exactly.

pub mod event;
pub mod inventory;
