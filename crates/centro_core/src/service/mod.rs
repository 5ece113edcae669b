//! Use-case services consumed by view surfaces.
//!
//! # Responsibility
//! - Combine repository reads with the pure projections into view models.
//! - Keep view surfaces free of storage details.

pub mod console_service;
