//! Calendar event model.
//!
//! # Invariants
//! - `title` and `time` are non-empty after trimming.
//! - `period` is independent from `time`; nothing ties the two together.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque event identifier.
pub type EventId = String;

/// Daypart tag used for grouping and iconography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
}

/// Display metadata for a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodDescriptor {
    pub label: &'static str,
    pub icon: &'static str,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Morning, Period::Afternoon, Period::Evening];

    /// Total lookup table from tag to label/icon.
    pub fn descriptor(self) -> PeriodDescriptor {
        match self {
            Period::Morning => PeriodDescriptor {
                label: "Morning",
                icon: "sun",
            },
            Period::Afternoon => PeriodDescriptor {
                label: "Afternoon",
                icon: "sunset",
            },
            Period::Evening => PeriodDescriptor {
                label: "Evening",
                icon: "moon",
            },
        }
    }
}

/// One scheduled activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Free-form `HH:MM`.
    pub time: String,
    pub period: Period,
    #[serde(default)]
    pub notes: String,
}

/// Caller input for creating an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub period: Period,
    pub notes: String,
}

impl NewEvent {
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        if self.time.trim().is_empty() {
            return Err(EventValidationError::EmptyTime);
        }
        Ok(())
    }

    /// Builds the persisted record under a freshly generated id.
    pub fn into_event(self) -> Event {
        Event {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            date: self.date,
            time: self.time,
            period: self.period,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventValidationError {
    EmptyTitle,
    EmptyTime,
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "event title must not be empty"),
            Self::EmptyTime => write!(f, "event time must not be empty"),
        }
    }
}

impl Error for EventValidationError {}
