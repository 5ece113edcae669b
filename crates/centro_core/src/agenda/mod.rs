//! Compact activity feed for the dashboard.
//!
//! # Responsibility
//! - Turn persisted events into agenda entries with a derived status.
//! - Append the fixed recurring activities of the house.
//!
//! # Invariants
//! - Dated entries are ordered by absolute distance from `now`, nearest
//!   first, whether past or future. Ties keep insertion order.
//! - Recurring entries always follow the dated ones.

use crate::model::event::{Event, Period};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DEFAULT_EVENT_SUBTITLE: &str = "Community event";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgendaStatus {
    Pending,
    InProgress,
    Completed,
}

impl AgendaStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Scheduled",
            Self::InProgress => "In progress",
            Self::Completed => "Done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgendaCategory {
    /// Derived from a persisted calendar event.
    Gathering,
    /// Fixed recurring house activity.
    Ritual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgendaWhen {
    Scheduled { date: NaiveDate, time: String },
    Recurring(&'static str),
}

impl AgendaWhen {
    /// `dd/mm/yyyy - HH:MM` for dated entries, the recurrence text otherwise.
    pub fn display(&self) -> String {
        match self {
            Self::Scheduled { date, time } => format!("{} - {time}", date.format("%d/%m/%Y")),
            Self::Recurring(text) => (*text).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaEntry {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub icon: &'static str,
    pub category: AgendaCategory,
    pub when: AgendaWhen,
    pub status: AgendaStatus,
    pub period: Option<Period>,
}

struct RecurringActivity {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    icon: &'static str,
    schedule: &'static str,
    period: Period,
}

const RECURRING_ACTIVITIES: &[RecurringActivity] = &[RecurringActivity {
    id: "static-1",
    title: "Mediumship development",
    subtitle: "Development session for mediums",
    icon: "users",
    schedule: "Every Wednesday - 20:00",
    period: Period::Evening,
}];

/// Merges `events` with the recurring activities into one feed.
pub fn project_agenda(events: &[Event], now: NaiveDateTime) -> Vec<AgendaEntry> {
    let mut dated: Vec<(i64, AgendaEntry)> = events
        .iter()
        .map(|event| {
            let starts_at = event.date.and_time(NaiveTime::default());
            let distance = (starts_at - now).num_milliseconds().abs();
            (distance, entry_from_event(event, starts_at < now))
        })
        .collect();
    dated.sort_by_key(|(distance, _)| *distance);

    dated
        .into_iter()
        .map(|(_, entry)| entry)
        .chain(RECURRING_ACTIVITIES.iter().map(entry_from_recurring))
        .collect()
}

fn entry_from_event(event: &Event, is_past: bool) -> AgendaEntry {
    let subtitle = if event.notes.trim().is_empty() {
        DEFAULT_EVENT_SUBTITLE.to_string()
    } else {
        event.notes.clone()
    };

    AgendaEntry {
        id: event.id.clone(),
        title: event.title.clone(),
        subtitle,
        icon: event.period.descriptor().icon,
        category: AgendaCategory::Gathering,
        when: AgendaWhen::Scheduled {
            date: event.date,
            time: event.time.clone(),
        },
        status: if is_past {
            AgendaStatus::Completed
        } else {
            AgendaStatus::Pending
        },
        period: Some(event.period),
    }
}

fn entry_from_recurring(activity: &RecurringActivity) -> AgendaEntry {
    AgendaEntry {
        id: activity.id.to_string(),
        title: activity.title.to_string(),
        subtitle: activity.subtitle.to_string(),
        icon: activity.icon,
        category: AgendaCategory::Ritual,
        when: AgendaWhen::Recurring(activity.schedule),
        status: AgendaStatus::InProgress,
        period: Some(activity.period),
    }
}
