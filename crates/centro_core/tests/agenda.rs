use centro_core::{project_agenda, AgendaCategory, AgendaStatus, AgendaWhen, Event, Period};
use chrono::{NaiveDate, NaiveDateTime};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn at(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, 0, 0).unwrap()
}

fn event(id: &str, date: NaiveDate, period: Period) -> Event {
    Event {
        id: id.to_string(),
        title: format!("event {id}"),
        date,
        time: "18:00".to_string(),
        period,
        notes: String::new(),
    }
}

fn dated_ids(entries: &[centro_core::AgendaEntry]) -> Vec<&str> {
    entries
        .iter()
        .filter(|entry| entry.category == AgendaCategory::Gathering)
        .map(|entry| entry.id.as_str())
        .collect()
}

#[test]
fn nearest_to_now_sorts_first_regardless_of_direction() {
    let now = at(day(2025, 3, 10), 0);
    let events = vec![
        event("day-20", day(2025, 3, 20), Period::Evening),
        event("day-9", day(2025, 3, 9), Period::Morning),
    ];

    let agenda = project_agenda(&events, now);

    assert_eq!(dated_ids(&agenda), vec!["day-9", "day-20"]);
}

#[test]
fn ordering_is_by_distance_not_chronology() {
    let now = at(day(2025, 3, 10), 0);
    let events = vec![
        event("far-past", day(2025, 1, 1), Period::Morning),
        event("near-future", day(2025, 3, 12), Period::Morning),
        event("far-future", day(2025, 6, 1), Period::Morning),
        event("near-past", day(2025, 3, 7), Period::Morning),
    ];

    let agenda = project_agenda(&events, now);

    assert_eq!(
        dated_ids(&agenda),
        vec!["near-future", "near-past", "far-past", "far-future"]
    );
}

#[test]
fn status_completed_only_when_day_start_is_before_now() {
    let now = at(day(2025, 3, 10), 12);
    let events = vec![
        event("yesterday", day(2025, 3, 9), Period::Morning),
        event("today", day(2025, 3, 10), Period::Afternoon),
        event("tomorrow", day(2025, 3, 11), Period::Evening),
    ];

    let agenda = project_agenda(&events, now);
    let status_of = |id: &str| {
        agenda
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.status)
            .unwrap()
    };

    assert_eq!(status_of("yesterday"), AgendaStatus::Completed);
    assert_eq!(status_of("today"), AgendaStatus::Completed);
    assert_eq!(status_of("tomorrow"), AgendaStatus::Pending);

    let at_midnight = project_agenda(&events, at(day(2025, 3, 10), 0));
    let today = at_midnight.iter().find(|entry| entry.id == "today").unwrap();
    assert_eq!(today.status, AgendaStatus::Pending);
}

#[test]
fn recurring_activities_follow_dated_entries() {
    let now = at(day(2025, 3, 10), 0);
    let events = vec![
        event("a", day(2026, 1, 1), Period::Morning),
        event("b", day(2024, 1, 1), Period::Morning),
    ];

    let agenda = project_agenda(&events, now);

    assert_eq!(agenda.len(), 3);
    let recurring = agenda.last().unwrap();
    assert_eq!(recurring.id, "static-1");
    assert_eq!(recurring.category, AgendaCategory::Ritual);
    assert_eq!(recurring.status, AgendaStatus::InProgress);
    assert_eq!(recurring.period, Some(Period::Evening));
    assert!(matches!(recurring.when, AgendaWhen::Recurring(_)));
}

#[test]
fn empty_collection_still_lists_recurring_activity() {
    let agenda = project_agenda(&[], at(day(2025, 3, 10), 0));

    assert_eq!(agenda.len(), 1);
    assert_eq!(agenda[0].when.display(), "Every Wednesday - 20:00");
    assert_eq!(agenda[0].status.label(), "In progress");
}

#[test]
fn entry_fields_come_from_event_and_period() {
    let mut source = event("x", day(2025, 4, 2), Period::Afternoon);
    source.time = "15:45".to_string();
    let mut with_notes = event("y", day(2025, 4, 3), Period::Morning);
    with_notes.notes = "bring flowers".to_string();

    let agenda = project_agenda(&[source, with_notes], at(day(2025, 4, 1), 0));

    let x = &agenda[0];
    assert_eq!(x.title, "event x");
    assert_eq!(x.subtitle, "Community event");
    assert_eq!(x.icon, Period::Afternoon.descriptor().icon);
    assert_eq!(x.when.display(), "02/04/2025 - 15:45");
    assert_eq!(x.status.label(), "Scheduled");
    assert_eq!(agenda[1].subtitle, "bring flowers");
}
