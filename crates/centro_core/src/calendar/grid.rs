//! Month day-grid builder.

use super::{check_year, CalendarError};
use crate::model::event::Event;
use chrono::{Datelike, Month, NaiveDate};

/// One slot of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before day 1.
    Empty,
    Day(DayCell),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    /// Strictly before today, compared by day only.
    pub is_past: bool,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: Month,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Number of padding cells before day 1 (0 = month starts on Sunday).
    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, CalendarCell::Empty))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(|cell| match cell {
            CalendarCell::Day(day) => Some(day),
            CalendarCell::Empty => None,
        })
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days().find(|cell| cell.date.day() == day)
    }
}

/// Number of days in `month`, taken as the day before the 1st of the next month.
pub fn days_in_month(year: i32, month: Month) -> Option<u32> {
    let (next_year, next_month) = match month {
        Month::December => (year.checked_add(1)?, 1),
        other => (year, other.number_from_month() + 1),
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|last| last.day())
}

/// Builds the grid for `month` of `year`, bucketing `events` by exact day.
///
/// # Errors
/// - `CalendarError::YearOutOfRange` outside the selectable year range.
pub fn build_month_grid(
    year: i32,
    month: Month,
    today: NaiveDate,
    events: &[Event],
) -> Result<MonthGrid, CalendarError> {
    check_year(year)?;
    let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
        .ok_or(CalendarError::YearOutOfRange(year))?;
    let day_count = days_in_month(year, month).ok_or(CalendarError::YearOutOfRange(year))?;
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut cells = Vec::with_capacity(leading + day_count as usize);
    cells.extend(std::iter::repeat(CalendarCell::Empty).take(leading));
    cells.extend(first.iter_days().take(day_count as usize).map(|date| {
        CalendarCell::Day(DayCell {
            date,
            is_today: date == today,
            is_past: date < today,
            events: events
                .iter()
                .filter(|event| event.date == date)
                .cloned()
                .collect(),
        })
    }));

    Ok(MonthGrid { year, month, cells })
}
