//! Month grid derivation and calendar navigation.
//!
//! # Responsibility
//! - Build the day grid of a month with events bucketed per day.
//! - Track the displayed month and roll years when navigating.
//!
//! # Invariants
//! - Selectable years form the closed range `YEAR_MIN..=YEAR_MAX`.
//! - "Today" is always passed in; nothing here reads the clock.

use chrono::{Datelike, Month, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

mod grid;

pub use grid::{build_month_grid, days_in_month, CalendarCell, DayCell, MonthGrid};

pub const YEAR_MIN: i32 = 1900;
pub const YEAR_MAX: i32 = 2100;

/// Months in calendar order; `Datelike::month0` indexes this directly.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    YearOutOfRange(i32),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(year) => {
                write!(f, "year {year} is outside {YEAR_MIN}..={YEAR_MAX}")
            }
        }
    }
}

impl Error for CalendarError {}

/// Years offered by the year picker.
pub fn year_options() -> RangeInclusive<i32> {
    YEAR_MIN..=YEAR_MAX
}

/// Resolves a human month name ("March", "mar") to a month.
pub fn month_from_name(name: &str) -> Option<Month> {
    name.trim().parse::<Month>().ok()
}

/// Whether the creation form may open for `date`; past days are refused.
pub fn can_schedule_on(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

/// Month currently shown by a calendar surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    year: i32,
    month: Month,
}

impl CalendarCursor {
    pub fn new(year: i32, month: Month) -> Result<Self, CalendarError> {
        check_year(year)?;
        Ok(Self { year, month })
    }

    /// Cursor on the month containing `date`.
    pub fn containing(date: NaiveDate) -> Result<Self, CalendarError> {
        Self::new(date.year(), MONTHS[date.month0() as usize])
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Following month, rolling into January of the next year.
    /// Stays put on December of `YEAR_MAX`.
    pub fn next(self) -> Self {
        match self.month {
            Month::December if self.year >= YEAR_MAX => self,
            Month::December => Self {
                year: self.year + 1,
                month: Month::January,
            },
            month => Self {
                month: month.succ(),
                ..self
            },
        }
    }

    /// Preceding month, rolling into December of the previous year.
    /// Stays put on January of `YEAR_MIN`.
    pub fn previous(self) -> Self {
        match self.month {
            Month::January if self.year <= YEAR_MIN => self,
            Month::January => Self {
                year: self.year - 1,
                month: Month::December,
            },
            month => Self {
                month: month.pred(),
                ..self
            },
        }
    }

    pub fn with_month(self, month: Month) -> Self {
        Self { month, ..self }
    }

    pub fn with_year(self, year: i32) -> Result<Self, CalendarError> {
        check_year(year)?;
        Ok(Self { year, ..self })
    }
}

fn check_year(year: i32) -> Result<(), CalendarError> {
    if year_options().contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::YearOutOfRange(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_from_january_rolls_year_back() {
        let cursor = CalendarCursor::new(2024, Month::January).unwrap();
        let previous = cursor.previous();
        assert_eq!((previous.year(), previous.month()), (2023, Month::December));
        assert_eq!(previous.next(), cursor);
    }

    #[test]
    fn navigation_stops_at_range_edges() {
        let first = CalendarCursor::new(YEAR_MIN, Month::January).unwrap();
        assert_eq!(first.previous(), first);
        let last = CalendarCursor::new(YEAR_MAX, Month::December).unwrap();
        assert_eq!(last.next(), last);
    }

    #[test]
    fn years_outside_range_are_refused() {
        assert_eq!(
            CalendarCursor::new(1899, Month::May),
            Err(CalendarError::YearOutOfRange(1899))
        );
        let cursor = CalendarCursor::new(2000, Month::May).unwrap();
        assert!(cursor.with_year(2101).is_err());
        assert_eq!(cursor.with_year(2100).unwrap().year(), 2100);
        assert_eq!(year_options().count(), 201);
    }

    #[test]
    fn containing_maps_every_month_of_the_year() {
        for (index, month) in MONTHS.iter().enumerate() {
            let date = NaiveDate::from_ymd_opt(2024, index as u32 + 1, 28).unwrap();
            let cursor = CalendarCursor::containing(date).unwrap();
            assert_eq!((cursor.year(), cursor.month()), (2024, *month));
        }
        let out_of_range = NaiveDate::from_ymd_opt(1899, 12, 31).unwrap();
        assert!(CalendarCursor::containing(out_of_range).is_err());
    }

    #[test]
    fn month_names_resolve_case_insensitively() {
        assert_eq!(month_from_name("February"), Some(Month::February));
        assert_eq!(month_from_name(" dec "), Some(Month::December));
        assert_eq!(month_from_name("Smarch"), None);
    }

    #[test]
    fn scheduling_is_refused_only_for_past_days() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        assert!(can_schedule_on(today, today));
        assert!(can_schedule_on(today.succ_opt().unwrap(), today));
        assert!(!can_schedule_on(today.pred_opt().unwrap(), today));
    }
}
