//! Month grid and upcoming-events logic for the calendar section.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

use crate::event::CalendarEvent;

/// Number of cells in the month view: 6 weeks of 7 days, always.
///
/// Even a month that fits in 4 or 5 visible weeks still renders 42 cells, so
/// the trailing row(s) may belong entirely to the next month.
pub const GRID_CELLS: usize = 42;

/// How many events the sidebar shows
pub const UPCOMING_LIMIT: usize = 5;

/// One cell of the month view. Derived from the fetched events, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub events: Vec<CalendarEvent>,
    pub is_current_month: bool,
    pub is_today: bool,
}

/// Build the 42-cell month grid for the month containing `reference`.
///
/// The grid starts on the Sunday on or before the first of the month and runs
/// for exactly six weeks. An event lands on a cell iff its calendar date
/// equals the cell's date.
pub fn month_grid(
    reference: NaiveDate,
    today: NaiveDate,
    events: &[CalendarEvent],
) -> Vec<CalendarDay> {
    let first_of_month = reference.with_day(1).expect("day 1 always exists");
    let leading = first_of_month.weekday().num_days_from_sunday() as i64;
    let anchor = first_of_month - Duration::days(leading);

    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = anchor + Duration::days(offset);
            CalendarDay {
                date,
                events: events.iter().filter(|e| e.date == date).cloned().collect(),
                is_current_month: date.month() == reference.month()
                    && date.year() == reference.year(),
                is_today: date == today,
            }
        })
        .collect()
}

/// The nearest `limit` events on or after `today`, ascending by date.
///
/// Ties keep their input order (stable sort), matching what the sidebar
/// showed historically.
pub fn upcoming_events(
    events: &[CalendarEvent],
    today: NaiveDate,
    limit: usize,
) -> Vec<CalendarEvent> {
    let mut upcoming: Vec<CalendarEvent> = events
        .iter()
        .filter(|e| e.date >= today)
        .cloned()
        .collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming.truncate(limit);
    upcoming
}

/// Which month the calendar section is looking at.
///
/// Always normalized to the first of the month, so month arithmetic never
/// trips over short months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor(NaiveDate);

impl MonthCursor {
    pub fn new(reference: NaiveDate) -> Self {
        MonthCursor(reference.with_day(1).expect("day 1 always exists"))
    }

    /// First day of the displayed month
    pub fn reference(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn next_month(self) -> Self {
        MonthCursor(self.0 + Months::new(1))
    }

    pub fn prev_month(self) -> Self {
        MonthCursor(self.0 - Months::new(1))
    }

    /// Jump back to the month containing `today`
    pub fn today(today: NaiveDate) -> Self {
        MonthCursor::new(today)
    }
}
