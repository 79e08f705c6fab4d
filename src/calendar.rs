//! Grid construction and cell classification.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use tracing::debug;

use crate::error::{CalError, Result};
use crate::events::EventSet;
use crate::types::{CalendarDate, DAYS_COUNT, GridCell, ReferenceMonth};

impl ReferenceMonth {
    /// Move by a number of months, negative values go backwards.
    pub fn offset(self, months: i32) -> Result<Self> {
        let first = self.first_day().as_naive();
        let shifted = if months >= 0 {
            first.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            first.checked_sub_months(Months::new(months.unsigned_abs()))
        }
        .ok_or(CalError::NavigationOutOfRange)?;

        Self::new(shifted.year(), shifted.month()).map_err(|_| CalError::NavigationOutOfRange)
    }

    pub fn next(self) -> Result<Self> {
        self.offset(1)
    }

    pub fn prev(self) -> Result<Self> {
        self.offset(-1)
    }

    pub fn days_in_month(self) -> u32 {
        days_in_month(self.year(), self.month())
    }
}

/// Number of days in a month, 0 for a month that does not exist.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    first
        .checked_add_months(Months::new(1))
        .map(|next| next.signed_duration_since(first).num_days() as u32)
        .unwrap_or(31)
}

/// Position of `weekday` in a week beginning on `week_start` (0..7).
pub fn week_offset(weekday: Weekday, week_start: Weekday) -> usize {
    let day = weekday.num_days_from_monday() as usize;
    let start = week_start.num_days_from_monday() as usize;
    (day + 7 - start) % 7
}

/// Build the 42 consecutive days shown for a month.
///
/// The sequence starts on the last `week_start` on or before the 1st and
/// does not depend on today.
pub fn build_grid(reference: ReferenceMonth, week_start: Weekday) -> [CalendarDate; DAYS_COUNT] {
    let first = reference.first_day().as_naive();
    let offset = week_offset(first.weekday(), week_start);

    // Years are bounded to 1..=9999, the span never leaves chrono's range
    let start = first - Days::new(offset as u64);

    debug!(
        year = reference.year(),
        month = reference.month(),
        offset,
        %start,
        "built month grid"
    );

    std::array::from_fn(|i| CalendarDate::from(start + Days::new(i as u64)))
}

/// Classify one day of the grid.
///
/// The three flags are recorded independently, `GridCell::state` combines them.
pub fn classify(
    date: CalendarDate,
    reference: ReferenceMonth,
    today: CalendarDate,
    events: &EventSet,
) -> GridCell {
    GridCell {
        date,
        in_current_month: reference.contains(date),
        is_today: date.key() == today.key(),
        has_event: events.contains(date),
    }
}

/// Build and classify every cell of the month grid.
///
/// A missing event set is treated as empty.
pub fn build_cells(
    reference: ReferenceMonth,
    week_start: Weekday,
    today: CalendarDate,
    events: Option<&EventSet>,
) -> Vec<GridCell> {
    let empty = EventSet::new();
    let events = events.unwrap_or(&empty);

    build_grid(reference, week_start)
        .into_iter()
        .map(|date| classify(date, reference, today, events))
        .collect()
}
