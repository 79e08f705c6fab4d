//! Days that carry at least one event.

use std::collections::HashSet;
use std::collections::hash_set;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{CalError, Result};
use crate::types::CalendarDate;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Set of event days keyed by calendar date.
///
/// Every value is truncated to its (year, month, day) key on insertion, so two
/// timestamps on the same day collapse into one event day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSet {
    days: HashSet<CalendarDate>,
}

impl EventSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event, returns `false` if its day was already marked.
    pub fn insert(&mut self, date: impl Into<CalendarDate>) -> bool {
        self.days.insert(date.into())
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.days.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, CalendarDate> {
        self.days.iter()
    }
}

impl<D: Into<CalendarDate>> FromIterator<D> for EventSet {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        let mut set = EventSet::new();
        set.extend(iter);
        set
    }
}

impl<D: Into<CalendarDate>> Extend<D> for EventSet {
    fn extend<I: IntoIterator<Item = D>>(&mut self, iter: I) {
        for date in iter {
            self.insert(date);
        }
    }
}

/// Parse an event date or date-time, dropping any time of day.
///
/// Accepted forms: `2024-03-15`, `2024-03-15 14:30`, `2024-03-15 14:30:00`,
/// `2024-03-15T14:30:00` and RFC 3339 (the date is taken as written, the
/// offset is not applied).
pub fn parse_event_date(s: &str) -> Result<CalendarDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(date.into());
    }

    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Ok(datetime.into());
    }

    DateTime::parse_from_rfc3339(s)
        .map(CalendarDate::from)
        .map_err(|_| CalError::InvalidDate(s.to_string()))
}
