//! Type definitions and constants for the event calendar grid.

use std::fmt;

use chrono::{DateTime, Datelike, Locale, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use clap::ValueEnum;
use serde::Deserialize;

use crate::error::{CalError, Result};

/// A calendar day with no time-of-day component.
///
/// Equality, ordering and hashing only look at the (year, month, day) triple.
/// Date-times are truncated to their date on conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its components, `None` if the triple does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// The semantic (year, month, day) key used for all comparisons.
    pub fn key(self) -> (i32, u32, u32) {
        (self.year(), self.month(), self.day())
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarDate {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self(datetime.date_naive())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The (year, month) pair driving the grid, stored as the 1st of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceMonth {
    first: NaiveDate,
}

impl ReferenceMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalError::InvalidYear(year));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| CalError::InvalidMonth(month.to_string()))
    }

    /// The month a date falls in.
    pub fn containing(date: CalendarDate) -> Result<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(self) -> i32 {
        self.first.year()
    }

    pub fn month(self) -> u32 {
        self.first.month()
    }

    pub fn first_day(self) -> CalendarDate {
        CalendarDate(self.first)
    }

    /// Composite (year, month) comparison.
    pub fn contains(self, date: CalendarDate) -> bool {
        (date.year(), date.month()) == (self.year(), self.month())
    }
}

/// First day of the week, as accepted on the command line and in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    #[default]
    Sunday,
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Tuesday => Weekday::Tue,
            WeekStart::Wednesday => Weekday::Wed,
            WeekStart::Thursday => Weekday::Thu,
            WeekStart::Friday => Weekday::Fri,
            WeekStart::Saturday => Weekday::Sat,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

/// Visual state of a single cell, highest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    EventToday,
    Today,
    Event,
    OutOfMonth,
    Normal,
}

/// One day of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub date: CalendarDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub has_event: bool,
}

impl GridCell {
    /// Combine the independent flags using the rendering precedence:
    /// event-today > today > event > out-of-month > normal.
    pub fn state(&self) -> CellState {
        match (self.is_today, self.has_event, self.in_current_month) {
            (true, true, _) => CellState::EventToday,
            (true, false, _) => CellState::Today,
            (false, true, _) => CellState::Event,
            (false, false, false) => CellState::OutOfMonth,
            (false, false, true) => CellState::Normal,
        }
    }
}

/// Rendering context containing the view options.
#[derive(Clone, Debug)]
pub struct CalContext {
    /// First day of the week.
    pub week_start: Weekday,
    /// strftime pattern for the title, default pattern when `None`.
    pub title_format: Option<String>,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Locale for month names in the title, plain chrono names when `None`.
    pub locale: Option<Locale>,
    /// Today's date for highlighting.
    pub today: CalendarDate,
}

// 6 weeks × 7 days
pub const DAYS_COUNT: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

pub const DEFAULT_TITLE_FORMAT: &str = "%b %Y";

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_GREY: &str = "\x1b[90m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
