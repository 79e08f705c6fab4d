//! Command-line argument parsing using clap.
//!
//! Arguments follow util-linux cal convention: `[[day] month] year`

use std::io::IsTerminal;

use chrono::{Datelike, Locale, Weekday};
use clap::{Parser, ValueHint};

use crate::config::FileConfig;
use crate::error::{CalError, Result};
use crate::events::{EventSet, parse_event_date};
use crate::formatter::{get_system_locale, parse_month};
use crate::types::{
    COLOR_ENABLED_BY_DEFAULT, CalContext, CalendarDate, MAX_YEAR, MIN_YEAR, WeekStart,
};

/// Environment variable pinning today's date, `YYYY-MM-DD`.
pub const TEST_TIME_ENV: &str = "EVENTCAL_TEST_TIME";

#[derive(Parser, Debug)]
#[command(name = "eventcal")]
#[command(about = "Displays a month calendar with event days highlighted", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Week starts on Sunday (default).
    #[arg(short = 's', long, help_heading = "Calendar options")]
    pub sunday: bool,

    /// Week starts on Monday.
    #[arg(short = 'm', long, help_heading = "Calendar options")]
    pub monday: bool,

    /// First day of the week.
    #[arg(long, help_heading = "Calendar options", value_name = "day")]
    pub week_start: Option<WeekStart>,

    /// Mark a day as having an event (repeatable).
    #[arg(
        short = 'e',
        long = "event",
        help_heading = "Calendar options",
        value_name = "date"
    )]
    pub events: Vec<String>,

    /// Months to move from the displayed month (negative goes back).
    #[arg(
        short = 'o',
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        help_heading = "Calendar options",
        value_name = "months"
    )]
    pub offset: i32,

    /// Title format (strftime pattern, default "%b %Y").
    #[arg(
        short = 'f',
        long = "format",
        help_heading = "Output options",
        value_name = "pattern"
    )]
    pub title_format: Option<String>,

    /// Locale for month and weekday names (e.g. de_DE).
    #[arg(long, help_heading = "Output options", value_name = "locale")]
    pub locale: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,

    /// Press the cell showing this date.
    #[arg(long, help_heading = "Interaction", value_name = "date")]
    pub press: Option<String>,

    /// Long-press the cell showing this date.
    #[arg(long, help_heading = "Interaction", value_name = "date")]
    pub long_press: Option<String>,

    /// Configuration file (TOML).
    #[arg(long, value_name = "path", value_hint = ValueHint::FilePath)]
    pub config: Option<String>,

    /// Enable debug logging.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Day (1-31) - optional, used with month and year.
    #[arg(index = 1, default_value = None, value_name = "day", value_hint = ValueHint::Other)]
    pub day_arg: Option<String>,

    /// Month (1-12 or name) - optional, used with year.
    #[arg(index = 2, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 3, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a month grid with event days highlighted.

Without any arguments, display the current month.

Examples:
  eventcal                          Display current month
  eventcal 3 2024                   Display March 2024
  eventcal -m 3 2024                Week starts on Monday
  eventcal 3 2024 -e 2024-03-15     Mark March 15 as an event day
  eventcal -f '%B %Y'               Full month name in the title
  eventcal -o -1                    Display the previous month
  eventcal 3 2024 --press 2024-03-06
                                    Press a day";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    fn week_start(&self, config: &FileConfig) -> Weekday {
        if self.monday {
            Weekday::Mon
        } else if self.sunday {
            Weekday::Sun
        } else {
            self.week_start
                .or(config.week_start)
                .unwrap_or_default()
                .into()
        }
    }
}

impl CalContext {
    /// Merge command-line flags over file configuration.
    pub fn new(args: &Args, config: &FileConfig) -> Result<Self> {
        if args.monday && args.sunday {
            return Err(CalError::InvalidArgument(
                "Options -m and -s are mutually exclusive".to_string(),
            ));
        }

        let color = !args.color
            && config.color.unwrap_or(COLOR_ENABLED_BY_DEFAULT)
            && std::io::stdout().is_terminal();

        let locale = match args.locale.as_deref().or(config.locale.as_deref()) {
            Some(name) => Some(
                name.parse::<Locale>()
                    .map_err(|_| CalError::InvalidArgument(format!("Unknown locale: {}", name)))?,
            ),
            None => Some(get_system_locale()),
        };

        Ok(CalContext {
            week_start: args.week_start(config),
            title_format: args
                .title_format
                .clone()
                .or_else(|| config.title_format.clone()),
            color,
            locale,
            today: get_today_date(),
        })
    }
}

/// Get today's date, respecting EVENTCAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> CalendarDate {
    if let Ok(test_time) = std::env::var(TEST_TIME_ENV)
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date.into();
    }
    chrono::Local::now().date_naive().into()
}

/// Events from the config file followed by `--event` flags.
pub fn collect_events(args: &Args, config: &FileConfig) -> Result<EventSet> {
    let mut events = config.event_set()?;
    for s in &args.events {
        events.insert(parse_event_date(s)?);
    }
    Ok(events)
}

fn parse_year(s: &str) -> Result<i32> {
    let year = s
        .parse::<i32>()
        .map_err(|_| CalError::InvalidArgument(format!("Invalid year: {}", s)))?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalError::InvalidYear(year));
    }
    Ok(year)
}

fn parse_month_arg(s: &str) -> Result<u32> {
    parse_month(s).ok_or_else(|| CalError::InvalidMonth(s.to_string()))
}

fn ymd(year: i32, month: u32, day: u32) -> Result<CalendarDate> {
    CalendarDate::from_ymd(year, month, day)
        .ok_or_else(|| CalError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day)))
}

/// Calculate the reference date from positional arguments.
///
/// Argument patterns:
/// - none: `None`, the view falls back to today
/// - 1 arg: year (4 digits) or month (1-2 digits or name)
/// - 2 args: month year
/// - 3 args: day month year
pub fn get_display_date(args: &Args) -> Result<Option<CalendarDate>> {
    let today = get_today_date().as_naive();

    match (
        args.day_arg.as_deref(),
        args.month_arg.as_deref(),
        args.year_arg.as_deref(),
    ) {
        (None, None, None) => Ok(None),
        // One argument: could be year (4 digits) or month (1-2 digits)
        (Some(val), None, None) => {
            if let Ok(num) = val.parse::<i32>()
                && (1000..=MAX_YEAR).contains(&num)
            {
                return ymd(num, today.month(), 1).map(Some);
            }
            let month = parse_month(val)
                .ok_or_else(|| CalError::InvalidArgument(val.to_string()))?;
            ymd(today.year(), month, 1).map(Some)
        }
        (Some(month), Some(year), None) => {
            let month = parse_month_arg(month)?;
            let year = parse_year(year)?;
            ymd(year, month, 1).map(Some)
        }
        (Some(day), Some(month), Some(year)) => {
            let day = day
                .parse::<u32>()
                .ok()
                .filter(|d| (1..=31).contains(d))
                .ok_or_else(|| CalError::InvalidDay(day.to_string()))?;
            let month = parse_month_arg(month)?;
            let year = parse_year(year)?;
            ymd(year, month, day).map(Some)
        }
        _ => Err(CalError::InvalidArgument(
            "Invalid argument combination".to_string(),
        )),
    }
}

