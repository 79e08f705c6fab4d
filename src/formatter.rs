//! Title formatting and terminal rendering of the month grid.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Locale, NaiveDate, Weekday};
use tracing::warn;
use unicode_width::UnicodeWidthStr;

use crate::types::{
    COLOR_GREY, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalContext, CellState,
    DAYS_PER_WEEK, DEFAULT_TITLE_FORMAT, GridCell, ReferenceMonth,
};

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Format the month title with a strftime pattern.
///
/// A missing or empty pattern uses [`DEFAULT_TITLE_FORMAT`]. A pattern that
/// cannot be parsed, or that needs fields a plain date does not have (hours,
/// offsets), falls back to the default as well.
pub fn format_title(reference: ReferenceMonth, pattern: Option<&str>) -> String {
    render_title(reference, pattern, None)
}

/// Same as [`format_title`] with month and weekday names from `locale`.
pub fn format_title_localized(
    reference: ReferenceMonth,
    pattern: Option<&str>,
    locale: Locale,
) -> String {
    render_title(reference, pattern, Some(locale))
}

fn render_title(reference: ReferenceMonth, pattern: Option<&str>, locale: Option<Locale>) -> String {
    let date = reference.first_day().as_naive();
    let pattern = pattern.filter(|p| !p.is_empty());

    if let Some(pattern) = pattern {
        if let Some(title) = try_format(date, pattern, locale) {
            return title;
        }
        warn!(pattern, "invalid title format, using default");
    }

    try_format(date, DEFAULT_TITLE_FORMAT, locale)
        .unwrap_or_else(|| format!("{:02}/{}", reference.month(), reference.year()))
}

fn try_format(date: NaiveDate, pattern: &str, locale: Option<Locale>) -> Option<String> {
    let items: Vec<Item<'_>> = match locale {
        Some(locale) => StrftimeItems::new_with_locale(pattern, locale).collect(),
        None => StrftimeItems::new(pattern).collect(),
    };
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }

    // Missing fields surface as fmt::Error from the delayed formatter
    let mut out = String::new();
    let written = match locale {
        Some(locale) => write!(out, "{}", date.format_localized_with_items(items.iter(), locale)),
        None => write!(out, "{}", date.format_with_items(items.iter())),
    };
    written.ok().map(|_| out)
}

/// Parse month from string (numeric 1-12 or English name).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    const MONTH_NAMES: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];
    let s_lower = s.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| *name == s_lower || (s_lower.len() == 3 && name.starts_with(&s_lower)))
        .map(|idx| idx as u32 + 1)
}

/// Center text within a specified width, accounting for Unicode character widths.
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Get weekday order based on week start day.
pub fn get_weekday_order(week_start: Weekday) -> [Weekday; 7] {
    let mut day = week_start;
    std::array::from_fn(|_| {
        let current = day;
        day = day.succ();
        current
    })
}

/// Get 2-character weekday abbreviation, localized when a locale is given.
pub fn get_weekday_short_name(weekday: Weekday, locale: Option<Locale>) -> String {
    let Some(date) = NaiveDate::from_weekday_of_month_opt(2000, 1, weekday, 1) else {
        return String::new();
    };
    let day_name = match locale {
        Some(locale) => date.format_localized("%a", locale).to_string(),
        None => date.format("%a").to_string(),
    };
    day_name.chars().take(2).collect()
}

/// Marker appended to a day number when color is off.
pub fn state_marker(state: CellState) -> char {
    match state {
        CellState::EventToday => '+',
        CellState::Today => '<',
        CellState::Event => '*',
        CellState::OutOfMonth | CellState::Normal => ' ',
    }
}

fn cell_width(color: bool) -> usize {
    if color { 2 } else { 3 }
}

/// Display width of a week row.
pub fn row_width(color: bool) -> usize {
    cell_width(color) * DAYS_PER_WEEK + (DAYS_PER_WEEK - 1)
}

/// Format a day cell according to its visual state.
pub fn format_day(cell: &GridCell, color: bool) -> String {
    let day_str = format!("{:>2}", cell.date.day());
    let state = cell.state();

    if !color {
        return format!("{}{}", day_str, state_marker(state));
    }

    match state {
        CellState::EventToday => format!("{}{}{}{}", COLOR_REVERSE, COLOR_TEAL, day_str, COLOR_RESET),
        CellState::Today => format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET),
        CellState::Event => format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET),
        CellState::OutOfMonth => format!("{}{}{}", COLOR_GREY, day_str, COLOR_RESET),
        CellState::Normal => day_str,
    }
}

/// Format weekday header row in week-start order.
pub fn format_weekday_headers(ctx: &CalContext) -> String {
    let width = cell_width(ctx.color);
    let names: Vec<String> = get_weekday_order(ctx.week_start)
        .iter()
        .map(|&weekday| {
            let name = get_weekday_short_name(weekday, ctx.locale);
            let padding = width.saturating_sub(name.width());
            format!("{}{}", name, " ".repeat(padding))
        })
        .collect();
    let header = names.join(" ");

    if ctx.color {
        format!("{}{}{}", COLOR_SAND_YELLOW, header, COLOR_RESET)
    } else {
        header
    }
}

/// Format the title, weekday header and one line per week.
pub fn format_month_grid(ctx: &CalContext, cells: &[GridCell], title: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);

    let header = center_text(title, row_width(ctx.color));
    if ctx.color {
        lines.push(format!("{}{}{}", COLOR_TEAL, header, COLOR_RESET));
    } else {
        lines.push(header);
    }

    lines.push(format_weekday_headers(ctx));

    for week in cells.chunks(DAYS_PER_WEEK) {
        let line = week
            .iter()
            .map(|cell| format_day(cell, ctx.color))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(line);
    }

    lines
}
