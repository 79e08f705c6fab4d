//! Error type shared by the library and the CLI.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::CalendarDate;

#[derive(Error, Debug)]
pub enum CalError {
    #[error("Invalid year value: {0} (must be 1-9999)")]
    InvalidYear(i32),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Month navigation out of range")]
    NavigationOutOfRange,

    #[error("Cell {index} is outside the grid")]
    CellOutOfRange { index: usize },

    #[error("{date} is not shown in the current grid")]
    DateNotInGrid { date: CalendarDate },

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CalError>;
