//! Optional TOML configuration file.
//!
//! ```toml
//! week_start = "monday"
//! title_format = "%B %Y"
//! color = false
//! locale = "de_DE"
//! events = ["2024-03-06", "2024-03-15 14:30"]
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::error::{CalError, Result};
use crate::events::{EventSet, parse_event_date};
use crate::types::WeekStart;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "EVENTCAL_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub week_start: Option<WeekStart>,
    pub title_format: Option<String>,
    pub color: Option<bool>,
    pub locale: Option<String>,
    pub events: Vec<String>,
}

impl FileConfig {
    /// Read a config file, `~` is expanded to the home directory.
    pub fn load(path: &str) -> Result<Self> {
        let path = PathBuf::from(shellexpand::tilde(path).into_owned());
        debug!(path = %path.display(), "loading config");
        let text =
            std::fs::read_to_string(&path).map_err(|source| CalError::ConfigRead { path, source })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn event_set(&self) -> Result<EventSet> {
        self.events.iter().map(|s| parse_event_date(s)).collect()
    }
}

/// Load the explicit config path, else the one from [`CONFIG_ENV`], else defaults.
pub fn load_config(explicit: Option<&str>) -> Result<FileConfig> {
    let path = explicit
        .map(str::to_string)
        .or_else(|| std::env::var(CONFIG_ENV).ok());
    match path {
        Some(path) => FileConfig::load(&path),
        None => Ok(FileConfig::default()),
    }
}
