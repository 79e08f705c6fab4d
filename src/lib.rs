//! Month-view event calendar.
//!
//! Features:
//! - Fixed 6-week (42 day) grid around a reference month
//! - Configurable week start
//! - Today and event-day highlighting
//! - strftime title patterns with fallback to "%b %Y"
//! - Press, long-press and title notifications through [`handler::EventHandler`]

pub mod args;
pub mod calendar;
pub mod config;
pub mod error;
pub mod events;
pub mod formatter;
pub mod handler;
pub mod logger;
pub mod types;
pub mod view;
