//! Notifications raised by the calendar view.

use std::sync::mpsc::Sender;

use tracing::warn;

use crate::types::CalendarDate;

/// Receiver of day presses and title changes.
pub trait EventHandler {
    fn on_day_press(&mut self, date: CalendarDate);

    fn on_day_long_press(&mut self, date: CalendarDate);

    fn change_title(&mut self, title: &str);
}

impl<H: EventHandler + ?Sized> EventHandler for Box<H> {
    fn on_day_press(&mut self, date: CalendarDate) {
        (**self).on_day_press(date);
    }

    fn on_day_long_press(&mut self, date: CalendarDate) {
        (**self).on_day_long_press(date);
    }

    fn change_title(&mut self, title: &str) {
        (**self).change_title(title);
    }
}

/// Notification payload for channel-based handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarEvent {
    DayPress(CalendarDate),
    DayLongPress(CalendarDate),
    TitleChanged(String),
}

impl EventHandler for Sender<CalendarEvent> {
    fn on_day_press(&mut self, date: CalendarDate) {
        forward(self, CalendarEvent::DayPress(date));
    }

    fn on_day_long_press(&mut self, date: CalendarDate) {
        forward(self, CalendarEvent::DayLongPress(date));
    }

    fn change_title(&mut self, title: &str) {
        forward(self, CalendarEvent::TitleChanged(title.to_string()));
    }
}

fn forward(sender: &Sender<CalendarEvent>, event: CalendarEvent) {
    if let Err(err) = sender.send(event) {
        warn!(event = ?err.0, "calendar event receiver dropped");
    }
}

type DateCallback = Box<dyn FnMut(CalendarDate)>;
type TitleCallback = Box<dyn FnMut(&str)>;

/// Handler built from closures, unset callbacks ignore their notification.
#[derive(Default)]
pub struct CallbackHandler {
    day_press: Option<DateCallback>,
    day_long_press: Option<DateCallback>,
    title_change: Option<TitleCallback>,
}

impl CallbackHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day_press(mut self, callback: impl FnMut(CalendarDate) + 'static) -> Self {
        self.day_press = Some(Box::new(callback));
        self
    }

    pub fn with_day_long_press(mut self, callback: impl FnMut(CalendarDate) + 'static) -> Self {
        self.day_long_press = Some(Box::new(callback));
        self
    }

    pub fn with_title_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.title_change = Some(Box::new(callback));
        self
    }
}

impl EventHandler for CallbackHandler {
    fn on_day_press(&mut self, date: CalendarDate) {
        if let Some(callback) = self.day_press.as_mut() {
            callback(date);
        }
    }

    fn on_day_long_press(&mut self, date: CalendarDate) {
        if let Some(callback) = self.day_long_press.as_mut() {
            callback(date);
        }
    }

    fn change_title(&mut self, title: &str) {
        if let Some(callback) = self.title_change.as_mut() {
            callback(title);
        }
    }
}
