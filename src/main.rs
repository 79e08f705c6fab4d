//! Event calendar CLI application.
//!
//! # Usage
//! ```ignore
//! eventcal                         // Current month
//! eventcal 3 2024                  // March 2024
//! eventcal 3 2024 -e 2024-03-15    // With an event day
//! eventcal --press 2024-03-06      // Press a day
//! ```

use std::sync::mpsc;

use eventcal::args::{Args, collect_events, get_display_date};
use eventcal::config::load_config;
use eventcal::error::{CalError, Result};
use eventcal::events::parse_event_date;
use eventcal::handler::CalendarEvent;
use eventcal::logger::init_logger;
use eventcal::types::CalContext;
use eventcal::view::CalendarView;
use tracing::info;

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("eventcal: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let ctx = CalContext::new(args, &config)?;
    let events = collect_events(args, &config)?;

    let (sender, receiver) = mpsc::channel();
    let mut view = CalendarView::new(ctx);
    view.set_event_handler(sender);
    view.set_current_date(get_display_date(args)?)?;
    if args.offset != 0 {
        view.navigate(args.offset)?;
    }

    view.render(Some(&events))?;
    for line in view.lines() {
        println!("{}", line);
    }

    if let Some(date) = &args.press {
        let index = locate(&view, date)?;
        view.press(index)?;
    }
    if let Some(date) = &args.long_press {
        let index = locate(&view, date)?;
        view.long_press(index)?;
    }

    for event in receiver.try_iter() {
        match event {
            CalendarEvent::TitleChanged(title) => info!(%title, "title changed"),
            CalendarEvent::DayPress(date) => {
                info!(%date, "date click");
                println!("Date click : {}", date);
            }
            CalendarEvent::DayLongPress(date) => {
                info!(%date, "date long click");
                println!("Date long click : {}", date);
            }
        }
    }

    Ok(())
}

fn locate(view: &CalendarView<mpsc::Sender<CalendarEvent>>, s: &str) -> Result<usize> {
    let date = parse_event_date(s)?;
    view.position_of(date)
        .ok_or(CalError::DateNotInGrid { date })
}
