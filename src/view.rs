//! Host component owning the displayed month and the event handler.

use tracing::debug;

use crate::calendar::build_cells;
use crate::error::{CalError, Result};
use crate::events::EventSet;
use crate::formatter::{format_month_grid, format_title, format_title_localized};
use crate::handler::{CallbackHandler, EventHandler};
use crate::types::{CalContext, CalendarDate, GridCell, ReferenceMonth};

/// Month view that renders cells on demand and forwards user interaction.
pub struct CalendarView<H: EventHandler = CallbackHandler> {
    ctx: CalContext,
    /// Displayed month, today's month when unset.
    current: Option<ReferenceMonth>,
    handler: Option<H>,
    cells: Vec<GridCell>,
    title: String,
}

impl<H: EventHandler> CalendarView<H> {
    pub fn new(ctx: CalContext) -> Self {
        CalendarView {
            ctx,
            current: None,
            handler: None,
            cells: Vec::new(),
            title: String::new(),
        }
    }

    pub fn context(&self) -> &CalContext {
        &self.ctx
    }

    /// Show the month containing `date`, or today's month for `None`.
    pub fn set_current_date(&mut self, date: Option<CalendarDate>) -> Result<()> {
        self.current = date.map(ReferenceMonth::containing).transpose()?;
        Ok(())
    }

    pub fn reference_month(&self) -> Result<ReferenceMonth> {
        match self.current {
            Some(month) => Ok(month),
            None => ReferenceMonth::containing(self.ctx.today),
        }
    }

    /// Move the displayed month, the grid is rebuilt on the next render.
    pub fn navigate(&mut self, months: i32) -> Result<ReferenceMonth> {
        let month = self.reference_month()?.offset(months)?;
        self.current = Some(month);
        Ok(month)
    }

    pub fn set_event_handler(&mut self, handler: H) {
        self.handler = Some(handler);
    }

    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    pub fn handler_mut(&mut self) -> Option<&mut H> {
        self.handler.as_mut()
    }

    /// Rebuild the grid for the given events and announce the title.
    pub fn render(&mut self, events: Option<&EventSet>) -> Result<&[GridCell]> {
        let month = self.reference_month()?;
        self.cells = build_cells(month, self.ctx.week_start, self.ctx.today, events);

        let pattern = self.ctx.title_format.as_deref();
        self.title = match self.ctx.locale {
            Some(locale) => format_title_localized(month, pattern, locale),
            None => format_title(month, pattern),
        };

        if let Some(handler) = self.handler.as_mut() {
            handler.change_title(&self.title);
        }
        Ok(&self.cells)
    }

    /// Cells from the last render.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Grid lines for the terminal from the last render.
    pub fn lines(&self) -> Vec<String> {
        format_month_grid(&self.ctx, &self.cells, &self.title)
    }

    pub fn position_of(&self, date: CalendarDate) -> Option<usize> {
        self.cells.iter().position(|cell| cell.date == date)
    }

    pub fn press(&mut self, index: usize) -> Result<()> {
        let date = self.cell_date(index)?;
        debug!(index, %date, "day press");
        if let Some(handler) = self.handler.as_mut() {
            handler.on_day_press(date);
        }
        Ok(())
    }

    /// Returns whether a handler consumed the long press.
    pub fn long_press(&mut self, index: usize) -> Result<bool> {
        let date = self.cell_date(index)?;
        debug!(index, %date, "day long press");
        match self.handler.as_mut() {
            Some(handler) => {
                handler.on_day_long_press(date);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn cell_date(&self, index: usize) -> Result<CalendarDate> {
        self.cells
            .get(index)
            .map(|cell| cell.date)
            .ok_or(CalError::CellOutOfRange { index })
    }
}
