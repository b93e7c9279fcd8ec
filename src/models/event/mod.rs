// Event module
// Calendar event input consumed by one layout pass

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::models::day::CalendarDay;

/// An event to place on the month grid.
///
/// `end` is inclusive of the day it falls on. Full-day events are drawn as
/// horizontal bars across every day they cover; timed events are listed by
/// start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub name: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    #[serde(default, alias = "full_day")]
    pub full_day: bool,
    /// Category tag, only used for styling.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

impl CalendarEvent {
    /// Create a timed event
    ///
    /// # Examples
    /// ```
    /// use month_grid::models::event::CalendarEvent;
    /// use chrono::{Duration, Local};
    ///
    /// let start = Local::now();
    /// let event = CalendarEvent::new("Standup", start, start + Duration::minutes(15)).unwrap();
    /// assert!(!event.full_day);
    /// ```
    pub fn new(
        name: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self> {
        let event = Self {
            name: name.into(),
            start,
            end,
            full_day: false,
            event_type: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a full-day event covering `start` through `end`
    pub fn full_day(
        name: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self> {
        let mut event = Self::new(name, start, end)?;
        event.full_day = true;
        Ok(event)
    }

    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Check the caller-side contract: non-empty name and `start <= end`.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LayoutError::EmptyName);
        }

        if self.end < self.start {
            return Err(LayoutError::EndBeforeStart {
                name: self.name.clone(),
            });
        }

        Ok(())
    }

    pub fn start_day(&self) -> CalendarDay {
        CalendarDay::of(&self.start)
    }

    pub fn end_day(&self) -> CalendarDay {
        CalendarDay::of(&self.end)
    }
}

/// Builder for events with optional fields
#[derive(Debug, Default)]
pub struct EventBuilder {
    name: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    full_day: bool,
    event_type: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn full_day(mut self, full_day: bool) -> Self {
        self.full_day = full_day;
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn build(self) -> Result<CalendarEvent> {
        let name = self.name.ok_or(LayoutError::MissingField("name"))?;
        let start = self.start.ok_or(LayoutError::MissingField("start"))?;
        let end = self.end.ok_or(LayoutError::MissingField("end"))?;

        let event = CalendarEvent {
            name,
            start,
            end,
            full_day: self.full_day,
            event_type: self.event_type,
        };

        event.validate()?;
        Ok(event)
    }
}
