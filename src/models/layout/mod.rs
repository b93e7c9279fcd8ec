//! Output of one layout pass, per rendered day cell.
//!
//! Everything here is plain data for a renderer: bars are described by
//! their lane and clipped span, timed entries by a preformatted label.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::models::day::CalendarDay;

/// One visible run of a full-day event inside a week row, anchored at the
/// cell where its bar starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRun {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Vertical offset of the bar within the week row.
    pub lane: usize,
    /// Number of grid columns the bar covers, 1..=7.
    pub span_length: u32,
    /// The event started in an earlier row.
    pub overflow_left: bool,
    /// The event continues into a later row.
    pub overflow_right: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedEntry {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    pub start: DateTime<Local>,
    pub time_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: CalendarDay,
    /// False for padding days borrowed from the adjacent months.
    pub in_current_month: bool,
    /// Lanes reserved by bars while this day is drawn; timed entries go below.
    pub lane_depth: usize,
    pub runs: Vec<EventRun>,
    /// Timed events in chronological order.
    pub timed: Vec<TimedEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekLayout {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthLayout {
    pub year: i32,
    /// Zero-based (0 = January).
    pub month: u32,
    pub weekday_labels: Vec<&'static str>,
    pub weeks: Vec<WeekLayout>,
}

impl MonthLayout {
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    /// Cell for `day`, or `None` when the day is outside the grid.
    pub fn cell(&self, day: CalendarDay) -> Option<&DayCell> {
        self.days().find(|cell| cell.date == day)
    }

    pub fn run_count(&self) -> usize {
        self.days().map(|cell| cell.runs.len()).sum()
    }
}
