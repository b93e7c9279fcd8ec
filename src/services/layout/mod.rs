//! Month layout pass.
//!
//! Builds the grid, indexes the events, then lays out each week row on its
//! own: lanes and spans for full-day bars, time-ordered entries for timed
//! events. Every call starts from scratch, so laying out the same month
//! twice gives the same result.

use chrono::Weekday;

use crate::error::Result;
use crate::models::day::CalendarDay;
use crate::models::event::CalendarEvent;
use crate::models::layout::{DayCell, EventRun, MonthLayout, TimedEntry, WeekLayout};
use crate::models::settings::{LayoutSettings, TimeFormat};
use crate::services::day_index::DayEventIndex;
use crate::services::grid::{weekday_labels, DateGrid, WeekRow};
use crate::services::lanes::{assign_row, RowLanes};
use crate::services::span::measure;

/// Lays out months with fixed settings.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    week_start: Weekday,
    time_format: TimeFormat,
}

impl LayoutEngine {
    pub fn new(settings: &LayoutSettings) -> Result<Self> {
        Ok(Self {
            week_start: settings.week_start()?,
            time_format: settings.time_format,
        })
    }

    /// Lay out `events` on the grid of the zero-based `month` of `year`.
    pub fn layout_month(
        &self,
        events: &[CalendarEvent],
        month: i32,
        year: i32,
    ) -> Result<MonthLayout> {
        let grid = DateGrid::build(month, year, self.week_start)?;
        let index = DayEventIndex::build(events);

        let weeks: Vec<WeekLayout> = grid
            .weeks()
            .iter()
            .map(|row| self.layout_week(&grid, row, &index))
            .collect();

        let layout = MonthLayout {
            year: grid.year(),
            month: grid.month0(),
            weekday_labels: weekday_labels(self.week_start),
            weeks,
        };

        log::debug!(
            "Laid out {}-{:02}: {} weeks, {} bars",
            layout.year,
            layout.month + 1,
            layout.weeks.len(),
            layout.run_count()
        );
        Ok(layout)
    }

    fn layout_week(&self, grid: &DateGrid, row: &WeekRow, index: &DayEventIndex<'_>) -> WeekLayout {
        let lanes = assign_row(row, index);

        let days = row
            .days()
            .iter()
            .enumerate()
            .map(|(column, &day)| DayCell {
                date: day,
                in_current_month: grid.is_current_month(day),
                lane_depth: lanes.depths[column],
                runs: runs_for_day(day, row, &lanes),
                timed: self.timed_for_day(day, index),
            })
            .collect();

        WeekLayout { days }
    }

    fn timed_for_day(&self, day: CalendarDay, index: &DayEventIndex<'_>) -> Vec<TimedEntry> {
        index
            .events_on(day)
            .iter()
            .filter(|entry| !entry.event.full_day)
            .map(|entry| TimedEntry {
                name: entry.event.name.clone(),
                event_type: entry.event.event_type.clone(),
                start: entry.event.start,
                time_label: self.time_format.label(&entry.event.start),
            })
            .collect()
    }
}

fn runs_for_day(day: CalendarDay, row: &WeekRow, lanes: &RowLanes<'_>) -> Vec<EventRun> {
    lanes
        .runs_on(day)
        .map(|run| {
            let event = run.entry.event;
            let span = measure(run.day, event, row);
            EventRun {
                name: event.name.clone(),
                event_type: event.event_type.clone(),
                lane: run.lane,
                span_length: span.span_length,
                overflow_left: span.overflow_left,
                overflow_right: span.overflow_right,
            }
        })
        .collect()
}

/// Lay out one month with `settings`. Convenience over [`LayoutEngine`].
pub fn layout_month(
    events: &[CalendarEvent],
    month: i32,
    year: i32,
    settings: &LayoutSettings,
) -> Result<MonthLayout> {
    LayoutEngine::new(settings)?.layout_month(events, month, year)
}
