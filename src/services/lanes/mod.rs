//! Lane assignment for full-day event bars within one week row.
//!
//! Lanes never carry across rows: an event that continues into the next
//! row is re-anchored at that row's first day and gets a fresh lane there.

use crate::models::day::CalendarDay;
use crate::models::event::CalendarEvent;
use crate::services::day_index::{DayEventIndex, IndexedEvent};
use crate::services::grid::WeekRow;

/// Occupied lanes for the row being processed, keyed by event ordinal.
#[derive(Debug, Default)]
pub struct LaneAllocator {
    occupied: Vec<(usize, usize)>,
}

impl LaneAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest lane not currently held.
    pub fn available_lane(&self) -> usize {
        let Some(max) = self.occupied.iter().map(|&(_, lane)| lane).max() else {
            return 0;
        };
        (0..max)
            .find(|candidate| !self.occupied.iter().any(|&(_, lane)| lane == *candidate))
            .unwrap_or(max + 1)
    }

    /// Give the event the lowest free lane.
    pub fn assign(&mut self, ordinal: usize) -> usize {
        let lane = self.available_lane();
        self.occupied.push((ordinal, lane));
        lane
    }

    pub fn release(&mut self, ordinal: usize) {
        self.occupied.retain(|&(held_by, _)| held_by != ordinal);
    }

    /// Highest occupied lane plus one, or 0 when nothing is held.
    pub fn depth(&self) -> usize {
        self.occupied
            .iter()
            .map(|&(_, lane)| lane + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }
}

/// Whether a full-day event's bar begins at `day` within `row`: either its
/// own start day, or the row's first day when it began earlier.
pub fn starts_run(event: &CalendarEvent, day: CalendarDay, row: &WeekRow) -> bool {
    event.full_day && (day == event.start_day() || day == row.first_day())
}

/// A bar anchored at `day` on `lane`.
#[derive(Debug, Clone, Copy)]
pub struct RunStart<'a> {
    pub day: CalendarDay,
    pub lane: usize,
    pub entry: IndexedEvent<'a>,
}

/// Lane assignments for one row.
#[derive(Debug)]
pub struct RowLanes<'a> {
    pub runs: Vec<RunStart<'a>>,
    /// Lane depth of each column, taken before that day's releases.
    pub depths: [usize; 7],
}

impl<'a> RowLanes<'a> {
    pub fn runs_on(&self, day: CalendarDay) -> impl Iterator<Item = &RunStart<'a>> {
        self.runs.iter().filter(move |run| run.day == day)
    }
}

/// Walk `row` left to right assigning lanes to every run that starts in it.
///
/// Events ending on a day give up their lane only after the whole day has
/// been processed, so everything on one day sees the same occupancy.
pub fn assign_row<'a>(row: &WeekRow, index: &DayEventIndex<'a>) -> RowLanes<'a> {
    let mut lanes = LaneAllocator::new();
    let mut runs = Vec::new();
    let mut depths = [0; 7];

    for (column, &day) in row.days().iter().enumerate() {
        let mut finished = Vec::new();

        for &entry in index.events_on(day) {
            let event = entry.event;
            if !event.full_day {
                continue;
            }

            if starts_run(event, day, row) {
                let lane = lanes.assign(entry.ordinal);
                runs.push(RunStart { day, lane, entry });
            }

            if day == event.end_day() {
                finished.push(entry.ordinal);
            }
        }

        depths[column] = lanes.depth();

        for ordinal in finished {
            lanes.release(ordinal);
        }
    }

    RowLanes { runs, depths }
}
