//! Day-to-events index for one layout pass.

use std::collections::BTreeMap;

use crate::models::day::CalendarDay;
use crate::models::event::CalendarEvent;
use crate::utils::date::days_between;

/// An event as seen by the index. `ordinal` is its position in start order
/// and identifies it for lane bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct IndexedEvent<'a> {
    pub ordinal: usize,
    pub event: &'a CalendarEvent,
}

/// Events occupying each day, ordered by start (ties keep input order).
#[derive(Debug, Default)]
pub struct DayEventIndex<'a> {
    days: BTreeMap<CalendarDay, Vec<IndexedEvent<'a>>>,
    event_count: usize,
}

impl<'a> DayEventIndex<'a> {
    /// Index `events` by every day each one covers. The input is not
    /// reordered; a sorted view is taken instead.
    pub fn build(events: &'a [CalendarEvent]) -> Self {
        let mut sorted: Vec<&CalendarEvent> = events.iter().collect();
        sorted.sort_by_key(|event| event.start);

        let mut index = Self::default();
        for (ordinal, event) in sorted.into_iter().enumerate() {
            if event.end < event.start {
                log::warn!(
                    "Skipping event '{}': end {} is before start {}",
                    event.name,
                    event.end,
                    event.start
                );
                continue;
            }

            for date in days_between(event.start.date_naive(), event.end.date_naive()) {
                index
                    .days
                    .entry(CalendarDay::new(date))
                    .or_default()
                    .push(IndexedEvent { ordinal, event });
            }
            index.event_count += 1;
        }

        log::debug!(
            "Indexed {} events across {} days",
            index.event_count,
            index.days.len()
        );
        index
    }

    /// Events on `day` in start order; empty for days nothing occupies.
    pub fn events_on(&self, day: CalendarDay) -> &[IndexedEvent<'a>] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn days(&self) -> impl Iterator<Item = CalendarDay> + '_ {
        self.days.keys().copied()
    }

    /// Number of events that made it into the index.
    pub fn event_count(&self) -> usize {
        self.event_count
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
