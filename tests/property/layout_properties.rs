// Property-based tests for the layout engine
// Random March 2025 event lists checked against the layout invariants

use chrono::{Duration, Local, TimeZone};
use proptest::prelude::*;

use month_grid::models::day::CalendarDay;
use month_grid::services::day_index::DayEventIndex;
use month_grid::services::grid::DateGrid;
use month_grid::services::lanes::{assign_row, RunStart};
use month_grid::services::span::measure;
use month_grid::utils::date::days_between;
use month_grid::{layout_month, CalendarEvent, LayoutSettings};

/// (start offset in days from Feb 20, length in days, start hour, full day)
fn event_strategy() -> impl Strategy<Value = (i64, i64, u32, bool)> {
    (0i64..50, 0i64..12, 6u32..20, any::<bool>())
}

fn build_events(specs: &[(i64, i64, u32, bool)]) -> Vec<CalendarEvent> {
    let base = Local.with_ymd_and_hms(2025, 2, 20, 0, 0, 0).unwrap();
    specs
        .iter()
        .enumerate()
        .map(|(i, &(offset, length, hour, full_day))| {
            let start = base + Duration::days(offset) + Duration::hours(i64::from(hour));
            let end = start + Duration::days(length);
            let event = CalendarEvent::new(format!("event-{i}"), start, end).unwrap();
            CalendarEvent { full_day, ..event }
        })
        .collect()
}

/// Last day `run` holds its lane within its row.
fn held_until(run: &RunStart<'_>, row_last: CalendarDay) -> CalendarDay {
    run.entry.event.end_day().min(row_last)
}

proptest! {
    /// Property: every covered day lists the event exactly once
    #[test]
    fn prop_index_covers_every_day_once(specs in prop::collection::vec(event_strategy(), 0..25)) {
        let events = build_events(&specs);
        let index = DayEventIndex::build(&events);

        for event in &events {
            for date in days_between(event.start.date_naive(), event.end.date_naive()) {
                let hits = index
                    .events_on(CalendarDay::new(date))
                    .iter()
                    .filter(|entry| std::ptr::eq(entry.event, event))
                    .count();
                prop_assert_eq!(hits, 1);
            }
        }
    }

    /// Property: each day's list is ordered by start
    #[test]
    fn prop_index_days_sorted(specs in prop::collection::vec(event_strategy(), 0..25)) {
        let events = build_events(&specs);
        let index = DayEventIndex::build(&events);

        for day in index.days() {
            let starts: Vec<_> = index.events_on(day).iter().map(|e| e.event.start).collect();
            prop_assert!(starts.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    /// Property: bars held at the same time never share a lane, and no bar
    /// gets lane k+1 while lane k is free
    #[test]
    fn prop_lanes_disjoint_and_minimal(specs in prop::collection::vec(event_strategy(), 0..25)) {
        let events = build_events(&specs);
        let index = DayEventIndex::build(&events);
        let grid = DateGrid::build(2, 2025, chrono::Weekday::Sun).unwrap();

        for row in grid.weeks() {
            let lanes = assign_row(&row, &index);
            let runs = &lanes.runs;

            for (i, a) in runs.iter().enumerate() {
                let a_until = held_until(a, row.last_day());
                for b in &runs[i + 1..] {
                    let b_until = held_until(b, row.last_day());
                    let overlap = a.day <= b_until && b.day <= a_until;
                    if overlap {
                        prop_assert_ne!(a.lane, b.lane);
                    }
                }

                for lower in 0..a.lane {
                    let taken = runs[..i].iter().any(|earlier| {
                        earlier.lane == lower
                            && earlier.day <= a.day
                            && a.day <= held_until(earlier, row.last_day())
                    });
                    prop_assert!(taken, "lane {} was free when lane {} was assigned", lower, a.lane);
                }
            }
        }
    }

    /// Property: spans stay within the row and overflow flags match the clip
    #[test]
    fn prop_span_and_overflow(specs in prop::collection::vec(event_strategy(), 0..25)) {
        let events = build_events(&specs);
        let index = DayEventIndex::build(&events);
        let grid = DateGrid::build(2, 2025, chrono::Weekday::Sun).unwrap();

        for row in grid.weeks() {
            for run in assign_row(&row, &index).runs {
                let event = run.entry.event;
                let span = measure(run.day, event, &row);

                prop_assert!((1..=7).contains(&span.span_length));
                prop_assert_eq!(span.overflow_right, span.effective_end < event.end_day());
                prop_assert_eq!(
                    span.overflow_left,
                    run.day == row.first_day() && run.day != event.start_day()
                );
            }
        }
    }

    /// Property: laying out the same month twice gives identical output
    #[test]
    fn prop_layout_idempotent(
        specs in prop::collection::vec(event_strategy(), 0..25),
        month in 0i32..4,
    ) {
        let events = build_events(&specs);
        let settings = LayoutSettings::default();
        let first = layout_month(&events, month, 2025, &settings).unwrap();
        let second = layout_month(&events, month, 2025, &settings).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: grids are whole weeks that contain the whole month
    #[test]
    fn prop_grid_whole_weeks(month in -24i32..48, year in 1900i32..2100, week_start in 0u8..7) {
        let week_start = month_grid::utils::date::weekday_from_index(week_start).unwrap();
        let grid = DateGrid::build(month, year, week_start).unwrap();

        prop_assert_eq!(grid.days().len() % 7, 0);
        prop_assert!(grid.days().len() >= 28 && grid.days().len() <= 42);
        let in_month = grid.days().iter().filter(|d| grid.is_current_month(**d)).count();
        prop_assert!((28..=31).contains(&in_month));
    }
}
