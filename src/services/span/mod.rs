// Span module
// Clips a full-day event's run to its week row

use crate::models::day::CalendarDay;
use crate::models::event::CalendarEvent;
use crate::services::grid::WeekRow;
use crate::utils::date::diff_in_days;

/// Visible extent of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSpan {
    /// Earlier of the event's end day and the row's last day.
    pub effective_end: CalendarDay,
    pub span_length: u32,
    pub overflow_left: bool,
    pub overflow_right: bool,
}

/// Measure the run of `event` that starts at `run_start` in `row`.
pub fn measure(run_start: CalendarDay, event: &CalendarEvent, row: &WeekRow) -> RunSpan {
    let end_day = event.end_day();
    let effective_end = end_day.min(row.last_day());
    let days = diff_in_days(run_start.date(), effective_end.date()) + 1;

    RunSpan {
        effective_end,
        span_length: days.clamp(1, 7) as u32,
        overflow_left: run_start == row.first_day() && run_start != event.start_day(),
        overflow_right: effective_end != end_day,
    }
}
