//! Month grid construction.
//!
//! A grid covers whole weeks: from the week-aligned day on or before the
//! first of the month to the week-aligned day on or after its last day.

use chrono::{Datelike, Weekday};

use crate::error::{LayoutError, Result};
use crate::models::day::CalendarDay;
use crate::utils::date::{days_between, end_of_month, end_of_week, first_of_month, normalize_month, start_of_week};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Seven consecutive days, the scope of lane reuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRow {
    days: [CalendarDay; 7],
}

impl WeekRow {
    pub fn days(&self) -> &[CalendarDay; 7] {
        &self.days
    }

    pub fn first_day(&self) -> CalendarDay {
        self.days[0]
    }

    pub fn last_day(&self) -> CalendarDay {
        self.days[6]
    }
}

/// Days displayed for one month, padded to full weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGrid {
    year: i32,
    month: u32,
    week_start: Weekday,
    days: Vec<CalendarDay>,
}

impl DateGrid {
    /// Build the grid for a zero-based `month` of `year`. Months outside
    /// `0..12` carry into the adjacent years.
    pub fn build(month: i32, year: i32, week_start: Weekday) -> Result<Self> {
        let out_of_range = || LayoutError::DateOutOfRange {
            year: i64::from(year),
            month: i64::from(month),
        };

        let (year, month) = normalize_month(month, year).ok_or_else(out_of_range)?;
        let first = first_of_month(year, month).ok_or_else(out_of_range)?;
        let last = end_of_month(first).ok_or_else(out_of_range)?;
        let start = start_of_week(first, week_start).ok_or_else(out_of_range)?;
        let end = end_of_week(last, week_start).ok_or_else(out_of_range)?;

        let days: Vec<CalendarDay> = days_between(start, end)
            .into_iter()
            .map(CalendarDay::new)
            .collect();

        log::debug!(
            "Built grid for {}-{:02}: {} days from {} to {}",
            year,
            month,
            days.len(),
            start,
            end
        );

        Ok(Self {
            year,
            month,
            week_start,
            days,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (0 = January).
    pub fn month0(&self) -> u32 {
        self.month - 1
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn weeks(&self) -> Vec<WeekRow> {
        self.days
            .chunks_exact(7)
            .filter_map(|chunk| <[CalendarDay; 7]>::try_from(chunk).ok())
            .map(|days| WeekRow { days })
            .collect()
    }

    pub fn is_current_month(&self, day: CalendarDay) -> bool {
        let date = day.date();
        date.year() == self.year && date.month() == self.month
    }
}

/// Short weekday names in display order starting at `week_start`.
pub fn weekday_labels(week_start: Weekday) -> Vec<&'static str> {
    let start = week_start.num_days_from_sunday() as usize;
    (0..7).map(|i| DAY_NAMES[(start + i) % 7]).collect()
}
