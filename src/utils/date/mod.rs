// Date utility functions
// Civil-date arithmetic used by the month grid and the layout engine

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Map a week-start index (0 = Sunday .. 6 = Saturday) to a weekday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Normalize a zero-based month that may fall outside `0..12`, carrying
/// into adjacent years. Returns `(year, month)` with a one-based month.
///
/// ```
/// use month_grid::utils::date::normalize_month;
///
/// assert_eq!(normalize_month(12, 2024), Some((2025, 1)));
/// assert_eq!(normalize_month(-1, 2024), Some((2023, 12)));
/// ```
pub fn normalize_month(month: i32, year: i32) -> Option<(i32, u32)> {
    let total = i64::from(year) * 12 + i64::from(month);
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;
    Some((year, month))
}

pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year().checked_add(1)?, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    first_of_month(year, month)?.pred_opt()
}

/// The week-aligned day on or before `date`.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> Option<NaiveDate> {
    let offset = (date.weekday().num_days_from_sunday() + 7
        - week_start.num_days_from_sunday())
        % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
}

/// The week-aligned day on or after `date`.
pub fn end_of_week(date: NaiveDate, week_start: Weekday) -> Option<NaiveDate> {
    start_of_week(date, week_start)?.checked_add_days(Days::new(6))
}

/// Every day from `start` through `end`, inclusive. Empty when `end < start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Signed number of days from `from` to `to`.
pub fn diff_in_days(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
