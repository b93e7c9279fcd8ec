// Test fixtures - reusable test data
// Provides consistent dates and events across the integration tests
#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use month_grid::models::day::CalendarDay;
use month_grid::CalendarEvent;

/// Sample dates for testing. March 2025 starts on a Saturday, so with a
/// Sunday week start its rows begin on Feb 23, Mar 2, 9, 16, 23 and 30.
pub mod dates {
    use super::*;

    pub const YEAR: i32 = 2025;
    /// Zero-based March
    pub const MARCH: i32 = 2;

    /// Local instant on a day of March 2025
    pub fn march(day: u32, hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(YEAR, 3, day, hour, 0, 0).unwrap()
    }

    pub fn march_day(day: u32) -> CalendarDay {
        CalendarDay::new(NaiveDate::from_ymd_opt(YEAR, 3, day).unwrap())
    }

    /// Monday of the third grid row
    pub const MONDAY: u32 = 10;
    pub const TUESDAY: u32 = 11;
    pub const WEDNESDAY: u32 = 12;
    pub const THURSDAY: u32 = 13;
    pub const FRIDAY: u32 = 14;
    /// Saturday closing the second grid row
    pub const SATURDAY_BEFORE: u32 = 8;
    pub const SUNDAY: u32 = 9;
}

/// Sample events for testing
pub mod events {
    use super::dates::march;
    use super::*;

    /// Full-day event from one March day to another
    pub fn all_day(name: &str, from: u32, to: u32) -> CalendarEvent {
        CalendarEvent::full_day(name, march(from, 0), march(to, 0)).unwrap()
    }

    /// One-hour timed event on a March day
    pub fn timed(name: &str, day: u32, hour: u32) -> CalendarEvent {
        CalendarEvent::new(name, march(day, hour), march(day, hour + 1)).unwrap()
    }

    /// A busy month mixing overlapping bars, a bar crossing rows and
    /// timed entries.
    pub fn busy_march() -> Vec<CalendarEvent> {
        vec![
            all_day("Offsite", 10, 12),
            all_day("Release freeze", 11, 13),
            all_day("Hackathon", 12, 14),
            all_day("Vacation", 20, 27),
            all_day("Spring break", 1, 9),
            timed("Dentist", 11, 15),
            timed("Standup", 11, 9),
            timed("Retro", 14, 16),
        ]
    }
}
