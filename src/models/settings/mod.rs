// Settings module
// Layout preferences loaded from the config file

use chrono::{DateTime, TimeZone, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LayoutError, Result};
use crate::utils::date::weekday_from_index;

/// Clock style for timed-event labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl TimeFormat {
    /// Two-digit hour and minute label for `instant`.
    pub fn label<Tz: TimeZone>(self, instant: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            TimeFormat::TwelveHour => instant.format("%I:%M %p").to_string(),
            TimeFormat::TwentyFourHour => instant.format("%H:%M").to_string(),
        }
    }
}

impl FromStr for TimeFormat {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12h" => Ok(TimeFormat::TwelveHour),
            "24h" => Ok(TimeFormat::TwentyFourHour),
            other => Err(LayoutError::InvalidTimeFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u8,
    pub time_format: TimeFormat,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            time_format: TimeFormat::TwentyFourHour,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<()> {
        self.week_start().map(|_| ())
    }

    pub fn week_start(&self) -> Result<Weekday> {
        weekday_from_index(self.first_day_of_week)
            .ok_or(LayoutError::InvalidWeekStart(self.first_day_of_week))
    }

    /// Replace fields with the values that were given; `None` keeps the
    /// current value. The result is not validated.
    pub fn with_overrides(
        mut self,
        first_day_of_week: Option<u8>,
        time_format: Option<TimeFormat>,
    ) -> Self {
        if let Some(first_day_of_week) = first_day_of_week {
            self.first_day_of_week = first_day_of_week;
        }
        if let Some(time_format) = time_format {
            self.time_format = time_format;
        }
        self
    }
}
