//! Error types for month-grid layout

use thiserror::Error;

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Contract violations detected by the layout engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Event name is empty or whitespace
    #[error("Event name cannot be empty")]
    EmptyName,

    /// Event ends before it starts
    #[error("Event '{name}' ends before it starts")]
    EndBeforeStart { name: String },

    /// Builder finished without a required field
    #[error("Event {0} is required")]
    MissingField(&'static str),

    /// First day of week outside 0 (Sunday) ..= 6 (Saturday)
    #[error("First day of week must be between 0 and 6, got {0}")]
    InvalidWeekStart(u8),

    /// Unknown time format name
    #[error("Unknown time format '{0}' (expected 12h or 24h)")]
    InvalidTimeFormat(String),

    /// The requested month cannot be represented as a calendar date
    #[error("Month {month} of year {year} is out of the supported date range")]
    DateOutOfRange { year: i64, month: i64 },
}
