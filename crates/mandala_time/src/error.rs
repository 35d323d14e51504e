//! Error types for time parsing and calendar validation.

use thiserror::Error;

/// Errors from timestamp parsing or calendar validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The input could not be parsed as an ISO-8601 timestamp.
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
    /// Calendar fields do not name a real date/time.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidCalendar { year: i32, month: u32, day: u32 },
}
