//! Time handling for transit computations.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - A built-in leap-second table and the UTC → TT offset
//! - `UtcTime`, the instant type passed to ephemeris providers
//! - ISO-8601 parsing and `toISOString`-style formatting

pub mod error;
pub mod julian;
pub mod leap;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month,
    jd_to_calendar, jd_to_centuries,
};
pub use leap::{TT_MINUS_TAI_S, tai_minus_utc, tt_minus_utc};
pub use utc_time::{UtcTime, parse_iso8601};
