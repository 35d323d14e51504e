//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the instant type handed to ephemeris providers. It converts
//! to and from `chrono::DateTime<Utc>` for parsing, formatting and "now",
//! and to UTC/TT Julian Dates for the astronomy.

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd};
use crate::leap::tt_minus_utc;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Noon UTC on the given day.
    pub fn noon(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 12, 0, 0.0)
    }

    /// Current wall-clock time in UTC.
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }

    /// Copy the calendar fields of a `chrono` timestamp.
    ///
    /// chrono carries a leap second as `nanosecond() >= 1e9`; it is folded
    /// into the last representable instant of the preceding second.
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        let nanos = dt.nanosecond().min(999_999_999);
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + nanos as f64 / 1e9,
        }
    }

    /// Convert to a `chrono` timestamp, validating the calendar fields.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, TimeError> {
        let invalid = || TimeError::InvalidCalendar {
            year: self.year,
            month: self.month,
            day: self.day,
        };
        if !(0.0..60.0).contains(&self.second) {
            return Err(invalid());
        }
        let whole = self.second.floor();
        let nanos = ((self.second - whole) * 1e9).round().min(999_999_999.0) as u32;
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_nano_opt(self.hour, self.minute, whole as u32, nanos))
            .map(|naive| naive.and_utc())
            .ok_or_else(invalid)
    }

    /// Check that the calendar fields name a real instant.
    pub fn validate(&self) -> Result<(), TimeError> {
        self.to_datetime().map(|_| ())
    }

    /// Format like JavaScript's `Date.toISOString()`: `YYYY-MM-DDTHH:MM:SS.sssZ`.
    pub fn to_iso_string(&self) -> Result<String, TimeError> {
        Ok(self
            .to_datetime()?
            .to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Julian Date on the UTC time scale.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Julian Date on the TT time scale, using the built-in leap-second table.
    ///
    /// TT and TDB differ by under 2 ms; callers that want TDB use this value.
    pub fn to_jd_tt(&self) -> f64 {
        let jd_utc = self.to_jd_utc();
        jd_utc + tt_minus_utc(jd_utc) / SECONDS_PER_DAY
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            // Clamped so a folded leap second never prints as :60.
            let millis = ((frac * 1000.0).round() as u32).min(999);
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole, millis
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_iso8601(s).map(|dt| Self::from_datetime(&dt))
    }
}

/// Naive date-time layouts accepted after RFC 3339; interpreted as UTC.
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 timestamps with an offset, naive date-times (taken as
/// UTC) and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_iso8601(s: &str) -> Result<DateTime<Utc>, TimeError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimeError::InvalidTimestamp(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 45.123);
        assert_eq!(t.to_string(), "2024-01-15T12:30:45.123Z");
    }

    #[test]
    fn display_never_rounds_up_to_sixty() {
        let t = UtcTime::new(2016, 12, 31, 23, 59, 59.999_999_999);
        assert_eq!(t.to_string(), "2016-12-31T23:59:59.999Z");
    }

    #[test]
    fn iso_string_has_millis() {
        let t = UtcTime::noon(2024, 3, 20);
        assert_eq!(t.to_iso_string().unwrap(), "2024-03-20T12:00:00.000Z");
    }

    #[test]
    fn invalid_calendar_rejected() {
        let t = UtcTime::new(2023, 2, 29, 0, 0, 0.0);
        assert!(matches!(
            t.validate(),
            Err(TimeError::InvalidCalendar { year: 2023, month: 2, day: 29 })
        ));
    }

    #[test]
    fn jd_utc_at_j2000_noon() {
        assert_eq!(UtcTime::noon(2000, 1, 1).to_jd_utc(), J2000_JD);
    }

    #[test]
    fn jd_tt_leads_utc_by_leap_offset() {
        let t = UtcTime::noon(2024, 3, 20);
        let diff_s = (t.to_jd_tt() - t.to_jd_utc()) * SECONDS_PER_DAY;
        assert!((diff_s - 69.184).abs() < 1e-3, "diff = {diff_s}");
    }

    #[test]
    fn parse_rfc3339_with_offset() {
        let t: UtcTime = "2024-03-20T14:00:00+02:00".parse().unwrap();
        assert_eq!((t.year, t.month, t.day, t.hour), (2024, 3, 20, 12));
    }

    #[test]
    fn parse_js_iso_string() {
        let t: UtcTime = "2024-03-20T12:00:00.250Z".parse().unwrap();
        assert!((t.second - 0.25).abs() < 1e-9);
    }

    #[test]
    fn parse_naive_as_utc() {
        let t: UtcTime = "2024-03-20T06:30".parse().unwrap();
        assert_eq!((t.hour, t.minute), (6, 30));
    }

    #[test]
    fn parse_bare_date_is_midnight() {
        let t: UtcTime = "2024-03-20".parse().unwrap();
        assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (2024, 3, 20, 0, 0));
    }

    #[test]
    fn parse_garbage_fails() {
        let err = "not a date".parse::<UtcTime>().unwrap_err();
        assert_eq!(err, TimeError::InvalidTimestamp("not a date".into()));
    }

    #[test]
    fn datetime_roundtrip() {
        let t = UtcTime::new(1999, 12, 31, 23, 59, 59.5);
        let back = UtcTime::from_datetime(&t.to_datetime().unwrap());
        assert_eq!(back, t);
    }
}
