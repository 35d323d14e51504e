//! Leap-second table and the UTC → TT offset.
//!
//! The table holds every TAI−UTC step announced by the IERS since the start
//! of the modern leap-second era (1972-01-01). Before 1972 the 1972 value is
//! held fixed.

use crate::julian::calendar_to_jd;

/// TT − TAI in seconds (exact by definition).
pub const TT_MINUS_TAI_S: f64 = 32.184;

/// `(year, month, TAI−UTC)`; each entry takes effect at 00:00 UTC on the
/// first day of the month.
#[rustfmt::skip]
const LEAP_SECONDS: [(i32, u32, f64); 28] = [
    (1972, 1, 10.0), (1972, 7, 11.0), (1973, 1, 12.0), (1974, 1, 13.0),
    (1975, 1, 14.0), (1976, 1, 15.0), (1977, 1, 16.0), (1978, 1, 17.0),
    (1979, 1, 18.0), (1980, 1, 19.0), (1981, 7, 20.0), (1982, 7, 21.0),
    (1983, 7, 22.0), (1985, 7, 23.0), (1988, 1, 24.0), (1990, 1, 25.0),
    (1991, 1, 26.0), (1992, 7, 27.0), (1993, 7, 28.0), (1994, 7, 29.0),
    (1996, 1, 30.0), (1997, 7, 31.0), (1999, 1, 32.0), (2006, 1, 33.0),
    (2009, 1, 34.0), (2012, 7, 35.0), (2015, 7, 36.0), (2017, 1, 37.0),
];

/// TAI − UTC in seconds at the given UTC Julian Date.
pub fn tai_minus_utc(jd_utc: f64) -> f64 {
    let mut offset = LEAP_SECONDS[0].2;
    for &(year, month, delta_at) in &LEAP_SECONDS {
        if jd_utc >= calendar_to_jd(year, month, 1.0) {
            offset = delta_at;
        } else {
            break;
        }
    }
    offset
}

/// TT − UTC in seconds at the given UTC Julian Date.
pub fn tt_minus_utc(jd_utc: f64) -> f64 {
    tai_minus_utc(jd_utc) + TT_MINUS_TAI_S
}
