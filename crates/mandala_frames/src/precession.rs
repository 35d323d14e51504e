//! General precession in ecliptic longitude.
//!
//! Positions from Keplerian elements come out in the J2000 ecliptic frame.
//! Transit longitudes are referred to the equinox of date, which has drifted
//! west by the accumulated general precession p_A.
//!
//! Source: Capitaine, Wallace & Chapront 2003 (IAU 2006 precession),
//! as tabulated in IERS Conventions 2010, Ch. 5.

use crate::spherical::normalize_360;

/// IAU 2006 general precession in ecliptic longitude, in degrees.
///
/// `t` = Julian centuries of TT since J2000.0. About 1.397° per century.
pub fn general_precession_deg(t: f64) -> f64 {
    let arcsec = t
        * (5028.796195
            + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 + t * -0.0000000383))));
    arcsec / 3600.0
}

/// Refer a J2000 ecliptic longitude to the mean equinox of date.
///
/// Only the longitude is shifted; the small ecliptic-plane rotation is
/// ignored, which costs well under an arcsecond for ecliptic bodies.
pub fn j2000_to_date_longitude_deg(lon_j2000_deg: f64, t: f64) -> f64 {
    normalize_360(lon_j2000_deg + general_precession_deg(t))
}
