//! Frame helpers for ecliptic longitude computations.
//!
//! Provides Cartesian → spherical conversion in the J2000 ecliptic frame and
//! the general precession needed to refer a J2000 longitude to the mean
//! equinox of date.

pub mod precession;
pub mod spherical;

pub use precession::{general_precession_deg, j2000_to_date_longitude_deg};
pub use spherical::{SphericalCoords, cartesian_to_spherical, normalize_360};
