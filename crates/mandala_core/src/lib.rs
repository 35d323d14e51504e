//! Ephemeris oracle contract and built-in provider.
//!
//! Transit computation depends only on [`LongitudeProvider`]: "geocentric
//! ecliptic longitude of `body` at `instant`, in degrees". Any deterministic
//! source can implement it. This crate also ships [`KeplerEphemeris`], a
//! low-precision analytic provider that needs no kernel files.

pub mod kepler;
pub mod moon;
pub mod provider;

use thiserror::Error;

use mandala_time::TimeError;

pub use provider::KeplerEphemeris;

/// Bodies whose longitudes come from an ephemeris provider.
///
/// Computed points (lunar nodes, Earth as the Sun's opposite) are NOT
/// included here; they are derived downstream from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All provider bodies in query order.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Case-insensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(name.trim()))
    }

    pub const fn all() -> &'static [Body; 10] {
        &ALL_BODIES
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ephemeris provider errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("epoch out of range: JD(TT) {jd_tt}")]
    EpochOutOfRange { jd_tt: f64 },
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    #[error("{0} is not supported by this provider")]
    UnsupportedBody(Body),
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}

/// Configuration for [`KeplerEphemeris`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisConfig {
    /// First supported instant, JD on the TT scale.
    pub valid_from_jd_tt: f64,
    /// Last supported instant (exclusive), JD on the TT scale.
    pub valid_to_jd_tt: f64,
    /// Refer longitudes to the equinox of date (`true`) or leave them in
    /// the J2000 ecliptic frame.
    pub apply_precession: bool,
}

/// JD(TT) of 1800-01-01T00:00, start of the Keplerian element fit.
pub const ELEMENTS_VALID_FROM_JD: f64 = 2_378_496.5;
/// JD(TT) of 2051-01-01T00:00, end of the Keplerian element fit (exclusive,
/// so 2050-12-31 is the last covered day).
pub const ELEMENTS_VALID_TO_JD: f64 = 2_470_172.5;

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            valid_from_jd_tt: ELEMENTS_VALID_FROM_JD,
            valid_to_jd_tt: ELEMENTS_VALID_TO_JD,
            apply_precession: true,
        }
    }
}

impl EphemerisConfig {
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.valid_from_jd_tt.is_finite() || !self.valid_to_jd_tt.is_finite() {
            return Err(EphemerisError::InvalidConfig(
                "validity window bounds must be finite",
            ));
        }
        if self.valid_from_jd_tt >= self.valid_to_jd_tt {
            return Err(EphemerisError::InvalidConfig(
                "valid_from_jd_tt must precede valid_to_jd_tt",
            ));
        }
        Ok(())
    }

    /// Whether a TT Julian Date falls inside the validity window.
    pub fn covers(&self, jd_tt: f64) -> bool {
        jd_tt >= self.valid_from_jd_tt && jd_tt < self.valid_to_jd_tt
    }
}

/// Source of geocentric ecliptic longitudes.
///
/// Implementations must be deterministic: the same body and instant always
/// yield the same value. They are shared across worker threads when
/// building ephemeris tables, hence `Send + Sync`.
pub trait LongitudeProvider: Send + Sync {
    /// Geocentric ecliptic longitude of `body` at `instant`, in degrees.
    fn longitude_of(
        &self,
        body: Body,
        instant: &mandala_time::UtcTime,
    ) -> Result<f64, EphemerisError>;
}

impl<P: LongitudeProvider + ?Sized> LongitudeProvider for &P {
    fn longitude_of(
        &self,
        body: Body,
        instant: &mandala_time::UtcTime,
    ) -> Result<f64, EphemerisError> {
        (**self).longitude_of(body, instant)
    }
}

impl<P: LongitudeProvider + ?Sized> LongitudeProvider for std::sync::Arc<P> {
    fn longitude_of(
        &self,
        body: Body,
        instant: &mandala_time::UtcTime,
    ) -> Result<f64, EphemerisError> {
        (**self).longitude_of(body, instant)
    }
}
