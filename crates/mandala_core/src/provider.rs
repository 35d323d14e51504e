//! Built-in analytic longitude provider.

use mandala_frames::{
    cartesian_to_spherical, general_precession_deg, j2000_to_date_longitude_deg, normalize_360,
};
use mandala_time::{UtcTime, jd_to_centuries};

use crate::kepler::{Orbit, heliocentric_position_au};
use crate::moon::moon_longitude_deg;
use crate::{Body, EphemerisConfig, EphemerisError, LongitudeProvider};

/// Geocentric longitudes from mean Keplerian elements and a lunar series.
///
/// Geometric positions (no light-time, aberration or nutation), referred to
/// the mean equinox of date unless precession is disabled in the config.
/// Accuracy is on the order of arcminutes, ample for 0.0052° base cells.
///
/// `KeplerEphemeris` is [`Send`] + [`Sync`] and holds no mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerEphemeris {
    config: EphemerisConfig,
}

impl KeplerEphemeris {
    pub fn new(config: EphemerisConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    /// Longitude at a TT Julian Date, after the validity-window check.
    pub fn longitude_at_jd_tt(&self, body: Body, jd_tt: f64) -> Result<f64, EphemerisError> {
        if !self.config.covers(jd_tt) {
            return Err(EphemerisError::EpochOutOfRange { jd_tt });
        }
        let t = jd_to_centuries(jd_tt);

        let lon = match body {
            // The lunar series is already referred to the equinox of date.
            Body::Moon => {
                let of_date = moon_longitude_deg(t);
                if self.config.apply_precession {
                    return Ok(of_date);
                }
                return Ok(normalize_360(of_date - general_precession_deg(t)));
            }
            Body::Sun => {
                let earth = heliocentric_position_au(Orbit::EarthMoonBarycenter, t)?;
                cartesian_to_spherical(&[-earth[0], -earth[1], -earth[2]]).lon_deg
            }
            planet => {
                let orbit = planet_orbit(planet).ok_or(EphemerisError::UnsupportedBody(planet))?;
                let earth = heliocentric_position_au(Orbit::EarthMoonBarycenter, t)?;
                let p = heliocentric_position_au(orbit, t)?;
                cartesian_to_spherical(&[p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]])
                    .lon_deg
            }
        };

        if self.config.apply_precession {
            Ok(j2000_to_date_longitude_deg(lon, t))
        } else {
            Ok(lon)
        }
    }
}

impl Default for KeplerEphemeris {
    fn default() -> Self {
        Self {
            config: EphemerisConfig::default(),
        }
    }
}

impl LongitudeProvider for KeplerEphemeris {
    fn longitude_of(&self, body: Body, instant: &UtcTime) -> Result<f64, EphemerisError> {
        instant.validate()?;
        let jd_tt = instant.to_jd_tt();
        let lon = self.longitude_at_jd_tt(body, jd_tt)?;
        tracing::trace!(body = body.name(), jd_tt, lon, "kepler longitude");
        Ok(lon)
    }
}

/// Element-table orbit for a planet; `None` for the Sun and Moon.
fn planet_orbit(body: Body) -> Option<Orbit> {
    match body {
        Body::Mercury => Some(Orbit::Mercury),
        Body::Venus => Some(Orbit::Venus),
        Body::Mars => Some(Orbit::Mars),
        Body::Jupiter => Some(Orbit::Jupiter),
        Body::Saturn => Some(Orbit::Saturn),
        Body::Uranus => Some(Orbit::Uranus),
        Body::Neptune => Some(Orbit::Neptune),
        Body::Pluto => Some(Orbit::Pluto),
        Body::Sun | Body::Moon => None,
    }
}
