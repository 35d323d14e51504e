//! Heliocentric planet positions from mean Keplerian elements.
//!
//! Elements and linear rates from E. M. Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets" (JPL/SSD), Table 1: mean
//! ecliptic and equinox of J2000, fitted to DE405 over 1800 AD – 2050 AD.
//! Typical errors are arcseconds to an arcminute; Saturn and the outer
//! planets are the weakest.

use crate::EphemerisError;

/// Bodies with a heliocentric Keplerian orbit in the element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orbit {
    Mercury,
    Venus,
    EarthMoonBarycenter,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Orbit {
    const fn index(self) -> usize {
        match self {
            Self::Mercury => 0,
            Self::Venus => 1,
            Self::EarthMoonBarycenter => 2,
            Self::Mars => 3,
            Self::Jupiter => 4,
            Self::Saturn => 5,
            Self::Uranus => 6,
            Self::Neptune => 7,
            Self::Pluto => 8,
        }
    }
}

/// Element columns: a (au), e, I (deg), L (deg), ϖ (deg), Ω (deg).
#[rustfmt::skip]
static ELEMENTS_J2000: [[f64; 6]; 9] = [
    [ 0.38709927, 0.20563593,  7.00497902, 252.25032350,  77.45779628,  48.33076593],
    [ 0.72333566, 0.00677672,  3.39467605, 181.97909950, 131.60246718,  76.67984255],
    [ 1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193,   0.0],
    [ 1.52371034, 0.09339410,  1.84969142,  -4.55343205, -23.94362959,  49.55953891],
    [ 5.20288700, 0.04838624,  1.30439695,  34.39644051,  14.72847983, 100.47390909],
    [ 9.53667594, 0.05386179,  2.48599187,  49.95424423,  92.59887831, 113.66242448],
    [19.18916464, 0.04725744,  0.77263783, 313.23810451, 170.95427630,  74.01692503],
    [30.06992276, 0.00859048,  1.77004347, -55.12002969,  44.96476227, 131.78422574],
    [39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684],
];

/// Rates per Julian century for the columns of [`ELEMENTS_J2000`].
#[rustfmt::skip]
static RATES_PER_CENTURY: [[f64; 6]; 9] = [
    [ 0.00000037,  0.00001906, -0.00594749, 149472.67411175,  0.16047689, -0.12534081],
    [ 0.00000390, -0.00004107, -0.00078890,  58517.81538729,  0.00268329, -0.27769418],
    [ 0.00000562, -0.00004392, -0.01294668,  35999.37244981,  0.32327364,  0.0],
    [ 0.00001847,  0.00007882, -0.00813131,  19140.30268499,  0.44441088, -0.29257343],
    [-0.00011607, -0.00013253, -0.00183714,   3034.74612775,  0.21252668,  0.20469106],
    [-0.00125060, -0.00050991,  0.00193609,   1222.49362201, -0.41897216, -0.28867794],
    [-0.00196176, -0.00004397, -0.00242939,    428.48202785,  0.40805281,  0.04240589],
    [ 0.00026291,  0.00005105,  0.00035372,    218.45945325, -0.32241464, -0.00508664],
    [-0.00031596,  0.00005170,  0.00004818,    145.20780515, -0.04062942, -0.01183482],
];

const KEPLER_MAX_ITER: usize = 50;
const KEPLER_TOL_DEG: f64 = 1e-10;

/// Osculating-style elements evaluated at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elements {
    /// Semi-major axis, au.
    pub a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Inclination, degrees.
    pub incl_deg: f64,
    /// Mean longitude, degrees.
    pub mean_lon_deg: f64,
    /// Longitude of perihelion, degrees.
    pub peri_lon_deg: f64,
    /// Longitude of ascending node, degrees.
    pub node_lon_deg: f64,
}

/// Elements of `orbit` at `t` Julian centuries (TT) past J2000.
pub fn elements_at(orbit: Orbit, t: f64) -> Elements {
    let base = &ELEMENTS_J2000[orbit.index()];
    let rate = &RATES_PER_CENTURY[orbit.index()];
    let v = |k: usize| base[k] + rate[k] * t;
    Elements {
        a: v(0),
        e: v(1),
        incl_deg: v(2),
        mean_lon_deg: v(3),
        peri_lon_deg: v(4),
        node_lon_deg: v(5),
    }
}

/// Reduce an angle to [-180, 180) degrees.
fn wrap_180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Solve Kepler's equation `M = E - e·sin E` for the eccentric anomaly.
///
/// Angles in degrees. Newton iteration seeded with `M + e·sin M`.
pub fn eccentric_anomaly_deg(mean_anomaly_deg: f64, e: f64) -> Result<f64, EphemerisError> {
    let m = wrap_180(mean_anomaly_deg);
    let e_star = e.to_degrees();
    let mut ea = m + e_star * m.to_radians().sin();
    for _ in 0..KEPLER_MAX_ITER {
        let delta_m = m - (ea - e_star * ea.to_radians().sin());
        let delta_e = delta_m / (1.0 - e * ea.to_radians().cos());
        ea += delta_e;
        if delta_e.abs() <= KEPLER_TOL_DEG {
            return Ok(ea);
        }
    }
    Err(EphemerisError::NoConvergence("Kepler equation"))
}

/// Heliocentric position of `orbit` in the J2000 ecliptic frame, in au.
pub fn heliocentric_position_au(orbit: Orbit, t: f64) -> Result<[f64; 3], EphemerisError> {
    let el = elements_at(orbit, t);
    let arg_peri = (el.peri_lon_deg - el.node_lon_deg).to_radians();
    let mean_anomaly = el.mean_lon_deg - el.peri_lon_deg;
    let ea = eccentric_anomaly_deg(mean_anomaly, el.e)?.to_radians();

    // Position in the orbital plane, x toward perihelion.
    let xp = el.a * (ea.cos() - el.e);
    let yp = el.a * (1.0 - el.e * el.e).sqrt() * ea.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = el.node_lon_deg.to_radians().sin_cos();
    let (si, ci) = el.incl_deg.to_radians().sin_cos();

    Ok([
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ])
}
