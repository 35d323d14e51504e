//! Geocentric lunar longitude from a truncated ELP-2000/82 series.
//!
//! Mean arguments and periodic terms from Meeus, *Astronomical Algorithms*
//! (2nd ed.), Chapter 47, Table 47.A (the 58 largest longitude terms), plus
//! the three additive corrections for Venus, Jupiter and flattening.
//! Result is the geometric longitude referred to the mean equinox of date,
//! good to roughly 10 arcseconds.

use mandala_frames::normalize_360;

/// Fundamental arguments in degrees at `t` Julian centuries (TT) past J2000.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Moon's mean longitude L'.
    pub mean_lon: f64,
    /// Mean elongation D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M'.
    pub moon_anomaly: f64,
    /// Argument of latitude F.
    pub latitude_arg: f64,
}

pub fn lunar_arguments(t: f64) -> LunarArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    LunarArguments {
        mean_lon: normalize_360(
            218.3164477 + 481_267.881_234_21 * t - 0.0015786 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0,
        ),
        elongation: normalize_360(
            297.8501921 + 445_267.111_403_4 * t - 0.0018819 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
        ),
        sun_anomaly: normalize_360(
            357.5291092 + 35_999.050_290_9 * t - 0.0001536 * t2 + t3 / 24_490_000.0,
        ),
        moon_anomaly: normalize_360(
            134.9633964 + 477_198.867_505_5 * t + 0.0087414 * t2 + t3 / 69_699.0
                - t4 / 14_712_000.0,
        ),
        latitude_arg: normalize_360(
            93.2720950 + 483_202.017_523_3 * t - 0.0036539 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        ),
    }
}

/// Longitude terms: multiples of D, M, M', F and the sine amplitude in 1e-6 deg.
#[rustfmt::skip]
static LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 58] = [
    (0,  0,  1,  0,  6_288_774.0),
    (2,  0, -1,  0,  1_274_027.0),
    (2,  0,  0,  0,    658_314.0),
    (0,  0,  2,  0,    213_618.0),
    (0,  1,  0,  0,   -185_116.0),
    (0,  0,  0,  2,   -114_332.0),
    (2,  0, -2,  0,     58_793.0),
    (2, -1, -1,  0,     57_066.0),
    (2,  0,  1,  0,     53_322.0),
    (2, -1,  0,  0,     45_758.0),
    (0,  1, -1,  0,    -40_923.0),
    (1,  0,  0,  0,    -34_720.0),
    (0,  1,  1,  0,    -30_383.0),
    (2,  0,  0, -2,     15_327.0),
    (0,  0,  1,  2,    -12_528.0),
    (0,  0,  1, -2,     10_980.0),
    (4,  0, -1,  0,     10_675.0),
    (0,  0,  3,  0,     10_034.0),
    (4,  0, -2,  0,      8_548.0),
    (2,  1, -1,  0,     -7_888.0),
    (2,  1,  0,  0,     -6_766.0),
    (1,  0, -1,  0,     -5_163.0),
    (1,  1,  0,  0,      4_987.0),
    (2, -1,  1,  0,      4_036.0),
    (2,  0,  2,  0,      3_994.0),
    (4,  0,  0,  0,      3_861.0),
    (2,  0, -3,  0,      3_665.0),
    (0,  1, -2,  0,     -2_689.0),
    (2,  0, -1,  2,     -2_602.0),
    (2, -1, -2,  0,      2_390.0),
    (1,  0,  1,  0,     -2_348.0),
    (2, -2,  0,  0,      2_236.0),
    (0,  1,  2,  0,     -2_120.0),
    (0,  2,  0,  0,     -2_069.0),
    (2, -2, -1,  0,      2_048.0),
    (2,  0,  1, -2,     -1_773.0),
    (2,  0,  0,  2,     -1_595.0),
    (4, -1, -1,  0,      1_215.0),
    (0,  0,  2,  2,     -1_110.0),
    (3,  0, -1,  0,       -892.0),
    (2,  1,  1,  0,       -810.0),
    (4, -1, -2,  0,        759.0),
    (0,  2, -1,  0,       -713.0),
    (2,  2, -1,  0,       -700.0),
    (2,  1, -2,  0,        691.0),
    (2, -1,  0, -2,        596.0),
    (4,  0,  1,  0,        549.0),
    (0,  0,  4,  0,        537.0),
    (4, -1,  0,  0,        520.0),
    (1,  0, -2,  0,       -487.0),
    (2,  1,  0, -2,       -399.0),
    (0,  0,  2, -2,       -381.0),
    (1,  1,  1,  0,        351.0),
    (3,  0, -2,  0,       -340.0),
    (4,  0, -3,  0,        330.0),
    (2, -1,  2,  0,        327.0),
    (0,  2,  1,  0,       -323.0),
    (1,  1, -1,  0,        299.0),
];

/// Geocentric ecliptic longitude of the Moon, degrees [0, 360), mean equinox of date.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_longitude_deg(t: f64) -> f64 {
    let args = lunar_arguments(t);
    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_arg.to_radians();

    // Decreasing eccentricity of Earth's orbit scales the M-dependent terms.
    let ecc = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let mut sum = 0.0_f64;
    for &(nd, nm, nmp, nf, amp) in &LONGITUDE_TERMS {
        let arg = nd as f64 * d + nm as f64 * m + nmp as f64 * mp + nf as f64 * f;
        let scale = match nm.abs() {
            1 => ecc,
            2 => ecc * ecc,
            _ => 1.0,
        };
        sum += amp * scale * arg.sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let l = args.mean_lon.to_radians();
    sum += 3958.0 * a1.sin() + 1962.0 * (l - f).sin() + 318.0 * a2.sin();

    normalize_360(args.mean_lon + sum / 1e6)
}
