//! Longitude → gate.line.color.tone.base encoding.
//!
//! A longitude is shifted so the wheel's zero point (2° Aquarius) lands on
//! 0, reduced to a fraction of the circle, and then read at five
//! resolutions. Every level is taken from the same fraction:
//!
//! | level | cells per circle | cycle |
//! |-------|------------------|-------|
//! | gate  | 64               | wheel |
//! | line  | 384              | 6     |
//! | color | 2304             | 6     |
//! | tone  | 13824            | 6     |
//! | base  | 69120            | 5     |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::wheel::{GATE_COUNT, GATE_WHEEL, opposite_gate};

/// Offset added to a tropical longitude so 302° maps to the wheel's zero.
pub const WHEEL_OFFSET_DEG: f64 = 58.0;

pub const LINES_PER_WHEEL: f64 = 384.0;
pub const COLORS_PER_WHEEL: f64 = 2304.0;
pub const TONES_PER_WHEEL: f64 = 13_824.0;
pub const BASES_PER_WHEEL: f64 = 69_120.0;

/// Largest `f64` strictly below 1.0.
const FRACTION_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// One body's position on the wheel at all five levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activation {
    /// Gate id, 1..=64.
    pub gate: u8,
    /// 1..=6
    pub line: u8,
    /// 1..=6
    pub color: u8,
    /// 1..=6
    pub tone: u8,
    /// 1..=5
    pub base: u8,
}

impl Activation {
    /// Same line/color/tone/base in the opposite gate.
    ///
    /// Earth and the South Node are read this way from the Sun and North
    /// Node; only the gate moves.
    pub fn opposite(&self) -> Result<Self, BaseError> {
        Ok(Self {
            gate: opposite_gate(self.gate)?,
            ..*self
        })
    }

    /// Render the first `depth` levels, e.g. depth 2 → `"41.3"`.
    ///
    /// `depth` is clamped to 1..=5.
    pub fn to_string_depth(&self, depth: usize) -> String {
        let levels = [self.gate, self.line, self.color, self.tone, self.base];
        let depth = depth.clamp(1, levels.len());
        levels[..depth]
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.gate, self.line, self.color, self.tone, self.base
        )
    }
}

/// Position of a longitude on the wheel as a fraction in [0, 1).
///
/// Any real input is reduced modulo 360. A result that rounds up to 1.0
/// wraps to the last representable value below it.
pub fn wheel_fraction(lon_deg: f64) -> f64 {
    let adjusted = (lon_deg + WHEEL_OFFSET_DEG).rem_euclid(360.0);
    let fraction = adjusted / 360.0;
    if fraction >= 1.0 { FRACTION_MAX } else { fraction }
}

/// `floor((fraction * cells) mod cycle) + 1`, multiplying before the modulus.
fn subdivide(fraction: f64, cells: f64, cycle: f64) -> u8 {
    ((fraction * cells) % cycle).floor() as u8 + 1
}

/// Encode a wheel fraction in [0, 1).
///
/// Out-of-range fractions are not an error; the gate index saturates to
/// the wheel bounds.
pub fn encode_fraction(fraction: f64) -> Activation {
    let gate_index = ((fraction * GATE_COUNT as f64) as usize).min(GATE_COUNT - 1);
    Activation {
        gate: GATE_WHEEL[gate_index],
        line: subdivide(fraction, LINES_PER_WHEEL, 6.0),
        color: subdivide(fraction, COLORS_PER_WHEEL, 6.0),
        tone: subdivide(fraction, TONES_PER_WHEEL, 6.0),
        base: subdivide(fraction, BASES_PER_WHEEL, 5.0),
    }
}

/// Encode a tropical ecliptic longitude in degrees.
pub fn activation_from_longitude(lon_deg: f64) -> Result<Activation, BaseError> {
    if !lon_deg.is_finite() {
        return Err(BaseError::NonFiniteLongitude);
    }
    Ok(encode_fraction(wheel_fraction(lon_deg)))
}
