//! The 64-gate wheel.
//!
//! Gates are laid around the ecliptic in a fixed order starting at
//! 2° Aquarius (tropical longitude 302°). Each gate spans 360/64 = 5.625°.
//! The wheel is a compile-time constant shared by every computation.

use crate::error::BaseError;

/// Number of gates on the wheel.
pub const GATE_COUNT: usize = 64;

/// Angular span of one gate: 360/64 = 5.625 degrees.
pub const GATE_SPAN_DEG: f64 = 360.0 / GATE_COUNT as f64;

/// Tropical longitude where wheel index 0 begins (2° Aquarius).
pub const WHEEL_START_LON_DEG: f64 = 302.0;

/// Gate ids in wheel order, index 0 at 2° Aquarius.
#[rustfmt::skip]
pub const GATE_WHEEL: [u8; GATE_COUNT] = [
    41, 19, 13, 49, 30, 55, 37, 63, 22, 36, 25, 17, 21, 51, 42,  3,
    27, 24,  2, 23,  8, 20, 16, 35, 45, 12, 15, 52, 39, 53, 62, 56,
    31, 33,  7,  4, 29, 59, 40, 64, 47,  6, 46, 18, 48, 57, 32, 50,
    28, 44,  1, 43, 14, 34,  9,  5, 26, 11, 10, 58, 38, 54, 61, 60,
];

/// Gate id at a wheel index.
pub fn gate_at(index: usize) -> Result<u8, BaseError> {
    GATE_WHEEL
        .get(index)
        .copied()
        .ok_or(BaseError::IndexOutOfRange(index))
}

/// Wheel index of a gate id.
pub fn index_of(gate: u8) -> Result<usize, BaseError> {
    GATE_WHEEL
        .iter()
        .position(|&g| g == gate)
        .ok_or(BaseError::GateNotFound(gate))
}

/// Gate half a wheel away (index + 32). Applying it twice is the identity.
pub fn opposite_gate(gate: u8) -> Result<u8, BaseError> {
    let idx = index_of(gate)?;
    Ok(GATE_WHEEL[(idx + GATE_COUNT / 2) % GATE_COUNT])
}

/// Tropical longitude (degrees, [0, 360)) at which a wheel index begins.
pub fn gate_start_longitude_deg(index: usize) -> Result<f64, BaseError> {
    if index >= GATE_COUNT {
        return Err(BaseError::IndexOutOfRange(index));
    }
    Ok((WHEEL_START_LON_DEG + index as f64 * GATE_SPAN_DEG) % 360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_is_a_permutation() {
        let mut seen = [false; GATE_COUNT + 1];
        for &g in &GATE_WHEEL {
            assert!((1..=64).contains(&g), "gate {g} out of range");
            assert!(!seen[g as usize], "gate {g} repeated");
            seen[g as usize] = true;
        }
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn index_roundtrip() {
        for (i, &g) in GATE_WHEEL.iter().enumerate() {
            assert_eq!(index_of(g).unwrap(), i);
            assert_eq!(gate_at(i).unwrap(), g);
        }
    }

    #[test]
    fn lookup_errors() {
        assert_eq!(gate_at(64), Err(BaseError::IndexOutOfRange(64)));
        assert_eq!(index_of(0), Err(BaseError::GateNotFound(0)));
        assert_eq!(index_of(65), Err(BaseError::GateNotFound(65)));
        assert_eq!(opposite_gate(99), Err(BaseError::GateNotFound(99)));
    }

    #[test]
    fn opposite_of_zero_point_is_index_32() {
        assert_eq!(opposite_gate(GATE_WHEEL[0]).unwrap(), GATE_WHEEL[32]);
    }

    #[test]
    fn start_longitudes() {
        assert_eq!(gate_start_longitude_deg(0).unwrap(), 302.0);
        assert!((gate_start_longitude_deg(10).unwrap() - 358.25).abs() < 1e-12);
        assert!((gate_start_longitude_deg(11).unwrap() - 3.875).abs() < 1e-12);
        assert!(gate_start_longitude_deg(64).is_err());
    }
}
