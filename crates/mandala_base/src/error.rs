//! Error types for wheel lookups and activation encoding.

use thiserror::Error;

/// Errors from the gate wheel and the activation encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Gate id does not appear in the wheel (valid ids are 1..=64).
    #[error("gate {0} is not on the wheel")]
    GateNotFound(u8),
    /// Wheel index outside 0..64.
    #[error("wheel index {0} out of range 0..64")]
    IndexOutOfRange(usize),
    /// Longitude was NaN or infinite.
    #[error("longitude is not a finite number")]
    NonFiniteLongitude,
}
