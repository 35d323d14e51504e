//! Error types for transit assembly.

use thiserror::Error;

use mandala_base::BaseError;
use mandala_core::{Body, EphemerisError};
use mandala_time::TimeError;

/// Errors from assembling transit sets and ephemeris tables.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TransitError {
    /// The longitude provider failed for one body.
    #[error("ephemeris failed for {body} at {date}: {source}")]
    Ephemeris {
        body: Body,
        date: String,
        #[source]
        source: EphemerisError,
    },
    /// The longitude provider returned NaN or an infinity.
    #[error("{body} longitude at {date} is not finite: {value}")]
    NonFiniteLongitude { body: Body, date: String, value: f64 },
    /// Invalid instant or calendar month.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Wheel lookup failed on an encoded gate; indicates a bug.
    #[error("internal consistency failure: {0}")]
    Internal(#[from] BaseError),
}
