//! Human Design transits built on a longitude provider.
//!
//! This crate provides:
//! - Thirteen-body transit sets for an instant
//! - Day-by-day ephemeris tables, computed in parallel
//! - A request handler producing JSON-shaped replies with status codes

pub mod assembler;
pub mod error;
pub mod request;
pub mod types;

pub use assembler::{ephemeris_for_days, ephemeris_for_month, transits_at, transits_now};
pub use error::TransitError;
pub use request::{
    CALCULATION_FAILED_MESSAGE, INVALID_DATE_MESSAGE, Succeeded, TransitReply,
    handle_transit_request,
};
pub use types::{
    ALL_TRANSIT_BODIES, EphemerisRow, TransitBody, TransitConfig, TransitSet, gate_changes_by_row,
};
