//! Human Design wheel primitives.
//!
//! This crate provides:
//! - The fixed 64-gate wheel and gate opposition
//! - Encoding of an ecliptic longitude into gate.line.color.tone.base
//! - A linear mean lunar node model
//! - The nine bodygraph centers and their gates
//!
//! Everything here is pure arithmetic on longitudes; where the longitudes
//! come from is the caller's business.

pub mod activation;
pub mod center;
pub mod error;
pub mod lunar_node;
pub mod wheel;

pub use activation::{
    Activation, BASES_PER_WHEEL, COLORS_PER_WHEEL, LINES_PER_WHEEL, TONES_PER_WHEEL,
    WHEEL_OFFSET_DEG, activation_from_longitude, encode_fraction, wheel_fraction,
};
pub use center::{ALL_CENTERS, Center, center_of_gate, defined_centers};
pub use error::BaseError;
pub use lunar_node::{
    ALL_NODE_MODELS, MEAN_NODE_AT_EPOCH_DEG, NODE_REGRESSION_DEG_PER_YEAR, NodeModel,
    mean_node_deg, mean_node_from_calendar, mean_node_from_jd,
};
pub use wheel::{
    GATE_COUNT, GATE_SPAN_DEG, GATE_WHEEL, WHEEL_START_LON_DEG, gate_at, gate_start_longitude_deg,
    index_of, opposite_gate,
};
