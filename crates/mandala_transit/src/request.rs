//! Transit request handling for a presentation layer.
//!
//! One optional ISO-8601 timestamp in, one JSON-shaped reply out. The reply
//! carries the HTTP status a web front end should send with it.

use serde::{Serialize, Serializer};

use mandala_core::LongitudeProvider;
use mandala_time::UtcTime;

use crate::assembler::transits_at;
use crate::error::TransitError;
use crate::types::{TransitConfig, TransitSet};

pub const INVALID_DATE_MESSAGE: &str = "Invalid date format";
pub const CALCULATION_FAILED_MESSAGE: &str = "Failed to calculate transits";

/// The `success` marker of a successful reply; serialises as `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Succeeded;

impl Serialize for Succeeded {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

/// Reply to a transit request.
///
/// Serializes without a tag, so each variant is exactly its JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TransitReply {
    /// `{"success": true, "date": "...", "transits": {...}}`
    Success {
        success: Succeeded,
        date: String,
        transits: TransitSet,
    },
    /// `{"error": "Invalid date format"}`
    InvalidDate { error: String },
    /// `{"error": "Failed to calculate transits", "details": "..."}`
    Failed { error: String, details: String },
}

impl TransitReply {
    fn success(date: String, transits: TransitSet) -> Self {
        Self::Success {
            success: Succeeded,
            date,
            transits,
        }
    }

    fn invalid_date() -> Self {
        Self::InvalidDate {
            error: INVALID_DATE_MESSAGE.to_string(),
        }
    }

    fn failed(err: &TransitError) -> Self {
        Self::Failed {
            error: CALCULATION_FAILED_MESSAGE.to_string(),
            details: err.to_string(),
        }
    }

    /// HTTP status for this reply: 200, 400 or 500.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Success { .. } => 200,
            Self::InvalidDate { .. } => 400,
            Self::Failed { .. } => 500,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Compute transits for an optional ISO-8601 `date` parameter.
///
/// A missing or empty parameter means now (UTC). Unparsable input yields
/// [`TransitReply::InvalidDate`]; any computation failure yields
/// [`TransitReply::Failed`] with the error text in `details`.
pub fn handle_transit_request<P: LongitudeProvider + ?Sized>(
    provider: &P,
    date_param: Option<&str>,
    config: &TransitConfig,
) -> TransitReply {
    let instant = match date_param.filter(|s| !s.is_empty()) {
        Some(raw) => match raw.parse::<UtcTime>() {
            Ok(instant) => instant,
            Err(e) => {
                tracing::warn!(input = raw, error = %e, "rejecting transit request");
                return TransitReply::invalid_date();
            }
        },
        None => UtcTime::now(),
    };

    let result = transits_at(provider, &instant, config)
        .and_then(|transits| Ok((instant.to_iso_string()?, transits)));
    match result {
        Ok((date, transits)) => TransitReply::success(date, transits),
        Err(e) => {
            tracing::error!(date = %instant, error = %e, "transit calculation failed");
            TransitReply::failed(&e)
        }
    }
}
