//! Transit set assembly and day-by-day ephemeris tables.
//!
//! Ten bodies are read from a [`LongitudeProvider`] and encoded. The north
//! node comes from the mean-node model; Earth and the south node are the
//! oppositions of the Sun and north node, keeping their line, color, tone
//! and base. Any failure fails the whole set.

use chrono::{Datelike, Days, NaiveDate};
use rayon::prelude::*;

use mandala_base::{Activation, activation_from_longitude, mean_node_deg};
use mandala_core::{Body, LongitudeProvider};
use mandala_time::{TimeError, UtcTime, days_in_month};

use crate::error::TransitError;
use crate::types::{EphemerisRow, TransitConfig, TransitSet};

/// Read one body from the provider and encode it.
fn encode_body<P: LongitudeProvider + ?Sized>(
    provider: &P,
    body: Body,
    instant: &UtcTime,
) -> Result<Activation, TransitError> {
    let lon = provider
        .longitude_of(body, instant)
        .map_err(|source| TransitError::Ephemeris {
            body,
            date: instant.to_string(),
            source,
        })?;
    if !lon.is_finite() {
        return Err(TransitError::NonFiniteLongitude {
            body,
            date: instant.to_string(),
            value: lon,
        });
    }
    let activation = activation_from_longitude(lon)?;
    tracing::debug!(body = body.name(), lon, %activation, "encoded body");
    Ok(activation)
}

/// All thirteen activations at `instant`.
pub fn transits_at<P: LongitudeProvider + ?Sized>(
    provider: &P,
    instant: &UtcTime,
    config: &TransitConfig,
) -> Result<TransitSet, TransitError> {
    instant.validate()?;

    let sun = encode_body(provider, Body::Sun, instant)?;
    let moon = encode_body(provider, Body::Moon, instant)?;
    let mercury = encode_body(provider, Body::Mercury, instant)?;
    let venus = encode_body(provider, Body::Venus, instant)?;
    let mars = encode_body(provider, Body::Mars, instant)?;
    let jupiter = encode_body(provider, Body::Jupiter, instant)?;
    let saturn = encode_body(provider, Body::Saturn, instant)?;
    let uranus = encode_body(provider, Body::Uranus, instant)?;
    let neptune = encode_body(provider, Body::Neptune, instant)?;
    let pluto = encode_body(provider, Body::Pluto, instant)?;

    let node_lon = mean_node_deg(config.node_model, instant);
    let north_node = activation_from_longitude(node_lon)?;
    tracing::debug!(
        model = %config.node_model,
        lon = node_lon,
        activation = %north_node,
        "encoded north node"
    );

    let earth = sun.opposite()?;
    let south_node = north_node.opposite()?;

    tracing::info!(date = %instant, sun = %sun, earth = %earth, "transit set assembled");
    Ok(TransitSet {
        sun,
        earth,
        moon,
        north_node,
        south_node,
        mercury,
        venus,
        mars,
        jupiter,
        saturn,
        uranus,
        neptune,
        pluto,
    })
}

/// Transits at the current UTC wall-clock time, with the instant used.
pub fn transits_now<P: LongitudeProvider + ?Sized>(
    provider: &P,
    config: &TransitConfig,
) -> Result<(UtcTime, TransitSet), TransitError> {
    let now = UtcTime::now();
    let set = transits_at(provider, &now, config)?;
    Ok((now, set))
}

/// One row per day at 12:00 UTC for `days` days from `start`.
///
/// Days are computed in parallel. The table is all-or-nothing: if any day
/// fails, the chronologically first failure is returned.
pub fn ephemeris_for_days<P: LongitudeProvider + ?Sized>(
    provider: &P,
    start: NaiveDate,
    days: u32,
    config: &TransitConfig,
) -> Result<Vec<EphemerisRow>, TransitError> {
    let results: Vec<Result<EphemerisRow, TransitError>> = (0..days)
        .into_par_iter()
        .map(|offset| -> Result<EphemerisRow, TransitError> {
            let date = start
                .checked_add_days(Days::new(u64::from(offset)))
                .ok_or(TimeError::InvalidCalendar {
                    year: start.year(),
                    month: start.month(),
                    day: start.day(),
                })?;
            let instant = UtcTime::noon(date.year(), date.month(), date.day());
            let transits = transits_at(provider, &instant, config)?;
            Ok(EphemerisRow {
                date: instant.to_iso_string()?,
                transits,
            })
        })
        .collect();

    let rows = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    tracing::info!(%start, days, "ephemeris table computed");
    Ok(rows)
}

/// One row per day of a calendar month at 12:00 UTC.
pub fn ephemeris_for_month<P: LongitudeProvider + ?Sized>(
    provider: &P,
    year: i32,
    month: u32,
    config: &TransitConfig,
) -> Result<Vec<EphemerisRow>, TransitError> {
    let invalid = TimeError::InvalidCalendar {
        year,
        month,
        day: 1,
    };
    let days = days_in_month(year, month).ok_or_else(|| invalid.clone())?;
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(invalid)?;
    ephemeris_for_days(provider, start, days, config)
}
