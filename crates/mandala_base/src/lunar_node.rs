//! Mean lunar north node from a linear regression model.
//!
//! The node starts at 125.04° at the 2000 epoch and regresses at
//! 19.3356° per year. No nutation or periodic terms: adequate for
//! gate/line placement, not for precision work.
//!
//! Two ways of counting years are offered. [`NodeModel::Calendar`] sums
//! year, month and day fractions from the calendar fields and is the
//! default; it has small steps at month boundaries because months are
//! treated as twelfths of a year. [`NodeModel::Continuous`] counts Julian
//! years from J2000 and has none.

use std::fmt;
use std::str::FromStr;

use mandala_time::{J2000_JD, UtcTime};
use serde::{Deserialize, Serialize};

/// Mean node longitude at the 2000 epoch, degrees.
pub const MEAN_NODE_AT_EPOCH_DEG: f64 = 125.04;

/// Retrograde motion of the mean node, degrees per year.
pub const NODE_REGRESSION_DEG_PER_YEAR: f64 = 19.3356;

const DAYS_PER_YEAR: f64 = 365.25;

/// How elapsed years are counted for the mean node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeModel {
    /// `(year - 2000) + month_index / 12 + day / 365.25`, month_index 0-based.
    #[default]
    Calendar,
    /// `(JD_UTC - 2451545.0) / 365.25`.
    Continuous,
}

pub const ALL_NODE_MODELS: [NodeModel; 2] = [NodeModel::Calendar, NodeModel::Continuous];

impl NodeModel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::Continuous => "continuous",
        }
    }

    pub const fn all() -> &'static [NodeModel] {
        &ALL_NODE_MODELS
    }
}

impl fmt::Display for NodeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_NODE_MODELS
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown node model '{s}' (expected calendar or continuous)"))
    }
}

/// Normalize to [0, 360), folding a rounded-up 360.0 back to 0.
fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

fn node_after_years(years: f64) -> f64 {
    normalize_deg(MEAN_NODE_AT_EPOCH_DEG - NODE_REGRESSION_DEG_PER_YEAR * years)
}

/// Mean north node longitude from calendar fields, degrees [0, 360).
///
/// `month` is 1-based (1 = January). Time of day is not considered.
/// Fields are not validated; day 31 of a 30-day month is simply 1/365.25
/// of a year past day 30.
pub fn mean_node_from_calendar(year: i32, month: u32, day: u32) -> f64 {
    let years = (year - 2000) as f64 + (month as f64 - 1.0) / 12.0 + day as f64 / DAYS_PER_YEAR;
    node_after_years(years)
}

/// Mean north node longitude at a UTC Julian Date, degrees [0, 360).
pub fn mean_node_from_jd(jd_utc: f64) -> f64 {
    node_after_years((jd_utc - J2000_JD) / DAYS_PER_YEAR)
}

/// Mean north node longitude at `instant` under `model`.
pub fn mean_node_deg(model: NodeModel, instant: &UtcTime) -> f64 {
    match model {
        NodeModel::Calendar => mean_node_from_calendar(instant.year, instant.month, instant.day),
        NodeModel::Continuous => mean_node_from_jd(instant.to_jd_utc()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_epoch_near_125_04() {
        let lon = mean_node_from_calendar(2000, 1, 1);
        assert!((lon - 125.04).abs() < 0.1, "lon = {lon}");
        // One day of regression below the epoch constant.
        assert!((lon - (125.04 - 19.3356 / 365.25)).abs() < 1e-12);
    }

    #[test]
    fn continuous_epoch_is_exact() {
        let lon = mean_node_deg(NodeModel::Continuous, &UtcTime::noon(2000, 1, 1));
        assert!((lon - 125.04).abs() < 1e-9, "lon = {lon}");
    }

    #[test]
    fn time_of_day_ignored_by_calendar_model() {
        let a = mean_node_deg(NodeModel::Calendar, &UtcTime::new(2024, 5, 5, 0, 0, 0.0));
        let b = mean_node_deg(NodeModel::Calendar, &UtcTime::new(2024, 5, 5, 23, 59, 59.0));
        assert_eq!(a, b);
    }

    #[test]
    fn calendar_model_steps_at_month_boundary() {
        // Jan 31 → Feb 1: one month forward, 30 days back.
        let jan31 = mean_node_from_calendar(2021, 1, 31);
        let feb1 = mean_node_from_calendar(2021, 2, 1);
        let step = (jan31 - feb1).rem_euclid(360.0);
        let expected = NODE_REGRESSION_DEG_PER_YEAR * (1.0 / 12.0 - 30.0 / DAYS_PER_YEAR);
        assert!((step - expected).abs() < 1e-9, "step = {step}");
    }

    #[test]
    fn result_in_range_far_from_epoch() {
        for year in [-500, 1000, 1900, 2100, 3000] {
            let lon = mean_node_from_calendar(year, 6, 15);
            assert!((0.0..360.0).contains(&lon), "year {year}: {lon}");
        }
    }

    #[test]
    fn model_names_parse() {
        for m in ALL_NODE_MODELS {
            assert_eq!(m.name().parse::<NodeModel>().unwrap(), m);
        }
        assert_eq!(" Continuous ".parse::<NodeModel>().unwrap(), NodeModel::Continuous);
        assert!("true".parse::<NodeModel>().is_err());
        assert_eq!(NodeModel::default(), NodeModel::Calendar);
    }
}
