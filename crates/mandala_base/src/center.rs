//! The nine bodygraph centers and the gates that feed them.
//!
//! Every wheel gate belongs to exactly one center. A center is defined
//! when at least one of its gates is active.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BaseError;

/// Bodygraph center, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Center {
    Head,
    Ajna,
    Throat,
    G,
    Heart,
    Spleen,
    SolarPlexus,
    Sacral,
    Root,
}

/// All nine centers in declaration order.
pub const ALL_CENTERS: [Center; 9] = [
    Center::Head,
    Center::Ajna,
    Center::Throat,
    Center::G,
    Center::Heart,
    Center::Spleen,
    Center::SolarPlexus,
    Center::Sacral,
    Center::Root,
];

const HEAD_GATES: [u8; 3] = [64, 61, 63];
const AJNA_GATES: [u8; 6] = [47, 24, 4, 17, 43, 11];
const THROAT_GATES: [u8; 11] = [62, 23, 56, 16, 20, 31, 8, 33, 45, 12, 35];
const G_GATES: [u8; 8] = [1, 13, 25, 46, 2, 15, 10, 7];
const HEART_GATES: [u8; 4] = [21, 40, 26, 51];
const SPLEEN_GATES: [u8; 7] = [48, 57, 44, 50, 32, 28, 18];
const SOLAR_PLEXUS_GATES: [u8; 7] = [6, 37, 22, 36, 30, 55, 49];
const SACRAL_GATES: [u8; 9] = [5, 14, 29, 59, 9, 3, 42, 27, 34];
const ROOT_GATES: [u8; 9] = [58, 38, 54, 53, 60, 52, 19, 39, 41];

impl Center {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Ajna => "Ajna",
            Self::Throat => "Throat",
            Self::G => "G",
            Self::Heart => "Heart",
            Self::Spleen => "Spleen",
            Self::SolarPlexus => "Solar Plexus",
            Self::Sacral => "Sacral",
            Self::Root => "Root",
        }
    }

    /// Gates belonging to this center.
    pub const fn gates(self) -> &'static [u8] {
        match self {
            Self::Head => &HEAD_GATES,
            Self::Ajna => &AJNA_GATES,
            Self::Throat => &THROAT_GATES,
            Self::G => &G_GATES,
            Self::Heart => &HEART_GATES,
            Self::Spleen => &SPLEEN_GATES,
            Self::SolarPlexus => &SOLAR_PLEXUS_GATES,
            Self::Sacral => &SACRAL_GATES,
            Self::Root => &ROOT_GATES,
        }
    }

    pub const fn all() -> &'static [Center; 9] {
        &ALL_CENTERS
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Center a gate id belongs to.
pub fn center_of_gate(gate: u8) -> Result<Center, BaseError> {
    ALL_CENTERS
        .iter()
        .copied()
        .find(|c| c.gates().contains(&gate))
        .ok_or(BaseError::GateNotFound(gate))
}

/// Centers with at least one active gate. Unknown gate ids are ignored.
pub fn defined_centers<I>(active_gates: I) -> BTreeSet<Center>
where
    I: IntoIterator<Item = u8>,
{
    active_gates
        .into_iter()
        .filter_map(|g| center_of_gate(g).ok())
        .collect()
}
