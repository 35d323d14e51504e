//! Types for transit sets and ephemeris tables.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use mandala_base::{Activation, Center, NodeModel, defined_centers};
use mandala_core::Body;

/// The thirteen members of a transit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitBody {
    Sun,
    Earth,
    NorthNode,
    SouthNode,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All transit bodies in display order.
pub const ALL_TRANSIT_BODIES: [TransitBody; 13] = [
    TransitBody::Sun,
    TransitBody::Earth,
    TransitBody::NorthNode,
    TransitBody::SouthNode,
    TransitBody::Moon,
    TransitBody::Mercury,
    TransitBody::Venus,
    TransitBody::Mars,
    TransitBody::Jupiter,
    TransitBody::Saturn,
    TransitBody::Uranus,
    TransitBody::Neptune,
    TransitBody::Pluto,
];

impl TransitBody {
    /// Display name, e.g. "North Node".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Earth => "Earth",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// JSON key, e.g. "northNode".
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Earth => "earth",
            Self::NorthNode => "northNode",
            Self::SouthNode => "southNode",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
        }
    }

    /// Provider body whose longitude is encoded directly, if any.
    ///
    /// Earth and both nodes are derived, so they return `None`.
    pub const fn provider_body(self) -> Option<Body> {
        match self {
            Self::Sun => Some(Body::Sun),
            Self::Moon => Some(Body::Moon),
            Self::Mercury => Some(Body::Mercury),
            Self::Venus => Some(Body::Venus),
            Self::Mars => Some(Body::Mars),
            Self::Jupiter => Some(Body::Jupiter),
            Self::Saturn => Some(Body::Saturn),
            Self::Uranus => Some(Body::Uranus),
            Self::Neptune => Some(Body::Neptune),
            Self::Pluto => Some(Body::Pluto),
            Self::Earth | Self::NorthNode | Self::SouthNode => None,
        }
    }

    pub const fn all() -> &'static [TransitBody; 13] {
        &ALL_TRANSIT_BODIES
    }
}

impl fmt::Display for TransitBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Activations of all thirteen bodies at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitSet {
    pub sun: Activation,
    pub earth: Activation,
    pub moon: Activation,
    pub north_node: Activation,
    pub south_node: Activation,
    pub mercury: Activation,
    pub venus: Activation,
    pub mars: Activation,
    pub jupiter: Activation,
    pub saturn: Activation,
    pub uranus: Activation,
    pub neptune: Activation,
    pub pluto: Activation,
}

impl TransitSet {
    pub fn get(&self, body: TransitBody) -> &Activation {
        match body {
            TransitBody::Sun => &self.sun,
            TransitBody::Earth => &self.earth,
            TransitBody::NorthNode => &self.north_node,
            TransitBody::SouthNode => &self.south_node,
            TransitBody::Moon => &self.moon,
            TransitBody::Mercury => &self.mercury,
            TransitBody::Venus => &self.venus,
            TransitBody::Mars => &self.mars,
            TransitBody::Jupiter => &self.jupiter,
            TransitBody::Saturn => &self.saturn,
            TransitBody::Uranus => &self.uranus,
            TransitBody::Neptune => &self.neptune,
            TransitBody::Pluto => &self.pluto,
        }
    }

    /// `(body, activation)` pairs in display order.
    pub fn entries(&self) -> [(TransitBody, Activation); 13] {
        ALL_TRANSIT_BODIES.map(|b| (b, *self.get(b)))
    }

    /// Distinct gates occupied by any body.
    pub fn active_gates(&self) -> BTreeSet<u8> {
        ALL_TRANSIT_BODIES.iter().map(|&b| self.get(b).gate).collect()
    }

    /// Bodygraph centers defined by at least one active gate.
    pub fn active_centers(&self) -> BTreeSet<Center> {
        defined_centers(self.active_gates())
    }

    /// Bodies whose gate differs from `previous`, in display order.
    pub fn gate_changes(&self, previous: &TransitSet) -> Vec<TransitBody> {
        ALL_TRANSIT_BODIES
            .iter()
            .copied()
            .filter(|&b| self.get(b).gate != previous.get(b).gate)
            .collect()
    }
}

/// One day of an ephemeris table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisRow {
    /// Instant of the row, `YYYY-MM-DDTHH:MM:SS.sssZ`.
    pub date: String,
    pub transits: TransitSet,
}

/// Per-row gate changes against the preceding row; the first row has none.
pub fn gate_changes_by_row(rows: &[EphemerisRow]) -> Vec<Vec<TransitBody>> {
    let mut out = Vec::with_capacity(rows.len());
    let mut previous: Option<&TransitSet> = None;
    for row in rows {
        out.push(match previous {
            Some(prev) => row.transits.gate_changes(prev),
            None => Vec::new(),
        });
        previous = Some(&row.transits);
    }
    out
}

/// Transit assembly options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransitConfig {
    /// Year counting for the mean north node.
    pub node_model: NodeModel,
}

impl TransitConfig {
    pub fn new(node_model: NodeModel) -> Self {
        Self { node_model }
    }
}
