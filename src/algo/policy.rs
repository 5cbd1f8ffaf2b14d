//! Evidence and filter policy
//!
//! Pure functions turning an edge's two raw weights into a display
//! strength, a traversal cost input, and an inclusion decision. Every
//! derived view (egonet, path subgraph, solver working graph) goes
//! through the same `edge_allowed` predicate, so all of them respect
//! the user's filter consistently.

use crate::graph::Edge;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which evidence dimension(s) count toward strength and cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceMode {
    /// Instrument-based collaboration only
    Instrument,
    /// Credit-based collaboration only
    Credit,
    /// Both dimensions together
    Both,
}

impl fmt::Display for EvidenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvidenceMode::Instrument => write!(f, "instrument"),
            EvidenceMode::Credit => write!(f, "credit"),
            EvidenceMode::Both => write!(f, "both"),
        }
    }
}

impl FromStr for EvidenceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "instrument" => Ok(EvidenceMode::Instrument),
            "credit" => Ok(EvidenceMode::Credit),
            "both" => Ok(EvidenceMode::Both),
            other => Err(format!("unknown evidence mode: {}", other)),
        }
    }
}

/// Strength shown to the user and compared against the minimum-weight
/// threshold
pub fn display_strength(edge: &Edge, mode: EvidenceMode) -> f64 {
    match mode {
        EvidenceMode::Instrument => edge.instrument_weight,
        EvidenceMode::Credit => edge.credit_weight,
        EvidenceMode::Both => edge.instrument_weight + edge.credit_weight,
    }
}

/// Strength fed into the traversal cost function
///
/// Identical to `display_strength` except that in `Both` mode
/// instrument evidence counts double, so routing prefers
/// performer-to-performer links even when both evidence kinds are shown
/// with equal visual weight.
pub fn cost_strength(edge: &Edge, mode: EvidenceMode) -> f64 {
    match mode {
        EvidenceMode::Instrument => edge.instrument_weight,
        EvidenceMode::Credit => edge.credit_weight,
        EvidenceMode::Both => 2.0 * edge.instrument_weight + edge.credit_weight,
    }
}

/// The single inclusion predicate gating membership in every derived view
///
/// Inclusive threshold: an edge whose display strength equals
/// `min_weight` exactly is allowed.
pub fn edge_allowed(edge: &Edge, mode: EvidenceMode, min_weight: f64) -> bool {
    display_strength(edge, mode) >= min_weight
}
