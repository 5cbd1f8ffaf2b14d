//! Graph analytics engine
//!
//! Everything here is a pure function of `(snapshot, parameters)`:
//! recomputation after a parameter change is idempotent and needs no
//! locking beyond the read-only snapshot itself.

mod egonet;
mod heap;
mod pathfinding;
mod policy;
mod subgraph;

pub use egonet::egonet;
pub use heap::MinHeap;
pub use pathfinding::{edge_cost, shortest_path, DEFAULT_HOP_PENALTY};
pub use policy::{cost_strength, display_strength, edge_allowed, EvidenceMode};
pub use subgraph::path_subgraph;

use crate::graph::{NodeId, Snapshot, Subgraph};

/// The engine's query surface, exposed as snapshot methods
impl Snapshot {
    /// Egonet of `focus` under the given filter
    pub fn compute_egonet(
        &self,
        focus: &NodeId,
        mode: EvidenceMode,
        min_weight: f64,
    ) -> Subgraph {
        egonet(self, focus, mode, min_weight)
    }

    /// Strongest-evidence route between two people; empty when either
    /// endpoint is unknown or the target is unreachable
    pub fn compute_shortest_path(
        &self,
        start: &NodeId,
        end: &NodeId,
        mode: EvidenceMode,
        min_weight: f64,
        hop_penalty: f64,
    ) -> Vec<NodeId> {
        shortest_path(self, start, end, mode, min_weight, hop_penalty)
    }

    /// Subgraph induced by a solved route, parallel evidence included
    pub fn build_path_subgraph(
        &self,
        path: &[NodeId],
        mode: EvidenceMode,
        min_weight: f64,
    ) -> Subgraph {
        path_subgraph(self, path, mode, min_weight)
    }
}
