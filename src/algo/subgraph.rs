//! Path subgraph extraction
//!
//! Turns a solved route into a presentable subgraph: the nodes along
//! the path plus every qualifying edge between consecutive path nodes.
//! Parallel edges between the same pair are all included, so the view
//! shows every piece of supporting evidence along the route, not only
//! the edge whose cost won the solve.

use super::policy::{edge_allowed, EvidenceMode};
use crate::graph::{NodeId, Snapshot, Subgraph};
use rustc_hash::FxHashSet;

/// Build the subgraph induced by an ordered path of node ids
///
/// An empty path yields an empty subgraph. Consecutive pairs are
/// matched against edges in both directions.
pub fn path_subgraph(
    snapshot: &Snapshot,
    path: &[NodeId],
    mode: EvidenceMode,
    min_weight: f64,
) -> Subgraph {
    if path.is_empty() {
        return Subgraph::default();
    }

    let on_path: FxHashSet<&NodeId> = path.iter().collect();
    let nodes = snapshot
        .nodes()
        .filter(|n| on_path.contains(&n.id))
        .cloned()
        .collect();

    let edges = snapshot
        .edges()
        .filter(|e| {
            edge_allowed(e, mode, min_weight)
                && path
                    .windows(2)
                    .any(|pair| e.connects(&pair[0], &pair[1]))
        })
        .cloned()
        .collect();

    Subgraph { nodes, edges }
}
