//! Egonet extraction
//!
//! The induced subgraph on a focus node plus every neighbor reachable
//! through an edge that passes the current filter.

use super::policy::{edge_allowed, EvidenceMode};
use crate::graph::{NodeId, Snapshot, Subgraph};
use rustc_hash::FxHashSet;

/// Build the egonet around `focus`
///
/// The focus is always part of the result, even when it has no
/// qualifying edges; an unknown focus yields a subgraph containing
/// nothing at all. The edge list is the full induced set — allowed
/// edges between two neighbors count even when the focus is on neither
/// side, so the result is not merely a star.
pub fn egonet(
    snapshot: &Snapshot,
    focus: &NodeId,
    mode: EvidenceMode,
    min_weight: f64,
) -> Subgraph {
    if !snapshot.contains_node(focus) {
        return Subgraph::default();
    }

    let mut members: FxHashSet<&NodeId> = FxHashSet::default();
    members.insert(focus);
    for edge in snapshot.edges() {
        if !edge_allowed(edge, mode, min_weight) {
            continue;
        }
        if let Some(opposite) = edge.opposite(focus) {
            // A dangling endpoint id stays out of every derived view
            if snapshot.contains_node(opposite) {
                members.insert(opposite);
            }
        }
    }

    let nodes = snapshot
        .nodes()
        .filter(|n| members.contains(&n.id))
        .cloned()
        .collect();
    let edges = snapshot
        .edges()
        .filter(|e| {
            edge_allowed(e, mode, min_weight)
                && members.contains(&e.source)
                && members.contains(&e.target)
        })
        .cloned()
        .collect();

    Subgraph { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, EdgeId, Node};

    fn snapshot() -> Snapshot {
        Snapshot::new(
            vec![
                Node::new("a", "Alice"),
                Node::new("b", "Bob"),
                Node::new("c", "Carol"),
                Node::new("d", "Dave"),
            ],
            vec![
                Edge::new("e1", "a", "b", 5.0, 0.0),
                Edge::new("e2", "b", "c", 0.0, 5.0),
                Edge::new("e3", "a", "d", 1.0, 1.0),
            ],
        )
    }

    #[test]
    fn test_neighborhood_of_focus() {
        let snap = snapshot();
        let view = egonet(&snap, &NodeId::new("a"), EvidenceMode::Both, 1.0);

        assert_eq!(view.node_ids(), vec![&NodeId::new("a"), &NodeId::new("b"), &NodeId::new("d")]);
        assert_eq!(view.edge_ids(), vec![&EdgeId::new("e1"), &EdgeId::new("e3")]);
    }

    #[test]
    fn test_focus_survives_with_zero_qualifying_edges() {
        let snap = snapshot();
        let view = egonet(&snap, &NodeId::new("a"), EvidenceMode::Both, 100.0);

        assert_eq!(view.node_ids(), vec![&NodeId::new("a")]);
        assert!(view.edges.is_empty());
    }

    #[test]
    fn test_unknown_focus_is_empty() {
        let snap = snapshot();
        let view = egonet(&snap, &NodeId::new("zz"), EvidenceMode::Both, 0.0);
        assert!(view.is_empty());
    }

    #[test]
    fn test_includes_neighbor_to_neighbor_edges() {
        // b and c are both neighbors of a; the b-c edge belongs to the
        // induced subgraph even though a is on neither side of it.
        let snap = Snapshot::new(
            vec![
                Node::new("a", "A"),
                Node::new("b", "B"),
                Node::new("c", "C"),
            ],
            vec![
                Edge::new("ab", "a", "b", 2.0, 0.0),
                Edge::new("ac", "a", "c", 2.0, 0.0),
                Edge::new("bc", "b", "c", 2.0, 0.0),
            ],
        );
        let view = egonet(&snap, &NodeId::new("a"), EvidenceMode::Instrument, 1.0);
        assert_eq!(view.nodes.len(), 3);
        assert_eq!(view.edges.len(), 3);
    }

    #[test]
    fn test_filter_excludes_weak_neighbors() {
        let snap = snapshot();
        // Credit mode: only e2 (b-c) qualifies at threshold 2, and it
        // does not touch a.
        let view = egonet(&snap, &NodeId::new("a"), EvidenceMode::Credit, 2.0);
        assert_eq!(view.node_ids(), vec![&NodeId::new("a")]);
        assert!(view.edges.is_empty());
    }
}
