//! Collaboration edge records

use super::types::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// A weighted collaboration edge between two people
///
/// Edges carry two independent evidence dimensions: an instrument-based
/// weight (the two people played together) and a credit-based weight
/// (they share release credits). Both are non-negative and finite by the
/// time an edge reaches the engine; ingestion sanitizes anything else
/// to 0.0.
///
/// The graph is undirected for all traversal purposes; `source`/`target`
/// record the order the edge arrived in, nothing more. Multiple edges
/// between the same pair are permitted and never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier within the snapshot
    pub id: EdgeId,

    /// One endpoint
    pub source: NodeId,

    /// The other endpoint
    pub target: NodeId,

    /// Instrument-based collaboration weight (>= 0)
    pub instrument_weight: f64,

    /// Credit-based collaboration weight (>= 0)
    pub credit_weight: f64,
}

impl Edge {
    pub fn new(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        instrument_weight: f64,
        credit_weight: f64,
    ) -> Self {
        Edge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            instrument_weight,
            credit_weight,
        }
    }

    /// Check if this edge connects two specific nodes (in either direction)
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.source == a && &self.target == b) || (&self.source == b && &self.target == a)
    }

    /// Check if this edge touches a node on either side
    pub fn touches(&self, node: &NodeId) -> bool {
        &self.source == node || &self.target == node
    }

    /// Given one endpoint, return the opposite one, or `None` if the
    /// edge does not touch the given node
    pub fn opposite(&self, node: &NodeId) -> Option<&NodeId> {
        if &self.source == node {
            Some(&self.target)
        } else if &self.target == node {
            Some(&self.source)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connects_either_direction() {
        let edge = Edge::new("e1", "a", "b", 3.0, 1.0);
        let a = NodeId::new("a");
        let b = NodeId::new("b");
        let c = NodeId::new("c");

        assert!(edge.connects(&a, &b));
        assert!(edge.connects(&b, &a));
        assert!(!edge.connects(&a, &c));
    }

    #[test]
    fn test_opposite_endpoint() {
        let edge = Edge::new("e1", "a", "b", 0.0, 0.0);
        assert_eq!(edge.opposite(&NodeId::new("a")), Some(&NodeId::new("b")));
        assert_eq!(edge.opposite(&NodeId::new("b")), Some(&NodeId::new("a")));
        assert_eq!(edge.opposite(&NodeId::new("c")), None);
    }

    #[test]
    fn test_parallel_edges_are_distinct() {
        let e1 = Edge::new("e1", "a", "b", 2.0, 0.0);
        let e2 = Edge::new("e2", "a", "b", 0.0, 5.0);
        let e3 = Edge::new("e3", "b", "a", 1.0, 1.0);

        assert_ne!(e1, e2);
        assert_ne!(e1, e3);

        let a = NodeId::new("a");
        let b = NodeId::new("b");
        assert!(e1.connects(&a, &b));
        assert!(e2.connects(&a, &b));
        assert!(e3.connects(&a, &b));
    }
}
