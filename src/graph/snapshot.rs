//! Immutable graph snapshot and derived-view types
//!
//! A `Snapshot` is one fully loaded instance of the collaboration
//! network. It is built once from ingested records and never mutated;
//! loading new data means building a new snapshot that replaces the
//! old one wholesale.

use super::edge::Edge;
use super::node::Node;
use super::types::{EdgeId, NodeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One immutable loaded instance of the collaboration network
///
/// Node and edge maps are keyed by id and preserve insertion order, so
/// every derived view iterates records in the order ingestion produced
/// them. This is what makes egonet and path-subgraph output
/// deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeId, Edge>,
}

impl Snapshot {
    /// Build a snapshot from ingested record lists
    ///
    /// Records are trusted to be pre-validated by ingestion (unique ids,
    /// sanitized weights). A duplicate id here keeps the later record.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let nodes = nodes.into_iter().map(|n| (n.id.clone(), n)).collect();
        let edges = edges.into_iter().map(|e| (e.id.clone(), e)).collect();
        Snapshot { nodes, edges }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// All nodes, in ingestion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges, in ingestion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }
}

/// An ephemeral derived view: owned copies of the nodes and edges that
/// survived a filter, ready for presentation
///
/// Subgraphs own no state beyond their output and are recomputed in
/// full whenever an input parameter changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subgraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Subgraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Convenience for tests and callers: the contained node ids,
    /// in output order
    pub fn node_ids(&self) -> Vec<&NodeId> {
        self.nodes.iter().map(|n| &n.id).collect()
    }

    /// The contained edge ids, in output order
    pub fn edge_ids(&self) -> Vec<&EdgeId> {
        self.edges.iter().map(|e| &e.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_lookup() {
        let snapshot = Snapshot::new(
            vec![Node::new("a", "Alice"), Node::new("b", "Bob")],
            vec![Edge::new("e1", "a", "b", 1.0, 0.0)],
        );

        assert_eq!(snapshot.node_count(), 2);
        assert_eq!(snapshot.edge_count(), 1);
        assert!(snapshot.contains_node(&NodeId::new("a")));
        assert!(!snapshot.contains_node(&NodeId::new("z")));
        assert_eq!(snapshot.get_node(&NodeId::new("b")).unwrap().name, "Bob");
        assert_eq!(
            snapshot.get_edge(&EdgeId::new("e1")).unwrap().instrument_weight,
            1.0
        );
    }

    #[test]
    fn test_iteration_preserves_ingestion_order() {
        let snapshot = Snapshot::new(
            vec![
                Node::new("c", "Carol"),
                Node::new("a", "Alice"),
                Node::new("b", "Bob"),
            ],
            vec![],
        );

        let names: Vec<&str> = snapshot.nodes().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.node_count(), 0);
        assert_eq!(snapshot.edge_count(), 0);
    }
}
