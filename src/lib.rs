//! Collabgraph — analytics engine for artist collaboration networks
//!
//! Given a graph of people and weighted collaboration evidence between
//! them, the engine answers two questions under adjustable evidence and
//! strength filters: what does one person's local neighborhood look
//! like (the "egonet"), and what is the strongest-evidence route
//! connecting two people?
//!
//! # Architecture
//!
//! - [`graph`] — immutable node/edge records and the [`Snapshot`]
//!   holding one loaded instance of the network
//! - [`algo`] — the evidence/filter policy, a generic binary min-heap,
//!   the Dijkstra route solver, and the egonet/path subgraph builders
//! - [`search`] — ranked name matching for resolving query-box text
//!   to node ids
//! - [`ingest`] — JSON snapshot loading with weight sanitization
//!
//! Every query is a pure function of `(snapshot, parameters)` and is
//! recomputed in full when a parameter changes. "Not found" conditions
//! (unknown ids, unreachable targets, empty graphs) are empty results,
//! never errors.
//!
//! # Example
//!
//! ```rust
//! use collabgraph::algo::{EvidenceMode, DEFAULT_HOP_PENALTY};
//! use collabgraph::graph::{Edge, Node, NodeId, Snapshot};
//!
//! let snapshot = Snapshot::new(
//!     vec![
//!         Node::new("miles", "Miles Davis"),
//!         Node::new("trane", "John Coltrane"),
//!         Node::new("bill", "Bill Evans"),
//!     ],
//!     vec![
//!         Edge::new("e1", "miles", "trane", 5.0, 2.0),
//!         Edge::new("e2", "miles", "bill", 3.0, 1.0),
//!     ],
//! );
//!
//! let ego = snapshot.compute_egonet(&NodeId::new("miles"), EvidenceMode::Both, 1.0);
//! assert_eq!(ego.nodes.len(), 3);
//!
//! let route = snapshot.compute_shortest_path(
//!     &NodeId::new("trane"),
//!     &NodeId::new("bill"),
//!     EvidenceMode::Both,
//!     1.0,
//!     DEFAULT_HOP_PENALTY,
//! );
//! assert_eq!(route.len(), 3); // trane -> miles -> bill
//!
//! let hits = snapshot.search_names("mi", 10);
//! assert_eq!(hits[0].name, "Miles Davis");
//! ```

pub mod algo;
pub mod graph;
pub mod ingest;
pub mod search;

pub use algo::{EvidenceMode, MinHeap, DEFAULT_HOP_PENALTY};
pub use graph::{Edge, EdgeId, Node, NodeId, Snapshot, Subgraph};
pub use ingest::{load_snapshot, read_snapshot, IngestError};
pub use search::search_names;

/// Crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
