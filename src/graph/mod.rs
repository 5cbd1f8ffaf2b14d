//! Entity model for one loaded collaboration network
//!
//! Immutable node/edge records plus the `Snapshot` container that
//! holds one loaded instance of the full graph.

mod edge;
mod node;
mod snapshot;
mod types;

pub use edge::Edge;
pub use node::Node;
pub use snapshot::{Snapshot, Subgraph};
pub use types::{EdgeId, NodeId};
