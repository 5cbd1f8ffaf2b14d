//! Person node records

use super::types::NodeId;
use serde::{Deserialize, Serialize};

/// A person in the collaboration network
///
/// Nodes are created once at ingestion and never mutated for the
/// lifetime of a snapshot. Display names are not guaranteed unique;
/// only the id is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within the snapshot
    pub id: NodeId,

    /// Display name (not unique)
    pub name: String,

    /// Optional free-text instrument annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruments: Option<String>,
}

impl Node {
    /// Create a new node without an instrument annotation
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            name: name.into(),
            instruments: None,
        }
    }

    /// Create a new node with an instrument annotation
    pub fn new_with_instruments(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        instruments: impl Into<String>,
    ) -> Self {
        Node {
            id: id.into(),
            name: name.into(),
            instruments: Some(instruments.into()),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
