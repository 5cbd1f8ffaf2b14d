//! Snapshot ingestion
//!
//! Loads one snapshot from a JSON document of the shape
//! `{"nodes": [...], "edges": [...]}` as produced by the external
//! graph-format parser. This is the boundary where the core's input
//! contract is enforced: weight fields that are missing, null,
//! non-numeric, negative or non-finite are coerced to 0.0 before any
//! record reaches the engine, and duplicate ids are rejected as
//! malformed structural input.
//!
//! Edges whose endpoints reference unknown node ids are kept but
//! flagged with a warning; they can never surface in a derived view
//! because their endpoints are absent from every id-keyed structure.

use crate::graph::{Edge, EdgeId, Node, NodeId, Snapshot};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Errors for malformed structural input
///
/// Data-quality problems that are not structural (unknown endpoint
/// ids, zero weights) never error; see the module docs.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse snapshot document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate node id {0}")]
    DuplicateNode(NodeId),

    #[error("duplicate edge id {0}")]
    DuplicateEdge(EdgeId),
}

pub type IngestResult<T> = Result<T, IngestError>;

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    nodes: Vec<RawNode>,
    #[serde(default)]
    edges: Vec<RawEdge>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: String,
    name: String,
    #[serde(default)]
    instruments: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    id: String,
    #[serde(alias = "sourceId")]
    source: String,
    #[serde(alias = "targetId")]
    target: String,
    #[serde(default, alias = "instrumentWeight", deserialize_with = "lenient_weight")]
    instrument_weight: f64,
    #[serde(default, alias = "creditWeight", deserialize_with = "lenient_weight")]
    credit_weight: f64,
}

/// Accept a number, a numeric string, or garbage; everything that does
/// not parse to a finite non-negative number becomes 0.0
fn lenient_weight<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(sanitize_weight(parsed))
}

/// Resolve an optional raw weight to the documented default
pub fn sanitize_weight(raw: Option<f64>) -> f64 {
    match raw {
        Some(w) if w.is_finite() && w >= 0.0 => w,
        _ => 0.0,
    }
}

/// Read a snapshot document from any reader
pub fn read_snapshot<R: Read>(reader: R) -> IngestResult<Snapshot> {
    let doc: RawDocument = serde_json::from_reader(reader)?;

    let mut node_ids: FxHashSet<NodeId> = FxHashSet::default();
    let mut nodes = Vec::with_capacity(doc.nodes.len());
    for raw in doc.nodes {
        let id = NodeId::new(raw.id);
        if !node_ids.insert(id.clone()) {
            return Err(IngestError::DuplicateNode(id));
        }
        nodes.push(Node {
            id,
            name: raw.name,
            instruments: raw.instruments,
        });
    }

    let mut edge_ids: FxHashSet<EdgeId> = FxHashSet::default();
    let mut edges = Vec::with_capacity(doc.edges.len());
    for raw in doc.edges {
        let id = EdgeId::new(raw.id);
        if !edge_ids.insert(id.clone()) {
            return Err(IngestError::DuplicateEdge(id));
        }
        let edge = Edge::new(
            id,
            raw.source,
            raw.target,
            sanitize_weight(Some(raw.instrument_weight)),
            sanitize_weight(Some(raw.credit_weight)),
        );
        for endpoint in [&edge.source, &edge.target] {
            if !node_ids.contains(endpoint) {
                warn!(edge = %edge.id, endpoint = %endpoint, "edge references unknown node id");
            }
        }
        edges.push(edge);
    }

    Ok(Snapshot::new(nodes, edges))
}

/// Load a snapshot document from a file path
pub fn load_snapshot(path: impl AsRef<Path>) -> IngestResult<Snapshot> {
    let file = File::open(path)?;
    read_snapshot(BufReader::new(file))
}
