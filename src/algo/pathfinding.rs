//! Strongest-evidence route solver
//!
//! Dijkstra over the filtered collaboration graph. Edge cost is
//! `1/(cost_strength + 1) + hop_penalty`: stronger evidence makes a
//! link cheaper, the `+1` bounds the evidence term to (0, 1] and keeps
//! a zero-weight (but allowed) edge finite, and the hop penalty
//! discourages long chains of barely-qualifying links.

use super::heap::MinHeap;
use super::policy::{cost_strength, edge_allowed, EvidenceMode};
use crate::graph::{Edge, NodeId, Snapshot};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Additive cost per traversed edge unless the caller overrides it
pub const DEFAULT_HOP_PENALTY: f64 = 0.25;

/// Traversal cost of a single edge under the given mode
pub fn edge_cost(edge: &Edge, mode: EvidenceMode, hop_penalty: f64) -> f64 {
    1.0 / (cost_strength(edge, mode) + 1.0) + hop_penalty
}

/// A dense-indexed adjacency view of the graph restricted to edges that
/// pass the filter
///
/// Node ids are sorted lexically before index assignment, so equal-cost
/// frontiers expand in id order and solver output is reproducible
/// across runs.
struct FilteredView<'a> {
    index_to_node: Vec<&'a NodeId>,
    node_to_index: FxHashMap<&'a NodeId, usize>,
    /// index -> (neighbor index, traversal cost)
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl<'a> FilteredView<'a> {
    fn new(
        snapshot: &'a Snapshot,
        mode: EvidenceMode,
        min_weight: f64,
        hop_penalty: f64,
    ) -> Self {
        let mut index_to_node: Vec<&NodeId> = snapshot.nodes().map(|n| &n.id).collect();
        index_to_node.sort();

        let mut node_to_index =
            FxHashMap::with_capacity_and_hasher(index_to_node.len(), Default::default());
        for (idx, id) in index_to_node.iter().enumerate() {
            node_to_index.insert(*id, idx);
        }

        let mut adjacency = vec![Vec::new(); index_to_node.len()];
        for edge in snapshot.edges() {
            if !edge_allowed(edge, mode, min_weight) {
                continue;
            }
            // Undirected: an edge whose endpoint is unknown to the node
            // set never enters the adjacency
            let (Some(&u), Some(&v)) = (
                node_to_index.get(&edge.source),
                node_to_index.get(&edge.target),
            ) else {
                continue;
            };
            let cost = edge_cost(edge, mode, hop_penalty);
            adjacency[u].push((v, cost));
            adjacency[v].push((u, cost));
        }

        FilteredView {
            index_to_node,
            node_to_index,
            adjacency,
        }
    }
}

/// Solve for the cheapest route between two people
///
/// Returns the node id sequence from `start` to `end`. Absent
/// endpoints and unreachable targets both yield an empty path; neither
/// is an error. `start == end` yields the single-element path.
pub fn shortest_path(
    snapshot: &Snapshot,
    start: &NodeId,
    end: &NodeId,
    mode: EvidenceMode,
    min_weight: f64,
    hop_penalty: f64,
) -> Vec<NodeId> {
    if !snapshot.contains_node(start) || !snapshot.contains_node(end) {
        return Vec::new();
    }
    if start == end {
        return vec![start.clone()];
    }

    let view = FilteredView::new(snapshot, mode, min_weight, hop_penalty);
    let start_idx = view.node_to_index[start];
    let end_idx = view.node_to_index[end];
    let n = view.index_to_node.len();

    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut heap = MinHeap::with_capacity(n);

    dist[start_idx] = 0.0;
    heap.push(start_idx, 0.0);

    let mut popped = 0usize;
    while let Some((node, cost)) = heap.pop() {
        // Lazy deletion: stale entries are simply skipped
        if visited[node] {
            continue;
        }
        visited[node] = true;
        popped += 1;

        if node == end_idx {
            break;
        }

        for &(neighbor, step_cost) in &view.adjacency[node] {
            if visited[neighbor] {
                continue;
            }
            let next = cost + step_cost;
            if next < dist[neighbor] {
                dist[neighbor] = next;
                pred[neighbor] = Some(node);
                heap.push(neighbor, next);
            }
        }
    }

    if !visited[end_idx] || dist[end_idx].is_infinite() {
        debug!(start = %start, end = %end, popped, "target unreachable under current filters");
        return Vec::new();
    }

    // Walk predecessors back from the target and reverse
    let mut path = Vec::new();
    let mut current = Some(end_idx);
    while let Some(idx) = current {
        path.push(view.index_to_node[idx].clone());
        current = pred[idx];
    }
    path.reverse();

    // Guard against inconsistent predecessor state
    if path.first() != Some(start) {
        return Vec::new();
    }

    debug!(
        start = %start,
        end = %end,
        hops = path.len() - 1,
        cost = dist[end_idx],
        popped,
        "route solved"
    );
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node, Snapshot};

    fn snapshot() -> Snapshot {
        // a - b (instr 5)     strong performer link
        // b - c (credit 5)    strong credit link
        // a - d (1, 1)        weak side branch, no route to c
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

    fn ids(raw: &[&str]) -> Vec<NodeId> {
        raw.iter().map(|s| NodeId::new(*s)).collect()
    }

    #[test]
    fn test_same_start_and_end() {
        let snap = snapshot();
        let path = shortest_path(
            &snap,
            &NodeId::new("a"),
            &NodeId::new("a"),
            EvidenceMode::Both,
            1.0,
            DEFAULT_HOP_PENALTY,
        );
        assert_eq!(path, ids(&["a"]));
    }

    #[test]
    fn test_unknown_endpoint_is_empty_not_error() {
        let snap = snapshot();
        let path = shortest_path(
            &snap,
            &NodeId::new("a"),
            &NodeId::new("zz"),
            EvidenceMode::Both,
            1.0,
            DEFAULT_HOP_PENALTY,
        );
        assert!(path.is_empty());
    }

    #[test]
    fn test_route_through_strongest_links() {
        let snap = snapshot();
        let path = shortest_path(
            &snap,
            &NodeId::new("a"),
            &NodeId::new("c"),
            EvidenceMode::Both,
            1.0,
            DEFAULT_HOP_PENALTY,
        );
        assert_eq!(path, ids(&["a", "b", "c"]));
    }

    #[test]
    fn test_unreachable_under_filter() {
        let snap = snapshot();
        // Instrument mode hides the credit-only b-c link
        let path = shortest_path(
            &snap,
            &NodeId::new("a"),
            &NodeId::new("c"),
            EvidenceMode::Instrument,
            1.0,
            DEFAULT_HOP_PENALTY,
        );
        assert!(path.is_empty());
    }

    #[test]
    fn test_all_edges_filtered_out() {
        let snap = snapshot();
        let path = shortest_path(
            &snap,
            &NodeId::new("a"),
            &NodeId::new("b"),
            EvidenceMode::Both,
            100.0,
            DEFAULT_HOP_PENALTY,
        );
        assert!(path.is_empty());
    }

    #[test]
    fn test_stronger_evidence_wins_over_fewer_hops() {
        // Direct a-c edge is weak; the two-hop route through b is
        // strong enough to beat it despite the extra hop penalty.
        let snap = Snapshot::new(
            vec![
                Node::new("a", "A"),
                Node::new("b", "B"),
                Node::new("c", "C"),
            ],
            vec![
                Edge::new("weak", "a", "c", 1.0, 0.0),
                Edge::new("s1", "a", "b", 30.0, 0.0),
                Edge::new("s2", "b", "c", 30.0, 0.0),
            ],
        );
        // direct: 1/2 + 0.25 = 0.75; via b: 2 * (1/31 + 0.25) ~= 0.565
        let path = shortest_path(
            &snap,
            &NodeId::new("a"),
            &NodeId::new("c"),
            EvidenceMode::Instrument,
            1.0,
            DEFAULT_HOP_PENALTY,
        );
        assert_eq!(path, ids(&["a", "b", "c"]));
    }

    #[test]
    fn test_hop_penalty_prefers_direct_route() {
        // With a large hop penalty the direct edge wins even though the
        // two-hop route has stronger evidence.
        let snap = Snapshot::new(
            vec![
                Node::new("a", "A"),
                Node::new("b", "B"),
                Node::new("c", "C"),
            ],
            vec![
                Edge::new("weak", "a", "c", 1.0, 0.0),
                Edge::new("s1", "a", "b", 30.0, 0.0),
                Edge::new("s2", "b", "c", 30.0, 0.0),
            ],
        );
        let path = shortest_path(
            &snap,
            &NodeId::new("a"),
            &NodeId::new("c"),
            EvidenceMode::Instrument,
            1.0,
            2.0,
        );
        assert_eq!(path, ids(&["a", "c"]));
    }

    #[test]
    fn test_both_mode_prefers_instrument_evidence() {
        // Two parallel two-hop routes with equal display strength; the
        // instrument route must win because cost_strength doubles it.
        let snap = Snapshot::new(
            vec![
                Node::new("a", "A"),
                Node::new("m1", "Instrument hop"),
                Node::new("m2", "Credit hop"),
                Node::new("z", "Z"),
            ],
            vec![
                Edge::new("i1", "a", "m1", 4.0, 0.0),
                Edge::new("i2", "m1", "z", 4.0, 0.0),
                Edge::new("c1", "a", "m2", 0.0, 4.0),
                Edge::new("c2", "m2", "z", 0.0, 4.0),
            ],
        );
        let path = shortest_path(
            &snap,
            &NodeId::new("a"),
            &NodeId::new("z"),
            EvidenceMode::Both,
            1.0,
            DEFAULT_HOP_PENALTY,
        );
        assert_eq!(path, ids(&["a", "m1", "z"]));
    }

    #[test]
    fn test_empty_graph() {
        let snap = Snapshot::default();
        let path = shortest_path(
            &snap,
            &NodeId::new("a"),
            &NodeId::new("b"),
            EvidenceMode::Both,
            0.0,
            DEFAULT_HOP_PENALTY,
        );
        assert!(path.is_empty());
    }
}
