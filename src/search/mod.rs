//! Name matcher
//!
//! Ranked text search over node display names, used to resolve query
//! box input to node ids. Matching is trim-and-case-fold on both
//! sides; ranking is two tiers (prefix matches strictly above
//! substring matches) with input order preserved inside each tier.

use crate::graph::{Node, Snapshot};

/// Search node names for `query`, returning at most `limit` matches
///
/// An empty (post-trim) query matches nothing rather than everything.
pub fn search_names<'a>(snapshot: &'a Snapshot, query: &str, limit: usize) -> Vec<&'a Node> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut prefix_matches = Vec::new();
    let mut contains_matches = Vec::new();
    for node in snapshot.nodes() {
        let name = node.name.trim().to_lowercase();
        if name.starts_with(&needle) {
            prefix_matches.push(node);
        } else if name.contains(&needle) {
            contains_matches.push(node);
        }
    }

    prefix_matches.extend(contains_matches);
    prefix_matches.truncate(limit);
    prefix_matches
}

impl Snapshot {
    /// Ranked name search over node display names
    pub fn search_names(&self, query: &str, limit: usize) -> Vec<&Node> {
        search_names(self, query, limit)
    }
}
