//! Edge filtering against a selected node set.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::types::{Edge, NodeId};

/// Keep the edges whose source and target are both in `nodes`, in input
/// order. An empty `nodes` yields no edges.
///
/// Each edge is tested independently, so the scan runs on the rayon pool;
/// `collect` preserves the input order.
pub fn filter_edges(edges: &[Edge], nodes: &[NodeId]) -> Vec<Edge> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let keep: HashSet<&str> = nodes.iter().map(String::as_str).collect();
    edges
        .par_iter()
        .filter(|edge| keep.contains(edge.source.as_str()) && keep.contains(edge.target.as_str()))
        .cloned()
        .collect()
}
