//! Text serialization of node and edge lists.
//!
//! One entry per line, joined with `\n` and no trailing newline. Edges are
//! written as `source;target`, the same shape the edge loader reads.

use crate::types::Edge;

pub fn nodes_to_text<S: AsRef<str>>(nodes: &[S]) -> String {
    nodes.iter().map(|node| node.as_ref()).collect::<Vec<_>>().join("\n")
}

pub fn edges_to_text(edges: &[Edge]) -> String {
    edges.iter().map(Edge::to_string).collect::<Vec<_>>().join("\n")
}
