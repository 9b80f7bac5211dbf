//! In-memory adjacency index over an immutable edge list.
//!
//! Built once per run from the parsed edges and never mutated afterwards.
//! Neighbour lists keep edge order so walks enumerate nodes
//! deterministically.

use std::collections::{HashMap, HashSet};

use crate::types::{Direction, Edge, NodeId};

/// A directed network: its deduplicated edges plus successor and
/// predecessor adjacency keyed by node identifier.
#[derive(Debug, Clone, Default)]
pub struct Network {
    edges: Vec<Edge>,
    nodes: Vec<NodeId>,
    successors: HashMap<NodeId, Vec<NodeId>>,
    predecessors: HashMap<NodeId, Vec<NodeId>>,
}

impl Network {
    /// Build the index from an edge list. Duplicate edges are collapsed,
    /// keeping the first occurrence; self-loops are kept.
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut seen: HashSet<Edge> = HashSet::new();
        let mut network = Network::default();
        let mut known: HashSet<NodeId> = HashSet::new();

        for edge in edges {
            let edge: Edge = edge.into();
            if !seen.insert(edge.clone()) {
                continue;
            }
            for endpoint in [&edge.source, &edge.target] {
                if known.insert(endpoint.clone()) {
                    network.nodes.push(endpoint.clone());
                }
            }
            network
                .successors
                .entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());
            network
                .predecessors
                .entry(edge.target.clone())
                .or_default()
                .push(edge.source.clone());
            network.edges.push(edge);
        }

        network
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Every edge endpoint, in order of first appearance.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.successors.contains_key(node) || self.predecessors.contains_key(node)
    }

    /// Targets of edges leaving `node`.
    pub fn successors(&self, node: &str) -> &[NodeId] {
        self.successors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sources of edges entering `node`.
    pub fn predecessors(&self, node: &str) -> &[NodeId] {
        self.predecessors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// One-hop neighbours of `node` when stepping in `direction`.
    pub fn neighbors(&self, node: &str, direction: Direction) -> &[NodeId] {
        match direction {
            Direction::Forward => self.successors(node),
            Direction::Backward => self.predecessors(node),
        }
    }

    /// Keep the seeds that are nodes of this network, deduplicated, in
    /// their original order.
    pub fn restrict_seeds<I, S>(&self, seeds: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        seeds
            .into_iter()
            .filter_map(|seed| {
                let seed = seed.as_ref();
                (self.contains(seed) && seen.insert(seed.to_string())).then(|| seed.to_string())
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
