//! Subnetwork selection between two seed sets.
//!
//! Two bounded walks are run: one backward (through predecessors) from the
//! downstream seeds, one forward (through successors) from the upstream
//! seeds. Their last frontiers are cut down to the meeting region plus the
//! opposite seed set, then each walk is trimmed from its deepest hop back
//! to hop 1. The selected nodes are the union of every surviving frontier.
//!
//! The trim of a walk keeps a node at hop `i` only if it is one step
//! *against* the walk's direction from hop `i - 1` or from an opposite
//! seed. For the backward walk that means a successor of hop `i - 1` or of
//! an upstream seed; for the forward walk, a predecessor of hop `i - 1` or
//! of a downstream seed. Trimming only ever removes nodes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::graph::frontier::{expand, Frontier, FrontierSequence};
use crate::graph::network::Network;
use crate::types::{Direction, NodeId};

// ---------------------------------------------------------------------------
// PathBounds
// ---------------------------------------------------------------------------

/// Hop limits for the two walks. `0` means the seed set only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathBounds {
    /// Backward hops taken from the downstream seeds.
    pub max_upstream_path_length: usize,
    /// Forward hops taken from the upstream seeds.
    pub max_downstream_path_length: usize,
}

impl PathBounds {
    pub fn new(max_upstream_path_length: usize, max_downstream_path_length: usize) -> Self {
        Self {
            max_upstream_path_length,
            max_downstream_path_length,
        }
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Both trimmed walks of a selection.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Backward walk from the downstream seeds.
    pub downstream_walk: FrontierSequence,
    /// Forward walk from the upstream seeds.
    pub upstream_walk: FrontierSequence,
}

impl Selection {
    /// Union of every frontier of both walks, downstream walk first, in
    /// order of first appearance.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.downstream_walk
            .nodes()
            .chain(self.upstream_walk.nodes())
            .filter(|node| seen.insert(node.as_str()))
            .cloned()
            .collect()
    }
}

/// Run both walks, cut their last frontiers to the meeting region, and
/// trim each chain.
pub fn select<S: AsRef<str>>(
    network: &Network,
    downstream_seeds: &[S],
    upstream_seeds: &[S],
    bounds: PathBounds,
) -> Selection {
    let downstream: Frontier = downstream_seeds.iter().map(|seed| seed.as_ref()).collect();
    let upstream: Frontier = upstream_seeds.iter().map(|seed| seed.as_ref()).collect();

    let mut downstream_walk = expand(
        network,
        downstream.iter().map(String::as_str),
        bounds.max_upstream_path_length,
        Direction::Backward,
    );
    let mut upstream_walk = expand(
        network,
        upstream.iter().map(String::as_str),
        bounds.max_downstream_path_length,
        Direction::Forward,
    );
    tracing::debug!(
        "Expanded walks: backward {:?} over {} hops, forward {:?} over {} hops",
        downstream_walk.sizes(),
        downstream_walk.bound(),
        upstream_walk.sizes(),
        upstream_walk.bound()
    );

    let common: HashSet<NodeId> = downstream_walk
        .last()
        .iter()
        .filter(|node| upstream_walk.last().contains(node.as_str()))
        .cloned()
        .collect();
    tracing::debug!("{} common nodes in the last frontiers", common.len());

    downstream_walk
        .last_mut()
        .retain(|node| common.contains(node) || upstream.contains(node));
    upstream_walk
        .last_mut()
        .retain(|node| common.contains(node) || downstream.contains(node));

    trim_chain(network, &mut downstream_walk, &upstream);
    trim_chain(network, &mut upstream_walk, &downstream);
    tracing::debug!(
        "Trimmed walks: backward {:?}, forward {:?}",
        downstream_walk.sizes(),
        upstream_walk.sizes()
    );

    Selection {
        downstream_walk,
        upstream_walk,
    }
}

/// Nodes of the in-between subnetwork. May be empty.
pub fn select_nodes<S: AsRef<str>>(
    network: &Network,
    downstream_seeds: &[S],
    upstream_seeds: &[S],
    bounds: PathBounds,
) -> Vec<NodeId> {
    select(network, downstream_seeds, upstream_seeds, bounds).nodes()
}

/// Walk hops `bound..=1`, keeping at each hop only the nodes one step
/// against the walk's direction from the previous hop or from `anchors`.
///
/// Hops go deepest first, so each is checked against the untrimmed hop
/// before it. Hops past the stored prefix of the walk repeat stored ones
/// and need no separate pass.
fn trim_chain(network: &Network, walk: &mut FrontierSequence, anchors: &Frontier) {
    let link_direction = walk.direction().reverse();
    let hops: Vec<usize> = walk.materialized_hops().filter(|&hop| hop > 0).collect();

    for hop in hops.into_iter().rev() {
        let reachable: HashSet<&str> = walk[hop - 1]
            .iter()
            .chain(anchors.iter())
            .flat_map(|node| network.neighbors(node, link_direction))
            .map(String::as_str)
            .collect();

        if let Some(frontier) = walk.get_mut(hop) {
            frontier.retain(|node| reachable.contains(node));
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
