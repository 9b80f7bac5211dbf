//! Property-based tests for in-between selection using proptest.
//!
//! These tests verify invariants that must hold for all possible inputs,
//! finding edge cases that unit tests might miss.

use std::collections::HashSet;

use proptest::prelude::*;

use inbetween_net::graph::format::edges_to_text;
use inbetween_net::graph::{expand, filter_edges, select_nodes, Network, PathBounds};
use inbetween_net::loader::parse_edges;
use inbetween_net::types::{Direction, Edge, NodeId};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Small node alphabet so random graphs are dense enough to have paths.
fn arb_node() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("A".to_string()),
        Just("B".to_string()),
        Just("C".to_string()),
        Just("D".to_string()),
        Just("E".to_string()),
        Just("F".to_string()),
        Just("G".to_string()),
        "[a-z]{1,3}",
    ]
}

fn arb_edges() -> impl Strategy<Value = Vec<Edge>> {
    prop::collection::vec((arb_node(), arb_node()), 1..40)
        .prop_map(|pairs| pairs.into_iter().map(|(s, t)| Edge::new(s, t)).collect())
}

fn arb_seeds() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_node(), 1..4)
}

fn arb_bounds() -> impl Strategy<Value = PathBounds> {
    (0usize..7, 0usize..7).prop_map(|(up, down)| PathBounds::new(up, down))
}

/// A network with seeds restricted to its node set.
fn arb_case() -> impl Strategy<Value = (Network, Vec<NodeId>, Vec<NodeId>, PathBounds)> {
    (arb_edges(), arb_seeds(), arb_seeds(), arb_bounds()).prop_map(|(edges, down, up, bounds)| {
        let network = Network::from_edges(edges);
        let down = network.restrict_seeds(&down);
        let up = network.restrict_seeds(&up);
        (network, down, up, bounds)
    })
}

// ---------------------------------------------------------------------------
// List-based reference selection
// ---------------------------------------------------------------------------

/// Nodes one hop from `from` along `edges`, first appearance order.
fn neighbours(edges: &[Edge], from: &[NodeId], forward: bool) -> Vec<NodeId> {
    let mut out: Vec<NodeId> = Vec::new();
    for node in from {
        for edge in edges {
            let (tail, head) = if forward {
                (&edge.source, &edge.target)
            } else {
                (&edge.target, &edge.source)
            };
            if tail == node && !out.contains(head) {
                out.push(head.clone());
            }
        }
    }
    out
}

fn walk(edges: &[Edge], seeds: &[NodeId], bound: usize, forward: bool) -> Vec<Vec<NodeId>> {
    let mut hops = vec![seeds.to_vec()];
    for i in 0..bound {
        let next = neighbours(edges, &hops[i], forward);
        hops.push(next);
    }
    hops
}

/// Trim `hops[bound..=1]`, keeping nodes one step against the walk from
/// the previous hop or from `anchors`.
fn trim(edges: &[Edge], hops: &mut [Vec<NodeId>], anchors: &[NodeId], forward: bool) {
    for i in (1..hops.len()).rev() {
        let mut from = hops[i - 1].clone();
        from.extend(anchors.iter().cloned());
        let allowed = neighbours(edges, &from, !forward);
        hops[i].retain(|node| allowed.contains(node));
    }
}

/// Every hop kept literally, no shortcuts.
fn reference_select(
    edges: &[Edge],
    down: &[NodeId],
    up: &[NodeId],
    bounds: PathBounds,
) -> HashSet<NodeId> {
    let mut backward = walk(edges, down, bounds.max_upstream_path_length, false);
    let mut forward = walk(edges, up, bounds.max_downstream_path_length, true);

    let back_last = backward.len() - 1;
    let fwd_last = forward.len() - 1;
    let common: Vec<NodeId> = backward[back_last]
        .iter()
        .filter(|node| forward[fwd_last].contains(node))
        .cloned()
        .collect();
    backward[back_last].retain(|node| common.contains(node) || up.contains(node));
    forward[fwd_last].retain(|node| common.contains(node) || down.contains(node));

    trim(edges, &mut backward, up, false);
    trim(edges, &mut forward, down, true);

    backward.into_iter().chain(forward).flatten().collect()
}

// ---------------------------------------------------------------------------
// Selection properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn selection_matches_list_reference((network, down, up, bounds) in arb_case()) {
        let expected = reference_select(network.edges(), &down, &up, bounds);
        let actual: HashSet<NodeId> = select_nodes(&network, &down, &up, bounds).into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn selection_is_deterministic((network, down, up, bounds) in arb_case()) {
        let first = select_nodes(&network, &down, &up, bounds);
        let second = select_nodes(&network, &down, &up, bounds);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn selection_has_no_duplicates((network, down, up, bounds) in arb_case()) {
        let nodes = select_nodes(&network, &down, &up, bounds);
        let unique: HashSet<&NodeId> = nodes.iter().collect();
        prop_assert_eq!(unique.len(), nodes.len());
    }

    #[test]
    fn selection_stays_within_untrimmed_walks((network, down, up, bounds) in arb_case()) {
        let backward = expand(&network, down.iter().cloned(), bounds.max_upstream_path_length, Direction::Backward);
        let forward = expand(&network, up.iter().cloned(), bounds.max_downstream_path_length, Direction::Forward);
        let reachable: HashSet<&NodeId> = backward.nodes().chain(forward.nodes()).collect();

        for node in select_nodes(&network, &down, &up, bounds) {
            prop_assert!(reachable.contains(&node), "{} outside both walks", node);
        }
    }

    #[test]
    fn seeds_survive_when_both_bounds_positive(
        (network, down, up, bounds) in arb_case(),
        extra_up in 1usize..4,
        extra_down in 1usize..4,
    ) {
        let bounds = PathBounds::new(
            bounds.max_upstream_path_length.max(extra_up),
            bounds.max_downstream_path_length.max(extra_down),
        );
        let nodes: HashSet<NodeId> = select_nodes(&network, &down, &up, bounds).into_iter().collect();
        for seed in down.iter().chain(up.iter()) {
            prop_assert!(nodes.contains(seed), "seed {} missing", seed);
        }
    }

    #[test]
    fn zero_bounds_with_disjoint_seeds_select_nothing((network, down, up, _bounds) in arb_case()) {
        let down_set: HashSet<&NodeId> = down.iter().collect();
        prop_assume!(up.iter().all(|node| !down_set.contains(node)));
        let nodes = select_nodes(&network, &down, &up, PathBounds::new(0, 0));
        prop_assert!(nodes.is_empty(), "got {:?}", nodes);
    }

    #[test]
    fn walk_length_is_bound_plus_one((network, down, _up, bounds) in arb_case()) {
        let walk = expand(&network, down.iter().cloned(), bounds.max_upstream_path_length, Direction::Backward);
        prop_assert_eq!(walk.len(), bounds.max_upstream_path_length + 1);
    }
}

// ---------------------------------------------------------------------------
// Edge filter and formatting properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn filtered_edges_are_an_ordered_subsequence(
        edges in arb_edges(),
        nodes in prop::collection::vec(arb_node(), 0..6),
    ) {
        let kept = filter_edges(&edges, &nodes);
        let allowed: HashSet<&str> = nodes.iter().map(String::as_str).collect();

        for edge in &kept {
            prop_assert!(allowed.contains(edge.source.as_str()));
            prop_assert!(allowed.contains(edge.target.as_str()));
        }

        let mut remaining = edges.iter();
        for edge in &kept {
            prop_assert!(remaining.any(|e| e == edge), "{} out of order", edge);
        }

        let expected = edges
            .iter()
            .filter(|e| allowed.contains(e.source.as_str()) && allowed.contains(e.target.as_str()))
            .count();
        prop_assert_eq!(kept.len(), expected);
    }

    #[test]
    fn edge_text_parses_back(edges in arb_edges()) {
        let network = Network::from_edges(edges);
        let text = edges_to_text(network.edges());
        prop_assert_eq!(parse_edges(&text), network.edges().to_vec());
    }
}
