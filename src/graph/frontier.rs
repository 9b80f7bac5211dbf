//! Bounded frontier expansion.
//!
//! A walk from a seed set produces one frontier per hop: index 0 is the
//! seed set, index `i` holds the nodes reached after exactly `i` hops.
//! There is no visited set: each step is recomputed from the previous one
//! only, so a node may reappear at several depths when the graph has
//! cycles.

use std::collections::{HashMap, HashSet};
use std::ops::Index;

use crate::graph::network::Network;
use crate::types::{Direction, NodeId};

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// An insertion-ordered set of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    order: Vec<NodeId>,
    members: HashSet<NodeId>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node`, returning `false` if it was already present.
    pub fn insert(&mut self, node: impl Into<NodeId>) -> bool {
        let node = node.into();
        if self.members.contains(&node) {
            return false;
        }
        self.members.insert(node.clone());
        self.order.push(node);
        true
    }

    pub fn contains(&self, node: &str) -> bool {
        self.members.contains(node)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.order
    }

    /// Drop every node for which `keep` returns `false`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        let members = &mut self.members;
        self.order.retain(|node| {
            let kept = keep(node.as_str());
            if !kept {
                members.remove(node);
            }
            kept
        });
    }
}

impl<S: Into<NodeId>> FromIterator<S> for Frontier {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut frontier = Frontier::new();
        for node in iter {
            frontier.insert(node);
        }
        frontier
    }
}

impl<'a> IntoIterator for &'a Frontier {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

// ---------------------------------------------------------------------------
// FrontierSequence
// ---------------------------------------------------------------------------

/// The frontiers of one bounded walk, indexed by hop count `0..=bound`.
///
/// Each frontier depends only on the one before it, so the sequence turns
/// periodic as soon as a frontier repeats an earlier one (a dead walk
/// repeats its empty frontier). Only the hops up to that first repeat are
/// stored, plus the final hop `bound` when it lies past them. Any other hop
/// reads its periodic representative, so [`FrontierSequence::len`] and
/// indexing stay logical for arbitrarily large bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierSequence {
    direction: Direction,
    bound: usize,
    steps: Vec<Frontier>,
    /// Hop that the last stored frontier repeats, if a repeat was found.
    cycle_start: Option<usize>,
    /// Hop `bound`, when it lies past the stored prefix.
    tail: Option<Frontier>,
}

impl FrontierSequence {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Maximum hop count of this walk.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Number of logical frontiers (`bound + 1`).
    pub fn len(&self) -> usize {
        self.bound.saturating_add(1)
    }

    /// True when no frontier holds any node.
    pub fn is_empty(&self) -> bool {
        self.iter().all(Frontier::is_empty)
    }

    pub fn last(&self) -> &Frontier {
        &self[self.bound]
    }

    pub fn last_mut(&mut self) -> &mut Frontier {
        match self.tail {
            Some(ref mut tail) => tail,
            None => {
                let last = self.steps.len() - 1;
                &mut self.steps[last]
            }
        }
    }

    /// Hops held as distinct frontiers, ascending: the stored prefix, then
    /// `bound` if it lies past the prefix.
    pub fn materialized_hops(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.steps.len()).chain(self.tail.as_ref().map(|_| self.bound))
    }

    /// Mutable access to a materialized hop.
    pub fn get_mut(&mut self, hop: usize) -> Option<&mut Frontier> {
        if hop == self.bound && self.tail.is_some() {
            return self.tail.as_mut();
        }
        self.steps.get_mut(hop)
    }

    /// Materialized frontiers in hop order.
    pub fn iter(&self) -> impl Iterator<Item = &Frontier> {
        self.steps.iter().chain(self.tail.iter())
    }

    /// Every node of every materialized frontier, hop 0 first, duplicates
    /// included.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.iter().flat_map(|frontier| frontier.iter())
    }

    /// Sizes of the materialized frontiers.
    pub fn sizes(&self) -> Vec<usize> {
        self.iter().map(Frontier::len).collect()
    }

    /// Stored hop holding the untrimmed contents of logical `hop`.
    fn representative(&self, hop: usize) -> usize {
        let stored = self.steps.len();
        match self.cycle_start {
            Some(start) if hop >= stored => {
                let period = stored - 1 - start;
                start + (hop - start) % period
            }
            _ => hop,
        }
    }
}

impl Index<usize> for FrontierSequence {
    type Output = Frontier;

    fn index(&self, hop: usize) -> &Frontier {
        assert!(hop <= self.bound, "hop {hop} past bound {}", self.bound);
        match &self.tail {
            Some(tail) if hop == self.bound => tail,
            _ => &self.steps[self.representative(hop)],
        }
    }
}

// ---------------------------------------------------------------------------
// Expansion
// ---------------------------------------------------------------------------

/// Walk `bound` hops from `seeds` in `direction`.
///
/// `Forward` steps to successors, `Backward` to predecessors. Once a step
/// comes up empty every later step is empty too. Work stops at the first
/// frontier that repeats an earlier one, so the cost does not grow with
/// `bound` past that point.
pub fn expand<I, S>(network: &Network, seeds: I, bound: usize, direction: Direction) -> FrontierSequence
where
    I: IntoIterator<Item = S>,
    S: Into<NodeId>,
{
    let seeds: Frontier = seeds.into_iter().collect();
    let mut seen: HashMap<Vec<NodeId>, usize> = HashMap::new();
    seen.insert(seeds.as_slice().to_vec(), 0);
    let mut steps = vec![seeds];
    let mut cycle_start = None;

    while steps.len() <= bound {
        let hop = steps.len();
        let next = step(network, &steps[hop - 1], direction);
        let repeats = seen.get(next.as_slice()).copied();
        if repeats.is_none() {
            seen.insert(next.as_slice().to_vec(), hop);
        }
        steps.push(next);
        if repeats.is_some() {
            cycle_start = repeats;
            break;
        }
    }

    let mut sequence = FrontierSequence {
        direction,
        bound,
        steps,
        cycle_start,
        tail: None,
    };
    if bound >= sequence.steps.len() {
        tracing::debug!(
            "{direction} walk repeats at hop {}, bound {bound}",
            sequence.steps.len() - 1
        );
        sequence.tail = Some(sequence[bound].clone());
    }
    sequence
}

/// All one-hop neighbours of `from` in `direction`.
pub fn step(network: &Network, from: &Frontier, direction: Direction) -> Frontier {
    from.iter()
        .flat_map(|node| network.neighbors(node, direction))
        .map(String::as_str)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
