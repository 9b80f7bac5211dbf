//! InBetweenNet: bounded in-between subnetwork extraction.
//!
//! Given a directed network and two seed node sets, selects the nodes lying
//! on short directed paths from the upstream seeds to the downstream seeds
//! and the edges among them.

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod observability;
pub mod pipeline;
pub mod types;
