//! Graph layer: adjacency index, bounded walks, subnetwork selection, and
//! edge filtering.

pub mod filter;
pub mod format;
pub mod frontier;
pub mod network;
pub mod selector;

pub use filter::filter_edges;
pub use frontier::{expand, Frontier, FrontierSequence};
pub use network::Network;
pub use selector::{select, select_nodes, PathBounds, Selection};
