//! Structured logging and run metrics.
//!
//! - [`init_logging`]: One-time structured logging setup with `RUST_LOG` support
//! - [`RunMetrics`]: Counts and timing collected over one extraction run

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "inbetween_net=info";

/// Filter used when verbose output is requested and `RUST_LOG` is unset.
pub const VERBOSE_LOG_FILTER: &str = "inbetween_net=debug";

/// Initialize structured logging with `RUST_LOG` environment variable support.
///
/// Falls back to [`DEFAULT_LOG_FILTER`] (or [`VERBOSE_LOG_FILTER`] when
/// `verbose` is set). Logs go to stderr so stdout stays free for the run
/// summary. Subsequent calls are ignored.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // try_init so double-init in tests doesn't panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Counts and timing for one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub edges_loaded: usize,
    pub nodes_loaded: usize,
    pub downstream_seeds: usize,
    pub upstream_seeds: usize,
    pub selected_nodes: usize,
    pub selected_edges: usize,
    pub duration_ms: Option<u64>,
}

impl RunMetrics {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "edges_loaded": self.edges_loaded,
            "nodes_loaded": self.nodes_loaded,
            "downstream_seeds": self.downstream_seeds,
            "upstream_seeds": self.upstream_seeds,
            "selected_nodes": self.selected_nodes,
            "selected_edges": self.selected_edges,
            "duration_ms": self.duration_ms,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
