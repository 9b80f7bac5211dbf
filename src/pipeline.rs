//! End-to-end extraction run: check inputs, load, select, filter, write.
//!
//! Every failure is terminal and reported once. The selection core itself
//! never fails; an empty node or edge list is surfaced here as
//! [`InBetweenError::EmptyNetwork`].

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::config::RunConfig;
use crate::error::{InBetweenError, Result};
use crate::graph::format::{edges_to_text, nodes_to_text};
use crate::graph::{filter_edges, select_nodes, Network, PathBounds};
use crate::loader::{load_edges, load_parameters, load_seed_nodes, InputKind};
use crate::observability::RunMetrics;
use crate::types::{Edge, NodeId};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// File the selected edges were written to.
    pub output: PathBuf,
    /// File the selected nodes were written to, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_output: Option<PathBuf>,
    pub bounds: PathBounds,
    pub metrics: RunMetrics,
    #[serde(skip)]
    pub nodes: Vec<NodeId>,
    #[serde(skip)]
    pub edges: Vec<Edge>,
}

/// Input paths after the presence checks.
struct InputPaths<'a> {
    main_network: &'a Path,
    downstream_nodes: &'a Path,
    upstream_nodes: &'a Path,
    parameters: &'a Path,
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Run an extraction with the current local time for output naming.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    run_at(config, Local::now())
}

/// Run an extraction; `now` stamps the default output file name.
pub fn run_at(config: &RunConfig, now: DateTime<Local>) -> Result<RunReport> {
    let started = Instant::now();
    let paths = check_inputs(config)?;

    let edges = load_edges(paths.main_network)?;
    let downstream_raw = load_seed_nodes(paths.downstream_nodes, InputKind::DownstreamNodes)?;
    let upstream_raw = load_seed_nodes(paths.upstream_nodes, InputKind::UpstreamNodes)?;
    let parameters = load_parameters(paths.parameters)?;

    let output = config.output_path(paths.main_network, now);
    write_text(&output, "")?;

    if edges.is_empty() {
        return Err(InBetweenError::NoEdges {
            path: paths.main_network.to_path_buf(),
        });
    }
    let network = Network::from_edges(edges);

    let downstream = network.restrict_seeds(&downstream_raw);
    if downstream.is_empty() {
        return Err(InBetweenError::NoSeedNodes {
            role: InputKind::DownstreamNodes.role(),
            path: paths.downstream_nodes.to_path_buf(),
        });
    }
    let upstream = network.restrict_seeds(&upstream_raw);
    if upstream.is_empty() {
        return Err(InBetweenError::NoSeedNodes {
            role: InputKind::UpstreamNodes.role(),
            path: paths.upstream_nodes.to_path_buf(),
        });
    }

    let invalid = || InBetweenError::InvalidParameters {
        path: paths.parameters.to_path_buf(),
    };
    if !parameters.is_valid() {
        return Err(invalid());
    }
    let bounds = parameters.to_bounds().ok_or_else(invalid)?;

    tracing::info!(
        "Loaded {} edges and {} nodes from \"{}\"",
        network.edge_count(),
        network.node_count(),
        paths.main_network.display()
    );
    tracing::info!(
        "Loaded {} downstream seed nodes from \"{}\"",
        downstream.len(),
        paths.downstream_nodes.display()
    );
    tracing::info!(
        "Loaded {} upstream seed nodes from \"{}\"",
        upstream.len(),
        paths.upstream_nodes.display()
    );
    tracing::info!(
        "Parameters from \"{}\": MaximumUpstreamPathLength = {}, MaximumDownstreamPathLength = {}",
        paths.parameters.display(),
        bounds.max_upstream_path_length,
        bounds.max_downstream_path_length
    );

    let nodes = select_nodes(&network, &downstream, &upstream, bounds);
    if nodes.is_empty() {
        return Err(InBetweenError::EmptyNetwork { what: "node" });
    }
    tracing::info!("Selected {} nodes for the new network", nodes.len());

    let selected_edges = filter_edges(network.edges(), &nodes);
    if selected_edges.is_empty() {
        return Err(InBetweenError::EmptyNetwork { what: "edge" });
    }
    tracing::info!("Selected {} edges for the new network", selected_edges.len());

    let text = edges_to_text(&selected_edges);
    if let Err(err) = write_text(&output, &text) {
        tracing::error!("{err} The results will be displayed below instead.");
        tracing::info!("\n{text}");
        return Err(err);
    }
    tracing::info!("The results have been written to \"{}\"", output.display());

    let nodes_output = config.nodes_output.clone().filter(|p| !p.as_os_str().is_empty());
    if let Some(path) = &nodes_output {
        write_text(path, &nodes_to_text(&nodes))?;
        tracing::info!("The node list has been written to \"{}\"", path.display());
    }

    let metrics = RunMetrics {
        edges_loaded: network.edge_count(),
        nodes_loaded: network.node_count(),
        downstream_seeds: downstream.len(),
        upstream_seeds: upstream.len(),
        selected_nodes: nodes.len(),
        selected_edges: selected_edges.len(),
        duration_ms: Some(started.elapsed().as_millis() as u64),
    };
    tracing::debug!("Run metrics: {}", metrics.to_json());

    Ok(RunReport {
        output,
        nodes_output,
        bounds,
        metrics,
        nodes,
        edges: selected_edges,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// All four inputs must be configured, then all four must exist.
fn check_inputs(config: &RunConfig) -> Result<InputPaths<'_>> {
    let paths = InputPaths {
        main_network: require(&config.main_network, InputKind::MainNetwork)?,
        downstream_nodes: require(&config.downstream_nodes, InputKind::DownstreamNodes)?,
        upstream_nodes: require(&config.upstream_nodes, InputKind::UpstreamNodes)?,
        parameters: require(&config.parameters, InputKind::Parameters)?,
    };

    for (path, kind) in [
        (paths.main_network, InputKind::MainNetwork),
        (paths.downstream_nodes, InputKind::DownstreamNodes),
        (paths.upstream_nodes, InputKind::UpstreamNodes),
        (paths.parameters, InputKind::Parameters),
    ] {
        if !path.is_file() {
            return Err(InBetweenError::FileNotFound {
                path: path.to_path_buf(),
                role: kind.role(),
                current_dir: std::env::current_dir().unwrap_or_default(),
            });
        }
    }

    Ok(paths)
}

fn require(path: &Option<PathBuf>, kind: InputKind) -> Result<&Path> {
    match path {
        Some(p) if !p.as_os_str().is_empty() => Ok(p.as_path()),
        _ => Err(InBetweenError::MissingArgument { role: kind.role() }),
    }
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| InBetweenError::Write {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
