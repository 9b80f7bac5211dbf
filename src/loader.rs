//! Input file parsing: edge lists, seed node lists, and parameters.
//!
//! Edge lines are `source;target`. A line is dropped unless it has at least
//! two `;`-separated fields and the first two are non-empty; fields past the
//! second are ignored. Seed files hold one node per line, blank lines
//! dropped. Both collapse duplicates, keeping the first occurrence.

use std::collections::HashSet;
use std::path::Path;

use crate::config::{Parameters, ParametersFormat};
use crate::error::{InBetweenError, Result};
use crate::types::{Edge, NodeId};

// ---------------------------------------------------------------------------
// Input kinds
// ---------------------------------------------------------------------------

/// The four input files of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    MainNetwork,
    DownstreamNodes,
    UpstreamNodes,
    Parameters,
}

impl InputKind {
    /// What the file contains, as used in messages.
    pub fn role(&self) -> &'static str {
        match self {
            Self::MainNetwork => "main network edges",
            Self::DownstreamNodes => "downstream seed nodes",
            Self::UpstreamNodes => "upstream seed nodes",
            Self::Parameters => "parameters",
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse an edge list.
pub fn parse_edges(text: &str) -> Vec<Edge> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut edges = Vec::new();

    for line in text.lines() {
        let mut fields = line.split(';');
        let (Some(source), Some(target)) = (fields.next(), fields.next()) else {
            continue;
        };
        if source.is_empty() || target.is_empty() {
            continue;
        }
        if seen.insert((source, target)) {
            edges.push(Edge::new(source, target));
        }
    }

    edges
}

/// Parse a seed node list.
pub fn parse_seed_nodes(text: &str) -> Vec<NodeId> {
    let mut seen: HashSet<&str> = HashSet::new();
    text.lines()
        .filter(|line| !line.is_empty() && seen.insert(*line))
        .map(str::to_string)
        .collect()
}

/// Parse a parameters document in the given format.
pub fn parse_parameters(
    text: &str,
    format: ParametersFormat,
) -> std::result::Result<Parameters, String> {
    match format {
        ParametersFormat::Json => Parameters::from_json(text).map_err(|e| e.to_string()),
        ParametersFormat::Yaml => Parameters::from_yaml(text).map_err(|e| e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

fn read_input(path: &Path, kind: InputKind) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| InBetweenError::Read {
        path: path.to_path_buf(),
        role: kind.role(),
        source,
    })
}

pub fn load_edges(path: &Path) -> Result<Vec<Edge>> {
    let text = read_input(path, InputKind::MainNetwork)?;
    let edges = parse_edges(&text);
    tracing::debug!("Parsed {} edges from {}", edges.len(), path.display());
    Ok(edges)
}

/// `kind` must be [`InputKind::DownstreamNodes`] or [`InputKind::UpstreamNodes`].
pub fn load_seed_nodes(path: &Path, kind: InputKind) -> Result<Vec<NodeId>> {
    let text = read_input(path, kind)?;
    Ok(parse_seed_nodes(&text))
}

pub fn load_parameters(path: &Path) -> Result<Parameters> {
    let text = read_input(path, InputKind::Parameters)?;
    parse_parameters(&text, ParametersFormat::from_path(path)).map_err(|message| {
        InBetweenError::Parameters {
            path: path.to_path_buf(),
            message,
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
