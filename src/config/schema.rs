//! Configuration data structures for in-between network runs.
//!
//! Two documents are described here: the parameters file (hop bounds, JSON
//! or YAML) and the run configuration (input/output paths), which can come
//! from a YAML file, environment variables, and CLI flags.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::graph::PathBounds;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Hop bounds as written in a parameters file.
///
/// Keys are `MaximumUpstreamPathLength` / `MaximumDownstreamPathLength`;
/// snake_case aliases are accepted. Missing keys fall back to 2. Values are
/// signed so that negative input parses and is then rejected by
/// [`Parameters::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameters {
    #[serde(
        default = "default_max_upstream_path_length",
        alias = "max_upstream_path_length",
        alias = "maximum_upstream_path_length"
    )]
    pub maximum_upstream_path_length: i64,

    #[serde(
        default = "default_max_downstream_path_length",
        alias = "max_downstream_path_length",
        alias = "maximum_downstream_path_length"
    )]
    pub maximum_downstream_path_length: i64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            maximum_upstream_path_length: default_max_upstream_path_length(),
            maximum_downstream_path_length: default_max_downstream_path_length(),
        }
    }
}

impl Parameters {
    /// Both bounds are non-negative.
    pub fn is_valid(&self) -> bool {
        self.maximum_upstream_path_length >= 0 && self.maximum_downstream_path_length >= 0
    }

    /// Convert to core hop bounds, or `None` if either bound is negative.
    pub fn to_bounds(&self) -> Option<PathBounds> {
        let up = usize::try_from(self.maximum_upstream_path_length).ok()?;
        let down = usize::try_from(self.maximum_downstream_path_length).ok()?;
        Some(PathBounds::new(up, down))
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

// ---------------------------------------------------------------------------
// ParametersFormat
// ---------------------------------------------------------------------------

/// Serialization format of a parameters file, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParametersFormat {
    Json,
    Yaml,
}

impl ParametersFormat {
    /// `.yaml` / `.yml` (any case) are YAML; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

// ---------------------------------------------------------------------------
// RunConfig
// ---------------------------------------------------------------------------

/// Paths for one run. Every field is optional here; required ones are
/// checked when the run starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunConfig {
    /// Edge list of the main network, one `source;target` per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_network: Option<PathBuf>,

    /// Downstream seed nodes, one per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downstream_nodes: Option<PathBuf>,

    /// Upstream seed nodes, one per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_nodes: Option<PathBuf>,

    /// Parameters file (JSON or YAML).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<PathBuf>,

    /// Where the selected edges are written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Optional file for the selected node list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_output: Option<PathBuf>,
}

impl RunConfig {
    /// Overlay `other` on top of `self`: fields set in `other` win.
    pub fn merge(self, other: RunConfig) -> RunConfig {
        RunConfig {
            main_network: other.main_network.or(self.main_network),
            downstream_nodes: other.downstream_nodes.or(self.downstream_nodes),
            upstream_nodes: other.upstream_nodes.or(self.upstream_nodes),
            parameters: other.parameters.or(self.parameters),
            output: other.output.or(self.output),
            nodes_output: other.nodes_output.or(self.nodes_output),
        }
    }

    /// The configured output path, or the default derived from
    /// `main_network` and `now`.
    pub fn output_path(&self, main_network: &Path, now: DateTime<Local>) -> PathBuf {
        match &self.output {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => default_output_path(main_network, now),
        }
    }
}

/// `<dir>/<stem>_Output_<yyyyMMddHHmmss>.txt` next to the main network file.
pub fn default_output_path(main_network: &Path, now: DateTime<Local>) -> PathBuf {
    let stem = main_network
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{stem}_Output_{}.txt", now.format("%Y%m%d%H%M%S"));
    main_network.with_file_name(file_name)
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_max_upstream_path_length() -> i64 {
    2
}

fn default_max_downstream_path_length() -> i64 {
    2
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
