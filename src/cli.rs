//! Command-line interface.
//!
//! Every input path can come from a flag, an `INBETWEEN_*` environment
//! variable, or a YAML run configuration passed with `--config`. Flags and
//! environment variables override the configuration file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::RunConfig;
use crate::error::Result;

/// Extract the in-between subnetwork linking upstream and downstream seed
/// nodes of a directed network.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "inbetween-net", version)]
pub struct Cli {
    /// Edge list of the main network, one `source;target` per line
    #[arg(short = 'n', long, env = "INBETWEEN_MAIN_NETWORK", value_name = "FILE")]
    pub main_network: Option<PathBuf>,

    /// Downstream seed nodes, one per line
    #[arg(short, long, env = "INBETWEEN_DOWNSTREAM_NODES", value_name = "FILE")]
    pub downstream_nodes: Option<PathBuf>,

    /// Upstream seed nodes, one per line
    #[arg(short, long, env = "INBETWEEN_UPSTREAM_NODES", value_name = "FILE")]
    pub upstream_nodes: Option<PathBuf>,

    /// Parameters file (JSON, or YAML by `.yaml`/`.yml` extension)
    #[arg(short, long, env = "INBETWEEN_PARAMETERS", value_name = "FILE")]
    pub parameters: Option<PathBuf>,

    /// Output edge list [default: <network>_Output_<timestamp>.txt]
    #[arg(short, long, env = "INBETWEEN_OUTPUT", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the selected nodes, one per line
    #[arg(long, value_name = "FILE")]
    pub nodes_output: Option<PathBuf>,

    /// YAML run configuration providing any of the paths above
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a JSON run summary to stdout
    #[arg(long)]
    pub summary: bool,

    /// Debug-level logging (ignored when RUST_LOG is set)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Paths given on the command line or through the environment.
    pub fn overlay(&self) -> RunConfig {
        RunConfig {
            main_network: self.main_network.clone(),
            downstream_nodes: self.downstream_nodes.clone(),
            upstream_nodes: self.upstream_nodes.clone(),
            parameters: self.parameters.clone(),
            output: self.output.clone(),
            nodes_output: self.nodes_output.clone(),
        }
    }

    /// The effective run configuration: `--config` file (if any) with the
    /// command-line overlay applied on top.
    pub fn run_config(&self) -> Result<RunConfig> {
        let base = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        Ok(base.merge(self.overlay()))
    }
}
