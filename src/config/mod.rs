//! Run configuration and parameters files.

pub mod schema;

use std::path::Path;

pub use schema::{default_output_path, Parameters, ParametersFormat, RunConfig};

use crate::error::{InBetweenError, Result};

impl RunConfig {
    /// Load a run configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| InBetweenError::Read {
            path: path.to_path_buf(),
            role: "run configuration",
            source,
        })?;
        let config: RunConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}
