//! Error types for in-between network extraction.
//!
//! The selection core never fails; every variant here belongs to the
//! orchestration layer (argument checks, file loading, output writing).

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, InBetweenError>;

/// Errors surfaced by loading, validating, and writing a run.
///
/// Each one is terminal: the run stops and nothing is retried.
#[derive(Debug, Error)]
pub enum InBetweenError {
    #[error("No file containing the {role} has been provided.")]
    MissingArgument { role: &'static str },

    #[error(
        "The file \"{}\" (containing the {role}) could not be found in the current directory \"{}\".",
        path.display(),
        current_dir.display()
    )]
    FileNotFound {
        path: PathBuf,
        role: &'static str,
        current_dir: PathBuf,
    },

    #[error(
        "The error \"{source}\" occurred while reading the file \"{}\" (containing the {role}).",
        path.display()
    )]
    Read {
        path: PathBuf,
        role: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "The error \"{source}\" occurred while writing to the output file \"{}\".",
        path.display()
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "The error \"{message}\" occurred while parsing the file \"{}\" (containing the parameters).",
        path.display()
    )]
    Parameters { path: PathBuf, message: String },

    #[error(
        "The parameters read from the file \"{}\" are not valid. Please check again the file and make sure that it is in the required format.",
        path.display()
    )]
    InvalidParameters { path: PathBuf },

    #[error(
        "No edges could be read from the file \"{}\". Please check again the file and make sure that it is in the required format.",
        path.display()
    )]
    NoEdges { path: PathBuf },

    #[error(
        "No {role} could be read from the file \"{}\", or none of them could be found in the network. Please check again the file and make sure that it is in the required format.",
        path.display()
    )]
    NoSeedNodes { role: &'static str, path: PathBuf },

    #[error("No in-between network could be formed: the selected {what} list is empty.")]
    EmptyNetwork { what: &'static str },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
