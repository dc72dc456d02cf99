//! Error types shared by the simulation pipeline

use thiserror::Error;

/// Errors that can occur while building or analysing a similarity graph
///
/// Degenerate vectors are never errors: zero norms are absorbed during
/// normalization and similarity. Everything here is either a caller
/// contract violation or a configuration problem.
#[derive(Error, Debug)]
pub enum PercolationError {
    #[error("No embedding for label '{0}'")]
    MissingEmbedding(String),

    #[error("Dimension mismatch for label '{label}': expected {expected}, got {got}")]
    DimensionMismatch {
        label: String,
        expected: usize,
        got: usize,
    },

    #[error("Label '{0}' appears more than once")]
    DuplicateLabel(String),

    #[error("Edge endpoint '{0}' is not a node of the graph")]
    UnknownEdgeEndpoint(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for PercolationError {
    fn from(e: serde_json::Error) -> Self {
        PercolationError::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for PercolationError {
    fn from(e: serde_yaml::Error) -> Self {
        PercolationError::Parse(e.to_string())
    }
}

pub type PercolationResult<T> = Result<T, PercolationError>;
