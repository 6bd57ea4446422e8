//! Error types for the documentation tree compiler.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem-level errors raised while walking the scan root
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Root directory not found: {path:?}: {source}")]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Root is not a directory: {0:?}")]
    NotADirectory(PathBuf),
}

impl TreeError {
    /// True for the single user-visible failure class: the scan root is
    /// missing or is not a directory.
    pub fn is_root_not_found(&self) -> bool {
        matches!(
            self,
            TreeError::RootNotFound { .. } | TreeError::NotADirectory(_)
        )
    }
}

/// Errors surfaced by the compile facade and the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to write output: {0}")]
    OutputError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
