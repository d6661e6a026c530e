//! Structured error types for staffdir-core.
//!
//! The CLI wraps these in `anyhow`; library consumers match on variants.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for staffdir-core operations
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape
    #[error("Invalid config file {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Configuration value rejected
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// Domain value rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type alias for staffdir-core operations
pub type Result<T> = std::result::Result<T, DirectoryError>;

impl DirectoryError {
    /// Create a TOML parse error for a file
    pub fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
