//! Error types for the I/O and configuration layers.
//!
//! The diff engine itself is total and never returns these.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur around a comparison.
#[derive(Debug, Error)]
pub enum DiffError {
    /// Failed to read an input file
    #[error("failed to read input '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a config file
    #[error("failed to read config '{path}': {source}")]
    ReadConfig {
        /// Path of the config file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A theme color was not `#rrggbb`
    #[error("invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    /// Failed to write rendered output
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl DiffError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a read config error.
    pub fn read_config(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadConfig {
            path: path.into(),
            source,
        }
    }
}
