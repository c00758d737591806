//! Error types for the curation engine.
//!
//! Curation itself never fails: sparse or odd historical data is absorbed by
//! defaults and silent exclusion. Only loading configuration can go wrong.

use std::path::PathBuf;

/// Result type for curation configuration operations.
pub type Result<T> = std::result::Result<T, CurationError>;

#[derive(Debug, thiserror::Error)]
pub enum CurationError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape.
    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    /// Config parsed but holds values the scorers cannot use.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
