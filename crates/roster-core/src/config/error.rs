//! Error types for configuration and fixture loading.

use crate::store::StoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Unknown file type
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),
    /// File could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Malformed glob pattern
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Glob entry could not be read
    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),
    /// Glob matched no files
    #[error("No fixture files match: {0}")]
    NoMatch(String),
    /// Fixtures declare the same employee id twice
    #[error("Duplicate employee id in fixtures: {0}")]
    DuplicateId(String),
    /// Fixture rows the store refuses to hold
    #[error("Invalid seed rows: {0}")]
    Seed(#[source] StoreError),
    /// Route pattern could not be compiled
    #[error("Invalid route pattern: {0}")]
    Route(#[from] regex::Error),
}
