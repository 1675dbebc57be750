//! Mock service configuration.
//!
//! Configuration is read from YAML, JSON or JSONC files:
//!
//! ```yaml
//! namespace: /api
//! latency_ms: 150
//! seeds: fixtures/*.yaml
//! ```

pub mod error;
pub mod parser;

use crate::store::seed::seed_employees;
use crate::types::employee::Employee;
use error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_NAMESPACE: &str = "/api";

/// Mock service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// Path prefix routes are mounted under
    pub namespace: String,
    /// Simulated response delay in milliseconds
    pub latency_ms: u64,
    /// Glob of employee fixture files replacing the built-in seed rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeds: Option<String>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            latency_ms: 0,
            seeds: None,
        }
    }
}

impl MockConfig {
    /// Load configuration from a YAML/JSON/JSONC file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        parser::read_config(path)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Resolve the initial store contents
    pub fn seed_rows(&self) -> Result<Vec<Employee>, ConfigError> {
        match &self.seeds {
            Some(pattern) => parser::load_employees(pattern),
            None => Ok(seed_employees()),
        }
    }
}
