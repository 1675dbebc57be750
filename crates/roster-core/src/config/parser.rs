//! Configuration file parsing (YAML/JSON/JSONC) and fixture loading.

use crate::config::error::ConfigError;
use crate::types::employee::Employee;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;

/// Config file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    Yaml,
    Json,
    Jsonc,
    Unknown,
}

/// Get config file type from path extension
pub fn get_file_type(path: &str) -> ConfigFileType {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => ConfigFileType::Yaml,
        "json" => ConfigFileType::Json,
        "jsonc" => ConfigFileType::Jsonc,
        _ => ConfigFileType::Unknown,
    }
}

/// Strip `//` and `/* */` comments from JSONC content.
///
/// Comment markers inside string literals are kept. A line comment keeps
/// its terminating newline so line numbers in parse errors stay correct.
pub fn strip_json_comments(content: &str) -> String {
    enum State {
        Code,
        Str { escaped: bool },
        LineComment,
        BlockComment,
    }

    let mut result = String::with_capacity(content.len());
    let mut state = State::Code;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match (c, chars.peek()) {
                ('/', Some('/')) => {
                    chars.next();
                    state = State::LineComment;
                }
                ('/', Some('*')) => {
                    chars.next();
                    state = State::BlockComment;
                }
                ('"', _) => {
                    result.push(c);
                    state = State::Str { escaped: false };
                }
                _ => result.push(c),
            },
            State::Str { escaped } => {
                result.push(c);
                state = match (escaped, c) {
                    (false, '"') => State::Code,
                    (false, '\\') => State::Str { escaped: true },
                    _ => State::Str { escaped: false },
                };
            }
            State::LineComment => {
                if c == '\n' || c == '\r' {
                    result.push(c);
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Code;
                }
            }
        }
    }

    result
}

/// Parse JSON content
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_json::from_str(content).map_err(ConfigError::from)
}

/// Parse JSONC content (JSON with comments)
pub fn parse_jsonc<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    parse_json(&strip_json_comments(content))
}

/// Parse YAML content
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(content).map_err(ConfigError::from)
}

/// Parse config content based on file type
pub fn parse_config<T: DeserializeOwned>(content: &str, path: &str) -> Result<T, ConfigError> {
    match get_file_type(path) {
        ConfigFileType::Yaml => parse_yaml(content),
        ConfigFileType::Json => parse_json(content),
        ConfigFileType::Jsonc => parse_jsonc(content),
        ConfigFileType::Unknown => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

/// Read and parse a config file, picking the format from its extension
pub fn read_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let display = path.to_string_lossy();
    // Reject unknown extensions before touching the filesystem
    if get_file_type(&display) == ConfigFileType::Unknown {
        return Err(ConfigError::UnknownFileType(display.into_owned()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, &display)
}

/// Load employee fixtures from every file matching a glob pattern.
///
/// Files are read in sorted path order and their lists concatenated.
/// Fails when nothing matches or an id appears twice.
pub fn load_employees(pattern: &str) -> Result<Vec<Employee>, ConfigError> {
    let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
    if paths.is_empty() {
        return Err(ConfigError::NoMatch(pattern.to_string()));
    }
    paths.sort();

    let mut employees = Vec::new();
    let mut seen = HashSet::new();
    for path in paths {
        let batch: Vec<Employee> = read_config(&path)?;
        tracing::debug!(path = %path.display(), count = batch.len(), "loaded employee fixtures");
        for employee in batch {
            if !seen.insert(employee.id.clone()) {
                return Err(ConfigError::DuplicateId(employee.id));
            }
            employees.push(employee);
        }
    }

    Ok(employees)
}
