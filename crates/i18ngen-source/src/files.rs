//! Glob expansion and document parsing.

use crate::error::{SourceError, SourceResult};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File formats a source may be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl SourceFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Expand `pattern` into the matching source files, sorted by path.
///
/// Directories and files in unsupported formats are skipped with a warning.
pub fn expand_glob(what: &'static str, pattern: &str) -> SourceResult<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|source| SourceError::InvalidPattern {
        what,
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        if SourceFormat::from_path(&path).is_none() {
            warn!(path = %path.display(), "Skipping {what} file with unsupported extension");
            continue;
        }
        files.push(path);
    }

    files.sort();
    debug!(pattern, count = files.len(), "Expanded {what} pattern");
    Ok(files)
}

/// Read and parse a source file into its top-level mapping.
///
/// JSON is decoded straight into YAML values so both formats share one
/// order-preserving representation. An empty document is an empty mapping.
pub fn read_document(path: &Path) -> SourceResult<Mapping> {
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = match SourceFormat::from_path(path) {
        Some(SourceFormat::Json) => {
            serde_json::from_str(&content).map_err(|source| SourceError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => serde_yaml::from_str(&content).map_err(|source| SourceError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
    };

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => {
            debug!(path = %path.display(), "Empty source document");
            Ok(Mapping::new())
        }
        other => Err(SourceError::InvalidStructure {
            path: path.to_path_buf(),
            message: format!("top level must be a mapping, found {}", describe(&other)),
        }),
    }
}

/// Human-readable name of a value's shape, for error messages
pub const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a map",
        Value::Tagged(_) => "a tagged value",
    }
}

/// A mapping key as a string; numeric keys (`404:`) are stringified
pub fn key_string(key: &Value, path: &Path, context: &str) -> SourceResult<String> {
    match key {
        Value::String(text) => Ok(text.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(SourceError::InvalidStructure {
            path: path.to_path_buf(),
            message: format!("{context} keys must be strings, found {}", describe(other)),
        }),
    }
}
