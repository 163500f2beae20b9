//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Main configuration structure for a generation run.
///
/// Every field has a default, so a partial file (or no file) is valid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locales to generate, primary (fallback) locale first.
    pub locales: Vec<String>,
    /// Whether source files use the compound (`id -> locale -> text`) layout.
    pub compound: bool,
    /// Glob matching message source files.
    pub messages: String,
    /// Glob matching placeholder source files.
    pub placeholders: String,
    /// Directory generated files are written to.
    pub output_dir: PathBuf,
    /// Name of the generated Rust module (file stem of the generated `.rs`).
    pub output_module: String,
    /// Code generation backend.
    pub backend: Backend,
    /// Placeholder names that carry a plural count (case-insensitive).
    pub plural_placeholders: Vec<String>,
}

impl Config {
    /// The primary locale, used as the fallback when rendering.
    pub fn primary_locale(&self) -> &str {
        self.locales.first().map_or("", String::as_str)
    }
}

/// Code generation backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Fluent resources plus typed argument builders
    #[default]
    Fluent,
    /// Self-contained Rust with `format!`-based rendering
    Plain,
}

impl Backend {
    /// Whether the backend renders plural categories itself.
    pub const fn supports_plurals(self) -> bool {
        matches!(self, Self::Fluent)
    }

    /// Lowercase name as used in config files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fluent => "fluent",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown backend name
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown backend '{0}' (expected 'fluent' or 'plain')")]
pub struct ParseBackendError(pub String);

impl FromStr for Backend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fluent" => Ok(Self::Fluent),
            "plain" => Ok(Self::Plain),
            _ => Err(ParseBackendError(s.to_string())),
        }
    }
}
