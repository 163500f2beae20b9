//! Configuration loading with environment and command line overrides.

use crate::defaults::DEFAULT_CONFIG_FILES;
use crate::schema::{Backend, Config};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    Io {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config file extension is neither YAML nor TOML
    #[error("Unsupported configuration format '{}' (expected .yaml, .yml or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name
        var: String,
        /// Underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Invalid configuration value for '{field}': {message}")]
    Validation {
        /// Offending field
        field: String,
        /// What is wrong
        message: String,
    },
}

impl ConfigError {
    /// Build a validation error for `field`
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ConfigError> for i18ngen_common::I18nGenError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, message } => Self::validation_field(message, field),
            other => Self::config_with_source("failed to load configuration", other),
        }
    }
}

/// Environment variable names consulted by [`ConfigLoader::apply_env_overrides`]
pub mod env_vars {
    /// Comma-separated locale list
    pub const LOCALES: &str = "I18NGEN_LOCALES";
    /// Message source glob
    pub const MESSAGES: &str = "I18NGEN_MESSAGES";
    /// Placeholder source glob
    pub const PLACEHOLDERS: &str = "I18NGEN_PLACEHOLDERS";
    /// Output directory
    pub const OUTPUT_DIR: &str = "I18NGEN_OUTPUT_DIR";
    /// Generated module name
    pub const OUTPUT_MODULE: &str = "I18NGEN_OUTPUT_MODULE";
    /// `fluent` or `plain`
    pub const BACKEND: &str = "I18NGEN_BACKEND";
    /// `true` or `false`
    pub const COMPOUND: &str = "I18NGEN_COMPOUND";
}

/// Configuration loader for the generator
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML or TOML file with environment overrides.
    ///
    /// Relative globs and the output directory are resolved against the
    /// directory containing the file. A missing file yields the defaults.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let mut config = Self::read_file(path.as_ref())?;
        Self::apply_env_overrides(&mut config)?;
        Ok(config)
    }

    /// Load the first default config file found in `dir`, or the defaults.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Config, ConfigError> {
        let dir = dir.as_ref();
        match DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
        {
            Some(path) => Self::load_config(path),
            None => {
                debug!(dir = %dir.display(), "No config file found, using defaults");
                let mut config = Config::default();
                Self::apply_env_overrides(&mut config)?;
                Ok(config)
            }
        }
    }

    /// Parse `path` without applying any overrides.
    pub fn read_file(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => serde_yaml::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        resolve_relative(&mut config, base);

        debug!(path = %path.display(), locales = ?config.locales, "Loaded config file");
        Ok(config)
    }

    /// Apply `I18NGEN_*` environment variable overrides to configuration.
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides read through `lookup` instead of the process
    /// environment.
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locales) = lookup(env_vars::LOCALES) {
            config.locales = split_list(&locales);
        }

        if let Some(messages) = lookup(env_vars::MESSAGES) {
            config.messages = messages;
        }

        if let Some(placeholders) = lookup(env_vars::PLACEHOLDERS) {
            config.placeholders = placeholders;
        }

        if let Some(output_dir) = lookup(env_vars::OUTPUT_DIR) {
            config.output_dir = PathBuf::from(output_dir);
        }

        if let Some(module) = lookup(env_vars::OUTPUT_MODULE) {
            config.output_module = module;
        }

        if let Some(backend) = lookup(env_vars::BACKEND) {
            config.backend = backend.parse().map_err(|e| ConfigError::EnvParse {
                var: env_vars::BACKEND.to_string(),
                source: Box::new(e),
            })?;
        }

        if let Some(compound) = lookup(env_vars::COMPOUND) {
            config.compound = compound.trim().parse().map_err(|e| ConfigError::EnvParse {
                var: env_vars::COMPOUND.to_string(),
                source: Box::new(e),
            })?;
        }

        Ok(())
    }
}

/// Command line overrides; every set field replaces the configured value.
///
/// Paths given on the command line are used as-is, relative to the working
/// directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--locales`
    pub locales: Option<Vec<String>>,
    /// `--compound`
    pub compound: Option<bool>,
    /// `--messages`
    pub messages: Option<String>,
    /// `--placeholders`
    pub placeholders: Option<String>,
    /// `--output`
    pub output_dir: Option<PathBuf>,
    /// `--module`
    pub output_module: Option<String>,
    /// `--backend`
    pub backend: Option<Backend>,
    /// `--plural`
    pub plural_placeholders: Option<Vec<String>>,
}

impl CliOverrides {
    /// Apply the set overrides to `config`.
    pub fn apply(self, config: &mut Config) {
        if let Some(locales) = self.locales {
            config.locales = locales;
        }
        if let Some(compound) = self.compound {
            config.compound = compound;
        }
        if let Some(messages) = self.messages {
            config.messages = messages;
        }
        if let Some(placeholders) = self.placeholders {
            config.placeholders = placeholders;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(module) = self.output_module {
            config.output_module = module;
        }
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(names) = self.plural_placeholders {
            config.plural_placeholders = names;
        }
    }

    /// Whether no override is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Split a comma-separated list, trimming entries and dropping empties.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn resolve_relative(config: &mut Config, base: &Path) {
    if base.as_os_str().is_empty() {
        return;
    }

    config.messages = join_glob(base, &config.messages);
    config.placeholders = join_glob(base, &config.placeholders);
    if config.output_dir.is_relative() {
        config.output_dir = base.join(strip_dot(&config.output_dir));
    }
}

fn join_glob(base: &Path, pattern: &str) -> String {
    if Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }
    let trimmed = pattern.strip_prefix("./").unwrap_or(pattern);
    base.join(trimmed).to_string_lossy().into_owned()
}

fn strip_dot(path: &Path) -> PathBuf {
    path.strip_prefix(".").map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}
