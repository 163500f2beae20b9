//! Workspace-wide error type.
//!
//! Each crate keeps its own focused error enum (`CompileError`,
//! `SourceError`, `ConfigError`, `EmitError`) and converts into
//! [`I18nGenError`] at crate boundaries.

use thiserror::Error;

/// Result type alias for i18ngen operations
pub type Result<T> = std::result::Result<T, I18nGenError>;

/// Main error type for i18ngen operations
#[derive(Error, Debug)]
pub enum I18nGenError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
        /// Underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML decoding errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Errors while loading message or placeholder sources
    #[error("Source error: {message}")]
    Source {
        /// Error message
        message: String,
        /// File involved, if any
        path: Option<String>,
        /// Underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Template compilation and model resolution errors
    #[error("Compile error: {message}")]
    Compile {
        /// Error message
        message: String,
        /// Underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Code emission errors
    #[error("Emit error: {message}")]
    Emit {
        /// Error message
        message: String,
        /// Underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for configuration values
    #[error("Validation error: {message}")]
    Validation {
        /// Error message
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        /// Error message
        message: String,
        /// Underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl I18nGenError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new source loading error
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source {
            message: msg.into(),
            path: None,
            source: None,
        }
    }

    /// Create a new source loading error tied to a file
    pub fn source_at(msg: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Source {
            message: msg.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Create a new source loading error with source
    pub fn source_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Source {
            message: msg.into(),
            path: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new compile error with source
    pub fn compile_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Compile {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new emit error
    pub fn emit(msg: impl Into<String>) -> Self {
        Self::Emit {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new emit error with source
    pub fn emit_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Emit {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = I18nGenError::new("test message");
        assert!(error.to_string().contains("test message"));

        let config_error = I18nGenError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));

        let source_error = I18nGenError::source_at("bad file", "messages/app.yaml");
        assert!(source_error.to_string().contains("Source error"));
        assert!(matches!(
            source_error,
            I18nGenError::Source { path: Some(ref p), .. } if p == "messages/app.yaml"
        ));

        let validation_error = I18nGenError::validation_field("Invalid input", "locales");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = I18nGenError::with_source("Failed to read file", io_error);

        assert!(wrapped_error.to_string().contains("Failed to read file"));
        assert!(wrapped_error.source().is_some());

        let compile_error = I18nGenError::compile_with_source(
            "Message compilation failed",
            io::Error::new(io::ErrorKind::InvalidData, "bad template"),
        );
        assert!(compile_error.to_string().contains("Compile error"));
        assert!(compile_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: I18nGenError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_decode_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#)
            .unwrap_err();
        let error: I18nGenError = json_error.into();
        assert!(error.to_string().contains("Serialization error"));

        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
        let error: I18nGenError = yaml_error.into();
        assert!(error.to_string().contains("YAML error"));
    }

    #[test]
    fn test_error_display_formatting() {
        let error = I18nGenError::new("test error");
        assert_eq!(format!("{error}"), "test error");

        let config_error = I18nGenError::config("missing field");
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: missing field"
        );

        let emit_error = I18nGenError::emit("invalid fluent output");
        assert_eq!(format!("{emit_error}"), "Emit error: invalid fluent output");
    }
}
