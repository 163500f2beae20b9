//! Error types for source loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type for source loading
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while reading message and placeholder files
#[derive(Error, Debug)]
pub enum SourceError {
    /// The glob pattern itself is malformed
    #[error("invalid glob pattern for {what} '{pattern}': {source}")]
    InvalidPattern {
        /// Which sources the pattern selects
        what: &'static str,
        /// The pattern as configured
        pattern: String,
        /// Underlying error
        #[source]
        source: glob::PatternError,
    },

    /// A matched path could not be read while walking the glob
    #[error("failed to walk glob pattern: {0}")]
    Glob(#[from] glob::GlobError),

    /// No message file matched the configured pattern
    #[error("no message files found matching pattern '{pattern}'")]
    NoMessageFiles {
        /// The pattern as configured
        pattern: String,
    },

    /// Failed to read a source file
    #[error("failed to read source file '{}': {source}", .path.display())]
    Read {
        /// File the error belongs to
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a YAML source file
    #[error("failed to parse YAML file '{}': {source}", .path.display())]
    Yaml {
        /// File the error belongs to
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to parse a JSON source file
    #[error("failed to parse JSON file '{}': {source}", .path.display())]
    Json {
        /// File the error belongs to
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// A template value is neither a string nor a flat plural map
    #[error(
        "invalid template for message '{message_id}' (locale: {locale}) in '{}': \
         expected a string or a map of plural forms, found {found}",
        .path.display()
    )]
    InvalidTemplateShape {
        /// File the error belongs to
        path: PathBuf,
        /// Message being decoded
        message_id: String,
        /// Locale of the value
        locale: String,
        /// Description of the value found
        found: &'static str,
    },

    /// The document structure does not match the expected layout
    #[error("invalid structure in '{}': {message}", .path.display())]
    InvalidStructure {
        /// File the error belongs to
        path: PathBuf,
        /// What is wrong
        message: String,
    },

    /// A simple-format placeholder file name carries no locale part
    #[error(
        "cannot determine locale from placeholder file name '{}' \
         (expected <kind>.<locale>.<ext>)",
        .path.display()
    )]
    MissingLocale {
        /// File the error belongs to
        path: PathBuf,
    },
}

impl SourceError {
    /// The file this error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. }
            | Self::Yaml { path, .. }
            | Self::Json { path, .. }
            | Self::InvalidTemplateShape { path, .. }
            | Self::InvalidStructure { path, .. }
            | Self::MissingLocale { path } => Some(path),
            Self::InvalidPattern { .. } | Self::Glob(_) | Self::NoMessageFiles { .. } => None,
        }
    }
}

impl From<SourceError> for i18ngen_common::I18nGenError {
    fn from(err: SourceError) -> Self {
        let path = err.path().map(|p| p.display().to_string());
        Self::Source {
            message: "failed to load sources".to_string(),
            path,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_shape_error_names_message_and_locale() {
        let err = SourceError::InvalidTemplateShape {
            path: PathBuf::from("messages/app.yaml"),
            message_id: "Greeting".into(),
            locale: "en".into(),
            found: "a list",
        };
        let text = err.to_string();
        assert!(text.contains("'Greeting' (locale: en)"));
        assert!(text.contains("messages/app.yaml"));
        assert!(text.contains("found a list"));
    }

    #[test]
    fn converts_with_path() {
        let err: i18ngen_common::I18nGenError = SourceError::MissingLocale {
            path: PathBuf::from("placeholders/status.yaml"),
        }
        .into();
        assert!(matches!(
            err,
            i18ngen_common::I18nGenError::Source { path: Some(ref p), .. } if p == "placeholders/status.yaml"
        ));
    }
}
