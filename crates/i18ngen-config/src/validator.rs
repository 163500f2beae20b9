//! Configuration validation.

use crate::loader::ConfigError;
use crate::schema::Config;
use i18ngen_common::is_valid_identifier;
use i18ngen_core::ident::is_reserved;
use std::collections::HashSet;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Checks a fully merged configuration before a run starts
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate `config`, failing on the first problem found.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_locales(&config.locales)?;

        if config.messages.trim().is_empty() {
            return Err(ConfigError::validation("messages", "glob cannot be empty"));
        }
        if config.placeholders.trim().is_empty() {
            return Err(ConfigError::validation("placeholders", "glob cannot be empty"));
        }
        if config.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::validation("output_dir", "cannot be empty"));
        }

        Self::validate_module_name(&config.output_module)?;

        if config.plural_placeholders.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::validation(
                "plural_placeholders",
                "names cannot be empty",
            ));
        }

        debug!(
            locales = ?config.locales,
            backend = %config.backend,
            "Configuration validated"
        );
        Ok(())
    }

    /// Locales must be present, unique and parse as BCP 47 language tags.
    pub fn validate_locales(locales: &[String]) -> Result<(), ConfigError> {
        if locales.is_empty() {
            return Err(ConfigError::validation("locales", "at least one locale is required"));
        }

        let mut seen = HashSet::new();
        for locale in locales {
            locale.parse::<LanguageIdentifier>().map_err(|e| {
                ConfigError::validation("locales", format!("'{locale}' is not a valid locale: {e}"))
            })?;
            if !seen.insert(locale.as_str()) {
                return Err(ConfigError::validation(
                    "locales",
                    format!("'{locale}' is listed more than once"),
                ));
            }
        }
        Ok(())
    }

    /// The generated module name must be a usable Rust identifier.
    pub fn validate_module_name(name: &str) -> Result<(), ConfigError> {
        if !is_valid_identifier(name) {
            return Err(ConfigError::validation(
                "output_module",
                format!("'{name}' is not a valid Rust identifier"),
            ));
        }
        if is_reserved(name) {
            return Err(ConfigError::validation(
                "output_module",
                format!("'{name}' is a Rust keyword"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::Validation { field, .. } => field,
            other => panic!("expected a validation error, got {other}"),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_locale_rules() {
        assert!(ConfigValidator::validate_locales(&["en-US".into(), "ja".into()]).is_ok());

        let err = ConfigValidator::validate_locales(&[]).unwrap_err();
        assert_eq!(field_of(err), "locales");

        let err = ConfigValidator::validate_locales(&["en".into(), "en".into()]).unwrap_err();
        assert!(err.to_string().contains("more than once"));

        let err = ConfigValidator::validate_locales(&["not a locale".into()]).unwrap_err();
        assert!(err.to_string().contains("not a valid locale"));
    }

    #[test]
    fn test_module_name_rules() {
        assert!(ConfigValidator::validate_module_name("messages").is_ok());
        assert!(ConfigValidator::validate_module_name("my-module").is_err());
        assert!(ConfigValidator::validate_module_name("mod").is_err());
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let config = Config {
            messages: "  ".into(),
            ..Config::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config).unwrap_err()), "messages");

        let config = Config {
            plural_placeholders: vec![String::new()],
            ..Config::default()
        };
        assert_eq!(
            field_of(ConfigValidator::validate(&config).unwrap_err()),
            "plural_placeholders"
        );
    }
}
