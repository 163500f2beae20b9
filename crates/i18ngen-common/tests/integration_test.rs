//! Integration tests for i18ngen-common crate.

use i18ngen_common::{
    is_valid_identifier, to_camel_case, to_kebab_case, to_snake_case, I18nGenError, LoggingConfig,
};

#[test]
fn test_naming_helpers_compose() {
    // struct name -> fluent id and rust field name
    let struct_name = to_camel_case("entity_not_found");
    assert_eq!(struct_name, "EntityNotFound");
    assert_eq!(to_kebab_case(&struct_name), "entity-not-found");
    assert_eq!(to_snake_case(&struct_name), "entity_not_found");
    assert!(is_valid_identifier(&struct_name));
}

#[test]
fn test_error_result_alias() {
    fn fails() -> i18ngen_common::Result<()> {
        Err(I18nGenError::validation_field("no locales", "locales"))
    }

    let err = fails().unwrap_err();
    assert!(matches!(err, I18nGenError::Validation { field: Some(ref f), .. } if f == "locales"));
}

#[test]
fn test_logging_config_override() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
        ..LoggingConfig::default()
    };

    assert_eq!(config.level, "debug");
    assert!(config.json_format);
    assert!(config.file_path.is_none());
}
