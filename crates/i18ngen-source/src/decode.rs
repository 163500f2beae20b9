//! Conversion of decoded values into templates and texts.

use crate::error::{SourceError, SourceResult};
use crate::files::{describe, key_string};
use i18ngen_core::model::is_plural_category;
use i18ngen_core::RawTemplate;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// Where a template value came from, for diagnostics
#[derive(Debug, Clone, Copy)]
pub struct TemplateOrigin<'a> {
    /// Source file
    pub path: &'a Path,
    /// Message id
    pub message_id: &'a str,
    /// Locale the value belongs to
    pub locale: &'a str,
}

impl TemplateOrigin<'_> {
    fn shape_error(&self, found: &'static str) -> SourceError {
        SourceError::InvalidTemplateShape {
            path: self.path.to_path_buf(),
            message_id: self.message_id.to_string(),
            locale: self.locale.to_string(),
            found,
        }
    }
}

/// Convert one locale's decoded value into a [`RawTemplate`].
///
/// Strings become plain templates and maps of scalars keyed by category or
/// exact number become plural maps. Numbers and booleans are stringified with a warning; null,
/// lists and nested maps are rejected.
pub fn template_from_value(value: &Value, origin: TemplateOrigin<'_>) -> SourceResult<RawTemplate> {
    match value {
        Value::Mapping(forms) => {
            let mut plural = BTreeMap::new();
            for (category, form) in forms {
                // numeric keys select exact counts (`[1]` in Fluent)
                let category = match category {
                    Value::String(text) => text.clone(),
                    Value::Number(n) => n.to_string(),
                    _ => return Err(origin.shape_error("a plural map with invalid keys")),
                };
                if !is_plural_category(&category) && category.parse::<f64>().is_err() {
                    warn!(
                        message_id = origin.message_id,
                        locale = origin.locale,
                        category = %category,
                        "Unknown plural category"
                    );
                }
                let text = scalar_text(form, &origin).ok_or_else(|| match form {
                    Value::Mapping(_) => origin.shape_error("a nested map"),
                    other => origin.shape_error(describe(other)),
                })?;
                plural.insert(category, text);
            }
            Ok(RawTemplate::Plural(plural))
        }
        other => scalar_text(other, &origin)
            .map(RawTemplate::Plain)
            .ok_or_else(|| origin.shape_error(describe(other))),
    }
}

// Strings pass through; numbers and booleans are stringified with a warning.
fn scalar_text(value: &Value, origin: &TemplateOrigin<'_>) -> Option<String> {
    let text = match value {
        Value::String(text) => return Some(text.clone()),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    warn!(
        message_id = origin.message_id,
        locale = origin.locale,
        path = %origin.path.display(),
        "Non-string template value converted to text"
    );
    Some(text)
}

/// Convert a placeholder item's `locale -> text` mapping.
///
/// `null` stands for an item without any text (a value item).
pub fn texts_from_value(
    value: &Value,
    path: &Path,
    item_id: &str,
) -> SourceResult<BTreeMap<String, String>> {
    match value {
        Value::Null => Ok(BTreeMap::new()),
        Value::Mapping(by_locale) => {
            let mut texts = BTreeMap::new();
            for (locale, text) in by_locale {
                let locale = key_string(locale, path, &format!("item '{item_id}'"))?;
                let text = text_from_value(text, path, item_id)?;
                texts.insert(locale, text);
            }
            Ok(texts)
        }
        other => Err(SourceError::InvalidStructure {
            path: path.to_path_buf(),
            message: format!(
                "item '{item_id}' must map locales to text, found {}",
                describe(other)
            ),
        }),
    }
}

/// Convert a single placeholder text value.
pub fn text_from_value(value: &Value, path: &Path, item_id: &str) -> SourceResult<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(SourceError::InvalidStructure {
            path: path.to_path_buf(),
            message: format!("text for item '{item_id}' must be a string, found {}", describe(other)),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn origin() -> TemplateOrigin<'static> {
        TemplateOrigin {
            path: Path::new("messages/app.yaml"),
            message_id: "Greeting",
            locale: "en",
        }
    }

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn strings_are_plain() {
        let raw = template_from_value(&yaml("\"Hi {{.name}}\""), origin()).unwrap();
        assert_eq!(raw, RawTemplate::plain("Hi {{.name}}"));
    }

    #[test]
    fn maps_are_plural() {
        let raw = template_from_value(&yaml("one: \"1 item\"\nother: \"{{.Count}} items\""), origin())
            .unwrap();
        assert_eq!(
            raw,
            RawTemplate::plural([("one", "1 item"), ("other", "{{.Count}} items")])
        );
    }

    #[test]
    fn numeric_plural_keys_are_stringified() {
        let raw = template_from_value(&yaml("0: \"no items\"\nother: \"{{.Count}} items\""), origin())
            .unwrap();
        assert_eq!(
            raw,
            RawTemplate::plural([("0", "no items"), ("other", "{{.Count}} items")])
        );
    }

    #[test]
    fn scalars_are_stringified() {
        assert_eq!(template_from_value(&yaml("42"), origin()).unwrap(), RawTemplate::plain("42"));
        assert_eq!(template_from_value(&yaml("true"), origin()).unwrap(), RawTemplate::plain("true"));
    }

    #[test]
    fn other_shapes_are_rejected() {
        for (input, found) in [
            ("~", "null"),
            ("[a, b]", "a list"),
            ("one:\n  nested: x", "a nested map"),
            ("true: x", "a plural map with invalid keys"),
        ] {
            let err = template_from_value(&yaml(input), origin()).unwrap_err();
            assert!(
                matches!(err, SourceError::InvalidTemplateShape { found: f, .. } if f == found),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn placeholder_texts() {
        let path = Path::new("placeholders/entity.yaml");
        let texts = texts_from_value(&yaml("ja: ユーザー\nen: User"), path, "user").unwrap();
        assert_eq!(texts["ja"], "ユーザー");
        assert_eq!(texts["en"], "User");

        assert!(texts_from_value(&Value::Null, path, "id").unwrap().is_empty());
        assert!(texts_from_value(&yaml("just text"), path, "user").is_err());
        assert!(text_from_value(&yaml("[x]"), path, "user").is_err());
    }
}
