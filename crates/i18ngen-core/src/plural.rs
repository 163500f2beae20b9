//! Count-awareness detection.

use crate::ident::template_key;
use crate::model::{FieldReference, MessageSource};

/// Plural placeholder names used when none are configured.
pub const DEFAULT_PLURAL_PLACEHOLDERS: &[&str] = &["Count"];

/// Result of plural detection for one message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralInfo {
    /// Whether rendering depends on a count
    pub count_aware: bool,
    /// Template key that carries the count
    pub placeholder: Option<String>,
}

/// Decides which messages are count-aware and which fields carry the count
#[derive(Debug, Clone)]
pub struct PluralDetector {
    names: Vec<String>,
    native: bool,
}

impl PluralDetector {
    /// `names` are matched case-insensitively; an empty list means the
    /// default set. `native` is whether the backend renders plurals itself.
    pub fn new(names: &[String], native: bool) -> Self {
        let names = if names.is_empty() {
            DEFAULT_PLURAL_PLACEHOLDERS
                .iter()
                .map(|n| (*n).to_string())
                .collect()
        } else {
            names.to_vec()
        };
        Self { names, native }
    }

    /// Whether the backend renders plurals natively
    pub const fn is_native(&self) -> bool {
        self.native
    }

    /// Whether `name` is a configured plural placeholder name
    pub fn is_plural_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Detect count-awareness from referenced names or plural-map shape.
    pub fn detect(&self, message: &MessageSource) -> PluralInfo {
        let referenced = message
            .fields
            .iter()
            .find(|field| self.is_plural_name(&field.base_name));
        let structural = message.raw.values().any(|raw| raw.is_plural());

        let placeholder = match referenced {
            Some(field) => Some(template_key(field)),
            None if structural => self.names.first().cloned(),
            None => None,
        };

        PluralInfo {
            count_aware: placeholder.is_some(),
            placeholder,
        }
    }

    /// Whether `field` moves out of the ordinary field list into the count
    /// affordance.
    pub fn excludes(&self, info: &PluralInfo, field: &FieldReference) -> bool {
        self.native && info.count_aware && self.is_plural_name(&field.base_name)
    }
}

impl Default for PluralDetector {
    fn default() -> Self {
        Self::new(&[], true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawTemplate;
    use std::collections::BTreeMap;

    fn message(raw: &[(&str, RawTemplate)], fields: Vec<FieldReference>) -> MessageSource {
        MessageSource {
            id: "M".into(),
            raw: raw.iter().map(|(l, r)| ((*l).to_string(), r.clone())).collect(),
            flat: BTreeMap::new(),
            fields,
        }
    }

    #[test]
    fn default_names_are_case_insensitive() {
        let detector = PluralDetector::default();
        assert!(detector.is_plural_name("Count"));
        assert!(detector.is_plural_name("count"));
        assert!(!detector.is_plural_name("amount"));
    }

    #[test]
    fn configured_names_replace_default() {
        let detector = PluralDetector::new(&["Quantity".to_string()], true);
        assert!(detector.is_plural_name("quantity"));
        assert!(!detector.is_plural_name("count"));
    }

    #[test]
    fn detects_by_referenced_name() {
        let detector = PluralDetector::default();
        let msg = message(
            &[("en", RawTemplate::plain("{{.count}} files"))],
            vec![FieldReference::new("count")],
        );
        let info = detector.detect(&msg);
        assert!(info.count_aware);
        assert_eq!(info.placeholder.as_deref(), Some("count"));
    }

    #[test]
    fn detects_by_plural_shape() {
        let detector = PluralDetector::default();
        let msg = message(
            &[("en", RawTemplate::plural([("one", "one file"), ("other", "many files")]))],
            Vec::new(),
        );
        let info = detector.detect(&msg);
        assert!(info.count_aware);
        assert_eq!(info.placeholder.as_deref(), Some("Count"));
    }

    #[test]
    fn ordinary_messages_are_not_count_aware() {
        let detector = PluralDetector::default();
        let msg = message(
            &[("en", RawTemplate::plain("Hi {{.name}}"))],
            vec![FieldReference::new("name")],
        );
        assert_eq!(detector.detect(&msg), PluralInfo::default());
    }

    #[test]
    fn exclusion_requires_native_backend() {
        let count = FieldReference::new("Count");
        let msg = message(&[("en", RawTemplate::plain("{{.Count}}"))], vec![count.clone()]);

        let native = PluralDetector::new(&[], true);
        let info = native.detect(&msg);
        assert!(native.excludes(&info, &count));
        assert!(!native.excludes(&info, &FieldReference::new("name")));

        let plain = PluralDetector::new(&[], false);
        let info = plain.detect(&msg);
        assert!(info.count_aware);
        assert!(!plain.excludes(&info, &count));
    }
}
