//! Reduces a locale's raw template to one flat string.

use crate::model::RawTemplate;

/// Plural categories tried in order when flattening.
pub const FLATTEN_PRIORITY: [&str; 2] = ["other", "one"];

/// A flattened template alongside the raw value it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTemplate {
    /// Single string used for extraction and non-plural consumers
    pub flat: String,
    /// The untouched raw value for plural-aware consumers
    pub raw: RawTemplate,
}

/// Normalize one locale's raw template.
pub fn normalize(raw: RawTemplate) -> NormalizedTemplate {
    let flat = flatten(&raw).to_string();
    NormalizedTemplate { flat, raw }
}

/// Flatten a raw template.
///
/// Plain strings pass through. Plural maps yield `other`, else `one`, else
/// the lexicographically smallest category; an empty map yields `""`.
pub fn flatten(raw: &RawTemplate) -> &str {
    match raw {
        RawTemplate::Plain(text) => text,
        RawTemplate::Plural(forms) => FLATTEN_PRIORITY
            .iter()
            .find_map(|category| forms.get(*category))
            .or_else(|| forms.values().next())
            .map_or("", String::as_str),
    }
}

/// The plural category [`flatten`] picks, if `raw` is a plural map.
pub fn flattened_category(raw: &RawTemplate) -> Option<&str> {
    match raw {
        RawTemplate::Plain(_) => None,
        RawTemplate::Plural(forms) => FLATTEN_PRIORITY
            .iter()
            .find_map(|category| forms.get_key_value(*category).map(|(k, _)| k.as_str()))
            .or_else(|| forms.keys().next().map(String::as_str)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_passes_through() {
        let normalized = normalize(RawTemplate::plain("{{.entity}} not found"));
        assert_eq!(normalized.flat, "{{.entity}} not found");
        assert_eq!(normalized.raw, RawTemplate::plain("{{.entity}} not found"));
    }

    #[test]
    fn plural_prefers_other() {
        let raw = RawTemplate::plural([("one", "1 item"), ("other", "N items")]);
        let normalized = normalize(raw.clone());
        assert_eq!(normalized.flat, "N items");
        assert_eq!(normalized.raw, raw);
        assert_eq!(flattened_category(&raw), Some("other"));
    }

    #[test]
    fn plural_falls_back_to_one() {
        let raw = RawTemplate::plural([("one", "1 item"), ("few", "a few items")]);
        assert_eq!(flatten(&raw), "1 item");
        assert_eq!(flattened_category(&raw), Some("one"));
    }

    #[test]
    fn plural_fallback_is_lexicographic() {
        let raw = RawTemplate::plural([("many", "many items"), ("few", "few items")]);
        assert_eq!(flatten(&raw), "few items");
        assert_eq!(flattened_category(&raw), Some("few"));
    }

    #[test]
    fn empty_plural_flattens_to_empty() {
        let raw = RawTemplate::Plural(Default::default());
        assert_eq!(flatten(&raw), "");
        assert_eq!(flattened_category(&raw), None);
    }

    proptest! {
        #[test]
        fn flattening_flat_text_is_identity(text in ".*") {
            let once = normalize(RawTemplate::plain(text.clone()));
            let twice = normalize(RawTemplate::plain(once.flat.clone()));
            prop_assert_eq!(&once.flat, &text);
            prop_assert_eq!(once, twice);
        }
    }
}
