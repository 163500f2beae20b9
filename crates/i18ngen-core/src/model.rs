//! Source-side data model: what the loader hands to the compiler.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// CLDR plural categories, in canonical order.
pub const PLURAL_CATEGORIES: [&str; 6] = ["zero", "one", "two", "few", "many", "other"];

/// Returns true if `category` is one of the CLDR plural categories.
pub fn is_plural_category(category: &str) -> bool {
    PLURAL_CATEGORIES.contains(&category)
}

///
/// FieldReference
///
/// One `{{.name[:suffix][ | fn ...]}}` occurrence in a template. Identity is
/// `(base_name, suffix)`; the function chain is carried along but ignored by
/// equality and hashing.
///

#[derive(Debug, Clone, Eq)]
pub struct FieldReference {
    /// Base name as authored (e.g. `entity`)
    pub base_name: String,
    /// Optional disambiguating suffix (e.g. `from`)
    pub suffix: Option<String>,
    /// Template functions applied after the field (e.g. `["upper"]`)
    pub functions: Vec<String>,
}

impl FieldReference {
    /// Create an unsuffixed reference
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            suffix: None,
            functions: Vec::new(),
        }
    }

    /// Create a suffixed reference
    pub fn with_suffix(base_name: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            suffix: Some(suffix.into()),
            functions: Vec::new(),
        }
    }

    /// Attach a function chain
    #[must_use]
    pub fn with_functions<I, S>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.functions = functions.into_iter().map(Into::into).collect();
        self
    }

    /// `(base_name, suffix)`
    pub fn identity(&self) -> (&str, Option<&str>) {
        (&self.base_name, self.suffix.as_deref())
    }

    /// Whether the reference uses suffix notation
    pub const fn has_suffix(&self) -> bool {
        self.suffix.is_some()
    }

    /// The path as written inside the braces, without the leading dot
    /// (`entity` or `entity:from`)
    pub fn path(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{}:{suffix}", self.base_name),
            None => self.base_name.clone(),
        }
    }
}

impl PartialEq for FieldReference {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Hash for FieldReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

///
/// RawTemplate
///
/// One locale's template as decoded from the source file.
///

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTemplate {
    /// A single template string
    Plain(String),
    /// A CLDR category -> template map (`one`, `other`, ...)
    Plural(BTreeMap<String, String>),
}

impl RawTemplate {
    /// Build a plain template
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Build a plural template from `(category, text)` pairs
    pub fn plural<I, K, V>(forms: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Plural(
            forms
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Whether this template is a plural-category map
    pub const fn is_plural(&self) -> bool {
        matches!(self, Self::Plural(_))
    }

    /// Every template string this value holds, in category order
    pub fn forms(&self) -> Vec<&str> {
        match self {
            Self::Plain(text) => vec![text.as_str()],
            Self::Plural(forms) => forms.values().map(String::as_str).collect(),
        }
    }

    /// Apply `f` to every template string, keeping the shape
    #[must_use]
    pub fn map_forms(&self, mut f: impl FnMut(&str) -> String) -> Self {
        match self {
            Self::Plain(text) => Self::Plain(f(text)),
            Self::Plural(forms) => Self::Plural(
                forms
                    .iter()
                    .map(|(category, text)| (category.clone(), f(text)))
                    .collect(),
            ),
        }
    }
}

///
/// RawMessage
///
/// A message as declared in a source file, before compilation.
///

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    /// Message id as authored
    pub id: String,
    /// locale -> raw template
    pub templates: BTreeMap<String, RawTemplate>,
}

impl RawMessage {
    /// Create a message with no templates
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            templates: BTreeMap::new(),
        }
    }

    /// Add one locale's template
    #[must_use]
    pub fn with_template(mut self, locale: impl Into<String>, template: RawTemplate) -> Self {
        self.templates.insert(locale.into(), template);
        self
    }
}

///
/// MessageSource
///
/// A compiled message: normalized, validated and with its field references
/// extracted.
///

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSource {
    /// Message id as authored
    pub id: String,
    /// locale -> raw template (plural maps preserved)
    pub raw: BTreeMap<String, RawTemplate>,
    /// locale -> flattened template
    pub flat: BTreeMap<String, String>,
    /// Field references, deduplicated by identity in first-seen order
    pub fields: Vec<FieldReference>,
}

///
/// PlaceholderSource
///
/// One placeholder kind as grouped by the loader.
///

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderSource {
    /// Kind name, derived from the source file name
    pub kind: String,
    /// item id -> locale -> localized text
    pub items: BTreeMap<String, BTreeMap<String, String>>,
}

impl PlaceholderSource {
    /// Create an empty kind
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            items: BTreeMap::new(),
        }
    }

    /// Add or extend an item with one locale's text
    #[must_use]
    pub fn with_text(
        mut self,
        id: impl Into<String>,
        locale: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.items
            .entry(id.into())
            .or_default()
            .insert(locale.into(), text.into());
        self
    }

    /// Add an item without any localized text
    #[must_use]
    pub fn with_item(mut self, id: impl Into<String>) -> Self {
        self.items.entry(id.into()).or_default();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_ignores_function_chain() {
        let plain = FieldReference::new("entity");
        let upper = FieldReference::new("entity").with_functions(["upper"]);
        let suffixed = FieldReference::with_suffix("entity", "from");

        assert_eq!(plain, upper);
        assert_ne!(plain, suffixed);

        let set: HashSet<_> = [plain, upper, suffixed].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn path_renders_suffix_notation() {
        assert_eq!(FieldReference::new("reason").path(), "reason");
        assert_eq!(FieldReference::with_suffix("name", "user").path(), "name:user");
    }

    #[test]
    fn plural_forms_are_category_ordered() {
        let raw = RawTemplate::plural([("other", "N items"), ("one", "1 item")]);
        assert!(raw.is_plural());
        assert_eq!(raw.forms(), vec!["1 item", "N items"]);

        let upper = raw.map_forms(str::to_uppercase);
        assert_eq!(upper.forms(), vec!["1 ITEM", "N ITEMS"]);
    }

    #[test]
    fn placeholder_source_builder_merges_locales() {
        let source = PlaceholderSource::new("entity")
            .with_text("user", "en", "User")
            .with_text("user", "ja", "ユーザー")
            .with_item("group");

        assert_eq!(source.items.len(), 2);
        assert_eq!(source.items["user"].len(), 2);
        assert!(source.items["group"].is_empty());
    }
}
