//! Intermediate representation handed to the emitters.
//!
//! Everything here is fully resolved and sorted; emitters only render it.

use crate::model::{FieldReference, RawTemplate};
use std::collections::BTreeMap;

/// One distinct field of one message, after identifier derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    /// Generated field identifier (e.g. `EntityFrom`)
    pub field_name: String,
    /// Key used inside rewritten templates (e.g. `entityFrom`)
    pub template_key: String,
    /// Type name of the placeholder definition this field resolves to
    pub type_name: String,
    /// The reference as authored
    pub reference: FieldReference,
}

/// Whether a placeholder kind carries localized text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlaceholderClass {
    /// Items are opaque values supplied by the caller at render time
    Value,
    /// Items carry localized text per locale
    Text,
}

impl PlaceholderClass {
    /// Suffix appended to the kind's CamelCase name to form its type name
    pub const fn type_suffix(self) -> &'static str {
        match self {
            Self::Value => "Value",
            Self::Text => "Text",
        }
    }
}

/// One item of a placeholder kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderItem {
    /// Item id as authored
    pub id: String,
    /// Generated variant identifier
    pub variant_name: String,
    /// locale -> localized text; empty for value items
    pub texts: BTreeMap<String, String>,
}

impl PlaceholderItem {
    /// Text for `locale`, if this item has one
    pub fn text(&self, locale: &str) -> Option<&str> {
        self.texts.get(locale).map(String::as_str)
    }
}

/// A resolved placeholder kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderDefinition {
    /// Kind name (file stem, or the field base name when synthesized)
    pub kind: String,
    /// Generated type name, unique per run
    pub type_name: String,
    /// Value or Text
    pub class: PlaceholderClass,
    /// Items in emission order
    pub items: Vec<PlaceholderItem>,
    /// True when no source declared this kind
    pub synthesized: bool,
}

/// A resolved message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDefinition {
    /// Message id as authored
    pub id: String,
    /// Generated struct name
    pub struct_name: String,
    /// Distinct fields in first-seen order, plural fields excluded when the
    /// backend renders plurals natively
    pub fields: Vec<ResolvedField>,
    /// locale -> flattened template with suffix keys rewritten
    pub templates: BTreeMap<String, String>,
    /// locale -> raw template with suffix keys rewritten in every form
    pub raw_templates: BTreeMap<String, RawTemplate>,
    /// locale -> template key -> function chain
    pub functions: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    /// Whether rendering depends on a count
    pub count_aware: bool,
    /// Template key carrying the count, when count-aware
    pub plural_placeholder: Option<String>,
}

impl MessageDefinition {
    /// Function chain applied to `template_key` in `locale`
    pub fn functions_for(&self, locale: &str, template_key: &str) -> &[String] {
        self.functions
            .get(locale)
            .and_then(|by_key| by_key.get(template_key))
            .map_or(&[], Vec::as_slice)
    }

    /// Whether any locale renders this message from a plural map
    pub fn has_plural_forms(&self) -> bool {
        self.raw_templates.values().any(RawTemplate::is_plural)
    }
}

/// The full IR for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definitions {
    /// Messages sorted by id
    pub messages: Vec<MessageDefinition>,
    /// Placeholder kinds sorted by type name
    pub placeholders: Vec<PlaceholderDefinition>,
    /// Configured locales, primary first
    pub locales: Vec<String>,
}

impl Definitions {
    /// The first configured locale
    pub fn primary_locale(&self) -> &str {
        self.locales.first().map_or("", String::as_str)
    }

    /// Look up a message by id
    pub fn message(&self, id: &str) -> Option<&MessageDefinition> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Look up a placeholder kind by type name
    pub fn placeholder(&self, type_name: &str) -> Option<&PlaceholderDefinition> {
        self.placeholders.iter().find(|p| p.type_name == type_name)
    }
}
