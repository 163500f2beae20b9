//! Placeholder catalog: declared kinds plus the kinds synthesized for
//! fields nothing declares.

use crate::error::{CompileError, CompileResult, IdentifierRole};
use crate::ident::{type_name, variant_name};
use crate::ir::{PlaceholderClass, PlaceholderDefinition, PlaceholderItem};
use crate::model::PlaceholderSource;
use crate::validate::validate_identifier;
use std::collections::{BTreeMap, HashMap};

/// Index from kind names and item ids to placeholder definitions
#[derive(Debug, Clone, Default)]
pub struct PlaceholderCatalog {
    definitions: Vec<PlaceholderDefinition>,
    by_name: HashMap<String, usize>,
    by_type: HashMap<String, usize>,
}

impl PlaceholderCatalog {
    /// Build the catalog from declared kinds.
    ///
    /// Sources sharing a kind name are merged. Kind names win over item ids
    /// in the index; among item ids the first kind in source order wins.
    pub fn new(sources: &[PlaceholderSource], primary_locale: &str) -> CompileResult<Self> {
        let mut merged: Vec<PlaceholderSource> = Vec::new();
        for source in sources {
            validate_identifier(IdentifierRole::PlaceholderKind, &source.kind, None)?;
            let context = format!("kind '{}'", source.kind);
            for id in source.items.keys() {
                // `_` alone passes the pattern but has no variant name
                let id_to_check = if variant_name(id).is_empty() { "" } else { id.as_str() };
                validate_identifier(IdentifierRole::PlaceholderItem, id_to_check, Some(&context))
                    .map_err(|_| CompileError::InvalidIdentifier {
                        role: IdentifierRole::PlaceholderItem,
                        name: id.clone(),
                        context: Some(context.clone()),
                    })?;
            }

            match merged.iter_mut().find(|m| m.kind == source.kind) {
                Some(existing) => {
                    for (id, texts) in &source.items {
                        existing
                            .items
                            .entry(id.clone())
                            .or_default()
                            .extend(texts.iter().map(|(l, t)| (l.clone(), t.clone())));
                    }
                }
                None => merged.push(source.clone()),
            }
        }

        let mut catalog = Self::default();
        for source in &merged {
            catalog.insert(declare(source, primary_locale)?)?;
        }

        for (index, source) in merged.iter().enumerate() {
            for id in source.items.keys() {
                catalog.by_name.entry(id.clone()).or_insert(index);
            }
        }

        Ok(catalog)
    }

    fn insert(&mut self, definition: PlaceholderDefinition) -> CompileResult<usize> {
        if let Some(&existing) = self.by_type.get(&definition.type_name) {
            return Err(CompileError::DuplicatePlaceholderType {
                kind: definition.kind,
                existing_kind: self.definitions[existing].kind.clone(),
                type_name: definition.type_name,
            });
        }

        let index = self.definitions.len();
        self.by_name.insert(definition.kind.clone(), index);
        self.by_type.insert(definition.type_name.clone(), index);
        self.definitions.push(definition);
        Ok(index)
    }

    /// The definition a name is indexed to, without synthesizing.
    pub fn lookup(&self, name: &str) -> Option<&PlaceholderDefinition> {
        self.by_name.get(name).map(|&i| &self.definitions[i])
    }

    /// Resolve a field base name to a type name.
    ///
    /// Unknown names get a single-item `Value` kind. Resolving the same name
    /// twice returns the same type, and a synthesized kind never replaces a
    /// declared one that already owns its type name.
    pub fn resolve(&mut self, base_name: &str) -> String {
        if let Some(definition) = self.lookup(base_name) {
            return definition.type_name.clone();
        }

        let synthesized_type = type_name(base_name, PlaceholderClass::Value);
        if let Some(&index) = self.by_type.get(&synthesized_type) {
            self.by_name.insert(base_name.to_string(), index);
            return synthesized_type;
        }

        let index = self.definitions.len();
        self.definitions.push(PlaceholderDefinition {
            kind: base_name.to_string(),
            type_name: synthesized_type.clone(),
            class: PlaceholderClass::Value,
            items: vec![PlaceholderItem {
                id: base_name.to_string(),
                variant_name: variant_name(base_name),
                texts: BTreeMap::new(),
            }],
            synthesized: true,
        });
        self.by_name.insert(base_name.to_string(), index);
        self.by_type.insert(synthesized_type.clone(), index);
        synthesized_type
    }

    /// Number of definitions, declared and synthesized
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All definitions sorted by type name
    pub fn into_definitions(self) -> Vec<PlaceholderDefinition> {
        let mut definitions = self.definitions;
        definitions.sort_by(|a, b| a.type_name.cmp(&b.type_name));
        definitions
    }
}

fn declare(source: &PlaceholderSource, primary_locale: &str) -> CompileResult<PlaceholderDefinition> {
    let class = if source.items.values().any(|texts| !texts.is_empty()) {
        PlaceholderClass::Text
    } else {
        PlaceholderClass::Value
    };

    // only text kinds become enums
    if class == PlaceholderClass::Text {
        let mut variants: HashMap<String, &str> = HashMap::new();
        for id in source.items.keys() {
            let variant = variant_name(id);
            if let Some(existing) = variants.insert(variant.clone(), id) {
                return Err(CompileError::DuplicateVariant {
                    kind: source.kind.clone(),
                    item: id.clone(),
                    existing_item: existing.to_string(),
                    variant_name: variant,
                });
            }
        }
    }

    let mut items: Vec<PlaceholderItem> = source
        .items
        .iter()
        .map(|(id, texts)| PlaceholderItem {
            id: id.clone(),
            variant_name: variant_name(id),
            texts: texts.clone(),
        })
        .collect();

    // Value items are already in id order
    if class == PlaceholderClass::Text {
        items.sort_by(|a, b| {
            let key_a = a.text(primary_locale).unwrap_or(&a.id);
            let key_b = b.text(primary_locale).unwrap_or(&b.id);
            key_a.cmp(key_b).then_with(|| a.id.cmp(&b.id))
        });
    }

    Ok(PlaceholderDefinition {
        kind: source.kind.clone(),
        type_name: type_name(&source.kind, class),
        class,
        items,
        synthesized: false,
    })
}
