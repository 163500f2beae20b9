//! Compiles raw messages and assembles the sorted IR.

use crate::catalog::PlaceholderCatalog;
use crate::error::{CompileError, CompileResult, IdentifierRole};
use crate::extract::{extract_field_spans, extract_fields, unique_fields};
use crate::ident::{field_name, rewrite_template, struct_name, template_key};
use crate::ir::{Definitions, MessageDefinition, ResolvedField};
use crate::model::{FieldReference, MessageSource, PlaceholderSource, RawMessage, RawTemplate};
use crate::normalize::normalize;
use crate::plural::{PluralDetector, DEFAULT_PLURAL_PLACEHOLDERS};
use crate::validate::{validate_identifier, validate_template};
use i18ngen_common::to_snake_case;
use std::collections::{BTreeMap, HashMap};

/// Inputs to [`assemble`] besides the sources themselves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Configured locales, primary first
    pub locales: Vec<String>,
    /// Names treated as plural placeholders (case-insensitive)
    pub plural_placeholders: Vec<String>,
    /// Whether the target backend renders plurals natively
    pub native_plurals: bool,
}

impl AssembleOptions {
    /// Options with the default plural names and a native-plural backend
    pub fn new(locales: Vec<String>) -> Self {
        Self {
            locales,
            plural_placeholders: DEFAULT_PLURAL_PLACEHOLDERS
                .iter()
                .map(|n| (*n).to_string())
                .collect(),
            native_plurals: true,
        }
    }

    /// Replace the plural placeholder names
    #[must_use]
    pub fn with_plural_placeholders(mut self, names: Vec<String>) -> Self {
        self.plural_placeholders = names;
        self
    }

    /// Set whether the backend renders plurals natively
    #[must_use]
    pub const fn with_native_plurals(mut self, native: bool) -> Self {
        self.native_plurals = native;
        self
    }
}

/// Normalize, validate and extract one message.
///
/// Locales are visited in configured order, then any extra locales in
/// lexicographic order; field identities merge in first-seen order across
/// that walk. Every form of a plural map is validated and scanned.
pub fn compile_message(raw: RawMessage, locales: &[String]) -> CompileResult<MessageSource> {
    let RawMessage { id, templates } = raw;

    let mut order: Vec<&String> = locales.iter().filter(|l| templates.contains_key(*l)).collect();
    order.extend(templates.keys().filter(|l| !locales.contains(l)));

    let mut references = Vec::new();
    let mut flat = BTreeMap::new();

    for locale in order {
        let normalized = normalize(templates[locale].clone());

        validate_template(&id, locale, &normalized.flat)?;
        references.extend(extract_fields(&normalized.flat));

        if normalized.raw.is_plural() {
            for form in normalized.raw.forms() {
                validate_template(&id, locale, form)?;
                references.extend(extract_fields(form));
            }
        }

        flat.insert(locale.clone(), normalized.flat);
    }

    Ok(MessageSource {
        id,
        raw: templates,
        flat,
        fields: unique_fields(references),
    })
}

/// Resolve compiled messages against the placeholder catalog and build the
/// IR, sorted by message id and placeholder type name.
pub fn assemble(
    mut messages: Vec<MessageSource>,
    placeholders: &[PlaceholderSource],
    options: &AssembleOptions,
) -> CompileResult<Definitions> {
    let primary = options.locales.first().map_or("", String::as_str);
    let mut catalog = PlaceholderCatalog::new(placeholders, primary)?;
    let detector = PluralDetector::new(&options.plural_placeholders, options.native_plurals);

    // resolution order decides which spelling a synthesized kind keeps
    messages.sort_by(|a, b| a.id.cmp(&b.id));

    let mut by_id: HashMap<String, String> = HashMap::new();
    let mut by_struct: HashMap<String, String> = HashMap::new();
    let mut definitions = Vec::with_capacity(messages.len());

    for message in messages {
        let name = struct_name(&message.id);
        validate_identifier(IdentifierRole::MessageId, &name, None).map_err(|_| {
            CompileError::InvalidIdentifier {
                role: IdentifierRole::MessageId,
                name: message.id.clone(),
                context: None,
            }
        })?;

        if let Some(existing) = by_id.get(&message.id).or_else(|| by_struct.get(&name)) {
            return Err(CompileError::DuplicateMessage {
                message_id: message.id,
                existing_id: existing.clone(),
                struct_name: name,
            });
        }
        by_id.insert(message.id.clone(), message.id.clone());
        by_struct.insert(name.clone(), message.id.clone());

        definitions.push(build_message(message, name, &mut catalog, &detector)?);
    }

    Ok(Definitions {
        messages: definitions,
        placeholders: catalog.into_definitions(),
        locales: options.locales.clone(),
    })
}

fn build_message(
    message: MessageSource,
    struct_name: String,
    catalog: &mut PlaceholderCatalog,
    detector: &PluralDetector,
) -> CompileResult<MessageDefinition> {
    let info = detector.detect(&message);
    let context = format!("message '{}'", message.id);

    let mut fields: Vec<ResolvedField> = Vec::with_capacity(message.fields.len());
    // snake-case ident -> field path that claimed it
    let mut claimed: HashMap<String, String> = HashMap::new();
    for reference in &message.fields {
        let excluded = detector.excludes(&info, reference);
        let Some(resolved) = resolve_field(reference, catalog, &context, !excluded)? else {
            continue;
        };

        let path = reference.path();
        if let Some(existing) = claimed.insert(to_snake_case(&resolved.field_name), path.clone()) {
            return Err(CompileError::DuplicateFieldName {
                message_id: message.id,
                field: path,
                existing,
                field_name: resolved.field_name,
            });
        }
        fields.push(resolved);
    }

    let templates = message
        .flat
        .iter()
        .map(|(locale, flat)| (locale.clone(), rewrite_template(flat)))
        .collect();

    let raw_templates = message
        .raw
        .iter()
        .map(|(locale, raw)| (locale.clone(), raw.map_forms(rewrite_template)))
        .collect();

    let functions = message
        .raw
        .iter()
        .map(|(locale, raw)| (locale.clone(), function_chains(raw)))
        .filter(|(_, chains)| !chains.is_empty())
        .collect();

    Ok(MessageDefinition {
        id: message.id,
        struct_name,
        fields,
        templates,
        raw_templates,
        functions,
        count_aware: info.count_aware,
        plural_placeholder: info.placeholder,
    })
}

// Validates every field; only `keep` fields reach the catalog.
fn resolve_field(
    reference: &FieldReference,
    catalog: &mut PlaceholderCatalog,
    context: &str,
    keep: bool,
) -> CompileResult<Option<ResolvedField>> {
    let field_name = field_name(reference);
    let template_key = template_key(reference);

    for name in [&reference.base_name, &field_name, &template_key] {
        validate_identifier(IdentifierRole::Field, name, Some(context)).map_err(|_| {
            CompileError::InvalidIdentifier {
                role: IdentifierRole::Field,
                name: reference.path(),
                context: Some(context.to_string()),
            }
        })?;
    }

    if !keep {
        return Ok(None);
    }

    Ok(Some(ResolvedField {
        type_name: catalog.resolve(&reference.base_name),
        field_name,
        template_key,
        reference: reference.clone(),
    }))
}

// template key -> first non-empty function chain, across every form
fn function_chains(raw: &RawTemplate) -> BTreeMap<String, Vec<String>> {
    let mut chains = BTreeMap::new();
    for form in raw.forms() {
        for span in extract_field_spans(form) {
            if !span.reference.functions.is_empty() {
                chains
                    .entry(template_key(&span.reference))
                    .or_insert(span.reference.functions);
            }
        }
    }
    chains
}
