//! Splitting rewritten templates into literal text and field slots.

use crate::error::{EmitError, EmitResult};
use i18ngen_core::extract::extract_field_spans;
use i18ngen_core::ident::template_key;
use i18ngen_core::{MessageDefinition, ResolvedField};
use tracing::warn;

/// One piece of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied verbatim, including `{{…}}` expressions that are not fields
    Text(&'a str),
    /// A field slot
    Field {
        /// Template key the slot refers to
        key: String,
        /// Function chain written in the slot
        functions: Vec<String>,
    },
}

/// Split `template` into literal and field segments, in order.
pub fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0;

    for span in extract_field_spans(template) {
        if span.range.start > cursor {
            out.push(Segment::Text(&template[cursor..span.range.start]));
        }
        out.push(Segment::Field {
            key: template_key(&span.reference),
            functions: span.reference.functions,
        });
        cursor = span.range.end;
    }

    if cursor < template.len() {
        out.push(Segment::Text(&template[cursor..]));
    }
    out
}

/// What a field slot renders from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    /// A resolved field of the message
    Field(&'a ResolvedField),
    /// The count of a count-aware message
    Count,
}

/// Resolve a template key against `message`.
///
/// Keys excluded from the fields of a count-aware message are its plural
/// placeholder and render from the count.
pub fn resolve_slot<'a>(
    message: &'a MessageDefinition,
    locale: &str,
    key: &str,
) -> EmitResult<Slot<'a>> {
    if let Some(field) = message.fields.iter().find(|f| f.template_key == key) {
        return Ok(Slot::Field(field));
    }
    if message.count_aware {
        return Ok(Slot::Count);
    }
    Err(EmitError::UnresolvedField {
        message_id: message.id.clone(),
        locale: locale.to_string(),
        key: key.to_string(),
    })
}

/// Text functions the generated code knows how to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFunction {
    /// `upper`
    Upper,
    /// `lower`
    Lower,
    /// `title`: uppercase the first character
    Title,
    /// `trim`
    Trim,
}

impl TextFunction {
    /// Parse a function name; unknown names yield `None`
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "upper" => Some(Self::Upper),
            "lower" => Some(Self::Lower),
            "title" => Some(Self::Title),
            "trim" => Some(Self::Trim),
            _ => None,
        }
    }
}

/// Name of the helper the generated module defines for [`TextFunction::Title`].
pub const TITLE_HELPER: &str = "title_case";

/// Wrap the Rust expression `expr` (a `&str` or `String`) in `functions`.
///
/// Returns the new expression and whether it evaluates to an owned `String`.
/// Unknown functions are skipped with a warning.
pub fn apply_functions(expr: String, functions: &[String], message_id: &str) -> (String, bool) {
    let mut expr = expr;
    let mut owned = false;

    for name in functions {
        let Some(function) = TextFunction::parse(name) else {
            warn!(message_id, function = %name, "Unknown template function ignored");
            continue;
        };
        (expr, owned) = match function {
            TextFunction::Upper => (format!("{expr}.to_uppercase()"), true),
            TextFunction::Lower => (format!("{expr}.to_lowercase()"), true),
            TextFunction::Title => (format!("{TITLE_HELPER}(&{expr})"), true),
            TextFunction::Trim => (format!("{expr}.trim()"), false),
        };
    }

    (expr, owned)
}

/// Whether any template of any message uses `title`
pub fn uses_title<'a>(messages: impl IntoIterator<Item = &'a MessageDefinition>) -> bool {
    messages.into_iter().any(|message| {
        message
            .functions
            .values()
            .flat_map(|by_key| by_key.values())
            .flatten()
            .any(|name| TextFunction::parse(name) == Some(TextFunction::Title))
    })
}

/// Source of the `title_case` helper emitted into generated modules.
pub fn title_helper_source() -> String {
    format!(
        "fn {TITLE_HELPER}(text: &str) -> String {{\n    \
         let mut chars = text.chars();\n    \
         match chars.next() {{\n        \
         Some(first) => first.to_uppercase().chain(chars).collect(),\n        \
         None => String::new(),\n    \
         }}\n}}\n"
    )
}
