//! Fluent resource rendering and validation.
//!
//! Templates become Fluent patterns: literal text is escaped, field slots
//! become `{ $var }` and plural maps become a select expression over the
//! count variable. Every rendered resource is parsed back with
//! `fluent-syntax` and its variables checked before it leaves the emitter.

use crate::error::{EmitError, EmitResult};
use crate::template::{resolve_slot, segments, Segment, Slot};
use i18ngen_core::normalize::flattened_category;
use i18ngen_core::{MessageDefinition, RawTemplate};
use std::collections::{BTreeMap, BTreeSet};

use fluent_syntax::ast::{Entry, Expression, InlineExpression, Pattern, PatternElement};
use fluent_syntax::parser::parse;

const INDENT: &str = "    ";

/// Naming of one message's Fluent variables
pub trait VariableNames {
    /// Variable for a resolved field's template key
    fn field(&self, template_key: &str) -> Option<&str>;
    /// Variable carrying the count
    fn count(&self) -> &str;
}

/// Render one message as a Fluent entry for `locale`, from `raw`.
pub fn render_entry(
    id: &str,
    message: &MessageDefinition,
    locale: &str,
    raw: &RawTemplate,
    names: &impl VariableNames,
) -> EmitResult<String> {
    match raw {
        RawTemplate::Plain(template) => {
            let pattern = render_pattern(message, locale, template, names, 1)?;
            Ok(format!("{id} = {pattern}\n"))
        }
        RawTemplate::Plural(forms) => {
            let default = flattened_category(raw).unwrap_or("other");
            let mut out = format!("{id} =\n{INDENT}{{ ${} ->\n", names.count());
            for (category, template) in forms {
                let marker = if category == default { "*" } else { " " };
                let pattern = render_pattern(message, locale, template, names, 3)?;
                out.push_str(&format!("{INDENT}   {marker}[{category}] {pattern}\n"));
            }
            if forms.is_empty() {
                out.push_str(&format!("{INDENT}   *[other] {{ \"\" }}\n"));
            }
            out.push_str(&format!("{INDENT}}}\n"));
            Ok(out)
        }
    }
}

/// Render a template as a Fluent pattern.
///
/// Continuation lines are indented `depth` levels.
pub fn render_pattern(
    message: &MessageDefinition,
    locale: &str,
    template: &str,
    names: &impl VariableNames,
    depth: usize,
) -> EmitResult<String> {
    let mut pattern = String::new();

    for segment in segments(template) {
        match segment {
            Segment::Text(text) => pattern.push_str(&escape_text(text)),
            Segment::Field { key, .. } => {
                let variable = match resolve_slot(message, locale, &key)? {
                    Slot::Field(_) => names.field(&key).ok_or_else(|| {
                        EmitError::UnresolvedField {
                            message_id: message.id.clone(),
                            locale: locale.to_string(),
                            key: key.clone(),
                        }
                    })?,
                    Slot::Count => names.count(),
                };
                pattern.push_str(&format!("{{ ${variable} }}"));
            }
        }
    }

    Ok(layout_lines(&pattern, depth))
}

// Braces would open placeables; everything else is handled per line.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '{' => out.push_str("{ \"{\" }"),
            '}' => out.push_str("{ \"}\" }"),
            other => out.push(other),
        }
    }
    out
}

/// Fluent string literal for `text`
pub fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

// Spread a pattern over lines, protecting whitespace and characters Fluent
// would otherwise treat as syntax or strip.
fn layout_lines(pattern: &str, depth: usize) -> String {
    if pattern.is_empty() {
        return "{ \"\" }".to_string();
    }

    let indent = INDENT.repeat(depth);
    let lines: Vec<&str> = pattern.split('\n').collect();
    let last = lines.len() - 1;
    let mut out = String::with_capacity(pattern.len() + lines.len() * indent.len());

    for (i, line) in lines.iter().enumerate() {
        let protected = protect_line(line, i > 0, i == last);
        if i > 0 {
            out.push('\n');
            if !protected.is_empty() {
                out.push_str(&indent);
            }
        }
        out.push_str(&protected);
    }
    out
}

fn protect_line(line: &str, continuation: bool, last: bool) -> String {
    if line.is_empty() {
        return if continuation && !last {
            String::new()
        } else {
            "{ \"\" }".to_string()
        };
    }

    let body = line.trim_start_matches([' ', '\t']);
    let leading = &line[..line.len() - body.len()];
    let mut out = String::new();
    if !leading.is_empty() {
        out.push_str(&format!("{{ {} }}", string_literal(leading)));
    }

    let trimmed = body.trim_end_matches([' ', '\t']);
    let trailing = &body[trimmed.len()..];

    let mut rest = trimmed;
    if continuation && leading.is_empty() {
        if let Some(first) = rest.chars().next().filter(|c| matches!(c, '[' | '*' | '.')) {
            out.push_str(&format!("{{ {} }}", string_literal(&first.to_string())));
            rest = &rest[first.len_utf8()..];
        }
    }
    out.push_str(rest);

    if !trailing.is_empty() {
        out.push_str(&format!("{{ {} }}", string_literal(trailing)));
    }
    out
}

/// Parse `source` and collect each message's variables.
pub fn inspect_resource(
    locale: &str,
    source: &str,
) -> EmitResult<BTreeMap<String, BTreeSet<String>>> {
    let resource = parse(source).map_err(|(_, errors)| EmitError::InvalidFluent {
        locale: locale.to_string(),
        details: format!("{errors:?}"),
    })?;

    let mut messages = BTreeMap::new();
    for entry in resource.body {
        if let Entry::Message(message) = entry {
            let mut params = BTreeSet::new();
            if let Some(Pattern { elements }) = &message.value {
                collect_pattern(elements, &mut params);
            }
            for attribute in &message.attributes {
                collect_pattern(&attribute.value.elements, &mut params);
            }
            messages.insert(message.id.name.to_string(), params);
        }
    }
    Ok(messages)
}

fn collect_pattern(elements: &[PatternElement<&str>], params: &mut BTreeSet<String>) {
    for element in elements {
        if let PatternElement::Placeable { expression } = element {
            collect_expression(expression, params);
        }
    }
}

fn collect_expression(expression: &Expression<&str>, params: &mut BTreeSet<String>) {
    match expression {
        Expression::Select { selector, variants } => {
            collect_inline(selector, params);
            for variant in variants {
                collect_pattern(&variant.value.elements, params);
            }
        }
        Expression::Inline(inline) => collect_inline(inline, params),
    }
}

fn collect_inline(expression: &InlineExpression<&str>, params: &mut BTreeSet<String>) {
    match expression {
        InlineExpression::VariableReference { id } => {
            params.insert(id.name.to_string());
        }
        InlineExpression::FunctionReference { arguments, .. } => {
            for arg in &arguments.positional {
                collect_inline(arg, params);
            }
            for arg in &arguments.named {
                collect_inline(&arg.value, params);
            }
        }
        InlineExpression::Placeable { expression } => collect_expression(expression, params),
        InlineExpression::MessageReference { .. }
        | InlineExpression::TermReference { .. }
        | InlineExpression::StringLiteral { .. }
        | InlineExpression::NumberLiteral { .. } => {}
    }
}
