//! Per-template safety checks and identifier validation.

use crate::error::{CompileError, CompileResult, Complexity, IdentifierRole};
use crate::extract::extract_fields;
use i18ngen_common::is_valid_identifier;

/// Maximum brace nesting depth in one template.
pub const MAX_NESTING_DEPTH: usize = 5;

/// Maximum number of `{{` occurrences in one template.
pub const MAX_PLACEHOLDERS: usize = 20;

/// Validate one locale's template of one message.
///
/// Runs before suffix rewriting. Fails on the first unsuffixed field that
/// repeats, then on the nesting and placeholder-count bounds.
pub fn validate_template(message_id: &str, locale: &str, template: &str) -> CompileResult<()> {
    check_duplicates(message_id, locale, template)?;
    check_complexity(message_id, locale, template)
}

fn check_duplicates(message_id: &str, locale: &str, template: &str) -> CompileResult<()> {
    // (name, count) in first-seen order
    let mut counts: Vec<(String, usize)> = Vec::new();

    for field in extract_fields(template).into_iter().filter(|f| !f.has_suffix()) {
        match counts.iter_mut().find(|(name, _)| *name == field.base_name) {
            Some((_, count)) => *count += 1,
            None => counts.push((field.base_name, 1)),
        }
    }

    match counts.into_iter().find(|(_, count)| *count > 1) {
        Some((field, occurrences)) => Err(CompileError::DuplicatePlaceholder {
            message_id: message_id.to_string(),
            locale: locale.to_string(),
            field,
            occurrences,
        }),
        None => Ok(()),
    }
}

fn check_complexity(message_id: &str, locale: &str, template: &str) -> CompileResult<()> {
    let too_complex = |reason| CompileError::TemplateTooComplex {
        message_id: message_id.to_string(),
        locale: locale.to_string(),
        reason,
    };

    let depth = nesting_depth(template);
    if depth > MAX_NESTING_DEPTH {
        return Err(too_complex(Complexity::NestingDepth {
            depth,
            max: MAX_NESTING_DEPTH,
        }));
    }

    let count = template.matches("{{").count();
    if count > MAX_PLACEHOLDERS {
        return Err(too_complex(Complexity::PlaceholderCount {
            count,
            max: MAX_PLACEHOLDERS,
        }));
    }

    Ok(())
}

/// Deepest brace nesting reached while scanning left to right.
///
/// Every `{` opens a level and every `}` closes one; stray closers may drive
/// the running depth below zero without resetting the maximum.
pub fn nesting_depth(template: &str) -> usize {
    let mut current: i64 = 0;
    let mut deepest: i64 = 0;

    for c in template.chars() {
        match c {
            '{' => {
                current += 1;
                deepest = deepest.max(current);
            }
            '}' => current -= 1,
            _ => {}
        }
    }

    usize::try_from(deepest).unwrap_or(0)
}

/// Ensure `name` can become a generated identifier.
pub fn validate_identifier(
    role: IdentifierRole,
    name: &str,
    context: Option<&str>,
) -> CompileResult<()> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(CompileError::InvalidIdentifier {
            role,
            name: name.to_string(),
            context: context.map(str::to_string),
        })
    }
}
