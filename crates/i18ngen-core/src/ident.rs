//! Identifier derivation for generated code and rewritten templates.

use crate::extract::extract_field_spans;
use crate::ir::PlaceholderClass;
use crate::model::FieldReference;
use i18ngen_common::{starts_with_digit, to_camel_case};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Prefix for struct names derived from ids that start with a digit.
pub const DIGIT_PREFIX: &str = "Msg";

static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // strict
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while",
        // reserved
        "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
        "typeof", "unsized", "virtual", "yield",
        // weak
        "union",
    ]
    .into_iter()
    .collect()
});

/// Whether `name` is a Rust keyword that cannot be used as an identifier.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(name)
}

/// Append `_` to `name` when it is a Rust keyword.
pub fn escape_reserved(name: &str) -> String {
    if is_reserved(name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

/// `CamelCase(base) + CamelCase(suffix)`, keyword-escaped.
///
/// ```
/// use i18ngen_core::ident::field_name;
/// use i18ngen_core::FieldReference;
///
/// assert_eq!(field_name(&FieldReference::new("email_address")), "EmailAddress");
/// assert_eq!(
///     field_name(&FieldReference::with_suffix("entity", "from_location")),
///     "EntityFromLocation"
/// );
/// ```
pub fn field_name(reference: &FieldReference) -> String {
    let mut name = to_camel_case(&reference.base_name);
    if let Some(suffix) = &reference.suffix {
        name.push_str(&to_camel_case(suffix));
    }
    escape_reserved(&name)
}

/// `base + CamelCase(suffix)`: the key a rewritten template refers to.
pub fn template_key(reference: &FieldReference) -> String {
    match &reference.suffix {
        Some(suffix) => format!("{}{}", reference.base_name, to_camel_case(suffix)),
        None => reference.base_name.clone(),
    }
}

/// Struct name for a message id.
pub fn struct_name(message_id: &str) -> String {
    let name = to_camel_case(message_id);
    if starts_with_digit(&name) {
        format!("{DIGIT_PREFIX}{name}")
    } else {
        escape_reserved(&name)
    }
}

/// Type name for a placeholder kind of the given class.
pub fn type_name(kind: &str, class: PlaceholderClass) -> String {
    format!("{}{}", to_camel_case(kind), class.type_suffix())
}

/// Enum variant name for a placeholder item.
pub fn variant_name(item_id: &str) -> String {
    escape_reserved(&to_camel_case(item_id))
}

/// Rewrite every suffixed field in `template` to its template key.
///
/// The function chain is kept, re-rendered as ` | fn | fn`. Unsuffixed
/// fields and every other byte of the template are left as authored.
pub fn rewrite_template(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;

    for span in extract_field_spans(template) {
        if !span.reference.has_suffix() {
            continue;
        }
        out.push_str(&template[cursor..span.range.start]);
        out.push_str(&render_field(
            &template_key(&span.reference),
            &span.reference.functions,
        ));
        cursor = span.range.end;
    }

    out.push_str(&template[cursor..]);
    out
}

fn render_field(key: &str, functions: &[String]) -> String {
    if functions.is_empty() {
        format!("{{{{.{key}}}}}")
    } else {
        format!("{{{{.{key} | {}}}}}", functions.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_combine_base_and_suffix() {
        assert_eq!(field_name(&FieldReference::new("email_address")), "EmailAddress");
        assert_eq!(
            field_name(&FieldReference::with_suffix("entity", "from_location")),
            "EntityFromLocation"
        );
        assert_eq!(field_name(&FieldReference::with_suffix("name", "user")), "NameUser");
    }

    #[test]
    fn template_keys_keep_base_case() {
        assert_eq!(template_key(&FieldReference::with_suffix("entity", "from")), "entityFrom");
        assert_eq!(template_key(&FieldReference::new("reason")), "reason");
        assert_eq!(template_key(&FieldReference::new("Count")), "Count");
    }

    #[test]
    fn struct_names() {
        assert_eq!(struct_name("EntityNotFound"), "EntityNotFound");
        assert_eq!(struct_name("entity_not_found"), "EntityNotFound");
        assert_eq!(struct_name("404_error"), "Msg404Error");
    }

    #[test]
    fn reserved_words_are_escaped() {
        assert!(is_reserved("type"));
        assert!(!is_reserved("kind"));
        assert_eq!(escape_reserved("type"), "type_");
        assert_eq!(struct_name("self"), "Self_");
        assert_eq!(field_name(&FieldReference::new("self")), "Self_");
        assert_eq!(variant_name("match"), "Match");
    }

    #[test]
    fn type_names_follow_class() {
        assert_eq!(type_name("entity", PlaceholderClass::Text), "EntityText");
        assert_eq!(type_name("reason", PlaceholderClass::Value), "ReasonValue");
        assert_eq!(type_name("order_status", PlaceholderClass::Text), "OrderStatusText");
    }

    #[test]
    fn rewrite_touches_only_suffixed_fields() {
        assert_eq!(
            rewrite_template("{{.name:user}}さん、{{.name:owner}}さん"),
            "{{.nameUser}}さん、{{.nameOwner}}さん"
        );
        assert_eq!(
            rewrite_template("{{ .entity }} moved {{ .entity : from }}"),
            "{{ .entity }} moved {{.entityFrom}}"
        );
        assert_eq!(rewrite_template("no fields"), "no fields");
    }

    #[test]
    fn rewrite_preserves_function_chains() {
        assert_eq!(
            rewrite_template("{{.name:user|title |upper}}!"),
            "{{.nameUser | title | upper}}!"
        );
    }
}
