//! Field extraction from template strings.
//!
//! Exactly one grammar is recognized: `{{.name}}`, `{{.name:suffix}}`, and
//! either form followed by a `|`-separated function chain. Any other `{{…}}`
//! expression is left alone, and an unterminated `{{` ends the scan.

use crate::model::FieldReference;
use std::collections::HashSet;
use std::ops::Range;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A field reference together with the byte range of its `{{…}}` expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpan {
    /// The parsed reference
    pub reference: FieldReference,
    /// Byte range covering the braces
    pub range: Range<usize>,
}

/// Extract every field reference from `template`, in order, duplicates kept.
pub fn extract_fields(template: &str) -> Vec<FieldReference> {
    extract_field_spans(template)
        .into_iter()
        .map(|span| span.reference)
        .collect()
}

/// Extract every field reference from `template` along with its location.
pub fn extract_field_spans(template: &str) -> Vec<FieldSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(open) = template[cursor..].find(OPEN) {
        let start = cursor + open;
        let inner_start = start + OPEN.len();
        let Some(close) = template[inner_start..].find(CLOSE) else {
            break;
        };
        let inner_end = inner_start + close;
        let end = inner_end + CLOSE.len();

        if let Some(reference) = parse_expression(&template[inner_start..inner_end]) {
            spans.push(FieldSpan {
                reference,
                range: start..end,
            });
        }

        cursor = end;
    }

    spans
}

/// Deduplicate references by identity, keeping the first occurrence.
pub fn unique_fields<I>(references: I) -> Vec<FieldReference>
where
    I: IntoIterator<Item = FieldReference>,
{
    let mut seen = HashSet::new();
    references
        .into_iter()
        .filter(|reference| seen.insert(reference.clone()))
        .collect()
}

// Parse the text between the braces. Returns None for anything that is not
// a field reference.
fn parse_expression(expression: &str) -> Option<FieldReference> {
    let path_and_chain = expression.trim().strip_prefix('.')?;

    let (path, chain) = match path_and_chain.split_once('|') {
        Some((path, chain)) => (path, Some(chain)),
        None => (path_and_chain, None),
    };

    let (base, suffix) = match path.split_once(':') {
        Some((base, suffix)) => (base.trim(), Some(suffix.trim())),
        None => (path.trim(), None),
    };

    if base.is_empty() {
        return None;
    }

    let functions = chain
        .map(|chain| {
            chain
                .split('|')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(FieldReference {
        base_name: base.to_string(),
        suffix: suffix.filter(|s| !s.is_empty()).map(str::to_string),
        functions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn plain_text_has_no_fields() {
        assert!(extract_fields("").is_empty());
        assert!(extract_fields("Hello, world").is_empty());
        assert!(extract_fields("{ single } braces").is_empty());
    }

    #[test]
    fn extracts_in_order_with_duplicates() {
        let fields = extract_fields("{{.b}} {{.a}} {{.b}}");
        let names: Vec<_> = fields.iter().map(|f| f.base_name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
    }

    #[test]
    fn suffix_creates_distinct_identity() {
        let fields = extract_fields("{{.x}} {{.x:y}}");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].identity(), ("x", None));
        assert_eq!(fields[1].identity(), ("x", Some("y")));
    }

    #[test]
    fn whitespace_is_trimmed_everywhere() {
        let fields = extract_fields("{{ .entity : from }} and {{  .reason  }}");
        assert_eq!(fields[0], FieldReference::with_suffix("entity", "from"));
        assert_eq!(fields[1], FieldReference::new("reason"));
    }

    #[test]
    fn function_chain_is_split_and_stripped() {
        let fields = extract_fields("{{.name:user | title | upper}}");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].identity(), ("name", Some("user")));
        assert_eq!(fields[0].functions, vec!["title", "upper"]);
    }

    #[test]
    fn non_field_expressions_are_ignored() {
        let fields = extract_fields("{{if .x}}yes{{end}} {{ printf \"%d\" 3 }} {{.real}}");
        assert_eq!(fields, vec![FieldReference::new("real")]);
    }

    #[test]
    fn empty_names_are_ignored() {
        assert!(extract_fields("{{.}} {{ . | upper }} {{.:x}}").is_empty());
    }

    #[test]
    fn empty_suffix_is_no_suffix() {
        let fields = extract_fields("{{.name:}}");
        assert_eq!(fields[0].identity(), ("name", None));
    }

    #[test]
    fn unterminated_braces_stop_scanning() {
        let fields = extract_fields("{{.first}} then {{.broken and {{.never");
        assert_eq!(fields, vec![FieldReference::new("first")]);
    }

    #[test]
    fn spans_cover_the_braces() {
        let template = "Hi {{.name | upper}}!";
        let spans = extract_field_spans(template);
        assert_eq!(spans.len(), 1);
        assert_eq!(&template[spans[0].range.clone()], "{{.name | upper}}");
    }

    #[test]
    fn multibyte_text_is_handled() {
        let fields = extract_fields("{{.entity}}が見つかりません: {{.reason}}");
        let names: Vec<_> = fields.iter().map(|f| f.base_name.as_str()).collect();
        assert_eq!(names, vec!["entity", "reason"]);
    }

    #[test]
    fn unique_fields_keeps_first_seen_order() {
        let fields = unique_fields(extract_fields(
            "{{.b}} {{.a:x}} {{.b | upper}} {{.a}} {{.a:x}}",
        ));
        let identities: Vec<_> = fields.iter().map(FieldReference::identity).collect();
        assert_eq!(identities, vec![("b", None), ("a", Some("x")), ("a", None)]);
        // first occurrence wins, so the chain-less `b` is kept
        assert!(fields[0].functions.is_empty());
    }

    proptest! {
        #[test]
        fn text_without_braces_extracts_nothing(text in "[^{}]*") {
            prop_assert!(extract_fields(&text).is_empty());
        }

        #[test]
        fn extraction_is_idempotent(text in "[a-z .:|{}]{0,40}") {
            prop_assert_eq!(extract_field_spans(&text), extract_field_spans(&text));
        }

        #[test]
        fn single_field_round_trips(name in "[a-z_][a-z0-9_]{0,10}", suffix in proptest::option::of("[a-z0-9]{1,6}")) {
            let template = match &suffix {
                Some(s) => format!("text {{{{.{name}:{s}}}}} tail"),
                None => format!("text {{{{.{name}}}}} tail"),
            };
            let fields = extract_fields(&template);
            prop_assert_eq!(fields.len(), 1);
            prop_assert_eq!(fields[0].base_name.as_str(), name.as_str());
            prop_assert_eq!(fields[0].suffix.as_deref(), suffix.as_deref());
        }
    }
}
