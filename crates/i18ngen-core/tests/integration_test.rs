//! Integration tests for i18ngen-core crate.

use i18ngen_core::{
    assemble, compile_message, AssembleOptions, CompileError, Definitions, PlaceholderClass,
    PlaceholderSource, RawMessage, RawTemplate,
};
use pretty_assertions::assert_eq;

fn locales() -> Vec<String> {
    vec!["ja".to_string(), "en".to_string()]
}

fn entity_kind() -> PlaceholderSource {
    PlaceholderSource::new("entity")
        .with_text("user", "ja", "ユーザー")
        .with_text("user", "en", "User")
        .with_text("product", "ja", "製品")
        .with_text("product", "en", "Product")
}

fn build(messages: Vec<RawMessage>, placeholders: &[PlaceholderSource]) -> Definitions {
    let compiled = messages
        .into_iter()
        .map(|m| compile_message(m, &locales()))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assemble(compiled, placeholders, &AssembleOptions::new(locales())).unwrap()
}

#[test]
fn test_entity_not_found_end_to_end() {
    let message = RawMessage::new("EntityNotFound")
        .with_template("ja", RawTemplate::plain("{{.entity}}が見つかりません: {{.reason}}"))
        .with_template("en", RawTemplate::plain("{{.entity}} not found: {{.reason}}"));

    let defs = build(vec![message], &[entity_kind()]);
    let def = defs.message("EntityNotFound").unwrap();

    let fields: Vec<_> = def
        .fields
        .iter()
        .map(|f| (f.field_name.as_str(), f.type_name.as_str()))
        .collect();
    assert_eq!(fields, vec![("Entity", "EntityText"), ("Reason", "ReasonValue")]);

    let entity = defs.placeholder("EntityText").unwrap();
    assert_eq!(entity.kind, "entity");
    assert_eq!(entity.class, PlaceholderClass::Text);
    assert!(!entity.synthesized);

    let reason = defs.placeholder("ReasonValue").unwrap();
    assert_eq!(reason.class, PlaceholderClass::Value);
    assert!(reason.synthesized);
    assert_eq!(reason.items.len(), 1);
    assert_eq!(reason.items[0].id, "reason");

    // no suffixes, templates untouched
    assert_eq!(def.templates["en"], "{{.entity}} not found: {{.reason}}");
}

#[test]
fn test_suffixed_greeting_end_to_end() {
    let message = RawMessage::new("Greeting")
        .with_template("ja", RawTemplate::plain("{{.name:user}}さん、{{.name:owner}}さん"))
        .with_template("en", RawTemplate::plain("Hello {{.name:user}} and {{.name:owner}}"));

    let defs = build(vec![message], &[]);
    let def = &defs.messages[0];

    let names: Vec<_> = def.fields.iter().map(|f| f.field_name.as_str()).collect();
    assert_eq!(names, vec!["NameUser", "NameOwner"]);
    assert_eq!(def.templates["ja"], "{{.nameUser}}さん、{{.nameOwner}}さん");
    assert_eq!(def.templates["en"], "Hello {{.nameUser}} and {{.nameOwner}}");

    // both resolve to the one synthesized kind for `name`
    assert!(def.fields.iter().all(|f| f.type_name == "NameValue"));
    assert_eq!(defs.placeholders.len(), 1);
}

#[test]
fn test_item_id_usage_resolves_to_kind() {
    let message = RawMessage::new("UserOnly")
        .with_template("en", RawTemplate::plain("{{.user}} only"));
    let defs = build(vec![message], &[entity_kind()]);
    assert_eq!(defs.messages[0].fields[0].type_name, "EntityText");
    assert_eq!(defs.placeholders.len(), 1);
}

#[test]
fn test_output_is_deterministic_over_input_order() {
    let messages = || {
        vec![
            RawMessage::new("Zeta").with_template("en", RawTemplate::plain("{{.b}} {{.a}}")),
            RawMessage::new("Alpha").with_template("en", RawTemplate::plain("{{.entity}}")),
            RawMessage::new("Mid").with_template(
                "ja",
                RawTemplate::plural([("other", "{{.Count}}件"), ("one", "{{.Count}}件")]),
            ),
        ]
    };

    let forward = build(messages(), &[entity_kind()]);
    let mut reversed_input = messages();
    reversed_input.reverse();
    let reversed = build(reversed_input, &[entity_kind()]);

    assert_eq!(forward, reversed);

    let ids: Vec<_> = forward.messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["Alpha", "Mid", "Zeta"]);
    let types: Vec<_> = forward.placeholders.iter().map(|p| p.type_name.as_str()).collect();
    assert_eq!(types, vec!["AValue", "BValue", "EntityText"]);
}

#[test]
fn test_duplicate_placeholder_aborts_run() {
    let message = RawMessage::new("Transfer")
        .with_template("ja", RawTemplate::plain("{{.entity}}から{{.entity}}へ"));
    let err = compile_message(message, &locales()).unwrap_err();

    assert!(matches!(
        err,
        CompileError::DuplicatePlaceholder { ref field, occurrences: 2, .. } if field == "entity"
    ));
    assert!(err.to_string().contains("{{.entity:from}}"));
}

#[test]
fn test_plural_message_with_native_backend() {
    let message = RawMessage::new("ItemCount")
        .with_template("ja", RawTemplate::plain("{{.Count}}個のアイテム"))
        .with_template(
            "en",
            RawTemplate::plural([("one", "{{.Count}} item"), ("other", "{{.Count}} items")]),
        );

    let defs = build(vec![message], &[]);
    let def = &defs.messages[0];

    assert!(def.count_aware);
    assert!(def.fields.is_empty());
    assert_eq!(def.plural_placeholder.as_deref(), Some("Count"));
    assert_eq!(def.templates["en"], "{{.Count}} items");
    assert!(def.raw_templates["en"].is_plural());
    assert!(defs.placeholders.is_empty());
}

#[test]
fn test_configured_plural_names() {
    let message = RawMessage::new("Stock")
        .with_template("en", RawTemplate::plain("{{.quantity}} left"));
    let compiled = compile_message(message, &locales()).unwrap();
    let options =
        AssembleOptions::new(locales()).with_plural_placeholders(vec!["Quantity".to_string()]);

    let defs = assemble(vec![compiled], &[], &options).unwrap();
    assert!(defs.messages[0].count_aware);
    assert_eq!(defs.messages[0].plural_placeholder.as_deref(), Some("quantity"));
}

#[test]
fn test_invalid_placeholder_item_aborts_run() {
    let bad = PlaceholderSource::new("entity").with_text("bad-id", "en", "Bad");
    let message = RawMessage::new("M").with_template("en", RawTemplate::plain("x"));
    let compiled = compile_message(message, &locales()).unwrap();

    let err = assemble(vec![compiled], &[bad], &AssembleOptions::new(locales())).unwrap_err();
    assert!(err.to_string().contains("invalid placeholder item ID 'bad-id'"));
}
