//! Self-contained Rust backend.
//!
//! Every message renders through `format!`, one arm per locale. Plural maps
//! are rendered from their flattened form since this backend has no plural
//! selection.

use crate::emitter::{EmitContext, Emitter, GeneratedFile};
use crate::error::{EmitError, EmitResult};
use crate::template::{apply_functions, resolve_slot, segments, Segment, Slot};
use crate::types::{
    field_ident, write_message_struct, write_placeholders, write_preamble, StructField,
};
use crate::writer::{rust_string, CodeWriter};
use i18ngen_core::{Definitions, MessageDefinition};
use tracing::{debug, info};

/// Emits a single Rust module with no runtime dependencies
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainEmitter;

impl PlainEmitter {
    /// Create the emitter
    pub const fn new() -> Self {
        Self
    }
}

impl Emitter for PlainEmitter {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn supports_plurals(&self) -> bool {
        false
    }

    fn emit(&self, defs: &Definitions, ctx: &EmitContext) -> EmitResult<Vec<GeneratedFile>> {
        if defs.locales.is_empty() {
            return Err(EmitError::NoLocales);
        }

        let mut w = CodeWriter::new();
        write_preamble(&mut w, defs, &[]);
        write_placeholders(&mut w, defs);

        for message in &defs.messages {
            write_message(&mut w, message, defs.primary_locale())?;
            w.blank();
        }

        let file = GeneratedFile::new(ctx.module_file(), w.finish());
        info!(
            module = %ctx.module_name,
            messages = defs.messages.len(),
            placeholders = defs.placeholders.len(),
            "Rendered plain Rust module"
        );
        Ok(vec![file])
    }
}

fn write_message(w: &mut CodeWriter, message: &MessageDefinition, primary: &str) -> EmitResult<()> {
    let fields = StructField::for_message(message);
    write_message_struct(w, message, &fields, &message.id);
    w.blank();

    let fallback = fallback_locale(message, primary);
    let mut arms = Vec::new();
    for locale in message.templates.keys() {
        if Some(locale.as_str()) != fallback {
            arms.push((locale.as_str(), render_locale(message, locale)?));
        }
    }
    let default = match fallback {
        Some(locale) => render_locale(message, locale)?,
        None => "String::new()".to_string(),
    };
    debug!(message_id = %message.id, locales = arms.len() + 1, "Rendered message");

    w.doc("Render in `locale`, falling back to the primary locale.");
    if arms.is_empty() {
        w.open("pub fn localize(&self, _locale: &str) -> String {");
        w.line(&default);
    } else {
        w.open("pub fn localize(&self, locale: &str) -> String {");
        w.open("match locale {");
        for (locale, expr) in &arms {
            w.line(format!("{} => {expr},", rust_string(locale)));
        }
        w.line(format!("_ => {default},"));
        w.close("}");
    }
    w.close("}");
    w.close("}");
    w.blank();

    w.open(format!("impl std::fmt::Display for {} {{", message.struct_name));
    w.open("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
    w.line("f.write_str(&self.localize(PRIMARY_LOCALE))");
    w.close("}");
    w.close("}");
    Ok(())
}

// Locale whose template the `_` arm renders.
fn fallback_locale<'a>(message: &'a MessageDefinition, primary: &str) -> Option<&'a str> {
    message
        .templates
        .get_key_value(primary)
        .or_else(|| message.templates.iter().next())
        .map(|(locale, _)| locale.as_str())
}

/// The `format!` expression rendering `message` in `locale`.
pub fn render_locale(message: &MessageDefinition, locale: &str) -> EmitResult<String> {
    let template = message.templates.get(locale).map_or("", String::as_str);
    let locale_literal = rust_string(locale);

    let mut format = String::with_capacity(template.len());
    let mut args = Vec::new();

    for segment in segments(template) {
        match segment {
            Segment::Text(text) => format.push_str(&text.replace('{', "{{").replace('}', "}}")),
            Segment::Field { key, functions } => {
                let Slot::Field(field) = resolve_slot(message, locale, &key)? else {
                    // a native-plural IR has no count field for this backend
                    return Err(EmitError::UnresolvedField {
                        message_id: message.id.clone(),
                        locale: locale.to_string(),
                        key,
                    });
                };
                let expr = format!("self.{}.localize({locale_literal})", field_ident(field));
                args.push(apply_functions(expr, &functions, &message.id).0);
                format.push_str("{}");
            }
        }
    }

    if args.is_empty() {
        return Ok(format!("{}.to_string()", rust_string(template)));
    }
    Ok(format!("format!({}, {})", rust_string(&format), args.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18ngen_core::{assemble, compile_message, AssembleOptions, RawMessage, RawTemplate};
    use pretty_assertions::assert_eq;

    fn defs(messages: Vec<RawMessage>) -> Definitions {
        let locales = vec!["ja".to_string(), "en".to_string()];
        let compiled = messages
            .into_iter()
            .map(|m| compile_message(m, &locales).unwrap())
            .collect();
        let options = AssembleOptions::new(locales).with_native_plurals(false);
        assemble(compiled, &[], &options).unwrap()
    }

    #[test]
    fn renders_format_per_locale() {
        let defs = defs(vec![RawMessage::new("Greeting")
            .with_template("ja", RawTemplate::plain("{{.name:user}}さん"))
            .with_template("en", RawTemplate::plain("Hello {{.name:user | upper}} {braces}"))]);
        let message = &defs.messages[0];

        assert_eq!(
            render_locale(message, "en").unwrap(),
            r#"format!("Hello {} {{braces}}", self.name_user.localize("en").to_uppercase())"#
        );
        assert_eq!(
            render_locale(message, "ja").unwrap(),
            r#"format!("{}さん", self.name_user.localize("ja"))"#
        );
    }

    #[test]
    fn fieldless_messages_are_literals() {
        let defs = defs(vec![
            RawMessage::new("Bye").with_template("en", RawTemplate::plain("Bye {for now}"))
        ]);
        assert_eq!(
            render_locale(&defs.messages[0], "en").unwrap(),
            r#""Bye {for now}".to_string()"#
        );
    }

    #[test]
    fn module_has_fallback_arm() {
        let defs = defs(vec![RawMessage::new("Welcome")
            .with_template("ja", RawTemplate::plain("ようこそ {{.name}}"))
            .with_template("en", RawTemplate::plain("Welcome {{.name}}"))]);
        let files = PlainEmitter::new()
            .emit(&defs, &EmitContext::new("i18n"))
            .unwrap();

        assert_eq!(files.len(), 1);
        let source = &files[0].contents;
        assert!(source.starts_with("// Code generated by i18ngen. DO NOT EDIT.\n"));
        assert!(source.contains("pub struct NameValue(pub String);"));
        assert!(source.contains("pub struct Welcome {\n    pub name: NameValue,\n}"));
        assert!(source.contains(r#""en" => format!("Welcome {}", self.name.localize("en")),"#));
        assert!(source.contains(r#"_ => format!("ようこそ {}", self.name.localize("ja")),"#));
    }

    #[test]
    fn plurals_render_flattened() {
        let defs = defs(vec![RawMessage::new("Files").with_template(
            "en",
            RawTemplate::plural([("one", "{{.Count}} file"), ("other", "{{.Count}} files")]),
        )]);
        let message = &defs.messages[0];
        assert!(message.count_aware);
        assert_eq!(
            render_locale(message, "en").unwrap(),
            r#"format!("{} files", self.count.localize("en"))"#
        );
    }

    #[test]
    fn empty_locales_are_rejected() {
        let err = PlainEmitter::new()
            .emit(&Definitions::default(), &EmitContext::new("i18n"))
            .unwrap_err();
        assert!(matches!(err, EmitError::NoLocales));
    }
}
