//! Rust rendering shared by both emitters: placeholder types, module
//! preamble and message struct declarations.

use crate::emitter::GENERATED_HEADER;
use crate::template::{title_helper_source, uses_title};
use crate::writer::{rust_string, CodeWriter};
use i18ngen_common::to_snake_case;
use i18ngen_core::ident::escape_reserved;
use i18ngen_core::{
    Definitions, MessageDefinition, PlaceholderClass, PlaceholderDefinition, PlaceholderItem,
    ResolvedField,
};

/// Rust field identifier for a resolved field (`NameUser` -> `name_user`).
pub fn field_ident(field: &ResolvedField) -> String {
    escape_reserved(&to_snake_case(&field.field_name))
}

/// Header, lint allowances and locale constants.
pub fn write_preamble(w: &mut CodeWriter, defs: &Definitions, imports: &[&str]) {
    w.line(format!("// {GENERATED_HEADER}"));
    w.line("#![allow(dead_code, unused_imports, clippy::all, clippy::pedantic)]");
    w.blank();
    for import in imports {
        w.line(format!("use {import};"));
    }
    if !imports.is_empty() {
        w.blank();
    }

    let locales = defs
        .locales
        .iter()
        .map(|l| rust_string(l))
        .collect::<Vec<_>>()
        .join(", ");
    w.doc("Locales this module was generated for, primary first.");
    w.line(format!("pub const LOCALES: &[&str] = &[{locales}];"));
    w.blank();
    w.doc("Locale used when a requested locale has no translation.");
    w.line(format!(
        "pub const PRIMARY_LOCALE: &str = {};",
        rust_string(defs.primary_locale())
    ));
    w.blank();

    if uses_title(&defs.messages) {
        w.line(title_helper_source());
    }
}

/// Every placeholder type, in IR order.
pub fn write_placeholders(w: &mut CodeWriter, defs: &Definitions) {
    for placeholder in &defs.placeholders {
        match placeholder.class {
            PlaceholderClass::Text => write_text_enum(w, placeholder, defs.primary_locale()),
            PlaceholderClass::Value => write_value_newtype(w, placeholder),
        }
        w.blank();
    }
}

// Text to render when `locale` has no entry: primary text, else the first
// text in locale order, else the id.
fn fallback_text<'a>(item: &'a PlaceholderItem, preferred: &[&str]) -> &'a str {
    preferred
        .iter()
        .find_map(|locale| item.text(locale))
        .or_else(|| item.texts.values().next().map(String::as_str))
        .unwrap_or(&item.id)
}

fn write_text_enum(w: &mut CodeWriter, placeholder: &PlaceholderDefinition, primary: &str) {
    let name = &placeholder.type_name;

    w.doc(&format!("Localized `{}` placeholder.", placeholder.kind));
    w.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
    w.open(format!("pub enum {name} {{"));
    for item in &placeholder.items {
        w.line(format!("{},", item.variant_name));
    }
    w.close("}");
    w.blank();

    w.open(format!("impl {name} {{"));
    let variants = placeholder
        .items
        .iter()
        .map(|item| format!("Self::{}", item.variant_name))
        .collect::<Vec<_>>()
        .join(", ");
    w.doc("Every item, in declaration order.");
    w.line(format!("pub const ALL: &'static [Self] = &[{variants}];"));
    w.blank();

    w.doc("Item id as written in the source files.");
    w.open("pub const fn id(self) -> &'static str {");
    w.open("match self {");
    for item in &placeholder.items {
        w.line(format!("Self::{} => {},", item.variant_name, rust_string(&item.id)));
    }
    w.close("}");
    w.close("}");
    w.blank();

    w.doc("Text for `locale`, falling back to the primary locale.");
    w.open("pub fn localize(self, locale: &str) -> &'static str {");
    w.open("match self {");
    for item in &placeholder.items {
        let fallback = fallback_text(item, &[primary]);
        w.open(format!("Self::{} => match locale {{", item.variant_name));
        for (locale, text) in &item.texts {
            if locale != primary {
                w.line(format!("{} => {},", rust_string(locale), rust_string(text)));
            }
        }
        w.line(format!("_ => {},", rust_string(fallback)));
        w.close("},");
    }
    w.close("}");
    w.close("}");
    w.close("}");
}

fn write_value_newtype(w: &mut CodeWriter, placeholder: &PlaceholderDefinition) {
    let name = &placeholder.type_name;

    w.doc(&format!("Caller-supplied `{}` value.", placeholder.kind));
    w.line("#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]");
    w.line(format!("pub struct {name}(pub String);"));
    w.blank();

    w.open(format!("impl {name} {{"));
    w.open("pub fn new(value: impl ToString) -> Self {");
    w.line("Self(value.to_string())");
    w.close("}");
    w.blank();
    w.doc("Values render the same in every locale.");
    w.open("pub fn localize(&self, _locale: &str) -> &str {");
    w.line("&self.0");
    w.close("}");
    w.close("}");
    w.blank();

    w.open(format!("impl From<&str> for {name} {{"));
    w.open("fn from(value: &str) -> Self {");
    w.line("Self(value.to_string())");
    w.close("}");
    w.close("}");
    w.blank();

    w.open(format!("impl From<String> for {name} {{"));
    w.open("fn from(value: String) -> Self {");
    w.line("Self(value)");
    w.close("}");
    w.close("}");
    w.blank();

    w.open(format!("impl std::fmt::Display for {name} {{"));
    w.open("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
    w.line("f.write_str(&self.0)");
    w.close("}");
    w.close("}");
}

/// A field of a generated message struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    /// Rust identifier
    pub ident: String,
    /// Rust type
    pub ty: String,
}

impl StructField {
    /// Struct fields for a message's resolved fields
    pub fn for_message(message: &MessageDefinition) -> Vec<Self> {
        message
            .fields
            .iter()
            .map(|field| Self {
                ident: field_ident(field),
                ty: field.type_name.clone(),
            })
            .collect()
    }
}

/// Struct declaration plus `ID` and `new`.
///
/// The `impl` block is left open for the caller's methods.
pub fn write_message_struct(
    w: &mut CodeWriter,
    message: &MessageDefinition,
    fields: &[StructField],
    id: &str,
) {
    let name = &message.struct_name;
    let derives = if fields.is_empty() {
        "Debug, Clone, Copy, Default, PartialEq, Eq"
    } else {
        "Debug, Clone, PartialEq, Eq"
    };

    if let Some(template) = message.templates.values().next() {
        w.doc(&format!("`{}`: {}", message.id, template.replace('\n', " ")));
    }
    w.line(format!("#[derive({derives})]"));
    if fields.is_empty() {
        w.line(format!("pub struct {name};"));
    } else {
        w.open(format!("pub struct {name} {{"));
        for field in fields {
            w.line(format!("pub {}: {},", field.ident, field.ty));
        }
        w.close("}");
    }
    w.blank();

    w.open(format!("impl {name} {{"));
    w.line(format!("pub const ID: &'static str = {};", rust_string(id)));
    w.blank();

    let params = fields
        .iter()
        .map(|f| format!("{}: {}", f.ident, f.ty))
        .collect::<Vec<_>>()
        .join(", ");
    w.open(format!("pub fn new({params}) -> Self {{"));
    if fields.is_empty() {
        w.line("Self");
    } else {
        let idents = fields.iter().map(|f| f.ident.as_str()).collect::<Vec<_>>();
        w.line(format!("Self {{ {} }}", idents.join(", ")));
    }
    w.close("}");
}
