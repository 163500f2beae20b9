//! Fluent backend: `.ftl` resources plus a typed Rust argument module.

use crate::emitter::{EmitContext, Emitter, GeneratedFile, GENERATED_HEADER};
use crate::error::{EmitError, EmitResult};
use crate::ftl::{inspect_resource, render_entry, VariableNames};
use crate::template::apply_functions;
use crate::types::{write_message_struct, write_placeholders, write_preamble, StructField};
use crate::writer::{rust_string, CodeWriter};
use i18ngen_common::to_kebab_case;
use i18ngen_core::{Definitions, MessageDefinition, RawTemplate};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// Name of the count field and variable on count-aware messages.
pub const COUNT_FIELD: &str = "count";

// Used instead when a message already has a field named `count`.
const COUNT_FIELD_FALLBACK: &str = "plural_count";

/// Emits one Fluent resource per locale and a Rust module producing
/// `fluent_bundle::FluentArgs` for each message
#[derive(Debug, Clone, Copy, Default)]
pub struct FluentEmitter;

impl FluentEmitter {
    /// Create the emitter
    pub const fn new() -> Self {
        Self
    }
}

impl Emitter for FluentEmitter {
    fn name(&self) -> &'static str {
        "fluent"
    }

    fn supports_plurals(&self) -> bool {
        true
    }

    fn emit(&self, defs: &Definitions, ctx: &EmitContext) -> EmitResult<Vec<GeneratedFile>> {
        if defs.locales.is_empty() {
            return Err(EmitError::NoLocales);
        }

        let plans = plan_messages(defs)?;
        let mut files = vec![GeneratedFile::new(
            ctx.module_file(),
            render_module(defs, ctx, &plans),
        )];

        for locale in &defs.locales {
            let source = render_resource(defs, locale, &plans)?;
            check_resource(locale, &source, &plans)?;
            debug!(locale = %locale, bytes = source.len(), "Rendered Fluent resource");
            files.push(GeneratedFile::new(ctx.resource_path(locale, "ftl"), source));
        }

        info!(
            module = %ctx.module_name,
            messages = plans.len(),
            locales = defs.locales.len(),
            "Rendered Fluent resources"
        );
        Ok(files)
    }
}

/// How one message maps onto Fluent
#[derive(Debug, Clone)]
pub struct MessagePlan<'a> {
    /// The message
    pub message: &'a MessageDefinition,
    /// Fluent message id (`EntityNotFound` -> `entity-not-found`)
    pub fluent_id: String,
    /// Struct fields, count field last
    pub fields: Vec<StructField>,
    /// template key -> Fluent variable
    pub variables: BTreeMap<String, String>,
    /// Count field, when count-aware
    pub count: Option<String>,
}

impl<'a> MessagePlan<'a> {
    /// Plan `message`
    pub fn new(message: &'a MessageDefinition) -> Self {
        let mut fields = StructField::for_message(message);
        let variables = message
            .fields
            .iter()
            .zip(&fields)
            .map(|(field, sf)| (field.template_key.clone(), sf.ident.clone()))
            .collect();

        let count = message.count_aware.then(|| {
            if fields.iter().any(|f| f.ident == COUNT_FIELD) {
                COUNT_FIELD_FALLBACK.to_string()
            } else {
                COUNT_FIELD.to_string()
            }
        });
        if let Some(ident) = &count {
            fields.push(StructField {
                ident: ident.clone(),
                ty: "i64".to_string(),
            });
        }

        Self {
            message,
            fluent_id: to_kebab_case(&message.struct_name),
            fields,
            variables,
            count,
        }
    }

    // Every variable a rendered entry may reference.
    fn declares(&self, variable: &str) -> bool {
        self.variables.values().any(|v| v == variable) || self.count.as_deref() == Some(variable)
    }
}

impl VariableNames for MessagePlan<'_> {
    fn field(&self, template_key: &str) -> Option<&str> {
        self.variables.get(template_key).map(String::as_str)
    }

    fn count(&self) -> &str {
        self.count.as_deref().unwrap_or(COUNT_FIELD)
    }
}

/// Plan every message, rejecting Fluent id collisions.
pub fn plan_messages(defs: &Definitions) -> EmitResult<Vec<MessagePlan<'_>>> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut plans = Vec::with_capacity(defs.messages.len());

    for message in &defs.messages {
        let plan = MessagePlan::new(message);
        if let Some(first) = seen.insert(plan.fluent_id.clone(), &message.id) {
            return Err(EmitError::DuplicateFluentId {
                fluent_id: plan.fluent_id,
                first: first.to_string(),
                second: message.id.clone(),
            });
        }
        plans.push(plan);
    }
    Ok(plans)
}

/// The `.ftl` resource for `locale`.
///
/// Messages without a template in `locale` are rendered from the primary
/// locale so every resource defines every message.
pub fn render_resource(
    defs: &Definitions,
    locale: &str,
    plans: &[MessagePlan<'_>],
) -> EmitResult<String> {
    let mut out = format!("# {GENERATED_HEADER}\n# Locale: {locale}\n");
    let empty = RawTemplate::plain("");

    for plan in plans {
        let raw = match source_locale(plan.message, locale, defs.primary_locale()) {
            Some(from) => {
                if from != locale {
                    debug!(
                        message_id = %plan.message.id,
                        locale,
                        from,
                        "No template for locale, using fallback"
                    );
                }
                &plan.message.raw_templates[from]
            }
            None => &empty,
        };

        out.push('\n');
        out.push_str(&render_entry(&plan.fluent_id, plan.message, locale, raw, plan)?);
    }
    Ok(out)
}

/// Locale whose template renders `message` in `locale`: its own, then the
/// primary locale's, then the first one available.
pub fn source_locale<'m>(
    message: &'m MessageDefinition,
    locale: &str,
    primary: &str,
) -> Option<&'m str> {
    let templates = &message.raw_templates;
    [locale, primary]
        .into_iter()
        .find_map(|l| templates.get_key_value(l).map(|(key, _)| key.as_str()))
        .or_else(|| templates.keys().next().map(String::as_str))
}

// Parse the resource back and make sure it matches what the Rust side sets.
fn check_resource(locale: &str, source: &str, plans: &[MessagePlan<'_>]) -> EmitResult<()> {
    let parsed = inspect_resource(locale, source)?;

    for plan in plans {
        let variables = parsed
            .get(&plan.fluent_id)
            .ok_or_else(|| EmitError::MissingMessage {
                locale: locale.to_string(),
                message_id: plan.fluent_id.clone(),
            })?;
        if let Some(variable) = variables.iter().find(|v| !plan.declares(v)) {
            return Err(EmitError::UndeclaredVariable {
                message_id: plan.fluent_id.clone(),
                locale: locale.to_string(),
                variable: variable.clone(),
            });
        }
    }
    Ok(())
}

/// The Rust module: placeholder types and one argument builder per message.
pub fn render_module(defs: &Definitions, ctx: &EmitContext, plans: &[MessagePlan<'_>]) -> String {
    let mut w = CodeWriter::new();
    write_preamble(&mut w, defs, &["fluent_bundle::FluentArgs"]);

    let resource = format!("{}/{{locale}}/{}.ftl", ctx.locales_dir, ctx.module_name);
    w.doc("Path of `locale`'s Fluent resource, relative to the output directory.");
    w.open("pub fn resource_path(locale: &str) -> String {");
    w.line(format!("format!({})", rust_string(&resource)));
    w.close("}");
    w.blank();

    w.doc("A generated message a Fluent bundle can format.");
    w.open("pub trait LocalizedMessage {");
    w.doc("Fluent message id");
    w.line("fn id(&self) -> &'static str;");
    w.blank();
    w.doc("Arguments for formatting in `locale`");
    w.line("fn args(&self, locale: &str) -> FluentArgs<'static>;");
    w.close("}");
    w.blank();

    write_placeholders(&mut w, defs);

    for plan in plans {
        write_message(&mut w, defs, plan);
        w.blank();
    }
    w.finish()
}

fn write_message(w: &mut CodeWriter, defs: &Definitions, plan: &MessagePlan<'_>) {
    let message = plan.message;
    write_message_struct(w, message, &plan.fields, &plan.fluent_id);
    w.close("}");
    w.blank();

    w.open(format!("impl LocalizedMessage for {} {{", message.struct_name));
    w.open("fn id(&self) -> &'static str {");
    w.line("Self::ID");
    w.close("}");
    w.blank();

    if plan.fields.is_empty() {
        w.open("fn args(&self, _locale: &str) -> FluentArgs<'static> {");
        w.line("FluentArgs::new()");
        w.close("}");
        w.close("}");
        return;
    }

    let uses_locale = !message.fields.is_empty();
    let param = if uses_locale { "locale" } else { "_locale" };
    w.open(format!("fn args(&self, {param}: &str) -> FluentArgs<'static> {{"));
    w.line("let mut args = FluentArgs::new();");

    for field in &message.fields {
        let Some(variable) = plan.variables.get(&field.template_key) else {
            continue;
        };
        let base = format!("self.{variable}.localize(locale)");

        // follow the template each resource was rendered from
        let chains: Vec<(&str, &[String])> = defs
            .locales
            .iter()
            .filter_map(|locale| {
                let from = source_locale(message, locale, defs.primary_locale())?;
                let chain = message.functions_for(from, &field.template_key);
                (!chain.is_empty()).then_some((locale.as_str(), chain))
            })
            .collect();

        if chains.is_empty() {
            w.line(format!(
                "args.set({}, {});",
                rust_string(variable),
                owned_value(base.clone(), &[], &message.id)
            ));
            continue;
        }

        w.open(format!("args.set({}, match locale {{", rust_string(variable)));
        for (locale, chain) in chains {
            w.line(format!(
                "{} => {},",
                rust_string(locale),
                owned_value(base.clone(), chain, &message.id)
            ));
        }
        w.line(format!("_ => {},", owned_value(base, &[], &message.id)));
        w.close("});");
    }

    if let Some(count) = &plan.count {
        w.line(format!("args.set({}, self.{count});", rust_string(count)));
    }
    w.line("args");
    w.close("}");
    w.close("}");
}

// Expression producing an owned `String` for an argument value.
fn owned_value(base: String, chain: &[String], message_id: &str) -> String {
    let (expr, owned) = apply_functions(base, chain, message_id);
    if owned {
        expr
    } else {
        format!("{expr}.to_string()")
    }
}
