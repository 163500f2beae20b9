//! Message source loading.

use crate::decode::{template_from_value, TemplateOrigin};
use crate::error::{SourceError, SourceResult};
use crate::files::{expand_glob, key_string, read_document};
use i18ngen_core::RawMessage;
use serde_yaml::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load every message declared by the files matching `pattern`.
///
/// Messages keep declaration order across files (files in path order).
/// A message id declared twice keeps its first declaration. Simple-format
/// entries (`id: template`) are assigned to `primary_locale`.
pub fn load_messages(pattern: &str, primary_locale: &str) -> SourceResult<Vec<RawMessage>> {
    let files = expand_glob("message", pattern)?;
    if files.is_empty() {
        return Err(SourceError::NoMessageFiles {
            pattern: pattern.to_string(),
        });
    }

    let mut seen = HashSet::new();
    let mut messages = Vec::new();

    for path in &files {
        let parsed = parse_message_file(path, primary_locale)?;
        debug!(path = %path.display(), count = parsed.len(), "Parsed message file");

        for message in parsed {
            if seen.insert(message.id.clone()) {
                messages.push(message);
            } else {
                warn!(
                    message_id = %message.id,
                    path = %path.display(),
                    "Duplicate message id ignored, keeping first declaration"
                );
            }
        }
    }

    info!(files = files.len(), messages = messages.len(), "Loaded message sources");
    Ok(messages)
}

/// Parse one message file.
pub fn parse_message_file(path: &Path, primary_locale: &str) -> SourceResult<Vec<RawMessage>> {
    let document = read_document(path)?;
    let mut messages = Vec::with_capacity(document.len());

    for (id, body) in &document {
        let id = key_string(id, path, "message")?;
        let mut message = RawMessage::new(id.as_str());

        match body {
            Value::Mapping(by_locale) => {
                for (locale, value) in by_locale {
                    let locale = key_string(locale, path, &format!("message '{id}'"))?;
                    let origin = TemplateOrigin {
                        path,
                        message_id: &id,
                        locale: &locale,
                    };
                    let template = template_from_value(value, origin)?;
                    message.templates.insert(locale, template);
                }
            }
            simple => {
                let origin = TemplateOrigin {
                    path,
                    message_id: &id,
                    locale: primary_locale,
                };
                message
                    .templates
                    .insert(primary_locale.to_string(), template_from_value(simple, origin)?);
            }
        }

        messages.push(message);
    }

    Ok(messages)
}
