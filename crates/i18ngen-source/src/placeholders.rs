//! Placeholder source loading.

use crate::decode::{text_from_value, texts_from_value};
use crate::error::{SourceError, SourceResult};
use crate::files::{expand_glob, key_string, read_document};
use i18ngen_core::PlaceholderSource;
use std::path::Path;
use tracing::{debug, info};

/// Load every placeholder kind declared by the files matching `pattern`.
///
/// The kind is the file name up to its first `.`; files sharing a kind are
/// merged, later files adding locales or items to earlier ones. In simple
/// mode (`compound == false`) each file is `kind.locale.ext` and maps
/// `id -> text`. No matching file is not an error: placeholders are optional.
pub fn load_placeholders(pattern: &str, compound: bool) -> SourceResult<Vec<PlaceholderSource>> {
    let files = expand_glob("placeholder", pattern)?;
    let mut kinds: Vec<PlaceholderSource> = Vec::new();

    for path in &files {
        let parsed = parse_placeholder_file(path, compound)?;
        debug!(
            path = %path.display(),
            kind = %parsed.kind,
            items = parsed.items.len(),
            "Parsed placeholder file"
        );

        match kinds.iter_mut().find(|k| k.kind == parsed.kind) {
            Some(existing) => merge(existing, parsed),
            None => kinds.push(parsed),
        }
    }

    info!(files = files.len(), kinds = kinds.len(), "Loaded placeholder sources");
    Ok(kinds)
}

/// Parse one placeholder file into a single kind.
pub fn parse_placeholder_file(path: &Path, compound: bool) -> SourceResult<PlaceholderSource> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut parts = file_name.split('.');
    let kind = parts.next().unwrap_or_default().to_string();

    let document = read_document(path)?;
    let mut source = PlaceholderSource::new(kind);

    if compound {
        for (id, texts) in &document {
            let id = key_string(id, path, "placeholder item")?;
            let texts = texts_from_value(texts, path, &id)?;
            source.items.insert(id, texts);
        }
    } else {
        let locale = locale_from_parts(parts.collect::<Vec<_>>().as_slice())
            .ok_or_else(|| SourceError::MissingLocale {
                path: path.to_path_buf(),
            })?;
        for (id, text) in &document {
            let id = key_string(id, path, "placeholder item")?;
            let text = text_from_value(text, path, &id)?;
            source.items.entry(id).or_default().insert(locale.to_string(), text);
        }
    }

    Ok(source)
}

// `kind.locale.ext` leaves `[locale, ext]` after the kind; a bare
// `kind.ext` has no locale.
fn locale_from_parts<'a>(rest: &[&'a str]) -> Option<&'a str> {
    match rest {
        [locale, _ext, ..] if !locale.is_empty() => Some(locale),
        _ => None,
    }
}

fn merge(into: &mut PlaceholderSource, from: PlaceholderSource) {
    for (id, texts) in from.items {
        into.items.entry(id).or_default().extend(texts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18ngen_common::test_utils::{source_fixtures, write_fixture};
    use pretty_assertions::assert_eq;

    #[test]
    fn compound_kind_from_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            dir.path(),
            "entity.yaml",
            source_fixtures::entity_placeholders_yaml(),
        );

        let source = parse_placeholder_file(&path, true).unwrap();
        assert_eq!(source.kind, "entity");
        assert_eq!(source.items["user"]["ja"], "ユーザー");
        assert_eq!(source.items["product"]["en"], "Product");
    }

    #[test]
    fn simple_files_take_locale_from_name() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "status.en.yaml", source_fixtures::simple_placeholders_yaml());
        write_fixture(dir.path(), "status.ja.yaml", "draft: 下書き\npublished: 公開済み\n");

        let pattern = format!("{}/*.yaml", dir.path().display());
        let kinds = load_placeholders(&pattern, false).unwrap();
        assert_eq!(kinds.len(), 1);

        let status = &kinds[0];
        assert_eq!(status.kind, "status");
        assert_eq!(status.items["draft"]["en"], "Draft");
        assert_eq!(status.items["draft"]["ja"], "下書き");
        assert_eq!(status.items["published"].len(), 2);
    }

    #[test]
    fn simple_file_without_locale_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "status.yaml", "draft: Draft\n");
        assert!(matches!(
            parse_placeholder_file(&path, false),
            Err(SourceError::MissingLocale { .. })
        ));
    }

    #[test]
    fn value_items_have_no_texts() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "order_id.yaml", "primary: ~\nsecondary: {}\n");
        let source = parse_placeholder_file(&path, true).unwrap();
        assert!(source.items.values().all(|texts| texts.is_empty()));
    }

    #[test]
    fn no_files_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.yaml", dir.path().display());
        assert!(load_placeholders(&pattern, true).unwrap().is_empty());
    }

    #[test]
    fn locale_parts() {
        assert_eq!(locale_from_parts(&["en", "yaml"]), Some("en"));
        assert_eq!(locale_from_parts(&["en", "backup", "yaml"]), Some("en"));
        assert_eq!(locale_from_parts(&["yaml"]), None);
        assert_eq!(locale_from_parts(&["", "yaml"]), None);
    }
}
