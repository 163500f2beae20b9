//! Test utilities and shared fixtures for the i18ngen workspace.
//!
//! Enabled for this crate's own tests and, for other crates, through the
//! `testing` feature.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `content` to `dir/relative`, creating parent directories.
pub fn write_fixture(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Message and placeholder source fixtures.
pub mod source_fixtures {
    /// Compound message file covering plain, suffixed and plural templates.
    pub fn messages_yaml() -> &'static str {
        r#"
EntityNotFound:
  ja: "{{.entity}}が見つかりません: {{.reason}}"
  en: "{{.entity}} not found: {{.reason}}"
Greeting:
  ja: "{{.name:user}}さん、{{.name:owner}}さん"
  en: "Hello {{.name:user}} and {{.name:owner}}"
ItemCount:
  ja: "{{.Count}}個のアイテム"
  en:
    one: "{{.Count}} item"
    other: "{{.Count}} items"
"#
    }

    /// Compound placeholder file for the `entity` kind.
    pub fn entity_placeholders_yaml() -> &'static str {
        r#"
user:
  ja: "ユーザー"
  en: "User"
product:
  ja: "製品"
  en: "Product"
"#
    }

    /// Simple-format placeholder file (`kind.locale.yaml`).
    pub fn simple_placeholders_yaml() -> &'static str {
        r#"
draft: "Draft"
published: "Published"
"#
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// Create a minimal valid configuration as YAML string.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
locales: ["ja", "en"]
messages: "messages/*.yaml"
placeholders: "placeholders/*.yaml"
output_dir: "generated"
"#
    }

    /// Create a full configuration as YAML string.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "locales:\n",
            "  - en\n",
            "  - ja\n",
            "compound: true\n",
            "messages: \"messages/*.yaml\"\n",
            "placeholders: \"placeholders/*.yaml\"\n",
            "output_dir: \"src/i18n\"\n",
            "output_module: \"messages\"\n",
            "backend: \"plain\"\n",
            "plural_placeholders:\n",
            "  - Count\n",
            "  - Quantity\n",
        )
    }
}
