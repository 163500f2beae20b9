//! Default configuration values.

use crate::schema::{Backend, Config};
use i18ngen_core::DEFAULT_PLURAL_PLACEHOLDERS;
use std::path::PathBuf;

/// Default locales, primary first.
pub const DEFAULT_LOCALES: [&str; 2] = ["en", "ja"];
/// Default message source glob.
pub const DEFAULT_MESSAGES: &str = "./messages/*.yaml";
/// Default placeholder source glob.
pub const DEFAULT_PLACEHOLDERS: &str = "./placeholders/*.yaml";
/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./";
/// Default generated module name.
pub const DEFAULT_OUTPUT_MODULE: &str = "i18n";
/// Config file names probed when none is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["i18ngen.yaml", "i18ngen.yml", "i18ngen.toml"];

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: DEFAULT_LOCALES.iter().map(|l| (*l).to_string()).collect(),
            compound: true,
            messages: DEFAULT_MESSAGES.to_string(),
            placeholders: DEFAULT_PLACEHOLDERS.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_module: DEFAULT_OUTPUT_MODULE.to_string(),
            backend: Backend::default(),
            plural_placeholders: DEFAULT_PLURAL_PLACEHOLDERS
                .iter()
                .map(|n| (*n).to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.locales, vec!["en", "ja"]);
        assert!(config.compound);
        assert_eq!(config.messages, "./messages/*.yaml");
        assert_eq!(config.placeholders, "./placeholders/*.yaml");
        assert_eq!(config.output_dir, PathBuf::from("./"));
        assert_eq!(config.output_module, "i18n");
        assert_eq!(config.backend, Backend::Fluent);
        assert_eq!(config.plural_placeholders, vec!["Count"]);
    }
}
