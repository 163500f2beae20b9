//! The emitter seam and its inputs and outputs.

use crate::error::EmitResult;
use i18ngen_core::Definitions;
use std::path::PathBuf;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "Code generated by i18ngen. DO NOT EDIT.";

/// Settings shared by every emitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitContext {
    /// Name of the generated Rust module (and its file stem)
    pub module_name: String,
    /// Directory, relative to the output directory, holding per-locale resources
    pub locales_dir: String,
}

impl EmitContext {
    /// Context for `module_name` with resources under `locales/`
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            locales_dir: "locales".to_string(),
        }
    }

    /// File name of the generated Rust module
    pub fn module_file(&self) -> String {
        format!("{}.rs", self.module_name)
    }

    /// Path of one locale's resource file, relative to the output directory
    pub fn resource_path(&self, locale: &str, extension: &str) -> PathBuf {
        PathBuf::from(&self.locales_dir)
            .join(locale)
            .join(format!("{}.{extension}", self.module_name))
    }
}

/// One file produced by an emitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    /// Full file contents
    pub contents: String,
}

impl GeneratedFile {
    /// Create a generated file
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Renders [`Definitions`] into source files.
///
/// Implementations must be deterministic: the same IR always yields the
/// same files, in the same order, byte for byte.
pub trait Emitter {
    /// Short backend name used in logs
    fn name(&self) -> &'static str;

    /// Whether generated code selects plural forms at render time
    fn supports_plurals(&self) -> bool;

    /// Render every file for `defs`
    fn emit(&self, defs: &Definitions, ctx: &EmitContext) -> EmitResult<Vec<GeneratedFile>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_paths() {
        let ctx = EmitContext::new("messages");
        assert_eq!(ctx.module_file(), "messages.rs");
        assert_eq!(
            ctx.resource_path("ja", "ftl"),
            PathBuf::from("locales").join("ja").join("messages.ftl")
        );
    }
}
