//! One generation run: config -> sources -> IR -> files on disk.

use crate::cli::GenerateArgs;
use anyhow::{bail, Context, Result};
use i18ngen_config::{Backend, Config, ConfigLoader, ConfigValidator};
use i18ngen_core::{assemble, compile_message, AssembleOptions, Definitions};
use i18ngen_emit::{EmitContext, Emitter, FluentEmitter, GeneratedFile, PlainEmitter};
use i18ngen_source::{load_messages, load_placeholders};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolve the effective configuration for `args`: file, then environment,
/// then flags.
pub fn load_config(args: &GenerateArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            if !path.is_file() {
                bail!("config file '{}' does not exist", path.display());
            }
            ConfigLoader::load_config(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?
        }
        None => ConfigLoader::load_from_dir(".").context("failed to load config")?,
    };

    let overrides = args.overrides();
    if !overrides.is_empty() {
        debug!(?overrides, "Applying command line overrides");
        overrides.apply(&mut config);
    }
    Ok(config)
}

/// The emitter for a configured backend
pub fn emitter_for(backend: Backend) -> Box<dyn Emitter> {
    match backend {
        Backend::Fluent => Box::new(FluentEmitter::new()),
        Backend::Plain => Box::new(PlainEmitter::new()),
    }
}

/// Load every source named by `config` and compile it into the IR.
pub fn build_definitions(config: &Config, native_plurals: bool) -> Result<Definitions> {
    let messages = load_messages(&config.messages, config.primary_locale())?;
    let placeholders = load_placeholders(&config.placeholders, config.compound)?;

    let compiled = messages
        .into_iter()
        .map(|message| compile_message(message, &config.locales))
        .collect::<Result<Vec<_>, _>>()?;

    let options = AssembleOptions::new(config.locales.clone())
        .with_plural_placeholders(config.plural_placeholders.clone())
        .with_native_plurals(native_plurals);
    let defs = assemble(compiled, &placeholders, &options)?;

    info!(
        messages = defs.messages.len(),
        placeholders = defs.placeholders.len(),
        locales = defs.locales.len(),
        "Compiled definitions"
    );
    Ok(defs)
}

/// Run a full generation for `config`, validating it first.
///
/// Returns the paths written, in emission order.
pub fn run(config: &Config) -> Result<Vec<PathBuf>> {
    ConfigValidator::validate(config).context("invalid configuration")?;

    let emitter = emitter_for(config.backend);
    info!(
        backend = emitter.name(),
        messages = %config.messages,
        placeholders = %config.placeholders,
        "Starting generation"
    );

    let defs = build_definitions(config, emitter.supports_plurals())?;
    let files = emitter.emit(&defs, &EmitContext::new(&config.output_module))?;
    let written = write_files(&config.output_dir, &files)?;

    info!(
        files = written.len(),
        output_dir = %config.output_dir.display(),
        "Generation complete"
    );
    Ok(written)
}

/// Write `files` under `output_dir`, creating directories as needed.
pub fn write_files(output_dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let path = output_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
        }
        fs::write(&path, &file.contents)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        debug!(path = %path.display(), bytes = file.contents.len(), "Wrote generated file");
        written.push(path);
    }
    Ok(written)
}
