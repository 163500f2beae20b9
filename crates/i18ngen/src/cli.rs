//! Command line arguments

use clap::{Args, Parser, Subcommand};
use i18ngen_config::{split_list, Backend, CliOverrides};
use std::path::PathBuf;

/// Generate type-safe localization code from message templates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level or filter directive (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile message and placeholder sources into generated code
    Generate(GenerateArgs),
}

/// Flags for `generate`; every flag overrides the config file
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Configuration file (defaults to i18ngen.yaml, .yml or .toml in the
    /// current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Comma separated locales, primary first
    #[arg(long)]
    pub locales: Option<String>,

    /// Whether source files hold every locale (`true`) or one locale each
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub compound: Option<bool>,

    /// Glob matching message files
    #[arg(long)]
    pub messages: Option<String>,

    /// Glob matching placeholder files
    #[arg(long)]
    pub placeholders: Option<String>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name of the generated Rust module
    #[arg(short, long)]
    pub module: Option<String>,

    /// Code generation backend: fluent or plain
    #[arg(short, long)]
    pub backend: Option<Backend>,

    /// Comma separated placeholder names that carry a plural count
    #[arg(long = "plural")]
    pub plural_placeholders: Option<String>,
}

impl GenerateArgs {
    /// The config overrides these flags express
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            locales: self.locales.as_deref().map(split_list),
            compound: self.compound,
            messages: self.messages.clone(),
            placeholders: self.placeholders.clone(),
            output_dir: self.output.clone(),
            output_module: self.module.clone(),
            backend: self.backend,
            plural_placeholders: self.plural_placeholders.as_deref().map(split_list),
        }
    }
}
