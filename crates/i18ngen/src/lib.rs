//! # i18ngen
//!
//! Command line front end for the i18ngen code generator.
//!
//! `i18ngen generate` loads the configuration (file, environment, flags),
//! reads message and placeholder sources, compiles them into the typed IR
//! and writes the generated Rust module and locale resources.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod generator;

pub use cli::{Cli, Command, GenerateArgs};
pub use generator::{build_definitions, emitter_for, load_config, run, write_files};
