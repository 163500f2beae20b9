//! # i18ngen Config
//!
//! Configuration for the i18ngen generator.
//!
//! A run is configured from a YAML or TOML file, then environment variables,
//! then command line flags, each layer overriding the previous one. The
//! result is checked by [`ConfigValidator`] before any source is read.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::*;
pub use schema::*;
pub use validator::*;
