//! # i18ngen Emit
//!
//! Renders the compiled [`Definitions`](i18ngen_core::Definitions) into
//! source files.
//!
//! Two backends implement [`Emitter`]:
//!
//! - [`PlainEmitter`] writes one dependency-free Rust module whose message
//!   structs render themselves with `format!`.
//! - [`FluentEmitter`] writes one `.ftl` resource per locale plus a Rust
//!   module that builds `fluent_bundle::FluentArgs`; plural maps become
//!   Fluent select expressions and plural categories are chosen at render
//!   time by the bundle.
//!
//! Output is deterministic and nothing is written to disk here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod emitter;
pub mod error;
pub mod fluent;
pub mod ftl;
pub mod plain;
pub mod template;
pub mod types;
pub mod writer;

pub use emitter::{EmitContext, Emitter, GeneratedFile, GENERATED_HEADER};
pub use error::{EmitError, EmitResult};
pub use fluent::FluentEmitter;
pub use plain::PlainEmitter;
