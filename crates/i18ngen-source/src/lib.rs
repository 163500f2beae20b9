//! # i18ngen Source
//!
//! Reads message and placeholder source files into the core model.
//!
//! Message files map `id -> locale -> template` (compound) or `id -> template`
//! (simple, assigned to the primary locale); a template is a string or a
//! plural-category map. Placeholder files map `id -> locale -> text`, or
//! `id -> text` for simple `kind.locale.yaml` files. YAML and JSON are both
//! accepted and declaration order is kept.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod decode;
pub mod error;
pub mod files;
pub mod messages;
pub mod placeholders;

pub use error::{SourceError, SourceResult};
pub use files::{expand_glob, SourceFormat};
pub use messages::load_messages;
pub use placeholders::load_placeholders;
