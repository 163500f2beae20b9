//! # i18ngen Core
//!
//! Template compilation and model resolution for i18ngen.
//!
//! Raw per-locale message templates are normalized, scanned for
//! `{{.name[:suffix]}}` field references, validated, resolved against the
//! placeholder catalog and assembled into a deterministic intermediate
//! representation ([`Definitions`]) that emitters turn into source code.
//!
//! The crate performs no I/O and keeps no state between runs.
//!
//! ```
//! use i18ngen_core::{assemble, compile_message, AssembleOptions, RawMessage, RawTemplate};
//!
//! let locales = vec!["en".to_string()];
//! let raw = RawMessage::new("Welcome").with_template("en", RawTemplate::plain("Hi {{.name}}"));
//! let message = compile_message(raw, &locales).unwrap();
//!
//! let defs = assemble(vec![message], &[], &AssembleOptions::new(locales)).unwrap();
//! assert_eq!(defs.messages[0].fields[0].field_name, "Name");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod assemble;
pub mod catalog;
pub mod error;
pub mod extract;
pub mod ident;
pub mod ir;
pub mod model;
pub mod normalize;
pub mod plural;
pub mod validate;

pub use assemble::{assemble, compile_message, AssembleOptions};
pub use catalog::PlaceholderCatalog;
pub use error::{CompileError, CompileResult, Complexity, IdentifierRole};
pub use extract::{extract_field_spans, extract_fields, FieldSpan};
pub use ir::{
    Definitions, MessageDefinition, PlaceholderClass, PlaceholderDefinition, PlaceholderItem,
    ResolvedField,
};
pub use model::{FieldReference, MessageSource, PlaceholderSource, RawMessage, RawTemplate};
pub use normalize::{normalize, NormalizedTemplate};
pub use plural::{PluralDetector, PluralInfo, DEFAULT_PLURAL_PLACEHOLDERS};
pub use validate::{validate_template, MAX_NESTING_DEPTH, MAX_PLACEHOLDERS};
