//! # i18ngen Common
//!
//! Shared error types, logging setup, and naming utilities for i18ngen.
//!
//! This crate provides the foundational pieces used across all other crates
//! in the i18ngen workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{I18nGenError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use utils::*;
