//! Error types for code emission

use thiserror::Error;

/// Result type for emitters
pub type EmitResult<T> = Result<T, EmitError>;

/// Errors raised while rendering the IR
#[derive(Error, Debug)]
pub enum EmitError {
    /// The IR carries no locale to render
    #[error("no locales to emit")]
    NoLocales,

    /// A template refers to a key the message has no field for
    #[error("message '{message_id}' (locale: {locale}) refers to unknown field '{key}'")]
    UnresolvedField {
        /// Message being rendered
        message_id: String,
        /// Locale of the template
        locale: String,
        /// Template key with no field
        key: String,
    },

    /// Two messages map to the same Fluent message id
    #[error("messages '{first}' and '{second}' both map to Fluent id '{fluent_id}'")]
    DuplicateFluentId {
        /// Shared Fluent id
        fluent_id: String,
        /// Message planned first
        first: String,
        /// Message planned second
        second: String,
    },

    /// A rendered Fluent resource failed to parse
    #[error("generated Fluent resource for locale '{locale}' is invalid: {details}")]
    InvalidFluent {
        /// Locale of the resource
        locale: String,
        /// Parser errors
        details: String,
    },

    /// A rendered Fluent resource lacks a message the Rust module exposes
    #[error("generated Fluent resource for locale '{locale}' is missing message '{message_id}'")]
    MissingMessage {
        /// Locale of the resource
        locale: String,
        /// Fluent id that was not found
        message_id: String,
    },

    /// A rendered Fluent message uses a variable its arguments never set
    #[error(
        "generated Fluent message '{message_id}' (locale: {locale}) uses undeclared variable \
         '${variable}'"
    )]
    UndeclaredVariable {
        /// Fluent id of the message
        message_id: String,
        /// Locale of the resource
        locale: String,
        /// Variable the arguments never set
        variable: String,
    },
}

impl From<EmitError> for i18ngen_common::I18nGenError {
    fn from(err: EmitError) -> Self {
        Self::emit_with_source("failed to emit generated code", err)
    }
}
