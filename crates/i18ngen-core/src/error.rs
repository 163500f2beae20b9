//! Errors raised while compiling templates and resolving the model.
//!
//! Every error is terminal for the run; callers are expected to surface the
//! message id, locale and offending name carried by each variant.

use std::fmt;
use thiserror::Error;

/// Result type for compilation operations
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that abort a compilation run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// An unsuffixed field occurs more than once in one locale's template
    #[error(
        "duplicate placeholder '{field}' found ({occurrences} times) in message '{message_id}' \
         (locale: {locale}) - use suffix notation to distinguish multiple instances \
         (e.g., {{{{.{field}:from}}}} and {{{{.{field}:to}}}})"
    )]
    DuplicatePlaceholder {
        /// Message the template belongs to
        message_id: String,
        /// Locale of the offending template
        locale: String,
        /// Repeated field name
        field: String,
        /// How many times it occurs
        occurrences: usize,
    },

    /// A template exceeds the nesting or placeholder bounds
    #[error("template for message '{message_id}' (locale: {locale}) is too complex: {reason}")]
    TemplateTooComplex {
        /// Message the template belongs to
        message_id: String,
        /// Locale of the offending template
        locale: String,
        /// Bound that was exceeded
        reason: Complexity,
    },

    /// A name cannot become a generated identifier
    #[error(
        "invalid {role} '{name}'{}: must be a valid identifier \
         (pattern: ^[a-zA-Z_][a-zA-Z0-9_]*$)",
        context_suffix(.context)
    )]
    InvalidIdentifier {
        /// What the name identifies
        role: IdentifierRole,
        /// The name as authored
        name: String,
        /// Where it was found
        context: Option<String>,
    },

    /// Two messages share an id or map to the same generated struct name
    #[error("message '{message_id}' collides with '{existing_id}' (generated struct '{struct_name}')")]
    DuplicateMessage {
        /// Message declared second
        message_id: String,
        /// Message already holding the name
        existing_id: String,
        /// Struct name both derive
        struct_name: String,
    },

    /// Two field references in one message derive the same field name
    #[error(
        "field '{field}' in message '{message_id}' collides with '{existing}' \
         (generated field '{field_name}')"
    )]
    DuplicateFieldName {
        /// Message both fields belong to
        message_id: String,
        /// Field path seen second
        field: String,
        /// Field path already holding the name
        existing: String,
        /// Field name both derive
        field_name: String,
    },

    /// Two placeholder kinds derive the same type name
    #[error("placeholder kind '{kind}' collides with '{existing_kind}' (generated type '{type_name}')")]
    DuplicatePlaceholderType {
        /// Kind declared second
        kind: String,
        /// Kind already holding the type name
        existing_kind: String,
        /// Type name both derive
        type_name: String,
    },

    /// Two items of one text kind derive the same enum variant
    #[error(
        "placeholder item '{item}' in kind '{kind}' collides with '{existing_item}' \
         (generated variant '{variant_name}')"
    )]
    DuplicateVariant {
        /// Kind both items belong to
        kind: String,
        /// Item id seen second
        item: String,
        /// Item id already holding the variant
        existing_item: String,
        /// Variant name both derive
        variant_name: String,
    },
}

fn context_suffix(context: &Option<String>) -> String {
    context
        .as_ref()
        .map(|c| format!(" in {c}"))
        .unwrap_or_default()
}

/// Which safety bound a template exceeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    /// Brace nesting deeper than allowed
    NestingDepth {
        /// Depth reached
        depth: usize,
        /// Allowed depth
        max: usize,
    },
    /// More `{{` occurrences than allowed
    PlaceholderCount {
        /// Occurrences found
        count: usize,
        /// Allowed occurrences
        max: usize,
    },
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NestingDepth { depth, max } => {
                write!(f, "nesting depth {depth} exceeds maximum {max}")
            }
            Self::PlaceholderCount { count, max } => {
                write!(f, "{count} placeholders exceed maximum {max}")
            }
        }
    }
}

/// The kind of name an [`CompileError::InvalidIdentifier`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierRole {
    /// A placeholder kind (derived from the source file name)
    PlaceholderKind,
    /// An item id inside a placeholder kind
    PlaceholderItem,
    /// A message id
    MessageId,
    /// A field referenced from a template
    Field,
}

impl fmt::Display for IdentifierRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PlaceholderKind => "placeholder kind name",
            Self::PlaceholderItem => "placeholder item ID",
            Self::MessageId => "message ID",
            Self::Field => "field name",
        };
        f.write_str(label)
    }
}

impl CompileError {
    /// The message this error belongs to, when it is message-scoped
    pub fn message_id(&self) -> Option<&str> {
        match self {
            Self::DuplicatePlaceholder { message_id, .. }
            | Self::TemplateTooComplex { message_id, .. }
            | Self::DuplicateMessage { message_id, .. }
            | Self::DuplicateFieldName { message_id, .. } => Some(message_id),
            Self::InvalidIdentifier { .. }
            | Self::DuplicatePlaceholderType { .. }
            | Self::DuplicateVariant { .. } => None,
        }
    }

    /// The locale this error belongs to, when it is locale-scoped
    pub fn locale(&self) -> Option<&str> {
        match self {
            Self::DuplicatePlaceholder { locale, .. } | Self::TemplateTooComplex { locale, .. } => {
                Some(locale)
            }
            _ => None,
        }
    }
}

impl From<CompileError> for i18ngen_common::I18nGenError {
    fn from(err: CompileError) -> Self {
        Self::compile_with_source("template compilation failed", err)
    }
}
