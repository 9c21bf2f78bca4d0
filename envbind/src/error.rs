//! Error types for binding environment variables into records

use crate::coerce::FieldKind;

/// Errors that can occur while binding a record.
///
/// The first error met during a traversal aborts it and is returned as is.
/// Fields assigned before the failure keep their new values.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The bind target is not a non-null reference to a record.
    ///
    /// Only reachable through the type-erased [`Registry`](crate::Registry)
    /// entry point; [`bind`](crate::bind) rules it out at compile time.
    #[error("Invalid bind target: expected a non-null mutable reference to a record, got {type_name}")]
    InvalidTargetKind {
        /// Description of the rejected argument
        type_name: String,
    },

    /// The referenced value is not a record known to the binder.
    #[error("Invalid bind target: expected a record, got {type_name}")]
    InvalidTargetShape {
        /// Description of the referenced value's type
        type_name: String,
    },

    /// A resolved literal could not be coerced into the field's type.
    #[error("Failed to coerce '{literal}' into {type_name} ({kind}) for field '{field}': {message}")]
    Coercion {
        /// Name of the field being assigned
        field: String,
        /// The resolved literal that failed to parse
        literal: String,
        /// Fully qualified type name of the field
        type_name: String,
        /// Coercion rule that was applied
        kind: FieldKind,
        /// Error message from the parser
        message: String,
    },

    /// The field carries a directive but its type has no coercion rule.
    #[error("Field '{field}' has unsupported type kind '{kind}'")]
    UnsupportedFieldType {
        /// Name of the field
        field: String,
        /// Kind of the field's type (e.g. "map", "option")
        kind: String,
    },
}

impl BindError {
    /// Create a coercion error for a field of type `T`
    pub(crate) fn coercion<T>(
        field: impl Into<String>,
        literal: impl Into<String>,
        kind: FieldKind,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Coercion {
            field: field.into(),
            literal: literal.into(),
            type_name: std::any::type_name::<T>().to_string(),
            kind,
            message: message.to_string(),
        }
    }

    /// Create an unsupported field type error
    pub(crate) fn unsupported(field: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedFieldType {
            field: field.into(),
            kind: kind.into(),
        }
    }
}
