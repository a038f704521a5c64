//! Error types for schema assembly and type classification.
//!
//! Every error here is an authoring-time failure: it signals a mistake in the
//! schema definition, never a runtime data problem. Missing field values are
//! not errors; see [`crate::resolver::Resolved`].

use thiserror::Error;

use crate::types::TypeKind;

/// Errors raised while building a schema or resolving named types.
#[derive(Debug, Error)]
pub enum TypeSystemError {
    /// A value cannot be classified as a type, or a wrapper type was given
    /// where a named type is required.
    #[error("Invalid type: {0}")]
    InvalidType(String),

    /// A supplied query or mutation root is not an object type.
    #[error("Root {root} type must be an object type, got {kind}")]
    InvalidRootType {
        /// Which root: `"query"` or `"mutation"`.
        root: &'static str,
        /// Kind of the rejected type.
        kind: TypeKind,
    },

    /// Two types, or a type and a root, share a name.
    #[error("Type \"{0}\" is already registered")]
    DuplicateType(String),

    /// Two directives share a name.
    #[error("Directive \"{0}\" is already registered")]
    DuplicateDirective(String),

    /// A field name is already taken on an object type.
    #[error("Field \"{field}\" is already defined on type \"{type_name}\"")]
    DuplicateField {
        /// Type the field was added to.
        type_name: String,
        /// Conflicting field name.
        field: String,
    },

    /// Raised by a schema definition hook.
    #[error("Schema definition error: {0}")]
    Definition(String),

    /// Malformed or invalid kernel configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TypeSystemError {
    /// Create a new InvalidType error
    pub fn invalid_type(message: impl Into<String>) -> Self {
        Self::InvalidType(message.into())
    }

    /// Create a new DuplicateField error
    pub fn duplicate_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::DuplicateField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    /// Create a new Definition error, for use in schema definition hooks
    pub fn definition(message: impl Into<String>) -> Self {
        Self::Definition(message.into())
    }

    /// Create a new Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Check if this error points at a mistake in the schema definition itself
    /// (as opposed to kernel configuration).
    pub fn is_authoring_error(&self) -> bool {
        !matches!(self, Self::Configuration(_))
    }
}

/// Convenience result type for kernel operations
pub type Result<T> = std::result::Result<T, TypeSystemError>;
