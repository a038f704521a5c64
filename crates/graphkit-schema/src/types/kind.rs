use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypeSystemError;

/// The closed category a type-system construct belongs to.
///
/// Serialized with introspection spelling (`INPUT_OBJECT`, `NON_NULL`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Enum,
    Object,
    InputObject,
    List,
    Interface,
    Union,
    NonNull,
}

impl TypeKind {
    pub const ALL: [TypeKind; 8] = [
        TypeKind::Scalar,
        TypeKind::Enum,
        TypeKind::Object,
        TypeKind::InputObject,
        TypeKind::List,
        TypeKind::Interface,
        TypeKind::Union,
        TypeKind::NonNull,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Enum => "ENUM",
            TypeKind::Object => "OBJECT",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::List => "LIST",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::NonNull => "NON_NULL",
        }
    }

    /// Structural wrappers carry no identity of their own.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, TypeKind::List | TypeKind::NonNull)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeKind {
    type Err = TypeSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TypeSystemError::invalid_type(format!("Unknown type kind: {s}")))
    }
}
