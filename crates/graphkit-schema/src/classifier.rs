//! Type classification.
//!
//! Pure predicates answering "what kind of type-system construct is this?".
//! Every predicate accepts a [`TypeCandidate`], which is either a live type
//! object or a raw literal value. Raw literals appear when classifying
//! argument values or type names before they are coerced into type objects;
//! only the string form can ever classify as a (scalar) type.
//!
//! Predicates about the semantic category of a type ([`is_input_type`]) strip
//! wrappers first: one nullable unwrap, then down to the named type. Predicates
//! about structural shape (list-ness) look at the type as given.

use serde_json::Value;

use crate::error::{Result, TypeSystemError};
use crate::types::{GraphQLType, TypeKind, TypeRef, scalars};

/// Something that may or may not be a type.
#[derive(Debug, Clone, Copy)]
pub enum TypeCandidate<'a> {
    Type(&'a GraphQLType),
    Value(&'a Value),
    Name(&'a str),
}

impl<'a> TypeCandidate<'a> {
    fn as_type(&self) -> Option<&'a GraphQLType> {
        match *self {
            TypeCandidate::Type(ty) => Some(ty),
            _ => None,
        }
    }

    fn kind(&self) -> Option<TypeKind> {
        self.as_type().map(GraphQLType::kind)
    }
}

impl<'a> From<&'a GraphQLType> for TypeCandidate<'a> {
    fn from(ty: &'a GraphQLType) -> Self {
        TypeCandidate::Type(ty)
    }
}

impl<'a> From<&'a TypeRef> for TypeCandidate<'a> {
    fn from(ty: &'a TypeRef) -> Self {
        TypeCandidate::Type(&**ty)
    }
}

impl<'a> From<&'a Value> for TypeCandidate<'a> {
    fn from(value: &'a Value) -> Self {
        TypeCandidate::Value(value)
    }
}

impl<'a> From<&'a str> for TypeCandidate<'a> {
    fn from(name: &'a str) -> Self {
        TypeCandidate::Name(name)
    }
}

/// Resolves the named type behind a candidate.
///
/// - a type object resolves to its named type (wrappers stripped);
/// - `null` resolves to nothing;
/// - any other primitive literal resolves to the built-in `String` scalar.
///
/// # Errors
///
/// Returns [`TypeSystemError::InvalidType`] for arrays and objects. These are
/// schema authoring mistakes and must not be silently mapped to `None`.
pub fn resolve_named_type<'a>(
    candidate: impl Into<TypeCandidate<'a>>,
) -> Result<Option<&'a GraphQLType>> {
    match candidate.into() {
        TypeCandidate::Type(ty) => Ok(Some(ty.named_type())),
        TypeCandidate::Value(Value::Null) => Ok(None),
        TypeCandidate::Value(Value::Bool(_) | Value::Number(_) | Value::String(_))
        | TypeCandidate::Name(_) => Ok(Some(&**scalars::STRING)),
        TypeCandidate::Value(Value::Array(_)) => Err(TypeSystemError::invalid_type(
            "expected a type object, null, or scalar literal; got an array",
        )),
        TypeCandidate::Value(Value::Object(_)) => Err(TypeSystemError::invalid_type(
            "expected a type object, null, or scalar literal; got an object",
        )),
    }
}

pub fn is_interface<'a>(candidate: impl Into<TypeCandidate<'a>>) -> bool {
    candidate.into().kind() == Some(TypeKind::Interface)
}

/// Interfaces and unions: types whose concrete object type is decided at
/// resolution time.
pub fn is_abstract_type<'a>(candidate: impl Into<TypeCandidate<'a>>) -> bool {
    matches!(
        candidate.into().kind(),
        Some(TypeKind::Interface | TypeKind::Union)
    )
}

/// Scalar or enum type objects, or a bare name of a built-in scalar
/// (case-insensitive). Wrappers are not unwrapped.
pub fn is_scalar_type<'a>(candidate: impl Into<TypeCandidate<'a>>) -> bool {
    match candidate.into() {
        TypeCandidate::Type(ty) => matches!(ty.kind(), TypeKind::Scalar | TypeKind::Enum),
        TypeCandidate::Value(Value::String(name)) => scalars::is_builtin_scalar_name(name),
        TypeCandidate::Name(name) => scalars::is_builtin_scalar_name(name),
        TypeCandidate::Value(_) => false,
    }
}

pub fn is_graphql_type<'a>(candidate: impl Into<TypeCandidate<'a>>) -> bool {
    let candidate = candidate.into();
    candidate.as_type().is_some() || is_scalar_type(candidate)
}

/// Types with no further field structure to resolve into.
pub fn is_leaf_type<'a>(candidate: impl Into<TypeCandidate<'a>>) -> bool {
    let candidate = candidate.into();
    candidate.kind() == Some(TypeKind::Enum) || is_scalar_type(candidate)
}

pub fn is_object_type<'a>(candidate: impl Into<TypeCandidate<'a>>) -> bool {
    candidate.into().kind() == Some(TypeKind::Object)
}

/// Types usable as arguments and input fields.
///
/// The nullable wrapper is stripped first, then the result is unwrapped to its
/// named type. The list check applies to the candidate itself, so
/// `[Object]` is accepted while `[Object]!` is not.
pub fn is_input_type<'a>(candidate: impl Into<TypeCandidate<'a>>) -> bool {
    let candidate = candidate.into();
    let Some(ty) = candidate.as_type() else {
        return is_scalar_type(candidate);
    };

    let named = ty.nullable_type().named_type();
    matches!(
        named.kind(),
        TypeKind::Scalar | TypeKind::Enum | TypeKind::InputObject
    ) || ty.kind() == TypeKind::List
}

pub fn is_input_object_type<'a>(candidate: impl Into<TypeCandidate<'a>>) -> bool {
    candidate.into().kind() == Some(TypeKind::InputObject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        EnumType, Field, InputObjectType, InputValue, InterfaceType, ObjectType, ScalarType,
        UnionType,
    };
    use serde_json::json;

    fn object() -> GraphQLType {
        ObjectType::new("User")
            .field(Field::new("id", scalars::id()))
            .into()
    }

    fn input_object() -> GraphQLType {
        InputObjectType::new("UserFilter")
            .field(InputValue::new("name", scalars::string()))
            .into()
    }

    fn enum_type() -> GraphQLType {
        EnumType::new("Role").value("ADMIN").value("MEMBER").into()
    }

    fn interface() -> GraphQLType {
        InterfaceType::new("Node")
            .field(Field::new("id", scalars::id()))
            .into()
    }

    fn union() -> GraphQLType {
        UnionType::new("SearchResult").member("User").into()
    }

    #[test]
    fn test_abstract_only_for_interface_and_union() {
        assert!(is_abstract_type(&interface()));
        assert!(is_abstract_type(&union()));

        assert!(!is_abstract_type(&GraphQLType::list(scalars::string())));
        assert!(!is_abstract_type(&scalars::string()));
        assert!(!is_abstract_type(&object()));
        assert!(!is_abstract_type(&enum_type()));
        assert!(!is_abstract_type(&input_object()));
        assert!(!is_abstract_type("Node"));
    }

    #[test]
    fn test_interface() {
        assert!(is_interface(&interface()));
        assert!(!is_interface(&union()));
        assert!(!is_interface(&json!({"kind": "INTERFACE"})));
    }

    #[test]
    fn test_scalar_type_objects_and_names() {
        assert!(is_scalar_type(&scalars::int()));
        assert!(is_scalar_type(&GraphQLType::from(ScalarType::new("Money"))));
        assert!(is_scalar_type(&enum_type()));
        assert!(!is_scalar_type(&object()));
        assert!(!is_scalar_type(&GraphQLType::non_null(scalars::int())));

        assert!(is_scalar_type("string"));
        assert!(is_scalar_type("Boolean"));
        assert!(is_scalar_type(&json!("TIMESTAMP")));
        assert!(!is_scalar_type("Money"));
        assert!(!is_scalar_type(&json!(42)));
        assert!(!is_scalar_type(&Value::Null));
    }

    #[test]
    fn test_graphql_and_leaf_types() {
        assert!(is_graphql_type(&object()));
        assert!(is_graphql_type(&GraphQLType::list(scalars::int())));
        assert!(is_graphql_type("id"));
        assert!(!is_graphql_type("User"));
        assert!(!is_graphql_type(&json!({"name": "User"})));

        assert!(is_leaf_type(&enum_type()));
        assert!(is_leaf_type(&scalars::float()));
        assert!(is_leaf_type("float"));
        assert!(!is_leaf_type(&object()));
        assert!(!is_leaf_type(&GraphQLType::list(scalars::float())));
    }

    #[test]
    fn test_object_and_input_object() {
        assert!(is_object_type(&object()));
        assert!(!is_object_type(&input_object()));
        assert!(!is_object_type(&GraphQLType::non_null(object())));

        assert!(is_input_object_type(&input_object()));
        assert!(!is_input_object_type(&object()));
    }

    #[test]
    fn test_input_type_unwraps_before_classifying() {
        let list_of_required_scalar =
            GraphQLType::list(GraphQLType::non_null(scalars::string()));
        assert!(is_input_type(&list_of_required_scalar));

        assert!(!is_input_type(&object()));
        assert!(is_input_type(&GraphQLType::non_null(scalars::int())));
        assert!(is_input_type(&GraphQLType::non_null(enum_type())));
        assert!(is_input_type(&GraphQLType::non_null(input_object())));
        assert!(!is_input_type(&GraphQLType::non_null(object())));
        assert!(!is_input_type(&interface()));
    }

    #[test]
    fn test_input_type_list_check_uses_outer_type() {
        assert!(is_input_type(&GraphQLType::list(object())));
        assert!(!is_input_type(&GraphQLType::non_null(GraphQLType::list(object()))));
    }

    #[test]
    fn test_input_type_for_raw_values() {
        assert!(is_input_type("int"));
        assert!(is_input_type(&json!("DateTime")));
        assert!(!is_input_type(&json!("User")));
        assert!(!is_input_type(&json!([1, 2])));
    }

    #[test]
    fn test_resolve_named_type() {
        let wrapped = GraphQLType::non_null(GraphQLType::list(object()));
        let named = resolve_named_type(&wrapped).unwrap().unwrap();
        assert_eq!(named.name(), Some("User"));

        assert!(resolve_named_type(&Value::Null).unwrap().is_none());

        for literal in [json!(true), json!(3.5), json!("anything")] {
            let named = resolve_named_type(&literal).unwrap().unwrap();
            assert_eq!(named.name(), Some("String"));
        }
    }

    #[test]
    fn test_resolve_named_type_rejects_structured_values() {
        let err = resolve_named_type(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, TypeSystemError::InvalidType(_)));

        let err = resolve_named_type(&json!({"kind": "OBJECT"})).unwrap_err();
        assert!(matches!(err, TypeSystemError::InvalidType(_)));
    }
}
