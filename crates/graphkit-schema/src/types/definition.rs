//! Type descriptors.
//!
//! A [`GraphQLType`] is either a named type (scalar, enum, object, input
//! object, interface, union) or a structural wrapper ([`GraphQLType::List`],
//! [`GraphQLType::NonNull`]) around another type. Types are shared through
//! [`TypeRef`] so one instance can be referenced from many fields and many
//! schemas.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use super::TypeKind;
use crate::error::{Result, TypeSystemError};

/// Shared handle to a type descriptor.
pub type TypeRef = Arc<GraphQLType>;

/// A type-system construct.
#[derive(Debug, Clone)]
pub enum GraphQLType {
    /// Leaf value such as `Int` or `DateTime`.
    Scalar(ScalarType),
    /// Leaf value restricted to a fixed set of names.
    Enum(EnumType),
    /// Output type with fields.
    Object(ObjectType),
    /// Structured argument type.
    InputObject(InputObjectType),
    /// Abstract type implemented by objects.
    Interface(InterfaceType),
    /// Abstract type over a set of object types.
    Union(UnionType),
    /// List of the inner type.
    List(TypeRef),
    /// Non-null version of the inner type.
    NonNull(TypeRef),
}

impl GraphQLType {
    /// Wraps `inner` in a list type.
    pub fn list(inner: impl Into<TypeRef>) -> Self {
        GraphQLType::List(inner.into())
    }

    /// Wraps `inner` in a non-null type.
    pub fn non_null(inner: impl Into<TypeRef>) -> Self {
        GraphQLType::NonNull(inner.into())
    }

    /// Introspection kind of this type.
    pub fn kind(&self) -> TypeKind {
        match self {
            GraphQLType::Scalar(_) => TypeKind::Scalar,
            GraphQLType::Enum(_) => TypeKind::Enum,
            GraphQLType::Object(_) => TypeKind::Object,
            GraphQLType::InputObject(_) => TypeKind::InputObject,
            GraphQLType::Interface(_) => TypeKind::Interface,
            GraphQLType::Union(_) => TypeKind::Union,
            GraphQLType::List(_) => TypeKind::List,
            GraphQLType::NonNull(_) => TypeKind::NonNull,
        }
    }

    /// Name of a named type. Wrappers have no name.
    pub fn name(&self) -> Option<&str> {
        match self {
            GraphQLType::Scalar(t) => Some(&t.name),
            GraphQLType::Enum(t) => Some(&t.name),
            GraphQLType::Object(t) => Some(&t.name),
            GraphQLType::InputObject(t) => Some(&t.name),
            GraphQLType::Interface(t) => Some(&t.name),
            GraphQLType::Union(t) => Some(&t.name),
            GraphQLType::List(_) | GraphQLType::NonNull(_) => None,
        }
    }

    /// Description of a named type, if one was given.
    pub fn description(&self) -> Option<&str> {
        match self {
            GraphQLType::Scalar(t) => t.description.as_deref(),
            GraphQLType::Enum(t) => t.description.as_deref(),
            GraphQLType::Object(t) => t.description.as_deref(),
            GraphQLType::InputObject(t) => t.description.as_deref(),
            GraphQLType::Interface(t) => t.description.as_deref(),
            GraphQLType::Union(t) => t.description.as_deref(),
            GraphQLType::List(_) | GraphQLType::NonNull(_) => None,
        }
    }

    /// The type wrapped by a `List` or `NonNull`.
    pub fn of_type(&self) -> Option<&TypeRef> {
        match self {
            GraphQLType::List(inner) | GraphQLType::NonNull(inner) => Some(inner),
            _ => None,
        }
    }

    /// Strips one outer `NonNull` wrapper. Any other type is returned as is.
    pub fn nullable_type(&self) -> &GraphQLType {
        match self {
            GraphQLType::NonNull(inner) => inner,
            other => other,
        }
    }

    /// Strips every structural wrapper down to the named type.
    pub fn named_type(&self) -> &GraphQLType {
        let mut current = self;
        while let Some(inner) = current.of_type() {
            current = inner;
        }
        current
    }

    /// True only for the shared scalar instances in [`super::scalars`].
    ///
    /// An author-defined scalar that reuses a built-in name, or a clone taken
    /// out of the shared `Arc`, is not built-in. Use
    /// [`super::scalars::is_builtin_scalar_name`] to check a name alone.
    pub fn is_builtin(&self) -> bool {
        match self {
            GraphQLType::Scalar(t) => super::scalars::scalar_by_name(&t.name)
                .is_some_and(|builtin| std::ptr::eq(self, &*builtin)),
            _ => false,
        }
    }

    /// Borrows the object type, if this is one.
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            GraphQLType::Object(t) => Some(t),
            _ => None,
        }
    }

    /// Unwraps an object type, handing any other type back unchanged.
    pub fn into_object(self) -> std::result::Result<ObjectType, Self> {
        match self {
            GraphQLType::Object(t) => Ok(t),
            other => Err(other),
        }
    }
}

impl fmt::Display for GraphQLType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphQLType::List(inner) => write!(f, "[{inner}]"),
            GraphQLType::NonNull(inner) => write!(f, "{inner}!"),
            named => f.write_str(named.name().unwrap_or_default()),
        }
    }
}

macro_rules! impl_into_type {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for GraphQLType {
                fn from(value: $ty) -> Self {
                    GraphQLType::$variant(value)
                }
            }

            impl From<$ty> for TypeRef {
                fn from(value: $ty) -> Self {
                    Arc::new(GraphQLType::$variant(value))
                }
            }
        )*
    };
}

impl_into_type! {
    ScalarType => Scalar,
    EnumType => Enum,
    ObjectType => Object,
    InputObjectType => InputObject,
    InterfaceType => Interface,
    UnionType => Union,
}

/// Deprecation state of a field or enum value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Deprecation {
    /// Not deprecated.
    #[default]
    Current,
    /// Deprecated, with an optional reason.
    Deprecated(Option<String>),
}

impl Deprecation {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Deprecation::Deprecated(_))
    }

    /// Deprecation reason, if deprecated with one.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Deprecation::Deprecated(reason) => reason.as_deref(),
            Deprecation::Current => None,
        }
    }
}

/// A named scalar. Parsing and serialization live outside the kernel.
#[derive(Debug, Clone)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One member of an [`EnumType`].
#[derive(Debug, Clone)]
pub struct EnumValue {
    /// Value name as written in queries.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Deprecation state.
    pub deprecation: Deprecation,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecation: Deprecation::Current,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the value deprecated.
    pub fn deprecated(mut self, reason: Option<impl Into<String>>) -> Self {
        self.deprecation = Deprecation::Deprecated(reason.map(Into::into));
        self
    }
}

/// An enum type.
#[derive(Debug, Clone)]
pub struct EnumType {
    /// Type name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Members, in declaration order.
    pub values: Vec<EnumValue>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a member. Accepts a bare `&str` name.
    pub fn value(mut self, value: impl Into<EnumValue>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Checks for a member by exact name.
    pub fn has_value(&self, name: &str) -> bool {
        self.values.iter().any(|v| v.name == name)
    }
}

impl From<&str> for EnumValue {
    fn from(name: &str) -> Self {
        EnumValue::new(name)
    }
}

/// An argument or input object field.
#[derive(Debug, Clone)]
pub struct InputValue {
    /// Argument or field name.
    pub name: String,
    /// Declared input type.
    pub ty: TypeRef,
    /// Value used when the caller omits this input.
    pub default_value: Option<Value>,
    /// Optional description.
    pub description: Option<String>,
}

impl InputValue {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default_value: None,
            description: None,
        }
    }

    /// Sets the default used when the caller omits this input.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An output field of an object or interface type.
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Output type.
    pub ty: TypeRef,
    /// Arguments, in declaration order.
    pub args: Vec<InputValue>,
    /// Optional description.
    pub description: Option<String>,
    /// Deprecation state.
    pub deprecation: Deprecation,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            args: Vec::new(),
            description: None,
            deprecation: Deprecation::Current,
        }
    }

    /// Appends an argument.
    pub fn argument(mut self, arg: InputValue) -> Self {
        self.args.push(arg);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecated(mut self, reason: Option<impl Into<String>>) -> Self {
        self.deprecation = Deprecation::Deprecated(reason.map(Into::into));
        self
    }

    /// Finds an argument by name.
    pub fn arg(&self, name: &str) -> Option<&InputValue> {
        self.args.iter().find(|a| a.name == name)
    }
}

/// An object type. Root query and mutation types are object types.
#[derive(Debug, Clone)]
pub struct ObjectType {
    /// Type name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Fields keyed by name, in insertion order.
    pub fields: IndexMap<String, Field>,
    /// Names of implemented interfaces.
    pub interfaces: Vec<String>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
            interfaces: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder-style field registration. A field with the same name replaces
    /// the previous one.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    /// Declares an implemented interface by name.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Appends a field.
    ///
    /// # Errors
    ///
    /// Returns [`TypeSystemError::DuplicateField`] if the name is taken.
    pub fn add_field(&mut self, field: Field) -> Result<()> {
        if self.fields.contains_key(&field.name) {
            return Err(TypeSystemError::duplicate_field(&self.name, field.name));
        }
        self.fields.insert(field.name.clone(), field);
        Ok(())
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }
}

/// An interface type.
#[derive(Debug, Clone)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, Field>,
}

impl InterfaceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }
}

/// A union type. Members are referenced by name.
#[derive(Debug, Clone)]
pub struct UnionType {
    /// Type name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Names of the member object types.
    pub types: Vec<String>,
}

impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            types: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a member object type by name.
    pub fn member(mut self, type_name: impl Into<String>) -> Self {
        self.types.push(type_name.into());
        self
    }
}

/// An input object type.
#[derive(Debug, Clone)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, InputValue>,
}

impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: InputValue) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scalars;

    fn user_type() -> ObjectType {
        ObjectType::new("User")
            .field(Field::new("id", GraphQLType::non_null(scalars::id())))
            .field(Field::new("name", scalars::string()))
    }

    #[test]
    fn test_named_type_strips_all_wrappers() {
        let ty = GraphQLType::non_null(GraphQLType::list(GraphQLType::non_null(scalars::int())));
        assert_eq!(ty.kind(), TypeKind::NonNull);
        assert_eq!(ty.named_type().name(), Some("Int"));
        assert_eq!(ty.to_string(), "[Int!]!");
    }

    #[test]
    fn test_nullable_type_strips_one_non_null() {
        let list = GraphQLType::list(scalars::string());
        let ty = GraphQLType::non_null(list);
        assert_eq!(ty.nullable_type().kind(), TypeKind::List);

        let plain = GraphQLType::from(ScalarType::new("Money"));
        assert_eq!(plain.nullable_type().name(), Some("Money"));
    }

    #[test]
    fn test_wrappers_have_no_name() {
        let ty = GraphQLType::list(scalars::string());
        assert_eq!(ty.name(), None);
        assert!(ty.of_type().is_some());
        assert!(GraphQLType::from(user_type()).of_type().is_none());
    }

    #[test]
    fn test_add_field_rejects_duplicates() {
        let mut user = user_type();
        assert_eq!(user.field_count(), 2);
        user.add_field(Field::new("email", scalars::string())).unwrap();
        let err = user
            .add_field(Field::new("email", scalars::string()))
            .unwrap_err();
        assert!(matches!(err, TypeSystemError::DuplicateField { .. }));
        assert_eq!(user.field_count(), 3);
        let names: Vec<_> = user.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "name", "email"]);
    }

    #[test]
    fn test_enum_values_and_deprecation() {
        let status = EnumType::new("Status")
            .value("ACTIVE")
            .value(EnumValue::new("LEGACY").deprecated(Some("use ACTIVE")));
        assert!(status.has_value("ACTIVE"));
        assert!(!status.has_value("active"));
        assert_eq!(status.values[1].deprecation.reason(), Some("use ACTIVE"));
        assert!(!status.values[0].deprecation.is_deprecated());
    }

    #[test]
    fn test_builtin_detection() {
        assert!(scalars::string().is_builtin());
        assert!(!GraphQLType::from(ScalarType::new("Money")).is_builtin());
        assert!(!GraphQLType::from(user_type()).is_builtin());
    }

    #[test]
    fn test_custom_scalar_with_builtin_name_is_not_builtin() {
        let custom = TypeRef::from(ScalarType::new("Date").description("ISO week date"));
        assert!(!custom.is_builtin());
        assert!(scalars::date().is_builtin());
        assert!(scalars::is_builtin_scalar_name(custom.name().unwrap()));
    }
}
