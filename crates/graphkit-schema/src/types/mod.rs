//! Type descriptors for the GraphQL type system.
//!
//! ## Named types and wrappers
//!
//! A named type (scalar, enum, object, input object, interface, union) has an
//! identity of its own. `List` and `NonNull` are structural wrappers around
//! another type. [`GraphQLType::named_type`] strips every wrapper and
//! [`GraphQLType::nullable_type`] strips one outer `NonNull`.
//!
//! ## Built-in scalars
//!
//! [`scalars`] exposes one shared instance per built-in scalar, so the same
//! `String` type object can back fields across many schemas.

mod definition;
mod kind;
pub mod scalars;

pub use definition::{
    Deprecation, EnumType, EnumValue, Field, GraphQLType, InputObjectType, InputValue,
    InterfaceType, ObjectType, ScalarType, TypeRef, UnionType,
};
pub use kind::TypeKind;
