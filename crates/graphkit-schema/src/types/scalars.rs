//! Built-in scalar types.
//!
//! The kernel treats scalars as opaque type objects: parsing and serializing
//! scalar values belongs to the executor. What lives here is the set of
//! built-in scalar names (used to classify bare type names) and one shared
//! instance per built-in scalar.
//!
//! | Name | Description |
//! |---|---|
//! | `Int` | Signed 32-bit integer |
//! | `Float` | Double-precision floating point value |
//! | `String` | UTF-8 character sequence |
//! | `Boolean` | `true` or `false` |
//! | `ID` | Unique identifier, serialized as a string |
//! | `DateTime` | Date and time without timezone |
//! | `DateTimeTz` | Date and time with timezone |
//! | `Date` | Calendar date |
//! | `Timestamp` | Seconds since the Unix epoch |

use std::sync::{Arc, LazyLock};

use super::{GraphQLType, ScalarType, TypeRef};

/// Lower-cased names of the built-in scalars.
pub const SCALAR_TYPE_NAMES: [&str; 9] = [
    "int",
    "float",
    "string",
    "boolean",
    "id",
    "datetime",
    "datetimetz",
    "date",
    "timestamp",
];

/// Checks a bare type name against the built-in scalars, ignoring case.
pub fn is_builtin_scalar_name(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    SCALAR_TYPE_NAMES.contains(&lowered.as_str())
}

fn scalar(name: &str, description: &str) -> TypeRef {
    Arc::new(GraphQLType::Scalar(
        ScalarType::new(name).description(description),
    ))
}

pub(crate) static INT: LazyLock<TypeRef> =
    LazyLock::new(|| scalar("Int", "Signed 32-bit integer"));
pub(crate) static FLOAT: LazyLock<TypeRef> =
    LazyLock::new(|| scalar("Float", "Double-precision floating point value"));
pub(crate) static STRING: LazyLock<TypeRef> =
    LazyLock::new(|| scalar("String", "UTF-8 character sequence"));
pub(crate) static BOOLEAN: LazyLock<TypeRef> =
    LazyLock::new(|| scalar("Boolean", "true or false"));
pub(crate) static ID: LazyLock<TypeRef> =
    LazyLock::new(|| scalar("ID", "Unique identifier, serialized as a string"));
pub(crate) static DATE_TIME: LazyLock<TypeRef> =
    LazyLock::new(|| scalar("DateTime", "Date and time without timezone"));
pub(crate) static DATE_TIME_TZ: LazyLock<TypeRef> =
    LazyLock::new(|| scalar("DateTimeTz", "Date and time with timezone"));
pub(crate) static DATE: LazyLock<TypeRef> = LazyLock::new(|| scalar("Date", "Calendar date"));
pub(crate) static TIMESTAMP: LazyLock<TypeRef> =
    LazyLock::new(|| scalar("Timestamp", "Seconds since the Unix epoch"));

pub fn int() -> TypeRef {
    Arc::clone(&*INT)
}

pub fn float() -> TypeRef {
    Arc::clone(&*FLOAT)
}

pub fn string() -> TypeRef {
    Arc::clone(&*STRING)
}

pub fn boolean() -> TypeRef {
    Arc::clone(&*BOOLEAN)
}

pub fn id() -> TypeRef {
    Arc::clone(&*ID)
}

pub fn date_time() -> TypeRef {
    Arc::clone(&*DATE_TIME)
}

pub fn date_time_tz() -> TypeRef {
    Arc::clone(&*DATE_TIME_TZ)
}

pub fn date() -> TypeRef {
    Arc::clone(&*DATE)
}

pub fn timestamp() -> TypeRef {
    Arc::clone(&*TIMESTAMP)
}

/// Looks up a built-in scalar by name, ignoring case.
pub fn scalar_by_name(name: &str) -> Option<TypeRef> {
    let found = match name.to_ascii_lowercase().as_str() {
        "int" => &*INT,
        "float" => &*FLOAT,
        "string" => &*STRING,
        "boolean" => &*BOOLEAN,
        "id" => &*ID,
        "datetime" => &*DATE_TIME,
        "datetimetz" => &*DATE_TIME_TZ,
        "date" => &*DATE,
        "timestamp" => &*TIMESTAMP,
        _ => return None,
    };
    Some(Arc::clone(found))
}

/// All built-in scalars, in declaration order.
pub fn all() -> Vec<TypeRef> {
    SCALAR_TYPE_NAMES
        .iter()
        .filter_map(|name| scalar_by_name(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_are_case_insensitive() {
        assert!(is_builtin_scalar_name("String"));
        assert!(is_builtin_scalar_name("STRING"));
        assert!(is_builtin_scalar_name("DateTimeTz"));
        assert!(!is_builtin_scalar_name("User"));
        assert!(!is_builtin_scalar_name(""));
    }

    #[test]
    fn test_shared_instances() {
        assert!(Arc::ptr_eq(&string(), &string()));
        let by_name = scalar_by_name("iD").unwrap();
        assert!(Arc::ptr_eq(&by_name, &id()));
        assert!(scalar_by_name("Money").is_none());
    }

    #[test]
    fn test_all_builtins_resolve() {
        let scalars = all();
        assert_eq!(scalars.len(), SCALAR_TYPE_NAMES.len());
        for (ty, name) in scalars.iter().zip(SCALAR_TYPE_NAMES) {
            assert_eq!(ty.name().unwrap().to_ascii_lowercase(), name);
            assert!(ty.is_builtin());
        }
    }
}
