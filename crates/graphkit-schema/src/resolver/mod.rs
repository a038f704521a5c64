//! Field value extraction.
//!
//! [`get_property_value`] reads a field from a [`FieldSource`] without the
//! caller knowing whether the source is a mapping or an accessor object.
//!
//! ## Accessor resolution order
//!
//! For accessor sources the field name is converted with [`pascal_case`] and
//! the following accessors are tried; the first one declared wins:
//!
//! 1. `get{Name}` (skipped when the field name already starts with `is`)
//! 2. `is{Name}`
//! 3. `{Name}`
//!
//! If none is declared, the attribute named exactly like the field is read.
//!
//! ## Absence
//!
//! Resolution never fails. A field that cannot be found yields
//! [`Resolved::Absent`], which is kept apart from a field that exists and
//! holds `null` ([`Resolved::Null`]). Whether absence is an error is for the
//! executor to decide.

mod naming;
mod source;

pub use naming::{accessor_candidates, pascal_case};
pub use source::{AccessorSource, AccessorTable, Accessors, FieldSource};

use serde_json::Value;
use tracing::trace;

/// Outcome of reading a field from a source.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The field exists and holds a non-null value.
    Value(Value),
    /// The field exists and holds `null`.
    Null,
    /// No accessor, attribute, or key matched.
    Absent,
}

impl Resolved {
    fn from_found(value: Value) -> Self {
        match value {
            Value::Null => Resolved::Null,
            other => Resolved::Value(other),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Resolved::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Resolved::Null)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Resolved::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Collapses `Null` and `Absent` into `None`.
    pub fn into_option(self) -> Option<Value> {
        match self {
            Resolved::Value(value) => Some(value),
            Resolved::Null | Resolved::Absent => None,
        }
    }

    /// Collapses to a plain JSON value, with `Null` and `Absent` both `null`.
    pub fn into_value(self) -> Value {
        self.into_option().unwrap_or(Value::Null)
    }
}

impl From<Option<Value>> for Resolved {
    fn from(value: Option<Value>) -> Self {
        value.map_or(Resolved::Absent, Resolved::from_found)
    }
}

/// Reads `field_name` from `source`.
pub fn get_property_value(source: &FieldSource, field_name: &str) -> Resolved {
    match source {
        FieldSource::Accessor(object) => {
            for candidate in accessor_candidates(field_name) {
                if let Some(value) = object.accessor(&candidate) {
                    trace!(field = field_name, accessor = %candidate, "resolved through accessor");
                    return Resolved::from_found(value);
                }
            }
            trace!(field = field_name, "no accessor declared, reading attribute");
            object.attribute(field_name).into()
        }
        FieldSource::Mapping(map) => map.get(field_name).cloned().into(),
        FieldSource::Unresolvable => Resolved::Absent,
    }
}

impl FieldSource {
    /// Shorthand for [`get_property_value`].
    pub fn get(&self, field_name: &str) -> Resolved {
        get_property_value(self, field_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Account {
        name: String,
        active: bool,
        nickname: Option<String>,
    }

    fn account() -> Account {
        Account {
            name: "ada".into(),
            active: true,
            nickname: None,
        }
    }

    #[test]
    fn test_mapping_lookup() {
        let source = FieldSource::from_value(json!({"a": 1, "b": null}));
        assert_eq!(get_property_value(&source, "a"), Resolved::Value(json!(1)));
        assert_eq!(get_property_value(&source, "b"), Resolved::Null);
        assert_eq!(get_property_value(&source, "c"), Resolved::Absent);
    }

    #[test]
    fn test_mapping_keys_are_not_normalized() {
        let source = FieldSource::from_value(json!({"user_name": "ada"}));
        assert!(source.get("userName").is_absent());
        assert!(source.get("UserName").is_absent());
        assert_eq!(source.get("user_name").into_value(), json!("ada"));
    }

    #[test]
    fn test_get_accessor_beats_is_accessor() {
        let table = AccessorTable::new()
            .accessor("isName", |_: &Account| json!("from is"))
            .accessor("getName", |a: &Account| json!(a.name));
        let source = FieldSource::accessor(Accessors::new(account(), table));
        assert_eq!(source.get("name"), Resolved::Value(json!("ada")));
    }

    #[test]
    fn test_is_prefixed_field_skips_get_accessor() {
        let get_calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&get_calls);
        let table = AccessorTable::new()
            .accessor("getIsActive", move |_: &Account| {
                counter.fetch_add(1, Ordering::SeqCst);
                json!("wrong")
            })
            .accessor("isActive", |a: &Account| json!(a.active));
        let source = FieldSource::accessor(Accessors::new(account(), table));

        assert_eq!(source.get("is_active"), Resolved::Value(json!(true)));
        assert_eq!(get_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_is_accessor_used_when_no_getter() {
        let table = AccessorTable::new().accessor("isActive", |a: &Account| json!(a.active));
        let source = FieldSource::accessor(Accessors::new(account(), table));
        assert_eq!(source.get("active"), Resolved::Value(json!(true)));
    }

    #[test]
    fn test_bare_accessor_then_attribute_fallback() {
        let table = AccessorTable::new()
            .accessor("Nickname", |a: &Account| json!(a.nickname))
            .attribute("display_name", |a: &Account| json!(a.name.to_uppercase()));
        let source = FieldSource::accessor(Accessors::new(account(), table));

        assert_eq!(source.get("nickname"), Resolved::Null);
        assert_eq!(source.get("display_name"), Resolved::Value(json!("ADA")));
        assert_eq!(source.get("missing"), Resolved::Absent);
    }

    #[test]
    fn test_unresolvable_sources() {
        assert!(get_property_value(&FieldSource::Unresolvable, "a").is_absent());
        assert!(FieldSource::from_value(json!(7)).get("a").is_absent());
        assert!(FieldSource::from_value(json!(null)).get("a").is_absent());
    }

    #[test]
    fn test_collapsed_forms() {
        assert_eq!(Resolved::Null.into_option(), None);
        assert_eq!(Resolved::Absent.into_option(), None);
        assert_eq!(Resolved::Absent.into_value(), Value::Null);
        assert_eq!(Resolved::Value(json!(2)).as_value(), Some(&json!(2)));
        assert!(Resolved::from(Some(Value::Null)).is_null());
        assert!(Resolved::from(None::<Value>).is_absent());
    }
}
