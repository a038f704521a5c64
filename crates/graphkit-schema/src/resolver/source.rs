//! Backing data sources for field resolution.
//!
//! A source is classified once, when it is bound, into a [`FieldSource`]:
//! a plain mapping, an object exposing accessors, or nothing resolvable.
//! Accessor objects declare their accessors up front through an
//! [`AccessorTable`] instead of relying on runtime method discovery.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

/// An object exposing zero-argument accessors and plain attributes.
pub trait AccessorSource: Send + Sync {
    /// Invokes the accessor declared as `name`, or returns `None` when no such
    /// accessor exists. Accessor names match ASCII case-insensitively, the way
    /// method names do in dynamically dispatched object models.
    fn accessor(&self, name: &str) -> Option<Value>;

    /// Reads the attribute `name` directly. Attribute names match exactly.
    fn attribute(&self, _name: &str) -> Option<Value> {
        None
    }
}

type Getter<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;

/// Accessors and attributes declared for a backing type `T`.
///
/// Build one table per type, typically in a `LazyLock`, and share it between
/// instances through [`Accessors`].
///
/// ```
/// use graphkit_schema::resolver::{AccessorTable, Accessors};
/// use serde_json::json;
///
/// struct User {
///     name: String,
///     active: bool,
/// }
///
/// let table = AccessorTable::new()
///     .accessor("getName", |u: &User| json!(u.name))
///     .accessor("isActive", |u: &User| json!(u.active));
///
/// let source = Accessors::new(User { name: "ada".into(), active: true }, table);
/// ```
pub struct AccessorTable<T> {
    accessors: HashMap<String, Getter<T>>,
    attributes: HashMap<String, Getter<T>>,
}

impl<T> AccessorTable<T> {
    pub fn new() -> Self {
        Self {
            accessors: HashMap::new(),
            attributes: HashMap::new(),
        }
    }

    /// Declares a zero-argument accessor. Re-declaring a name (in any case)
    /// replaces the earlier getter.
    pub fn accessor<F>(mut self, name: &str, getter: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.accessors
            .insert(name.to_ascii_lowercase(), Box::new(getter));
        self
    }

    /// Declares a directly readable attribute.
    pub fn attribute<F>(mut self, name: &str, getter: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.attributes.insert(name.to_string(), Box::new(getter));
        self
    }

    pub fn has_accessor(&self, name: &str) -> bool {
        self.accessors.contains_key(&name.to_ascii_lowercase())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    fn invoke(&self, value: &T, name: &str) -> Option<Value> {
        self.accessors
            .get(&name.to_ascii_lowercase())
            .map(|getter| getter(value))
    }

    fn read(&self, value: &T, name: &str) -> Option<Value> {
        self.attributes.get(name).map(|getter| getter(value))
    }
}

impl<T> Default for AccessorTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for AccessorTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut accessors: Vec<_> = self.accessors.keys().collect();
        accessors.sort();
        let mut attributes: Vec<_> = self.attributes.keys().collect();
        attributes.sort();
        f.debug_struct("AccessorTable")
            .field("accessors", &accessors)
            .field("attributes", &attributes)
            .finish()
    }
}

/// A value paired with the accessor table of its type.
pub struct Accessors<T> {
    value: T,
    table: Arc<AccessorTable<T>>,
}

impl<T> Accessors<T> {
    pub fn new(value: T, table: impl Into<Arc<AccessorTable<T>>>) -> Self {
        Self {
            value,
            table: table.into(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Send + Sync> AccessorSource for Accessors<T> {
    fn accessor(&self, name: &str) -> Option<Value> {
        self.table.invoke(&self.value, name)
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        self.table.read(&self.value, name)
    }
}

/// Backing data for one object being resolved.
#[derive(Clone, Default)]
pub enum FieldSource {
    /// A plain key/value mapping.
    Mapping(Map<String, Value>),
    /// An object exposing accessors.
    Accessor(Arc<dyn AccessorSource>),
    /// A primitive, null, or anything else no field can be read from.
    #[default]
    Unresolvable,
}

impl FieldSource {
    /// Binds a JSON value: objects become mappings, everything else is
    /// unresolvable.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => FieldSource::Mapping(map),
            _ => FieldSource::Unresolvable,
        }
    }

    pub fn accessor(source: impl AccessorSource + 'static) -> Self {
        FieldSource::Accessor(Arc::new(source))
    }

    pub fn is_resolvable(&self) -> bool {
        !matches!(self, FieldSource::Unresolvable)
    }
}

impl From<Map<String, Value>> for FieldSource {
    fn from(map: Map<String, Value>) -> Self {
        FieldSource::Mapping(map)
    }
}

impl From<Value> for FieldSource {
    fn from(value: Value) -> Self {
        FieldSource::from_value(value)
    }
}

impl fmt::Debug for FieldSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSource::Mapping(map) => f.debug_tuple("Mapping").field(map).finish(),
            FieldSource::Accessor(_) => f.write_str("Accessor(..)"),
            FieldSource::Unresolvable => f.write_str("Unresolvable"),
        }
    }
}
