//! Name-keyed registries for schema types and directives.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::warn;

use super::directives::DirectiveDefinition;
use crate::error::{Result, TypeSystemError};
use crate::types::TypeRef;

/// Something that can be stored in a [`Registry`].
pub trait Registered: Clone {
    /// Registry key. `None` means the item cannot be registered.
    fn registry_name(&self) -> Option<&str>;

    fn duplicate_error(name: &str) -> TypeSystemError;

    fn unnamed_error(&self) -> TypeSystemError;
}

impl Registered for TypeRef {
    fn registry_name(&self) -> Option<&str> {
        self.name()
    }

    fn duplicate_error(name: &str) -> TypeSystemError {
        TypeSystemError::DuplicateType(name.to_string())
    }

    fn unnamed_error(&self) -> TypeSystemError {
        TypeSystemError::invalid_type(format!(
            "only named types can be registered, got {} wrapper `{self}`",
            self.kind()
        ))
    }
}

impl Registered for Arc<DirectiveDefinition> {
    fn registry_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn duplicate_error(name: &str) -> TypeSystemError {
        TypeSystemError::DuplicateDirective(name.to_string())
    }

    fn unnamed_error(&self) -> TypeSystemError {
        TypeSystemError::definition("directive without a name")
    }
}

/// Insertion-ordered registry with unique names.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: IndexMap<String, T>,
    reject_duplicates: bool,
}

/// Registry of named types.
pub type TypeRegistry = Registry<TypeRef>;

/// Registry of directive definitions.
pub type DirectiveRegistry = Registry<Arc<DirectiveDefinition>>;

impl<T: Registered> Registry<T> {
    pub fn new(reject_duplicates: bool) -> Self {
        Self {
            entries: IndexMap::new(),
            reject_duplicates,
        }
    }

    /// Adds an item.
    ///
    /// # Errors
    ///
    /// Fails when the item has no name, or when the name is taken and the
    /// registry rejects duplicates. Otherwise a duplicate replaces the earlier
    /// entry in place.
    pub fn register(&mut self, item: T) -> Result<()> {
        let Some(name) = item.registry_name() else {
            return Err(item.unnamed_error());
        };

        if self.entries.contains_key(name) {
            if self.reject_duplicates {
                return Err(T::duplicate_error(name));
            }
            warn!(name = %name, "replacing previously registered entry");
        }

        let name = name.to_string();
        self.entries.insert(name, item);
        Ok(())
    }

    /// Whether a taken name fails registration instead of replacing.
    pub fn rejects_duplicates(&self) -> bool {
        self.reject_duplicates
    }

    /// Adds every item, stopping at the first failure.
    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) -> Result<()> {
        items.into_iter().try_for_each(|item| self.register(item))
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
