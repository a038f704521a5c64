//! Schema assembly.
//!
//! This module turns a partial schema description into a frozen schema.
//!
//! ## Components
//!
//! - [`SchemaBuilder`] - Applies defaults and validation, then runs the author's hook
//! - [`SchemaConfig`] - Root types plus type and directive registries
//! - [`Schema`] - The finished schema, shared read-only once set up
//! - [`DirectiveDefinition`] - Directive registration, with built-in `skip`/`include`
//!
//! ## Lifecycle
//!
//! 1. The author describes the schema with a [`SchemaDescriptor`]
//! 2. Missing roots, types, and directives are defaulted
//! 3. The author's [`SchemaDefinition`] hook customizes the configuration
//! 4. [`Schema::into_shared`] freezes the schema for concurrent resolution
//!
//! Root fields may still be appended through the `&mut` helpers on [`Schema`]
//! until it is shared. Mutating a schema that is already serving requests is
//! not supported; `Arc<Schema>` only hands out shared references.

mod builder;
mod config;
pub mod directives;
mod registry;

use std::sync::Arc;

pub use builder::{SchemaBuilder, SchemaDefinition, SchemaDescriptor};
pub use config::SchemaConfig;
pub use directives::{DirectiveDefinition, DirectiveLocation, default_directives};
pub use registry::{DirectiveRegistry, Registered, Registry, TypeRegistry};

use tracing::warn;

use crate::error::{Result, TypeSystemError};
use crate::types::{Field, ObjectType, TypeRef};

/// A built schema.
#[derive(Debug, Clone)]
pub struct Schema {
    config: SchemaConfig,
}

impl Schema {
    pub(crate) fn from_config(config: SchemaConfig) -> Self {
        Self { config }
    }

    pub fn name(&self) -> &str {
        self.config.name()
    }

    pub fn query_type(&self) -> &ObjectType {
        self.config.query()
    }

    pub fn mutation_type(&self) -> &ObjectType {
        self.config.mutation()
    }

    pub fn types(&self) -> &TypeRegistry {
        self.config.types()
    }

    pub fn directives(&self) -> &DirectiveRegistry {
        self.config.directives()
    }

    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Appends a field to the query root.
    ///
    /// # Errors
    ///
    /// Fails if the query root already has a field with that name.
    pub fn add_query_field(&mut self, field: Field) -> Result<()> {
        self.config.query_mut().add_field(field)
    }

    /// Appends a field to the mutation root.
    ///
    /// # Errors
    ///
    /// Fails if the mutation root already has a field with that name.
    pub fn add_mutation_field(&mut self, field: Field) -> Result<()> {
        self.config.mutation_mut().add_field(field)
    }

    /// Registers a type.
    ///
    /// # Errors
    ///
    /// Fails on a wrapper type, or when the name is taken by a registered or
    /// root type while duplicates are rejected.
    pub fn add_type(&mut self, ty: impl Into<TypeRef>) -> Result<()> {
        let ty = ty.into();
        if let Some(name) = ty.name().filter(|name| self.is_root_name(name)) {
            if self.types().rejects_duplicates() {
                return Err(TypeSystemError::DuplicateType(name.to_string()));
            }
            warn!(name = %name, "type name is shared with a root type");
        }
        self.config.types_mut().register(ty)
    }

    pub fn add_directive(&mut self, directive: impl Into<Arc<DirectiveDefinition>>) -> Result<()> {
        self.config.directives_mut().register(directive.into())
    }

    /// Looks a type up by name. Root types take precedence over the registry.
    pub fn lookup_type(&self, name: &str) -> Option<TypeRef> {
        [self.query_type(), self.mutation_type()]
            .into_iter()
            .find(|root| root.name == name)
            .map(|root| TypeRef::from(root.clone()))
            .or_else(|| self.types().get(name).map(Arc::clone))
    }

    fn is_root_name(&self, name: &str) -> bool {
        self.query_type().name == name || self.mutation_type().name == name
    }

    /// Freezes the schema for sharing across concurrent resolutions.
    pub fn into_shared(self) -> Arc<Schema> {
        Arc::new(self)
    }

    pub fn into_config(self) -> SchemaConfig {
        self.config
    }
}
