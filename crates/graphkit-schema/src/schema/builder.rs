//! Schema builder.
//!
//! This module provides `SchemaBuilder`, which turns a partial
//! [`SchemaDescriptor`] into a fully defaulted [`SchemaConfig`] and hands it to
//! the author's [`SchemaDefinition`] hook before freezing it into a
//! [`Schema`].

use std::sync::Arc;

use tracing::{debug, trace, warn};

use super::config::SchemaConfig;
use super::directives::{DirectiveDefinition, default_directives};
use super::registry::{DirectiveRegistry, TypeRegistry};
use super::Schema;
use crate::classifier::is_object_type;
use crate::config::KernelConfig;
use crate::error::{Result, TypeSystemError};
use crate::types::{GraphQLType, ObjectType, TypeRef};

/// Author-supplied, possibly partial schema description.
///
/// Every field is optional; [`SchemaBuilder`] fills in what is missing.
#[derive(Debug, Clone, Default)]
pub struct SchemaDescriptor {
    pub query: Option<GraphQLType>,
    pub mutation: Option<GraphQLType>,
    pub types: Option<Vec<TypeRef>>,
    pub directives: Option<Vec<Arc<DirectiveDefinition>>>,
    pub name: Option<String>,
}

impl SchemaDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<GraphQLType>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_mutation(mut self, mutation: impl Into<GraphQLType>) -> Self {
        self.mutation = Some(mutation.into());
        self
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = TypeRef>) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }

    /// Replaces the built-in directive set. Passing an empty list yields a
    /// schema without directives.
    pub fn with_directives(
        mut self,
        directives: impl IntoIterator<Item = Arc<DirectiveDefinition>>,
    ) -> Self {
        self.directives = Some(directives.into_iter().collect());
        self
    }
}

/// Schema author's customization hook.
///
/// Runs once, after defaulting and before the schema is frozen, with mutable
/// access to the configuration so the author can add root fields, types, and
/// directives.
pub trait SchemaDefinition {
    /// Descriptor used by [`SchemaBuilder::define`].
    fn descriptor(&self) -> SchemaDescriptor {
        SchemaDescriptor::default()
    }

    /// # Errors
    ///
    /// Errors abort the build and propagate to the caller.
    fn build(&self, config: &mut SchemaConfig) -> Result<()>;
}

impl<F> SchemaDefinition for F
where
    F: Fn(&mut SchemaConfig) -> Result<()>,
{
    fn build(&self, config: &mut SchemaConfig) -> Result<()> {
        self(config)
    }
}

/// Builds schemas from descriptors.
///
/// # Example
///
/// ```
/// use graphkit_schema::schema::{SchemaBuilder, SchemaDescriptor};
/// use graphkit_schema::types::{Field, scalars};
///
/// let schema = SchemaBuilder::new()
///     .build_with(SchemaDescriptor::new().with_name("Shop"), |config| {
///         config.query_mut().add_field(Field::new("version", scalars::string()))
///     })
///     .unwrap();
///
/// assert_eq!(schema.query_type().name, "ShopQuery");
/// assert_eq!(schema.mutation_type().name, "ShopMutation");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    config: KernelConfig,
}

impl SchemaBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: KernelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Applies defaults and validation, without running any hook.
    ///
    /// # Errors
    ///
    /// Returns an error if a supplied root is not an object type, a supplied
    /// type is a wrapper, or names collide while duplicates are rejected.
    pub fn build_config(&self, descriptor: SchemaDescriptor) -> Result<SchemaConfig> {
        let SchemaDescriptor {
            query,
            mutation,
            types,
            directives,
            name,
        } = descriptor;

        let name = name.unwrap_or_else(|| self.config.default_schema_name.clone());
        debug!(schema = %name, "Building schema configuration");

        let query = match query {
            Some(ty) => into_root("query", ty)?,
            None => {
                let type_name = self.config.query_type_name(&name);
                trace!(type_name = %type_name, "Synthesizing empty query root");
                ObjectType::new(type_name)
            }
        };

        let mutation = match mutation {
            Some(ty) => into_root("mutation", ty)?,
            None => {
                let type_name = self.config.mutation_type_name(&name);
                trace!(type_name = %type_name, "Synthesizing empty mutation root");
                ObjectType::new(type_name)
            }
        };

        let mut type_registry = TypeRegistry::new(self.config.reject_duplicate_names);
        type_registry.extend(types.unwrap_or_default())?;

        let directives = directives.unwrap_or_else(default_directives);
        let mut directive_registry = DirectiveRegistry::new(self.config.reject_duplicate_names);
        directive_registry.extend(directives)?;

        Ok(SchemaConfig::new(
            name,
            query,
            mutation,
            type_registry,
            directive_registry,
        ))
    }

    /// Builds a schema, running `definition` before freezing it.
    ///
    /// # Errors
    ///
    /// Returns defaulting/validation errors from [`Self::build_config`], any
    /// error raised by the hook, and [`TypeSystemError::DuplicateType`] when a
    /// registered type takes the name of a root type.
    pub fn build<D>(&self, descriptor: SchemaDescriptor, definition: &D) -> Result<Schema>
    where
        D: SchemaDefinition + ?Sized,
    {
        let mut config = self.build_config(descriptor)?;
        definition.build(&mut config)?;
        self.finish(config)
    }

    /// Builds a schema from a closure hook.
    ///
    /// # Errors
    ///
    /// Same as [`Self::build`].
    pub fn build_with<F>(&self, descriptor: SchemaDescriptor, hook: F) -> Result<Schema>
    where
        F: FnOnce(&mut SchemaConfig) -> Result<()>,
    {
        let mut config = self.build_config(descriptor)?;
        hook(&mut config)?;
        self.finish(config)
    }

    /// Builds a schema from a definition that carries its own descriptor.
    ///
    /// # Errors
    ///
    /// Same as [`Self::build`].
    pub fn define<D>(&self, definition: &D) -> Result<Schema>
    where
        D: SchemaDefinition + ?Sized,
    {
        self.build(definition.descriptor(), definition)
    }

    fn finish(&self, config: SchemaConfig) -> Result<Schema> {
        self.check_root_names(&config)?;
        debug!(
            schema = %config.name(),
            query_fields = config.query().field_count(),
            mutation_fields = config.mutation().field_count(),
            types = config.types().len(),
            directives = config.directives().len(),
            "Schema build complete"
        );
        Ok(Schema::from_config(config))
    }

    /// Root names share the type namespace with the registry. Runs after the
    /// hook so types it registered are covered too.
    fn check_root_names(&self, config: &SchemaConfig) -> Result<()> {
        let query = &config.query().name;
        let mutation = &config.mutation().name;

        let clash = if query == mutation {
            Some(query)
        } else {
            [query, mutation]
                .into_iter()
                .find(|name| config.types().contains(name))
        };

        if let Some(name) = clash {
            if self.config.reject_duplicate_names {
                return Err(TypeSystemError::DuplicateType(name.clone()));
            }
            warn!(name = %name, "type name is shared with a root type");
        }
        Ok(())
    }
}

fn into_root(root: &'static str, ty: GraphQLType) -> Result<ObjectType> {
    let kind = ty.kind();
    if !is_object_type(&ty) {
        return Err(TypeSystemError::InvalidRootType { root, kind });
    }
    ty.into_object()
        .map_err(|_| TypeSystemError::InvalidRootType { root, kind })
}
