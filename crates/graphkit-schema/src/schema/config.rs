use super::registry::{DirectiveRegistry, TypeRegistry};
use crate::types::ObjectType;

/// Fully defaulted schema configuration.
///
/// Holds exactly one query root and one mutation root (possibly without
/// fields) plus the type and directive registries. Mutable access exists only
/// while the schema is being defined; once wrapped in a shared
/// [`super::Schema`] the configuration is read-only.
#[derive(Debug, Clone)]
pub struct SchemaConfig {
    name: String,
    query: ObjectType,
    mutation: ObjectType,
    types: TypeRegistry,
    directives: DirectiveRegistry,
}

impl SchemaConfig {
    pub(crate) fn new(
        name: String,
        query: ObjectType,
        mutation: ObjectType,
        types: TypeRegistry,
        directives: DirectiveRegistry,
    ) -> Self {
        Self {
            name,
            query,
            mutation,
            types,
            directives,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn query(&self) -> &ObjectType {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut ObjectType {
        &mut self.query
    }

    pub fn mutation(&self) -> &ObjectType {
        &self.mutation
    }

    pub fn mutation_mut(&mut self) -> &mut ObjectType {
        &mut self.mutation
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeRegistry {
        &mut self.types
    }

    pub fn directives(&self) -> &DirectiveRegistry {
        &self.directives
    }

    pub fn directives_mut(&mut self) -> &mut DirectiveRegistry {
        &mut self.directives
    }
}
