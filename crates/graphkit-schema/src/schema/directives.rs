//! Directive definitions.
//!
//! Only directive *registration* lives here; evaluating a directive against a
//! query is the executor's job. Two directives are built in:
//! - `@skip(if: Boolean!)` - Omit the field when the argument is true
//! - `@include(if: Boolean!)` - Keep the field only when the argument is true
//!
//! Schemas that do not declare directives share one process-wide copy of the
//! built-in set (see [`default_directives`]).

use std::fmt;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::types::{GraphQLType, InputValue, scalars};

/// Built-in directive names.
pub mod names {
    pub const SKIP: &str = "skip";
    pub const INCLUDE: &str = "include";
}

/// Positions in an executable document where a directive may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
        };
        f.write_str(name)
    }
}

/// A directive a schema accepts.
#[derive(Debug, Clone)]
pub struct DirectiveDefinition {
    pub name: String,
    pub description: Option<String>,
    pub locations: Vec<DirectiveLocation>,
    pub args: Vec<InputValue>,
}

impl DirectiveDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            locations: Vec::new(),
            args: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: DirectiveLocation) -> Self {
        if !self.locations.contains(&location) {
            self.locations.push(location);
        }
        self
    }

    pub fn argument(mut self, arg: InputValue) -> Self {
        self.args.push(arg);
        self
    }

    pub fn arg(&self, name: &str) -> Option<&InputValue> {
        self.args.iter().find(|a| a.name == name)
    }

    pub fn allowed_at(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    /// The `@skip` directive.
    pub fn skip() -> Self {
        conditional(
            names::SKIP,
            "Directs the executor to skip this field or fragment when the `if` argument is true.",
            "Skipped when true.",
        )
    }

    /// The `@include` directive.
    pub fn include() -> Self {
        conditional(
            names::INCLUDE,
            "Directs the executor to include this field or fragment only when the `if` argument is true.",
            "Included when true.",
        )
    }
}

fn conditional(name: &str, description: &str, arg_description: &str) -> DirectiveDefinition {
    DirectiveDefinition::new(name)
        .description(description)
        .location(DirectiveLocation::Field)
        .location(DirectiveLocation::FragmentSpread)
        .location(DirectiveLocation::InlineFragment)
        .argument(
            InputValue::new("if", GraphQLType::non_null(scalars::boolean()))
                .description(arg_description),
        )
}

static DEFAULT_DIRECTIVES: LazyLock<[Arc<DirectiveDefinition>; 2]> = LazyLock::new(|| {
    [
        Arc::new(DirectiveDefinition::skip()),
        Arc::new(DirectiveDefinition::include()),
    ]
});

/// The built-in directive set, `skip` then `include`.
///
/// Built once per process; callers receive shared handles.
pub fn default_directives() -> Vec<Arc<DirectiveDefinition>> {
    DEFAULT_DIRECTIVES.iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::is_input_type;

    #[test]
    fn test_default_directives() {
        let directives = default_directives();
        let declared: Vec<_> = directives.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(declared, [names::SKIP, names::INCLUDE]);
    }

    #[test]
    fn test_default_directives_are_shared() {
        let first = default_directives();
        let second = default_directives();
        assert!(Arc::ptr_eq(&first[0], &second[0]));
        assert!(Arc::ptr_eq(&first[1], &second[1]));
    }

    #[test]
    fn test_conditional_directive_shape() {
        let skip = DirectiveDefinition::skip();
        assert!(skip.allowed_at(DirectiveLocation::Field));
        assert!(skip.allowed_at(DirectiveLocation::InlineFragment));
        assert!(!skip.allowed_at(DirectiveLocation::Query));

        let arg = skip.arg("if").unwrap();
        assert_eq!(arg.ty.to_string(), "Boolean!");
        assert!(is_input_type(&arg.ty));
    }

    #[test]
    fn test_locations_are_deduplicated() {
        let directive = DirectiveDefinition::new("cached")
            .location(DirectiveLocation::Field)
            .location(DirectiveLocation::Field);
        assert_eq!(directive.locations.len(), 1);
        assert_eq!(directive.locations[0].to_string(), "FIELD");
    }
}
