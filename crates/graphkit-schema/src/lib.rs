//! # graphkit-schema
//!
//! Schema assembly and type classification kernel for GraphQL type systems.
//!
//! This crate sits underneath query parsing, validation, and execution. It
//! provides:
//!
//! - A type descriptor model with list/non-null wrappers and built-in scalars
//! - Classification predicates (scalar, leaf, input, abstract, ...)
//! - Field value extraction from mappings or accessor objects
//! - Schema defaulting: synthetic root types, type and directive registries
//!
//! ## Overview
//!
//! A schema author describes a schema with a
//! [`SchemaDescriptor`](schema::SchemaDescriptor). The
//! [`SchemaBuilder`](schema::SchemaBuilder) fills in what is missing, runs the
//! author's [`SchemaDefinition`](schema::SchemaDefinition) hook, and returns a
//! [`Schema`](schema::Schema) that is shared read-only once setup completes.
//! At resolution time the executor uses [`classifier`] to choose a dispatch
//! strategy per field and [`resolver`] to obtain raw values.
//!
//! ## Configuration
//!
//! ```toml
//! [schema]
//! default_schema_name = "RootSchema"
//! reject_duplicate_names = true
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Type descriptors and built-in scalars
//! - [`classifier`] - Type classification predicates
//! - [`resolver`] - Field value extraction
//! - [`schema`] - Schema building and directives
//! - [`config`] - Kernel configuration
//! - [`error`] - Error types

pub mod classifier;
pub mod config;
pub mod error;
pub mod resolver;
pub mod schema;
pub mod types;

// Re-export main types
pub use config::KernelConfig;
pub use error::{Result, TypeSystemError};
pub use resolver::{FieldSource, Resolved, get_property_value};
pub use schema::{Schema, SchemaBuilder, SchemaConfig, SchemaDefinition, SchemaDescriptor};
pub use types::{GraphQLType, TypeKind, TypeRef};
