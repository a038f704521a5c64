//! Kernel configuration.
//!
//! Controls how schemas are defaulted and validated. Configuration can be
//! given as a standalone TOML document or under a `[schema]` table.
//!
//! # Example Configuration
//!
//! ```toml
//! [schema]
//! default_schema_name = "RootSchema"
//! query_suffix = "Query"
//! mutation_suffix = "Mutation"
//! reject_duplicate_names = true
//! ```

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeSystemError};

static NAME_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[_A-Za-z][_0-9A-Za-z]*$").expect("Invalid GraphQL name regex")
});

/// Checks a string against the GraphQL `Name` production.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Schema kernel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Name used when a schema descriptor does not carry one.
    /// Default: "RootSchema"
    #[serde(default = "default_schema_name")]
    pub default_schema_name: String,

    /// Suffix appended to the schema name for a synthesized query root.
    /// Default: "Query"
    #[serde(default = "default_query_suffix")]
    pub query_suffix: String,

    /// Suffix appended to the schema name for a synthesized mutation root.
    /// Default: "Mutation"
    #[serde(default = "default_mutation_suffix")]
    pub mutation_suffix: String,

    /// Fail when two types or two directives share a name.
    /// When disabled, the later registration replaces the earlier one.
    /// Default: true
    #[serde(default = "default_reject_duplicate_names")]
    pub reject_duplicate_names: bool,
}

fn default_schema_name() -> String {
    "RootSchema".to_string()
}

fn default_query_suffix() -> String {
    "Query".to_string()
}

fn default_mutation_suffix() -> String {
    "Mutation".to_string()
}

fn default_reject_duplicate_names() -> bool {
    true
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            default_schema_name: default_schema_name(),
            query_suffix: default_query_suffix(),
            mutation_suffix: default_mutation_suffix(),
            reject_duplicate_names: default_reject_duplicate_names(),
        }
    }
}

impl KernelConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !is_valid_name(&self.default_schema_name) {
            return Err(format!(
                "schema.default_schema_name \"{}\" is not a valid GraphQL name",
                self.default_schema_name
            ));
        }
        if self.query_suffix.is_empty() {
            return Err("schema.query_suffix must not be empty".into());
        }
        if self.mutation_suffix.is_empty() {
            return Err("schema.mutation_suffix must not be empty".into());
        }
        if self.query_suffix == self.mutation_suffix {
            return Err("schema.query_suffix and schema.mutation_suffix must differ".into());
        }
        for (key, type_name) in [
            ("query_suffix", self.query_type_name(&self.default_schema_name)),
            ("mutation_suffix", self.mutation_type_name(&self.default_schema_name)),
        ] {
            if !is_valid_name(&type_name) {
                return Err(format!(
                    "schema.{key} produces invalid root type name \"{type_name}\""
                ));
            }
        }
        Ok(())
    }

    /// Parses and validates configuration from TOML.
    ///
    /// Accepts either a document whose `[schema]` table holds the settings or
    /// a document holding them at the top level.
    ///
    /// # Errors
    ///
    /// Returns [`TypeSystemError::Configuration`] on malformed TOML or invalid
    /// values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut document: toml::Table = toml::from_str(source)
            .map_err(|e| TypeSystemError::configuration(e.to_string()))?;

        let table = match document.remove("schema") {
            Some(toml::Value::Table(section)) => section,
            Some(_) => {
                return Err(TypeSystemError::configuration(
                    "schema must be a table",
                ));
            }
            None => document,
        };

        let config: KernelConfig = toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| TypeSystemError::configuration(e.to_string()))?;
        config.validate().map_err(TypeSystemError::configuration)?;
        Ok(config)
    }

    /// Name of the synthesized query root for a schema called `schema_name`.
    pub fn query_type_name(&self, schema_name: &str) -> String {
        format!("{schema_name}{}", self.query_suffix)
    }

    /// Name of the synthesized mutation root for a schema called `schema_name`.
    pub fn mutation_type_name(&self, schema_name: &str) -> String {
        format!("{schema_name}{}", self.mutation_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KernelConfig::default();
        assert_eq!(config.default_schema_name, "RootSchema");
        assert_eq!(config.query_suffix, "Query");
        assert_eq!(config.mutation_suffix, "Mutation");
        assert!(config.reject_duplicate_names);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_root_type_names() {
        let config = KernelConfig::default();
        assert_eq!(config.query_type_name("Shop"), "ShopQuery");
        assert_eq!(config.mutation_type_name("Shop"), "ShopMutation");
    }

    #[test]
    fn test_invalid_schema_name() {
        let mut config = KernelConfig::default();
        config.default_schema_name = "1Root".into();
        assert!(config.validate().is_err());
        config.default_schema_name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_suffixes() {
        let mut config = KernelConfig::default();
        config.query_suffix = String::new();
        assert!(config.validate().is_err());

        let mut config = KernelConfig::default();
        config.mutation_suffix = "Query".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_suffix_must_yield_valid_root_name() {
        let mut config = KernelConfig::default();
        config.query_suffix = "Query!".into();
        let err = config.validate().unwrap_err();
        assert!(err.contains("query_suffix"));

        let mut config = KernelConfig::default();
        config.mutation_suffix = "-M".into();
        assert!(config.validate().unwrap_err().contains("mutation_suffix"));

        let mut config = KernelConfig::default();
        config.query_suffix = "_2".into();
        assert!(config.validate().is_ok());

        let err = KernelConfig::from_toml_str(r#"query_suffix = "Q uery""#).unwrap_err();
        assert!(matches!(err, TypeSystemError::Configuration(_)));
    }

    #[test]
    fn test_deserialize_from_toml_section() {
        let toml = r#"
            [schema]
            default_schema_name = "Shop"
            reject_duplicate_names = false
        "#;

        let config = KernelConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.default_schema_name, "Shop");
        assert!(!config.reject_duplicate_names);
        assert_eq!(config.query_suffix, "Query");
    }

    #[test]
    fn test_deserialize_from_top_level() {
        let config = KernelConfig::from_toml_str(r#"mutation_suffix = "Commands""#).unwrap();
        assert_eq!(config.mutation_suffix, "Commands");
        assert_eq!(config.default_schema_name, "RootSchema");
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let err = KernelConfig::from_toml_str("schema = 3").unwrap_err();
        assert!(matches!(err, TypeSystemError::Configuration(_)));

        let err = KernelConfig::from_toml_str("[schema]\ndefault_schema_name = \"a b\"")
            .unwrap_err();
        assert!(matches!(err, TypeSystemError::Configuration(_)));

        let err = KernelConfig::from_toml_str("not toml at all [").unwrap_err();
        assert!(!err.is_authoring_error());
    }
}
