//! Configuration module for the schema registry.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates it before anything is registered.
//!
//! # Usage
//!
//! ```rust,ignore
//! use schema_registry::config::{apply_catalog, load_config};
//! use schema_registry::registry;
//!
//! let config = load_config(Some("config/schema-registry.yaml"))?;
//! apply_catalog(&config.catalog, &registry::global())?;
//! ```

mod catalog;
mod observability;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::SchemaValidationError;

pub use catalog::{CatalogConfig, FieldDefinition, SchemaDefinition, apply_catalog};
pub use observability::{LoggingConfig, ObservabilityConfig};

/// Default configuration path.
pub const DEFAULT_CONFIG_PATH: &str = "config/schema-registry.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Cannot read registry config '{path}': {source}")]
    ReadError {
        /// File that was requested.
        path: String,
        /// I/O failure.
        source: std::io::Error,
    },

    /// The YAML is malformed or does not match [`Config`].
    #[error("Invalid registry config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// A value is out of its accepted set.
    #[error("Registry config rejected: {0}")]
    ValidationError(String),

    /// A configured schema is not a valid layout.
    #[error("Invalid schema in config: {0}")]
    Schema(#[from] SchemaValidationError),
}

/// Registry process configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Logging settings.
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Schemas to register at startup.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Read, interpolate and validate the YAML config at `path`
/// ([`DEFAULT_CONFIG_PATH`] when `None`).
///
/// # Errors
///
/// [`ConfigError::ReadError`] when the file is unreadable, otherwise see
/// [`load_config_from_string`].
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_string(),
        source,
    })?;

    load_config_from_string(&contents)
}

/// Interpolate, parse and validate a YAML document.
///
/// # Errors
///
/// [`ConfigError::ParseError`] for malformed YAML, [`ConfigError::ValidationError`]
/// or [`ConfigError::Schema`] when a value or override schema is rejected.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Substitute environment variables.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. An unset or empty
/// variable takes the default, or the empty string without one.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Checks serde cannot express: logging format, duplicate and invalid overrides.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let logging = &config.observability.logging;
    if !LoggingConfig::FORMATS.contains(&logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {:?}",
            LoggingConfig::FORMATS
        )));
    }
    if logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "observability.logging.level must not be empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for definition in &config.catalog.overrides {
        if !seen.insert(definition.type_tag.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "catalog override '{}' is declared more than once",
                definition.type_tag
            )));
        }
        definition.to_spec()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{DictionaryWidth, PhysicalType};

    #[test]
    fn test_defaults_register_builtins() {
        let config = Config::default();

        assert_eq!(config.observability.logging.level, "info");
        assert_eq!(config.observability.logging.format, "json");
        assert!(config.catalog.register_builtins);
        assert!(config.catalog.overrides.is_empty());
    }

    #[test]
    fn test_load_empty_config() {
        let config = match load_config_from_string("{}") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert!(config.catalog.register_builtins);
        assert!(config.observability.logging.include_spans);
    }

    #[test]
    fn test_unset_var_takes_default() {
        assert_eq!(
            interpolate_env_vars("level: ${SCHEMA_REGISTRY_TEST_NONEXISTENT_VAR:-debug}"),
            "level: debug"
        );
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_set_var_wins_over_default() {
        let Ok(path) = std::env::var("PATH") else {
            return;
        };
        if path.is_empty() {
            return;
        }
        assert_eq!(interpolate_env_vars("dir: ${PATH:-none}"), format!("dir: {path}"));
    }

    #[test]
    fn test_unset_var_without_default_is_blank() {
        assert_eq!(
            interpolate_env_vars("a: ${SCHEMA_REGISTRY_TEST_UNLIKELY_TO_EXIST}, b: 1"),
            "a: , b: 1"
        );
    }

    #[test]
    fn test_interpolated_level_is_parsed() {
        let yaml = r"
observability:
  logging:
    level: ${SCHEMA_REGISTRY_TEST_NONEXISTENT_LEVEL:-warn}
    format: pretty
";
        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.observability.logging.level, "warn");
        assert_eq!(config.observability.logging.format, "pretty");
    }

    #[test]
    fn test_validation_invalid_format() {
        let yaml = r"
observability:
  logging:
    format: xml
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for invalid format");
        };
        assert!(err.to_string().contains("format"));
    }

    #[test]
    fn test_override_schema_parse() {
        let yaml = r"
catalog:
  register_builtins: false
  overrides:
    - type_tag: QuoteTick
      fields:
        - { name: instrument_id, type: dictionary, width: wide }
        - { name: bid, type: utf8 }
        - { name: ask, type: utf8 }
        - { name: ts_event, type: uint64 }
        - { name: ts_init, type: uint64 }
";
        let config = load_config_from_string(yaml).unwrap();
        assert!(!config.catalog.register_builtins);
        let spec = config.catalog.overrides[0].to_spec().unwrap();
        assert_eq!(spec.type_tag(), "QuoteTick");
        assert_eq!(
            spec.fields()[0].physical_type(),
            PhysicalType::Dictionary(DictionaryWidth::Wide)
        );
        assert_eq!(spec.len(), 5);
    }

    #[test]
    fn test_validation_duplicate_override() {
        let yaml = r"
catalog:
  overrides:
    - type_tag: Heartbeat
      fields: [{ name: ts_event, type: uint64 }]
    - type_tag: Heartbeat
      fields: [{ name: ts_init, type: uint64 }]
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for duplicate override");
        };
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_validation_invalid_override_schema() {
        let yaml = r"
catalog:
  overrides:
    - type_tag: Heartbeat
      fields:
        - { name: ts_event, type: utf8 }
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for mistyped timestamp");
        };
        assert!(matches!(err, ConfigError::Schema(_)));
    }

    #[test]
    fn test_missing_file() {
        let Err(err) = load_config(Some("/nonexistent/schema-registry.yaml")) else {
            panic!("expected read error");
        };
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
