//! Catalog configuration: built-in registration and schema overrides.
//!
//! ```yaml
//! catalog:
//!   register_builtins: true
//!   overrides:
//!     - type_tag: QuoteTick
//!       fields:
//!         - { name: instrument_id, type: dictionary, width: wide }
//!         - { name: bid, type: utf8 }
//!         - { name: ask, type: utf8 }
//!         - { name: ts_event, type: uint64 }
//!         - { name: ts_init, type: uint64 }
//! ```

use serde::{Deserialize, Serialize};

use super::ConfigError;
use super::observability::default_true;
use crate::policy::{DictionaryWidth, PhysicalType};
use crate::registry::SchemaRegistry;
use crate::registry::catalog::register_builtin_schemas;
use crate::schema::{FieldDescriptor, SchemaSpec};

/// Which schemas are registered at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Register the built-in catalog before overrides.
    #[serde(default = "default_true")]
    pub register_builtins: bool,
    /// Layouts registered after the built-ins, replacing any with the same tag.
    #[serde(default)]
    pub overrides: Vec<SchemaDefinition>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            register_builtins: true,
            overrides: Vec::new(),
        }
    }
}

/// A schema declared in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Record kind the layout applies to.
    pub type_tag: String,
    /// Columns in storage order.
    pub fields: Vec<FieldDefinition>,
    /// Columns populated only for some values of the record's discriminant.
    #[serde(default)]
    pub variant_fields: Vec<String>,
}

/// One column of a [`SchemaDefinition`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Column name.
    pub name: String,
    /// Physical type, e.g. `uint64`, `dictionary<wide>` or `dictionary`
    /// together with `width`.
    #[serde(rename = "type")]
    pub physical_type: String,
    /// Dictionary key width when `type` is a bare `dictionary`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<DictionaryWidth>,
    /// Whether the column may hold null.
    #[serde(default)]
    pub nullable: bool,
}

impl FieldDefinition {
    fn resolve_type(&self, type_tag: &str) -> Result<PhysicalType, ConfigError> {
        let invalid = |message: String| {
            ConfigError::ValidationError(format!(
                "catalog override '{type_tag}', field '{}': {message}",
                self.name
            ))
        };

        if self.physical_type.trim().eq_ignore_ascii_case("dictionary") {
            return self
                .width
                .map(PhysicalType::Dictionary)
                .ok_or_else(|| invalid("dictionary type requires a width".to_string()));
        }

        let parsed: PhysicalType = self.physical_type.parse().map_err(invalid)?;
        match (parsed.dictionary_width(), self.width) {
            (_, None) => Ok(parsed),
            (Some(declared), Some(width)) if declared == width => Ok(parsed),
            (Some(declared), Some(width)) => Err(invalid(format!(
                "width {width} conflicts with type {}",
                PhysicalType::Dictionary(declared)
            ))),
            (None, Some(_)) => Err(invalid(format!(
                "width is only valid for dictionary columns, not {parsed}"
            ))),
        }
    }

    fn to_descriptor(&self, type_tag: &str) -> Result<FieldDescriptor, ConfigError> {
        let field = FieldDescriptor::new(self.name.clone(), self.resolve_type(type_tag)?);
        Ok(if self.nullable { field.nullable() } else { field })
    }
}

impl SchemaDefinition {
    /// Build and validate the declared layout.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ValidationError`] for an unknown column type,
    /// [`ConfigError::Schema`] when the layout itself is invalid.
    pub fn to_spec(&self) -> Result<SchemaSpec, ConfigError> {
        let fields = self
            .fields
            .iter()
            .map(|field| field.to_descriptor(&self.type_tag))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SchemaSpec::new(
            self.type_tag.clone(),
            fields,
            self.variant_fields.iter().cloned(),
        )?)
    }
}

/// Register the configured catalog into `registry`.
///
/// Built-ins go first, then overrides in declaration order, so an override
/// replaces the built-in layout of the same tag. Returns the number of
/// registrations performed.
///
/// # Errors
///
/// Fails on the first invalid schema; registrations made before it stay.
pub fn apply_catalog(
    config: &CatalogConfig,
    registry: &SchemaRegistry,
) -> Result<usize, ConfigError> {
    let mut registered = 0;
    if config.register_builtins {
        registered += register_builtin_schemas(registry)?;
    }
    for definition in &config.overrides {
        registry.register(definition.to_spec()?);
        registered += 1;
    }
    tracing::info!(
        registered,
        overrides = config.overrides.len(),
        total = registry.len(),
        "Catalog applied"
    );
    Ok(registered)
}
