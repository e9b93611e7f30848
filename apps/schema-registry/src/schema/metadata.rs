//! Arrow schema conversion and persisted metadata.
//!
//! Every column group carries its record kind in schema metadata so a reader
//! in another process can resolve the layout without application logic:
//!
//! - `type` - the type tag
//! - `variant_fields` - JSON array of variant field names, in column order
//!   (omitted when the schema has none)

use std::collections::HashMap;
use std::sync::Arc;

use arrow::datatypes::{Schema, SchemaRef};

use super::{FieldDescriptor, SchemaSpec, SchemaValidationError};
use crate::policy::PhysicalType;

/// Metadata key holding the type tag.
pub const TYPE_TAG_KEY: &str = "type";

/// Metadata key holding the variant field list.
pub const VARIANT_FIELDS_KEY: &str = "variant_fields";

impl SchemaSpec {
    /// Arrow schema with persisted metadata.
    pub fn to_arrow_schema(&self) -> SchemaRef {
        let fields: Vec<_> = self.fields().iter().map(|f| f.to_arrow_field()).collect();

        let mut metadata = HashMap::new();
        metadata.insert(TYPE_TAG_KEY.to_owned(), self.type_tag().to_owned());
        let variants = self.variant_fields_in_order();
        if !variants.is_empty() {
            metadata.insert(
                VARIANT_FIELDS_KEY.to_owned(),
                serde_json::Value::from(variants).to_string(),
            );
        }

        Arc::new(Schema::new(fields).with_metadata(metadata))
    }

    /// Rebuild a spec from an Arrow schema and its persisted metadata.
    ///
    /// The result goes through the same validation as any other spec.
    ///
    /// # Errors
    ///
    /// - [`SchemaValidationError::MissingMetadata`] without a `type` key
    /// - [`SchemaValidationError::InvalidMetadata`] when `variant_fields` is
    ///   not a JSON string array
    /// - [`SchemaValidationError::UnsupportedType`] for column types the
    ///   encoding policy never produces
    pub fn from_arrow_schema(schema: &Schema) -> Result<Self, SchemaValidationError> {
        let metadata = schema.metadata();
        let type_tag = metadata
            .get(TYPE_TAG_KEY)
            .ok_or(SchemaValidationError::MissingMetadata { key: TYPE_TAG_KEY })?;

        let variant_fields: Vec<String> = match metadata.get(VARIANT_FIELDS_KEY) {
            Some(raw) => serde_json::from_str(raw).map_err(|e| {
                SchemaValidationError::InvalidMetadata {
                    key: VARIANT_FIELDS_KEY,
                    message: e.to_string(),
                }
            })?,
            None => Vec::new(),
        };

        let fields = schema
            .fields()
            .iter()
            .map(|field| {
                let physical = PhysicalType::from_arrow(field.data_type()).ok_or_else(|| {
                    SchemaValidationError::UnsupportedType {
                        type_tag: type_tag.clone(),
                        field: field.name().clone(),
                        data_type: field.data_type().to_string(),
                    }
                })?;
                let descriptor = FieldDescriptor::new(field.name(), physical);
                Ok(if field.is_nullable() {
                    descriptor.nullable()
                } else {
                    descriptor
                })
            })
            .collect::<Result<Vec<_>, SchemaValidationError>>()?;

        Self::new(type_tag.clone(), fields, variant_fields)
    }
}
