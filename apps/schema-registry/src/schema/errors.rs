//! Schema construction errors.

use thiserror::Error;

/// A schema failed validation and must be fixed before registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaValidationError {
    /// The type tag is empty.
    #[error("Schema type tag must not be empty")]
    EmptyTypeTag,

    /// The schema declares no columns.
    #[error("Schema '{type_tag}' declares no fields")]
    NoFields {
        /// Offending schema.
        type_tag: String,
    },

    /// A column has an empty name.
    #[error("Schema '{type_tag}': field at position {position} has an empty name")]
    EmptyFieldName {
        /// Offending schema.
        type_tag: String,
        /// Zero-based column position.
        position: usize,
    },

    /// Two columns share a name.
    #[error("Schema '{type_tag}': duplicate field '{field}'")]
    DuplicateField {
        /// Offending schema.
        type_tag: String,
        /// Duplicated name.
        field: String,
    },

    /// A variant field is not among the columns.
    #[error("Schema '{type_tag}': variant field '{field}' is not a declared field")]
    UnknownVariantField {
        /// Offending schema.
        type_tag: String,
        /// Undeclared name.
        field: String,
    },

    /// A variant field cannot hold null.
    #[error("Schema '{type_tag}': variant field '{field}' must be nullable")]
    NonNullableVariantField {
        /// Offending schema.
        type_tag: String,
        /// Field name.
        field: String,
    },

    /// `ts_event`/`ts_init` is not a non-null `uint64`.
    #[error("Schema '{type_tag}': timestamp field '{field}' must be non-null uint64, found {found}")]
    InvalidTimestampField {
        /// Offending schema.
        type_tag: String,
        /// Field name.
        field: String,
        /// Declared type and nullability.
        found: String,
    },

    /// A column type outside the encoding policy.
    #[error("Schema '{type_tag}': field '{field}' has unsupported type {data_type}")]
    UnsupportedType {
        /// Offending schema.
        type_tag: String,
        /// Field name.
        field: String,
        /// The rejected type.
        data_type: String,
    },

    /// Persisted metadata lacks a required key.
    #[error("Schema metadata is missing '{key}'")]
    MissingMetadata {
        /// Metadata key.
        key: &'static str,
    },

    /// Persisted metadata could not be parsed.
    #[error("Schema metadata '{key}' is invalid: {message}")]
    InvalidMetadata {
        /// Metadata key.
        key: &'static str,
        /// Parse error.
        message: String,
    },
}
