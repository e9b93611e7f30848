//! Codec errors.

use thiserror::Error;

use crate::domain::shared::DomainError;
use crate::error::ErrorCode;
use crate::policy::PolicyError;
use crate::registry::SchemaNotRegistered;

/// Encode or decode failure for a single record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// No schema is registered for the record's kind.
    #[error(transparent)]
    NotRegistered(#[from] SchemaNotRegistered),

    /// A value could not be placed in its column.
    #[error("Encoding '{type_tag}' failed: {source}")]
    Policy {
        /// Record kind.
        type_tag: String,
        /// Policy failure, naming the column.
        #[source]
        source: PolicyError,
    },

    /// The schema names a column the record type does not carry.
    #[error("Schema '{type_tag}' names field '{field}' which the record does not carry")]
    UnknownField {
        /// Record kind.
        type_tag: String,
        /// Column name.
        field: String,
    },

    /// Row length differs from the schema's column count.
    #[error("Row for '{type_tag}' has {actual} values, schema has {expected} columns")]
    RowSchemaMismatch {
        /// Record kind.
        type_tag: String,
        /// Column count of the schema.
        expected: usize,
        /// Values in the row.
        actual: usize,
    },

    /// Null where the column is not nullable.
    #[error("Unexpected null in non-nullable field '{field}' of '{type_tag}'")]
    UnexpectedNull {
        /// Record kind.
        type_tag: String,
        /// Column name.
        field: String,
    },

    /// The schema lacks a column the record requires.
    #[error("Schema '{type_tag}' has no column '{field}'")]
    MissingColumn {
        /// Record kind.
        type_tag: String,
        /// Column name.
        field: String,
    },

    /// A column value could not be turned back into its domain type.
    #[error("Decoding field '{field}' of '{type_tag}' failed: {message}")]
    Decode {
        /// Record kind.
        type_tag: String,
        /// Column name.
        field: String,
        /// Parse error.
        message: String,
    },

    /// A variant column required by the record's discriminant is null.
    #[error("'{type_tag}' requires '{field}' for {discriminant} but it is null")]
    MissingVariantField {
        /// Record kind.
        type_tag: String,
        /// Column name.
        field: String,
        /// Discriminant value requiring the column.
        discriminant: String,
    },

    /// No record type is known for the type tag.
    #[error("Unknown record kind '{type_tag}'")]
    UnknownRecordKind {
        /// Type tag.
        type_tag: String,
    },
}

impl CodecError {
    /// Stable code for logs and metrics.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotRegistered(_) => ErrorCode::SchemaNotRegistered,
            Self::Policy { source, .. } => match source {
                PolicyError::UnsupportedFieldKind { .. } => ErrorCode::UnsupportedFieldKind,
                PolicyError::ValueOutOfRange { .. } => ErrorCode::ValueOutOfRange,
                PolicyError::Serialization { .. } => ErrorCode::SerializationFailed,
            },
            Self::UnknownField { .. } => ErrorCode::UnknownField,
            Self::RowSchemaMismatch { .. } => ErrorCode::RowSchemaMismatch,
            Self::UnexpectedNull { .. } => ErrorCode::UnexpectedNull,
            Self::MissingColumn { .. } => ErrorCode::MissingColumn,
            Self::Decode { .. } => ErrorCode::DecodeFailed,
            Self::MissingVariantField { .. } => ErrorCode::MissingVariantField,
            Self::UnknownRecordKind { .. } => ErrorCode::UnknownRecordKind,
        }
    }

    /// Whether a reader can skip this row and keep going.
    ///
    /// Malformed rows are recoverable; missing schemas, schema/record
    /// pairing errors and unknown kinds affect every row and are not.
    #[must_use]
    pub const fn is_row_recoverable(&self) -> bool {
        self.error_code().is_row_recoverable()
    }

    /// Wrap a domain parse error for `field`.
    pub(crate) fn from_domain(type_tag: &str, field: &str, err: DomainError) -> Self {
        match err {
            DomainError::MissingField { field, required_by } => Self::MissingVariantField {
                type_tag: type_tag.to_owned(),
                field,
                discriminant: required_by,
            },
            DomainError::InvalidValue { .. } => Self::Decode {
                type_tag: type_tag.to_owned(),
                field: field.to_owned(),
                message: err.to_string(),
            },
        }
    }
}
