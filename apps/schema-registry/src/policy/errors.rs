//! Encoding policy errors.

use thiserror::Error;

use super::PhysicalType;

/// A value could not be placed in its declared column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The value's kind has no mapping onto the column's physical type.
    #[error("Unsupported field kind for '{field}': {kind} cannot be stored as {physical}")]
    UnsupportedFieldKind {
        /// Column name.
        field: String,
        /// Semantic kind of the value.
        kind: &'static str,
        /// Declared physical type.
        physical: PhysicalType,
    },

    /// An integer does not fit the column's width.
    #[error("Value out of range for '{field}': {value} does not fit {physical}")]
    ValueOutOfRange {
        /// Column name.
        field: String,
        /// Offending value.
        value: String,
        /// Declared physical type.
        physical: PhysicalType,
    },

    /// An auxiliary document could not be serialized.
    #[error("Serialization failed for '{field}': {message}")]
    Serialization {
        /// Column name.
        field: String,
        /// Underlying error message.
        message: String,
    },
}

impl PolicyError {
    /// Column the error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::UnsupportedFieldKind { field, .. }
            | Self::ValueOutOfRange { field, .. }
            | Self::Serialization { field, .. } => field,
        }
    }
}
