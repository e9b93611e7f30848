//! Stable error codes.
//!
//! Every library error maps onto an [`ErrorCode`] whose reason string is
//! attached to log events and metric labels, so dashboards and alerts do not
//! depend on message wording.
//!
//! | Code | Raised by |
//! |------|-----------|
//! | `SCHEMA_INVALID` | schema construction |
//! | `SCHEMA_NOT_REGISTERED` | registry lookup, encode |
//! | `UNSUPPORTED_FIELD_KIND` | encode |
//! | `VALUE_OUT_OF_RANGE` | encode |
//! | `SERIALIZATION_FAILED` | encode |
//! | `UNKNOWN_FIELD` | encode (record/schema pairing) |
//! | `ROW_SCHEMA_MISMATCH` | decode |
//! | `UNEXPECTED_NULL` | decode |
//! | `MISSING_COLUMN` | decode |
//! | `DECODE_FAILED` | decode |
//! | `MISSING_VARIANT_FIELD` | decode |
//! | `UNKNOWN_RECORD_KIND` | decode |
//! | `DICTIONARY_OVERFLOW` | column group build |
//! | `ARROW_ERROR` | column group build/read |
//! | `CONFIG_ERROR` | configuration |

use serde::{Deserialize, Serialize};

/// Error codes for the schema registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Construction errors
    /// Schema failed validation.
    SchemaInvalid,

    // Registry errors
    /// No schema registered for a record kind.
    SchemaNotRegistered,

    // Encode errors
    /// A value kind cannot be stored in its column type.
    UnsupportedFieldKind,
    /// An integer does not fit its column width.
    ValueOutOfRange,
    /// An auxiliary document could not be serialized.
    SerializationFailed,
    /// The schema names a field the record does not carry.
    UnknownField,

    // Decode errors
    /// Row length differs from the schema.
    RowSchemaMismatch,
    /// Null in a non-nullable column.
    UnexpectedNull,
    /// The schema lacks a column the record requires.
    MissingColumn,
    /// A column value failed to parse.
    DecodeFailed,
    /// A variant column required by the discriminant is null.
    MissingVariantField,
    /// No record type is known for the type tag.
    UnknownRecordKind,

    // Column group errors
    /// Too many distinct values for a dictionary key width.
    DictionaryOverflow,
    /// Arrow rejected a column group.
    ArrowError,

    // Configuration errors
    /// Configuration could not be loaded.
    ConfigError,
}

impl ErrorCode {
    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::SchemaInvalid => "SCHEMA_INVALID",
            Self::SchemaNotRegistered => "SCHEMA_NOT_REGISTERED",
            Self::UnsupportedFieldKind => "UNSUPPORTED_FIELD_KIND",
            Self::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            Self::SerializationFailed => "SERIALIZATION_FAILED",
            Self::UnknownField => "UNKNOWN_FIELD",
            Self::RowSchemaMismatch => "ROW_SCHEMA_MISMATCH",
            Self::UnexpectedNull => "UNEXPECTED_NULL",
            Self::MissingColumn => "MISSING_COLUMN",
            Self::DecodeFailed => "DECODE_FAILED",
            Self::MissingVariantField => "MISSING_VARIANT_FIELD",
            Self::UnknownRecordKind => "UNKNOWN_RECORD_KIND",
            Self::DictionaryOverflow => "DICTIONARY_OVERFLOW",
            Self::ArrowError => "ARROW_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Whether a reader can skip the offending row and continue.
    #[must_use]
    pub const fn is_row_recoverable(&self) -> bool {
        matches!(
            self,
            Self::RowSchemaMismatch
                | Self::UnexpectedNull
                | Self::DecodeFailed
                | Self::MissingVariantField
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}
