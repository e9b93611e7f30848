//! The value transform: semantic kind x physical type -> column value.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::{ColumnValue, FieldValue, PhysicalType, PolicyError};

/// Encode one value for a column named `field` of type `physical`.
///
/// Null passes through unchanged; whether the column accepts it is the
/// caller's concern.
///
/// Decimals are written as their exact string form, scale included. A
/// decimal routed into a `float64` column is refused rather than rounded.
///
/// # Errors
///
/// - [`PolicyError::UnsupportedFieldKind`] when the kind has no mapping
///   onto `physical`
/// - [`PolicyError::ValueOutOfRange`] when an integer does not fit
/// - [`PolicyError::Serialization`] when a document or list cannot be
///   serialized
pub fn encode_value(
    field: &str,
    physical: PhysicalType,
    value: FieldValue,
) -> Result<ColumnValue, PolicyError> {
    let out_of_range = |value: String| PolicyError::ValueOutOfRange {
        field: field.to_owned(),
        value,
        physical,
    };

    match (value, physical) {
        (FieldValue::Null, _) => Ok(ColumnValue::Null),

        (FieldValue::Decimal(d), p) if p.is_textual() => Ok(ColumnValue::Utf8(d.to_string())),
        (FieldValue::Text(s), p) if p.is_textual() => Ok(ColumnValue::Utf8(s)),

        (FieldValue::Timestamp(ns) | FieldValue::UInt(ns), PhysicalType::UInt64) => {
            Ok(ColumnValue::UInt64(ns))
        }
        (FieldValue::Timestamp(ns) | FieldValue::UInt(ns), PhysicalType::Int64) => {
            i64::try_from(ns)
                .map(ColumnValue::Int64)
                .map_err(|_| out_of_range(ns.to_string()))
        }
        (FieldValue::UInt(v), PhysicalType::UInt8) => u8::try_from(v)
            .map(ColumnValue::UInt8)
            .map_err(|_| out_of_range(v.to_string())),
        (FieldValue::UInt(v), PhysicalType::UInt16) => u16::try_from(v)
            .map(ColumnValue::UInt16)
            .map_err(|_| out_of_range(v.to_string())),
        (FieldValue::UInt(v), PhysicalType::UInt32) => u32::try_from(v)
            .map(ColumnValue::UInt32)
            .map_err(|_| out_of_range(v.to_string())),

        (FieldValue::Int(v), PhysicalType::Int64) => Ok(ColumnValue::Int64(v)),
        (FieldValue::Int(v), PhysicalType::UInt8) => u8::try_from(v)
            .map(ColumnValue::UInt8)
            .map_err(|_| out_of_range(v.to_string())),
        (FieldValue::Int(v), PhysicalType::UInt16) => u16::try_from(v)
            .map(ColumnValue::UInt16)
            .map_err(|_| out_of_range(v.to_string())),
        (FieldValue::Int(v), PhysicalType::UInt32) => u32::try_from(v)
            .map(ColumnValue::UInt32)
            .map_err(|_| out_of_range(v.to_string())),
        (FieldValue::Int(v), PhysicalType::UInt64) => u64::try_from(v)
            .map(ColumnValue::UInt64)
            .map_err(|_| out_of_range(v.to_string())),

        (FieldValue::Float(v), PhysicalType::Float64) => Ok(ColumnValue::Float64(v)),
        (FieldValue::Boolean(b), PhysicalType::Boolean) => Ok(ColumnValue::Boolean(b)),

        (FieldValue::Document(map), PhysicalType::Binary) => serde_json::to_vec(&map)
            .map(ColumnValue::Binary)
            .map_err(|e| PolicyError::Serialization {
                field: field.to_owned(),
                message: e.to_string(),
            }),
        (FieldValue::List(items), PhysicalType::Binary) => serde_json::to_vec(&items)
            .map(ColumnValue::Binary)
            .map_err(|e| PolicyError::Serialization {
                field: field.to_owned(),
                message: e.to_string(),
            }),
        (FieldValue::Bytes(bytes), PhysicalType::Binary) => Ok(ColumnValue::Binary(bytes)),

        (value, physical) => Err(PolicyError::UnsupportedFieldKind {
            field: field.to_owned(),
            kind: value.kind_name(),
            physical,
        }),
    }
}

/// Inverse of the decimal transform. Scale is preserved: `"99.50"` parses
/// to a decimal that prints as `"99.50"`.
///
/// # Errors
///
/// Returns the parse error for malformed decimal strings.
pub fn decode_decimal(text: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(text)
}

/// Inverse of the document transform.
///
/// # Errors
///
/// Returns the JSON error when the bytes are not a string map.
pub fn decode_document(bytes: &[u8]) -> Result<BTreeMap<String, String>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Inverse of the list transform. Element order is kept.
///
/// # Errors
///
/// Returns the JSON error when the bytes are not an array of strings.
pub fn decode_list(bytes: &[u8]) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_slice(bytes)
}
