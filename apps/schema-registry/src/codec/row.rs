//! Encoded rows and typed access to their columns.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::ops::Index;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::CodecError;
use crate::domain::shared::UnixNanos;
use crate::policy::{self, ColumnValue};
use crate::schema::SchemaSpec;

/// Column-aligned values of one record, in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodedRow(Vec<ColumnValue>);

impl EncodedRow {
    /// Wrap values already in schema order.
    pub const fn new(values: Vec<ColumnValue>) -> Self {
        Self(values)
    }

    /// Values in schema order.
    pub fn values(&self) -> &[ColumnValue] {
        &self.0
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row holds no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `index`.
    pub fn get(&self, index: usize) -> Option<&ColumnValue> {
        self.0.get(index)
    }

    /// Unwrap into the values.
    pub fn into_values(self) -> Vec<ColumnValue> {
        self.0
    }
}

impl From<Vec<ColumnValue>> for EncodedRow {
    fn from(values: Vec<ColumnValue>) -> Self {
        Self(values)
    }
}

impl Index<usize> for EncodedRow {
    type Output = ColumnValue;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Read-side view of a row, addressing columns by name.
///
/// Addressing by name lets an override reorder columns without touching
/// record code. Required accessors fail on null; `opt_*` accessors map null
/// (and a column the schema does not declare at all) to `None`.
#[derive(Debug, Clone, Copy)]
pub struct RowReader<'a> {
    spec: &'a SchemaSpec,
    row: &'a EncodedRow,
}

impl<'a> RowReader<'a> {
    /// View `row` through `spec`. The caller has checked the row length.
    pub(crate) const fn new(spec: &'a SchemaSpec, row: &'a EncodedRow) -> Self {
        Self { spec, row }
    }

    /// Record kind of the schema.
    pub fn type_tag(&self) -> &'a str {
        self.spec.type_tag()
    }

    /// Whether the schema declares `field`.
    pub fn has_column(&self, field: &str) -> bool {
        self.spec.position(field).is_some()
    }

    /// Whether `field` is null or absent from the schema.
    pub fn is_null(&self, field: &str) -> bool {
        self.optional(field).is_none()
    }

    fn value(&self, field: &str) -> Option<&'a ColumnValue> {
        self.spec.position(field).and_then(|i| self.row.get(i))
    }

    fn required(&self, field: &str) -> Result<&'a ColumnValue, CodecError> {
        match self.value(field) {
            None => Err(CodecError::MissingColumn {
                type_tag: self.type_tag().to_owned(),
                field: field.to_owned(),
            }),
            Some(ColumnValue::Null) => Err(CodecError::UnexpectedNull {
                type_tag: self.type_tag().to_owned(),
                field: field.to_owned(),
            }),
            Some(value) => Ok(value),
        }
    }

    fn optional(&self, field: &str) -> Option<&'a ColumnValue> {
        self.value(field).filter(|v| !v.is_null())
    }

    /// Decode error for `field`.
    pub fn error(&self, field: &str, message: impl Display) -> CodecError {
        CodecError::Decode {
            type_tag: self.type_tag().to_owned(),
            field: field.to_owned(),
            message: message.to_string(),
        }
    }

    fn mismatch(&self, field: &str, expected: &str, found: &ColumnValue) -> CodecError {
        self.error(
            field,
            format!("expected {expected} value, found {}", found.type_name()),
        )
    }

    fn as_text(&self, field: &str, value: &'a ColumnValue) -> Result<&'a str, CodecError> {
        value
            .as_str()
            .ok_or_else(|| self.mismatch(field, "utf8", value))
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// String column.
    pub fn text(&self, field: &str) -> Result<&'a str, CodecError> {
        self.as_text(field, self.required(field)?)
    }

    /// Nullable string column.
    pub fn opt_text(&self, field: &str) -> Result<Option<&'a str>, CodecError> {
        self.optional(field)
            .map(|v| self.as_text(field, v))
            .transpose()
    }

    /// String column parsed with `FromStr` (identifiers, enum tokens, money).
    pub fn parse<T>(&self, field: &str) -> Result<T, CodecError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.text(field)?
            .parse()
            .map_err(|e| self.error(field, e))
    }

    /// Nullable string column parsed with `FromStr`.
    pub fn opt_parse<T>(&self, field: &str) -> Result<Option<T>, CodecError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.opt_text(field)?
            .map(|s| s.parse().map_err(|e| self.error(field, e)))
            .transpose()
    }

    /// Decimal string column, scale preserved.
    pub fn decimal(&self, field: &str) -> Result<Decimal, CodecError> {
        policy::decode_decimal(self.text(field)?).map_err(|e| self.error(field, e))
    }

    /// Nullable decimal string column.
    pub fn opt_decimal(&self, field: &str) -> Result<Option<Decimal>, CodecError> {
        self.opt_text(field)?
            .map(|s| policy::decode_decimal(s).map_err(|e| self.error(field, e)))
            .transpose()
    }

    // ------------------------------------------------------------------
    // Numbers and flags
    // ------------------------------------------------------------------

    /// Unsigned column of any width.
    pub fn uint64(&self, field: &str) -> Result<u64, CodecError> {
        let value = self.required(field)?;
        value
            .as_u64()
            .ok_or_else(|| self.mismatch(field, "unsigned", value))
    }

    /// Nullable unsigned column.
    pub fn opt_uint64(&self, field: &str) -> Result<Option<u64>, CodecError> {
        self.optional(field)
            .map(|v| v.as_u64().ok_or_else(|| self.mismatch(field, "unsigned", v)))
            .transpose()
    }

    /// Unsigned column narrowed to `u8`.
    pub fn uint8(&self, field: &str) -> Result<u8, CodecError> {
        let value = self.uint64(field)?;
        u8::try_from(value).map_err(|_| self.error(field, format!("{value} does not fit uint8")))
    }

    /// Nanosecond timestamp column.
    pub fn timestamp(&self, field: &str) -> Result<UnixNanos, CodecError> {
        self.uint64(field).map(UnixNanos::new)
    }

    /// Nullable nanosecond timestamp column.
    pub fn opt_timestamp(&self, field: &str) -> Result<Option<UnixNanos>, CodecError> {
        Ok(self.opt_uint64(field)?.map(UnixNanos::new))
    }

    /// Float column.
    pub fn float64(&self, field: &str) -> Result<f64, CodecError> {
        let value = self.required(field)?;
        value
            .as_f64()
            .ok_or_else(|| self.mismatch(field, "float64", value))
    }

    /// Nullable float column.
    pub fn opt_float64(&self, field: &str) -> Result<Option<f64>, CodecError> {
        self.optional(field)
            .map(|v| v.as_f64().ok_or_else(|| self.mismatch(field, "float64", v)))
            .transpose()
    }

    /// Boolean column.
    pub fn boolean(&self, field: &str) -> Result<bool, CodecError> {
        let value = self.required(field)?;
        value
            .as_bool()
            .ok_or_else(|| self.mismatch(field, "boolean", value))
    }

    // ------------------------------------------------------------------
    // Binary
    // ------------------------------------------------------------------

    /// Binary column.
    pub fn bytes(&self, field: &str) -> Result<&'a [u8], CodecError> {
        let value = self.required(field)?;
        value
            .as_bytes()
            .ok_or_else(|| self.mismatch(field, "binary", value))
    }

    /// Binary column holding a JSON string map.
    pub fn document(&self, field: &str) -> Result<BTreeMap<String, String>, CodecError> {
        policy::decode_document(self.bytes(field)?).map_err(|e| self.error(field, e))
    }

    /// Nullable binary column holding a JSON string map.
    pub fn opt_document(
        &self,
        field: &str,
    ) -> Result<Option<BTreeMap<String, String>>, CodecError> {
        self.optional(field)
            .map(|v| {
                let bytes = v
                    .as_bytes()
                    .ok_or_else(|| self.mismatch(field, "binary", v))?;
                policy::decode_document(bytes).map_err(|e| self.error(field, e))
            })
            .transpose()
    }

    /// Nullable binary column holding a JSON string array. Null reads as an
    /// empty list.
    pub fn opt_list(&self, field: &str) -> Result<Vec<String>, CodecError> {
        let Some(value) = self.optional(field) else {
            return Ok(Vec::new());
        };
        let bytes = value
            .as_bytes()
            .ok_or_else(|| self.mismatch(field, "binary", value))?;
        policy::decode_list(bytes).map_err(|e| self.error(field, e))
    }
}
