//! Semantic field values and physical column values.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::PhysicalType;

/// A value as extracted from a domain record, before encoding.
///
/// The variant is the value's semantic kind; the encoding policy decides
/// which physical column types may hold it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Not populated (a variant field the record's discriminant leaves unset,
    /// or an optional value that is absent).
    Null,
    /// Arbitrary-precision decimal (prices, quantities, offsets, rates).
    Decimal(Decimal),
    /// Nanoseconds since the Unix epoch.
    Timestamp(u64),
    /// Identifier, enumeration token or free text.
    Text(String),
    /// Boolean flag.
    Boolean(bool),
    /// Unsigned integer.
    UInt(u64),
    /// Signed integer.
    Int(i64),
    /// True floating-point quantity.
    Float(f64),
    /// Auxiliary string map, stored as an opaque document.
    Document(BTreeMap<String, String>),
    /// Ordered list of strings (linked identifiers), stored as a JSON array.
    List(Vec<String>),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// Name of the semantic kind, for error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Decimal(_) => "decimal",
            Self::Timestamp(_) => "timestamp",
            Self::Text(_) => "text",
            Self::Boolean(_) => "boolean",
            Self::UInt(_) => "unsigned integer",
            Self::Int(_) => "signed integer",
            Self::Float(_) => "float",
            Self::Document(_) => "document",
            Self::List(_) => "list",
            Self::Bytes(_) => "bytes",
        }
    }

    /// Returns true for [`FieldValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Text value from anything displayable (identifiers, enum tokens).
    pub fn text(value: impl ToString) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<BTreeMap<String, String>> for FieldValue {
    fn from(value: BTreeMap<String, String>) -> Self {
        Self::Document(value)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A single encoded column value.
///
/// Dictionary-coded columns hold [`ColumnValue::Utf8`]; the ordinal is
/// assigned when the column group is materialised.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    /// Absent value.
    Null,
    /// `uint8` value.
    UInt8(u8),
    /// `uint16` value.
    UInt16(u16),
    /// `uint32` value.
    UInt32(u32),
    /// `uint64` value.
    UInt64(u64),
    /// `int64` value.
    Int64(i64),
    /// `float64` value.
    Float64(f64),
    /// `boolean` value.
    Boolean(bool),
    /// String value, plain or dictionary coded.
    Utf8(String),
    /// Opaque bytes.
    Binary(Vec<u8>),
}

impl ColumnValue {
    /// Returns true for [`ColumnValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this value may be stored in a column of `physical` type.
    /// Null conforms to every type; nullability is checked separately.
    #[must_use]
    pub const fn conforms_to(&self, physical: PhysicalType) -> bool {
        matches!(
            (self, physical),
            (Self::Null, _)
                | (Self::UInt8(_), PhysicalType::UInt8)
                | (Self::UInt16(_), PhysicalType::UInt16)
                | (Self::UInt32(_), PhysicalType::UInt32)
                | (Self::UInt64(_), PhysicalType::UInt64)
                | (Self::Int64(_), PhysicalType::Int64)
                | (Self::Float64(_), PhysicalType::Float64)
                | (Self::Boolean(_), PhysicalType::Boolean)
                | (Self::Utf8(_), PhysicalType::Utf8 | PhysicalType::Dictionary(_))
                | (Self::Binary(_), PhysicalType::Binary)
        )
    }

    /// Name of the stored type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::UInt8(_) => "uint8",
            Self::UInt16(_) => "uint16",
            Self::UInt32(_) => "uint32",
            Self::UInt64(_) => "uint64",
            Self::Int64(_) => "int64",
            Self::Float64(_) => "float64",
            Self::Boolean(_) => "boolean",
            Self::Utf8(_) => "utf8",
            Self::Binary(_) => "binary",
        }
    }

    /// String contents of a textual value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Utf8(s) => Some(s),
            _ => None,
        }
    }

    /// Any unsigned value, widened.
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt8(v) => Some(*v as u64),
            Self::UInt16(v) => Some(*v as u64),
            Self::UInt32(v) => Some(*v as u64),
            Self::UInt64(v) => Some(*v),
            _ => None,
        }
    }

    /// Signed value.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Float value.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Byte contents of a binary value.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(b) => Some(b),
            _ => None,
        }
    }
}
