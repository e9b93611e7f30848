//! Physical column types and dictionary key widths.

use std::fmt;
use std::str::FromStr;

use arrow::datatypes::DataType;
use serde::{Deserialize, Serialize};

/// Ordinal width of a dictionary-coded string column.
///
/// Chosen by the expected number of distinct values in the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryWidth {
    /// 8-bit keys, for closed enumerations (side, order type, status).
    Narrow,
    /// 16-bit keys, for moderately diverse sets (strategy, account, currency).
    Medium,
    /// 64-bit keys, for unbounded identifier spaces (instrument ids).
    Wide,
}

impl DictionaryWidth {
    /// Every width, narrowest first.
    pub const ALL: &'static [Self] = &[Self::Narrow, Self::Medium, Self::Wide];

    /// Key width in bits.
    #[must_use]
    pub const fn key_bits(&self) -> u8 {
        match self {
            Self::Narrow => 8,
            Self::Medium => 16,
            Self::Wide => 64,
        }
    }

    /// Number of distinct values a dictionary of this width can hold.
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        match self {
            Self::Narrow => i8::MAX as u64 + 1,
            Self::Medium => i16::MAX as u64 + 1,
            Self::Wide => i64::MAX as u64 + 1,
        }
    }

    /// Arrow key type for this width.
    #[must_use]
    pub fn key_type(&self) -> DataType {
        match self {
            Self::Narrow => DataType::Int8,
            Self::Medium => DataType::Int16,
            Self::Wide => DataType::Int64,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Medium => "medium",
            Self::Wide => "wide",
        }
    }

    fn from_key_type(key: &DataType) -> Option<Self> {
        match key {
            DataType::Int8 => Some(Self::Narrow),
            DataType::Int16 => Some(Self::Medium),
            DataType::Int64 => Some(Self::Wide),
            _ => None,
        }
    }
}

impl fmt::Display for DictionaryWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical storage type of a column.
///
/// This is the closed set of layouts the encoding policy produces; anything
/// else is rejected when a schema is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalType {
    /// Unsigned 8-bit integer.
    UInt8,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Unsigned 64-bit integer (timestamps, counters).
    UInt64,
    /// Signed 64-bit integer.
    Int64,
    /// IEEE 754 double. Only for true floating-point quantities.
    Float64,
    /// Boolean flag.
    Boolean,
    /// Plain UTF-8 string.
    Utf8,
    /// Opaque bytes.
    Binary,
    /// Dictionary-coded UTF-8 string.
    Dictionary(DictionaryWidth),
}

impl PhysicalType {
    /// Dictionary key width, if dictionary coded.
    #[must_use]
    pub const fn dictionary_width(&self) -> Option<DictionaryWidth> {
        match self {
            Self::Dictionary(width) => Some(*width),
            _ => None,
        }
    }

    /// Returns true for string columns, plain or dictionary coded.
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        matches!(self, Self::Utf8 | Self::Dictionary(_))
    }

    /// Stable lowercase name of the type family.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Boolean => "boolean",
            Self::Utf8 => "utf8",
            Self::Binary => "binary",
            Self::Dictionary(_) => "dictionary",
        }
    }

    /// Arrow data type for this column.
    #[must_use]
    pub fn to_arrow(&self) -> DataType {
        match self {
            Self::UInt8 => DataType::UInt8,
            Self::UInt16 => DataType::UInt16,
            Self::UInt32 => DataType::UInt32,
            Self::UInt64 => DataType::UInt64,
            Self::Int64 => DataType::Int64,
            Self::Float64 => DataType::Float64,
            Self::Boolean => DataType::Boolean,
            Self::Utf8 => DataType::Utf8,
            Self::Binary => DataType::Binary,
            Self::Dictionary(width) => {
                DataType::Dictionary(Box::new(width.key_type()), Box::new(DataType::Utf8))
            }
        }
    }

    /// Map an Arrow data type back onto the policy.
    ///
    /// Returns `None` for types the policy never produces (lists, structs,
    /// dates, dictionaries of non-string values, unsupported key widths).
    #[must_use]
    pub fn from_arrow(data_type: &DataType) -> Option<Self> {
        match data_type {
            DataType::UInt8 => Some(Self::UInt8),
            DataType::UInt16 => Some(Self::UInt16),
            DataType::UInt32 => Some(Self::UInt32),
            DataType::UInt64 => Some(Self::UInt64),
            DataType::Int64 => Some(Self::Int64),
            DataType::Float64 => Some(Self::Float64),
            DataType::Boolean => Some(Self::Boolean),
            DataType::Utf8 => Some(Self::Utf8),
            DataType::Binary => Some(Self::Binary),
            DataType::Dictionary(key, value) if value.as_ref() == &DataType::Utf8 => {
                DictionaryWidth::from_key_type(key).map(Self::Dictionary)
            }
            _ => None,
        }
    }
}

impl fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dictionary(width) => write!(f, "dictionary<{width}>"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for PhysicalType {
    type Err = String;

    /// Parses the `Display` form, e.g. `uint64` or `dictionary<wide>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Some(inner) = s
            .strip_prefix("dictionary<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return match inner {
                "narrow" => Ok(Self::Dictionary(DictionaryWidth::Narrow)),
                "medium" => Ok(Self::Dictionary(DictionaryWidth::Medium)),
                "wide" => Ok(Self::Dictionary(DictionaryWidth::Wide)),
                other => Err(format!("unknown dictionary width '{other}'")),
            };
        }
        match s.as_str() {
            "uint8" => Ok(Self::UInt8),
            "uint16" => Ok(Self::UInt16),
            "uint32" => Ok(Self::UInt32),
            "uint64" => Ok(Self::UInt64),
            "int64" => Ok(Self::Int64),
            "float64" => Ok(Self::Float64),
            "boolean" => Ok(Self::Boolean),
            "utf8" => Ok(Self::Utf8),
            "binary" => Ok(Self::Binary),
            "dictionary" => Err("dictionary type requires a width, e.g. dictionary<wide>".into()),
            other => Err(format!("unknown physical type '{other}'")),
        }
    }
}
