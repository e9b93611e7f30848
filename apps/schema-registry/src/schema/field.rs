//! Column definitions.

use arrow::datatypes::Field;

use crate::policy::{DictionaryWidth, PhysicalType};

/// One column of a schema.
///
/// Constructors are named after the semantic kind they store, so a schema
/// declaration reads as a list of intents rather than storage types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: String,
    physical_type: PhysicalType,
    nullable: bool,
}

impl FieldDescriptor {
    /// A non-nullable column of the given physical type.
    pub fn new(name: impl Into<String>, physical_type: PhysicalType) -> Self {
        Self {
            name: name.into(),
            physical_type,
            nullable: false,
        }
    }

    /// Decimal stored as its exact string form.
    pub fn decimal(name: impl Into<String>) -> Self {
        Self::new(name, PhysicalType::Utf8)
    }

    /// Nanosecond timestamp.
    pub fn timestamp(name: impl Into<String>) -> Self {
        Self::new(name, PhysicalType::UInt64)
    }

    /// Dictionary-coded string with keys sized for the expected cardinality.
    pub fn categorical(name: impl Into<String>, width: DictionaryWidth) -> Self {
        Self::new(name, PhysicalType::Dictionary(width))
    }

    /// Plain string.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, PhysicalType::Utf8)
    }

    /// Opaque bytes.
    pub fn binary(name: impl Into<String>) -> Self {
        Self::new(name, PhysicalType::Binary)
    }

    /// Boolean flag.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, PhysicalType::Boolean)
    }

    /// Unsigned 8-bit integer.
    pub fn uint8(name: impl Into<String>) -> Self {
        Self::new(name, PhysicalType::UInt8)
    }

    /// Unsigned 64-bit integer.
    pub fn uint64(name: impl Into<String>) -> Self {
        Self::new(name, PhysicalType::UInt64)
    }

    /// Signed 64-bit integer.
    pub fn int64(name: impl Into<String>) -> Self {
        Self::new(name, PhysicalType::Int64)
    }

    /// True floating-point quantity.
    pub fn float64(name: impl Into<String>) -> Self {
        Self::new(name, PhysicalType::Float64)
    }

    /// Mark the column nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Physical type.
    pub const fn physical_type(&self) -> PhysicalType {
        self.physical_type
    }

    /// Whether the column may hold null.
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Dictionary key width, for dictionary-coded columns.
    pub const fn encoding_hint(&self) -> Option<DictionaryWidth> {
        self.physical_type.dictionary_width()
    }

    /// Arrow field for this column.
    pub fn to_arrow_field(&self) -> Field {
        Field::new(&self.name, self.physical_type.to_arrow(), self.nullable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pick_policy_types() {
        assert_eq!(FieldDescriptor::decimal("bid").physical_type(), PhysicalType::Utf8);
        assert_eq!(FieldDescriptor::timestamp("ts_event").physical_type(), PhysicalType::UInt64);
        assert_eq!(
            FieldDescriptor::categorical("side", DictionaryWidth::Narrow).encoding_hint(),
            Some(DictionaryWidth::Narrow)
        );
        assert_eq!(FieldDescriptor::text("trade_id").encoding_hint(), None);
    }

    #[test]
    fn fields_are_non_nullable_by_default() {
        let field = FieldDescriptor::decimal("price");
        assert!(!field.is_nullable());
        assert!(field.nullable().is_nullable());
    }

    #[test]
    fn arrow_field_carries_nullability() {
        let field = FieldDescriptor::decimal("trigger_price").nullable().to_arrow_field();
        assert_eq!(field.name(), "trigger_price");
        assert!(field.is_nullable());
    }
}
