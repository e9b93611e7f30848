//! Schema specifications: one validated column layout per record kind.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;

use super::{FieldDescriptor, SchemaValidationError};
use crate::policy::PhysicalType;

/// Timestamp columns that must be non-null `uint64` whenever present.
pub const TIMESTAMP_FIELDS: [&str; 2] = ["ts_event", "ts_init"];

/// Immutable column layout of one record kind.
///
/// Field order is significant: it is the on-disk column order and the order
/// of values in an encoded row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSpec {
    type_tag: String,
    fields: Vec<FieldDescriptor>,
    variant_fields: BTreeSet<String>,
    positions: HashMap<String, usize>,
}

impl SchemaSpec {
    /// Validate and build a schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError`] naming the offending tag or field
    /// when the layout is inconsistent.
    pub fn new<I, S>(
        type_tag: impl Into<String>,
        fields: Vec<FieldDescriptor>,
        variant_fields: I,
    ) -> Result<Self, SchemaValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let type_tag = type_tag.into();
        if type_tag.trim().is_empty() {
            return Err(SchemaValidationError::EmptyTypeTag);
        }
        if fields.is_empty() {
            return Err(SchemaValidationError::NoFields { type_tag });
        }

        let mut positions = HashMap::with_capacity(fields.len());
        for (position, field) in fields.iter().enumerate() {
            if field.name().is_empty() {
                return Err(SchemaValidationError::EmptyFieldName { type_tag, position });
            }
            if positions.insert(field.name().to_owned(), position).is_some() {
                return Err(SchemaValidationError::DuplicateField {
                    type_tag,
                    field: field.name().to_owned(),
                });
            }
            if TIMESTAMP_FIELDS.contains(&field.name())
                && (field.physical_type() != PhysicalType::UInt64 || field.is_nullable())
            {
                let nullability = if field.is_nullable() { "nullable " } else { "" };
                return Err(SchemaValidationError::InvalidTimestampField {
                    type_tag,
                    field: field.name().to_owned(),
                    found: format!("{nullability}{}", field.physical_type()),
                });
            }
        }

        let variant_fields: BTreeSet<String> = variant_fields.into_iter().map(Into::into).collect();
        for name in &variant_fields {
            let Some(&position) = positions.get(name) else {
                return Err(SchemaValidationError::UnknownVariantField {
                    type_tag,
                    field: name.clone(),
                });
            };
            if !fields[position].is_nullable() {
                return Err(SchemaValidationError::NonNullableVariantField {
                    type_tag,
                    field: name.clone(),
                });
            }
        }

        Ok(Self {
            type_tag,
            fields,
            variant_fields,
            positions,
        })
    }

    /// Start a builder for `type_tag`.
    pub fn builder(type_tag: impl Into<String>) -> SchemaSpecBuilder {
        SchemaSpecBuilder {
            type_tag: type_tag.into(),
            fields: Vec::new(),
            variant_fields: Vec::new(),
        }
    }

    /// Record kind this layout describes.
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// Columns, in order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false for a validated schema.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of the columns only some discriminant values populate.
    pub const fn variant_fields(&self) -> &BTreeSet<String> {
        &self.variant_fields
    }

    /// Variant field names in column order.
    pub fn variant_fields_in_order(&self) -> Vec<&str> {
        self.fields
            .iter()
            .map(FieldDescriptor::name)
            .filter(|name| self.variant_fields.contains(*name))
            .collect()
    }

    /// Whether `name` is a variant field.
    pub fn is_variant(&self, name: &str) -> bool {
        self.variant_fields.contains(name)
    }

    /// Position of column `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Descriptor of column `name`.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.position(name).map(|i| &self.fields[i])
    }

    /// Column names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldDescriptor::name)
    }

    /// Column-group descriptors for the storage layer.
    pub fn column_descriptors(&self) -> Vec<ColumnDescriptor> {
        self.fields
            .iter()
            .map(|field| ColumnDescriptor {
                name: field.name().to_owned(),
                physical_type: field.physical_type().to_string(),
                nullable: field.is_nullable(),
                dictionary: field.encoding_hint().is_some(),
                key_bits: field.encoding_hint().map(|w| w.key_bits()),
                variant: self.is_variant(field.name()),
            })
            .collect()
    }

    /// Sorted names of columns whose descriptors differ between the two
    /// schemas, including columns present in only one of them.
    pub fn diff(&self, other: &Self) -> Vec<String> {
        let mine: HashSet<&FieldDescriptor> = self.fields.iter().collect();
        let theirs: HashSet<&FieldDescriptor> = other.fields.iter().collect();
        mine.symmetric_difference(&theirs)
            .map(|f| f.name().to_owned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Incremental construction of a [`SchemaSpec`].
///
/// ```
/// use schema_registry::policy::DictionaryWidth;
/// use schema_registry::schema::{FieldDescriptor, SchemaSpec};
///
/// let spec = SchemaSpec::builder("TradeTick")
///     .field(FieldDescriptor::categorical("instrument_id", DictionaryWidth::Wide))
///     .field(FieldDescriptor::decimal("price"))
///     .field(FieldDescriptor::timestamp("ts_event"))
///     .field(FieldDescriptor::timestamp("ts_init"))
///     .build()
///     .unwrap();
/// assert_eq!(spec.len(), 4);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct SchemaSpecBuilder {
    type_tag: String,
    fields: Vec<FieldDescriptor>,
    variant_fields: Vec<String>,
}

impl SchemaSpecBuilder {
    /// Append a column.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Append several columns.
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Append a column and mark it as a variant field.
    pub fn variant_field(mut self, field: FieldDescriptor) -> Self {
        self.variant_fields.push(field.name().to_owned());
        self.fields.push(field);
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// See [`SchemaSpec::new`].
    pub fn build(self) -> Result<SchemaSpec, SchemaValidationError> {
        SchemaSpec::new(self.type_tag, self.fields, self.variant_fields)
    }
}

/// Storage-facing description of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,
    /// Physical type, e.g. `uint64` or `dictionary<wide>`.
    pub physical_type: String,
    /// Whether the column may hold null.
    pub nullable: bool,
    /// Whether the column is dictionary coded.
    pub dictionary: bool,
    /// Dictionary key width in bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_bits: Option<u8>,
    /// Whether the column is a variant field.
    pub variant: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DictionaryWidth;

    fn order_spec() -> Result<SchemaSpec, SchemaValidationError> {
        SchemaSpec::builder("OrderInitialized")
            .field(FieldDescriptor::categorical("order_type", DictionaryWidth::Narrow))
            .variant_field(FieldDescriptor::decimal("trigger_price").nullable())
            .field(FieldDescriptor::timestamp("ts_event"))
            .field(FieldDescriptor::timestamp("ts_init"))
            .build()
    }

    #[test]
    fn builder_keeps_declared_order() {
        let spec = order_spec().unwrap();
        let names: Vec<_> = spec.field_names().collect();
        assert_eq!(names, ["order_type", "trigger_price", "ts_event", "ts_init"]);
        assert_eq!(spec.position("ts_init"), Some(3));
        assert!(spec.is_variant("trigger_price"));
        assert!(!spec.is_variant("order_type"));
    }

    #[test]
    fn rejects_empty_tag() {
        let err = SchemaSpec::new(" ", vec![FieldDescriptor::text("a")], Vec::<String>::new())
            .unwrap_err();
        assert_eq!(err, SchemaValidationError::EmptyTypeTag);
    }

    #[test]
    fn rejects_no_fields() {
        let err = SchemaSpec::builder("Empty").build().unwrap_err();
        assert!(matches!(err, SchemaValidationError::NoFields { .. }));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = SchemaSpec::builder("Dup")
            .field(FieldDescriptor::decimal("price"))
            .field(FieldDescriptor::text("price"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaValidationError::DuplicateField {
                type_tag: "Dup".into(),
                field: "price".into(),
            }
        );
    }

    #[test]
    fn rejects_unknown_variant_field() {
        let err = SchemaSpec::new(
            "Order",
            vec![FieldDescriptor::decimal("price").nullable()],
            ["trigger_price"],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SchemaValidationError::UnknownVariantField { ref field, .. } if field == "trigger_price"
        ));
    }

    #[test]
    fn rejects_non_nullable_variant_field() {
        let err = SchemaSpec::builder("Order")
            .variant_field(FieldDescriptor::decimal("price"))
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaValidationError::NonNullableVariantField { .. }));
    }

    #[test]
    fn rejects_nullable_timestamp() {
        let err = SchemaSpec::builder("Tick")
            .field(FieldDescriptor::timestamp("ts_event").nullable())
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaValidationError::InvalidTimestampField { .. }));
    }

    #[test]
    fn rejects_text_timestamp() {
        let err = SchemaSpec::builder("Tick")
            .field(FieldDescriptor::text("ts_init"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("utf8"));
    }

    #[test]
    fn column_descriptors_expose_dictionary_width() {
        let spec = order_spec().unwrap();
        let columns = spec.column_descriptors();
        assert_eq!(columns.len(), spec.len());
        assert!(columns[0].dictionary);
        assert_eq!(columns[0].key_bits, Some(8));
        assert_eq!(columns[0].physical_type, "dictionary<narrow>");
        assert!(columns[1].variant);
        assert!(columns[1].nullable);
        assert_eq!(columns[2].key_bits, None);
    }

    #[test]
    fn diff_lists_changed_and_missing_columns() {
        let a = order_spec().unwrap();
        let b = SchemaSpec::builder("OrderInitialized")
            .field(FieldDescriptor::categorical("order_type", DictionaryWidth::Medium))
            .field(FieldDescriptor::timestamp("ts_event"))
            .field(FieldDescriptor::timestamp("ts_init"))
            .build()
            .unwrap();
        assert_eq!(a.diff(&b), ["order_type", "trigger_price"]);
        assert!(a.diff(&a).is_empty());
    }
}
