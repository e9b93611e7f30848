//! Record to row and back, driven by the registered layout.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, warn};

use super::{CodecError, ColumnarRecord, EncodedRow, RowReader};
use crate::observability;
use crate::policy::{self, ColumnValue};
use crate::registry::{self, SchemaRegistry};
use crate::schema::SchemaSpec;

/// Encodes records into rows and decodes rows back into records.
///
/// The codec holds no layout of its own. Every call resolves the current
/// schema for the record's type tag, so an override registered at startup
/// applies to every encode that follows it.
#[derive(Debug, Clone)]
pub struct RecordCodec {
    registry: Arc<SchemaRegistry>,
}

impl RecordCodec {
    /// Codec resolving layouts from `registry`.
    pub const fn new(registry: Arc<SchemaRegistry>) -> Self {
        Self { registry }
    }

    /// Codec over the process-wide registry.
    pub fn global() -> Self {
        Self::new(registry::global())
    }

    /// The registry layouts are resolved from.
    pub fn registry(&self) -> &Arc<SchemaRegistry> {
        &self.registry
    }

    /// Encode `record` with the schema registered for its type tag.
    ///
    /// # Errors
    ///
    /// - [`CodecError::NotRegistered`] when no schema is registered; no
    ///   layout is synthesized
    /// - [`CodecError::UnknownField`] when the schema names a column the
    ///   record does not carry
    /// - [`CodecError::UnexpectedNull`] when an unset value targets a
    ///   non-nullable column
    /// - [`CodecError::Policy`] when a value cannot be placed in its column
    pub fn encode<R: ColumnarRecord>(&self, record: &R) -> Result<EncodedRow, CodecError> {
        let type_tag = record.type_tag();
        let spec = match self.registry.lookup(type_tag) {
            Ok(spec) => spec,
            Err(e) => {
                let err = CodecError::from(e);
                warn!(type_tag, error_code = %err.error_code(), "Encode without registered schema");
                observability::record_encode_failure(type_tag, err.error_code().reason());
                return Err(err);
            }
        };
        Self::encode_with(&spec, record)
    }

    /// Encode `record` against an explicit schema.
    ///
    /// # Errors
    ///
    /// See [`RecordCodec::encode`].
    pub fn encode_with<R: ColumnarRecord>(
        spec: &SchemaSpec,
        record: &R,
    ) -> Result<EncodedRow, CodecError> {
        let type_tag = spec.type_tag();
        let result = spec
            .fields()
            .iter()
            .map(|field| {
                let value = record.field_value(field.name()).ok_or_else(|| {
                    CodecError::UnknownField {
                        type_tag: type_tag.to_owned(),
                        field: field.name().to_owned(),
                    }
                })?;
                if value.is_null() && !field.is_nullable() {
                    return Err(CodecError::UnexpectedNull {
                        type_tag: type_tag.to_owned(),
                        field: field.name().to_owned(),
                    });
                }
                policy::encode_value(field.name(), field.physical_type(), value).map_err(
                    |source| CodecError::Policy {
                        type_tag: type_tag.to_owned(),
                        source,
                    },
                )
            })
            .collect::<Result<Vec<ColumnValue>, _>>();

        match result {
            Ok(values) => {
                observability::record_encode(type_tag);
                Ok(EncodedRow::new(values))
            }
            Err(e) => {
                warn!(type_tag, error_code = %e.error_code(), error = %e, "Record encode failed");
                observability::record_encode_failure(type_tag, e.error_code().reason());
                Err(e)
            }
        }
    }

    /// Encode many records in parallel, preserving input order.
    ///
    /// # Errors
    ///
    /// Fails if any record fails; which failure is reported is unspecified
    /// when several records fail.
    pub fn encode_all<R>(&self, records: &[R]) -> Result<Vec<EncodedRow>, CodecError>
    where
        R: ColumnarRecord + Sync,
    {
        records.par_iter().map(|record| self.encode(record)).collect()
    }

    /// Decode `row` against `spec` into a record of type `R`.
    ///
    /// The row is checked against the schema before the record sees it:
    /// the length must match, nulls may only appear in nullable columns and
    /// every value must have its column's physical type.
    ///
    /// # Errors
    ///
    /// - [`CodecError::RowSchemaMismatch`] on a length mismatch
    /// - [`CodecError::UnexpectedNull`] for a null in a non-nullable column
    /// - [`CodecError::Decode`] for a value of the wrong type or a value the
    ///   record cannot parse
    /// - [`CodecError::MissingVariantField`] when the discriminant requires
    ///   a variant column that is null
    pub fn decode<R: ColumnarRecord>(row: &EncodedRow, spec: &SchemaSpec) -> Result<R, CodecError> {
        let type_tag = spec.type_tag();
        let result =
            Self::check_row(row, spec).and_then(|()| R::decode(&RowReader::new(spec, row)));

        match &result {
            Ok(_) => observability::record_decode(type_tag),
            Err(e) => {
                debug!(type_tag, error_code = %e.error_code(), error = %e, "Row decode failed");
                observability::record_decode_failure(type_tag, e.error_code().reason());
            }
        }
        result
    }

    /// Decode `row` with the schema currently registered for `type_tag`.
    ///
    /// # Errors
    ///
    /// [`CodecError::NotRegistered`] when no schema is registered, otherwise
    /// see [`RecordCodec::decode`].
    pub fn decode_row<R: ColumnarRecord>(
        &self,
        type_tag: &str,
        row: &EncodedRow,
    ) -> Result<R, CodecError> {
        let spec = self.registry.lookup(type_tag)?;
        Self::decode(row, &spec)
    }

    fn check_row(row: &EncodedRow, spec: &SchemaSpec) -> Result<(), CodecError> {
        let type_tag = spec.type_tag();
        if row.len() != spec.len() {
            return Err(CodecError::RowSchemaMismatch {
                type_tag: type_tag.to_owned(),
                expected: spec.len(),
                actual: row.len(),
            });
        }
        for (field, value) in spec.fields().iter().zip(row.values()) {
            if value.is_null() {
                if !field.is_nullable() {
                    return Err(CodecError::UnexpectedNull {
                        type_tag: type_tag.to_owned(),
                        field: field.name().to_owned(),
                    });
                }
            } else if !value.conforms_to(field.physical_type()) {
                return Err(CodecError::Decode {
                    type_tag: type_tag.to_owned(),
                    field: field.name().to_owned(),
                    message: format!(
                        "expected {} value, found {}",
                        field.physical_type(),
                        value.type_name()
                    ),
                });
            }
        }
        Ok(())
    }
}
