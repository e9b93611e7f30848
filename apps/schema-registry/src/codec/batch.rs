//! Column groups: encoded rows materialised as Arrow record batches.
//!
//! A batch carries its layout in schema metadata, so reading it back needs
//! no registry. Decoding a batch keeps going past malformed rows and reports
//! them alongside the records that did decode.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, AsArray, BinaryBuilder, BooleanBuilder, Float64Builder, Int64Builder, RecordBatch,
    StringBuilder, StringDictionaryBuilder, UInt8Builder, UInt16Builder, UInt32Builder,
    UInt64Builder,
};
use arrow::compute::cast;
use arrow::datatypes::{
    ArrowDictionaryKeyType, DataType, Float64Type, Int8Type, Int16Type, Int64Type, UInt8Type,
    UInt16Type, UInt32Type, UInt64Type,
};
use arrow::error::ArrowError;
use arrow::ipc::reader::FileReader;
use arrow::ipc::writer::FileWriter;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use super::{CodecError, ColumnarRecord, EncodedRow, RecordCodec};
use crate::error::ErrorCode;
use crate::observability;
use crate::policy::{ColumnValue, DictionaryWidth, PhysicalType};
use crate::schema::{FieldDescriptor, SchemaSpec, SchemaValidationError};

/// Failure building or reading a column group.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Arrow rejected the arrays.
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// File I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted layout is not a valid schema.
    #[error("Invalid persisted schema: {0}")]
    Schema(#[from] SchemaValidationError),

    /// A row's length differs from the schema.
    #[error("Row {row} of '{type_tag}' has {actual} values, schema has {expected} columns")]
    RowSchemaMismatch {
        /// Record kind.
        type_tag: String,
        /// Row index.
        row: usize,
        /// Column count of the schema.
        expected: usize,
        /// Values in the row.
        actual: usize,
    },

    /// A value does not have its column's physical type.
    #[error("Row {row} of '{type_tag}': column '{field}' expects {expected}, found {found}")]
    ColumnType {
        /// Record kind.
        type_tag: String,
        /// Row index.
        row: usize,
        /// Column name.
        field: String,
        /// Declared type.
        expected: PhysicalType,
        /// Type of the value found.
        found: &'static str,
    },

    /// Null in a non-nullable column.
    #[error("Row {row} of '{type_tag}': null in non-nullable column '{field}'")]
    NullInColumn {
        /// Record kind.
        type_tag: String,
        /// Row index.
        row: usize,
        /// Column name.
        field: String,
    },

    /// More distinct values than the dictionary key width can address.
    #[error(
        "Column '{field}' of '{type_tag}' exceeds the {width} dictionary capacity of {capacity} distinct values",
        capacity = .width.capacity()
    )]
    DictionaryOverflow {
        /// Record kind.
        type_tag: String,
        /// Column name.
        field: String,
        /// Declared key width.
        width: DictionaryWidth,
    },

    /// An array read back does not match its declared column type.
    #[error("Column '{field}' holds {data_type}, expected {expected}")]
    ArrayType {
        /// Column name.
        field: String,
        /// Declared type.
        expected: PhysicalType,
        /// Arrow type found.
        data_type: String,
    },

    /// A record failed to encode.
    #[error("Record {row} failed to encode: {source}")]
    Encode {
        /// Record index.
        row: usize,
        /// Codec failure.
        #[source]
        source: CodecError,
    },

    /// A record's kind differs from the batch's kind.
    #[error("Batch of '{expected}' received a '{found}' record at {row}")]
    MixedRecordKinds {
        /// Kind of the batch.
        expected: String,
        /// Kind of the stray record.
        found: String,
        /// Record index.
        row: usize,
    },

    /// Decoding hit an error that affects every row.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl BatchError {
    /// Stable code for logs and metrics.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Arrow(_) | Self::Io(_) | Self::ArrayType { .. } => ErrorCode::ArrowError,
            Self::Schema(_) => ErrorCode::SchemaInvalid,
            Self::RowSchemaMismatch { .. }
            | Self::ColumnType { .. }
            | Self::MixedRecordKinds { .. } => ErrorCode::RowSchemaMismatch,
            Self::NullInColumn { .. } => ErrorCode::UnexpectedNull,
            Self::DictionaryOverflow { .. } => ErrorCode::DictionaryOverflow,
            Self::Encode { source, .. } | Self::Codec(source) => source.error_code(),
        }
    }
}

/// A row that failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// Row index within the batch.
    pub row: usize,
    /// Why it failed.
    pub error: CodecError,
}

/// Outcome of decoding a column group.
#[derive(Debug, Clone)]
pub struct DecodedBatch<R> {
    /// Layout persisted with the batch.
    pub spec: SchemaSpec,
    /// Records decoded, in row order.
    pub records: Vec<R>,
    /// Rows skipped, in row order.
    pub failures: Vec<RowFailure>,
}

impl<R> DecodedBatch<R> {
    /// Whether every row decoded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

// ============================================================================
// Rows -> Batch
// ============================================================================

/// Materialise `rows` as a record batch laid out by `spec`.
///
/// The batch schema carries the `type` and `variant_fields` metadata.
pub fn rows_to_record_batch(
    spec: &SchemaSpec,
    rows: &[EncodedRow],
) -> Result<RecordBatch, BatchError> {
    let type_tag = spec.type_tag();
    for (index, row) in rows.iter().enumerate() {
        if row.len() != spec.len() {
            return Err(BatchError::RowSchemaMismatch {
                type_tag: type_tag.to_owned(),
                row: index,
                expected: spec.len(),
                actual: row.len(),
            });
        }
    }

    let columns = spec
        .fields()
        .iter()
        .enumerate()
        .map(|(position, field)| build_column(type_tag, field, position, rows))
        .collect::<Result<Vec<ArrayRef>, BatchError>>()
        .inspect_err(|e| {
            warn!(type_tag, error_code = %e.error_code(), error = %e, "Column group build failed");
        })?;

    let batch = RecordBatch::try_new(spec.to_arrow_schema(), columns)?;
    observability::record_batch_rows(type_tag, batch.num_rows());
    debug!(type_tag, rows = batch.num_rows(), "Column group built");
    Ok(batch)
}

/// Encode `records` of kind `type_tag` and materialise them as one batch.
///
/// Records are encoded in parallel against a single schema snapshot.
pub fn encode_record_batch<R>(
    codec: &RecordCodec,
    type_tag: &str,
    records: &[R],
) -> Result<RecordBatch, BatchError>
where
    R: ColumnarRecord + Sync,
{
    if let Some((row, stray)) = records
        .iter()
        .enumerate()
        .find(|(_, r)| r.type_tag() != type_tag)
    {
        return Err(BatchError::MixedRecordKinds {
            expected: type_tag.to_owned(),
            found: stray.type_tag().to_owned(),
            row,
        });
    }

    let spec = codec.registry().lookup(type_tag).map_err(CodecError::from)?;
    let rows = records
        .par_iter()
        .enumerate()
        .map(|(row, record)| {
            RecordCodec::encode_with(&spec, record)
                .map_err(|source| BatchError::Encode { row, source })
        })
        .collect::<Result<Vec<EncodedRow>, BatchError>>()?;

    rows_to_record_batch(&spec, &rows)
}

/// A typed slice of one column across all rows; `None` is null.
fn column_values<'a>(
    type_tag: &str,
    field: &FieldDescriptor,
    position: usize,
    rows: &'a [EncodedRow],
) -> Result<Vec<Option<&'a ColumnValue>>, BatchError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| match &row[position] {
            ColumnValue::Null if !field.is_nullable() => Err(BatchError::NullInColumn {
                type_tag: type_tag.to_owned(),
                row: index,
                field: field.name().to_owned(),
            }),
            ColumnValue::Null => Ok(None),
            value => Ok(Some(value)),
        })
        .collect()
}

macro_rules! build_array {
    ($builder:expr, $variant:ident, |$v:ident| $append:expr, $values:expr, $mismatch:expr) => {{
        let mut builder = $builder;
        for (row, value) in $values.iter().enumerate() {
            match value {
                None => builder.append_null(),
                Some(ColumnValue::$variant($v)) => builder.append_value($append),
                Some(other) => return Err($mismatch(row, *other)),
            }
        }
        Arc::new(builder.finish()) as ArrayRef
    }};
}

fn build_column(
    type_tag: &str,
    field: &FieldDescriptor,
    position: usize,
    rows: &[EncodedRow],
) -> Result<ArrayRef, BatchError> {
    let values = column_values(type_tag, field, position, rows)?;
    let mismatch = |row: usize, found: &ColumnValue| BatchError::ColumnType {
        type_tag: type_tag.to_owned(),
        row,
        field: field.name().to_owned(),
        expected: field.physical_type(),
        found: found.type_name(),
    };

    Ok(match field.physical_type() {
        PhysicalType::UInt8 => build_array!(UInt8Builder::new(), UInt8, |v| *v, values, mismatch),
        PhysicalType::UInt16 => {
            build_array!(UInt16Builder::new(), UInt16, |v| *v, values, mismatch)
        }
        PhysicalType::UInt32 => {
            build_array!(UInt32Builder::new(), UInt32, |v| *v, values, mismatch)
        }
        PhysicalType::UInt64 => {
            build_array!(UInt64Builder::new(), UInt64, |v| *v, values, mismatch)
        }
        PhysicalType::Int64 => build_array!(Int64Builder::new(), Int64, |v| *v, values, mismatch),
        PhysicalType::Float64 => {
            build_array!(Float64Builder::new(), Float64, |v| *v, values, mismatch)
        }
        PhysicalType::Boolean => {
            build_array!(BooleanBuilder::new(), Boolean, |v| *v, values, mismatch)
        }
        PhysicalType::Utf8 => build_array!(StringBuilder::new(), Utf8, |v| v, values, mismatch),
        PhysicalType::Binary => build_array!(BinaryBuilder::new(), Binary, |v| v, values, mismatch),
        PhysicalType::Dictionary(width) => {
            let overflow = || BatchError::DictionaryOverflow {
                type_tag: type_tag.to_owned(),
                field: field.name().to_owned(),
                width,
            };
            match width {
                DictionaryWidth::Narrow => {
                    build_dictionary::<Int8Type>(&values, mismatch, overflow)?
                }
                DictionaryWidth::Medium => {
                    build_dictionary::<Int16Type>(&values, mismatch, overflow)?
                }
                DictionaryWidth::Wide => {
                    build_dictionary::<Int64Type>(&values, mismatch, overflow)?
                }
            }
        }
    })
}

fn build_dictionary<K: ArrowDictionaryKeyType>(
    values: &[Option<&ColumnValue>],
    mismatch: impl Fn(usize, &ColumnValue) -> BatchError,
    overflow: impl Fn() -> BatchError,
) -> Result<ArrayRef, BatchError> {
    let mut builder = StringDictionaryBuilder::<K>::new();
    for (row, value) in values.iter().enumerate() {
        match value {
            None => builder.append_null(),
            Some(ColumnValue::Utf8(s)) => {
                builder.append(s).map_err(|e| match e {
                    ArrowError::DictionaryKeyOverflowError => overflow(),
                    other => BatchError::Arrow(other),
                })?;
            }
            Some(other) => return Err(mismatch(row, *other)),
        }
    }
    Ok(Arc::new(builder.finish()))
}

// ============================================================================
// Batch -> Rows
// ============================================================================

/// Read a batch back into its persisted layout and rows.
///
/// Dictionary columns come back as plain strings.
pub fn record_batch_to_rows(
    batch: &RecordBatch,
) -> Result<(SchemaSpec, Vec<EncodedRow>), BatchError> {
    let spec = SchemaSpec::from_arrow_schema(&batch.schema())?;

    let columns = spec
        .fields()
        .iter()
        .zip(batch.columns())
        .map(|(field, array)| read_column(field, array))
        .collect::<Result<Vec<Vec<ColumnValue>>, BatchError>>()?;

    let mut iters: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
    let rows = (0..batch.num_rows())
        .map(|_| {
            EncodedRow::new(
                iters
                    .iter_mut()
                    .map(|column| column.next().unwrap_or(ColumnValue::Null))
                    .collect(),
            )
        })
        .collect();

    Ok((spec, rows))
}

macro_rules! read_array {
    ($array:expr, $wrong:expr, |$v:ident| $value:expr) => {
        $array
            .ok_or_else($wrong)?
            .iter()
            .map(|item| item.map_or(ColumnValue::Null, |$v| $value))
            .collect()
    };
}

fn read_column(field: &FieldDescriptor, array: &ArrayRef) -> Result<Vec<ColumnValue>, BatchError> {
    let wrong = || BatchError::ArrayType {
        field: field.name().to_owned(),
        expected: field.physical_type(),
        data_type: array.data_type().to_string(),
    };

    Ok(match field.physical_type() {
        PhysicalType::UInt8 => {
            read_array!(array.as_primitive_opt::<UInt8Type>(), wrong, |v| ColumnValue::UInt8(v))
        }
        PhysicalType::UInt16 => {
            read_array!(array.as_primitive_opt::<UInt16Type>(), wrong, |v| ColumnValue::UInt16(v))
        }
        PhysicalType::UInt32 => {
            read_array!(array.as_primitive_opt::<UInt32Type>(), wrong, |v| ColumnValue::UInt32(v))
        }
        PhysicalType::UInt64 => {
            read_array!(array.as_primitive_opt::<UInt64Type>(), wrong, |v| ColumnValue::UInt64(v))
        }
        PhysicalType::Int64 => {
            read_array!(array.as_primitive_opt::<Int64Type>(), wrong, |v| ColumnValue::Int64(v))
        }
        PhysicalType::Float64 => {
            read_array!(array.as_primitive_opt::<Float64Type>(), wrong, |v| ColumnValue::Float64(v))
        }
        PhysicalType::Boolean => {
            read_array!(array.as_boolean_opt(), wrong, |v| ColumnValue::Boolean(v))
        }
        PhysicalType::Utf8 => {
            read_array!(array.as_string_opt::<i32>(), wrong, |v| ColumnValue::Utf8(v.to_owned()))
        }
        PhysicalType::Binary => {
            read_array!(array.as_binary_opt::<i32>(), wrong, |v| ColumnValue::Binary(v.to_vec()))
        }
        PhysicalType::Dictionary(_) => {
            if !matches!(array.data_type(), DataType::Dictionary(_, _)) {
                return Err(wrong());
            }
            let strings = cast(array, &DataType::Utf8)?;
            read_array!(strings.as_string_opt::<i32>(), wrong, |v| ColumnValue::Utf8(v.to_owned()))
        }
    })
}

/// Decode every row of `batch` into records of type `R`.
///
/// Row-level failures (length, null discipline, parse errors, missing
/// variant fields) are collected and decoding continues. Any other failure
/// affects every row and aborts the batch.
pub fn decode_record_batch<R: ColumnarRecord>(
    batch: &RecordBatch,
) -> Result<DecodedBatch<R>, BatchError> {
    let (spec, rows) = record_batch_to_rows(batch)?;
    let mut records = Vec::with_capacity(rows.len());
    let mut failures = Vec::new();

    for (row, values) in rows.iter().enumerate() {
        match RecordCodec::decode::<R>(values, &spec) {
            Ok(record) => records.push(record),
            Err(error) if error.is_row_recoverable() => {
                warn!(
                    type_tag = spec.type_tag(),
                    row,
                    error_code = %error.error_code(),
                    error = %error,
                    "Skipping malformed row"
                );
                failures.push(RowFailure { row, error });
            }
            Err(error) => return Err(BatchError::Codec(error)),
        }
    }

    Ok(DecodedBatch {
        spec,
        records,
        failures,
    })
}

// ============================================================================
// IPC Files
// ============================================================================

/// Write `batch` as an Arrow IPC file at `path`, schema metadata included.
pub fn write_ipc(path: &Path, batch: &RecordBatch) -> Result<(), BatchError> {
    let file = File::create(path)?;
    let mut writer = FileWriter::try_new(file, &batch.schema())?;
    writer.write(batch)?;
    writer.finish()?;
    debug!(path = %path.display(), rows = batch.num_rows(), "Column group written");
    Ok(())
}

/// Read every batch from the Arrow IPC file at `path`.
pub fn read_ipc(path: &Path) -> Result<Vec<RecordBatch>, BatchError> {
    let reader = FileReader::try_new(File::open(path)?, None)?;
    let batches = reader.collect::<Result<Vec<_>, ArrowError>>()?;
    debug!(path = %path.display(), batches = batches.len(), "Column groups read");
    Ok(batches)
}
