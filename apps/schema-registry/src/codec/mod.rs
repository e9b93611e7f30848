//! Record Codec
//!
//! Turns domain records into rows laid out by their registered schema, rows
//! into Arrow column groups, and both back again.
//!
//! # Flow
//!
//! ```text
//! record --ColumnarRecord::field_value--> FieldValue --policy--> ColumnValue
//!        --EncodedRow--> rows_to_record_batch --> RecordBatch (+ metadata)
//! ```
//!
//! Decoding runs the other way: the batch metadata rebuilds the layout, each
//! row is checked against it (length, nulls, physical types) and the record
//! type reads its columns by name through a [`RowReader`].

mod batch;
mod errors;
mod record;
mod record_codec;
mod records;
mod row;

pub use batch::{
    BatchError, DecodedBatch, RowFailure, decode_record_batch, encode_record_batch, read_ipc,
    record_batch_to_rows, rows_to_record_batch, write_ipc,
};
pub use errors::CodecError;
pub use record::{ColumnarRecord, Record};
pub use record_codec::RecordCodec;
pub use row::{EncodedRow, RowReader};
