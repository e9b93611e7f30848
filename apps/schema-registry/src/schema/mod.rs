//! Schema Specification
//!
//! Ordered, validated column layouts for record kinds, plus the Arrow
//! representation and column-group descriptors handed to storage.

mod errors;
mod field;
mod metadata;
mod spec;

pub use errors::SchemaValidationError;
pub use field::FieldDescriptor;
pub use metadata::{TYPE_TAG_KEY, VARIANT_FIELDS_KEY};
pub use spec::{ColumnDescriptor, SchemaSpec, SchemaSpecBuilder, TIMESTAMP_FIELDS};
