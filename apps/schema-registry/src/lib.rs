// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Schema Registry - Typed Columnar Record Layouts
//!
//! Maps heterogeneous domain records onto fixed, ordered column layouts for
//! append-only columnar storage, and reconstructs them losslessly.
//!
//! # Layers (leaf first)
//!
//! - `policy`: physical column types, dictionary widths and the value
//!   transform (decimals as exact strings, timestamps as `u64` nanoseconds)
//! - `schema`: validated [`SchemaSpec`] layouts with variant fields, Arrow
//!   schema and persisted metadata
//! - `registry`: process-wide type tag to layout store and the built-in
//!   catalog
//! - `codec`: [`ColumnarRecord`], [`RecordCodec`] and Arrow column groups
//! - `domain`: the record kinds and their value objects
//!
//! Ambient concerns live in `config`, `telemetry`, `observability` and
//! `error`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use schema_registry::{RecordCodec, SchemaRegistry, registry::catalog};
//!
//! let registry = Arc::new(SchemaRegistry::new());
//! catalog::register_builtin_schemas(&registry)?;
//! let codec = RecordCodec::new(registry);
//! let row = codec.encode(&quote)?;
//! let back: QuoteTick = codec.decode_row("QuoteTick", &row)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod observability;
pub mod policy;
pub mod registry;
pub mod schema;
pub mod telemetry;

pub use codec::{CodecError, ColumnarRecord, EncodedRow, Record, RecordCodec};
pub use error::ErrorCode;
pub use registry::{SchemaNotRegistered, SchemaRegistry};
pub use schema::{FieldDescriptor, SchemaSpec, SchemaValidationError};
