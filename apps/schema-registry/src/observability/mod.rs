//! Observability module for metrics.
//!
//! Counters for schema registration and record encode/decode outcomes.
//! Logging is set up in [`crate::telemetry`].

mod metrics;

pub use metrics::{
    record_batch_rows, record_decode, record_decode_failure, record_encode,
    record_encode_failure, record_schema_registration, update_registered_schemas,
};
