//! Registry and codec metrics.
//!
//! Recorded through the `metrics` facade. Nothing is exported unless the
//! host process installs a recorder; without one every call is a no-op.
//!
//! # Example
//!
//! ```ignore
//! use schema_registry::observability::record_encode;
//!
//! record_encode("QuoteTick");
//! ```

use metrics::{counter, gauge, histogram};

// ============================================================================
// Registry Metrics
// ============================================================================

/// Record a schema registration.
///
/// # Arguments
///
/// * `type_tag` - Registered record kind
/// * `replaced` - Whether an existing schema was overridden
pub fn record_schema_registration(type_tag: &str, replaced: bool) {
    counter!(
        "schema_registrations_total",
        "type_tag" => type_tag.to_string(),
        "outcome" => if replaced { "replaced" } else { "inserted" }
    )
    .increment(1);
}

/// Update the registered schema gauge.
pub fn update_registered_schemas(count: usize) {
    #[allow(clippy::cast_precision_loss)]
    gauge!("registered_schemas").set(count as f64);
}

// ============================================================================
// Codec Metrics
// ============================================================================

/// Record a successfully encoded record.
pub fn record_encode(type_tag: &str) {
    counter!("records_encoded_total", "type_tag" => type_tag.to_string()).increment(1);
}

/// Record a failed encode.
///
/// # Arguments
///
/// * `type_tag` - Record kind that failed
/// * `error_code` - Stable reason code (e.g. `"SCHEMA_NOT_REGISTERED"`)
pub fn record_encode_failure(type_tag: &str, error_code: &str) {
    counter!(
        "record_encode_failures_total",
        "type_tag" => type_tag.to_string(),
        "error_code" => error_code.to_string()
    )
    .increment(1);
}

/// Record a successfully decoded row.
pub fn record_decode(type_tag: &str) {
    counter!("records_decoded_total", "type_tag" => type_tag.to_string()).increment(1);
}

/// Record a row that failed to decode.
pub fn record_decode_failure(type_tag: &str, error_code: &str) {
    counter!(
        "record_decode_failures_total",
        "type_tag" => type_tag.to_string(),
        "error_code" => error_code.to_string()
    )
    .increment(1);
}

/// Record the size of a materialised column group.
pub fn record_batch_rows(type_tag: &str, rows: usize) {
    #[allow(clippy::cast_precision_loss)]
    histogram!("column_group_rows", "type_tag" => type_tag.to_string()).record(rows as f64);
}

// ============================================================================
// Tests
// ============================================================================
