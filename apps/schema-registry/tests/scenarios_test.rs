//! End-to-end registry and codec scenarios.
//!
//! Custom record kinds, variant-bearing orders, overrides and the failure
//! modes a producer or reader can hit.

#![allow(clippy::unwrap_used)]

mod common;

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use schema_registry::codec::RowReader;
use schema_registry::config::load_config;
use schema_registry::domain::shared::{OrderSide, Price, UnixNanos};
use schema_registry::domain::{OrderInitialized, OrderKind, OrderUpdated, QuoteTick};
use schema_registry::policy::{ColumnValue, DictionaryWidth, FieldValue, PolicyError};
use schema_registry::{
    CodecError, ColumnarRecord, EncodedRow, FieldDescriptor, RecordCodec, SchemaRegistry,
    SchemaSpec,
};

// =============================================================================
// Custom record kind
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct TradeExecuted {
    price: Decimal,
    size: Decimal,
    side: OrderSide,
    event_time: UnixNanos,
    ingest_time: UnixNanos,
}

impl ColumnarRecord for TradeExecuted {
    fn type_tag(&self) -> &str {
        "TradeExecuted"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "price" => self.price.into(),
            "size" => self.size.into(),
            "side" => FieldValue::text(self.side),
            "event_time" => FieldValue::Timestamp(self.event_time.as_u64()),
            "ingest_time" => FieldValue::Timestamp(self.ingest_time.as_u64()),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            price: row.decimal("price")?,
            size: row.decimal("size")?,
            side: row.parse("side")?,
            event_time: row.timestamp("event_time")?,
            ingest_time: row.timestamp("ingest_time")?,
        })
    }
}

fn trade_executed_spec() -> SchemaSpec {
    SchemaSpec::builder("TradeExecuted")
        .field(FieldDescriptor::decimal("price"))
        .field(FieldDescriptor::decimal("size"))
        .field(FieldDescriptor::categorical("side", DictionaryWidth::Narrow))
        .field(FieldDescriptor::timestamp("event_time"))
        .field(FieldDescriptor::timestamp("ingest_time"))
        .build()
        .unwrap()
}

fn trade_executed() -> TradeExecuted {
    TradeExecuted {
        price: dec!(100.25),
        size: dec!(10),
        side: OrderSide::Buy,
        event_time: UnixNanos::new(1),
        ingest_time: UnixNanos::new(2),
    }
}

#[test]
fn custom_record_encodes_decimals_as_strings() {
    let registry = Arc::new(SchemaRegistry::new());
    registry.register(trade_executed_spec());
    let codec = RecordCodec::new(registry);

    let row = codec.encode(&trade_executed()).unwrap();

    assert_eq!(
        row.values(),
        &[
            ColumnValue::Utf8("100.25".into()),
            ColumnValue::Utf8("10".into()),
            ColumnValue::Utf8("BUY".into()),
            ColumnValue::UInt64(1),
            ColumnValue::UInt64(2),
        ]
    );

    let decoded: TradeExecuted = codec.decode_row("TradeExecuted", &row).unwrap();
    assert_eq!(decoded, trade_executed());
}

// =============================================================================
// Variant-bearing orders
// =============================================================================

#[test]
fn trigger_price_is_populated_only_for_stop_orders() {
    let codec = common::builtin_codec();
    let spec = codec.registry().lookup("OrderInitialized").unwrap();
    let trigger_position = spec.position("trigger_price").unwrap();
    assert!(spec.is_variant("trigger_price"));

    let market = common::order_initialized(OrderKind::Market);
    let stop = common::order_initialized(common::stop_market(Price::new(dec!(99.50))));

    let market_row = codec.encode(&market).unwrap();
    let stop_row = codec.encode(&stop).unwrap();
    assert_eq!(market_row[trigger_position], ColumnValue::Null);
    assert_eq!(stop_row[trigger_position], ColumnValue::Utf8("99.50".into()));

    let market_back: OrderInitialized = RecordCodec::decode(&market_row, &spec).unwrap();
    let stop_back: OrderInitialized = RecordCodec::decode(&stop_row, &spec).unwrap();
    assert_eq!(market_back.kind, OrderKind::Market);
    assert_eq!(stop_back, stop);
    let OrderKind::StopMarket { trigger } = stop_back.kind else {
        panic!("expected a stop market order, got {:?}", stop_back.kind);
    };
    assert_eq!(trigger.price.to_string(), "99.50");
}

#[test]
fn stop_order_row_without_trigger_price_is_missing_variant_field() {
    let codec = common::builtin_codec();
    let spec = codec.registry().lookup("OrderInitialized").unwrap();
    let stop = common::order_initialized(common::stop_market(Price::new(dec!(99.50))));

    let mut values = codec.encode(&stop).unwrap().into_values();
    values[spec.position("trigger_price").unwrap()] = ColumnValue::Null;

    let err = RecordCodec::decode::<OrderInitialized>(&EncodedRow::new(values), &spec).unwrap_err();
    assert!(
        matches!(err, CodecError::MissingVariantField { ref field, .. } if field == "trigger_price"),
        "unexpected error: {err}"
    );
    assert!(err.is_row_recoverable());
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn second_registration_wins() {
    let registry = SchemaRegistry::new();
    let first = SchemaSpec::builder("Equity")
        .field(FieldDescriptor::categorical("id", DictionaryWidth::Wide))
        .field(FieldDescriptor::timestamp("ts_event"))
        .field(FieldDescriptor::timestamp("ts_init"))
        .build()
        .unwrap();
    let second = SchemaSpec::builder("Equity")
        .field(FieldDescriptor::categorical("id", DictionaryWidth::Wide))
        .field(FieldDescriptor::text("raw_symbol"))
        .field(FieldDescriptor::decimal("price_increment"))
        .field(FieldDescriptor::timestamp("ts_event"))
        .field(FieldDescriptor::timestamp("ts_init"))
        .build()
        .unwrap();

    assert!(registry.register(first.clone()).is_none());
    let replaced = registry.register(second.clone()).unwrap();

    assert_eq!(*replaced, first);
    let current = registry.lookup("Equity").unwrap();
    assert_eq!(current.fields(), second.fields());
    assert_eq!(
        current.field_names().collect::<Vec<_>>(),
        ["id", "raw_symbol", "price_increment", "ts_event", "ts_init"]
    );
}

#[test]
fn unregistered_kind_fails_without_synthesizing_a_schema() {
    let registry = Arc::new(SchemaRegistry::new());
    let codec = RecordCodec::new(Arc::clone(&registry));

    let err = codec.encode(&trade_executed()).unwrap_err();

    assert!(matches!(err, CodecError::NotRegistered(ref e) if e.type_tag == "TradeExecuted"));
    assert!(!err.is_row_recoverable());
    assert!(registry.is_empty());
}

// =============================================================================
// Null discipline
// =============================================================================

fn strict_order_updated() -> SchemaSpec {
    SchemaSpec::builder("OrderUpdated")
        .field(FieldDescriptor::categorical("client_order_id", DictionaryWidth::Wide))
        .field(FieldDescriptor::decimal("quantity"))
        .field(FieldDescriptor::decimal("price"))
        .field(FieldDescriptor::timestamp("ts_event"))
        .field(FieldDescriptor::timestamp("ts_init"))
        .build()
        .unwrap()
}

#[test]
fn unset_value_in_required_column_fails_encode() {
    let codec = common::builtin_codec();
    codec.registry().register(strict_order_updated());
    let update = OrderUpdated {
        price: None,
        ..common::order_updated()
    };

    let err = codec.encode(&update).unwrap_err();

    assert_eq!(
        err,
        CodecError::UnexpectedNull {
            type_tag: "OrderUpdated".into(),
            field: "price".into()
        }
    );
}

#[test]
fn null_in_required_column_fails_decode() {
    let codec = common::builtin_codec();
    let mut values = codec.encode(&common::quote_tick()).unwrap().into_values();
    values[1] = ColumnValue::Null;

    let err = codec
        .decode_row::<QuoteTick>("QuoteTick", &EncodedRow::new(values))
        .unwrap_err();

    assert!(matches!(err, CodecError::UnexpectedNull { ref field, .. } if field == "bid"));
}

#[test]
fn nullable_columns_carry_null_for_absent_values() {
    let codec = common::builtin_codec();
    let update = OrderUpdated {
        trigger_price: None,
        ..common::order_updated()
    };
    let spec = codec.registry().lookup("OrderUpdated").unwrap();

    let row = codec.encode(&update).unwrap();

    assert_eq!(row[spec.position("trigger_price").unwrap()], ColumnValue::Null);
    assert_eq!(RecordCodec::decode::<OrderUpdated>(&row, &spec).unwrap(), update);
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn configured_override_reorders_columns() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/schema-registry.yaml");
    let config = load_config(Some(path)).unwrap();
    let registry = Arc::new(SchemaRegistry::new());
    schema_registry::config::apply_catalog(&config.catalog, &registry).unwrap();
    let codec = RecordCodec::new(registry);

    let row = codec.encode(&common::quote_tick()).unwrap();

    assert_eq!(row[0], ColumnValue::UInt64(common::TS_EVENT));
    assert_eq!(row[2], ColumnValue::Utf8("EUR/USD.SIM".into()));
    let decoded: QuoteTick = codec.decode_row("QuoteTick", &row).unwrap();
    assert_eq!(decoded, common::quote_tick());
}

#[test]
fn override_dropping_a_required_column_fails_decode() {
    let codec = common::builtin_codec();
    codec.registry().register(
        SchemaSpec::builder("QuoteTick")
            .field(FieldDescriptor::categorical("instrument_id", DictionaryWidth::Wide))
            .field(FieldDescriptor::decimal("bid"))
            .field(FieldDescriptor::decimal("ask"))
            .field(FieldDescriptor::timestamp("ts_event"))
            .field(FieldDescriptor::timestamp("ts_init"))
            .build()
            .unwrap(),
    );

    let row = codec.encode(&common::quote_tick()).unwrap();
    assert_eq!(row.len(), 5);

    let err = codec.decode_row::<QuoteTick>("QuoteTick", &row).unwrap_err();
    assert!(matches!(err, CodecError::MissingColumn { ref field, .. } if field == "bid_size"));
}

#[test]
fn decimal_is_never_placed_in_a_float_column() {
    let codec = common::builtin_codec();
    codec.registry().register(
        SchemaSpec::builder("QuoteTick")
            .field(FieldDescriptor::categorical("instrument_id", DictionaryWidth::Wide))
            .field(FieldDescriptor::float64("bid"))
            .field(FieldDescriptor::timestamp("ts_event"))
            .field(FieldDescriptor::timestamp("ts_init"))
            .build()
            .unwrap(),
    );

    let err = codec.encode(&common::quote_tick()).unwrap_err();

    let CodecError::Policy { source, .. } = err else {
        panic!("expected a policy error, got {err:?}");
    };
    assert!(matches!(source, PolicyError::UnsupportedFieldKind { ref field, .. } if field == "bid"));
}

// =============================================================================
// Row length
// =============================================================================

#[test]
fn decode_rejects_rows_of_the_wrong_length() {
    let spec = trade_executed_spec();
    let mut values = RecordCodec::encode_with(&spec, &trade_executed())
        .unwrap()
        .into_values();
    values.push(ColumnValue::UInt64(3));

    let err = RecordCodec::decode::<TradeExecuted>(&EncodedRow::new(values), &spec).unwrap_err();

    assert_eq!(
        err,
        CodecError::RowSchemaMismatch {
            type_tag: "TradeExecuted".into(),
            expected: 5,
            actual: 6
        }
    );
}
