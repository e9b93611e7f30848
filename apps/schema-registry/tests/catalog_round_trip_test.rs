//! Every built-in record kind survives encode and decode unchanged.

#![allow(clippy::unwrap_used)]

mod common;

use std::collections::BTreeSet;

use proptest::prelude::*;
use rust_decimal::Decimal;
use test_case::test_case;

use schema_registry::domain::shared::{
    AccountType, ClientOrderId, Price, Quantity, TimeInForce,
};
use schema_registry::domain::{
    AccountState, OrderInitialized, OrderKind, OrderStatusKind, QuoteTick, RejectionKind,
};
use schema_registry::policy::ColumnValue;
use schema_registry::registry::catalog::builtin_schemas;
use schema_registry::{CodecError, ColumnarRecord, EncodedRow, Record, RecordCodec};

#[test]
fn fixtures_cover_the_whole_catalog() {
    let catalog: BTreeSet<String> = builtin_schemas()
        .unwrap()
        .iter()
        .map(|spec| spec.type_tag().to_string())
        .collect();
    let fixtures: BTreeSet<String> = common::every_builtin_record()
        .iter()
        .map(|record| record.type_tag().to_string())
        .collect();

    assert_eq!(catalog, fixtures);
}

#[test]
fn every_builtin_record_round_trips() {
    let codec = common::builtin_codec();

    for record in common::every_builtin_record() {
        let tag = record.type_tag().to_string();
        let spec = codec.registry().lookup(&tag).unwrap();

        let row = codec.encode(&record).unwrap();
        assert_eq!(row.len(), spec.len(), "row length for {tag}");

        let decoded: Record = RecordCodec::decode(&row, &spec).unwrap();
        assert_eq!(decoded, record, "round trip of {tag}");
    }
}

#[test]
fn every_order_kind_round_trips() {
    let codec = common::builtin_codec();

    for order in common::every_order_kind() {
        let row = codec.encode(&order).unwrap();
        let decoded: OrderInitialized = codec.decode_row("OrderInitialized", &row).unwrap();
        assert_eq!(decoded, order, "round trip of {}", order.order_type());
    }
}

#[test]
fn linked_order_ids_keep_commas_inside_an_id() {
    let codec = common::builtin_codec();
    let mut order = common::order_initialized(OrderKind::Market);
    order.linked_order_ids = vec![
        ClientOrderId::try_new("O-1,LEG-A").unwrap(),
        ClientOrderId::try_new("O-2").unwrap(),
    ];

    let row = codec.encode(&order).unwrap();
    let back: OrderInitialized = codec.decode_row("OrderInitialized", &row).unwrap();

    assert_eq!(back.linked_order_ids.len(), 2);
    assert_eq!(back, order);
}

#[test]
fn empty_linked_order_ids_are_stored_as_null() {
    let codec = common::builtin_codec();
    let spec = codec.registry().lookup("OrderInitialized").unwrap();
    let order = common::order_initialized(OrderKind::Market);

    let row = codec.encode(&order).unwrap();

    assert!(row[spec.position("linked_order_ids").unwrap()].is_null());
    let back: OrderInitialized = RecordCodec::decode(&row, &spec).unwrap();
    assert!(back.linked_order_ids.is_empty());
}

#[test]
fn unpopulated_variant_fields_are_null() {
    let codec = common::builtin_codec();
    let spec = codec.registry().lookup("OrderInitialized").unwrap();

    for order in common::every_order_kind() {
        let parts = order.kind.parts();
        let row = codec.encode(&order).unwrap();
        let null_at = |field: &str| row[spec.position(field).unwrap()].is_null();

        assert_eq!(null_at("price"), parts.price.is_none());
        assert_eq!(null_at("trigger_price"), parts.trigger_price.is_none());
        assert_eq!(null_at("trailing_offset"), parts.trailing_offset.is_none());
        assert_eq!(null_at("display_qty"), parts.display_qty.is_none());
        assert_eq!(null_at("expire_time_ns"), order.expire_time.is_none());
    }
}

#[test]
fn gtd_order_without_expiry_is_missing_variant_field() {
    let codec = common::builtin_codec();
    let spec = codec.registry().lookup("OrderInitialized").unwrap();
    let mut order = common::order_initialized(schema_registry::domain::OrderKind::Market);
    order.time_in_force = TimeInForce::Gtd;
    order.expire_time = Some(schema_registry::domain::shared::UnixNanos::new(common::TS_INIT));

    let mut values = codec.encode(&order).unwrap().into_values();
    values[spec.position("expire_time_ns").unwrap()] = ColumnValue::Null;

    let err = RecordCodec::decode::<OrderInitialized>(&EncodedRow::new(values), &spec).unwrap_err();
    assert!(matches!(
        err,
        CodecError::MissingVariantField { ref field, .. } if field == "expire_time_ns"
    ));
}

#[test_case(AccountType::Cash ; "cash account has no margin")]
#[test_case(AccountType::Margin ; "margin account carries margin")]
#[test_case(AccountType::Betting ; "betting account has no margin")]
fn account_state_round_trips(account_type: AccountType) {
    let codec = common::builtin_codec();
    let state = common::account_state(account_type);

    let row = codec.encode(&state).unwrap();
    let decoded: AccountState = codec.decode_row("AccountState", &row).unwrap();

    assert_eq!(decoded, state);
    assert_eq!(decoded.margin.is_some(), account_type == AccountType::Margin);
}

#[test]
fn partial_margin_columns_are_rejected() {
    let codec = common::builtin_codec();
    let spec = codec.registry().lookup("AccountState").unwrap();
    let mut values = codec
        .encode(&common::account_state(AccountType::Margin))
        .unwrap()
        .into_values();
    values[spec.position("margin_currency").unwrap()] = ColumnValue::Null;

    let err = RecordCodec::decode::<AccountState>(&EncodedRow::new(values), &spec).unwrap_err();

    assert!(matches!(
        err,
        CodecError::MissingVariantField { ref field, .. } if field == "margin_currency"
    ));
}

#[test_case(OrderStatusKind::Accepted, "OrderAccepted")]
#[test_case(OrderStatusKind::PendingCancel, "OrderPendingCancel")]
#[test_case(OrderStatusKind::PendingUpdate, "OrderPendingUpdate")]
#[test_case(OrderStatusKind::Canceled, "OrderCanceled")]
#[test_case(OrderStatusKind::Expired, "OrderExpired")]
#[test_case(OrderStatusKind::Triggered, "OrderTriggered")]
fn status_events_decode_to_their_own_kind(kind: OrderStatusKind, tag: &str) {
    let codec = common::builtin_codec();
    let event = common::order_status(kind);
    assert_eq!(event.type_tag(), tag);

    let row = codec.encode(&event).unwrap();
    let decoded: Record = codec.decode_row(tag, &row).unwrap();

    assert_eq!(decoded, Record::from(event));
}

#[test_case(RejectionKind::Order, "OrderRejected")]
#[test_case(RejectionKind::Modify, "OrderModifyRejected")]
#[test_case(RejectionKind::Cancel, "OrderCancelRejected")]
fn rejections_decode_to_their_own_kind(kind: RejectionKind, tag: &str) {
    let codec = common::builtin_codec();
    let event = common::order_rejection(kind);

    let row = codec.encode(&event).unwrap();
    let decoded: Record = codec.decode_row(tag, &row).unwrap();

    assert_eq!(decoded.type_tag(), tag);
    assert_eq!(decoded, Record::from(event));
}

#[test]
fn unknown_tag_is_not_a_record_kind() {
    let codec = common::builtin_codec();
    let quote = common::quote_tick();
    let row = codec.encode(&quote).unwrap();
    let spec = schema_registry::SchemaSpec::new(
        "QuoteTickV2",
        codec.registry().lookup("QuoteTick").unwrap().fields().to_vec(),
        Vec::<String>::new(),
    )
    .unwrap();

    let err = RecordCodec::decode::<Record>(&row, &spec).unwrap_err();

    assert_eq!(
        err,
        CodecError::UnknownRecordKind {
            type_tag: "QuoteTickV2".into()
        }
    );
}

fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    (1_i64..1_000_000_000_000, 0_u32..=9).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

proptest! {
    #[test]
    fn decimals_keep_value_and_scale(bid in decimal_strategy(), size in 1_u64..10_000_000) {
        let codec = common::builtin_codec();
        let quote = QuoteTick {
            bid: Price::new(bid),
            bid_size: Quantity::from_u64(size),
            ..common::quote_tick()
        };

        let row = codec.encode(&quote).unwrap();
        prop_assert_eq!(&row[1], &ColumnValue::Utf8(bid.to_string()));

        let decoded: QuoteTick = codec.decode_row("QuoteTick", &row).unwrap();
        prop_assert_eq!(decoded.bid.value().scale(), bid.scale());
        prop_assert_eq!(decoded, quote);
    }
}
