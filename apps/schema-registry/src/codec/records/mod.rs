//! [`ColumnarRecord`](super::ColumnarRecord) implementations for the
//! built-in record kinds.
//!
//! Prices, quantities and offsets are handed to the policy as decimals,
//! identifiers and enum tokens as text, timestamps as nanoseconds, and money
//! as its `"<amount> <currency>"` string.

mod account;
mod instruments;
mod market_data;
mod orders;
mod positions;
mod system;

use std::fmt::Display;

use crate::domain::shared::{Price, Quantity, UnixNanos};
use crate::policy::FieldValue;

fn timestamp(value: UnixNanos) -> FieldValue {
    FieldValue::Timestamp(value.as_u64())
}

fn opt_timestamp(value: Option<UnixNanos>) -> FieldValue {
    value.map_or(FieldValue::Null, timestamp)
}

fn price(value: Price) -> FieldValue {
    FieldValue::Decimal(value.value())
}

fn opt_price(value: Option<Price>) -> FieldValue {
    value.map_or(FieldValue::Null, price)
}

fn quantity(value: Quantity) -> FieldValue {
    FieldValue::Decimal(value.amount())
}

fn opt_quantity(value: Option<Quantity>) -> FieldValue {
    value.map_or(FieldValue::Null, quantity)
}

fn opt_text<T: Display>(value: Option<T>) -> FieldValue {
    value.map_or(FieldValue::Null, FieldValue::text)
}
