//! Built-in record layouts.
//!
//! Every built-in record kind has one layout here. Nothing is registered
//! implicitly: call [`register_builtin_schemas`] at startup, then apply any
//! overrides on top.
//!
//! Prices, quantities, offsets and money amounts are decimal strings
//! throughout. Only true floating-point values (`avg_px_open`,
//! `avg_px_close`, `realized_return`) use `float64`.

use crate::policy::DictionaryWidth::{Medium, Narrow, Wide};
use crate::schema::{FieldDescriptor as F, SchemaSpec, SchemaValidationError};

use super::SchemaRegistry;

/// Variant columns of `OrderInitialized`, populated by subtype.
pub const ORDER_VARIANT_FIELDS: [&str; 8] = [
    "price",
    "trigger_price",
    "trigger_type",
    "limit_offset",
    "trailing_offset",
    "trailing_offset_type",
    "expire_time_ns",
    "display_qty",
];

/// Variant columns of `AccountState`, populated for margin accounts.
pub const MARGIN_VARIANT_FIELDS: [&str; 4] = [
    "margin_initial",
    "margin_maintenance",
    "margin_currency",
    "margin_instrument_id",
];

/// Every built-in layout, validated.
///
/// # Errors
///
/// Returns the first [`SchemaValidationError`]; the built-in table is
/// covered by tests, so an error here means the table itself was broken.
pub fn builtin_schemas() -> Result<Vec<SchemaSpec>, SchemaValidationError> {
    let mut schemas = vec![
        quote_tick()?,
        trade_tick()?,
        ticker()?,
        bar()?,
        binance_bar()?,
        order_book_delta()?,
        instrument_close()?,
        instrument_status_update()?,
        venue_status_update()?,
        component_state_changed()?,
        trading_state_changed()?,
        account_state()?,
        order_initialized()?,
        order_denied()?,
        order_submitted()?,
    ];
    for tag in [
        "OrderAccepted",
        "OrderPendingCancel",
        "OrderPendingUpdate",
        "OrderCanceled",
        "OrderExpired",
        "OrderTriggered",
    ] {
        schemas.push(order_status(tag)?);
    }
    schemas.extend([
        order_rejected()?,
        order_modify_rejected()?,
        order_cancel_rejected()?,
        order_updated()?,
        order_filled()?,
        position_opened()?,
        position_changed()?,
        position_closed()?,
        equity()?,
        currency_pair()?,
        crypto_perpetual()?,
        crypto_future()?,
        futures_contract()?,
        options_contract()?,
        betting_instrument()?,
    ]);
    Ok(schemas)
}

/// Register every built-in layout into `registry`.
///
/// Returns the number of layouts registered.
///
/// # Errors
///
/// See [`builtin_schemas`]. Nothing is registered on error.
pub fn register_builtin_schemas(registry: &SchemaRegistry) -> Result<usize, SchemaValidationError> {
    let schemas = builtin_schemas()?;
    let count = schemas.len();
    for spec in schemas {
        registry.register(spec);
    }
    tracing::info!(count, "Built-in schemas registered");
    Ok(count)
}

fn timestamps() -> [F; 2] {
    [F::timestamp("ts_event"), F::timestamp("ts_init")]
}

// ============================================================================
// Market Data
// ============================================================================

fn quote_tick() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("QuoteTick")
        .field(F::categorical("instrument_id", Wide))
        .field(F::decimal("bid"))
        .field(F::decimal("bid_size"))
        .field(F::decimal("ask"))
        .field(F::decimal("ask_size"))
        .fields(timestamps())
        .build()
}

fn trade_tick() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("TradeTick")
        .field(F::categorical("instrument_id", Wide))
        .field(F::decimal("price"))
        .field(F::decimal("size"))
        .field(F::categorical("aggressor_side", Narrow))
        .field(F::text("trade_id"))
        .fields(timestamps())
        .build()
}

fn ticker() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("Ticker")
        .field(F::categorical("instrument_id", Wide))
        .fields(timestamps())
        .build()
}

fn ohlcv() -> [F; 7] {
    [
        F::categorical("bar_type", Medium),
        F::categorical("instrument_id", Wide),
        F::decimal("open"),
        F::decimal("high"),
        F::decimal("low"),
        F::decimal("close"),
        F::decimal("volume"),
    ]
}

fn bar() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("Bar")
        .fields(ohlcv())
        .fields(timestamps())
        .build()
}

fn binance_bar() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("BinanceBar")
        .fields(ohlcv())
        .field(F::decimal("quote_volume"))
        .field(F::uint64("count"))
        .field(F::decimal("taker_buy_base_volume"))
        .field(F::decimal("taker_buy_quote_volume"))
        .fields(timestamps())
        .build()
}

fn order_book_delta() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("OrderBookDelta")
        .field(F::categorical("instrument_id", Wide))
        .field(F::uint8("action"))
        .field(F::uint8("side"))
        .field(F::decimal("price"))
        .field(F::decimal("size"))
        .field(F::uint64("order_id"))
        .field(F::uint8("flags"))
        .field(F::uint64("sequence"))
        .fields(timestamps())
        .build()
}

fn instrument_close() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("InstrumentClose")
        .field(F::categorical("instrument_id", Wide))
        .field(F::categorical("close_type", Narrow))
        .field(F::decimal("close_price"))
        .fields(timestamps())
        .build()
}

fn instrument_status_update() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("InstrumentStatusUpdate")
        .field(F::categorical("instrument_id", Wide))
        .field(F::categorical("status", Narrow))
        .fields(timestamps())
        .build()
}

fn venue_status_update() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("VenueStatusUpdate")
        .field(F::categorical("venue", Medium))
        .field(F::categorical("status", Narrow))
        .fields(timestamps())
        .build()
}

// ============================================================================
// System Events
// ============================================================================

fn component_state_changed() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("ComponentStateChanged")
        .field(F::categorical("trader_id", Medium))
        .field(F::categorical("component_id", Medium))
        .field(F::categorical("component_type", Narrow))
        .field(F::text("state"))
        .field(F::binary("config"))
        .field(F::text("event_id"))
        .fields(timestamps())
        .build()
}

fn trading_state_changed() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("TradingStateChanged")
        .field(F::categorical("trader_id", Medium))
        .field(F::text("state"))
        .field(F::binary("config"))
        .field(F::text("event_id"))
        .fields(timestamps())
        .build()
}

// ============================================================================
// Account
// ============================================================================

fn account_state() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("AccountState")
        .field(F::categorical("account_id", Medium))
        .field(F::categorical("account_type", Narrow))
        .field(F::categorical("base_currency", Medium).nullable())
        .field(F::decimal("balance_total"))
        .field(F::decimal("balance_locked"))
        .field(F::decimal("balance_free"))
        .field(F::categorical("balance_currency", Medium))
        .variant_field(F::decimal("margin_initial").nullable())
        .variant_field(F::decimal("margin_maintenance").nullable())
        .variant_field(F::categorical("margin_currency", Medium).nullable())
        .variant_field(F::categorical("margin_instrument_id", Wide).nullable())
        .field(F::boolean("reported"))
        .field(F::binary("info"))
        .field(F::text("event_id"))
        .fields(timestamps())
        .build()
}

// ============================================================================
// Order Events
// ============================================================================

/// Identity columns shared by order events.
fn order_ids(with_account: bool) -> Vec<F> {
    let mut fields = vec![
        F::categorical("trader_id", Medium),
        F::categorical("strategy_id", Medium),
    ];
    if with_account {
        fields.push(F::categorical("account_id", Medium));
    }
    fields.push(F::categorical("instrument_id", Wide));
    fields.push(F::text("client_order_id"));
    fields
}

fn order_initialized() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("OrderInitialized")
        .fields(order_ids(false))
        .field(F::categorical("order_side", Narrow))
        .field(F::categorical("order_type", Narrow))
        .field(F::decimal("quantity"))
        .field(F::categorical("time_in_force", Narrow))
        .field(F::boolean("post_only"))
        .field(F::boolean("reduce_only"))
        .variant_field(F::decimal("price").nullable())
        .variant_field(F::decimal("trigger_price").nullable())
        .variant_field(F::categorical("trigger_type", Narrow).nullable())
        .variant_field(F::decimal("limit_offset").nullable())
        .variant_field(F::decimal("trailing_offset").nullable())
        .variant_field(F::categorical("trailing_offset_type", Narrow).nullable())
        .variant_field(F::uint64("expire_time_ns").nullable())
        .variant_field(F::decimal("display_qty").nullable())
        .field(F::categorical("emulation_trigger", Narrow).nullable())
        .field(F::categorical("contingency_type", Narrow).nullable())
        .field(F::text("order_list_id").nullable())
        .field(F::binary("linked_order_ids").nullable())
        .field(F::text("parent_order_id").nullable())
        .field(F::categorical("exec_algorithm_id", Medium).nullable())
        .field(F::binary("exec_algorithm_params").nullable())
        .field(F::text("exec_spawn_id").nullable())
        .field(F::text("tags").nullable())
        .field(F::text("event_id"))
        .fields(timestamps())
        .field(F::boolean("reconciliation"))
        .build()
}

fn order_denied() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("OrderDenied")
        .fields(order_ids(false))
        .field(F::categorical("reason", Medium))
        .field(F::text("event_id"))
        .fields(timestamps())
        .build()
}

fn order_submitted() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("OrderSubmitted")
        .fields(order_ids(true))
        .field(F::text("event_id"))
        .fields(timestamps())
        .build()
}

/// Accepted, pending, canceled, expired and triggered share one layout.
fn order_status(type_tag: &str) -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder(type_tag)
        .fields(order_ids(true))
        .field(F::text("venue_order_id").nullable())
        .field(F::text("event_id"))
        .fields(timestamps())
        .field(F::boolean("reconciliation"))
        .build()
}

fn order_rejected() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("OrderRejected")
        .fields(order_ids(true))
        .field(F::categorical("reason", Medium))
        .field(F::text("event_id"))
        .fields(timestamps())
        .field(F::boolean("reconciliation"))
        .build()
}

fn order_modify_rejected() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("OrderModifyRejected")
        .fields(order_ids(true))
        .field(F::text("venue_order_id").nullable())
        .field(F::categorical("reason", Medium))
        .field(F::text("event_id"))
        .fields(timestamps())
        .field(F::boolean("reconciliation"))
        .build()
}

fn order_cancel_rejected() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("OrderCancelRejected")
        .fields(order_ids(true))
        .field(F::text("venue_order_id").nullable())
        .field(F::text("reason"))
        .field(F::text("event_id"))
        .fields(timestamps())
        .field(F::boolean("reconciliation"))
        .build()
}

fn order_updated() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("OrderUpdated")
        .fields(order_ids(true))
        .field(F::text("venue_order_id").nullable())
        .field(F::decimal("price").nullable())
        .field(F::decimal("quantity"))
        .field(F::decimal("trigger_price").nullable())
        .field(F::text("event_id"))
        .fields(timestamps())
        .field(F::boolean("reconciliation"))
        .build()
}

fn order_filled() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("OrderFilled")
        .fields(order_ids(true))
        .field(F::text("venue_order_id"))
        .field(F::text("trade_id"))
        .field(F::text("position_id").nullable())
        .field(F::categorical("order_side", Narrow))
        .field(F::categorical("order_type", Narrow))
        .field(F::decimal("last_qty"))
        .field(F::decimal("last_px"))
        .field(F::categorical("currency", Medium))
        .field(F::text("commission").nullable())
        .field(F::categorical("liquidity_side", Narrow))
        .field(F::text("event_id"))
        .fields(timestamps())
        .field(F::binary("info"))
        .field(F::boolean("reconciliation"))
        .build()
}

// ============================================================================
// Position Events
// ============================================================================

/// Position state columns shared by position events.
fn position_state() -> Vec<F> {
    vec![
        F::categorical("trader_id", Medium),
        F::categorical("strategy_id", Medium),
        F::categorical("instrument_id", Wide),
        F::categorical("account_id", Medium),
        F::text("position_id"),
        F::text("opening_order_id"),
        F::categorical("entry", Narrow),
        F::categorical("side", Narrow),
        F::decimal("signed_qty"),
        F::decimal("quantity"),
        F::decimal("peak_qty"),
        F::decimal("last_qty"),
        F::decimal("last_px"),
        F::categorical("currency", Medium),
        F::float64("avg_px_open"),
        F::text("realized_pnl"),
    ]
}

fn position_opened() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("PositionOpened")
        .fields(position_state())
        .field(F::text("event_id"))
        .fields(timestamps())
        .build()
}

fn position_changed() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("PositionChanged")
        .fields(position_state())
        .field(F::float64("avg_px_close").nullable())
        .field(F::float64("realized_return"))
        .field(F::text("unrealized_pnl"))
        .field(F::text("event_id"))
        .field(F::timestamp("ts_opened"))
        .fields(timestamps())
        .build()
}

fn position_closed() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("PositionClosed")
        .fields(position_state())
        .field(F::text("closing_order_id"))
        .field(F::float64("avg_px_close"))
        .field(F::float64("realized_return"))
        .field(F::text("event_id"))
        .field(F::timestamp("ts_opened"))
        .field(F::timestamp("ts_closed"))
        .field(F::uint64("duration_ns"))
        .fields(timestamps())
        .build()
}

// ============================================================================
// Instruments
// ============================================================================

fn instrument_identity() -> [F; 2] {
    [F::categorical("id", Wide), F::text("raw_symbol")]
}

fn precisions() -> [F; 4] {
    [
        F::uint8("price_precision"),
        F::uint8("size_precision"),
        F::categorical("price_increment", Medium),
        F::categorical("size_increment", Medium),
    ]
}

fn trading_limits() -> [F; 6] {
    [
        F::categorical("max_quantity", Medium).nullable(),
        F::categorical("min_quantity", Medium).nullable(),
        F::categorical("max_notional", Medium).nullable(),
        F::categorical("min_notional", Medium).nullable(),
        F::categorical("max_price", Medium).nullable(),
        F::categorical("min_price", Medium).nullable(),
    ]
}

fn fee_schedule() -> [F; 4] {
    [
        F::decimal("margin_init"),
        F::decimal("margin_maint"),
        F::decimal("maker_fee"),
        F::decimal("taker_fee"),
    ]
}

fn equity() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("Equity")
        .fields(instrument_identity())
        .field(F::categorical("currency", Medium))
        .fields(precisions())
        .field(F::categorical("multiplier", Medium))
        .field(F::categorical("lot_size", Medium).nullable())
        .field(F::text("isin").nullable())
        .fields(fee_schedule())
        .fields(timestamps())
        .build()
}

fn currency_pair() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("CurrencyPair")
        .fields(instrument_identity())
        .field(F::categorical("base_currency", Medium))
        .field(F::categorical("quote_currency", Medium))
        .fields(precisions())
        .field(F::categorical("lot_size", Medium).nullable())
        .fields(trading_limits())
        .fields(fee_schedule())
        .field(F::binary("info"))
        .fields(timestamps())
        .build()
}

fn crypto_perpetual() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("CryptoPerpetual")
        .fields(instrument_identity())
        .field(F::categorical("base_currency", Medium))
        .field(F::categorical("quote_currency", Medium))
        .field(F::categorical("settlement_currency", Medium))
        .field(F::boolean("is_inverse"))
        .fields(precisions())
        .fields(trading_limits())
        .fields(fee_schedule())
        .field(F::binary("info"))
        .fields(timestamps())
        .build()
}

fn crypto_future() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("CryptoFuture")
        .fields(instrument_identity())
        .field(F::categorical("underlying", Medium))
        .field(F::categorical("quote_currency", Medium))
        .field(F::categorical("settlement_currency", Medium))
        .field(F::categorical("expiry_date", Medium))
        .fields(precisions())
        .fields(trading_limits())
        .fields(fee_schedule())
        .field(F::binary("info"))
        .fields(timestamps())
        .build()
}

fn futures_contract() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("FuturesContract")
        .fields(instrument_identity())
        .field(F::categorical("underlying", Medium))
        .field(F::categorical("asset_class", Narrow))
        .field(F::categorical("currency", Medium))
        .fields(precisions())
        .field(F::categorical("multiplier", Medium))
        .field(F::categorical("lot_size", Medium).nullable())
        .field(F::categorical("expiry_date", Medium))
        .fields(timestamps())
        .build()
}

fn options_contract() -> Result<SchemaSpec, SchemaValidationError> {
    SchemaSpec::builder("OptionsContract")
        .fields(instrument_identity())
        .field(F::categorical("underlying", Medium))
        .field(F::categorical("asset_class", Narrow))
        .field(F::categorical("currency", Medium))
        .fields(precisions())
        .field(F::categorical("multiplier", Medium))
        .field(F::categorical("lot_size", Medium).nullable())
        .field(F::categorical("expiry_date", Wide))
        .field(F::categorical("strike_price", Wide))
        .field(F::categorical("kind", Narrow))
        .fields(timestamps())
        .build()
}

/// Betting selections keep the venue's free-form hierarchy as plain text.
fn betting_instrument() -> Result<SchemaSpec, SchemaValidationError> {
    let text_columns = [
        "venue_name",
        "currency",
        "id",
        "event_type_id",
        "event_type_name",
        "competition_id",
        "competition_name",
        "event_id",
        "event_name",
        "event_country_code",
        "event_open_date",
        "betting_type",
        "market_id",
        "market_name",
        "market_start_time",
        "market_type",
        "selection_id",
        "selection_name",
    ];
    SchemaSpec::builder("BettingInstrument")
        .fields(text_columns.map(F::text))
        .field(F::decimal("selection_handicap"))
        .fields(timestamps())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PhysicalType;
    use std::collections::HashSet;

    #[test]
    fn every_builtin_validates() {
        let schemas = builtin_schemas().unwrap();
        assert_eq!(schemas.len(), 36);
    }

    #[test]
    fn builtin_tags_are_unique() {
        let schemas = builtin_schemas().unwrap();
        let tags: HashSet<_> = schemas.iter().map(SchemaSpec::type_tag).collect();
        assert_eq!(tags.len(), schemas.len());
    }

    #[test]
    fn every_builtin_carries_both_timestamps() {
        for spec in builtin_schemas().unwrap() {
            for name in ["ts_event", "ts_init"] {
                let field = spec
                    .field(name)
                    .unwrap_or_else(|| panic!("{} lacks {name}", spec.type_tag()));
                assert_eq!(field.physical_type(), PhysicalType::UInt64);
                assert!(!field.is_nullable());
            }
        }
    }

    #[test]
    fn no_builtin_stores_prices_as_float() {
        let decimal_columns = ["price", "quantity", "last_px", "last_qty", "signed_qty"];
        for spec in builtin_schemas().unwrap() {
            for name in decimal_columns {
                if let Some(field) = spec.field(name) {
                    assert_ne!(
                        field.physical_type(),
                        PhysicalType::Float64,
                        "{}.{name}",
                        spec.type_tag()
                    );
                }
            }
        }
    }

    #[test]
    fn order_initialized_variants_are_declared() {
        let spec = order_initialized().unwrap();
        let expected: std::collections::BTreeSet<String> =
            ORDER_VARIANT_FIELDS.iter().map(|s| (*s).to_owned()).collect();
        assert_eq!(spec.variant_fields(), &expected);
    }

    #[test]
    fn order_rejected_has_no_venue_order_id() {
        assert!(order_rejected().unwrap().field("venue_order_id").is_none());
        assert!(order_modify_rejected().unwrap().field("venue_order_id").is_some());
    }

    #[test]
    fn register_builtins_populates_registry() {
        let registry = SchemaRegistry::new();
        let count = register_builtin_schemas(&registry).unwrap();
        assert_eq!(count, registry.len());
        assert!(registry.contains("OrderInitialized"));
        assert!(registry.contains("OptionsContract"));
        assert!(registry.contains("BettingInstrument"));
    }

    #[test]
    fn binance_bar_extends_the_bar_layout() {
        let plain = bar().unwrap();
        let binance = binance_bar().unwrap();
        for field in plain.fields() {
            assert_eq!(binance.field(field.name()), Some(field), "{}", field.name());
        }
        assert_eq!(binance.len(), plain.len() + 4);
    }

    #[test]
    fn system_event_dictionary_widths() {
        use crate::policy::DictionaryWidth;
        let spec = component_state_changed().unwrap();
        let width = |name: &str| spec.field(name).unwrap().physical_type().dictionary_width();
        assert_eq!(width("trader_id"), Some(DictionaryWidth::Medium));
        assert_eq!(width("component_type"), Some(DictionaryWidth::Narrow));
        assert_eq!(width("state"), None);
    }
}
