//! Sample records shared by the integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

use schema_registry::domain::shared::{
    AccountId, AccountType, AggressorSide, AssetClass, BarType, BookAction, ClientOrderId,
    ComponentId, ComponentState, ContingencyType, Currency, EventId, InstrumentCloseType,
    InstrumentId, LiquiditySide, MarketStatus, Money, OptionKind, OrderListId, OrderSide,
    OrderType, PositionId, PositionSide, Price, Quantity, StrategyId, TimeInForce, TradeId,
    TraderId, TradingState, TrailingOffsetType, TriggerType, UnixNanos, Venue, VenueOrderId,
};
use schema_registry::domain::{
    AccountBalance, AccountState, Bar, BettingInstrument, BinanceBar, ComponentStateChanged,
    CryptoFuture, CryptoPerpetual, CurrencyPair, Equity, FeeSchedule, FuturesContract,
    InstrumentClose, InstrumentCommon, InstrumentStatusUpdate, MarginBalance, OptionsContract,
    OrderBookDelta, OrderDenied, OrderEventHeader, OrderFilled, OrderInitialized, OrderKind,
    OrderRejection, OrderStatusChanged, OrderStatusKind, OrderSubmitted, OrderUpdated,
    PositionChanged, PositionClosed, PositionOpened, PositionSnapshot, QuoteTick, RejectionKind,
    Ticker, TradeTick, TradingLimits, TradingStateChanged, TrailingOffset, Trigger,
    VenueStatusUpdate,
};
use schema_registry::registry::catalog::register_builtin_schemas;
use schema_registry::{Record, RecordCodec, SchemaRegistry};

pub const TS_EVENT: u64 = 1_700_000_000_000_000_000;
pub const TS_INIT: u64 = 1_700_000_000_000_000_500;

/// Codec over a private registry holding the built-in catalog.
pub fn builtin_codec() -> RecordCodec {
    let registry = Arc::new(SchemaRegistry::new());
    register_builtin_schemas(&registry).unwrap();
    RecordCodec::new(registry)
}

fn instrument() -> InstrumentId {
    InstrumentId::try_new("AAPL.XNAS").unwrap()
}

fn usd() -> Currency {
    Currency::try_new("USD").unwrap()
}

pub fn quote_tick() -> QuoteTick {
    QuoteTick {
        instrument_id: InstrumentId::try_new("EUR/USD.SIM").unwrap(),
        bid: Price::new(dec!(1.10000)),
        ask: Price::new(dec!(1.10002)),
        bid_size: Quantity::from_u64(1_000_000),
        ask_size: Quantity::from_u64(750_000),
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

pub fn trade_tick() -> TradeTick {
    TradeTick {
        instrument_id: instrument(),
        price: Price::new(dec!(189.50)),
        size: Quantity::from_u64(300),
        aggressor_side: AggressorSide::Buyer,
        trade_id: TradeId::try_new("T-000123").unwrap(),
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

pub fn bar() -> Bar {
    Bar {
        bar_type: BarType::try_new("AAPL.XNAS-1-MINUTE-LAST-EXTERNAL").unwrap(),
        instrument_id: instrument(),
        open: Price::new(dec!(189.10)),
        high: Price::new(dec!(189.95)),
        low: Price::new(dec!(188.70)),
        close: Price::new(dec!(189.50)),
        volume: Quantity::from_u64(125_000),
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

pub fn ticker() -> Ticker {
    Ticker {
        instrument_id: instrument(),
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

pub fn binance_bar() -> BinanceBar {
    BinanceBar {
        bar: Bar {
            bar_type: BarType::try_new("BTCUSDT.BINANCE-1-MINUTE-LAST-EXTERNAL").unwrap(),
            instrument_id: InstrumentId::try_new("BTCUSDT.BINANCE").unwrap(),
            open: Price::new(dec!(42150.10)),
            high: Price::new(dec!(42188.00)),
            low: Price::new(dec!(42120.55)),
            close: Price::new(dec!(42170.00)),
            volume: Quantity::new(dec!(12.345)).unwrap(),
            ts_event: UnixNanos::new(TS_EVENT),
            ts_init: UnixNanos::new(TS_INIT),
        },
        quote_volume: Quantity::new(dec!(520611.27)).unwrap(),
        count: 1_842,
        taker_buy_base_volume: Quantity::new(dec!(6.010)).unwrap(),
        taker_buy_quote_volume: Quantity::new(dec!(253455.05)).unwrap(),
    }
}

pub fn order_book_delta() -> OrderBookDelta {
    OrderBookDelta {
        instrument_id: instrument(),
        action: BookAction::Update,
        side: OrderSide::Sell,
        price: Price::new(dec!(189.52)),
        size: Quantity::from_u64(200),
        order_id: 88_001,
        flags: 128,
        sequence: 42,
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

pub fn instrument_close() -> InstrumentClose {
    InstrumentClose {
        instrument_id: instrument(),
        close_price: Price::new(dec!(190.01)),
        close_type: InstrumentCloseType::EndOfSession,
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

pub fn instrument_status_update() -> InstrumentStatusUpdate {
    InstrumentStatusUpdate {
        instrument_id: instrument(),
        status: MarketStatus::Halt,
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

pub fn venue_status_update() -> VenueStatusUpdate {
    VenueStatusUpdate {
        venue: Venue::try_new("XNAS").unwrap(),
        status: MarketStatus::PreOpen,
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

pub fn component_state_changed() -> ComponentStateChanged {
    ComponentStateChanged {
        trader_id: TraderId::try_new("TRADER-001").unwrap(),
        component_id: ComponentId::try_new("EMA-CROSS-001").unwrap(),
        component_type: "Strategy".to_string(),
        state: ComponentState::Running,
        config: BTreeMap::from([("fast_ema_period".to_string(), "10".to_string())]),
        event_id: EventId::new(Uuid::from_u128(0x6f1c_2a4e_8d0b_4c2a_9e57_0c8f_3b1d_7a64)),
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

pub fn trading_state_changed() -> TradingStateChanged {
    TradingStateChanged {
        trader_id: TraderId::try_new("TRADER-001").unwrap(),
        state: TradingState::Reducing,
        config: BTreeMap::new(),
        event_id: EventId::new(Uuid::from_u128(0x6f1c_2a4e_8d0b_4c2a_9e57_0c8f_3b1d_7a65)),
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

pub fn account_state(account_type: AccountType) -> AccountState {
    let margin = (account_type == AccountType::Margin).then(|| MarginBalance {
        initial: dec!(5000.00),
        maintenance: dec!(2500.00),
        currency: usd(),
        instrument_id: instrument(),
    });
    AccountState {
        account_id: AccountId::try_new("SIM-001").unwrap(),
        account_type,
        base_currency: Some(usd()),
        balance: AccountBalance {
            total: dec!(100000.00),
            locked: dec!(5000.00),
            free: dec!(95000.00),
            currency: usd(),
        },
        margin,
        reported: true,
        info: BTreeMap::from([("venue".to_string(), "SIM".to_string())]),
        event_id: EventId::new(Uuid::from_u128(0x6f1c_2a4e_8d0b_4c2a_9e57_0c8f_3b1d_7a61)),
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

pub fn header() -> OrderEventHeader {
    OrderEventHeader {
        trader_id: TraderId::try_new("TRADER-001").unwrap(),
        strategy_id: StrategyId::try_new("EMA-CROSS-001").unwrap(),
        instrument_id: instrument(),
        client_order_id: ClientOrderId::try_new("O-20240101-001").unwrap(),
        event_id: EventId::new(Uuid::from_u128(0x6f1c_2a4e_8d0b_4c2a_9e57_0c8f_3b1d_7a62)),
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

pub fn order_initialized(kind: OrderKind) -> OrderInitialized {
    OrderInitialized {
        header: header(),
        order_side: OrderSide::Buy,
        quantity: Quantity::from_u64(100),
        time_in_force: TimeInForce::Gtc,
        kind,
        expire_time: None,
        post_only: false,
        reduce_only: false,
        emulation_trigger: None,
        contingency_type: None,
        order_list_id: None,
        linked_order_ids: Vec::new(),
        parent_order_id: None,
        exec_algorithm_id: None,
        exec_algorithm_params: None,
        exec_spawn_id: None,
        tags: None,
        reconciliation: false,
    }
}

pub fn stop_market(trigger_price: Price) -> OrderKind {
    OrderKind::StopMarket {
        trigger: Trigger {
            price: trigger_price,
            trigger_type: TriggerType::LastTrade,
        },
    }
}

/// One order of every kind, with contingency details on the limit order.
pub fn every_order_kind() -> Vec<OrderInitialized> {
    let trigger = Trigger {
        price: Price::new(dec!(99.50)),
        trigger_type: TriggerType::BidAsk,
    };
    let trailing = TrailingOffset {
        offset: dec!(0.25),
        offset_type: TrailingOffsetType::Price,
    };
    let kinds = vec![
        OrderKind::Market,
        OrderKind::Limit {
            price: Price::new(dec!(100.25)),
            display_qty: Some(Quantity::from_u64(10)),
        },
        stop_market(Price::new(dec!(99.50))),
        OrderKind::StopLimit {
            price: Price::new(dec!(99.40)),
            trigger,
            display_qty: None,
        },
        OrderKind::MarketToLimit { display_qty: None },
        OrderKind::MarketIfTouched { trigger },
        OrderKind::LimitIfTouched {
            price: Price::new(dec!(101.00)),
            trigger,
            display_qty: None,
        },
        OrderKind::TrailingStopMarket {
            trigger_price: Some(Price::new(dec!(99.00))),
            trigger_type: TriggerType::LastTrade,
            trailing,
        },
        OrderKind::TrailingStopLimit {
            price: None,
            trigger_price: None,
            trigger_type: TriggerType::MarkPrice,
            limit_offset: dec!(0.10),
            trailing,
            display_qty: Some(Quantity::from_u64(5)),
        },
    ];

    kinds
        .into_iter()
        .map(|kind| {
            let mut order = order_initialized(kind);
            if order.order_type() == OrderType::Limit {
                order.time_in_force = TimeInForce::Gtd;
                order.expire_time = Some(UnixNanos::new(TS_EVENT + 3_600_000_000_000));
                order.contingency_type = Some(ContingencyType::Oco);
                order.order_list_id = Some(OrderListId::try_new("OL-1").unwrap());
                order.linked_order_ids = vec![
                    ClientOrderId::try_new("O-20240101-002").unwrap(),
                    ClientOrderId::try_new("O-20240101-003").unwrap(),
                ];
                order.exec_algorithm_params =
                    Some(BTreeMap::from([("horizon".to_string(), "60".to_string())]));
                order.tags = Some("entry".to_string());
            }
            order
        })
        .collect()
}

pub fn order_denied() -> OrderDenied {
    OrderDenied {
        header: header(),
        reason: "Exceeds max notional".to_string(),
    }
}

pub fn order_submitted() -> OrderSubmitted {
    OrderSubmitted {
        header: header(),
        account_id: AccountId::try_new("SIM-001").unwrap(),
    }
}

pub fn order_status(kind: OrderStatusKind) -> OrderStatusChanged {
    OrderStatusChanged {
        kind,
        header: header(),
        account_id: AccountId::try_new("SIM-001").unwrap(),
        venue_order_id: Some(VenueOrderId::try_new("V-778899").unwrap()),
        reconciliation: false,
    }
}

pub fn order_rejection(kind: RejectionKind) -> OrderRejection {
    OrderRejection {
        kind,
        header: header(),
        account_id: AccountId::try_new("SIM-001").unwrap(),
        venue_order_id: kind
            .has_venue_order_id()
            .then(|| VenueOrderId::try_new("V-778899").unwrap()),
        reason: "Insufficient buying power".to_string(),
        reconciliation: false,
    }
}

pub fn order_updated() -> OrderUpdated {
    OrderUpdated {
        header: header(),
        account_id: AccountId::try_new("SIM-001").unwrap(),
        venue_order_id: Some(VenueOrderId::try_new("V-778899").unwrap()),
        quantity: Quantity::from_u64(150),
        price: Some(Price::new(dec!(100.30))),
        trigger_price: None,
        reconciliation: false,
    }
}

pub fn order_filled() -> OrderFilled {
    OrderFilled {
        header: header(),
        account_id: AccountId::try_new("SIM-001").unwrap(),
        venue_order_id: VenueOrderId::try_new("V-778899").unwrap(),
        trade_id: TradeId::try_new("E-1").unwrap(),
        position_id: Some(PositionId::try_new("P-1").unwrap()),
        order_side: OrderSide::Buy,
        order_type: OrderType::Limit,
        last_qty: Quantity::from_u64(100),
        last_px: Price::new(dec!(100.25)),
        currency: usd(),
        commission: Some(Money::new(dec!(1.00), usd())),
        liquidity_side: LiquiditySide::Maker,
        info: BTreeMap::new(),
        reconciliation: false,
    }
}

pub fn position_snapshot() -> PositionSnapshot {
    PositionSnapshot {
        trader_id: TraderId::try_new("TRADER-001").unwrap(),
        strategy_id: StrategyId::try_new("EMA-CROSS-001").unwrap(),
        instrument_id: instrument(),
        account_id: AccountId::try_new("SIM-001").unwrap(),
        position_id: PositionId::try_new("P-1").unwrap(),
        opening_order_id: ClientOrderId::try_new("O-20240101-001").unwrap(),
        entry: OrderSide::Buy,
        side: PositionSide::Long,
        signed_qty: dec!(100),
        quantity: Quantity::from_u64(100),
        peak_qty: Quantity::from_u64(100),
        last_qty: Quantity::from_u64(100),
        last_px: Price::new(dec!(100.25)),
        currency: usd(),
        avg_px_open: 100.25,
        realized_pnl: Money::new(dec!(-1.00), usd()),
        event_id: EventId::new(Uuid::from_u128(0x6f1c_2a4e_8d0b_4c2a_9e57_0c8f_3b1d_7a63)),
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

pub fn position_opened() -> PositionOpened {
    PositionOpened {
        snapshot: position_snapshot(),
    }
}

pub fn position_changed() -> PositionChanged {
    PositionChanged {
        snapshot: position_snapshot(),
        avg_px_close: None,
        realized_return: 0.0,
        unrealized_pnl: Money::new(dec!(25.00), usd()),
        ts_opened: UnixNanos::new(TS_EVENT - 1_000),
    }
}

pub fn position_closed() -> PositionClosed {
    PositionClosed {
        snapshot: position_snapshot(),
        closing_order_id: ClientOrderId::try_new("O-20240101-009").unwrap(),
        avg_px_close: 101.5,
        realized_return: 0.012_468_827,
        ts_opened: UnixNanos::new(TS_EVENT - 1_000),
        ts_closed: UnixNanos::new(TS_EVENT),
        duration_ns: 1_000,
    }
}

fn common(id: &str, raw_symbol: &str) -> InstrumentCommon {
    InstrumentCommon {
        id: InstrumentId::try_new(id).unwrap(),
        raw_symbol: raw_symbol.to_string(),
        price_precision: 2,
        size_precision: 0,
        price_increment: Price::new(dec!(0.01)),
        size_increment: Quantity::from_u64(1),
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

fn fees() -> FeeSchedule {
    FeeSchedule {
        margin_init: dec!(0.05),
        margin_maint: dec!(0.03),
        maker_fee: dec!(-0.00025),
        taker_fee: dec!(0.00075),
    }
}

pub fn equity() -> Equity {
    Equity {
        common: common("AAPL.XNAS", "AAPL"),
        currency: usd(),
        multiplier: Quantity::from_u64(1),
        lot_size: Some(Quantity::from_u64(100)),
        isin: Some("US0378331005".to_string()),
        fees: fees(),
    }
}

pub fn currency_pair() -> CurrencyPair {
    CurrencyPair {
        common: common("EUR/USD.SIM", "EUR/USD"),
        base_currency: Currency::try_new("EUR").unwrap(),
        quote_currency: usd(),
        lot_size: None,
        limits: TradingLimits {
            max_quantity: Some(Quantity::from_u64(10_000_000)),
            min_quantity: Some(Quantity::from_u64(1_000)),
            max_notional: None,
            min_notional: Some(Money::new(dec!(10.00), usd())),
            max_price: None,
            min_price: None,
        },
        fees: fees(),
        info: BTreeMap::new(),
    }
}

pub fn crypto_perpetual() -> CryptoPerpetual {
    CryptoPerpetual {
        common: common("BTCUSDT-PERP.BINANCE", "BTCUSDT"),
        base_currency: Currency::try_new("BTC").unwrap(),
        quote_currency: Currency::try_new("USDT").unwrap(),
        settlement_currency: Currency::try_new("USDT").unwrap(),
        is_inverse: false,
        limits: TradingLimits {
            max_quantity: Some(Quantity::from_u64(1_000)),
            min_quantity: None,
            max_notional: None,
            min_notional: None,
            max_price: Some(Price::new(dec!(1000000.00))),
            min_price: Some(Price::new(dec!(0.01))),
        },
        fees: fees(),
        info: BTreeMap::from([("contract_type".to_string(), "PERPETUAL".to_string())]),
    }
}

pub fn crypto_future() -> CryptoFuture {
    CryptoFuture {
        common: common("BTCUSDT_250328.BINANCE", "BTCUSDT_250328"),
        underlying: Currency::try_new("BTC").unwrap(),
        quote_currency: Currency::try_new("USDT").unwrap(),
        settlement_currency: Currency::try_new("USDT").unwrap(),
        expiry_date: NaiveDate::from_ymd_opt(2025, 3, 28).unwrap(),
        limits: TradingLimits {
            max_quantity: Some(Quantity::from_u64(500)),
            ..TradingLimits::default()
        },
        fees: fees(),
        info: BTreeMap::new(),
    }
}

pub fn betting_instrument() -> BettingInstrument {
    BettingInstrument {
        id: InstrumentId::try_new("1.201070830-47972-0.0.BETFAIR").unwrap(),
        venue_name: "BETFAIR".to_string(),
        currency: Currency::try_new("GBP").unwrap(),
        event_type_id: "1".to_string(),
        event_type_name: "Soccer".to_string(),
        competition_id: "10932509".to_string(),
        competition_name: "English Premier League".to_string(),
        event_id: "32653004".to_string(),
        event_name: "Arsenal v Chelsea".to_string(),
        event_country_code: "GB".to_string(),
        event_open_date: Utc.with_ymd_and_hms(2024, 9, 14, 16, 30, 0).unwrap(),
        betting_type: "ODDS".to_string(),
        market_id: "1.201070830".to_string(),
        market_name: "Match Odds".to_string(),
        market_start_time: Utc.with_ymd_and_hms(2024, 9, 14, 16, 30, 0).unwrap(),
        market_type: "MATCH_ODDS".to_string(),
        selection_id: "47972".to_string(),
        selection_name: "Arsenal".to_string(),
        selection_handicap: dec!(0.0),
        ts_event: UnixNanos::new(TS_EVENT),
        ts_init: UnixNanos::new(TS_INIT),
    }
}

fn march_2025() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 21).unwrap()
}

pub fn futures_contract() -> FuturesContract {
    FuturesContract {
        common: common("ESH5.XCME", "ESH5"),
        underlying: "ES".to_string(),
        asset_class: AssetClass::Index,
        currency: usd(),
        multiplier: Quantity::from_u64(50),
        lot_size: Some(Quantity::from_u64(1)),
        expiry_date: march_2025(),
    }
}

pub fn options_contract() -> OptionsContract {
    OptionsContract {
        common: common("AAPL250321C00190000.OPRA", "AAPL250321C00190000"),
        underlying: "AAPL".to_string(),
        asset_class: AssetClass::Equity,
        currency: usd(),
        multiplier: Quantity::from_u64(100),
        lot_size: None,
        expiry_date: march_2025(),
        strike_price: Price::new(dec!(190.00)),
        kind: OptionKind::Call,
    }
}

/// One record for every built-in type tag.
pub fn every_builtin_record() -> Vec<Record> {
    let mut records: Vec<Record> = vec![
        quote_tick().into(),
        trade_tick().into(),
        ticker().into(),
        bar().into(),
        binance_bar().into(),
        order_book_delta().into(),
        instrument_close().into(),
        instrument_status_update().into(),
        venue_status_update().into(),
        component_state_changed().into(),
        trading_state_changed().into(),
        account_state(AccountType::Margin).into(),
        order_denied().into(),
        order_submitted().into(),
        order_updated().into(),
        order_filled().into(),
        position_opened().into(),
        position_changed().into(),
        position_closed().into(),
        equity().into(),
        currency_pair().into(),
        crypto_perpetual().into(),
        crypto_future().into(),
        futures_contract().into(),
        options_contract().into(),
        betting_instrument().into(),
    ];
    records.push(order_initialized(OrderKind::Market).into());
    records.extend(OrderStatusKind::ALL.iter().map(|k| Record::from(order_status(*k))));
    records.extend(RejectionKind::ALL.iter().map(|k| Record::from(order_rejection(*k))));
    records
}
