//! Position lifecycle events.

use rust_decimal::Decimal;

use crate::domain::shared::{
    AccountId, ClientOrderId, Currency, EventId, InstrumentId, Money, OrderSide, PositionId,
    PositionSide, Price, Quantity, StrategyId, TraderId, UnixNanos,
};

/// Position state carried by every position event.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSnapshot {
    /// Trader that owns the position.
    pub trader_id: TraderId,
    /// Strategy that owns the position.
    pub strategy_id: StrategyId,
    /// Position instrument.
    pub instrument_id: InstrumentId,
    /// Venue account.
    pub account_id: AccountId,
    /// Position identifier.
    pub position_id: PositionId,
    /// Order that opened the position.
    pub opening_order_id: ClientOrderId,
    /// Side of the opening order.
    pub entry: OrderSide,
    /// Current side.
    pub side: PositionSide,
    /// Signed quantity (negative when short).
    pub signed_qty: Decimal,
    /// Absolute quantity.
    pub quantity: Quantity,
    /// Largest absolute quantity held.
    pub peak_qty: Quantity,
    /// Quantity of the last fill.
    pub last_qty: Quantity,
    /// Price of the last fill.
    pub last_px: Price,
    /// Quote currency.
    pub currency: Currency,
    /// Volume-weighted average open price.
    pub avg_px_open: f64,
    /// Realized PnL so far.
    pub realized_pnl: Money,
    /// Event identifier.
    pub event_id: EventId,
    /// When the event occurred.
    pub ts_event: UnixNanos,
    /// When the event was observed.
    pub ts_init: UnixNanos,
}

/// A position was opened.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionOpened {
    /// Position state.
    pub snapshot: PositionSnapshot,
}

/// A fill changed an open position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionChanged {
    /// Position state.
    pub snapshot: PositionSnapshot,
    /// Average close price, once any quantity was closed.
    pub avg_px_close: Option<f64>,
    /// Realized return ratio.
    pub realized_return: f64,
    /// Unrealized PnL at the last price.
    pub unrealized_pnl: Money,
    /// When the position was opened.
    pub ts_opened: UnixNanos,
}

/// A position was closed.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionClosed {
    /// Position state.
    pub snapshot: PositionSnapshot,
    /// Order that closed the position.
    pub closing_order_id: ClientOrderId,
    /// Average close price.
    pub avg_px_close: f64,
    /// Realized return ratio.
    pub realized_return: f64,
    /// When the position was opened.
    pub ts_opened: UnixNanos,
    /// When the position was closed.
    pub ts_closed: UnixNanos,
    /// Time the position was open.
    pub duration_ns: u64,
}
