//! Domain Records
//!
//! Typed records persisted through the registry: market data, account
//! state, order and position events, and instrument definitions.
//!
//! # Structure
//!
//! - `shared/` - Value objects, enumerations and errors used by every record
//! - `market_data` - Quotes, trades, bars, book deltas and status updates
//! - `account` - Account balance and margin snapshots
//! - `order_events` - Order lifecycle events, including the order kind union
//! - `position_events` - Position opened/changed/closed
//! - `system_events` - Component and trading state changes
//! - `instruments` - Instrument definitions

pub mod account;
pub mod instruments;
pub mod market_data;
pub mod order_events;
pub mod position_events;
pub mod shared;
pub mod system_events;

pub use account::{AccountBalance, AccountState, MarginBalance};
pub use instruments::{
    BettingInstrument, CryptoFuture, CryptoPerpetual, CurrencyPair, Equity, FeeSchedule,
    FuturesContract, InstrumentCommon, OptionsContract, TradingLimits,
};
pub use market_data::{
    Bar, BinanceBar, InstrumentClose, InstrumentStatusUpdate, OrderBookDelta, QuoteTick, Ticker,
    TradeTick, VenueStatusUpdate,
};
pub use order_events::{
    OrderDenied, OrderEventHeader, OrderFilled, OrderInitialized, OrderKind, OrderKindParts,
    OrderRejection, OrderStatusChanged, OrderStatusKind, OrderSubmitted, OrderUpdated,
    RejectionKind, TrailingOffset, Trigger,
};
pub use position_events::{PositionChanged, PositionClosed, PositionOpened, PositionSnapshot};
pub use system_events::{ComponentStateChanged, TradingStateChanged};
