//! Shared Domain Types
//!
//! Value objects, enumerations and errors shared across record kinds.

pub mod enums;
pub mod errors;
pub mod value_objects;

pub use enums::{
    AccountType, AggressorSide, AssetClass, BookAction, ComponentState, ContingencyType,
    InstrumentCloseType, LiquiditySide, MarketStatus, OptionKind, OrderSide, OrderType,
    PositionSide, TimeInForce, TradingState, TrailingOffsetType, TriggerType,
};
pub use errors::DomainError;
pub use value_objects::{
    AccountId, BarType, ClientOrderId, ComponentId, Currency, EventId, ExecAlgorithmId,
    InstrumentId, Money, OrderListId, PositionId, Price, Quantity, StrategyId, TradeId, TraderId,
    UnixNanos, Venue, VenueOrderId,
};
