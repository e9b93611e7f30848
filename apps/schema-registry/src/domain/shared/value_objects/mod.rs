//! Shared Value Objects
//!
//! Immutable domain types used across record kinds.
//! Value objects are compared by value, not identity.

mod identifiers;
mod money;
mod price;
mod quantity;
mod timestamp;

pub use identifiers::{
    AccountId, BarType, ClientOrderId, ComponentId, Currency, EventId, ExecAlgorithmId,
    InstrumentId, OrderListId, PositionId, StrategyId, TradeId, TraderId, Venue, VenueOrderId,
};
pub use money::Money;
pub use price::Price;
pub use quantity::Quantity;
pub use timestamp::UnixNanos;
