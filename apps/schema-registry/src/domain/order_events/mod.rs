//! Order Events
//!
//! Records emitted over an order's lifecycle, from initialization to fill.

mod events;
mod order_kind;

pub use events::{
    OrderDenied, OrderEventHeader, OrderFilled, OrderInitialized, OrderRejection,
    OrderStatusChanged, OrderStatusKind, OrderSubmitted, OrderUpdated, RejectionKind,
};
pub use order_kind::{OrderKind, OrderKindParts, TrailingOffset, Trigger};
