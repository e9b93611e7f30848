//! Order lifecycle events.

use std::collections::BTreeMap;

use super::OrderKind;
use crate::domain::shared::{
    AccountId, ClientOrderId, ContingencyType, Currency, EventId, ExecAlgorithmId, InstrumentId,
    LiquiditySide, Money, OrderListId, OrderSide, OrderType, PositionId, Price, Quantity,
    StrategyId, TimeInForce, TradeId, TraderId, TriggerType, UnixNanos, VenueOrderId,
};

/// Fields every order event carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEventHeader {
    /// Trader that owns the order.
    pub trader_id: TraderId,
    /// Strategy that owns the order.
    pub strategy_id: StrategyId,
    /// Order instrument.
    pub instrument_id: InstrumentId,
    /// Client order identifier.
    pub client_order_id: ClientOrderId,
    /// Event identifier.
    pub event_id: EventId,
    /// When the event occurred.
    pub ts_event: UnixNanos,
    /// When the event was observed.
    pub ts_init: UnixNanos,
}

/// An order was created locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderInitialized {
    /// Common order event fields.
    pub header: OrderEventHeader,
    /// Buy or sell.
    pub order_side: OrderSide,
    /// Order quantity.
    pub quantity: Quantity,
    /// Time in force.
    pub time_in_force: TimeInForce,
    /// Subtype-specific parameters; carries the `order_type` discriminant.
    pub kind: OrderKind,
    /// Expiry for GTD orders.
    pub expire_time: Option<UnixNanos>,
    /// Reject if the order would take liquidity.
    pub post_only: bool,
    /// Only reduce an existing position.
    pub reduce_only: bool,
    /// Local emulation trigger, if emulated.
    pub emulation_trigger: Option<TriggerType>,
    /// Contingency relationship within an order list.
    pub contingency_type: Option<ContingencyType>,
    /// Owning order list.
    pub order_list_id: Option<OrderListId>,
    /// Orders linked by the contingency.
    pub linked_order_ids: Vec<ClientOrderId>,
    /// Parent order for child orders.
    pub parent_order_id: Option<ClientOrderId>,
    /// Execution algorithm handling the order.
    pub exec_algorithm_id: Option<ExecAlgorithmId>,
    /// Execution algorithm parameters.
    pub exec_algorithm_params: Option<BTreeMap<String, String>>,
    /// Primary order an algorithm spawned this order from.
    pub exec_spawn_id: Option<ClientOrderId>,
    /// Free-form tags.
    pub tags: Option<String>,
    /// Generated by reconciliation rather than live flow.
    pub reconciliation: bool,
}

impl OrderInitialized {
    /// The order type discriminant.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.kind.order_type()
    }
}

/// The order was denied before reaching a venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDenied {
    /// Common order event fields.
    pub header: OrderEventHeader,
    /// Denial reason.
    pub reason: String,
}

/// The order was submitted to a venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSubmitted {
    /// Common order event fields.
    pub header: OrderEventHeader,
    /// Venue account.
    pub account_id: AccountId,
}

/// Status transitions that share one column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatusKind {
    /// `OrderAccepted`.
    Accepted,
    /// `OrderPendingCancel`.
    PendingCancel,
    /// `OrderPendingUpdate`.
    PendingUpdate,
    /// `OrderCanceled`.
    Canceled,
    /// `OrderExpired`.
    Expired,
    /// `OrderTriggered`.
    Triggered,
}

impl OrderStatusKind {
    /// Every status kind.
    pub const ALL: &'static [Self] = &[
        Self::Accepted,
        Self::PendingCancel,
        Self::PendingUpdate,
        Self::Canceled,
        Self::Expired,
        Self::Triggered,
    ];

    /// Record type tag for this status.
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::Accepted => "OrderAccepted",
            Self::PendingCancel => "OrderPendingCancel",
            Self::PendingUpdate => "OrderPendingUpdate",
            Self::Canceled => "OrderCanceled",
            Self::Expired => "OrderExpired",
            Self::Triggered => "OrderTriggered",
        }
    }

    /// Inverse of [`OrderStatusKind::type_tag`].
    #[must_use]
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.type_tag() == tag)
    }
}

/// A venue-driven status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatusChanged {
    /// Which transition.
    pub kind: OrderStatusKind,
    /// Common order event fields.
    pub header: OrderEventHeader,
    /// Venue account.
    pub account_id: AccountId,
    /// Venue order identifier, once assigned.
    pub venue_order_id: Option<VenueOrderId>,
    /// Generated by reconciliation rather than live flow.
    pub reconciliation: bool,
}

/// Rejections that share one column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// `OrderRejected` (new order rejected; no venue order id).
    Order,
    /// `OrderModifyRejected`.
    Modify,
    /// `OrderCancelRejected`.
    Cancel,
}

impl RejectionKind {
    /// Every rejection kind.
    pub const ALL: &'static [Self] = &[Self::Order, Self::Modify, Self::Cancel];

    /// Record type tag for this rejection.
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::Order => "OrderRejected",
            Self::Modify => "OrderModifyRejected",
            Self::Cancel => "OrderCancelRejected",
        }
    }

    /// Inverse of [`RejectionKind::type_tag`].
    #[must_use]
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.type_tag() == tag)
    }

    /// New-order rejections happen before a venue id exists.
    #[must_use]
    pub const fn has_venue_order_id(&self) -> bool {
        !matches!(self, Self::Order)
    }
}

/// A venue rejected an order, modification or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRejection {
    /// Which rejection.
    pub kind: RejectionKind,
    /// Common order event fields.
    pub header: OrderEventHeader,
    /// Venue account.
    pub account_id: AccountId,
    /// Venue order identifier; always `None` for [`RejectionKind::Order`].
    pub venue_order_id: Option<VenueOrderId>,
    /// Rejection reason.
    pub reason: String,
    /// Generated by reconciliation rather than live flow.
    pub reconciliation: bool,
}

/// The order was modified at the venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderUpdated {
    /// Common order event fields.
    pub header: OrderEventHeader,
    /// Venue account.
    pub account_id: AccountId,
    /// Venue order identifier.
    pub venue_order_id: Option<VenueOrderId>,
    /// Updated quantity.
    pub quantity: Quantity,
    /// Updated limit price, for priced orders.
    pub price: Option<Price>,
    /// Updated trigger price, for triggered orders.
    pub trigger_price: Option<Price>,
    /// Generated by reconciliation rather than live flow.
    pub reconciliation: bool,
}

/// The order was (partially) filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilled {
    /// Common order event fields.
    pub header: OrderEventHeader,
    /// Venue account.
    pub account_id: AccountId,
    /// Venue order identifier.
    pub venue_order_id: VenueOrderId,
    /// Venue trade identifier.
    pub trade_id: TradeId,
    /// Position the fill applies to, if known.
    pub position_id: Option<PositionId>,
    /// Side of the filled order.
    pub order_side: OrderSide,
    /// Type of the filled order.
    pub order_type: OrderType,
    /// Fill quantity.
    pub last_qty: Quantity,
    /// Fill price.
    pub last_px: Price,
    /// Settlement currency of the fill.
    pub currency: Currency,
    /// Commission charged, if any.
    pub commission: Option<Money>,
    /// Maker or taker.
    pub liquidity_side: LiquiditySide,
    /// Adapter-specific extra information.
    pub info: BTreeMap<String, String>,
    /// Generated by reconciliation rather than live flow.
    pub reconciliation: bool,
}
