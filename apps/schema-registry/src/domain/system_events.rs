//! System events: component lifecycle and trader trading state.

use std::collections::BTreeMap;

use crate::domain::shared::{
    ComponentId, ComponentState, EventId, TraderId, TradingState, UnixNanos,
};

/// A component moved to a new lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentStateChanged {
    /// Trader the component belongs to.
    pub trader_id: TraderId,
    /// The component.
    pub component_id: ComponentId,
    /// Component class (e.g. `Strategy`, `DataEngine`).
    pub component_type: String,
    /// New state.
    pub state: ComponentState,
    /// Component configuration at the time of the change.
    pub config: BTreeMap<String, String>,
    /// Event identifier.
    pub event_id: EventId,
    /// When the change happened.
    pub ts_event: UnixNanos,
    /// When the event was created.
    pub ts_init: UnixNanos,
}

/// The risk engine changed a trader's trading state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingStateChanged {
    /// Affected trader.
    pub trader_id: TraderId,
    /// New state.
    pub state: TradingState,
    /// Risk engine configuration at the time of the change.
    pub config: BTreeMap<String, String>,
    /// Event identifier.
    pub event_id: EventId,
    /// When the change happened.
    pub ts_event: UnixNanos,
    /// When the event was created.
    pub ts_init: UnixNanos,
}
