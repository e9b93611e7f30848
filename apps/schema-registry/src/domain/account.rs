//! Account state snapshots.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::domain::shared::{AccountId, AccountType, Currency, EventId, InstrumentId, UnixNanos};

/// Balance of one currency in an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountBalance {
    /// Total balance.
    pub total: Decimal,
    /// Balance locked by open orders or margin.
    pub locked: Decimal,
    /// Balance free to trade.
    pub free: Decimal,
    /// Balance currency.
    pub currency: Currency,
}

/// Margin held against one instrument.
///
/// Only margin accounts report margin; for cash accounts the margin columns
/// are null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarginBalance {
    /// Initial margin requirement.
    pub initial: Decimal,
    /// Maintenance margin requirement.
    pub maintenance: Decimal,
    /// Margin currency.
    pub currency: Currency,
    /// Instrument the margin is held for.
    pub instrument_id: InstrumentId,
}

/// Snapshot of an account as reported by the venue or computed locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountState {
    /// Account identifier.
    pub account_id: AccountId,
    /// Cash, margin or betting.
    pub account_type: AccountType,
    /// Base currency for single-currency accounts.
    pub base_currency: Option<Currency>,
    /// Balance snapshot.
    pub balance: AccountBalance,
    /// Margin snapshot, margin accounts only.
    pub margin: Option<MarginBalance>,
    /// True if reported by the venue, false if calculated.
    pub reported: bool,
    /// Adapter-specific extra information.
    pub info: BTreeMap<String, String>,
    /// Event identifier.
    pub event_id: EventId,
    /// Venue event time.
    pub ts_event: UnixNanos,
    /// Observation time.
    pub ts_init: UnixNanos,
}
