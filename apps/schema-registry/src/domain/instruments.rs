//! Instrument definitions.
//!
//! Instruments share a common block (identity, precisions and increments)
//! plus optional trading limits and a fee schedule. Definitions change
//! rarely, so most columns are dictionary coded.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::domain::shared::{
    AssetClass, Currency, InstrumentId, Money, OptionKind, Price, Quantity, UnixNanos,
};

/// Fields every instrument carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentCommon {
    /// Instrument identifier.
    pub id: InstrumentId,
    /// Venue-native symbol.
    pub raw_symbol: String,
    /// Decimal places of prices.
    pub price_precision: u8,
    /// Decimal places of sizes.
    pub size_precision: u8,
    /// Minimum price increment.
    pub price_increment: Price,
    /// Minimum size increment.
    pub size_increment: Quantity,
    /// When the definition took effect.
    pub ts_event: UnixNanos,
    /// When the definition was observed.
    pub ts_init: UnixNanos,
}

/// Venue order limits. Every bound is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradingLimits {
    /// Largest order quantity.
    pub max_quantity: Option<Quantity>,
    /// Smallest order quantity.
    pub min_quantity: Option<Quantity>,
    /// Largest order notional.
    pub max_notional: Option<Money>,
    /// Smallest order notional.
    pub min_notional: Option<Money>,
    /// Highest accepted price.
    pub max_price: Option<Price>,
    /// Lowest accepted price.
    pub min_price: Option<Price>,
}

/// Margin and fee rates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeSchedule {
    /// Initial margin rate.
    pub margin_init: Decimal,
    /// Maintenance margin rate.
    pub margin_maint: Decimal,
    /// Maker fee rate.
    pub maker_fee: Decimal,
    /// Taker fee rate.
    pub taker_fee: Decimal,
}

/// Listed equity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equity {
    /// Common instrument fields.
    pub common: InstrumentCommon,
    /// Quote currency.
    pub currency: Currency,
    /// Contract multiplier.
    pub multiplier: Quantity,
    /// Round lot size.
    pub lot_size: Option<Quantity>,
    /// ISIN, when known.
    pub isin: Option<String>,
    /// Margin and fee rates.
    pub fees: FeeSchedule,
}

/// Spot FX or crypto pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyPair {
    /// Common instrument fields.
    pub common: InstrumentCommon,
    /// Base currency.
    pub base_currency: Currency,
    /// Quote currency.
    pub quote_currency: Currency,
    /// Round lot size.
    pub lot_size: Option<Quantity>,
    /// Venue order limits.
    pub limits: TradingLimits,
    /// Margin and fee rates.
    pub fees: FeeSchedule,
    /// Adapter-specific extra information.
    pub info: BTreeMap<String, String>,
}

/// Perpetual swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoPerpetual {
    /// Common instrument fields.
    pub common: InstrumentCommon,
    /// Base currency.
    pub base_currency: Currency,
    /// Quote currency.
    pub quote_currency: Currency,
    /// Settlement currency.
    pub settlement_currency: Currency,
    /// Inverse contract (settled in base).
    pub is_inverse: bool,
    /// Venue order limits.
    pub limits: TradingLimits,
    /// Margin and fee rates.
    pub fees: FeeSchedule,
    /// Adapter-specific extra information.
    pub info: BTreeMap<String, String>,
}

/// Dated futures contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuturesContract {
    /// Common instrument fields.
    pub common: InstrumentCommon,
    /// Underlying symbol.
    pub underlying: String,
    /// Asset class of the underlying.
    pub asset_class: AssetClass,
    /// Quote currency.
    pub currency: Currency,
    /// Contract multiplier.
    pub multiplier: Quantity,
    /// Round lot size.
    pub lot_size: Option<Quantity>,
    /// Expiry date.
    pub expiry_date: NaiveDate,
}

/// Listed option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsContract {
    /// Common instrument fields.
    pub common: InstrumentCommon,
    /// Underlying symbol.
    pub underlying: String,
    /// Asset class of the underlying.
    pub asset_class: AssetClass,
    /// Quote currency.
    pub currency: Currency,
    /// Contract multiplier.
    pub multiplier: Quantity,
    /// Round lot size.
    pub lot_size: Option<Quantity>,
    /// Expiry date.
    pub expiry_date: NaiveDate,
    /// Strike price.
    pub strike_price: Price,
    /// Call or put.
    pub kind: OptionKind,
}

/// Dated crypto future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoFuture {
    /// Common instrument fields.
    pub common: InstrumentCommon,
    /// Underlying asset.
    pub underlying: Currency,
    /// Quote currency.
    pub quote_currency: Currency,
    /// Settlement currency.
    pub settlement_currency: Currency,
    /// Expiry date.
    pub expiry_date: NaiveDate,
    /// Venue order limits.
    pub limits: TradingLimits,
    /// Margin and fee rates.
    pub fees: FeeSchedule,
    /// Adapter-specific extra information.
    pub info: BTreeMap<String, String>,
}

/// One selection of a betting market.
///
/// Betting venues describe the market hierarchy (event type, competition,
/// event, market, selection) with free-form names and ids, so everything
/// except the handicap and the two instants is kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BettingInstrument {
    /// Instrument identifier.
    pub id: InstrumentId,
    /// Venue name.
    pub venue_name: String,
    /// Stake currency.
    pub currency: Currency,
    /// Sport or event type id.
    pub event_type_id: String,
    /// Sport or event type name.
    pub event_type_name: String,
    /// Competition id.
    pub competition_id: String,
    /// Competition name.
    pub competition_name: String,
    /// Venue id of the sporting event (not an [`EventId`](crate::domain::shared::EventId)).
    pub event_id: String,
    /// Sporting event name.
    pub event_name: String,
    /// Country code of the sporting event.
    pub event_country_code: String,
    /// When the sporting event opens.
    pub event_open_date: DateTime<Utc>,
    /// Betting type (e.g. `ODDS`).
    pub betting_type: String,
    /// Market id.
    pub market_id: String,
    /// Market name.
    pub market_name: String,
    /// When the market goes in play.
    pub market_start_time: DateTime<Utc>,
    /// Market type (e.g. `MATCH_ODDS`).
    pub market_type: String,
    /// Selection (runner) id.
    pub selection_id: String,
    /// Selection name.
    pub selection_name: String,
    /// Handicap applied to the selection.
    pub selection_handicap: Decimal,
    /// When the definition took effect.
    pub ts_event: UnixNanos,
    /// When the definition was observed.
    pub ts_init: UnixNanos,
}
