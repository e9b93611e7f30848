//! Enumerated domain values.
//!
//! Each enum has a stable SCREAMING_SNAKE_CASE token (its `Display` form)
//! that is what lands in dictionary-coded columns.

use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The stable string token for this variant.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    other => Err(DomainError::invalid(
                        stringify!($name),
                        format!("unknown token '{other}'"),
                    )),
                }
            }
        }
    };
}

define_enum! {
    /// Order side.
    OrderSide {
        /// No side (e.g. a book clear).
        NoOrderSide => "NO_ORDER_SIDE",
        /// Buy order.
        Buy => "BUY",
        /// Sell order.
        Sell => "SELL",
    }
}

define_enum! {
    /// Order type specifying execution behavior.
    OrderType {
        /// Execute at best available price.
        Market => "MARKET",
        /// Execute at specified price or better.
        Limit => "LIMIT",
        /// Becomes a market order when the trigger price is reached.
        StopMarket => "STOP_MARKET",
        /// Becomes a limit order when the trigger price is reached.
        StopLimit => "STOP_LIMIT",
        /// Market order whose unfilled remainder rests as a limit.
        MarketToLimit => "MARKET_TO_LIMIT",
        /// Market order released when the trigger price is touched.
        MarketIfTouched => "MARKET_IF_TOUCHED",
        /// Limit order released when the trigger price is touched.
        LimitIfTouched => "LIMIT_IF_TOUCHED",
        /// Stop market order whose trigger trails the market.
        TrailingStopMarket => "TRAILING_STOP_MARKET",
        /// Stop limit order whose trigger and limit trail the market.
        TrailingStopLimit => "TRAILING_STOP_LIMIT",
    }
}

define_enum! {
    /// Time in force.
    TimeInForce {
        /// Good till canceled.
        Gtc => "GTC",
        /// Immediate or cancel.
        Ioc => "IOC",
        /// Fill or kill.
        Fok => "FOK",
        /// Good till date (requires an expire time).
        Gtd => "GTD",
        /// Day order.
        Day => "DAY",
        /// At the opening auction.
        AtTheOpen => "AT_THE_OPEN",
        /// At the closing auction.
        AtTheClose => "AT_THE_CLOSE",
    }
}

define_enum! {
    /// Price source used to evaluate a trigger.
    TriggerType {
        /// No trigger.
        NoTrigger => "NO_TRIGGER",
        /// Venue default.
        Default => "DEFAULT",
        /// Bid for sells, ask for buys.
        BidAsk => "BID_ASK",
        /// Last traded price.
        LastTrade => "LAST_TRADE",
        /// Two consecutive last trades.
        DoubleLast => "DOUBLE_LAST",
        /// Two consecutive bid/ask quotes.
        DoubleBidAsk => "DOUBLE_BID_ASK",
        /// Last trade or bid/ask.
        LastOrBidAsk => "LAST_OR_BID_ASK",
        /// Mid point of the quote.
        MidPoint => "MID_POINT",
        /// Mark price.
        MarkPrice => "MARK_PRICE",
        /// Index price.
        IndexPrice => "INDEX_PRICE",
    }
}

define_enum! {
    /// Unit of a trailing offset.
    TrailingOffsetType {
        /// No trailing offset.
        NoTrailingOffset => "NO_TRAILING_OFFSET",
        /// Absolute price distance.
        Price => "PRICE",
        /// Basis points.
        BasisPoints => "BASIS_POINTS",
        /// Number of ticks.
        Ticks => "TICKS",
        /// Venue price tier.
        PriceTier => "PRICE_TIER",
    }
}

define_enum! {
    /// Contingency relationship between orders in a list.
    ContingencyType {
        /// No contingency.
        NoContingency => "NO_CONTINGENCY",
        /// One cancels the other.
        Oco => "OCO",
        /// One triggers the other.
        Oto => "OTO",
        /// One updates the other.
        Ouo => "OUO",
    }
}

define_enum! {
    /// Liquidity side of a fill.
    LiquiditySide {
        /// Unknown.
        NoLiquiditySide => "NO_LIQUIDITY_SIDE",
        /// Passive (resting) side.
        Maker => "MAKER",
        /// Aggressive side.
        Taker => "TAKER",
    }
}

define_enum! {
    /// Side of the aggressor in a trade.
    AggressorSide {
        /// Unknown.
        NoAggressor => "NO_AGGRESSOR",
        /// Buyer lifted the offer.
        Buyer => "BUYER",
        /// Seller hit the bid.
        Seller => "SELLER",
    }
}

define_enum! {
    /// Position side.
    PositionSide {
        /// No exposure.
        Flat => "FLAT",
        /// Long exposure.
        Long => "LONG",
        /// Short exposure.
        Short => "SHORT",
    }
}

define_enum! {
    /// Order book delta action.
    BookAction {
        /// Add an order.
        Add => "ADD",
        /// Update an order.
        Update => "UPDATE",
        /// Delete an order.
        Delete => "DELETE",
        /// Clear the book.
        Clear => "CLEAR",
    }
}

define_enum! {
    /// Reason an instrument close price was published.
    InstrumentCloseType {
        /// End of the trading session.
        EndOfSession => "END_OF_SESSION",
        /// Contract expiry.
        ContractExpired => "CONTRACT_EXPIRED",
    }
}

define_enum! {
    /// Market status of an instrument.
    MarketStatus {
        /// Pre-open auction.
        PreOpen => "PRE_OPEN",
        /// Continuous trading.
        Open => "OPEN",
        /// Trading paused.
        Pause => "PAUSE",
        /// Trading halted.
        Halt => "HALT",
        /// Reopening auction.
        Reopen => "REOPEN",
        /// Pre-close auction.
        PreClose => "PRE_CLOSE",
        /// Closed.
        Closed => "CLOSED",
    }
}

define_enum! {
    /// Asset class of an instrument.
    AssetClass {
        /// Foreign exchange.
        Fx => "FX",
        /// Equities.
        Equity => "EQUITY",
        /// Commodities.
        Commodity => "COMMODITY",
        /// Fixed income.
        Debt => "DEBT",
        /// Indices.
        Index => "INDEX",
        /// Crypto assets.
        Cryptocurrency => "CRYPTOCURRENCY",
        /// Anything else.
        Alternative => "ALTERNATIVE",
    }
}

define_enum! {
    /// Option right.
    OptionKind {
        /// Call option.
        Call => "CALL",
        /// Put option.
        Put => "PUT",
    }
}

define_enum! {
    /// Account type.
    AccountType {
        /// Cash account.
        Cash => "CASH",
        /// Margin account.
        Margin => "MARGIN",
        /// Betting account.
        Betting => "BETTING",
    }
}

define_enum! {
    /// Lifecycle state of a system component.
    ComponentState {
        /// Constructed, not yet configured.
        PreInitialized => "PRE_INITIALIZED",
        /// Configured and ready to start.
        Ready => "READY",
        /// Starting.
        Starting => "STARTING",
        /// Running.
        Running => "RUNNING",
        /// Stopping.
        Stopping => "STOPPING",
        /// Stopped.
        Stopped => "STOPPED",
        /// Resuming from stopped.
        Resuming => "RESUMING",
        /// Resetting state.
        Resetting => "RESETTING",
        /// Releasing resources.
        Disposing => "DISPOSING",
        /// Resources released.
        Disposed => "DISPOSED",
        /// Entering degraded operation.
        Degrading => "DEGRADING",
        /// Running degraded.
        Degraded => "DEGRADED",
        /// Entering the faulted state.
        Faulting => "FAULTING",
        /// Faulted.
        Faulted => "FAULTED",
    }
}

define_enum! {
    /// Trading state of a trader, as set by the risk engine.
    TradingState {
        /// Normal trading.
        Active => "ACTIVE",
        /// No new orders.
        Halted => "HALTED",
        /// Only orders that reduce exposure.
        Reducing => "REDUCING",
    }
}

impl OrderType {
    /// Returns true if this order type carries a limit price.
    #[must_use]
    pub const fn has_price(&self) -> bool {
        matches!(
            self,
            Self::Limit | Self::StopLimit | Self::LimitIfTouched | Self::TrailingStopLimit
        )
    }

    /// Returns true if this order type carries a trigger.
    #[must_use]
    pub const fn has_trigger(&self) -> bool {
        matches!(
            self,
            Self::StopMarket
                | Self::StopLimit
                | Self::MarketIfTouched
                | Self::LimitIfTouched
                | Self::TrailingStopMarket
                | Self::TrailingStopLimit
        )
    }

    /// Returns true if this order type trails the market.
    #[must_use]
    pub const fn is_trailing(&self) -> bool {
        matches!(self, Self::TrailingStopMarket | Self::TrailingStopLimit)
    }
}

impl OrderSide {
    /// Compact code used by raw book delta columns.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::NoOrderSide => 0,
            Self::Buy => 1,
            Self::Sell => 2,
        }
    }

    /// Inverse of [`OrderSide::as_u8`].
    ///
    /// # Errors
    ///
    /// Returns error for unknown codes.
    pub fn from_u8(code: u8) -> Result<Self, DomainError> {
        match code {
            0 => Ok(Self::NoOrderSide),
            1 => Ok(Self::Buy),
            2 => Ok(Self::Sell),
            other => Err(DomainError::invalid("OrderSide", format!("unknown code {other}"))),
        }
    }
}

impl BookAction {
    /// Compact code used by raw book delta columns.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Add => 1,
            Self::Update => 2,
            Self::Delete => 3,
            Self::Clear => 4,
        }
    }

    /// Inverse of [`BookAction::as_u8`].
    ///
    /// # Errors
    ///
    /// Returns error for unknown codes.
    pub fn from_u8(code: u8) -> Result<Self, DomainError> {
        match code {
            1 => Ok(Self::Add),
            2 => Ok(Self::Update),
            3 => Ok(Self::Delete),
            4 => Ok(Self::Clear),
            other => Err(DomainError::invalid("BookAction", format!("unknown code {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_side_display() {
        assert_eq!(format!("{}", OrderSide::Buy), "BUY");
        assert_eq!(format!("{}", OrderSide::Sell), "SELL");
    }

    #[test]
    fn tokens_roundtrip_for_every_variant() {
        for t in OrderType::ALL {
            assert_eq!(t.as_str().parse::<OrderType>().unwrap(), *t);
        }
        for t in TriggerType::ALL {
            assert_eq!(t.as_str().parse::<TriggerType>().unwrap(), *t);
        }
        for t in TimeInForce::ALL {
            assert_eq!(t.as_str().parse::<TimeInForce>().unwrap(), *t);
        }
        for s in ComponentState::ALL {
            assert_eq!(s.as_str().parse::<ComponentState>().unwrap(), *s);
        }
        for s in TradingState::ALL {
            assert_eq!(s.as_str().parse::<TradingState>().unwrap(), *s);
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = "SIDEWAYS".parse::<OrderSide>().unwrap_err();
        assert!(err.to_string().contains("SIDEWAYS"));
    }

    #[test]
    fn order_type_variant_requirements() {
        assert!(!OrderType::Market.has_price());
        assert!(OrderType::Limit.has_price());
        assert!(OrderType::StopMarket.has_trigger());
        assert!(!OrderType::StopMarket.has_price());
        assert!(OrderType::TrailingStopLimit.is_trailing());
        assert!(!OrderType::StopLimit.is_trailing());
    }

    #[test]
    fn compact_codes_roundtrip() {
        for side in OrderSide::ALL {
            assert_eq!(OrderSide::from_u8(side.as_u8()).unwrap(), *side);
        }
        for action in BookAction::ALL {
            assert_eq!(BookAction::from_u8(action.as_u8()).unwrap(), *action);
        }
        assert!(BookAction::from_u8(0).is_err());
        assert!(OrderSide::from_u8(9).is_err());
    }
}
