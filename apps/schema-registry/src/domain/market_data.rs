//! Market data records: quotes, trades, bars, book deltas and status.

use crate::domain::shared::{
    AggressorSide, BarType, BookAction, InstrumentCloseType, InstrumentId, MarketStatus,
    OrderSide, Price, Quantity, TradeId, UnixNanos, Venue,
};

/// Marker that a ticker snapshot was taken for an instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    /// Instrument the ticker belongs to.
    pub instrument_id: InstrumentId,
    /// Venue event time.
    pub ts_event: UnixNanos,
    /// Observation time.
    pub ts_init: UnixNanos,
}

/// Top-of-book quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteTick {
    /// Quoted instrument.
    pub instrument_id: InstrumentId,
    /// Best bid price.
    pub bid: Price,
    /// Best ask price.
    pub ask: Price,
    /// Size at the best bid.
    pub bid_size: Quantity,
    /// Size at the best ask.
    pub ask_size: Quantity,
    /// When the quote was published by the venue.
    pub ts_event: UnixNanos,
    /// When the quote was observed.
    pub ts_init: UnixNanos,
}

/// A single trade print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeTick {
    /// Traded instrument.
    pub instrument_id: InstrumentId,
    /// Trade price.
    pub price: Price,
    /// Trade size.
    pub size: Quantity,
    /// Which side crossed the spread.
    pub aggressor_side: AggressorSide,
    /// Venue trade identifier.
    pub trade_id: TradeId,
    /// When the trade occurred.
    pub ts_event: UnixNanos,
    /// When the trade was observed.
    pub ts_init: UnixNanos,
}

/// An OHLCV bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    /// Bar specification.
    pub bar_type: BarType,
    /// Aggregated instrument.
    pub instrument_id: InstrumentId,
    /// Open price.
    pub open: Price,
    /// High price.
    pub high: Price,
    /// Low price.
    pub low: Price,
    /// Close price.
    pub close: Price,
    /// Traded volume.
    pub volume: Quantity,
    /// Bar close time.
    pub ts_event: UnixNanos,
    /// When the bar was built.
    pub ts_init: UnixNanos,
}

/// An incremental order book update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBookDelta {
    /// Book instrument.
    pub instrument_id: InstrumentId,
    /// Add, update, delete or clear.
    pub action: BookAction,
    /// Side of the book.
    pub side: OrderSide,
    /// Order price.
    pub price: Price,
    /// Order size.
    pub size: Quantity,
    /// Venue order identifier within the book.
    pub order_id: u64,
    /// Venue-specific flag bits.
    pub flags: u8,
    /// Feed sequence number.
    pub sequence: u64,
    /// Venue event time.
    pub ts_event: UnixNanos,
    /// Observation time.
    pub ts_init: UnixNanos,
}

/// An official close price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentClose {
    /// Closed instrument.
    pub instrument_id: InstrumentId,
    /// Close price.
    pub close_price: Price,
    /// Why the close was published.
    pub close_type: InstrumentCloseType,
    /// Venue event time.
    pub ts_event: UnixNanos,
    /// Observation time.
    pub ts_init: UnixNanos,
}

/// A change in an instrument's market status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentStatusUpdate {
    /// Affected instrument.
    pub instrument_id: InstrumentId,
    /// New status.
    pub status: MarketStatus,
    /// Venue event time.
    pub ts_event: UnixNanos,
    /// Observation time.
    pub ts_init: UnixNanos,
}

/// A bar with the extra Binance kline statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinanceBar {
    /// The plain OHLCV bar.
    pub bar: Bar,
    /// Volume in quote currency.
    pub quote_volume: Quantity,
    /// Number of trades in the bar.
    pub count: u64,
    /// Base volume bought by takers.
    pub taker_buy_base_volume: Quantity,
    /// Quote volume bought by takers.
    pub taker_buy_quote_volume: Quantity,
}

/// A change in a whole venue's market status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueStatusUpdate {
    /// Affected venue.
    pub venue: Venue,
    /// New status.
    pub status: MarketStatus,
    /// Venue event time.
    pub ts_event: UnixNanos,
    /// Observation time.
    pub ts_init: UnixNanos,
}
