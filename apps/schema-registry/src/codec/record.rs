//! The record abstraction the codec works against.

use crate::domain::{
    AccountState, Bar, BettingInstrument, BinanceBar, ComponentStateChanged, CryptoFuture,
    CryptoPerpetual, CurrencyPair, Equity, FuturesContract, InstrumentClose,
    InstrumentStatusUpdate, OptionsContract, OrderBookDelta, OrderDenied, OrderFilled,
    OrderInitialized, OrderRejection, OrderStatusChanged, OrderStatusKind, OrderSubmitted,
    OrderUpdated, PositionChanged, PositionClosed, PositionOpened, QuoteTick, RejectionKind,
    Ticker, TradeTick, TradingStateChanged, VenueStatusUpdate,
};
use crate::policy::FieldValue;

use super::{CodecError, RowReader};

/// A record that can be written to and read from a registered layout.
///
/// Encoding is driven by the schema: the codec asks the record for each
/// declared column by name, so column order and optional columns are owned
/// by the registry rather than by the record type.
pub trait ColumnarRecord: Sized {
    /// Record kind, used as the registry key.
    fn type_tag(&self) -> &str;

    /// Semantic value of `field`, or `None` if the record has no such field.
    ///
    /// Unset variant fields and absent optional values are
    /// `Some(FieldValue::Null)`.
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Rebuild a record from a row whose length and nullability have already
    /// been checked against the schema.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] when a column is missing or cannot be parsed,
    /// or when a variant column required by the discriminant is null.
    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError>;
}

/// Block of columns embedded in several record kinds (headers, snapshots,
/// instrument common fields).
pub(crate) trait FieldGroup: Sized {
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    fn read(row: &RowReader<'_>) -> Result<Self, CodecError>;
}

macro_rules! define_record {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// Any built-in record, dispatched on its type tag.
        #[derive(Debug, Clone, PartialEq)]
        #[allow(clippy::large_enum_variant)]
        pub enum Record {
            $(
                #[allow(missing_docs)]
                $variant($ty),
            )+
        }

        $(
            impl From<$ty> for Record {
                fn from(record: $ty) -> Self {
                    Self::$variant(record)
                }
            }
        )+

        impl Record {
            fn inner_type_tag(&self) -> &str {
                match self {
                    $(Self::$variant(r) => r.type_tag(),)+
                }
            }

            fn inner_field_value(&self, field: &str) -> Option<FieldValue> {
                match self {
                    $(Self::$variant(r) => r.field_value(field),)+
                }
            }
        }
    };
}

define_record! {
    QuoteTick(QuoteTick),
    TradeTick(TradeTick),
    Ticker(Ticker),
    Bar(Bar),
    BinanceBar(BinanceBar),
    OrderBookDelta(OrderBookDelta),
    InstrumentClose(InstrumentClose),
    InstrumentStatusUpdate(InstrumentStatusUpdate),
    VenueStatusUpdate(VenueStatusUpdate),
    ComponentStateChanged(ComponentStateChanged),
    TradingStateChanged(TradingStateChanged),
    AccountState(AccountState),
    OrderInitialized(OrderInitialized),
    OrderDenied(OrderDenied),
    OrderSubmitted(OrderSubmitted),
    OrderStatusChanged(OrderStatusChanged),
    OrderRejection(OrderRejection),
    OrderUpdated(OrderUpdated),
    OrderFilled(OrderFilled),
    PositionOpened(PositionOpened),
    PositionChanged(PositionChanged),
    PositionClosed(PositionClosed),
    Equity(Equity),
    CurrencyPair(CurrencyPair),
    CryptoPerpetual(CryptoPerpetual),
    CryptoFuture(CryptoFuture),
    FuturesContract(FuturesContract),
    OptionsContract(OptionsContract),
    BettingInstrument(BettingInstrument),
}

impl ColumnarRecord for Record {
    fn type_tag(&self) -> &str {
        self.inner_type_tag()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.inner_field_value(field)
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        let tag = row.type_tag();
        if OrderStatusKind::from_type_tag(tag).is_some() {
            return OrderStatusChanged::decode(row).map(Self::from);
        }
        if RejectionKind::from_type_tag(tag).is_some() {
            return OrderRejection::decode(row).map(Self::from);
        }
        match tag {
            "QuoteTick" => QuoteTick::decode(row).map(Self::from),
            "TradeTick" => TradeTick::decode(row).map(Self::from),
            "Ticker" => Ticker::decode(row).map(Self::from),
            "Bar" => Bar::decode(row).map(Self::from),
            "BinanceBar" => BinanceBar::decode(row).map(Self::from),
            "OrderBookDelta" => OrderBookDelta::decode(row).map(Self::from),
            "InstrumentClose" => InstrumentClose::decode(row).map(Self::from),
            "InstrumentStatusUpdate" => InstrumentStatusUpdate::decode(row).map(Self::from),
            "VenueStatusUpdate" => VenueStatusUpdate::decode(row).map(Self::from),
            "ComponentStateChanged" => ComponentStateChanged::decode(row).map(Self::from),
            "TradingStateChanged" => TradingStateChanged::decode(row).map(Self::from),
            "AccountState" => AccountState::decode(row).map(Self::from),
            "OrderInitialized" => OrderInitialized::decode(row).map(Self::from),
            "OrderDenied" => OrderDenied::decode(row).map(Self::from),
            "OrderSubmitted" => OrderSubmitted::decode(row).map(Self::from),
            "OrderUpdated" => OrderUpdated::decode(row).map(Self::from),
            "OrderFilled" => OrderFilled::decode(row).map(Self::from),
            "PositionOpened" => PositionOpened::decode(row).map(Self::from),
            "PositionChanged" => PositionChanged::decode(row).map(Self::from),
            "PositionClosed" => PositionClosed::decode(row).map(Self::from),
            "Equity" => Equity::decode(row).map(Self::from),
            "CurrencyPair" => CurrencyPair::decode(row).map(Self::from),
            "CryptoPerpetual" => CryptoPerpetual::decode(row).map(Self::from),
            "CryptoFuture" => CryptoFuture::decode(row).map(Self::from),
            "FuturesContract" => FuturesContract::decode(row).map(Self::from),
            "OptionsContract" => OptionsContract::decode(row).map(Self::from),
            "BettingInstrument" => BettingInstrument::decode(row).map(Self::from),
            other => Err(CodecError::UnknownRecordKind {
                type_tag: other.to_owned(),
            }),
        }
    }
}
