use super::{price, quantity, timestamp};
use crate::codec::{CodecError, ColumnarRecord, RowReader};
use crate::domain::shared::{BookAction, OrderSide};
use crate::domain::{
    Bar, BinanceBar, InstrumentClose, InstrumentStatusUpdate, OrderBookDelta, QuoteTick, Ticker,
    TradeTick, VenueStatusUpdate,
};
use crate::policy::FieldValue;

impl ColumnarRecord for QuoteTick {
    fn type_tag(&self) -> &str {
        "QuoteTick"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "instrument_id" => FieldValue::text(&self.instrument_id),
            "bid" => price(self.bid),
            "bid_size" => quantity(self.bid_size),
            "ask" => price(self.ask),
            "ask_size" => quantity(self.ask_size),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            instrument_id: row.parse("instrument_id")?,
            bid: row.parse("bid")?,
            ask: row.parse("ask")?,
            bid_size: row.parse("bid_size")?,
            ask_size: row.parse("ask_size")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}

impl ColumnarRecord for TradeTick {
    fn type_tag(&self) -> &str {
        "TradeTick"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "instrument_id" => FieldValue::text(&self.instrument_id),
            "price" => price(self.price),
            "size" => quantity(self.size),
            "aggressor_side" => FieldValue::text(self.aggressor_side),
            "trade_id" => FieldValue::text(&self.trade_id),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            instrument_id: row.parse("instrument_id")?,
            price: row.parse("price")?,
            size: row.parse("size")?,
            aggressor_side: row.parse("aggressor_side")?,
            trade_id: row.parse("trade_id")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}

impl ColumnarRecord for Bar {
    fn type_tag(&self) -> &str {
        "Bar"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "bar_type" => FieldValue::text(&self.bar_type),
            "instrument_id" => FieldValue::text(&self.instrument_id),
            "open" => price(self.open),
            "high" => price(self.high),
            "low" => price(self.low),
            "close" => price(self.close),
            "volume" => quantity(self.volume),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            bar_type: row.parse("bar_type")?,
            instrument_id: row.parse("instrument_id")?,
            open: row.parse("open")?,
            high: row.parse("high")?,
            low: row.parse("low")?,
            close: row.parse("close")?,
            volume: row.parse("volume")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}

impl ColumnarRecord for OrderBookDelta {
    fn type_tag(&self) -> &str {
        "OrderBookDelta"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "instrument_id" => FieldValue::text(&self.instrument_id),
            "action" => self.action.as_u8().into(),
            "side" => self.side.as_u8().into(),
            "price" => price(self.price),
            "size" => quantity(self.size),
            "order_id" => self.order_id.into(),
            "flags" => self.flags.into(),
            "sequence" => self.sequence.into(),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        let action = BookAction::from_u8(row.uint8("action")?).map_err(|e| row.error("action", e))?;
        let side = OrderSide::from_u8(row.uint8("side")?).map_err(|e| row.error("side", e))?;
        Ok(Self {
            instrument_id: row.parse("instrument_id")?,
            action,
            side,
            price: row.parse("price")?,
            size: row.parse("size")?,
            order_id: row.uint64("order_id")?,
            flags: row.uint8("flags")?,
            sequence: row.uint64("sequence")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}

impl ColumnarRecord for InstrumentClose {
    fn type_tag(&self) -> &str {
        "InstrumentClose"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "instrument_id" => FieldValue::text(&self.instrument_id),
            "close_type" => FieldValue::text(self.close_type),
            "close_price" => price(self.close_price),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            instrument_id: row.parse("instrument_id")?,
            close_price: row.parse("close_price")?,
            close_type: row.parse("close_type")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}

impl ColumnarRecord for InstrumentStatusUpdate {
    fn type_tag(&self) -> &str {
        "InstrumentStatusUpdate"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "instrument_id" => FieldValue::text(&self.instrument_id),
            "status" => FieldValue::text(self.status),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            instrument_id: row.parse("instrument_id")?,
            status: row.parse("status")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}

impl ColumnarRecord for Ticker {
    fn type_tag(&self) -> &str {
        "Ticker"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "instrument_id" => FieldValue::text(&self.instrument_id),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            instrument_id: row.parse("instrument_id")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}

impl ColumnarRecord for BinanceBar {
    fn type_tag(&self) -> &str {
        "BinanceBar"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "quote_volume" => quantity(self.quote_volume),
            "count" => self.count.into(),
            "taker_buy_base_volume" => quantity(self.taker_buy_base_volume),
            "taker_buy_quote_volume" => quantity(self.taker_buy_quote_volume),
            _ => return self.bar.field_value(field),
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            bar: Bar::decode(row)?,
            quote_volume: row.parse("quote_volume")?,
            count: row.uint64("count")?,
            taker_buy_base_volume: row.parse("taker_buy_base_volume")?,
            taker_buy_quote_volume: row.parse("taker_buy_quote_volume")?,
        })
    }
}

impl ColumnarRecord for VenueStatusUpdate {
    fn type_tag(&self) -> &str {
        "VenueStatusUpdate"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "venue" => FieldValue::text(&self.venue),
            "status" => FieldValue::text(self.status),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            venue: row.parse("venue")?,
            status: row.parse("status")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}
