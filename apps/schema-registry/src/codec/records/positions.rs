use super::{price, quantity, timestamp};
use crate::codec::record::FieldGroup;
use crate::codec::{CodecError, ColumnarRecord, RowReader};
use crate::domain::{PositionChanged, PositionClosed, PositionOpened, PositionSnapshot};
use crate::policy::FieldValue;

impl FieldGroup for PositionSnapshot {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "trader_id" => FieldValue::text(&self.trader_id),
            "strategy_id" => FieldValue::text(&self.strategy_id),
            "instrument_id" => FieldValue::text(&self.instrument_id),
            "account_id" => FieldValue::text(&self.account_id),
            "position_id" => FieldValue::text(&self.position_id),
            "opening_order_id" => FieldValue::text(&self.opening_order_id),
            "entry" => FieldValue::text(self.entry),
            "side" => FieldValue::text(self.side),
            "signed_qty" => self.signed_qty.into(),
            "quantity" => quantity(self.quantity),
            "peak_qty" => quantity(self.peak_qty),
            "last_qty" => quantity(self.last_qty),
            "last_px" => price(self.last_px),
            "currency" => FieldValue::text(&self.currency),
            "avg_px_open" => self.avg_px_open.into(),
            "realized_pnl" => FieldValue::text(&self.realized_pnl),
            "event_id" => FieldValue::text(&self.event_id),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn read(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            trader_id: row.parse("trader_id")?,
            strategy_id: row.parse("strategy_id")?,
            instrument_id: row.parse("instrument_id")?,
            account_id: row.parse("account_id")?,
            position_id: row.parse("position_id")?,
            opening_order_id: row.parse("opening_order_id")?,
            entry: row.parse("entry")?,
            side: row.parse("side")?,
            signed_qty: row.decimal("signed_qty")?,
            quantity: row.parse("quantity")?,
            peak_qty: row.parse("peak_qty")?,
            last_qty: row.parse("last_qty")?,
            last_px: row.parse("last_px")?,
            currency: row.parse("currency")?,
            avg_px_open: row.float64("avg_px_open")?,
            realized_pnl: row.parse("realized_pnl")?,
            event_id: row.parse("event_id")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}

impl ColumnarRecord for PositionOpened {
    fn type_tag(&self) -> &str {
        "PositionOpened"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.snapshot.field_value(field)
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            snapshot: PositionSnapshot::read(row)?,
        })
    }
}

impl ColumnarRecord for PositionChanged {
    fn type_tag(&self) -> &str {
        "PositionChanged"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "avg_px_close" => self.avg_px_close.into(),
            "realized_return" => self.realized_return.into(),
            "unrealized_pnl" => FieldValue::text(&self.unrealized_pnl),
            "ts_opened" => timestamp(self.ts_opened),
            _ => return self.snapshot.field_value(field),
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            snapshot: PositionSnapshot::read(row)?,
            avg_px_close: row.opt_float64("avg_px_close")?,
            realized_return: row.float64("realized_return")?,
            unrealized_pnl: row.parse("unrealized_pnl")?,
            ts_opened: row.timestamp("ts_opened")?,
        })
    }
}

impl ColumnarRecord for PositionClosed {
    fn type_tag(&self) -> &str {
        "PositionClosed"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "closing_order_id" => FieldValue::text(&self.closing_order_id),
            "avg_px_close" => self.avg_px_close.into(),
            "realized_return" => self.realized_return.into(),
            "ts_opened" => timestamp(self.ts_opened),
            "ts_closed" => timestamp(self.ts_closed),
            "duration_ns" => self.duration_ns.into(),
            _ => return self.snapshot.field_value(field),
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            snapshot: PositionSnapshot::read(row)?,
            closing_order_id: row.parse("closing_order_id")?,
            avg_px_close: row.float64("avg_px_close")?,
            realized_return: row.float64("realized_return")?,
            ts_opened: row.timestamp("ts_opened")?,
            ts_closed: row.timestamp("ts_closed")?,
            duration_ns: row.uint64("duration_ns")?,
        })
    }
}
