use super::timestamp;
use crate::codec::{CodecError, ColumnarRecord, RowReader};
use crate::domain::{ComponentStateChanged, TradingStateChanged};
use crate::policy::FieldValue;

impl ColumnarRecord for ComponentStateChanged {
    fn type_tag(&self) -> &str {
        "ComponentStateChanged"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "trader_id" => FieldValue::text(&self.trader_id),
            "component_id" => FieldValue::text(&self.component_id),
            "component_type" => FieldValue::text(&self.component_type),
            "state" => FieldValue::text(self.state),
            "config" => FieldValue::Document(self.config.clone()),
            "event_id" => FieldValue::text(self.event_id),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            trader_id: row.parse("trader_id")?,
            component_id: row.parse("component_id")?,
            component_type: row.text("component_type")?.to_owned(),
            state: row.parse("state")?,
            config: row.document("config")?,
            event_id: row.parse("event_id")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}

impl ColumnarRecord for TradingStateChanged {
    fn type_tag(&self) -> &str {
        "TradingStateChanged"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "trader_id" => FieldValue::text(&self.trader_id),
            "state" => FieldValue::text(self.state),
            "config" => FieldValue::Document(self.config.clone()),
            "event_id" => FieldValue::text(self.event_id),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            trader_id: row.parse("trader_id")?,
            state: row.parse("state")?,
            config: row.document("config")?,
            event_id: row.parse("event_id")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}
