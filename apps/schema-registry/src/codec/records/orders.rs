use super::{opt_price, opt_quantity, opt_text, opt_timestamp, price, quantity, timestamp};
use crate::codec::record::FieldGroup;
use crate::codec::{CodecError, ColumnarRecord, RowReader};
use crate::domain::shared::{ClientOrderId, OrderType, TimeInForce};
use crate::domain::{
    OrderDenied, OrderEventHeader, OrderFilled, OrderInitialized, OrderKind, OrderKindParts,
    OrderRejection, OrderStatusChanged, OrderStatusKind, OrderSubmitted, OrderUpdated,
    RejectionKind,
};
use crate::policy::FieldValue;

impl FieldGroup for OrderEventHeader {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "trader_id" => FieldValue::text(&self.trader_id),
            "strategy_id" => FieldValue::text(&self.strategy_id),
            "instrument_id" => FieldValue::text(&self.instrument_id),
            "client_order_id" => FieldValue::text(&self.client_order_id),
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
            client_order_id: row.parse("client_order_id")?,
            event_id: row.parse("event_id")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}

// ============================================================================
// OrderInitialized
// ============================================================================

impl OrderInitialized {
    fn variant_value(&self, field: &str) -> Option<FieldValue> {
        let parts = self.kind.parts();
        Some(match field {
            "price" => opt_price(parts.price),
            "trigger_price" => opt_price(parts.trigger_price),
            "trigger_type" => opt_text(parts.trigger_type),
            "limit_offset" => parts.limit_offset.into(),
            "trailing_offset" => parts.trailing_offset.into(),
            "trailing_offset_type" => opt_text(parts.trailing_offset_type),
            "display_qty" => opt_quantity(parts.display_qty),
            "expire_time_ns" => opt_timestamp(self.expire_time),
            _ => return None,
        })
    }
}

impl ColumnarRecord for OrderInitialized {
    fn type_tag(&self) -> &str {
        "OrderInitialized"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        if let Some(value) = self.header.field_value(field) {
            return Some(value);
        }
        if let Some(value) = self.variant_value(field) {
            return Some(value);
        }
        Some(match field {
            "order_side" => FieldValue::text(self.order_side),
            "order_type" => FieldValue::text(self.order_type()),
            "quantity" => quantity(self.quantity),
            "time_in_force" => FieldValue::text(self.time_in_force),
            "post_only" => self.post_only.into(),
            "reduce_only" => self.reduce_only.into(),
            "emulation_trigger" => opt_text(self.emulation_trigger),
            "contingency_type" => opt_text(self.contingency_type),
            "order_list_id" => opt_text(self.order_list_id.as_ref()),
            "linked_order_ids" => linked_ids(&self.linked_order_ids),
            "parent_order_id" => opt_text(self.parent_order_id.as_ref()),
            "exec_algorithm_id" => opt_text(self.exec_algorithm_id.as_ref()),
            "exec_algorithm_params" => self.exec_algorithm_params.clone().into(),
            "exec_spawn_id" => opt_text(self.exec_spawn_id.as_ref()),
            "tags" => self.tags.clone().into(),
            "reconciliation" => self.reconciliation.into(),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        let order_type: OrderType = row.parse("order_type")?;
        let parts = OrderKindParts {
            price: row.opt_parse("price")?,
            trigger_price: row.opt_parse("trigger_price")?,
            trigger_type: row.opt_parse("trigger_type")?,
            limit_offset: row.opt_decimal("limit_offset")?,
            trailing_offset: row.opt_decimal("trailing_offset")?,
            trailing_offset_type: row.opt_parse("trailing_offset_type")?,
            display_qty: row.opt_parse("display_qty")?,
        };
        let kind = OrderKind::from_parts(order_type, &parts)
            .map_err(|e| CodecError::from_domain(row.type_tag(), "order_type", e))?;

        let time_in_force: TimeInForce = row.parse("time_in_force")?;
        let expire_time = row.opt_timestamp("expire_time_ns")?;
        if time_in_force == TimeInForce::Gtd && expire_time.is_none() {
            return Err(CodecError::MissingVariantField {
                type_tag: row.type_tag().to_owned(),
                field: "expire_time_ns".to_owned(),
                discriminant: time_in_force.to_string(),
            });
        }

        Ok(Self {
            header: OrderEventHeader::read(row)?,
            order_side: row.parse("order_side")?,
            quantity: row.parse("quantity")?,
            time_in_force,
            kind,
            expire_time,
            post_only: row.boolean("post_only")?,
            reduce_only: row.boolean("reduce_only")?,
            emulation_trigger: row.opt_parse("emulation_trigger")?,
            contingency_type: row.opt_parse("contingency_type")?,
            order_list_id: row.opt_parse("order_list_id")?,
            linked_order_ids: read_linked_ids(row, "linked_order_ids")?,
            parent_order_id: row.opt_parse("parent_order_id")?,
            exec_algorithm_id: row.opt_parse("exec_algorithm_id")?,
            exec_algorithm_params: row.opt_document("exec_algorithm_params")?,
            exec_spawn_id: row.opt_parse("exec_spawn_id")?,
            tags: row.opt_text("tags")?.map(str::to_owned),
            reconciliation: row.boolean("reconciliation")?,
        })
    }
}

fn linked_ids(ids: &[ClientOrderId]) -> FieldValue {
    if ids.is_empty() {
        return FieldValue::Null;
    }
    FieldValue::List(ids.iter().map(ToString::to_string).collect())
}

fn read_linked_ids(row: &RowReader<'_>, field: &str) -> Result<Vec<ClientOrderId>, CodecError> {
    row.opt_list(field)?
        .into_iter()
        .map(|id| ClientOrderId::try_new(id).map_err(|e| row.error(field, e)))
        .collect()
}

// ============================================================================
// Lifecycle Events
// ============================================================================

impl ColumnarRecord for OrderDenied {
    fn type_tag(&self) -> &str {
        "OrderDenied"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "reason" => Some(FieldValue::text(&self.reason)),
            _ => self.header.field_value(field),
        }
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            header: OrderEventHeader::read(row)?,
            reason: row.text("reason")?.to_owned(),
        })
    }
}

impl ColumnarRecord for OrderSubmitted {
    fn type_tag(&self) -> &str {
        "OrderSubmitted"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "account_id" => Some(FieldValue::text(&self.account_id)),
            _ => self.header.field_value(field),
        }
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            header: OrderEventHeader::read(row)?,
            account_id: row.parse("account_id")?,
        })
    }
}

impl ColumnarRecord for OrderStatusChanged {
    fn type_tag(&self) -> &str {
        self.kind.type_tag()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "account_id" => FieldValue::text(&self.account_id),
            "venue_order_id" => opt_text(self.venue_order_id.as_ref()),
            "reconciliation" => self.reconciliation.into(),
            _ => return self.header.field_value(field),
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        let kind = OrderStatusKind::from_type_tag(row.type_tag()).ok_or_else(|| {
            CodecError::UnknownRecordKind {
                type_tag: row.type_tag().to_owned(),
            }
        })?;
        Ok(Self {
            kind,
            header: OrderEventHeader::read(row)?,
            account_id: row.parse("account_id")?,
            venue_order_id: row.opt_parse("venue_order_id")?,
            reconciliation: row.boolean("reconciliation")?,
        })
    }
}

impl ColumnarRecord for OrderRejection {
    fn type_tag(&self) -> &str {
        self.kind.type_tag()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "account_id" => FieldValue::text(&self.account_id),
            "venue_order_id" if self.kind.has_venue_order_id() => {
                opt_text(self.venue_order_id.as_ref())
            }
            "reason" => FieldValue::text(&self.reason),
            "reconciliation" => self.reconciliation.into(),
            _ => return self.header.field_value(field),
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        let kind = RejectionKind::from_type_tag(row.type_tag()).ok_or_else(|| {
            CodecError::UnknownRecordKind {
                type_tag: row.type_tag().to_owned(),
            }
        })?;
        let venue_order_id = if kind.has_venue_order_id() {
            row.opt_parse("venue_order_id")?
        } else {
            None
        };
        Ok(Self {
            kind,
            header: OrderEventHeader::read(row)?,
            account_id: row.parse("account_id")?,
            venue_order_id,
            reason: row.text("reason")?.to_owned(),
            reconciliation: row.boolean("reconciliation")?,
        })
    }
}

impl ColumnarRecord for OrderUpdated {
    fn type_tag(&self) -> &str {
        "OrderUpdated"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "account_id" => FieldValue::text(&self.account_id),
            "venue_order_id" => opt_text(self.venue_order_id.as_ref()),
            "price" => opt_price(self.price),
            "quantity" => quantity(self.quantity),
            "trigger_price" => opt_price(self.trigger_price),
            "reconciliation" => self.reconciliation.into(),
            _ => return self.header.field_value(field),
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            header: OrderEventHeader::read(row)?,
            account_id: row.parse("account_id")?,
            venue_order_id: row.opt_parse("venue_order_id")?,
            quantity: row.parse("quantity")?,
            price: row.opt_parse("price")?,
            trigger_price: row.opt_parse("trigger_price")?,
            reconciliation: row.boolean("reconciliation")?,
        })
    }
}

impl ColumnarRecord for OrderFilled {
    fn type_tag(&self) -> &str {
        "OrderFilled"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "account_id" => FieldValue::text(&self.account_id),
            "venue_order_id" => FieldValue::text(&self.venue_order_id),
            "trade_id" => FieldValue::text(&self.trade_id),
            "position_id" => opt_text(self.position_id.as_ref()),
            "order_side" => FieldValue::text(self.order_side),
            "order_type" => FieldValue::text(self.order_type),
            "last_qty" => quantity(self.last_qty),
            "last_px" => price(self.last_px),
            "currency" => FieldValue::text(&self.currency),
            "commission" => opt_text(self.commission.as_ref()),
            "liquidity_side" => FieldValue::text(self.liquidity_side),
            "info" => FieldValue::Document(self.info.clone()),
            "reconciliation" => self.reconciliation.into(),
            _ => return self.header.field_value(field),
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            header: OrderEventHeader::read(row)?,
            account_id: row.parse("account_id")?,
            venue_order_id: row.parse("venue_order_id")?,
            trade_id: row.parse("trade_id")?,
            position_id: row.opt_parse("position_id")?,
            order_side: row.parse("order_side")?,
            order_type: row.parse("order_type")?,
            last_qty: row.parse("last_qty")?,
            last_px: row.parse("last_px")?,
            currency: row.parse("currency")?,
            commission: row.opt_parse("commission")?,
            liquidity_side: row.parse("liquidity_side")?,
            info: row.opt_document("info")?.unwrap_or_default(),
            reconciliation: row.boolean("reconciliation")?,
        })
    }
}
