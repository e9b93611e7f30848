use super::{opt_price, opt_quantity, opt_text, price, quantity, timestamp};
use crate::codec::record::FieldGroup;
use crate::codec::{CodecError, ColumnarRecord, RowReader};
use crate::domain::{
    BettingInstrument, CryptoFuture, CryptoPerpetual, CurrencyPair, Equity, FeeSchedule,
    FuturesContract, InstrumentCommon, OptionsContract, TradingLimits,
};
use crate::policy::FieldValue;

impl FieldGroup for InstrumentCommon {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "id" => FieldValue::text(&self.id),
            "raw_symbol" => FieldValue::text(&self.raw_symbol),
            "price_precision" => self.price_precision.into(),
            "size_precision" => self.size_precision.into(),
            "price_increment" => price(self.price_increment),
            "size_increment" => quantity(self.size_increment),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn read(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            id: row.parse("id")?,
            raw_symbol: row.text("raw_symbol")?.to_owned(),
            price_precision: row.uint8("price_precision")?,
            size_precision: row.uint8("size_precision")?,
            price_increment: row.parse("price_increment")?,
            size_increment: row.parse("size_increment")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}

impl FieldGroup for TradingLimits {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "max_quantity" => opt_quantity(self.max_quantity),
            "min_quantity" => opt_quantity(self.min_quantity),
            "max_notional" => opt_text(self.max_notional.as_ref()),
            "min_notional" => opt_text(self.min_notional.as_ref()),
            "max_price" => opt_price(self.max_price),
            "min_price" => opt_price(self.min_price),
            _ => return None,
        })
    }

    fn read(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            max_quantity: row.opt_parse("max_quantity")?,
            min_quantity: row.opt_parse("min_quantity")?,
            max_notional: row.opt_parse("max_notional")?,
            min_notional: row.opt_parse("min_notional")?,
            max_price: row.opt_parse("max_price")?,
            min_price: row.opt_parse("min_price")?,
        })
    }
}

impl FieldGroup for FeeSchedule {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "margin_init" => self.margin_init.into(),
            "margin_maint" => self.margin_maint.into(),
            "maker_fee" => self.maker_fee.into(),
            "taker_fee" => self.taker_fee.into(),
            _ => return None,
        })
    }

    fn read(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            margin_init: row.decimal("margin_init")?,
            margin_maint: row.decimal("margin_maint")?,
            maker_fee: row.decimal("maker_fee")?,
            taker_fee: row.decimal("taker_fee")?,
        })
    }
}

impl ColumnarRecord for Equity {
    fn type_tag(&self) -> &str {
        "Equity"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        if let Some(value) = self
            .common
            .field_value(field)
            .or_else(|| self.fees.field_value(field))
        {
            return Some(value);
        }
        Some(match field {
            "currency" => FieldValue::text(&self.currency),
            "multiplier" => quantity(self.multiplier),
            "lot_size" => opt_quantity(self.lot_size),
            "isin" => self.isin.clone().into(),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            common: InstrumentCommon::read(row)?,
            currency: row.parse("currency")?,
            multiplier: row.parse("multiplier")?,
            lot_size: row.opt_parse("lot_size")?,
            isin: row.opt_text("isin")?.map(str::to_owned),
            fees: FeeSchedule::read(row)?,
        })
    }
}

impl ColumnarRecord for CurrencyPair {
    fn type_tag(&self) -> &str {
        "CurrencyPair"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        if let Some(value) = self
            .common
            .field_value(field)
            .or_else(|| self.limits.field_value(field))
            .or_else(|| self.fees.field_value(field))
        {
            return Some(value);
        }
        Some(match field {
            "base_currency" => FieldValue::text(&self.base_currency),
            "quote_currency" => FieldValue::text(&self.quote_currency),
            "lot_size" => opt_quantity(self.lot_size),
            "info" => FieldValue::Document(self.info.clone()),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            common: InstrumentCommon::read(row)?,
            base_currency: row.parse("base_currency")?,
            quote_currency: row.parse("quote_currency")?,
            lot_size: row.opt_parse("lot_size")?,
            limits: TradingLimits::read(row)?,
            fees: FeeSchedule::read(row)?,
            info: row.opt_document("info")?.unwrap_or_default(),
        })
    }
}

impl ColumnarRecord for CryptoPerpetual {
    fn type_tag(&self) -> &str {
        "CryptoPerpetual"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        if let Some(value) = self
            .common
            .field_value(field)
            .or_else(|| self.limits.field_value(field))
            .or_else(|| self.fees.field_value(field))
        {
            return Some(value);
        }
        Some(match field {
            "base_currency" => FieldValue::text(&self.base_currency),
            "quote_currency" => FieldValue::text(&self.quote_currency),
            "settlement_currency" => FieldValue::text(&self.settlement_currency),
            "is_inverse" => self.is_inverse.into(),
            "info" => FieldValue::Document(self.info.clone()),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            common: InstrumentCommon::read(row)?,
            base_currency: row.parse("base_currency")?,
            quote_currency: row.parse("quote_currency")?,
            settlement_currency: row.parse("settlement_currency")?,
            is_inverse: row.boolean("is_inverse")?,
            limits: TradingLimits::read(row)?,
            fees: FeeSchedule::read(row)?,
            info: row.opt_document("info")?.unwrap_or_default(),
        })
    }
}

impl ColumnarRecord for FuturesContract {
    fn type_tag(&self) -> &str {
        "FuturesContract"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        if let Some(value) = self.common.field_value(field) {
            return Some(value);
        }
        Some(match field {
            "underlying" => FieldValue::text(&self.underlying),
            "asset_class" => FieldValue::text(self.asset_class),
            "currency" => FieldValue::text(&self.currency),
            "multiplier" => quantity(self.multiplier),
            "lot_size" => opt_quantity(self.lot_size),
            "expiry_date" => FieldValue::text(self.expiry_date),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            common: InstrumentCommon::read(row)?,
            underlying: row.text("underlying")?.to_owned(),
            asset_class: row.parse("asset_class")?,
            currency: row.parse("currency")?,
            multiplier: row.parse("multiplier")?,
            lot_size: row.opt_parse("lot_size")?,
            expiry_date: row.parse("expiry_date")?,
        })
    }
}

impl ColumnarRecord for OptionsContract {
    fn type_tag(&self) -> &str {
        "OptionsContract"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        if let Some(value) = self.common.field_value(field) {
            return Some(value);
        }
        Some(match field {
            "underlying" => FieldValue::text(&self.underlying),
            "asset_class" => FieldValue::text(self.asset_class),
            "currency" => FieldValue::text(&self.currency),
            "multiplier" => quantity(self.multiplier),
            "lot_size" => opt_quantity(self.lot_size),
            "expiry_date" => FieldValue::text(self.expiry_date),
            "strike_price" => price(self.strike_price),
            "kind" => FieldValue::text(self.kind),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            common: InstrumentCommon::read(row)?,
            underlying: row.text("underlying")?.to_owned(),
            asset_class: row.parse("asset_class")?,
            currency: row.parse("currency")?,
            multiplier: row.parse("multiplier")?,
            lot_size: row.opt_parse("lot_size")?,
            expiry_date: row.parse("expiry_date")?,
            strike_price: row.parse("strike_price")?,
            kind: row.parse("kind")?,
        })
    }
}

impl ColumnarRecord for CryptoFuture {
    fn type_tag(&self) -> &str {
        "CryptoFuture"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        if let Some(value) = self
            .common
            .field_value(field)
            .or_else(|| self.limits.field_value(field))
            .or_else(|| self.fees.field_value(field))
        {
            return Some(value);
        }
        Some(match field {
            "underlying" => FieldValue::text(&self.underlying),
            "quote_currency" => FieldValue::text(&self.quote_currency),
            "settlement_currency" => FieldValue::text(&self.settlement_currency),
            "expiry_date" => FieldValue::text(self.expiry_date),
            "info" => FieldValue::Document(self.info.clone()),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            common: InstrumentCommon::read(row)?,
            underlying: row.parse("underlying")?,
            quote_currency: row.parse("quote_currency")?,
            settlement_currency: row.parse("settlement_currency")?,
            expiry_date: row.parse("expiry_date")?,
            limits: TradingLimits::read(row)?,
            fees: FeeSchedule::read(row)?,
            info: row.opt_document("info")?.unwrap_or_default(),
        })
    }
}

impl ColumnarRecord for BettingInstrument {
    fn type_tag(&self) -> &str {
        "BettingInstrument"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        Some(match field {
            "id" => FieldValue::text(&self.id),
            "venue_name" => FieldValue::text(&self.venue_name),
            "currency" => FieldValue::text(&self.currency),
            "event_type_id" => FieldValue::text(&self.event_type_id),
            "event_type_name" => FieldValue::text(&self.event_type_name),
            "competition_id" => FieldValue::text(&self.competition_id),
            "competition_name" => FieldValue::text(&self.competition_name),
            "event_id" => FieldValue::text(&self.event_id),
            "event_name" => FieldValue::text(&self.event_name),
            "event_country_code" => FieldValue::text(&self.event_country_code),
            "event_open_date" => FieldValue::Text(self.event_open_date.to_rfc3339()),
            "betting_type" => FieldValue::text(&self.betting_type),
            "market_id" => FieldValue::text(&self.market_id),
            "market_name" => FieldValue::text(&self.market_name),
            "market_start_time" => FieldValue::Text(self.market_start_time.to_rfc3339()),
            "market_type" => FieldValue::text(&self.market_type),
            "selection_id" => FieldValue::text(&self.selection_id),
            "selection_name" => FieldValue::text(&self.selection_name),
            "selection_handicap" => self.selection_handicap.into(),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        let owned = |field: &str| row.text(field).map(str::to_owned);
        Ok(Self {
            id: row.parse("id")?,
            venue_name: owned("venue_name")?,
            currency: row.parse("currency")?,
            event_type_id: owned("event_type_id")?,
            event_type_name: owned("event_type_name")?,
            competition_id: owned("competition_id")?,
            competition_name: owned("competition_name")?,
            event_id: owned("event_id")?,
            event_name: owned("event_name")?,
            event_country_code: owned("event_country_code")?,
            event_open_date: row.parse("event_open_date")?,
            betting_type: owned("betting_type")?,
            market_id: owned("market_id")?,
            market_name: owned("market_name")?,
            market_start_time: row.parse("market_start_time")?,
            market_type: owned("market_type")?,
            selection_id: owned("selection_id")?,
            selection_name: owned("selection_name")?,
            selection_handicap: row.decimal("selection_handicap")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}
