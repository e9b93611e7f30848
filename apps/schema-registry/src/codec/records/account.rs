use super::{opt_text, timestamp};
use crate::codec::{CodecError, ColumnarRecord, RowReader};
use crate::domain::shared::AccountType;
use crate::domain::{AccountBalance, AccountState, MarginBalance};
use crate::policy::FieldValue;
use crate::registry::catalog::MARGIN_VARIANT_FIELDS;

impl ColumnarRecord for AccountState {
    fn type_tag(&self) -> &str {
        "AccountState"
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let margin = self.margin.as_ref();
        Some(match field {
            "account_id" => FieldValue::text(&self.account_id),
            "account_type" => FieldValue::text(self.account_type),
            "base_currency" => opt_text(self.base_currency.as_ref()),
            "balance_total" => self.balance.total.into(),
            "balance_locked" => self.balance.locked.into(),
            "balance_free" => self.balance.free.into(),
            "balance_currency" => FieldValue::text(&self.balance.currency),
            "margin_initial" => margin.map(|m| m.initial).into(),
            "margin_maintenance" => margin.map(|m| m.maintenance).into(),
            "margin_currency" => opt_text(margin.map(|m| &m.currency)),
            "margin_instrument_id" => opt_text(margin.map(|m| &m.instrument_id)),
            "reported" => self.reported.into(),
            "info" => FieldValue::Document(self.info.clone()),
            "event_id" => FieldValue::text(&self.event_id),
            "ts_event" => timestamp(self.ts_event),
            "ts_init" => timestamp(self.ts_init),
            _ => return None,
        })
    }

    fn decode(row: &RowReader<'_>) -> Result<Self, CodecError> {
        let account_type = row.parse("account_type")?;
        Ok(Self {
            account_id: row.parse("account_id")?,
            account_type,
            base_currency: row.opt_parse("base_currency")?,
            balance: AccountBalance {
                total: row.decimal("balance_total")?,
                locked: row.decimal("balance_locked")?,
                free: row.decimal("balance_free")?,
                currency: row.parse("balance_currency")?,
            },
            margin: read_margin(row, account_type)?,
            reported: row.boolean("reported")?,
            info: row.opt_document("info")?.unwrap_or_default(),
            event_id: row.parse("event_id")?,
            ts_event: row.timestamp("ts_event")?,
            ts_init: row.timestamp("ts_init")?,
        })
    }
}

/// Margin columns are all set or all null; a partial set is a broken row.
fn read_margin(
    row: &RowReader<'_>,
    account_type: AccountType,
) -> Result<Option<MarginBalance>, CodecError> {
    if MARGIN_VARIANT_FIELDS.iter().all(|f| row.is_null(f)) {
        return Ok(None);
    }
    if let Some(missing) = MARGIN_VARIANT_FIELDS.iter().find(|f| row.is_null(f)) {
        return Err(CodecError::MissingVariantField {
            type_tag: row.type_tag().to_owned(),
            field: (*missing).to_owned(),
            discriminant: format!("{account_type} margin balance"),
        });
    }
    Ok(Some(MarginBalance {
        initial: row.decimal("margin_initial")?,
        maintenance: row.decimal("margin_maintenance")?,
        currency: row.parse("margin_currency")?,
        instrument_id: row.parse("margin_instrument_id")?,
    }))
}
