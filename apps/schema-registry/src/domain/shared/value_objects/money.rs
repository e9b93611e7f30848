//! Money value object: an amount denominated in a currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Currency;
use crate::domain::shared::DomainError;

/// A monetary amount in a specific currency.
///
/// The string form is `"<amount> <CURRENCY>"`, e.g. `"12.50 USD"`; it is the
/// form stored in commission and PnL columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create a new Money value.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// The amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(amount), Some(currency), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(DomainError::invalid(
                "money",
                format!("expected '<amount> <currency>', got '{s}'"),
            ));
        };

        let amount = Decimal::from_str(amount)
            .map_err(|e| DomainError::invalid("money", format!("'{amount}': {e}")))?;
        Ok(Self::new(amount, currency.parse()?))
    }
}
