//! Quantity value object for order and position sizes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// A non-negative quantity (shares, contracts, or base units).
///
/// Backed by a `Decimal` so the scale the venue reported is kept exactly:
/// `"10.50"` displays as `"10.50"`, never `"10.5"` or `10.499999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Zero quantity.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Quantity from a Decimal.
    ///
    /// # Errors
    ///
    /// Returns error if the amount is negative.
    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::invalid(
                "quantity",
                format!("must not be negative: {amount}"),
            ));
        }
        Ok(Self(amount))
    }

    /// Create a Quantity from a whole number of units.
    #[must_use]
    pub fn from_u64(amount: u64) -> Self {
        Self(Decimal::from(amount))
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Number of decimal places carried.
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.0.scale()
    }

    /// Returns true if this quantity is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| DomainError::invalid("quantity", format!("'{s}': {e}")))?;
        Self::new(amount)
    }
}

impl From<Quantity> for Decimal {
    fn from(value: Quantity) -> Self {
        value.0
    }
}
