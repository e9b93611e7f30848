//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up IDs from different contexts. Construction and
//! parsing share one check, so an identifier that encodes always decodes:
//! blank values are rejected on both paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::shared::DomainError;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create an identifier, rejecting blank values.
            ///
            /// # Errors
            ///
            /// Returns [`DomainError`] when `value` is empty or whitespace.
            pub fn try_new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::invalid(
                        stringify!($name),
                        "identifier must not be empty",
                    ));
                }
                Ok(Self(value))
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::try_new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(TraderId, "Identifier for a trader instance (e.g. `TRADER-001`).");
define_id!(StrategyId, "Identifier for a trading strategy instance.");
define_id!(AccountId, "Identifier for a brokerage or venue account.");
define_id!(
    InstrumentId,
    "Identifier for a tradeable instrument (`SYMBOL.VENUE` or OCC symbol)."
);
define_id!(ClientOrderId, "Client-assigned order identifier.");
define_id!(VenueOrderId, "Venue-assigned order identifier.");
define_id!(TradeId, "Venue-assigned trade (match) identifier.");
define_id!(PositionId, "Identifier for a position.");
define_id!(OrderListId, "Identifier for a contingent order list.");
define_id!(ExecAlgorithmId, "Identifier for an execution algorithm.");
define_id!(
    BarType,
    "Bar specification string (`INSTRUMENT-STEP-AGGREGATION-PRICE-SOURCE`)."
);
define_id!(Currency, "ISO 4217 (or crypto) currency code.");
define_id!(Venue, "Trading venue (e.g. `XNAS`, `BINANCE`).");
define_id!(ComponentId, "Identifier of a running system component.");

/// Unique identifier for a domain event (a UUID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(Uuid);

impl EventId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn new(value: Uuid) -> Self {
        Self(value)
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for EventId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DomainError::invalid("EventId", e.to_string()))
    }
}
