//! Nanosecond timestamp value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// Nanoseconds since the Unix epoch (UTC).
///
/// Used for both event time (`ts_event`, when the fact occurred) and
/// ingestion time (`ts_init`, when the system observed it).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UnixNanos(u64);

impl UnixNanos {
    /// Create a timestamp from a raw nanosecond count.
    #[must_use]
    pub const fn new(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Get the raw nanosecond count.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Convert from a UTC datetime.
    ///
    /// # Errors
    ///
    /// Returns error for datetimes before the epoch or beyond the range of
    /// a nanosecond `i64` (year 2262).
    pub fn from_datetime(dt: DateTime<Utc>) -> Result<Self, DomainError> {
        let nanos = dt.timestamp_nanos_opt().ok_or_else(|| {
            DomainError::invalid("timestamp", format!("{dt} out of nanosecond range"))
        })?;
        u64::try_from(nanos)
            .map(Self)
            .map_err(|_| DomainError::invalid("timestamp", format!("{dt} is before the epoch")))
    }

    /// Convert to a UTC datetime.
    #[must_use]
    pub fn to_datetime(&self) -> DateTime<Utc> {
        // u64 nanos beyond i64::MAX cannot come from `from_datetime`; saturate.
        let nanos = i64::try_from(self.0).unwrap_or(i64::MAX);
        DateTime::from_timestamp_nanos(nanos)
    }

    /// Format as RFC 3339 with nanosecond precision.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.to_datetime()
            .to_rfc3339_opts(chrono::SecondsFormat::Nanos, true)
    }
}

impl fmt::Display for UnixNanos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UnixNanos {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| DomainError::invalid("timestamp", format!("'{s}': {e}")))
    }
}

impl From<u64> for UnixNanos {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UnixNanos> for u64 {
    fn from(value: UnixNanos) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_nanos_from_datetime() {
        let dt = DateTime::parse_from_rfc3339("2024-01-19T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let ts = UnixNanos::from_datetime(dt).unwrap();
        assert_eq!(ts.as_u64(), 1_705_665_600_000_000_000);
        assert_eq!(ts.to_datetime(), dt);
    }

    #[test]
    fn unix_nanos_rejects_pre_epoch() {
        let dt = DateTime::parse_from_rfc3339("1969-12-31T23:59:59Z")
            .unwrap()
            .with_timezone(&Utc);
        assert!(UnixNanos::from_datetime(dt).is_err());
    }

    #[test]
    fn unix_nanos_rfc3339() {
        let ts = UnixNanos::new(1_500_000_000);
        assert_eq!(ts.to_rfc3339(), "1970-01-01T00:00:01.500000000Z");
    }

    #[test]
    fn unix_nanos_parse() {
        assert_eq!("42".parse::<UnixNanos>().unwrap(), UnixNanos::new(42));
        assert!("-1".parse::<UnixNanos>().is_err());
    }

    #[test]
    fn unix_nanos_ordering() {
        assert!(UnixNanos::new(1) < UnixNanos::new(2));
    }
}
