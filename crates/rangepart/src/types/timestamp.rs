use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use derive_more::Deref;
use std::fmt;

///
/// Timestamp
/// (UTC, nanosecond resolution)
///

#[derive(Clone, Copy, Debug, Deref, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub const MIN: Self = Self(DateTime::<Utc>::MIN_UTC);
    pub const MAX: Self = Self(DateTime::<Utc>::MAX_UTC);

    /// Construct from whole seconds since the Unix epoch.
    #[must_use]
    pub fn from_seconds(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// Construct from nanoseconds since the Unix epoch.
    #[must_use]
    pub fn from_nanos(ns: i64) -> Self {
        Self(DateTime::from_timestamp_nanos(ns))
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, String> {
        let dt =
            DateTime::parse_from_rfc3339(s).map_err(|e| format!("timestamp parse error: {e}"))?;

        Ok(Self(dt.with_timezone(&Utc)))
    }

    /// Halfway point between `self` and `upper`, truncated toward `self`.
    ///
    /// Returns `self` when the two instants are less than two nanoseconds
    /// apart, and `None` when `upper` is not after `self`.
    #[must_use]
    pub fn midpoint(self, upper: Self) -> Option<Self> {
        if upper <= self {
            return None;
        }

        let half: TimeDelta = upper.0.signed_duration_since(self.0) / 2;

        self.0.checked_add_signed(half).map(Self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

///
/// TESTS
///
