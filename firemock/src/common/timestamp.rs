use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Display;

/// A point in time with nanosecond precision, always in UTC.
///
/// Returned by `add` as the creation time and carried by snapshots as the
/// read time. Can also be stored as a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current wall-clock time.
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Timestamp(datetime)
    }

    /// Builds a timestamp from seconds and nanoseconds since the unix epoch.
    pub fn from_unix(seconds: i64, nanos: u32) -> Option<Self> {
        DateTime::from_timestamp(seconds, nanos).map(Timestamp)
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn seconds(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn nanos(&self) -> u32 {
        self.0.timestamp_subsec_nanos()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp(value)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}
