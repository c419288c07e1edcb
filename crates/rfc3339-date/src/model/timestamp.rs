//! The RFC 3339 timestamp value.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;
use crate::util::datetime::{
    civil_datetime, format_datetime_rfc3339, parse_datetime_rfc3339, CivilDateTime,
};

/// An absolute instant together with the UTC offset it was written in.
///
/// A `Timestamp` can only be obtained from text that is strict RFC 3339, either
/// by parsing a string or by decoding JSON. Once constructed it is always valid,
/// and [`Display`](fmt::Display) renders it back as RFC 3339 without normalizing
/// the offset to UTC.
///
/// Equality, hashing and ordering consider both the instant and the offset:
/// `2023-06-15T14:30:00Z` and `2023-06-15T16:30:00+02:00` are the same instant
/// but different values. Ordering is by instant first, offset second.
///
/// ```rust
/// use rfc3339_date::Timestamp;
///
/// let ts: Timestamp = "2023-06-15T14:30:00+02:00".parse().unwrap();
/// assert_eq!(ts.to_string(), "2023-06-15T14:30:00+02:00");
/// assert_eq!(ts.offset_minutes(), 120);
///
/// assert!("2023-06-15 14:30:00Z".parse::<Timestamp>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
    /// Seconds since Unix epoch (UTC).
    seconds: i64,
    /// Nanoseconds within the second, `0..1_000_000_000`.
    nanos: u32,
    /// UTC offset in minutes.
    offset_min: i16,
}

impl Timestamp {
    /// Parses a strict RFC 3339 date-time.
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        let (seconds, nanos, offset_min) = parse_datetime_rfc3339(s)?;
        Ok(Self {
            seconds,
            nanos,
            offset_min,
        })
    }

    /// Renders the canonical RFC 3339 form.
    pub fn to_rfc3339(&self) -> String {
        format_datetime_rfc3339(self.seconds, self.nanos, self.offset_min)
    }

    /// Whole seconds since 1970-01-01T00:00:00Z.
    pub fn unix_seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanoseconds past [`unix_seconds`](Self::unix_seconds).
    pub fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    /// UTC offset in minutes, east positive.
    pub fn offset_minutes(&self) -> i16 {
        self.offset_min
    }

    fn civil(&self) -> CivilDateTime {
        civil_datetime(self.seconds, self.offset_min)
    }

    pub fn year(&self) -> i32 {
        self.civil().year
    }

    pub fn month(&self) -> u8 {
        self.civil().month
    }

    pub fn day(&self) -> u8 {
        self.civil().day
    }

    pub fn hour(&self) -> u8 {
        self.civil().hour
    }

    pub fn minute(&self) -> u8 {
        self.civil().minute
    }

    pub fn second(&self) -> u8 {
        self.civil().second
    }

    pub fn nanosecond(&self) -> u32 {
        self.nanos
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl FromStr for Timestamp {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = FormatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.to_rfc3339()
    }
}
