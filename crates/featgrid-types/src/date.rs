//! Calendar dates attached to feature records.
//!
//! Upstream data carries dates in two shapes: plain `YYYY-MM-DD` strings and
//! full RFC 3339 timestamps. [`FeatureDate`] accepts both on input and always
//! renders the calendar date as `YYYY-MM-DD`, so stored and computed dates
//! format identically.
//!
//! Malformed date strings are rejected at deserialization time. Code past
//! that boundary works with validated dates only.

use std::fmt;

use chrono::{DateTime, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a date string matches neither accepted shape.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid feature date {input:?}: expected YYYY-MM-DD or an RFC 3339 timestamp")]
pub struct DateParseError {
    /// The rejected input.
    pub input: String,
}

/// A calendar date on a feature record.
///
/// # Example
///
/// ```rust
/// use featgrid_types::FeatureDate;
///
/// let plain = FeatureDate::parse("2000-10-12").unwrap();
/// let stamped = FeatureDate::parse("2000-10-12T00:00:00.000Z").unwrap();
/// assert_eq!(plain, stamped);
/// assert_eq!(plain.to_string(), "2000-10-12");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureDate(NaiveDate);

impl FeatureDate {
    /// Wraps an already-validated calendar date.
    pub fn new(date: NaiveDate) -> Self {
        FeatureDate(date)
    }

    /// Parses a `YYYY-MM-DD` string or an RFC 3339 timestamp.
    ///
    /// Timestamps resolve to their UTC calendar date.
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return Ok(FeatureDate(date));
        }
        DateTime::parse_from_rfc3339(input)
            .map(|dt| FeatureDate(dt.naive_utc().date()))
            .map_err(|_| DateParseError {
                input: input.to_string(),
            })
    }

    /// The underlying calendar date.
    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// This date shifted forward by whole calendar months.
    ///
    /// Month arithmetic is delegated to chrono: the day-of-month is kept
    /// unless the target month is shorter, in which case it clamps to the
    /// month's last day. Returns `None` only if the result falls outside
    /// chrono's representable range.
    pub fn plus_months(self, months: u32) -> Option<FeatureDate> {
        self.0.checked_add_months(Months::new(months)).map(FeatureDate)
    }
}

impl From<NaiveDate> for FeatureDate {
    fn from(date: NaiveDate) -> Self {
        FeatureDate(date)
    }
}

impl fmt::Display for FeatureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for FeatureDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FeatureDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        FeatureDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = FeatureDate::parse("2015-07-29").unwrap();
        assert_eq!(date.to_string(), "2015-07-29");
    }

    #[test]
    fn test_parse_rfc3339_timestamp() {
        let date = FeatureDate::parse("2000-10-12T00:00:00.000Z").unwrap();
        assert_eq!(date.to_string(), "2000-10-12");
    }

    #[test]
    fn test_plain_and_timestamp_agree() {
        let plain = FeatureDate::parse("2000-10-12").unwrap();
        let stamped = FeatureDate::parse("2000-10-12T00:00:00.000Z").unwrap();
        assert_eq!(plain, stamped);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let err = FeatureDate::parse("29/07/2015").unwrap_err();
        assert_eq!(err.input, "29/07/2015");
        assert!(FeatureDate::parse("").is_err());
        assert!(FeatureDate::parse("2015-13-01").is_err());
    }

    #[test]
    fn test_plus_months_year_rollover() {
        let low = FeatureDate::parse("2015-07-29").unwrap();
        let high = low.plus_months(30).unwrap();
        assert_eq!(high.to_string(), "2018-01-29");
    }

    #[test]
    fn test_plus_months_preserves_day() {
        let low = FeatureDate::parse("2022-11-30").unwrap();
        assert_eq!(low.plus_months(30).unwrap().to_string(), "2025-05-30");
    }

    #[test]
    fn test_plus_months_clamps_short_month() {
        // 2014-12-31 + 30 months lands in June, which has 30 days.
        let low = FeatureDate::parse("2014-12-31").unwrap();
        assert_eq!(low.plus_months(30).unwrap().to_string(), "2017-06-30");
    }

    #[test]
    fn test_serde_round_trip() {
        let date = FeatureDate::parse("2018-01-29").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2018-01-29\"");
        let back: FeatureDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }

    #[test]
    fn test_deserialize_timestamp_form() {
        let date: FeatureDate = serde_json::from_str("\"2000-10-12T00:00:00.000Z\"").unwrap();
        assert_eq!(date.to_string(), "2000-10-12");
    }
}
