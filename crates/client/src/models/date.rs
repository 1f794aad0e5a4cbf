//! Timestamp type for log and response-time entries.
//!
//! The API renders timestamps in the account's timezone without an offset,
//! usually as `MM/DD/YYYY HH:MM:SS`. Some responses use a two-digit year
//! instead (`MM/DD/YY HH:MM:SS`); both are accepted. Output always uses the
//! four-digit form.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Primary wire format.
pub const DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Fallback wire format with a two-digit year.
pub const SHORT_YEAR_DATE_FORMAT: &str = "%m/%d/%y %H:%M:%S";

/// Format of the `responseTimesStartDate` / `responseTimesEndDate` parameters.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{input}': expected MM/DD/YYYY HH:MM:SS or MM/DD/YY HH:MM:SS")]
pub struct DateParseError {
    pub input: String,
}

/// Account-local timestamp as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UptimeRobotDate(pub NaiveDateTime);

impl UptimeRobotDate {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }
}

/// `%Y` happily reads "06" as year 6, so the four-digit form is only tried
/// when the year field really has four digits.
fn has_four_digit_year(input: &str) -> bool {
    input
        .split_whitespace()
        .next()
        .and_then(|date| date.rsplit('/').next())
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

impl FromStr for UptimeRobotDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let parsed = if has_four_digit_year(input) {
            NaiveDateTime::parse_from_str(input, DATE_FORMAT).ok()
        } else {
            // chrono pivots two-digit years at 70; the API treats 69 as 1969.
            NaiveDateTime::parse_from_str(input, SHORT_YEAR_DATE_FORMAT)
                .ok()
                .and_then(|dt| {
                    if dt.year() == 2069 {
                        dt.with_year(1969)
                    } else {
                        Some(dt)
                    }
                })
        };

        parsed.map(Self).ok_or_else(|| DateParseError {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for UptimeRobotDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl From<NaiveDateTime> for UptimeRobotDate {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl From<UptimeRobotDate> for NaiveDateTime {
    fn from(value: UptimeRobotDate) -> Self {
        value.0
    }
}

impl Serialize for UptimeRobotDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UptimeRobotDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
