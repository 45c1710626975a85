//! ISO date parsing shared by stored blobs and user input
//!
//! Dates are written as RFC 3339 timestamps. On the way in a bare
//! `YYYY-MM-DD` (midnight UTC) or a timestamp without an offset (taken as
//! UTC) is accepted too.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};

/// Parse an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS` or a bare date
pub fn parse_iso_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// `deserialize_with` helper for date fields
pub fn deserialize_iso_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_iso_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw)))
}
