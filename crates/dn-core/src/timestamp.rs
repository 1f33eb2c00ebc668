//! Tolerant codec for API timestamps.
//!
//! The API is inconsistent about dates: schedule windows and session bounds
//! arrive as RFC 3339 strings, naive date-times, Unix seconds, empty strings,
//! `null`, or Go's zero time. All of them decode to `Option<DateTime<Utc>>`,
//! with every "no value" form mapping to `None`.
//!
//! Use it on fields with `#[serde(default, with = "crate::timestamp")]`.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};
use thiserror::Error;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// A timestamp string that matched none of the accepted layouts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized timestamp: {value}")]
pub struct TimestampError {
    value: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Seconds(i64),
    FractionalSeconds(f64),
    Text(String),
}

/// Parses a textual timestamp.
///
/// Empty input and the zero time yield `Ok(None)`.
pub fn parse(text: &str) -> Result<Option<DateTime<Utc>>, TimestampError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(non_zero(dt.with_timezone(&Utc)));
    }
    if let Ok(dt) = DateTime::parse_from_str(text, OFFSET_FORMAT) {
        return Ok(non_zero(dt.with_timezone(&Utc)));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(non_zero(naive.and_utc()));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(non_zero(date.and_time(chrono::NaiveTime::MIN).and_utc()));
    }

    Err(TimestampError {
        value: text.to_string(),
    })
}

/// Converts Unix seconds; zero means "no value".
pub fn from_unix_seconds(secs: i64) -> Result<Option<DateTime<Utc>>, TimestampError> {
    if secs == 0 {
        return Ok(None);
    }
    DateTime::from_timestamp(secs, 0)
        .map(Some)
        .ok_or_else(|| TimestampError {
            value: secs.to_string(),
        })
}

/// Renders a timestamp the way it is sent back to the API.
pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// Go's `time.Time{}` serializes as 0001-01-01T00:00:00Z.
fn non_zero(dt: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if dt.year() <= 1 { None } else { Some(dt) }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    let parsed = match raw {
        None => Ok(None),
        Some(RawTimestamp::Seconds(secs)) => from_unix_seconds(secs),
        #[expect(
            clippy::cast_possible_truncation,
            reason = "sub-second precision is not carried by the API"
        )]
        Some(RawTimestamp::FractionalSeconds(secs)) => from_unix_seconds(secs.trunc() as i64),
        Some(RawTimestamp::Text(text)) => parse(&text),
    };
    parsed.map_err(de::Error::custom)
}

#[expect(
    clippy::ref_option,
    reason = "signature is dictated by serde(with = ...)"
)]
pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(dt) => serializer.serialize_str(&format(dt)),
        None => serializer.serialize_none(),
    }
}
