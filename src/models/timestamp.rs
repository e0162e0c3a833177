//! Timestamps as the backend may send them.
//!
//! Stored records carry their timestamp in one of several shapes depending on
//! how the backend serialized them. Everything funnels through
//! [`RawTimestamp::to_utc`] so the views only ever see a single instant type.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Text shown when a timestamp is missing or unreadable
pub const UNKNOWN_TIME: &str = "Unknown";

/// Timestamp in any of the encodings the backend produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    /// Serialized date-like timestamp object (`{_seconds, _nanoseconds}`)
    DateLike {
        #[serde(rename = "_seconds")]
        seconds: i64,
        #[serde(rename = "_nanoseconds", default)]
        nanoseconds: u32,
    },
    /// Epoch seconds wrapper (`{seconds}`), possibly fractional
    EpochSeconds {
        seconds: f64,
        #[serde(default)]
        nanoseconds: u32,
    },
    /// Date string (RFC 3339, RFC 2822 or a plain local date/time)
    Text(String),
    /// Epoch milliseconds
    EpochMillis(f64),
    /// Anything else
    Unknown(serde_json::Value),
}

impl RawTimestamp {
    /// Resolve to a UTC instant, or `None` if the value carries no usable time
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            RawTimestamp::DateLike {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(*seconds, *nanoseconds),
            RawTimestamp::EpochSeconds {
                seconds,
                nanoseconds,
            } if seconds.is_finite() => {
                let whole = seconds.floor();
                let fraction = ((seconds - whole) * 1e9).round() as i64;
                DateTime::from_timestamp(whole as i64, 0)?
                    .checked_add_signed(Duration::nanoseconds(fraction + i64::from(*nanoseconds)))
            }
            RawTimestamp::Text(text) => parse_text(text),
            RawTimestamp::EpochMillis(ms) if ms.is_finite() => {
                DateTime::from_timestamp_millis(*ms as i64)
            }
            RawTimestamp::EpochSeconds { .. }
            | RawTimestamp::EpochMillis(_)
            | RawTimestamp::Unknown(_) => None,
        }
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }

    // Offset-less values are local time, like the browser's date parser
    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Normalize an optional raw timestamp to a single instant
pub fn normalize(ts: Option<&RawTimestamp>) -> Option<DateTime<Utc>> {
    ts.and_then(RawTimestamp::to_utc)
}

/// Local date and time, or "Unknown"
pub fn format_date_time(ts: Option<&RawTimestamp>) -> String {
    normalize(ts)
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

/// Local wall-clock time of an instant
pub fn format_time_of_day(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%H:%M:%S").to_string()
}
