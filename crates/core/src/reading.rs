//! Sensor reading constants and helpers.
//!
//! Readings are produced by the DHT sensor ingestion process; this service
//! only ever reads them back for the dashboard chart.

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Number of readings returned when the client does not ask for a limit.
pub const DEFAULT_READINGS_LIMIT: i64 = 50;

/// Upper bound on the number of readings returned in one response.
pub const MAX_READINGS_LIMIT: i64 = 1000;

/// Format used for the `date` field in reading payloads.
pub const READING_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Resolve the raw `limit` query parameter into a row count.
///
/// - absent, blank or non-integer: [`DEFAULT_READINGS_LIMIT`]
/// - negative: validation error
/// - above [`MAX_READINGS_LIMIT`] (including integers too large for `i64`): clamped
pub fn resolve_limit(raw: Option<&str>) -> Result<i64, CoreError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(DEFAULT_READINGS_LIMIT);
    };

    match raw.parse::<i64>() {
        Ok(n) if n < 0 => Err(CoreError::invalid_field(
            "limit",
            format!("must not be negative, got {n}"),
        )),
        Ok(n) => Ok(n.min(MAX_READINGS_LIMIT)),
        Err(_) if is_unsigned_integer(raw) => Ok(MAX_READINGS_LIMIT),
        Err(_) if raw.strip_prefix('-').is_some_and(is_unsigned_integer) => {
            Err(CoreError::invalid_field("limit", "must not be negative"))
        }
        Err(_) => Ok(DEFAULT_READINGS_LIMIT),
    }
}

fn is_unsigned_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Render a reading timestamp for the dashboard, or `""` when the row has none.
pub fn format_reading_date(date: Option<Timestamp>) -> String {
    date.map(|d| d.format(READING_DATE_FORMAT).to_string())
        .unwrap_or_default()
}
