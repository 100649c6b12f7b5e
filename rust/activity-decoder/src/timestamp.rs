//! Timestamp parsing for record, lap and activity dates.
//!
//! Exports disagree on how a point in time is written: epoch numbers, epoch
//! numbers inside strings, and several ISO-8601 dialects. Strategies are tried
//! in a fixed order and the first success wins.

use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

/// Offset-aware layouts, tried after RFC 3339. `%.f` also matches no fraction.
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Layouts without an offset; these are read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a raw timestamp value into Unix seconds (fractional).
///
/// Order: numeric epoch, numeric string, then date-time strings with or
/// without fractional seconds, with or without a timezone, with `T` or a
/// space between date and time.
pub fn parse_timestamp(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|t| t.is_finite()),
        Value::String(s) => parse_timestamp_str(s),
        _ => None,
    }
}

/// String form of [`parse_timestamp`].
pub fn parse_timestamp_str(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(epoch) = s.parse::<f64>() {
        return epoch.is_finite().then_some(epoch);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(to_unix_seconds(dt.timestamp(), dt.timestamp_subsec_nanos()));
    }

    // chrono's offset specifiers don't take a bare `Z`
    let zoned = match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        Some(stripped) => format!("{stripped}+00:00"),
        None => s.to_string(),
    };
    for format in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, format) {
            return Some(to_unix_seconds(dt.timestamp(), dt.timestamp_subsec_nanos()));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            let utc = naive.and_utc();
            return Some(to_unix_seconds(utc.timestamp(), utc.timestamp_subsec_nanos()));
        }
    }

    None
}

fn to_unix_seconds(seconds: i64, nanos: u32) -> f64 {
    seconds as f64 + f64::from(nanos) / 1e9
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // 2024-03-10T08:15:30Z
    const EPOCH: f64 = 1_710_058_530.0;

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-3)
    }

    #[test]
    fn test_numeric_epoch() {
        assert_eq!(parse_timestamp(&json!(1_710_058_530)), Some(EPOCH));
        assert_eq!(parse_timestamp(&json!(1_710_058_530.5)), Some(EPOCH + 0.5));
    }

    #[test]
    fn test_numeric_string() {
        assert_eq!(parse_timestamp(&json!("1710058530")), Some(EPOCH));
    }

    #[test]
    fn test_iso_variants() {
        let variants = [
            "2024-03-10T08:15:30Z",
            "2024-03-10T08:15:30.000Z",
            "2024-03-10T08:15:30+00:00",
            "2024-03-10T09:15:30+01:00",
            "2024-03-10T08:15:30",
            "2024-03-10T08:15:30.000",
            "2024-03-10 08:15:30",
            "2024-03-10 08:15:30Z",
            "2024-03-10 09:15:30+0100",
        ];
        for raw in variants {
            assert!(close(parse_timestamp_str(raw), EPOCH), "failed on {raw}");
        }
    }

    #[test]
    fn test_fractional_seconds_kept() {
        assert!(close(
            parse_timestamp_str("2024-03-10T08:15:30.250Z"),
            EPOCH + 0.25
        ));
        assert!(close(
            parse_timestamp_str("2024-03-10 08:15:30.750"),
            EPOCH + 0.75
        ));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_timestamp_str("yesterday"), None);
        assert_eq!(parse_timestamp_str(""), None);
        assert_eq!(parse_timestamp(&json!(null)), None);
        assert_eq!(parse_timestamp(&json!({"t": 1})), None);
    }
}
