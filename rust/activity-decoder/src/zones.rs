//! Training-zone normalization.
//!
//! Backends deliver time-in-zone data in two shapes:
//! - an array of zone entries, or
//! - an object keyed by metric family (`power`, `heart_rate`, ...), each
//!   holding an array of zone entries.
//!
//! Both end up as one list of [`CanonicalZone`], sorted by zone number.
//!
//! ## Example
//! ```rust
//! use activity_decoder::zones::resolve_zones;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "heart_rate": [{"zone": 1, "time": 600}],
//!     "power": [{"zoneNumber": 2, "timeSeconds": 300, "percent": 25},
//!               {"zoneNumber": 1, "timeSeconds": 900, "percent": 75}]
//! });
//! let zones = resolve_zones(&raw).unwrap();
//! assert_eq!(zones.len(), 2);
//! assert_eq!(zones[0].zone_number, 1);
//! ```

use log::debug;
use serde_json::Value;

use crate::resolver::{non_negative, resolve, Candidate, RawObject};
use crate::types::CanonicalZone;

/// Metric families in priority order. Power zones are preferred over
/// heart-rate zones when a payload carries both; a family with no usable
/// entry yields to the next one.
pub const ZONE_FAMILIES: &[&[&str]] = &[
    &["power", "power_zones"],
    &["heart_rate", "hr", "heart_rate_zones"],
    &["pace", "pace_zones"],
];

const ZONE_NUMBER: &[Candidate<i64>] =
    &[Candidate::integer("zone"), Candidate::integer("zoneNumber")];

const ZONE_TIME: &[Candidate<f64>] = &[
    Candidate::number_with("timeSeconds", non_negative),
    Candidate::number_with("time", non_negative),
];

const ZONE_PERCENTAGE: &[Candidate<f64>] = &[
    Candidate::number_with("percentage", percentage),
    Candidate::number_with("percent", percentage),
];

fn percentage(value: f64) -> Option<f64> {
    (0.0..=100.0).contains(&value).then_some(value)
}

/// Resolve zones from either supported shape.
///
/// Returns `None` when the shape is unrecognized or no valid entry remains.
pub fn resolve_zones(raw: &Value) -> Option<Vec<CanonicalZone>> {
    let zones = match raw {
        Value::Array(entries) => normalize_entries(entries),
        Value::Object(families) => select_family(families)?,
        _ => return None,
    };

    debug!("[Zones] Resolved {} zones", zones.len());

    (!zones.is_empty()).then_some(zones)
}

fn select_family(families: &RawObject) -> Option<Vec<CanonicalZone>> {
    ZONE_FAMILIES
        .iter()
        .flat_map(|aliases| aliases.iter())
        .filter_map(|key| families.get(*key).and_then(Value::as_array))
        .map(|entries| normalize_entries(entries))
        .find(|zones| !zones.is_empty())
}

struct RawZone {
    zone_number: u32,
    time_seconds: f64,
    percentage: Option<f64>,
}

fn parse_entry(entry: &Value) -> Option<RawZone> {
    let object = entry.as_object()?;
    let zone_number = resolve(object, ZONE_NUMBER)?;
    // Zone numbers are 1-based; 0 and negatives are placeholders
    if zone_number <= 0 {
        return None;
    }
    Some(RawZone {
        zone_number: u32::try_from(zone_number).ok()?,
        time_seconds: resolve(object, ZONE_TIME).unwrap_or(0.0),
        percentage: resolve(object, ZONE_PERCENTAGE),
    })
}

fn normalize_entries(entries: &[Value]) -> Vec<CanonicalZone> {
    let raw_zones: Vec<RawZone> = entries.iter().filter_map(parse_entry).collect();
    let total_time: f64 = raw_zones.iter().map(|z| z.time_seconds).sum();

    let mut zones: Vec<CanonicalZone> = raw_zones
        .into_iter()
        .map(|z| CanonicalZone {
            zone_number: z.zone_number,
            time_seconds: z.time_seconds,
            // Missing share is derived from time when the total is known
            percentage: z.percentage.unwrap_or_else(|| {
                if total_time > 0.0 {
                    z.time_seconds / total_time * 100.0
                } else {
                    0.0
                }
            }),
        })
        .collect();

    zones.sort_by_key(|z| z.zone_number);
    zones
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_shape() {
        let raw = json!([
            {"zone": 3, "timeSeconds": 120, "percentage": 20},
            {"zone": 1, "timeSeconds": 300, "percentage": 50},
            {"zone": 2, "timeSeconds": 180, "percentage": 30}
        ]);
        let zones = resolve_zones(&raw).unwrap();
        let numbers: Vec<u32> = zones.iter().map(|z| z.zone_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(zones[0].time_seconds, 300.0);
        assert_eq!(zones[0].percentage, 50.0);
    }

    #[test]
    fn test_power_family_preferred() {
        let raw = json!({
            "heart_rate": [
                {"zone": 1, "time": 1000, "percent": 100}
            ],
            "power": [
                {"zoneNumber": 2, "time": 200, "percent": 40},
                {"zoneNumber": 1, "time": 300, "percent": 60}
            ]
        });
        let zones = resolve_zones(&raw).unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].zone_number, 1);
        assert_eq!(zones[0].time_seconds, 300.0);
        assert_eq!(zones[1].percentage, 40.0);
    }

    #[test]
    fn test_heart_rate_family_when_no_power() {
        let raw = json!({"heart_rate": [{"zone": 4, "timeSeconds": 60, "percentage": 100}]});
        let zones = resolve_zones(&raw).unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].zone_number, 4);
    }

    #[test]
    fn test_empty_power_family_falls_back_to_heart_rate() {
        let hr = json!([{"zone": 1, "time": 60, "percent": 100}]);

        let zones = resolve_zones(&json!({"power": [], "heart_rate": hr})).unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].time_seconds, 60.0);

        let raw = json!({"power": [{"zone": 0}, "junk"], "heart_rate": hr});
        let zones = resolve_zones(&raw).unwrap();
        assert_eq!(zones[0].zone_number, 1);
        assert_eq!(zones[0].percentage, 100.0);
    }

    #[test]
    fn test_non_positive_zones_dropped() {
        let raw = json!([
            {"zone": 0, "timeSeconds": 50},
            {"zone": -1, "timeSeconds": 50},
            {"zone": 2, "timeSeconds": 50},
            "not a zone"
        ]);
        let zones = resolve_zones(&raw).unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].zone_number, 2);
    }

    #[test]
    fn test_missing_percentage_is_derived() {
        let raw = json!([
            {"zone": 1, "timeSeconds": 150},
            {"zone": 2, "timeSeconds": 450}
        ]);
        let zones = resolve_zones(&raw).unwrap();
        assert!((zones[0].percentage - 25.0).abs() < 1e-9);
        assert!((zones[1].percentage - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_values() {
        let raw = json!([{"zone": 1, "timeSeconds": -5, "percentage": 140}]);
        let zones = resolve_zones(&raw).unwrap();
        assert_eq!(zones[0].time_seconds, 0.0);
        assert_eq!(zones[0].percentage, 0.0);
    }

    #[test]
    fn test_unrecognized_shapes() {
        assert_eq!(resolve_zones(&json!("zones")), None);
        assert_eq!(resolve_zones(&json!({"cadence": []})), None);
        assert_eq!(resolve_zones(&json!([])), None);
        assert_eq!(resolve_zones(&json!([{"zone": 0}])), None);
    }
}
