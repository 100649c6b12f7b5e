//! Per-lap normalization.
//!
//! `ordinal_index` is left at 0 here. The assembler assigns it once
//! duplicates are gone, so indices stay dense.

use serde_json::Value;

use crate::fields;
use crate::resolver::{coerce_f64, lookup_path, resolve, Candidate, RawObject};
use crate::types::CanonicalLap;

/// Normalize one raw lap. Non-object laps become an empty lap.
pub fn normalize_lap(raw: &Value) -> CanonicalLap {
    match raw.as_object() {
        Some(object) => normalize_lap_object(object),
        None => CanonicalLap::default(),
    }
}

fn normalize_lap_object(object: &RawObject) -> CanonicalLap {
    CanonicalLap {
        ordinal_index: 0,
        start_time_unix_seconds: resolve(object, fields::LAP_START_TIME),
        distance_meters: resolve(object, fields::LAP_DISTANCE),
        duration_seconds: resolve(object, fields::LAP_DURATION),
        avg_speed_kmh: resolve(object, fields::LAP_AVG_SPEED_KMH),
        max_speed_kmh: resolve(object, fields::LAP_MAX_SPEED_KMH),
        avg_heart_rate_bpm: resolve(object, fields::LAP_AVG_HEART_RATE),
        max_heart_rate_bpm: resolve(object, fields::LAP_MAX_HEART_RATE),
        avg_power_watts: resolve_power(
            object,
            fields::LAP_EXT_POWER_AVG_PATH,
            fields::LAP_AVG_POWER,
        ),
        max_power_watts: resolve_power(
            object,
            fields::LAP_EXT_POWER_MAX_PATH,
            fields::LAP_MAX_POWER,
        ),
        avg_cadence_rpm: resolve(object, fields::LAP_AVG_CADENCE),
        ascent_meters: resolve(object, fields::LAP_ASCENT),
        descent_meters: resolve(object, fields::LAP_DESCENT),
        calories_kcal: resolve(object, fields::LAP_CALORIES),
    }
}

/// Nested extension statistics first, then the flat field, else absent.
fn resolve_power(
    object: &RawObject,
    nested_path: &[&str],
    flat: &[Candidate<f64>],
) -> Option<f64> {
    lookup_path(object, nested_path)
        .and_then(coerce_f64)
        .or_else(|| resolve(object, flat))
}

/// Normalize a lap array, preserving order. Duplicates are kept.
pub fn normalize_laps(raw: &[Value]) -> Vec<CanonicalLap> {
    raw.iter().map(normalize_lap).collect()
}
