//! Per-sample normalization.
//!
//! Each raw sample (one GPS/sensor tick) maps to exactly one
//! [`CanonicalRecord`]. Samples are never dropped here, even when nothing in
//! them resolves; filtering implausible points is left to the consumer.

use serde_json::Value;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::DecoderConfig;
use crate::fields;
use crate::resolver::{resolve, RawObject};
use crate::types::{CanonicalPosition, CanonicalRecord, CyclingDynamics};
use crate::units::normalize_coordinates;

/// Normalize one raw sample. Non-object samples become an empty record.
pub fn normalize_record(raw: &Value) -> CanonicalRecord {
    match raw.as_object() {
        Some(object) => normalize_record_object(object),
        None => CanonicalRecord::default(),
    }
}

fn normalize_record_object(object: &RawObject) -> CanonicalRecord {
    CanonicalRecord {
        timestamp_unix_seconds: resolve(object, fields::RECORD_TIMESTAMP),
        position: resolve_position(object),
        distance_meters: resolve(object, fields::RECORD_DISTANCE),
        altitude_meters: resolve(object, fields::RECORD_ALTITUDE),
        heart_rate_bpm: resolve(object, fields::RECORD_HEART_RATE),
        cadence_rpm: resolve(object, fields::RECORD_CADENCE),
        power_watts: resolve(object, fields::RECORD_POWER),
        speed_kmh: resolve(object, fields::RECORD_SPEED_KMH),
        temperature_celsius: resolve(object, fields::RECORD_TEMPERATURE),
        cycling_dynamics: resolve_dynamics(object),
    }
}

/// Latitude and longitude resolve independently, then convert as a pair.
/// A lone coordinate, or a pair out of range after conversion, is no position.
fn resolve_position(object: &RawObject) -> Option<CanonicalPosition> {
    let lat = resolve(object, fields::RECORD_LATITUDE)?;
    let lon = resolve(object, fields::RECORD_LONGITUDE)?;
    let (lat, lon) = normalize_coordinates(lat, lon)?;
    CanonicalPosition::new(lat, lon)
}

fn resolve_dynamics(object: &RawObject) -> Option<CyclingDynamics> {
    let dynamics = CyclingDynamics {
        left_right_balance: resolve(object, fields::RECORD_LEFT_RIGHT_BALANCE),
        left_torque_effectiveness: resolve(object, fields::RECORD_LEFT_TORQUE_EFFECTIVENESS),
        right_torque_effectiveness: resolve(object, fields::RECORD_RIGHT_TORQUE_EFFECTIVENESS),
        left_pedal_smoothness: resolve(object, fields::RECORD_LEFT_PEDAL_SMOOTHNESS),
        right_pedal_smoothness: resolve(object, fields::RECORD_RIGHT_PEDAL_SMOOTHNESS),
    };
    (!dynamics.is_empty()).then_some(dynamics)
}

/// Normalize a whole sample array, preserving order.
pub fn normalize_records(raw: &[Value], config: &DecoderConfig) -> Vec<CanonicalRecord> {
    if config.use_parallel(raw.len()) {
        return normalize_records_parallel(raw);
    }
    raw.iter().map(normalize_record).collect()
}

#[cfg(feature = "parallel")]
fn normalize_records_parallel(raw: &[Value]) -> Vec<CanonicalRecord> {
    log::debug!("[Records] Normalizing {} samples in parallel", raw.len());
    raw.par_iter().map(normalize_record).collect()
}

#[cfg(not(feature = "parallel"))]
fn normalize_records_parallel(raw: &[Value]) -> Vec<CanonicalRecord> {
    raw.iter().map(normalize_record).collect()
}
