//! Duplicate lap removal.
//!
//! Some providers emit the same physical lap twice (a manual lap marker and
//! an automatic one) with identical summary statistics. Laps are compared on
//! `(distance, duration, avg heart rate, avg speed, start time)` with absent
//! values read as 0; the first lap with a given key is kept.
//!
//! Two genuinely different laps matching on all five values would also be
//! collapsed. The key is kept as-is for compatibility with stored data.

use std::collections::HashSet;

use crate::types::CanonicalLap;

type LapKey = [u64; 5];

fn key_part(value: Option<f64>) -> u64 {
    let v = value.unwrap_or(0.0);
    // -0.0 and 0.0 must compare equal
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

fn lap_key(lap: &CanonicalLap) -> LapKey {
    [
        key_part(lap.distance_meters),
        key_part(lap.duration_seconds),
        key_part(lap.avg_heart_rate_bpm),
        key_part(lap.avg_speed_kmh),
        key_part(lap.start_time_unix_seconds),
    ]
}

/// Remove laps whose key matches an earlier lap. Order is preserved.
pub fn deduplicate_laps(laps: Vec<CanonicalLap>) -> Vec<CanonicalLap> {
    let mut seen: HashSet<LapKey> = HashSet::with_capacity(laps.len());
    laps.into_iter()
        .filter(|lap| seen.insert(lap_key(lap)))
        .collect()
}
