//! Candidate-key tables, one per canonical field.
//!
//! This module is the code form of the provider compatibility contract.
//! Order within a table is priority order. Supporting a new provider means
//! appending keys to the relevant table; removing or reordering keys changes
//! how already-stored payloads decode.
//!
//! Keys are case-sensitive. `Watts` and `power` are separate candidates.

use crate::resolver::{non_negative, positive, Candidate};
use crate::units;

fn mps_to_kmh(mps: f64) -> Option<f64> {
    Some(units::meters_per_second_to_kmh(mps))
}

fn positive_distance_km(raw: f64) -> Option<f64> {
    positive(raw).map(units::normalize_distance_km)
}

// ============================================================================
// Payload structure
// ============================================================================

pub const RECORDS_ARRAY: &[&str] = &["records", "record_data"];
pub const LAPS_ARRAY: &[&str] = &["laps", "all_laps"];
pub const ZONES: &[&str] = &["zones", "time_in_zones"];

// ============================================================================
// Records
// ============================================================================

pub const RECORD_TIMESTAMP: &[Candidate<f64>] =
    &[Candidate::timestamp("timestamp"), Candidate::timestamp("time")];

pub const RECORD_LATITUDE: &[Candidate<f64>] = &[
    Candidate::number("position_lat"),
    Candidate::number("lat"),
    Candidate::number("latitude"),
];

pub const RECORD_LONGITUDE: &[Candidate<f64>] = &[
    Candidate::number("position_long"),
    Candidate::number("lng"),
    Candidate::number("lon"),
    Candidate::number("longitude"),
];

pub const RECORD_DISTANCE: &[Candidate<f64>] = &[Candidate::number("distance")];

pub const RECORD_ALTITUDE: &[Candidate<f64>] = &[
    Candidate::number("altitude"),
    Candidate::number("enhanced_altitude"),
    Candidate::number("elevation"),
];

pub const RECORD_HEART_RATE: &[Candidate<f64>] = &[
    Candidate::number("heart_rate"),
    Candidate::number("hr"),
    Candidate::number("hr_value"),
];

pub const RECORD_CADENCE: &[Candidate<f64>] = &[
    Candidate::number("cadence"),
    Candidate::number("Cadence"),
    Candidate::number("cad"),
];

pub const RECORD_POWER: &[Candidate<f64>] =
    &[Candidate::number("power"), Candidate::number("Watts")];

/// Record speeds are m/s in every known export.
pub const RECORD_SPEED_KMH: &[Candidate<f64>] = &[
    Candidate::number_with("speed", mps_to_kmh),
    Candidate::number_with("enhanced_speed", mps_to_kmh),
    Candidate::number_with("Speed", mps_to_kmh),
];

pub const RECORD_TEMPERATURE: &[Candidate<f64>] = &[Candidate::number("temperature")];

pub const RECORD_LEFT_RIGHT_BALANCE: &[Candidate<f64>] =
    &[Candidate::number("left_right_balance")];
pub const RECORD_LEFT_TORQUE_EFFECTIVENESS: &[Candidate<f64>] =
    &[Candidate::number("left_torque_effectiveness")];
pub const RECORD_RIGHT_TORQUE_EFFECTIVENESS: &[Candidate<f64>] =
    &[Candidate::number("right_torque_effectiveness")];
pub const RECORD_LEFT_PEDAL_SMOOTHNESS: &[Candidate<f64>] =
    &[Candidate::number("left_pedal_smoothness")];
pub const RECORD_RIGHT_PEDAL_SMOOTHNESS: &[Candidate<f64>] =
    &[Candidate::number("right_pedal_smoothness")];

// ============================================================================
// Laps
// ============================================================================

pub const LAP_START_TIME: &[Candidate<f64>] = &[
    Candidate::timestamp("start_time"),
    Candidate::timestamp("timestamp"),
];

pub const LAP_DURATION: &[Candidate<f64>] = &[
    Candidate::number("duration"),
    Candidate::number("total_elapsed_time"),
];

pub const LAP_DISTANCE: &[Candidate<f64>] = &[
    Candidate::number("distance"),
    Candidate::number("total_distance"),
];

/// km/h-labeled field first, then m/s fields converted.
pub const LAP_AVG_SPEED_KMH: &[Candidate<f64>] = &[
    Candidate::number("avg_speed_kmh"),
    Candidate::number_with("avg_speed", mps_to_kmh),
    Candidate::number_with("enhanced_avg_speed", mps_to_kmh),
];

pub const LAP_MAX_SPEED_KMH: &[Candidate<f64>] = &[
    Candidate::number("max_speed_kmh"),
    Candidate::number_with("max_speed", mps_to_kmh),
    Candidate::number_with("enhanced_max_speed", mps_to_kmh),
];

pub const LAP_AVG_HEART_RATE: &[Candidate<f64>] = &[
    Candidate::number("avg_heart_rate"),
    Candidate::number("avg_hr"),
];

pub const LAP_MAX_HEART_RATE: &[Candidate<f64>] = &[
    Candidate::number("max_heart_rate"),
    Candidate::number("max_hr"),
];

/// Nested extension statistics, authoritative over the flat power fields.
pub const LAP_EXT_POWER_AVG_PATH: &[&str] = &["tpx_ext_stats", "Watts", "avg"];
pub const LAP_EXT_POWER_MAX_PATH: &[&str] = &["tpx_ext_stats", "Watts", "max"];

pub const LAP_AVG_POWER: &[Candidate<f64>] = &[Candidate::number("avg_power")];
pub const LAP_MAX_POWER: &[Candidate<f64>] = &[Candidate::number("max_power")];

pub const LAP_AVG_CADENCE: &[Candidate<f64>] = &[
    Candidate::number("avg_cadence"),
    Candidate::number("avg_running_cadence"),
];

pub const LAP_ASCENT: &[Candidate<f64>] = &[Candidate::number("total_ascent")];
pub const LAP_DESCENT: &[Candidate<f64>] = &[Candidate::number("total_descent")];
pub const LAP_CALORIES: &[Candidate<f64>] = &[Candidate::number("total_calories")];

// ============================================================================
// Summary
// ============================================================================

pub const SUMMARY_TOTAL_DURATION: &[Candidate<f64>] = &[
    Candidate::number_with("total_elapsed_time", non_negative),
    Candidate::number_with("elapsed_time", non_negative),
    Candidate::number_with("duration", non_negative),
];

/// Moving time is preferred over timer time: it excludes pauses.
pub const SUMMARY_MOVING_TIME: &[Candidate<f64>] = &[
    Candidate::number_with("moving_time", non_negative),
    Candidate::number_with("timer_time", non_negative),
    Candidate::number_with("total_timer_time", non_negative),
];

/// Resolved in kilometers, see [`units::normalize_distance_km`].
pub const SUMMARY_DISTANCE_KM: &[Candidate<f64>] = &[
    Candidate::number_with("distance", positive_distance_km),
    Candidate::number_with("distance_km", positive_distance_km),
    Candidate::number_with("total_distance", positive_distance_km),
];

pub const SUMMARY_ASCENT: &[Candidate<f64>] = &[
    Candidate::number("total_ascent"),
    Candidate::number("ascent"),
    Candidate::number("elevation_gain"),
];

pub const SUMMARY_DESCENT: &[Candidate<f64>] = &[
    Candidate::number("total_descent"),
    Candidate::number("descent"),
    Candidate::number("elevation_loss"),
];

/// Moving average first: it is the more informative figure.
pub const SUMMARY_AVG_SPEED_KMH: &[Candidate<f64>] = &[
    Candidate::number_with("avg_speed_moving_kmh", positive),
    Candidate::number_with("avg_speed_kmh", positive),
    Candidate::number_with("avg_speed", positive),
];

pub const SUMMARY_MAX_SPEED_KMH: &[Candidate<f64>] = &[
    Candidate::number_with("max_speed_kmh", positive),
    Candidate::number_with("max_speed", positive),
];

pub const SUMMARY_AVG_HEART_RATE: &[Candidate<f64>] = &[
    Candidate::number("avg_heart_rate"),
    Candidate::number("avg_hr"),
];

pub const SUMMARY_MIN_HEART_RATE: &[Candidate<f64>] = &[
    Candidate::number("min_heart_rate"),
    Candidate::number("min_hr"),
];

pub const SUMMARY_MAX_HEART_RATE: &[Candidate<f64>] = &[
    Candidate::number("max_heart_rate"),
    Candidate::number("max_hr"),
];

pub const SUMMARY_AVG_CADENCE: &[Candidate<f64>] = &[
    Candidate::number("avg_cadence"),
    Candidate::number("avg_running_cadence"),
];

pub const SUMMARY_MAX_CADENCE: &[Candidate<f64>] = &[
    Candidate::number("max_cadence"),
    Candidate::number("max_running_cadence"),
];

pub const SUMMARY_CALORIES: &[Candidate<f64>] = &[
    Candidate::number("total_calories"),
    Candidate::number("calories"),
];

pub const SUMMARY_AVG_ALTITUDE: &[Candidate<f64>] = &[
    Candidate::number("avg_altitude"),
    Candidate::number("enhanced_avg_altitude"),
];

pub const SUMMARY_MIN_ALTITUDE: &[Candidate<f64>] = &[
    Candidate::number("min_altitude"),
    Candidate::number("enhanced_min_altitude"),
];

pub const SUMMARY_MAX_ALTITUDE: &[Candidate<f64>] = &[
    Candidate::number("max_altitude"),
    Candidate::number("enhanced_max_altitude"),
];

pub const SUMMARY_AVG_TEMPERATURE: &[Candidate<f64>] = &[
    Candidate::number("avg_temperature"),
    Candidate::number("temperature"),
];

pub const SUMMARY_AVG_POWER: &[Candidate<f64>] = &[Candidate::number_with("avg_power", positive)];

pub const SUMMARY_MAX_POWER: &[Candidate<f64>] = &[Candidate::number_with("max_power", positive)];

pub const SUMMARY_NORMALIZED_POWER: &[Candidate<f64>] = &[
    Candidate::number_with("normalized_power", positive),
    Candidate::number_with("np_calculated", positive),
];

pub const SUMMARY_KILOJOULES: &[Candidate<f64>] = &[
    Candidate::number_with("kilojoules", positive),
    Candidate::number_with("kilojoules_calculated", positive),
];

/// Provider-computed score first; falls back to the device value when the
/// provider one is missing, zero or negative.
pub const SUMMARY_TRAINING_STRESS_SCORE: &[Candidate<f64>] = &[
    Candidate::number_with("training_stress_score", positive),
    Candidate::number_with("tss_device", positive),
];

pub const SUMMARY_INTENSITY_FACTOR: &[Candidate<f64>] = &[
    Candidate::number_with("intensity_factor", positive),
    Candidate::number_with("if_device", positive),
];

pub const SUMMARY_TRIMP: &[Candidate<f64>] = &[
    Candidate::number_with("trimp", positive),
    Candidate::number_with("trimp_calculated", positive),
];

// ============================================================================
// Activity envelope
// ============================================================================

pub const ACTIVITY_ID: &[Candidate<String>] =
    &[Candidate::text("id"), Candidate::text("activity_id")];
pub const ACTIVITY_USER_ID: &[Candidate<String>] = &[Candidate::text("user_id")];
pub const ACTIVITY_PROVIDER: &[Candidate<String>] =
    &[Candidate::text("provider"), Candidate::text("source")];
pub const ACTIVITY_NAME: &[Candidate<String>] =
    &[Candidate::text("name"), Candidate::text("title")];
pub const ACTIVITY_DATE: &[Candidate<String>] = &[
    Candidate::text("date"),
    Candidate::text("start_date"),
    Candidate::text("start_time"),
];
pub const ACTIVITY_SPORT: &[Candidate<String>] = &[
    Candidate::text("sport"),
    Candidate::text("sport_type"),
    Candidate::text("type"),
];
pub const ACTIVITY_NOTES: &[Candidate<String>] =
    &[Candidate::text("notes"), Candidate::text("description")];
pub const ACTIVITY_FILE_DATA: &[&str] = &["file_data", "fit_data"];
