//! Top-level summary scalars of an activity payload.

use crate::fields;
use crate::resolver::{resolve, RawObject};
use crate::types::ActivityFileData;

/// Resolve every summary scalar into `data`. Sequences are left untouched.
pub fn apply_summary(object: &RawObject, data: &mut ActivityFileData) {
    data.total_duration_seconds = resolve(object, fields::SUMMARY_TOTAL_DURATION);
    data.moving_time_seconds = resolve(object, fields::SUMMARY_MOVING_TIME);
    data.distance_km = resolve(object, fields::SUMMARY_DISTANCE_KM);
    data.ascent_meters = resolve(object, fields::SUMMARY_ASCENT);
    data.descent_meters = resolve(object, fields::SUMMARY_DESCENT);

    data.avg_speed_kmh = resolve(object, fields::SUMMARY_AVG_SPEED_KMH);
    data.max_speed_kmh = resolve(object, fields::SUMMARY_MAX_SPEED_KMH);

    data.avg_heart_rate_bpm = resolve(object, fields::SUMMARY_AVG_HEART_RATE);
    data.min_heart_rate_bpm = resolve(object, fields::SUMMARY_MIN_HEART_RATE);
    data.max_heart_rate_bpm = resolve(object, fields::SUMMARY_MAX_HEART_RATE);

    data.avg_cadence_rpm = resolve(object, fields::SUMMARY_AVG_CADENCE);
    data.max_cadence_rpm = resolve(object, fields::SUMMARY_MAX_CADENCE);

    data.calories_kcal = resolve(object, fields::SUMMARY_CALORIES);

    data.avg_altitude_meters = resolve(object, fields::SUMMARY_AVG_ALTITUDE);
    data.min_altitude_meters = resolve(object, fields::SUMMARY_MIN_ALTITUDE);
    data.max_altitude_meters = resolve(object, fields::SUMMARY_MAX_ALTITUDE);
    data.avg_temperature_celsius = resolve(object, fields::SUMMARY_AVG_TEMPERATURE);

    data.avg_power_watts = resolve(object, fields::SUMMARY_AVG_POWER);
    data.max_power_watts = resolve(object, fields::SUMMARY_MAX_POWER);
    data.normalized_power_watts = resolve(object, fields::SUMMARY_NORMALIZED_POWER);
    data.kilojoules = resolve(object, fields::SUMMARY_KILOJOULES);

    data.training_stress_score = resolve(object, fields::SUMMARY_TRAINING_STRESS_SCORE);
    data.intensity_factor = resolve(object, fields::SUMMARY_INTENSITY_FACTOR);
    data.trimp = resolve(object, fields::SUMMARY_TRIMP);
}
