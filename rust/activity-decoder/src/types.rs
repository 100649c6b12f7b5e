//! Canonical activity types.
//!
//! Everything downstream (display, charting, training load) reads these and
//! never the raw provider payloads. Every measurement is optional: consumers
//! must render a neutral placeholder when a field is absent.

use serde::{Deserialize, Serialize};

// ============================================================================
// Records
// ============================================================================

/// GPS position in signed decimal degrees.
///
/// Only ever constructed from a range-checked pair (|lat| <= 90, |lon| <= 180).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPosition {
    pub latitude_degrees: f64,
    pub longitude_degrees: f64,
}

impl CanonicalPosition {
    /// Build a position from decimal degrees, rejecting out-of-range values.
    pub fn new(latitude_degrees: f64, longitude_degrees: f64) -> Option<Self> {
        (crate::units::is_valid_latitude(latitude_degrees)
            && crate::units::is_valid_longitude(longitude_degrees))
        .then_some(Self {
            latitude_degrees,
            longitude_degrees,
        })
    }
}

/// Cycling dynamics reported by power meters with pedal-level sensing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclingDynamics {
    /// Left/right power balance as reported by the device
    pub left_right_balance: Option<f64>,
    /// Torque effectiveness in percent
    pub left_torque_effectiveness: Option<f64>,
    pub right_torque_effectiveness: Option<f64>,
    /// Pedal smoothness in percent
    pub left_pedal_smoothness: Option<f64>,
    pub right_pedal_smoothness: Option<f64>,
}

impl CyclingDynamics {
    pub fn is_empty(&self) -> bool {
        self.left_right_balance.is_none()
            && self.left_torque_effectiveness.is_none()
            && self.right_torque_effectiveness.is_none()
            && self.left_pedal_smoothness.is_none()
            && self.right_pedal_smoothness.is_none()
    }
}

/// One timestamped telemetry sample.
///
/// A record with no resolvable field is still a valid record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    /// Unix timestamp (seconds since epoch, fractional)
    pub timestamp_unix_seconds: Option<f64>,
    pub position: Option<CanonicalPosition>,
    /// Cumulative distance in meters
    pub distance_meters: Option<f64>,
    pub altitude_meters: Option<f64>,
    pub heart_rate_bpm: Option<f64>,
    pub cadence_rpm: Option<f64>,
    pub power_watts: Option<f64>,
    pub speed_kmh: Option<f64>,
    pub temperature_celsius: Option<f64>,
    /// Only present when at least one dynamics field resolved
    pub cycling_dynamics: Option<CyclingDynamics>,
}

// ============================================================================
// Laps
// ============================================================================

/// One lap/split summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalLap {
    /// Position in the deduplicated lap sequence (0-based)
    pub ordinal_index: u32,
    pub start_time_unix_seconds: Option<f64>,
    pub distance_meters: Option<f64>,
    pub duration_seconds: Option<f64>,
    pub avg_speed_kmh: Option<f64>,
    pub max_speed_kmh: Option<f64>,
    pub avg_heart_rate_bpm: Option<f64>,
    pub max_heart_rate_bpm: Option<f64>,
    pub avg_power_watts: Option<f64>,
    pub max_power_watts: Option<f64>,
    pub avg_cadence_rpm: Option<f64>,
    pub ascent_meters: Option<f64>,
    pub descent_meters: Option<f64>,
    pub calories_kcal: Option<f64>,
}

// ============================================================================
// Zones
// ============================================================================

/// Time spent in one training zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalZone {
    /// 1-based zone number
    pub zone_number: u32,
    pub time_seconds: f64,
    /// Share of the activity in this zone, 0-100
    pub percentage: f64,
}

// ============================================================================
// Activity file data
// ============================================================================

/// Everything decoded from one activity's raw file payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFileData {
    pub records: Option<Vec<CanonicalRecord>>,
    pub laps: Option<Vec<CanonicalLap>>,
    pub zones: Option<Vec<CanonicalZone>>,

    /// Elapsed time in seconds
    pub total_duration_seconds: Option<f64>,
    /// Moving time in seconds
    pub moving_time_seconds: Option<f64>,
    /// Distance in kilometers
    pub distance_km: Option<f64>,
    pub ascent_meters: Option<f64>,
    pub descent_meters: Option<f64>,

    pub avg_speed_kmh: Option<f64>,
    pub max_speed_kmh: Option<f64>,

    pub avg_heart_rate_bpm: Option<f64>,
    pub min_heart_rate_bpm: Option<f64>,
    pub max_heart_rate_bpm: Option<f64>,

    pub avg_cadence_rpm: Option<f64>,
    pub max_cadence_rpm: Option<f64>,

    pub calories_kcal: Option<f64>,

    pub avg_altitude_meters: Option<f64>,
    pub min_altitude_meters: Option<f64>,
    pub max_altitude_meters: Option<f64>,
    pub avg_temperature_celsius: Option<f64>,

    pub avg_power_watts: Option<f64>,
    pub max_power_watts: Option<f64>,
    pub normalized_power_watts: Option<f64>,
    pub kilojoules: Option<f64>,

    /// Training stress score (TSS-like load index)
    pub training_stress_score: Option<f64>,
    pub intensity_factor: Option<f64>,
    /// Training impulse (TRIMP-like load index)
    pub trimp: Option<f64>,
}

impl ActivityFileData {
    pub fn record_count(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    pub fn lap_count(&self) -> usize {
        self.laps.as_ref().map_or(0, Vec::len)
    }

    /// Whether any record carries a position.
    pub fn has_gps(&self) -> bool {
        self.records
            .as_ref()
            .is_some_and(|records| records.iter().any(|r| r.position.is_some()))
    }

    /// True when nothing at all was recognized in the payload.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ============================================================================
// Activity
// ============================================================================

/// An activity as stored by the backend: identity, metadata and file data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Opaque activity id (numbers are kept as their decimal text)
    pub id: Option<String>,
    pub user_id: Option<String>,
    /// Provider tag, e.g. "garmin", "strava", "manual"
    pub provider: Option<String>,
    pub name: Option<String>,
    /// Date as sent by the backend
    pub date: Option<String>,
    /// `date` parsed to Unix seconds, when parseable
    pub date_unix_seconds: Option<f64>,
    pub sport: Option<String>,
    /// User-entered notes
    pub notes: Option<String>,
    pub file_data: Option<ActivityFileData>,
}
