//! # Activity Decoder
//!
//! Total, unit-aware decoding of raw activity telemetry into one canonical
//! representation.
//!
//! Raw payloads come from FIT exports, TCX-derived exports, backend-normalized
//! records and third-party APIs. They carry the same quantities under
//! different keys, units and primitive types. This library resolves every
//! canonical field from an ordered list of candidate keys, converts units
//! (semicircles, m/s, meters vs kilometers) and never fails on a missing or
//! malformed field.
//!
//! ## Features
//!
//! - **`parallel`** - Normalize large record arrays on the rayon pool
//!
//! ## Quick Start
//!
//! ```rust
//! use activity_decoder::decode_file_data;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "records": [{"position_lat": 536870912, "position_long": -1073741824, "speed": 5}],
//!     "laps": [{"duration": 240, "tpx_ext_stats": {"Watts": {"avg": 210}}}],
//!     "avg_speed": 20,
//!     "avg_speed_moving_kmh": 22,
//!     "total_distance": 5000
//! });
//!
//! let data = decode_file_data(&raw);
//! let position = data.records.as_ref().unwrap()[0].position.unwrap();
//! assert!((position.latitude_degrees - 45.0).abs() < 1e-6);
//! assert_eq!(data.avg_speed_kmh, Some(22.0));
//! assert_eq!(data.distance_km, Some(5.0));
//! assert_eq!(data.laps.as_ref().unwrap()[0].avg_power_watts, Some(210.0));
//! ```

use serde_json::Value;

// Envelope-level error handling
pub mod error;
pub use error::{DecodeError, OptionExt, Result};

// Decoder configuration
pub mod config;
pub use config::DecoderConfig;

// Canonical output types
pub mod types;
pub use types::{
    Activity, ActivityFileData, CanonicalLap, CanonicalPosition, CanonicalRecord, CanonicalZone,
    CyclingDynamics,
};

// Unit conversions (semicircles, m/s, distance units)
pub mod units;

// Timestamp parsing strategies
pub mod timestamp;
pub use timestamp::{parse_timestamp, parse_timestamp_str};

// Ordered candidate-key resolution
pub mod resolver;
pub use resolver::{resolve, Candidate};

// Provider compatibility tables
pub mod fields;

// Per-sample and per-lap normalization
pub mod records;
pub use records::{normalize_record, normalize_records};

pub mod laps;
pub use laps::{normalize_lap, normalize_laps};

// Duplicate lap removal
pub mod dedup;
pub use dedup::deduplicate_laps;

// Training zones
pub mod zones;
pub use zones::resolve_zones;

// Summary scalars and whole-payload assembly
pub mod summary;

pub mod assembler;
pub use assembler::{assemble_file_data, assemble_file_data_with_config};

// Activity envelope
pub mod activity;
pub use activity::{decode_activities, decode_activity, decode_activity_with_config};

/// Decode an already-parsed payload. Never fails.
pub fn decode_file_data(raw: &Value) -> ActivityFileData {
    assemble_file_data(raw)
}

/// Parse and decode a JSON text payload.
///
/// Fails only when the text is not JSON, or its top level is a scalar.
pub fn decode_file_data_json(json: &str) -> Result<ActivityFileData> {
    let raw: Value = serde_json::from_str(json)?;
    decode_parsed_envelope(&raw)
}

/// Parse and decode a JSON byte payload, as returned by the transport layer.
pub fn decode_file_data_slice(bytes: &[u8]) -> Result<ActivityFileData> {
    let raw: Value = serde_json::from_slice(bytes)?;
    decode_parsed_envelope(&raw)
}

fn decode_parsed_envelope(raw: &Value) -> Result<ActivityFileData> {
    match raw {
        Value::Object(_) | Value::Array(_) => Ok(assemble_file_data(raw)),
        other => Err(DecodeError::UnexpectedShape {
            expected: "object or array",
            found: error::json_kind(other),
        }),
    }
}

/// Parse and decode one activity from JSON text.
pub fn decode_activity_json(json: &str) -> Result<Activity> {
    let raw: Value = serde_json::from_str(json)?;
    raw.as_object().ok_or_shape("object", &raw)?;
    Ok(decode_activity(&raw))
}
