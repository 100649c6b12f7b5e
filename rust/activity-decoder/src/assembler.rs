//! Whole-payload decoding into [`ActivityFileData`].
//!
//! Pipeline:
//! 1. Records from the first present records array, each normalized.
//! 2. Laps from the first present laps array, normalized, deduplicated, then
//!    numbered 0..N-1 in their deduplicated order.
//! 3. Summary scalars via the field tables.
//! 4. Zones from whichever supported shape is present.
//!
//! Decoding a parsed tree is total. Unknown structure yields empty fields,
//! never an error.

use log::{debug, warn};
use serde_json::Value;

use crate::config::DecoderConfig;
use crate::dedup::deduplicate_laps;
use crate::error::json_kind;
use crate::fields;
use crate::laps::normalize_laps;
use crate::records::normalize_records;
use crate::resolver::{resolve_array, RawObject};
use crate::summary::apply_summary;
use crate::types::{ActivityFileData, CanonicalLap};
use crate::zones::resolve_zones;

/// Decode one raw payload with the default configuration.
pub fn assemble_file_data(raw: &Value) -> ActivityFileData {
    assemble_file_data_with_config(raw, &DecoderConfig::default())
}

/// Decode one raw payload.
///
/// A top-level array is read as a bare records array. Any other non-object
/// payload decodes to an empty [`ActivityFileData`].
pub fn assemble_file_data_with_config(raw: &Value, config: &DecoderConfig) -> ActivityFileData {
    match raw {
        Value::Object(object) => assemble_object(object, config),
        Value::Array(samples) => ActivityFileData {
            records: Some(normalize_records(samples, config)),
            ..ActivityFileData::default()
        },
        other => {
            warn!(
                "[Decoder] Payload is a {}, nothing to decode",
                json_kind(other)
            );
            ActivityFileData::default()
        }
    }
}

fn assemble_object(object: &RawObject, config: &DecoderConfig) -> ActivityFileData {
    let mut data = ActivityFileData::default();

    if let Some(samples) = resolve_array(object, fields::RECORDS_ARRAY) {
        data.records = Some(normalize_records(samples, config));
    }

    if let Some(raw_laps) = resolve_array(object, fields::LAPS_ARRAY) {
        data.laps = Some(assemble_laps(raw_laps, config));
    }

    data.zones = fields::ZONES
        .iter()
        .find_map(|key| object.get(*key).and_then(resolve_zones));

    apply_summary(object, &mut data);

    debug!(
        "[Decoder] Decoded {} records, {} laps, {} zones",
        data.record_count(),
        data.lap_count(),
        data.zones.as_ref().map_or(0, Vec::len)
    );

    data
}

fn assemble_laps(raw_laps: &[Value], config: &DecoderConfig) -> Vec<CanonicalLap> {
    let normalized = normalize_laps(raw_laps);
    let before = normalized.len();

    let laps = if config.deduplicate_laps {
        deduplicate_laps(normalized)
    } else {
        normalized
    };

    if laps.len() < before {
        debug!(
            "[Decoder] Dropped {} duplicate laps of {}",
            before - laps.len(),
            before
        );
    }

    assign_ordinals(laps)
}

/// Number laps by their position in the final sequence.
pub fn assign_ordinals(laps: Vec<CanonicalLap>) -> Vec<CanonicalLap> {
    laps.into_iter()
        .enumerate()
        .map(|(index, lap)| CanonicalLap {
            ordinal_index: index as u32,
            ..lap
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_key_priority() {
        let data = assemble_file_data(&json!({
            "records": [{"hr": 120}],
            "record_data": [{"hr": 130}, {"hr": 140}]
        }));
        let records = data.records.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].heart_rate_bpm, Some(120.0));
    }

    #[test]
    fn test_alternate_array_keys() {
        let data = assemble_file_data(&json!({
            "record_data": [{"hr": 130}, {"hr": 140}],
            "all_laps": [{"duration": 60}]
        }));
        assert_eq!(data.record_count(), 2);
        assert_eq!(data.lap_count(), 1);
    }

    #[test]
    fn test_laps_deduplicated_and_numbered() {
        let lap = json!({
            "distance": 1000, "duration": 240, "avg_heart_rate": 150,
            "avg_speed_kmh": 15, "start_time": 0
        });
        let other = json!({
            "distance": 1000, "duration": 250, "avg_heart_rate": 150,
            "avg_speed_kmh": 15, "start_time": 240
        });
        let data = assemble_file_data(&json!({"laps": [lap, other, lap]}));
        let laps = data.laps.unwrap();
        assert_eq!(laps.len(), 2);
        assert_eq!(laps[0].ordinal_index, 0);
        assert_eq!(laps[1].ordinal_index, 1);
        assert_eq!(laps[1].duration_seconds, Some(250.0));
    }

    #[test]
    fn test_dedup_can_be_disabled() {
        let lap = json!({"distance": 1000, "duration": 240});
        let config = DecoderConfig {
            deduplicate_laps: false,
            ..DecoderConfig::default()
        };
        let data = assemble_file_data_with_config(&json!({"laps": [lap, lap]}), &config);
        let ordinals: Vec<u32> = data.laps.unwrap().iter().map(|l| l.ordinal_index).collect();
        assert_eq!(ordinals, vec![0, 1]);
    }

    #[test]
    fn test_zones_and_summary() {
        let data = assemble_file_data(&json!({
            "time_in_zones": {"power": [{"zone": 1, "time": 60, "percent": 100}]},
            "moving_time": 60
        }));
        assert_eq!(data.zones.unwrap().len(), 1);
        assert_eq!(data.moving_time_seconds, Some(60.0));
    }

    #[test]
    fn test_unrecognized_payloads_are_empty() {
        assert!(assemble_file_data(&json!({"foo": "bar"})).is_empty());
        assert!(assemble_file_data(&json!(42)).is_empty());
        assert!(assemble_file_data(&json!(null)).is_empty());
        assert!(assemble_file_data(&json!({"records": "not an array"})).is_empty());
    }

    #[test]
    fn test_bare_array_is_records() {
        let data = assemble_file_data(&json!([{"power": 100}, {"power": 110}]));
        assert_eq!(data.record_count(), 2);
        assert!(data.laps.is_none());
    }
}
