//! Activity envelope decoding.
//!
//! The backend stores the raw file payload next to the activity metadata,
//! either as a nested object or as a string of embedded JSON. Both are
//! accepted, object first.

use log::{debug, warn};
use serde_json::Value;

use crate::assembler::assemble_file_data_with_config;
use crate::config::DecoderConfig;
use crate::fields;
use crate::resolver::{resolve, RawObject};
use crate::timestamp::parse_timestamp_str;
use crate::types::{Activity, ActivityFileData};

/// Decode one activity with the default configuration.
pub fn decode_activity(raw: &Value) -> Activity {
    decode_activity_with_config(raw, &DecoderConfig::default())
}

/// Decode one activity. Non-object input yields an empty [`Activity`].
pub fn decode_activity_with_config(raw: &Value, config: &DecoderConfig) -> Activity {
    let Some(object) = raw.as_object() else {
        return Activity::default();
    };

    let date: Option<String> = resolve(object, fields::ACTIVITY_DATE);
    let date_unix_seconds = date.as_deref().and_then(parse_timestamp_str);

    Activity {
        id: resolve(object, fields::ACTIVITY_ID),
        user_id: resolve(object, fields::ACTIVITY_USER_ID),
        provider: resolve(object, fields::ACTIVITY_PROVIDER),
        name: resolve(object, fields::ACTIVITY_NAME),
        date,
        date_unix_seconds,
        sport: resolve(object, fields::ACTIVITY_SPORT),
        notes: resolve(object, fields::ACTIVITY_NOTES),
        file_data: resolve_file_data(object, config),
    }
}

/// Decode an array of activities in order. Anything else yields no activities.
pub fn decode_activities(raw: &Value, config: &DecoderConfig) -> Vec<Activity> {
    raw.as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| decode_activity_with_config(item, config))
                .collect()
        })
        .unwrap_or_default()
}

fn resolve_file_data(object: &RawObject, config: &DecoderConfig) -> Option<ActivityFileData> {
    fields::ACTIVITY_FILE_DATA
        .iter()
        .filter_map(|key| object.get(*key))
        .find_map(|value| decode_file_data_value(value, config))
}

/// Structured object first, then string-embedded JSON.
fn decode_file_data_value(value: &Value, config: &DecoderConfig) -> Option<ActivityFileData> {
    match value {
        Value::Object(_) => Some(assemble_file_data_with_config(value, config)),
        Value::String(embedded) => match serde_json::from_str::<Value>(embedded) {
            Ok(inner @ Value::Object(_)) => {
                debug!("[Decoder] File data decoded from embedded JSON string");
                Some(assemble_file_data_with_config(&inner, config))
            }
            Ok(_) => {
                warn!("[Decoder] Embedded file data is not a JSON object, ignoring");
                None
            }
            Err(err) => {
                warn!("[Decoder] Embedded file data is not valid JSON: {}", err);
                None
            }
        },
        _ => None,
    }
}
