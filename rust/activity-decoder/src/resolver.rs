//! Ordered candidate-key resolution over raw JSON objects.
//!
//! Every canonical field is described by a slice of [`Candidate`]s. The
//! resolver walks the slice in order and returns the first candidate whose
//! key is present, whose value coerces to the expected type, and whose
//! optional transform accepts it. A present-but-unusable candidate never
//! blocks a later one.
//!
//! The order of a candidate slice is the provider-priority contract for that
//! field. New providers append candidates; existing ones are never reordered.

use serde_json::{Map, Value};

/// Raw JSON object as handed over by the transport layer.
pub type RawObject = Map<String, Value>;

/// Turns a raw JSON value into `T`, or `None` when the type doesn't fit.
pub type Coerce<T> = fn(&Value) -> Option<T>;

/// Post-coercion conversion and validity check. `None` rejects the candidate.
pub type Transform<T> = fn(T) -> Option<T>;

/// One raw key considered as a source for a canonical field.
#[derive(Clone, Copy)]
pub struct Candidate<T> {
    pub key: &'static str,
    pub coerce: Coerce<T>,
    pub transform: Option<Transform<T>>,
}

impl<T> std::fmt::Debug for Candidate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("key", &self.key)
            .field("has_transform", &self.transform.is_some())
            .finish()
    }
}

impl Candidate<f64> {
    /// Numeric candidate taken as-is.
    pub const fn number(key: &'static str) -> Self {
        Self {
            key,
            coerce: coerce_f64,
            transform: None,
        }
    }

    /// Numeric candidate passed through `transform` after coercion.
    pub const fn number_with(key: &'static str, transform: Transform<f64>) -> Self {
        Self {
            key,
            coerce: coerce_f64,
            transform: Some(transform),
        }
    }

    /// Timestamp candidate, see [`crate::timestamp::parse_timestamp`].
    pub const fn timestamp(key: &'static str) -> Self {
        Self {
            key,
            coerce: crate::timestamp::parse_timestamp,
            transform: None,
        }
    }
}

impl Candidate<i64> {
    pub const fn integer(key: &'static str) -> Self {
        Self {
            key,
            coerce: coerce_i64,
            transform: None,
        }
    }
}

impl Candidate<String> {
    /// Text candidate; numbers are accepted and rendered as text.
    pub const fn text(key: &'static str) -> Self {
        Self {
            key,
            coerce: coerce_string,
            transform: None,
        }
    }
}

/// Resolve a field from `object` using `candidates` in priority order.
pub fn resolve<T>(object: &RawObject, candidates: &[Candidate<T>]) -> Option<T> {
    candidates.iter().find_map(|candidate| {
        let raw = object.get(candidate.key)?;
        let value = (candidate.coerce)(raw)?;
        match candidate.transform {
            Some(transform) => transform(value),
            None => Some(value),
        }
    })
}

/// Like [`resolve`], but only if `value` is a JSON object.
pub fn resolve_in<T>(value: &Value, candidates: &[Candidate<T>]) -> Option<T> {
    value.as_object().and_then(|object| resolve(object, candidates))
}

/// First candidate key holding a JSON array, in priority order.
///
/// Later keys are never merged in, even if they hold arrays too.
pub fn resolve_array<'a>(object: &'a RawObject, keys: &[&str]) -> Option<&'a Vec<Value>> {
    keys.iter()
        .find_map(|key| object.get(*key).and_then(Value::as_array))
}

/// Walk a nested object path, e.g. `["tpx_ext_stats", "Watts", "avg"]`.
pub fn lookup_path<'a>(object: &'a RawObject, path: &[&str]) -> Option<&'a Value> {
    let (last, parents) = path.split_last()?;
    let mut current = object;
    for key in parents {
        current = current.get(*key)?.as_object()?;
    }
    current.get(*last)
}

/// Numeric coercion: integer, then floating-point, then numeric string.
///
/// Non-finite results are refused so NaN never enters canonical data.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n
            .as_i64()
            .map(|i| i as f64)
            .or_else(|| n.as_u64().map(|u| u as f64))
            .or_else(|| n.as_f64()),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Integer coercion; floats and numeric strings are accepted when integral.
pub fn coerce_i64(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    if let Value::String(s) = value {
        if let Ok(i) = s.trim().parse::<i64>() {
            return Some(i);
        }
    }
    let f = coerce_f64(value)?;
    (f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}

/// Text coercion for identifiers and tags. Empty strings are treated as absent.
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Transform: accept only strictly positive values.
///
/// Used for distance, speed, power and load fields, where zero or a negative
/// number is a placeholder written by the provider rather than a measurement.
pub fn positive(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

/// Transform: accept zero and positive values.
pub fn non_negative(value: f64) -> Option<f64> {
    (value >= 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mps_to_kmh(mps: f64) -> Option<f64> {
        Some(mps * 3.6)
    }

    fn obj(value: Value) -> RawObject {
        value.as_object().cloned().unwrap()
    }

    const SPEED: &[Candidate<f64>] = &[
        Candidate::number("avg_speed_moving_kmh"),
        Candidate::number("avg_speed_kmh"),
        Candidate::number_with("avg_speed", mps_to_kmh),
    ];

    #[test]
    fn test_higher_priority_wins() {
        let raw = obj(json!({"avg_speed_kmh": 20.0, "avg_speed_moving_kmh": 22.0}));
        assert_eq!(resolve(&raw, SPEED), Some(22.0));
    }

    #[test]
    fn test_lower_priority_is_transformed() {
        let raw = obj(json!({"avg_speed": 5}));
        assert_eq!(resolve(&raw, SPEED), Some(18.0));
    }

    #[test]
    fn test_malformed_candidate_does_not_block() {
        let raw = obj(json!({"avg_speed_moving_kmh": "fast", "avg_speed_kmh": "21.5"}));
        assert_eq!(resolve(&raw, SPEED), Some(21.5));
    }

    #[test]
    fn test_rejected_transform_falls_through() {
        const TSS: &[Candidate<f64>] = &[
            Candidate::number_with("training_stress_score", positive),
            Candidate::number_with("tss_device", positive),
        ];
        let raw = obj(json!({"training_stress_score": 0, "tss_device": 84.2}));
        assert_eq!(resolve(&raw, TSS), Some(84.2));

        let raw = obj(json!({"training_stress_score": -3, "tss_device": 0}));
        assert_eq!(resolve(&raw, TSS), None);
    }

    #[test]
    fn test_absent_when_nothing_present() {
        let raw = obj(json!({"unrelated": 1}));
        assert_eq!(resolve(&raw, SPEED), None);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        const POWER: &[Candidate<f64>] = &[Candidate::number("power")];
        let raw = obj(json!({"Power": 250}));
        assert_eq!(resolve(&raw, POWER), None);
    }

    #[test]
    fn test_coerce_f64_variants() {
        assert_eq!(coerce_f64(&json!(42)), Some(42.0));
        assert_eq!(coerce_f64(&json!(42.5)), Some(42.5));
        assert_eq!(coerce_f64(&json!(" 17.25 ")), Some(17.25));
        assert_eq!(coerce_f64(&json!("n/a")), None);
        assert_eq!(coerce_f64(&json!("NaN")), None);
        assert_eq!(coerce_f64(&json!(true)), None);
        assert_eq!(coerce_f64(&json!(null)), None);
        assert_eq!(coerce_f64(&json!([1])), None);
    }

    #[test]
    fn test_coerce_i64_variants() {
        assert_eq!(coerce_i64(&json!(3)), Some(3));
        assert_eq!(coerce_i64(&json!(3.0)), Some(3));
        assert_eq!(coerce_i64(&json!("4")), Some(4));
        assert_eq!(coerce_i64(&json!(3.5)), None);
    }

    #[test]
    fn test_coerce_string_variants() {
        assert_eq!(coerce_string(&json!("abc")), Some("abc".to_string()));
        assert_eq!(coerce_string(&json!(12345)), Some("12345".to_string()));
        assert_eq!(coerce_string(&json!("  ")), None);
        assert_eq!(coerce_string(&json!({"id": 1})), None);
    }

    #[test]
    fn test_resolve_array_prefers_first_key() {
        let raw = obj(json!({"record_data": [1, 2, 3], "records": [1]}));
        assert_eq!(resolve_array(&raw, &["records", "record_data"]).map(Vec::len), Some(1));

        let raw = obj(json!({"records": "oops", "record_data": [1, 2]}));
        assert_eq!(resolve_array(&raw, &["records", "record_data"]).map(Vec::len), Some(2));
    }

    #[test]
    fn test_lookup_path() {
        let raw = obj(json!({"tpx_ext_stats": {"Watts": {"avg": 210}}}));
        assert_eq!(
            lookup_path(&raw, &["tpx_ext_stats", "Watts", "avg"]),
            Some(&json!(210))
        );
        assert_eq!(lookup_path(&raw, &["tpx_ext_stats", "Watts", "max"]), None);
        assert_eq!(lookup_path(&raw, &["tpx_ext_stats", "HR", "avg"]), None);
    }
}
