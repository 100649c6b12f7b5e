//! Unit conversions between the encodings found in raw exports.
//!
//! All functions are pure. The constants here are part of the decoding
//! contract: changing one changes how already-stored payloads decode.

/// Semicircles per 180 degrees (2^31), as used by FIT position fields.
pub const SEMICIRCLES_PER_180_DEGREES: f64 = 2_147_483_648.0;

/// m/s to km/h factor.
pub const MPS_TO_KMH: f64 = 3.6;

/// Raw distances above this are taken to be meters, at or below it kilometers.
pub const DISTANCE_METERS_THRESHOLD: f64 = 1000.0;

/// Largest magnitude a decimal-degree coordinate can have.
/// Anything bigger in a raw position pair means semicircle encoding.
pub const MAX_DEGREES_MAGNITUDE: f64 = 180.0;

pub fn meters_per_second_to_kmh(mps: f64) -> f64 {
    mps * MPS_TO_KMH
}

pub fn semicircles_to_degrees(semicircles: f64) -> f64 {
    semicircles * (180.0 / SEMICIRCLES_PER_180_DEGREES)
}

/// Inverse of [`semicircles_to_degrees`], rounded to the nearest semicircle.
pub fn degrees_to_semicircles(degrees: f64) -> f64 {
    (degrees * (SEMICIRCLES_PER_180_DEGREES / 180.0)).round()
}

pub fn meters_to_kilometers(meters: f64) -> f64 {
    meters / 1000.0
}

/// Normalize a summary distance of unknown unit to kilometers.
///
/// Sources disagree on whether a top-level distance is meters or kilometers
/// and nothing in the payload says which. Values above 1000 are treated as
/// meters; everything else is assumed to already be kilometers. A genuine
/// 1000+ km activity would be misread, which is outside the range of the
/// tracked sports. The threshold must stay fixed so historical payloads keep
/// decoding to the same numbers.
pub fn normalize_distance_km(raw: f64) -> f64 {
    if raw > DISTANCE_METERS_THRESHOLD {
        meters_to_kilometers(raw)
    } else {
        raw
    }
}

/// Whether a raw coordinate pair is semicircle-encoded.
///
/// Decided per pair, so a file that mixes encodings still decodes.
pub fn is_semicircle_pair(lat: f64, lon: f64) -> bool {
    lat.abs() > MAX_DEGREES_MAGNITUDE || lon.abs() > MAX_DEGREES_MAGNITUDE
}

/// Convert a raw coordinate pair to signed decimal degrees.
///
/// Returns `None` when the converted pair is outside the valid range.
/// Out-of-range coordinates are rejected, never clamped.
pub fn normalize_coordinates(lat: f64, lon: f64) -> Option<(f64, f64)> {
    let (lat, lon) = if is_semicircle_pair(lat, lon) {
        (semicircles_to_degrees(lat), semicircles_to_degrees(lon))
    } else {
        (lat, lon)
    };

    if is_valid_latitude(lat) && is_valid_longitude(lon) {
        Some((lat, lon))
    } else {
        None
    }
}

pub fn is_valid_latitude(lat: f64) -> bool {
    lat.is_finite() && lat.abs() <= 90.0
}

pub fn is_valid_longitude(lon: f64) -> bool {
    lon.is_finite() && lon.abs() <= 180.0
}
