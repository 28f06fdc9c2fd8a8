//! Core Data Models
//!
//! The two shapes that flow out of a conversion:
//!
//! 1. [`Position`] - one parsed log line (the fields that matched, plus the fixed
//!    battery/speed placeholders)
//! 2. [`Beacon`] - every position sharing one ICCID, in input order
//!
//! Absent fields stay absent in the JSON output: optional fields are skipped
//! during serialization instead of being written as `null`.

use serde::{Deserialize, Serialize, Serializer};

/// Battery level written on every position. The source log carries no battery data.
pub const BATTERY_PLACEHOLDER: u32 = 100;

/// Speed written on every position. The source log carries no speed data.
pub const SPEED_PLACEHOLDER: u32 = 0;

/// Group key for lines that carry no ICCID.
pub const UNKNOWN_ICCID: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_coordinate"
    )]
    pub lat: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_coordinate"
    )]
    pub lon: Option<f64>,
    pub battery: u32,
    pub speed: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            timestamp: None,
            transmission: None,
            lat: None,
            lon: None,
            battery: BATTERY_PLACEHOLDER,
            speed: SPEED_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beacon {
    /// The ICCID this beacon was grouped under, or `"unknown"`
    pub number: String,
    pub positions: Vec<Position>,
}

impl Beacon {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            positions: Vec::new(),
        }
    }
}

// Integral coordinates below 1e21 are written as plain integers (`5`, not
// `5.0` or `1.2345678901234568e16`). Non-finite values fall through to
// serde_json, which writes them as `null`.
fn serialize_coordinate<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const PLAIN_INTEGER_LIMIT: f64 = 1e21;
    const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

    match value {
        Some(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < PLAIN_INTEGER_LIMIT => {
            if *v < 0.0 {
                serializer.serialize_i128(*v as i128)
            } else if *v < U64_LIMIT {
                serializer.serialize_u64(*v as u64)
            } else {
                serializer.serialize_u128(*v as u128)
            }
        }
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}
