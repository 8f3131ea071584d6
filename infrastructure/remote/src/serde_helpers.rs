//! Lenient field decoders for backend payloads whose number and date
//! formats are not consistent across endpoints.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawNumber {
    fn to_i64(&self) -> Option<i64> {
        match self {
            RawNumber::Int(value) => Some(*value),
            RawNumber::Float(value) => float_to_i64(*value),
            RawNumber::Text(text) => {
                let text = text.trim();
                text.parse::<i64>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(float_to_i64))
            }
        }
    }
}

/// `None` for non-finite values and anything outside the `i64` range.
fn float_to_i64(value: f64) -> Option<i64> {
    let rounded = value.round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Some(rounded as i64)
    } else {
        None
    }
}

/// Money amount sent as an integer, a float (`120000.0`) or a numeric string.
pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    match raw {
        None => Ok(0),
        Some(raw) => raw
            .to_i64()
            .ok_or_else(|| serde::de::Error::custom("amount is not a number")),
    }
}

pub fn optional_amount<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| raw.to_i64()))
}

/// Identifier that may arrive as a number or a string.
pub fn id_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Int(value) => Ok(value.to_string()),
        RawNumber::Float(value) => Ok(value.to_string()),
        RawNumber::Text(text) => Ok(text),
    }
}

/// RFC 3339 timestamp, or a zone-less `yyyy-MM-ddTHH:mm:ss[.fff]` read as UTC.
/// Unparseable values decode to `None`.
pub fn optional_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}
