//! Forgiving decoders for schema keys that servers fill in loosely.
//!
//! Schemas are hand-written JSON, so `"minLength": "3"`, `"required": null` or a numeric
//! option value all show up in practice. Each helper reads whatever JSON value is present
//! and falls back to the key's default instead of failing the whole schema.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::field::{Bound, FieldKind};

/// A string, or the text of a number or boolean. Anything else reads as absent.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Like [`opt_string`], with absent values read as the empty string.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(deserializer)?.unwrap_or_default())
}

/// Option values: falsy scalars (`0`, `false`, `""`) read as absent so the label is used.
pub fn option_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    })
}

/// Truthiness of a flag: `null` is false, numbers are true unless zero, strings unless empty.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// A non-negative length given as a number or a numeric string. Fractions are truncated;
/// negative or unparsable values read as absent.
pub fn opt_length<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let length = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| *f >= 0.0).map(|f| f as u64),
        _ => None,
    };
    Ok(length.and_then(|n| u32::try_from(n).ok()))
}

/// The `type` tag; a non-string tag is read through its text like any other scalar.
pub fn field_kind<'de, D>(deserializer: D) -> Result<FieldKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(FieldKind::from(opt_string(deserializer)?))
}

/// A `min`/`max` bound; values that are neither numbers nor strings are dropped.
pub fn opt_bound<'de, D>(deserializer: D) -> Result<Option<Bound>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(Bound::Number(n)),
        Value::String(s) => Some(Bound::Text(s)),
        _ => None,
    })
}
