//! Tolerant serde helpers for reading records produced by the gateway.
//!
//! Malformed fields degrade to "absent" instead of failing the record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read any JSON scalar as a string. Null, arrays and objects read as absent.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value))
}

/// Read an array of records, replacing unreadable elements with defaults.
pub(crate) fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().map(record).collect(),
        _ => Vec::new(),
    })
}

/// Read a single record, falling back to an all-defaults record.
pub(crate) fn record<T>(value: &Value) -> T
where
    T: DeserializeOwned + Default,
{
    T::deserialize(value).unwrap_or_default()
}

pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Field lookup with JavaScript-style truthiness: empty strings read as absent.
pub(crate) fn field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(scalar_to_string)
        .filter(|s| !s.is_empty())
}
