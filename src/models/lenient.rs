//! Forgiving field deserializers for the semantic model view.
//!
//! A value of the wrong type is treated the same as a missing key. The
//! schema pass is responsible for reporting shape problems; everything
//! downstream of it only needs to walk whatever is there.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize `value` as `T` only when it is a mapping.
pub(crate) fn from_mapping<T>(value: &Value) -> Option<T>
where
    T: DeserializeOwned,
{
    match value {
        Value::Object(_) => T::deserialize(value).ok(),
        _ => None,
    }
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;

    match value {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

pub(crate) fn mapping<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(from_mapping))
}

/// Sequences keep their length: an item that is not a mapping becomes an
/// entity with every field absent.
pub(crate) fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;

    match value {
        Some(Value::Array(items)) => Ok(items
            .iter()
            .map(|item| from_mapping(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
