//! Field decoding that never fails the whole record.
//!
//! The API does not validate what it stores, so a single `null` or mistyped field
//! must not turn a list fetch into an error. Fields tagged with
//! `deserialize_with = "lenient"` fall back to their default instead.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Decodes the field as `T`, or `T::default()` when it is `null` or has another shape.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
