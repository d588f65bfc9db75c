//! Field-level serde helpers for the wire models.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `deserialize_with` for optional fields that may carry an explicit `null`.
///
/// A present field decodes to `Some`, so `"field": null` on a
/// `Option<serde_json::Value>` is `Some(Value::Null)` and writes back as
/// `null`. Types that cannot hold `null` still read it as `None`. Pair with
/// `#[serde(default)]` so an absent field stays `None`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(serde_json::from_value(Value::Null).ok()),
        value => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
    }
}
