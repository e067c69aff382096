// Serde adapters for nested blocks.
//
// Block attributes arrive as JSON lists. Each item is decoded on its own so
// a malformed entry is reported against its attribute and position instead
// of as a bare serde message.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::collection::Block;

fn item<B, E>(kind: &str, index: usize, value: Value) -> Result<B, E>
where
    B: DeserializeOwned,
    E: serde::de::Error,
{
    serde_json::from_value(value)
        .map_err(|e| E::custom(format!("unable to process {kind} block: item {index}: {e}")))
}

/// Unbounded list of blocks. `null` reads as empty.
pub(crate) fn blocks<'de, D, B>(deserializer: D) -> Result<Vec<B>, D::Error>
where
    D: Deserializer<'de>,
    B: Block + DeserializeOwned,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    raw.into_iter()
        .enumerate()
        .map(|(i, v)| item(B::KIND, i, v))
        .collect()
}

/// A block allowed at most once: a bare object, `null`, or a list of <= 1.
pub(crate) fn at_most_one<'de, D, B>(deserializer: D, kind: &str) -> Result<Option<B>, D::Error>
where
    D: Deserializer<'de>,
    B: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(items) => {
            if items.len() > 1 {
                return Err(D::Error::custom(format!(
                    "unable to process {kind} block: at most one block is allowed, got {}",
                    items.len()
                )));
            }
            items
                .into_iter()
                .next()
                .map(|v| item(kind, 0, v))
                .transpose()
        }
        other => item(kind, 0, other).map(Some),
    }
}
