//! Deserializers that accept whatever scalar shape the API hands back.
//!
//! The upstream record is not validated; a field that arrives as a number
//! or boolean is displayed the same way a string would be.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// `null`, string, number, or bool into `Option<String>`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_text))
}

/// `null` or an array of anything into `Option<Vec<String>>`.
///
/// Only the length of the reference list is displayed, so each element is
/// kept as text regardless of its JSON type.
pub fn text_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(value.map(|items| {
        items
            .into_iter()
            .map(|item| value_to_text(item).unwrap_or_default())
            .collect()
    }))
}
