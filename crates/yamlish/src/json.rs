use serde_json::Value as Json;

use crate::error::{Error, Result};
use crate::value::{Number, Value};

/// Nesting cap for trees built from JSON. Encoding recurses once per
/// level, so this bounds the call stack long before it matters.
pub const MAX_DEPTH: usize = 128;

impl Value {
    /// Convert a `serde_json::Value`, preserving key order (serde_json
    /// is built with `preserve_order`). JSON has no "absent" value, so
    /// no entry filtering happens here; `Option::None` fields are
    /// skipped by serde before this point when the caller uses
    /// `skip_serializing_if`, or arrive as explicit nulls otherwise.
    pub fn from_json(json: &Json) -> Result<Value> {
        from_json_at(json, 0)
    }
}

fn from_json_at(json: &Json, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(Error::TooDeep { limit: MAX_DEPTH });
    }
    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => {
            let number = if let Some(i) = n.as_i64() {
                Number::I64(i)
            } else if let Some(u) = n.as_u64() {
                Number::U64(u)
            } else {
                Number::F64(n.as_f64().unwrap_or(0.0))
            };
            Value::Number(number)
        }
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| from_json_at(item, depth + 1))
                .collect::<Result<_>>()?,
        ),
        Json::Object(map) => Value::Mapping(
            map.iter()
                .map(|(key, value)| Ok((key.clone(), from_json_at(value, depth + 1)?)))
                .collect::<Result<_>>()?,
        ),
    })
}
