#![doc = include_str!("../README.md")]

pub mod encode;
pub mod error;
pub mod manifest;
mod number;
pub mod value;

#[cfg(feature = "json")]
mod json;

pub use crate::encode::encode;
pub use crate::error::{Error, Result};
pub use crate::manifest::{Manifest, Metadata};
pub use crate::value::{MappingBuilder, Number, Value};

#[cfg(feature = "json")]
pub use crate::json::MAX_DEPTH;

#[cfg(feature = "json")]
use serde::Serialize;

/// Encode any serializable value by converting it through
/// `serde_json::Value` first (key order preserved). Fails only on
/// serialization errors or on input nested deeper than [`MAX_DEPTH`].
#[cfg(feature = "json")]
pub fn to_string<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_value(value)?;
    Ok(encode(&Value::from_json(&json)?))
}
