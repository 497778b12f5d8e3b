use crate::number::format_f64;

/// Numeric leaf. The original numeric form is preserved: integers stay
/// integers, floats render through [`format_f64`].
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::I64(i) => write!(f, "{}", i),
            Number::U64(u) => write!(f, "{}", u),
            Number::F64(num) => f.write_str(&format_f64(*num)),
        }
    }
}

/// The value tree handed to [`crate::encode`]. A closed variant: every
/// shape the encoder handles is one of these six cases, and the layout
/// rules match on them exhaustively.
///
/// `Mapping` keeps insertion order; keys are assumed unique within one
/// mapping by construction. Entries whose value is absent are dropped
/// before they ever reach the tree (see [`MappingBuilder::entry_opt`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Mapping(Vec<(String, Value)>),
}

impl Value {
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    /// The single inline-vs-block tie-break: true iff the value is a
    /// non-empty container. Scalars and empty containers render inline.
    pub fn is_complex(&self) -> bool {
        match self {
            Value::Array(items) => !items.is_empty(),
            Value::Mapping(entries) => !entries.is_empty(),
            _ => false,
        }
    }

    /// Start building a mapping in insertion order.
    pub fn mapping() -> MappingBuilder {
        MappingBuilder::new()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::I64(i64::from(i)))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::I64(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Number(Number::U64(u))
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no textual form in the output; they map
    /// to null, same as serde_json.
    fn from(f: f64) -> Self {
        if f.is_finite() {
            Value::Number(Number::F64(f))
        } else {
            Value::Null
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

/// Ordered mapping builder. Absent entries are dropped here, at
/// construction time, so the encoder never sees them: an entry added
/// with `None` is indistinguishable from one never added at all.
#[derive(Debug, Default)]
pub struct MappingBuilder {
    entries: Vec<(String, Value)>,
}

impl MappingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn entry_opt<V: Into<Value>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.entry(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> Value {
        Value::Mapping(self.entries)
    }
}
