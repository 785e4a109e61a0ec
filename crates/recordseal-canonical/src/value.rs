use serde_json::Value;
use std::collections::BTreeMap;

/// Closed tagged value model for canonicalization.
///
/// The transformer constructs these explicitly, so the canonicalizer
/// pattern-matches over a finite variant set instead of probing runtime
/// type tags. Mapping keys live in a `BTreeMap` and therefore iterate in
/// code-point order regardless of insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalValue {
    /// Absent value; canonicalizes to the empty string.
    Null,
    /// Boolean; canonicalizes to `true` / `false`.
    Bool(bool),
    /// Floating-point number. Non-finite values and negative zero are
    /// treated as absent during canonicalization.
    Number(f64),
    /// Text; canonicalizes to itself, unescaped and unquoted.
    Text(String),
    /// Ordered sequence; element order is preserved.
    Sequence(Vec<CanonicalValue>),
    /// Unordered field set; keys are emitted sorted.
    Mapping(BTreeMap<String, CanonicalValue>),
}

impl CanonicalValue {
    /// Convenience constructor for text values.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl From<&str> for CanonicalValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CanonicalValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for CanonicalValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for CanonicalValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<CanonicalValue>> for CanonicalValue {
    fn from(value: Vec<CanonicalValue>) -> Self {
        Self::Sequence(value)
    }
}

impl From<BTreeMap<String, CanonicalValue>> for CanonicalValue {
    fn from(value: BTreeMap<String, CanonicalValue>) -> Self {
        Self::Mapping(value)
    }
}

impl From<Value> for CanonicalValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            // Numbers outside f64 range map to NaN, which canonicalizes
            // to the empty string like any other non-finite value.
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
