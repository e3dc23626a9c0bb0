//! Recursive representation of an arbitrary JSON value.
//!
//! `DynamicValue` is the universal currency of the pipeline: every payload
//! is decoded into it once and every later stage reads it without mutation.

use crate::{Error, Result};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A JSON number, kept as an integer whenever it fits in `i64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Returns the integer value, or `None` for floats.
    #[must_use]
    pub const fn as_i64(self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(i),
            Self::Float(_) => None,
        }
    }

    /// Returns the value widened to `f64`.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    fn encode(self) -> serde_json::Value {
        match self {
            Self::Int(i) => serde_json::Value::from(i),
            // Non-finite floats have no JSON form.
            Self::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Any value that can appear in a content API payload.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
    Array(Vec<DynamicValue>),
    Object(BTreeMap<String, DynamicValue>),
}

impl DynamicValue {
    /// Decodes a parsed JSON value.
    ///
    /// Kinds are probed in a fixed order: string, object, array, integer,
    /// float, bool, null. An integer outside the `i64` range therefore
    /// decodes as a float rather than failing.
    pub fn decode(json: &serde_json::Value) -> Result<Self> {
        if let Some(s) = json.as_str() {
            Ok(Self::String(s.to_owned()))
        } else if let Some(map) = json.as_object() {
            let mut fields = BTreeMap::new();
            for (key, value) in map {
                fields.insert(key.clone(), Self::decode(value)?);
            }
            Ok(Self::Object(fields))
        } else if let Some(items) = json.as_array() {
            items
                .iter()
                .map(Self::decode)
                .collect::<Result<Vec<_>>>()
                .map(Self::Array)
        } else if let Some(i) = json.as_i64() {
            Ok(Self::Number(Number::Int(i)))
        } else if let Some(f) = json.as_f64() {
            Ok(Self::Number(Number::Float(f)))
        } else if let Some(b) = json.as_bool() {
            Ok(Self::Bool(b))
        } else if json.is_null() {
            Ok(Self::Null)
        } else {
            Err(Error::DecodeTypeMismatch {
                expected: "string, object, array, number, bool or null",
                found: json.to_string(),
            })
        }
    }

    /// Parses and decodes a raw JSON payload.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_slice(bytes)?;
        Self::decode(&json)
    }

    /// Parses and decodes a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(s)?;
        Self::decode(&json)
    }

    /// Encodes back into a JSON value. Never fails.
    #[must_use]
    pub fn encode(&self) -> serde_json::Value {
        match self {
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Number(n) => n.encode(),
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Null => serde_json::Value::Null,
            Self::Array(items) => {
                serde_json::Value::Array(items.iter().map(Self::encode).collect())
            }
            Self::Object(fields) => serde_json::Value::Object(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), value.encode()))
                    .collect(),
            ),
        }
    }

    /// Short name of the variant, used in error messages and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Null => "null",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[DynamicValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&BTreeMap<String, DynamicValue>> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the value as an integer. Floats are not truncated.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Like [`as_int`](Self::as_int), but also accepts a string holding an integer.
    #[must_use]
    pub fn as_int_lenient(&self) -> Option<i64> {
        match self {
            Self::String(s) => s.parse().ok(),
            other => other.as_int(),
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Looks up a key when the value is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.as_object().and_then(|fields| fields.get(key))
    }

    /// Returns the node list of a rich-text document envelope.
    ///
    /// Only an object with `"type": "doc"` and an array `"content"` qualifies.
    #[must_use]
    pub fn document_content(&self) -> Option<&[DynamicValue]> {
        if self.get("type").and_then(Self::as_str) != Some("doc") {
            return None;
        }
        self.get("content").and_then(Self::as_array)
    }
}

impl fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl Serialize for DynamicValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Number(Number::Int(i)) => serializer.serialize_i64(*i),
            Self::Number(Number::Float(f)) if f.is_finite() => serializer.serialize_f64(*f),
            Self::Number(Number::Float(_)) | Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Array(items) => items.serialize(serializer),
            Self::Object(fields) => fields.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for DynamicValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Self::decode(&json).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&serde_json::Value> for DynamicValue {
    type Error = Error;

    fn try_from(json: &serde_json::Value) -> Result<Self> {
        Self::decode(json)
    }
}

impl From<&str> for DynamicValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for DynamicValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for DynamicValue {
    fn from(i: i64) -> Self {
        Self::Number(Number::Int(i))
    }
}

impl From<f64> for DynamicValue {
    fn from(f: f64) -> Self {
        Self::Number(Number::Float(f))
    }
}

impl From<bool> for DynamicValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<DynamicValue>> for DynamicValue {
    fn from(items: Vec<DynamicValue>) -> Self {
        Self::Array(items)
    }
}

impl From<BTreeMap<String, DynamicValue>> for DynamicValue {
    fn from(fields: BTreeMap<String, DynamicValue>) -> Self {
        Self::Object(fields)
    }
}
