//! Open-world field map for one story or block.
//!
//! Every key in the source object is captured; nothing is validated here.
//! The typed readers below are what the block and story layers use to pull
//! required and optional fields out of the map.

use crate::{DynamicValue, Error, Result};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;

/// The dynamic content payload of one entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentMap {
    pub fields: BTreeMap<String, DynamicValue>,
}

impl ContentMap {
    #[must_use]
    pub fn new(fields: BTreeMap<String, DynamicValue>) -> Self {
        Self { fields }
    }

    /// Captures every key of an object-shaped value.
    pub fn decode(value: &DynamicValue) -> Result<Self> {
        match value {
            DynamicValue::Object(fields) => Ok(Self::new(fields.clone())),
            other => Err(Error::DecodeTypeMismatch {
                expected: "object",
                found: other.kind().to_string(),
            }),
        }
    }

    /// Decodes straight from a parsed JSON object.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        Self::decode(&DynamicValue::decode(json)?)
    }

    /// Encodes every captured key back into a JSON object.
    #[must_use]
    pub fn encode(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .iter()
                .map(|(key, value)| (key.clone(), value.encode()))
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DynamicValue)> {
        self.fields.iter()
    }

    /// Converts the map into an object value.
    #[must_use]
    pub fn into_value(self) -> DynamicValue {
        DynamicValue::Object(self.fields)
    }

    // ── Typed field readers ──────────────────────────────────────

    /// Returns a field that must be present and non-null.
    pub fn required(&self, field: &str) -> Result<&DynamicValue> {
        self.present(field).ok_or_else(|| Error::MissingRequiredField {
            field: field.to_string(),
        })
    }

    pub fn required_str(&self, field: &str) -> Result<&str> {
        let value = self.required(field)?;
        value.as_str().ok_or_else(|| invalid(field, "string"))
    }

    pub fn required_int(&self, field: &str) -> Result<i64> {
        let value = self.required(field)?;
        value.as_int().ok_or_else(|| invalid(field, "integer"))
    }

    pub fn required_bool(&self, field: &str) -> Result<bool> {
        let value = self.required(field)?;
        value.as_bool().ok_or_else(|| invalid(field, "bool"))
    }

    pub fn required_array(&self, field: &str) -> Result<&[DynamicValue]> {
        let value = self.required(field)?;
        value.as_array().ok_or_else(|| invalid(field, "array"))
    }

    pub fn required_object(&self, field: &str) -> Result<&BTreeMap<String, DynamicValue>> {
        let value = self.required(field)?;
        value.as_object().ok_or_else(|| invalid(field, "object"))
    }

    /// Reads an optional string. Absent and `null` both yield `None`;
    /// any other non-string value is an error.
    pub fn optional_str(&self, field: &str) -> Result<Option<&str>> {
        self.present(field)
            .map(|value| value.as_str().ok_or_else(|| invalid(field, "string")))
            .transpose()
    }

    pub fn optional_int(&self, field: &str) -> Result<Option<i64>> {
        self.present(field)
            .map(|value| value.as_int().ok_or_else(|| invalid(field, "integer")))
            .transpose()
    }

    pub fn optional_bool(&self, field: &str) -> Result<Option<bool>> {
        self.present(field)
            .map(|value| value.as_bool().ok_or_else(|| invalid(field, "bool")))
            .transpose()
    }

    pub fn optional_array(&self, field: &str) -> Result<Option<&[DynamicValue]>> {
        self.present(field)
            .map(|value| value.as_array().ok_or_else(|| invalid(field, "array")))
            .transpose()
    }

    /// Reads a string field, falling back to `default` when it is absent
    /// or not a string.
    #[must_use]
    pub fn str_or<'a>(&'a self, field: &str, default: &'a str) -> &'a str {
        self.get(field).and_then(DynamicValue::as_str).unwrap_or(default)
    }

    fn present(&self, field: &str) -> Option<&DynamicValue> {
        self.fields.get(field).filter(|value| !value.is_null())
    }
}

fn invalid(field: &str, expected: &'static str) -> Error {
    Error::InvalidField {
        field: field.to_string(),
        expected,
    }
}

impl From<BTreeMap<String, DynamicValue>> for ContentMap {
    fn from(fields: BTreeMap<String, DynamicValue>) -> Self {
        Self::new(fields)
    }
}

impl Serialize for ContentMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContentMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = DynamicValue::deserialize(deserializer)?;
        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, DynamicValue)]) -> ContentMap {
        ContentMap::new(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn null_counts_as_absent_for_optional_readers() {
        let content = map(&[("subheadline", DynamicValue::Null)]);
        assert_eq!(content.optional_str("subheadline").unwrap(), None);
    }

    #[test]
    fn null_counts_as_missing_for_required_readers() {
        let content = map(&[("headline", DynamicValue::Null)]);
        assert!(content.required_str("headline").unwrap_err().is_missing_field());
    }

    #[test]
    fn str_or_falls_back_on_wrong_type() {
        let content = map(&[("title", DynamicValue::from(3_i64))]);
        assert_eq!(content.str_or("title", "No Title"), "No Title");
    }
}
