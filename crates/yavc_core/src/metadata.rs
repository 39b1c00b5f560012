//! Namespaced key/value metadata attached to created objects.
//!
//! Keys are `<namespace>:<key>` (for example `yavc:model`). Insertion order
//! is preserved so hosts see properties in the order they were written.

use std::fmt;

use serde::{Serialize, Serializer};

/// A single metadata value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Text value
    String(String),

    /// Integer value
    Int(i64),

    /// Floating point value
    Float(f64),

    /// Opaque structured payload, stored verbatim
    Blob(serde_json::Value),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "{}", s),
            PropertyValue::Int(i) => write!(f, "{}", i),
            PropertyValue::Float(v) => write!(f, "{}", v),
            PropertyValue::Blob(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        PropertyValue::Blob(value)
    }
}

/// Ordered metadata map.
///
/// Re-inserting an existing key replaces the value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    entries: Vec<(String, PropertyValue)>,
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl Metadata {
    /// Create an empty metadata map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `<namespace>:<key>`.
    pub fn insert_namespaced(
        &mut self,
        namespace: &str,
        key: &str,
        value: impl Into<PropertyValue>,
    ) {
        self.insert(format!("{}:{}", namespace, key), value);
    }

    /// Insert a fully qualified key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a fully qualified key.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_keys_keep_order() {
        let mut meta = Metadata::new();
        meta.insert_namespaced("yavc", "model", "models/crate.mdl");
        meta.insert_namespaced("yavc", "skin", 2i64);

        let keys: Vec<&str> = meta.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["yavc:model", "yavc:skin"]);
        assert_eq!(meta.get("yavc:skin"), Some(&PropertyValue::Int(2)));
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut meta = Metadata::new();
        meta.insert("a", "first");
        meta.insert("b", 1.5f64);
        meta.insert("a", "second");

        assert_eq!(meta.len(), 2);
        assert_eq!(meta.iter().next().map(|(k, _)| k), Some("a"));
        assert_eq!(meta.get("a"), Some(&PropertyValue::from("second")));
    }

    #[test]
    fn test_blob_serializes_verbatim() {
        let mut meta = Metadata::new();
        meta.insert("yavc:sides", serde_json::json!([1, 2, 3]));

        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"yavc:sides":[1,2,3]}"#);
    }
}
