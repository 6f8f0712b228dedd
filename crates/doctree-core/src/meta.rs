//! Open metadata side-map carried by every node and document.
//!
//! Converters attach format-specific facts (original numbering schemes, style
//! names, anchors) that have no first-class field on the tree; renderers read
//! them back for lossless round-tripping. Values are plain data: deep-copied
//! on `clone`, never shared between two documents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered metadata map: string key to opaque [`MetaValue`].
///
/// A `BTreeMap` keeps iteration (and serialization) order deterministic.
pub type MetaMap = BTreeMap<String, MetaValue>;

/// An opaque metadata value.
///
/// Mirrors the shapes that survive a JSON round trip: booleans, integers,
/// floats, strings, lists, and nested maps. Serialized untagged, so
/// `{"title": "Intro", "page": 3}` deserializes the way you would expect.
///
/// # Examples
///
/// ```rust
/// use doctree_core::{MetaMap, MetaValue};
///
/// let mut meta = MetaMap::new();
/// meta.insert("title".to_string(), MetaValue::from("Introduction"));
/// meta.insert("page".to_string(), MetaValue::from(3));
///
/// assert_eq!(meta["title"].as_str(), Some("Introduction"));
/// assert_eq!(meta["page"].as_int(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text value
    Str(String),
    /// Ordered list of values
    List(Vec<MetaValue>),
    /// Nested map
    Map(MetaMap),
}

impl MetaValue {
    /// Returns the string content if this value is a string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content if this value is an integer.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float content if this value is a float or an integer.
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the boolean content if this value is a boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for MetaValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for MetaValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for MetaValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<usize> for MetaValue {
    #[inline]
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for MetaValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for MetaValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for MetaValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<chrono::DateTime<chrono::Utc>> for MetaValue {
    /// Dates are stored as RFC 3339 strings so they survive any serialization
    /// a converter chooses.
    #[inline]
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Self::Str(value.to_rfc3339())
    }
}

impl From<Vec<MetaValue>> for MetaValue {
    #[inline]
    fn from(value: Vec<MetaValue>) -> Self {
        Self::List(value)
    }
}

impl From<MetaMap> for MetaValue {
    #[inline]
    fn from(value: MetaMap) -> Self {
        Self::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(MetaValue::from("x").as_str(), Some("x"));
        assert_eq!(MetaValue::from(42).as_int(), Some(42));
        assert_eq!(MetaValue::from(2.5).as_float(), Some(2.5));
        assert_eq!(MetaValue::from(7).as_float(), Some(7.0));
        assert_eq!(MetaValue::from(true).as_bool(), Some(true));
        assert_eq!(MetaValue::from("x").as_int(), None);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut nested = MetaMap::new();
        nested.insert("inner".to_string(), MetaValue::from("original"));

        let mut meta = MetaMap::new();
        meta.insert("nested".to_string(), MetaValue::Map(nested));

        let mut copy = meta.clone();
        if let Some(MetaValue::Map(inner)) = copy.get_mut("nested") {
            inner.insert("inner".to_string(), MetaValue::from("changed"));
        }

        // The original map is untouched by mutation of the copy.
        match meta.get("nested") {
            Some(MetaValue::Map(inner)) => {
                assert_eq!(inner["inner"].as_str(), Some("original"));
            }
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn test_untagged_serde_round_trip() {
        let mut meta = MetaMap::new();
        meta.insert("title".to_string(), MetaValue::from("Report"));
        meta.insert("pages".to_string(), MetaValue::from(12));
        meta.insert("draft".to_string(), MetaValue::from(false));
        meta.insert(
            "tags".to_string(),
            MetaValue::List(vec![MetaValue::from("a"), MetaValue::from("b")]),
        );

        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"title\":\"Report\""));
        assert!(json.contains("\"pages\":12"));

        let back: MetaMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meta);
    }

    #[test]
    fn test_datetime_stored_as_rfc3339() {
        use chrono::TimeZone;
        let when = chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let value = MetaValue::from(when);
        assert_eq!(value.as_str(), Some("2024-05-01T12:00:00+00:00"));
    }
}
