//! Ranked list items and comparison key extraction.
//!
//! A ranked list holds either plain values or records. Records are compared
//! by a designated key field (`"text"` unless configured otherwise). Keys are
//! resolved once at the boundary so the scoring code only ever sees plain
//! key slices.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RankSimError, Result};

/// Default record field used as the comparison key.
pub const DEFAULT_KEY_FIELD: &str = "text";

/// A single entry of a ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    /// A plain comparable value.
    Plain(String),
    /// A structured record; compared by one of its fields.
    Record(Map<String, Value>),
}

impl Item {
    /// Build an item from a dynamic JSON value.
    ///
    /// Strings become plain items, numbers and booleans become plain items
    /// holding their JSON text, objects become records. Null and nested
    /// arrays are rejected.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Item::Plain(s.clone())),
            Value::Number(n) => Ok(Item::Plain(n.to_string())),
            Value::Bool(b) => Ok(Item::Plain(b.to_string())),
            Value::Object(map) => Ok(Item::Record(map.clone())),
            Value::Null => Err(RankSimError::input("null is not a rankable item")),
            Value::Array(_) => Err(RankSimError::input(
                "nested sequences are not rankable items",
            )),
        }
    }

    /// Resolve the comparison key of this item.
    pub fn key(&self, key_field: &str) -> Result<Cow<'_, str>> {
        match self {
            Item::Plain(value) => Ok(Cow::Borrowed(value.as_str())),
            Item::Record(map) => match map.get(key_field) {
                Some(Value::String(s)) => Ok(Cow::Borrowed(s.as_str())),
                Some(Value::Number(n)) => Ok(Cow::Owned(n.to_string())),
                Some(Value::Bool(b)) => Ok(Cow::Owned(b.to_string())),
                Some(other) => Err(RankSimError::input(format!(
                    "field '{key_field}' must be a string, number or boolean, got {}",
                    json_kind(other)
                ))),
                None => Err(RankSimError::input(format!(
                    "record is missing the key field '{key_field}'"
                ))),
            },
        }
    }

    /// Returns true if this item is a record.
    pub fn is_record(&self) -> bool {
        matches!(self, Item::Record(_))
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::Plain(value.to_string())
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Item::Plain(value)
    }
}

impl From<Map<String, Value>> for Item {
    fn from(value: Map<String, Value>) -> Self {
        Item::Record(value)
    }
}

/// An ordered sequence of items; position is rank, best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedList {
    items: Vec<Item>,
}

impl RankedList {
    /// Create a ranked list from items in rank order.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Build a ranked list from a dynamic JSON value, which must be an array.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Array(values) = value else {
            return Err(RankSimError::input(format!(
                "expected a sequence, got {}",
                json_kind(value)
            )));
        };

        let items = values
            .iter()
            .enumerate()
            .map(|(rank, value)| {
                Item::from_json(value).map_err(|e| match e {
                    RankSimError::Input(msg) => {
                        RankSimError::input(format!("item at rank {rank}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { items })
    }

    /// Extract the comparison keys of all items, in rank order.
    ///
    /// Fails on the first record whose key field is missing or unusable.
    pub fn keys(&self, key_field: &str) -> Result<Vec<Cow<'_, str>>> {
        self.items
            .iter()
            .enumerate()
            .map(|(rank, item)| {
                item.key(key_field).map_err(|e| match e {
                    RankSimError::Input(msg) => {
                        RankSimError::input(format!("item at rank {rank}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<I: Into<Item>> From<Vec<I>> for RankedList {
    fn from(items: Vec<I>) -> Self {
        items.into_iter().collect()
    }
}

impl<I: Into<Item>, const N: usize> From<[I; N]> for RankedList {
    fn from(items: [I; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<I: Into<Item>> FromIterator<I> for RankedList {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_plain_keys() {
        let list = RankedList::from(["a", "b", "c"]);
        let keys = list.keys(DEFAULT_KEY_FIELD).unwrap();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_record_keys() {
        let list = RankedList::from_json(&json!([{"text": "a", "score": 0.3}, {"text": "b"}]))
            .unwrap();
        assert!(list.items().iter().all(Item::is_record));

        let keys = list.keys("text").unwrap();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_custom_key_field() {
        let list = RankedList::from_json(&json!([{"id": 7}, {"id": true}])).unwrap();
        let keys = list.keys("id").unwrap();
        assert_eq!(keys, vec!["7", "true"]);
    }

    #[test]
    fn test_missing_key_field() {
        let list = RankedList::from_json(&json!([{"text": "a"}, {"body": "b"}])).unwrap();
        let err = list.keys("text").unwrap_err();

        match err {
            RankSimError::Input(msg) => {
                assert!(msg.contains("rank 1"), "{msg}");
                assert!(msg.contains("'text'"), "{msg}");
            }
            other => panic!("Expected input error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_scalar_key_value() {
        let list = RankedList::from_json(&json!([{"text": ["a"]}])).unwrap();
        assert!(matches!(list.keys("text"), Err(RankSimError::Input(_))));
    }

    #[test]
    fn test_non_sequence_rejected() {
        let err = RankedList::from_json(&json!({"text": "a"})).unwrap_err();
        assert!(matches!(err, RankSimError::Input(_)));
        assert!(err.to_string().contains("expected a sequence"));

        assert!(RankedList::from_json(&json!("ab")).is_err());
    }

    #[test]
    fn test_invalid_elements_rejected() {
        assert!(RankedList::from_json(&json!(["a", null])).is_err());
        assert!(RankedList::from_json(&json!([["a"], "b"])).is_err());
    }

    #[test]
    fn test_mixed_plain_and_records() {
        let list = RankedList::from_json(&json!(["a", {"text": "b"}, 3])).unwrap();
        let keys = list.keys("text").unwrap();
        assert_eq!(keys, vec!["a", "b", "3"]);
    }

    #[test]
    fn test_deserialize_untagged() {
        let list: RankedList = serde_json::from_str(r#"["a", {"text": "b"}]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[0], Item::Plain("a".to_string()));
        assert!(list.items()[1].is_record());
    }
}
