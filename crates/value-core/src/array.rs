//! [`Array`]: an ordered sequence of owned [`Value`]s.

use crate::decoder;
use crate::error::{Result, ValueError};
use crate::types::Type;
use crate::value::Value;
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::{Deref, DerefMut};

/// Order is significant: two arrays are equal when they have the same length
/// and equal values position by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Array(Vec<Value>);

impl Array {
    pub const fn new() -> Self {
        Array(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Array(Vec::with_capacity(capacity))
    }

    /// Decode a JSON array from text. The trimmed text must be `[...]`; anything
    /// else fails before the generic decoder runs.
    ///
    /// ```
    /// use value_core::{Array, Value};
    ///
    /// let a = Array::from_json_str("[1,true,2.1]").unwrap();
    /// assert_eq!(a[0], Value::Int(1));
    /// assert_eq!(a[2], Value::Float(2.1));
    /// assert!(Array::from_json_str("]").is_err());
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if !decoder::is_delimited(trimmed, '[', ']') {
            tracing::debug!(len = trimmed.len(), "rejecting array decode: not bracket-delimited");
            return Err(ValueError::StructuralMismatch {
                expected: Type::Array,
            });
        }
        let generic: serde_json::Value = serde_json::from_str(trimmed)?;
        match generic {
            serde_json::Value::Array(items) => Array::from_generic(&items),
            _ => {
                tracing::debug!("generic decode produced no array");
                Err(ValueError::NoStructure {
                    expected: Type::Array,
                })
            }
        }
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Array::from_json_str(&String::from_utf8_lossy(bytes))
    }

    /// Decode from an already generically decoded JSON array.
    pub fn from_generic(items: &[serde_json::Value]) -> Result<Self> {
        items
            .iter()
            .map(Value::from_generic)
            .collect::<Result<Vec<_>>>()
            .map(Array)
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }
}

impl Deref for Array {
    type Target = Vec<Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Array {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Array(items)
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Array(iter.into_iter().collect())
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for Array {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error;
        let generic = serde_json::Value::deserialize(deserializer)?;
        match generic {
            serde_json::Value::Array(items) => Array::from_generic(&items).map_err(D::Error::custom),
            _ => Err(D::Error::custom(ValueError::StructuralMismatch {
                expected: Type::Array,
            })),
        }
    }
}
