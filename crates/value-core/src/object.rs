//! [`Object`]: a name → [`Value`] mapping that owns its values.
//!
//! Keys are unique. Iteration is by key order, which keeps encoding stable but
//! carries no meaning; two objects are equal when their key sets are equal and
//! every key maps to equal values.

use crate::decoder;
use crate::error::{Result, ValueError};
use crate::types::Type;
use crate::value::Value;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Object(BTreeMap<String, Value>);

impl Object {
    pub const fn new() -> Self {
        Object(BTreeMap::new())
    }

    /// Decode a JSON object from text. The trimmed text must be `{...}`.
    ///
    /// ```
    /// use value_core::{Object, Value};
    ///
    /// let o = Object::from_json_str(r#"{"a":1,"b":{"c":[true]}}"#).unwrap();
    /// assert_eq!(o["a"], Value::Int(1));
    /// assert!(Object::from_json_str("[1]").is_err());
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if !decoder::is_delimited(trimmed, '{', '}') {
            tracing::debug!(len = trimmed.len(), "rejecting object decode: not brace-delimited");
            return Err(ValueError::StructuralMismatch {
                expected: Type::Object,
            });
        }
        let generic: serde_json::Value = serde_json::from_str(trimmed)?;
        match generic {
            serde_json::Value::Object(map) => Object::from_generic(&map),
            _ => {
                tracing::debug!("generic decode produced no object");
                Err(ValueError::NoStructure {
                    expected: Type::Object,
                })
            }
        }
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Object::from_json_str(&String::from_utf8_lossy(bytes))
    }

    /// Decode from an already generically decoded JSON object.
    pub fn from_generic(map: &serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let mut obj = Object::new();
        for (name, child) in map {
            obj.0.insert(name.clone(), Value::from_generic(child)?);
        }
        Ok(obj)
    }

    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl Deref for Object {
    type Target = BTreeMap<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Object {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<BTreeMap<String, Value>> for Object {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Object(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for Object {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error;
        let generic = serde_json::Value::deserialize(deserializer)?;
        match generic {
            serde_json::Value::Object(map) => Object::from_generic(&map).map_err(D::Error::custom),
            _ => Err(D::Error::custom(ValueError::StructuralMismatch {
                expected: Type::Object,
            })),
        }
    }
}
