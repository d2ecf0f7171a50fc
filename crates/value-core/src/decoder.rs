//! JSON decoding: converts JSON text into a [`Value`] tree.
//!
//! Containers go through `serde_json` for bracket matching and recursion. The
//! generic tree it produces loses the distinction between `1` and `1.0`, so
//! every scalar child is re-encoded to JSON text and decoded again through the
//! scalar path below, where [`classify`] recovers integer vs. float.
//!
//! The scalar path, on trimmed text:
//!
//! - empty → `Null`
//! - `"..."` → unescaped; an RFC 3339 timestamp becomes `Time`, anything else `String`
//! - `{...}` / `[...]` → [`Object`] / [`Array`] decode
//! - otherwise the bare token is classified; an unrecognized token is kept as `String`

use crate::array::Array;
use crate::error::Result;
use crate::object::Object;
use crate::parse::{classify, ParseResult};
use crate::value::Value;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

impl Value {
    /// Decode JSON text into a value.
    ///
    /// ```
    /// use value_core::Value;
    ///
    /// assert_eq!(Value::from_json_str("42").unwrap(), Value::Int(42));
    /// assert_eq!(Value::from_json_str("4.0").unwrap(), Value::Int(4));
    /// assert_eq!(Value::from_json_str("nil").unwrap(), Value::Null);
    /// assert_eq!(Value::from_json_str(r#""42""#).unwrap(), Value::from("42"));
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self> {
        let s = text.trim();

        if s.is_empty() {
            return Ok(Value::Null);
        }
        if is_delimited(s, '"', '"') {
            let unquoted: String = serde_json::from_str(s)?;
            return Ok(string_or_time(unquoted));
        }
        if is_delimited(s, '{', '}') {
            return Object::from_json_str(s).map(Value::Object);
        }
        if is_delimited(s, '[', ']') {
            return Array::from_json_str(s).map(Value::Array);
        }

        Ok(match classify(s) {
            ParseResult::Null => Value::Null,
            ParseResult::Bool(b) => Value::Bool(b),
            ParseResult::Number { int: Some(i), .. } => Value::Int(i),
            ParseResult::Number { float, int: None } => Value::Float(float),
            ParseResult::Nothing => {
                tracing::trace!(token = s, "bare token kept as string");
                Value::String(s.to_string())
            }
        })
    }

    /// Decode JSON bytes. Invalid UTF-8 is replaced with U+FFFD before decoding.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Value::from_json_str(&String::from_utf8_lossy(bytes))
    }

    /// Decode from an already generically decoded JSON tree.
    ///
    /// Maps and lists recurse directly. Scalars are re-encoded and sent through
    /// [`Value::from_json_str`] so the classifier sees the number's text.
    pub fn from_generic(generic: &serde_json::Value) -> Result<Self> {
        match generic {
            serde_json::Value::Object(map) => Object::from_generic(map).map(Value::Object),
            serde_json::Value::Array(items) => Array::from_generic(items).map(Value::Array),
            scalar => {
                let text = serde_json::to_string(scalar)?;
                Value::from_json_str(&text)
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error;
        let generic = serde_json::Value::deserialize(deserializer)?;
        Value::from_generic(&generic).map_err(D::Error::custom)
    }
}

/// True when `s` is at least two bytes long and starts with `open` and ends with `close`.
pub(crate) fn is_delimited(s: &str, open: char, close: char) -> bool {
    s.len() >= 2 && s.starts_with(open) && s.ends_with(close)
}

fn string_or_time(s: String) -> Value {
    match DateTime::parse_from_rfc3339(&s) {
        Ok(t) => Value::Time(t.with_timezone(&Utc)),
        Err(_) => Value::String(s),
    }
}
