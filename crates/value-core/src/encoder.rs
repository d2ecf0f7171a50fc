//! JSON encoding: converts a [`Value`] tree into JSON text.
//!
//! Encoding dispatches on the active variant. Times are written as RFC 3339
//! strings in UTC (`2019-06-01T12:30:45Z`, with fractional seconds only when
//! present). Non-finite floats have no JSON form; encoding one is an error.
//!
//! # Example
//! ```
//! use value_core::Value;
//!
//! let v = Value::from(vec![Value::Int(1), Value::from("two"), Value::Null]);
//! assert_eq!(v.to_json_string().unwrap(), r#"[1,"two",null]"#);
//! ```

use crate::error::Result;
use crate::value::Value;
use chrono::SecondsFormat;
use serde::ser::Error;
use serde::{Serialize, Serializer};

impl Value {
    /// Encode as compact JSON text.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON text.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Encode as compact JSON bytes.
    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            Value::Float(f) => Err(S::Error::custom(format!("{f} has no JSON representation"))),
            Value::String(s) => serializer.serialize_str(s),
            Value::Time(t) => serializer.serialize_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Object(o) => o.serialize(serializer),
            Value::Array(a) => a.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn time_is_rfc3339_utc() {
        let t = Utc.with_ymd_and_hms(2019, 6, 1, 12, 30, 45).unwrap();
        assert_eq!(
            Value::Time(t).to_json_string().unwrap(),
            r#""2019-06-01T12:30:45Z""#
        );
    }

    #[test]
    fn non_finite_floats_fail_to_encode() {
        assert!(Value::Float(f64::NAN).to_json_string().is_err());
        assert!(Value::Float(f64::INFINITY).to_json_string().is_err());
        let nested = Value::from(vec![Value::Int(1), Value::Float(f64::NEG_INFINITY)]);
        assert!(nested.to_json_vec().is_err());
    }
}
