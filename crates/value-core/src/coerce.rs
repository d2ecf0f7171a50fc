//! Best-effort conversion between value types.
//!
//! Every conversion returns the converted value together with a success flag.
//! A failed conversion still yields a usable value: the zero value of the
//! target type. Nothing here returns an error or panics; callers decide
//! whether a failed coercion matters.
//!
//! | From \ To | Int | Float | Bool | String |
//! |---|---|---|---|---|
//! | Null | 0 | 0.0 | false | `null` |
//! | Bool | 1 / 0 | 1.0 / 0.0 | same | `true` / `false` |
//! | Int | same | widened | nonzero | decimal text |
//! | Float | rounded to nearest | same | nonzero | JSON text |
//! | String | parsed, else 0 ✗ | parsed, else 0.0 ✗ | yes/no tokens, else false ✗ | same |
//! | Time, Object, Array | 0 ✗ | 0.0 ✗ | false ✗ | JSON text |
//!
//! Coercing to `Null` always succeeds. Coercing to `Time`, `Object` or `Array`
//! succeeds only when the value already has that type. Strings that fail to
//! encode (a non-finite float, say) yield `("", false)`.

use crate::types::Type;
use crate::value::Value;

const TRUE_TOKENS: [&str; 4] = ["true", "1", "yes", "y"];
const FALSE_TOKENS: [&str; 4] = ["false", "0", "no", "n"];

impl Value {
    /// Convert to the requested type. Returns `(converted, ok)`.
    ///
    /// `Time`, `Object` and `Array` targets are intentionally identity-only: a
    /// value that already has the target type is cloned with `ok = true`, and
    /// every other source gives `(Null, false)`. There is no conversion into
    /// these types.
    ///
    /// ```
    /// use value_core::{Type, Value};
    ///
    /// assert_eq!(Value::Float(2.6).coerce_to(Type::Int), (Value::Int(3), true));
    /// assert_eq!(Value::from("yes").coerce_to(Type::Bool), (Value::Bool(true), true));
    /// assert_eq!(Value::from("maybe").coerce_to(Type::Bool), (Value::Bool(false), false));
    /// ```
    pub fn coerce_to(&self, target: Type) -> (Value, bool) {
        let (value, ok) = match target {
            Type::Null => (Value::Null, true),
            Type::Bool => self.coerce_to_bool(),
            Type::Int => self.coerce_to_int(),
            Type::Float => self.coerce_to_float(),
            Type::String => self.coerce_to_string(),
            Type::Time | Type::Object | Type::Array => {
                if self.value_type() == target {
                    (self.clone(), true)
                } else {
                    (Value::Null, false)
                }
            }
        };
        if !ok {
            tracing::trace!(from = %self.value_type(), to = %target, "coercion failed");
        }
        (value, ok)
    }

    /// Floats are rounded half away from zero, not truncated.
    pub fn coerce_to_int(&self) -> (Value, bool) {
        match self {
            Value::Null => (Value::Int(0), true),
            Value::Bool(b) => (Value::Int(i64::from(*b)), true),
            Value::Int(_) => (self.clone(), true),
            Value::Float(f) => (Value::Int(f.round() as i64), true),
            Value::String(s) => match s.parse::<i64>() {
                Ok(i) => (Value::Int(i), true),
                Err(_) => (Value::Int(0), false),
            },
            Value::Time(_) | Value::Object(_) | Value::Array(_) => (Value::Int(0), false),
        }
    }

    pub fn coerce_to_float(&self) -> (Value, bool) {
        match self {
            Value::Null => (Value::Float(0.0), true),
            Value::Bool(b) => (Value::Float(if *b { 1.0 } else { 0.0 }), true),
            Value::Int(i) => (Value::Float(*i as f64), true),
            Value::Float(_) => (self.clone(), true),
            Value::String(s) => match s.parse::<f64>() {
                Ok(f) => (Value::Float(f), true),
                Err(_) => (Value::Float(0.0), false),
            },
            Value::Time(_) | Value::Object(_) | Value::Array(_) => (Value::Float(0.0), false),
        }
    }

    /// Strings are matched case-insensitively against `true/1/yes/y` and
    /// `false/0/no/n`.
    pub fn coerce_to_bool(&self) -> (Value, bool) {
        match self {
            Value::Null => (Value::Bool(false), true),
            Value::Bool(_) => (self.clone(), true),
            Value::Int(i) => (Value::Bool(*i != 0), true),
            Value::Float(f) => (Value::Bool(f.abs() > 0.0), true),
            Value::String(s) => {
                let token = s.to_lowercase();
                if TRUE_TOKENS.contains(&token.as_str()) {
                    (Value::Bool(true), true)
                } else if FALSE_TOKENS.contains(&token.as_str()) {
                    (Value::Bool(false), true)
                } else {
                    (Value::Bool(false), false)
                }
            }
            Value::Time(_) | Value::Object(_) | Value::Array(_) => (Value::Bool(false), false),
        }
    }

    /// Strings are returned as-is; everything else is JSON-encoded as a whole.
    /// Floats use the JSON number text, so `2.0` becomes `"2.0"` and `1e21`
    /// becomes `"1e21"`.
    pub fn coerce_to_string(&self) -> (Value, bool) {
        if let Value::String(_) = self {
            return (self.clone(), true);
        }
        match self.to_json_string() {
            Ok(text) => (Value::String(text), true),
            Err(_) => (Value::String(String::new()), false),
        }
    }
}
