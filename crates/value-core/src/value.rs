//! The [`Value`] tagged enum.
//!
//! A `Value` holds exactly one variant at a time. Setters replace the active
//! variant in place and drop the previous payload. `Clone` is deep: a value
//! that holds an [`Object`] or [`Array`] owns everything beneath it, so a clone
//! never aliases the source.

use crate::array::Array;
use crate::error::{Result, ValueError};
use crate::object::Object;
use crate::types::Type;
use chrono::{DateTime, Utc};
use serde::Serialize;

static EMPTY_OBJECT: Object = Object::new();
static EMPTY_ARRAY: Array = Array::new();

/// A weakly typed value, like one found in a JSON document, plus a time variant.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Time(DateTime<Utc>),
    Object(Object),
    Array(Array),
}

impl Value {
    /// A null value.
    pub const fn new() -> Self {
        Value::Null
    }

    /// The zero value of the given type: `false`, `0`, `0.0`, `""`, the Unix
    /// epoch, or an empty container.
    pub fn zero(t: Type) -> Self {
        match t {
            Type::Null => Value::Null,
            Type::Bool => Value::Bool(false),
            Type::Int => Value::Int(0),
            Type::Float => Value::Float(0.0),
            Type::String => Value::String(String::new()),
            Type::Time => Value::Time(DateTime::<Utc>::default()),
            Type::Object => Value::Object(Object::new()),
            Type::Array => Value::Array(Array::new()),
        }
    }

    /// Best-effort conversion of any serializable data into a `Value`.
    ///
    /// The data is serialized to a generic JSON tree and then decoded the same
    /// way JSON text is, so a struct becomes an [`Object`] of its fields and
    /// whole-number floats become integers.
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Result<Self> {
        let generic = serde_json::to_value(data)?;
        Value::from_generic(&generic)
    }

    /// The tag of the active variant.
    pub fn value_type(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::Bool(_) => Type::Bool,
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::String(_) => Type::String,
            Value::Time(_) => Type::Time,
            Value::Object(_) => Type::Object,
            Value::Array(_) => Type::Array,
        }
    }

    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    /// Replace this value with the zero value of `t`.
    pub fn set_type(&mut self, t: Type) {
        *self = Value::zero(t);
    }

    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    pub fn set_bool(&mut self, value: bool) {
        *self = Value::Bool(value);
    }

    pub fn set_int(&mut self, value: i64) {
        *self = Value::Int(value);
    }

    pub fn set_float(&mut self, value: f64) {
        *self = Value::Float(value);
    }

    pub fn set_string(&mut self, value: impl Into<String>) {
        *self = Value::String(value.into());
    }

    pub fn set_time(&mut self, value: DateTime<Utc>) {
        *self = Value::Time(value);
    }

    pub fn set_object(&mut self, value: Object) {
        *self = Value::Object(value);
    }

    pub fn set_array(&mut self, value: Array) {
        *self = Value::Array(value);
    }

    // ------------------------------------------------------------------
    // Strict accessors
    // ------------------------------------------------------------------

    fn mismatch(&self, expected: Type) -> ValueError {
        ValueError::TypeMismatch {
            expected,
            actual: self.value_type(),
        }
    }

    pub fn try_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(Type::Bool)),
        }
    }

    pub fn try_int(&self) -> Result<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            _ => Err(self.mismatch(Type::Int)),
        }
    }

    pub fn try_float(&self) -> Result<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            _ => Err(self.mismatch(Type::Float)),
        }
    }

    pub fn try_string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(Type::String)),
        }
    }

    pub fn try_time(&self) -> Result<DateTime<Utc>> {
        match self {
            Value::Time(t) => Ok(*t),
            _ => Err(self.mismatch(Type::Time)),
        }
    }

    pub fn try_object(&self) -> Result<&Object> {
        match self {
            Value::Object(o) => Ok(o),
            _ => Err(self.mismatch(Type::Object)),
        }
    }

    pub fn try_array(&self) -> Result<&Array> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(self.mismatch(Type::Array)),
        }
    }

    // ------------------------------------------------------------------
    // Lenient accessors: zero value on mismatch
    // ------------------------------------------------------------------

    pub fn bool(&self) -> bool {
        self.try_bool().unwrap_or_default()
    }

    pub fn int(&self) -> i64 {
        self.try_int().unwrap_or_default()
    }

    pub fn float(&self) -> f64 {
        self.try_float().unwrap_or_default()
    }

    pub fn string(&self) -> &str {
        self.try_string().unwrap_or_default()
    }

    /// The held time, or the Unix epoch.
    pub fn time(&self) -> DateTime<Utc> {
        self.try_time().unwrap_or_default()
    }

    /// The held object, or a shared empty object. Never absent.
    pub fn object(&self) -> &Object {
        self.try_object().unwrap_or(&EMPTY_OBJECT)
    }

    /// The held array, or a shared empty array. Never absent.
    pub fn array(&self) -> &Array {
        self.try_array().unwrap_or(&EMPTY_ARRAY)
    }

    pub fn object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_time(&self) -> bool {
        matches!(self, Value::Time(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }
}

/// Structural equality. Values of different types are never equal, even when
/// numerically equivalent (`Int(1) != Float(1.0)`). Times compare at one-second
/// granularity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Time(a), Value::Time(b)) => a.timestamp() == b.timestamp(),
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Time(t)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(Array::from(v))
    }
}
