//! # value-core
//!
//! Weakly typed values that mirror the JSON data model: null, bool, integer,
//! float, string, time, object and array.
//!
//! A [`Value`] owns everything beneath it. Cloning is always deep, so a clone can
//! be mutated or handed to another thread without affecting the source. Decoding
//! recovers the int/float/bool/null distinction that a generic JSON decoder
//! erases by running each bare scalar through a token classifier, and coercion
//! between types reports failure as a flag instead of an error.
//!
//! ## Quick start
//!
//! ```rust
//! use value_core::{Type, Value};
//!
//! let v = Value::from_json_str(r#"{"n":1,"f":2.5,"ok":true,"tags":["a","b"]}"#).unwrap();
//! assert_eq!(v.value_type(), Type::Object);
//! assert_eq!(v.object()["n"], Value::Int(1));
//!
//! let copy = v.clone();
//! assert_eq!(copy, v);
//!
//! let (rounded, ok) = Value::Float(2.6).coerce_to(Type::Int);
//! assert!(ok);
//! assert_eq!(rounded, Value::Int(3));
//! ```
//!
//! ## Modules
//!
//! - [`types`] — the [`Type`] tag and its canonical names
//! - [`value`] — the [`Value`] tagged enum, accessors and setters
//! - [`object`] / [`array`] — owning containers of values
//! - [`parse`] — bare token classification used while decoding
//! - [`decoder`] — JSON text → [`Value`]
//! - [`encoder`] — [`Value`] → JSON text
//! - [`coerce`] — best-effort conversion between types
//! - [`error`] — error types

pub mod array;
pub mod coerce;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod object;
pub mod parse;
pub mod types;
pub mod value;

pub use array::Array;
pub use error::ValueError;
pub use object::Object;
pub use parse::{classify, ParseResult};
pub use types::Type;
pub use value::Value;
