//! Error types for value access and JSON decoding.

use crate::types::Type;
use thiserror::Error;

/// Errors that can occur when reading or decoding values.
///
/// Coercion never produces one of these; see [`crate::coerce`].
#[derive(Error, Debug)]
pub enum ValueError {
    /// A strict accessor was called for a type that is not the active one.
    #[error("expected {expected} but the type is {actual}")]
    TypeMismatch { expected: Type, actual: Type },

    /// The input text was not delimited the way the target container requires
    /// (`[...]` for arrays, `{...}` for objects).
    #[error("this is not a JSON {}", kind_name(.expected))]
    StructuralMismatch { expected: Type },

    /// The generic JSON decoder (or encoder) failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The generic JSON decoder succeeded but did not produce the expected shape.
    #[error("bad JSON decode: no usable {} structure", kind_name(.expected))]
    NoStructure { expected: Type },
}

fn kind_name(t: &Type) -> &'static str {
    match t {
        Type::Array => "array",
        Type::Object => "object",
        _ => "value",
    }
}

/// Convenience alias used throughout value-core.
pub type Result<T> = std::result::Result<T, ValueError>;
