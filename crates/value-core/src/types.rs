//! The [`Type`] tag: which variant a [`crate::Value`] currently holds.
//!
//! Each tag has a canonical name (`VALUE_NULL`, `VALUE_INTEGER`, ...) used for
//! display and serialization. Looking up an unknown name yields [`Type::Null`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The eight kinds of value. The derived order is declaration order and only
/// exists for display and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Type {
    #[default]
    Null,
    Bool,
    Int,
    Float,
    String,
    Time,
    Object,
    Array,
}

impl Type {
    /// Every tag, in declaration order.
    pub const ALL: [Type; 8] = [
        Type::Null,
        Type::Bool,
        Type::Int,
        Type::Float,
        Type::String,
        Type::Time,
        Type::Object,
        Type::Array,
    ];

    /// Canonical name of this tag.
    pub const fn name(self) -> &'static str {
        match self {
            Type::Null => "VALUE_NULL",
            Type::Bool => "VALUE_BOOL",
            Type::Int => "VALUE_INTEGER",
            Type::Float => "VALUE_DECIMAL",
            Type::String => "VALUE_STRING",
            Type::Time => "VALUE_TIME",
            Type::Object => "VALUE_OBJECT",
            Type::Array => "VALUE_ARRAY",
        }
    }

    /// Look up a tag by its canonical name. Unknown names map to [`Type::Null`].
    pub fn from_name(name: &str) -> Type {
        Type::ALL
            .into_iter()
            .find(|t| t.name() == name)
            .unwrap_or(Type::Null)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Type {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Type::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for t in Type::ALL {
            assert_eq!(Type::from_name(t.name()), t);
        }
    }

    #[test]
    fn unknown_name_is_null() {
        assert_eq!(Type::from_name("VALUE_WHATEVER"), Type::Null);
        assert_eq!(Type::from_name("value_integer"), Type::Null);
    }

    #[test]
    fn serde_uses_names() {
        assert_eq!(serde_json::to_string(&Type::Float).unwrap(), r#""VALUE_DECIMAL""#);
        let t: Type = serde_json::from_str(r#""VALUE_ARRAY""#).unwrap();
        assert_eq!(t, Type::Array);
        let t: Type = serde_json::from_str(r#""nope""#).unwrap();
        assert_eq!(t, Type::Null);
    }
}
