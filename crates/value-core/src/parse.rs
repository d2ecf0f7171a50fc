//! Classification of bare (unquoted) scalar tokens.
//!
//! A generic JSON decoder collapses every number into one numeric type, so
//! `1` and `1.0` become indistinguishable. The decoder re-encodes each scalar
//! and runs the text through [`classify`] to decide whether it is null, a
//! boolean, an integer or a float.
//!
//! Integer detection is deliberately tolerant: a parsed float within
//! [`INT_EPSILON`] of its truncation, or of the next integer up, is reported as
//! an integer. This absorbs representation noise (`1.99999999999999` → 2) but
//! also means very large magnitudes, where float spacing exceeds the tolerance,
//! are reported as floats only.

/// Distance from an integer within which a float is also reported as that integer.
pub const INT_EPSILON: f64 = 1e-14;

/// What a bare token can be read as. At most one classification is active;
/// a numeric token always carries its float reading and, when the tolerance
/// check accepts it, an integer reading too.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParseResult {
    /// Not null, not a boolean, not a number. The caller keeps the token as text.
    #[default]
    Nothing,
    Null,
    Bool(bool),
    Number { float: f64, int: Option<i64> },
}

impl ParseResult {
    /// Whether this result can be read as the given type.
    pub fn has(&self, t: crate::Type) -> bool {
        use crate::Type;
        match t {
            Type::Null => self.is_null(),
            Type::Bool => self.as_bool().is_some(),
            Type::Int => self.as_int().is_some(),
            Type::Float => self.as_float().is_some(),
            _ => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParseResult::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParseResult::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParseResult::Number { int, .. } => *int,
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParseResult::Number { float, .. } => Some(*float),
            _ => None,
        }
    }
}

/// Classify a bare token. Rules apply in order: null, true, false, number.
///
/// ```
/// use value_core::{classify, ParseResult};
///
/// assert_eq!(classify("NULL"), ParseResult::Null);
/// assert_eq!(classify("True"), ParseResult::Bool(true));
/// assert_eq!(classify("1.99999999999999").as_int(), Some(2));
/// assert_eq!(classify("2.1").as_int(), None);
/// assert_eq!(classify("hello"), ParseResult::Nothing);
/// ```
pub fn classify(token: &str) -> ParseResult {
    if is_null_token(token) {
        ParseResult::Null
    } else if is_true_token(token) {
        ParseResult::Bool(true)
    } else if is_false_token(token) {
        ParseResult::Bool(false)
    } else if might_be_numeric(token) {
        parse_number(token)
    } else {
        ParseResult::Nothing
    }
}

fn is_null_token(s: &str) -> bool {
    (3..=4).contains(&s.len()) && (s.eq_ignore_ascii_case("null") || s.eq_ignore_ascii_case("nil"))
}

fn is_true_token(s: &str) -> bool {
    s.len() == 4 && s.eq_ignore_ascii_case("true")
}

fn is_false_token(s: &str) -> bool {
    s.len() == 5 && s.eq_ignore_ascii_case("false")
}

/// Cheap first-character check: `false` means the token is definitely not a number.
fn might_be_numeric(s: &str) -> bool {
    matches!(s.as_bytes().first(), Some(b'-' | b'.' | b'0'..=b'9'))
}

fn parse_number(s: &str) -> ParseResult {
    let float = match s.parse::<f64>() {
        Ok(f) if f.is_finite() => f,
        _ => return ParseResult::Nothing,
    };
    ParseResult::Number {
        float,
        int: integer_reading(float),
    }
}

/// Truncate toward zero, then accept either the truncation or the next integer
/// up if the float sits within `INT_EPSILON` of it.
fn integer_reading(f: f64) -> Option<i64> {
    let i = f.trunc() as i64;
    if (f - i as f64).abs() < INT_EPSILON {
        return Some(i);
    }
    let next = i.checked_add(1)?;
    if (f - next as f64).abs() < INT_EPSILON {
        return Some(next);
    }
    None
}
