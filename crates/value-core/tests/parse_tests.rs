use value_core::{classify, ParseResult, Type};

// ============================================================================
// Null
// ============================================================================

#[test]
fn null_lowercase() {
    assert_eq!(classify("null"), ParseResult::Null);
}

#[test]
fn null_any_case() {
    assert_eq!(classify("NULL"), ParseResult::Null);
    assert_eq!(classify("Null"), ParseResult::Null);
}

#[test]
fn nil_is_null() {
    assert_eq!(classify("nil"), ParseResult::Null);
    assert_eq!(classify("NIL"), ParseResult::Null);
}

#[test]
fn null_with_padding_is_not_null() {
    assert_eq!(classify("nulls"), ParseResult::Nothing);
    assert_eq!(classify("ni"), ParseResult::Nothing);
}

// ============================================================================
// Bool
// ============================================================================

#[test]
fn true_any_case() {
    assert_eq!(classify("true"), ParseResult::Bool(true));
    assert_eq!(classify("TRUE"), ParseResult::Bool(true));
    assert_eq!(classify("tRuE"), ParseResult::Bool(true));
}

#[test]
fn false_any_case() {
    assert_eq!(classify("false"), ParseResult::Bool(false));
    assert_eq!(classify("FALSE"), ParseResult::Bool(false));
}

#[test]
fn yes_is_not_a_bool_token() {
    assert_eq!(classify("yes"), ParseResult::Nothing);
    assert_eq!(classify("truee"), ParseResult::Nothing);
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn plain_integer() {
    let r = classify("42");
    assert_eq!(r.as_int(), Some(42));
    assert_eq!(r.as_float(), Some(42.0));
}

#[test]
fn negative_integer() {
    assert_eq!(classify("-7").as_int(), Some(-7));
}

#[test]
fn float_noise_below_is_integer() {
    assert_eq!(classify("1.000000000000000000001").as_int(), Some(1));
}

#[test]
fn float_noise_near_next_integer_rounds_up() {
    assert_eq!(classify("1.99999999999999").as_int(), Some(2));
}

#[test]
fn real_float_has_no_int_reading() {
    let r = classify("2.1");
    assert_eq!(r.as_float(), Some(2.1));
    assert_eq!(r.as_int(), None);
    assert!(r.has(Type::Float));
    assert!(!r.has(Type::Int));
}

#[test]
fn leading_dot() {
    assert_eq!(classify(".5").as_float(), Some(0.5));
    assert_eq!(classify(".5").as_int(), None);
}

#[test]
fn exponent_form() {
    assert_eq!(classify("1e3").as_int(), Some(1000));
    assert_eq!(classify("2.5E-1").as_float(), Some(0.25));
}

#[test]
fn whole_float_text_is_integer() {
    assert_eq!(classify("3.0").as_int(), Some(3));
}

#[test]
fn large_magnitude_is_float_only() {
    let r = classify("1e20");
    assert_eq!(r.as_float(), Some(1e20));
    assert_eq!(r.as_int(), None);
}

// ============================================================================
// Nothing
// ============================================================================

#[test]
fn words_are_nothing() {
    assert_eq!(classify("hello"), ParseResult::Nothing);
}

#[test]
fn empty_is_nothing() {
    assert_eq!(classify(""), ParseResult::Nothing);
}

#[test]
fn numeric_prefix_garbage_is_nothing() {
    assert_eq!(classify("12abc"), ParseResult::Nothing);
    assert_eq!(classify("-"), ParseResult::Nothing);
}

#[test]
fn plus_sign_is_not_numeric() {
    assert_eq!(classify("+1"), ParseResult::Nothing);
}

#[test]
fn overflowing_exponent_is_nothing() {
    assert_eq!(classify("1e400"), ParseResult::Nothing);
    assert_eq!(classify("-inf"), ParseResult::Nothing);
}

#[test]
fn has_reports_only_active_reading() {
    assert!(classify("null").has(Type::Null));
    assert!(!classify("null").has(Type::Bool));
    assert!(classify("false").has(Type::Bool));
    assert!(!classify("word").has(Type::String));
}
