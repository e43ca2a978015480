//! Number and integer recognition tests

use core_types::Value;
use type_checks::{is_integer, is_number, is_numeric_literal};

use type_checks::NumericMode::{Loose, Strict};

#[test]
fn test_number_primitives_pass_in_both_modes() {
    for value in [
        Value::Smi(0),
        Value::Smi(-1),
        Value::Double(1.5),
        Value::Double(f64::NAN),
        Value::Double(f64::NEG_INFINITY),
    ] {
        assert!(is_number(&value, Strict), "{value:?}");
        assert!(is_number(&value, Loose), "{value:?}");
    }
}

#[test]
fn test_numeric_strings_only_pass_loose() {
    for text in ["42", "-3.5", ".5", "1e10", "+2E-3"] {
        let value = Value::string(text);
        assert!(is_number(&value, Loose), "{text}");
        assert!(!is_number(&value, Strict), "{text}");
    }
}

#[test]
fn test_non_numeric_values() {
    for value in [
        Value::string(""),
        Value::string("abc"),
        Value::string("1 2"),
        Value::string(" 1"),
        Value::string("Infinity"),
        Value::Boolean(true),
        Value::Null,
        Value::Undefined,
        Value::BigInt(1.into()),
        Value::object(),
        Value::array(vec![Value::Smi(1)]),
    ] {
        assert!(!is_number(&value, Loose), "{value:?}");
    }
}

#[test]
fn test_is_integer_examples() {
    assert!(is_integer(&Value::string("42"), Loose));
    assert!(!is_integer(&Value::string("42"), Strict));
    assert!(!is_integer(&Value::Double(42.5), Loose));
    assert!(is_integer(&Value::Double(42.0), Strict));
    assert!(is_integer(&Value::Smi(-7), Strict));
}

#[test]
fn test_is_integer_from_text() {
    assert!(is_integer(&Value::string("-0"), Loose));
    assert!(is_integer(&Value::string("2.0"), Loose));
    assert!(is_integer(&Value::string("1e3"), Loose));
    assert!(!is_integer(&Value::string("1e-3"), Loose));
    assert!(!is_integer(&Value::string("0.5"), Loose));
    assert!(!is_integer(&Value::string("1e309"), Loose));
    assert!(!is_integer(&Value::string("ten"), Loose));
}

#[test]
fn test_is_integer_rejects_non_finite() {
    assert!(!is_integer(&Value::Double(f64::NAN), Loose));
    assert!(!is_integer(&Value::Double(f64::INFINITY), Loose));
}

#[test]
fn test_number_wrapper_is_number_but_not_integer() {
    let boxed = Value::Smi(3).to_object().unwrap();
    assert!(is_number(&boxed, Strict));
    assert!(!is_integer(&boxed, Strict));
    assert!(!is_integer(&boxed, Loose));
}

#[test]
fn test_numeric_literal_exponent_case_insensitive() {
    assert!(is_numeric_literal("5e2"));
    assert!(is_numeric_literal("5E2"));
    assert!(!is_numeric_literal("5x2"));
}
