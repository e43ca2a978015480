//! Every classifier answers every input without panicking

use core_types::{JsObject, ObjectClass, Value};
use type_checks::{
    classify, is_color, is_integer, is_ipv4, is_number, ColorFormat, ColorSelector, NumericMode,
    ValueKind,
};

fn awkward_values() -> Vec<Value> {
    vec![
        Value::Undefined,
        Value::Null,
        Value::string(""),
        Value::string("\u{0}"),
        Value::string("٤٢"),
        Value::Double(f64::NAN),
        Value::Double(-0.0),
        Value::object(),
        Value::array(vec![]),
        Value::array(vec![Value::Undefined, Value::Null]),
        Value::from(JsObject::new(ObjectClass::Object).with_to_string_tag("")),
        Value::from(JsObject::new(ObjectClass::Object).with_to_string_tag("Number")),
        Value::from(JsObject::new(ObjectClass::Arguments)),
    ]
}

#[test]
fn test_classifiers_are_total() {
    let selectors = [
        ColorSelector::All,
        ColorSelector::Many(vec![]),
        ColorSelector::Single(ColorFormat::Hsla),
    ];
    for value in awkward_values() {
        for mode in [NumericMode::Strict, NumericMode::Loose] {
            let _ = classify(&value, mode);
        }
        for selector in &selectors {
            assert!(!is_color(&value, selector), "{value:?}");
        }
        assert!(!is_ipv4(&value), "{value:?}");
    }
}

#[test]
fn test_garbage_is_not_numeric() {
    for value in [Value::string(""), Value::object(), Value::Null] {
        assert!(!is_number(&value, NumericMode::Loose));
        assert!(!is_integer(&value, NumericMode::Loose));
    }
}

#[test]
fn test_unicode_digits_are_not_numeric() {
    assert!(!is_number(&Value::string("٤٢"), NumericMode::Loose));
}

#[test]
fn test_spoofed_number_tag_is_number_not_integer() {
    let spoofed = Value::from(JsObject::new(ObjectClass::Object).with_to_string_tag("Number"));
    assert!(is_number(&spoofed, NumericMode::Strict));
    assert!(!is_integer(&spoofed, NumericMode::Loose));
    assert_eq!(
        classify(&spoofed, NumericMode::Loose),
        vec![ValueKind::Number, ValueKind::Object]
    );
}

#[test]
fn test_every_kind_is_reachable() {
    let witnesses = [
        (ValueKind::Undefined, Value::Undefined),
        (ValueKind::String, Value::string("s")),
        (ValueKind::Boolean, Value::Boolean(false)),
        (ValueKind::Number, Value::Double(0.5)),
        (ValueKind::Integer, Value::Smi(3)),
        (ValueKind::Object, Value::object()),
        (ValueKind::Function, Value::function("f")),
        (ValueKind::Symbol, Value::symbol(None)),
        (ValueKind::Date, Value::date(0.0)),
        (ValueKind::RegExp, Value::regexp(".", "")),
    ];
    for (kind, value) in witnesses {
        assert!(kind.check(&value, NumericMode::Strict), "{kind}");
    }
}
