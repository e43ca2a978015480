//! Property tests over generated inputs

use core_types::Value;
use proptest::prelude::*;
use type_checks::{
    is_color_str, is_integer, is_ipv4_str, is_number, is_numeric_literal, ColorFormat,
    ColorSelector, NumericMode,
};

fn numeric_literal() -> impl Strategy<Value = String> {
    r"[-+]?([0-9]{1,12}|[0-9]{0,6}\.[0-9]{1,6})([eE][-+]?[0-9]{1,3})?"
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        any::<i32>().prop_map(Value::Smi),
        any::<f64>().prop_map(Value::Double),
        ".{0,16}".prop_map(Value::string),
        numeric_literal().prop_map(Value::string),
        Just(Value::object()),
        Just(Value::function("f")),
    ]
}

fn format_subset() -> impl Strategy<Value = Vec<ColorFormat>> {
    proptest::sample::subsequence(ColorFormat::ALL.to_vec(), 0..=5)
}

fn color_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "#[0-9a-fA-F]{3,6}",
        "rgba?\\([0-9]{1,3}, ?[0-9]{1,3}, ?[0-9]{1,3}(, ?0?\\.[0-9])?\\)",
        "hsla?\\([0-9]{1,3}, ?[0-9]{1,3}%, ?[0-9]{1,3}%(, ?1)?\\)",
        ".{0,12}",
    ]
}

proptest! {
    #[test]
    fn numeric_text_is_number_only_when_loose(text in numeric_literal()) {
        prop_assert!(is_numeric_literal(&text));
        let value = Value::string(text);
        prop_assert!(is_number(&value, NumericMode::Loose));
        prop_assert!(!is_number(&value, NumericMode::Strict));
    }

    #[test]
    fn integer_implies_number(value in any_value(), strict in any::<bool>()) {
        let mode = NumericMode::from(strict);
        if is_integer(&value, mode) {
            prop_assert!(is_number(&value, mode));
        }
    }

    #[test]
    fn strict_implies_loose(value in any_value()) {
        if is_number(&value, NumericMode::Strict) {
            prop_assert!(is_number(&value, NumericMode::Loose));
        }
        if is_integer(&value, NumericMode::Strict) {
            prop_assert!(is_integer(&value, NumericMode::Loose));
        }
    }

    #[test]
    fn color_selector_is_monotonic(
        text in color_like(),
        smaller in format_subset(),
        extra in format_subset(),
    ) {
        let mut larger = smaller.clone();
        larger.extend(extra);
        if is_color_str(&text, &ColorSelector::Many(smaller)) {
            prop_assert!(is_color_str(&text, &ColorSelector::Many(larger)));
        }
    }

    #[test]
    fn all_selector_matches_any_single_format(text in color_like()) {
        let any_single = ColorFormat::ALL
            .into_iter()
            .any(|format| is_color_str(&text, &format.into()));
        prop_assert_eq!(any_single, is_color_str(&text, &ColorSelector::All));
    }

    #[test]
    fn ipv4_accepts_canonical_octets(a: u8, b: u8, c: u8, d: u8) {
        let text = format!("{a}.{b}.{c}.{d}");
        prop_assert!(is_ipv4_str(&text));
    }

    #[test]
    fn ipv4_rejects_out_of_range_octet(octet in 256u32..100_000, position in 0usize..4) {
        let mut octets = vec!["1".to_string(); 4];
        octets[position] = octet.to_string();
        prop_assert!(!is_ipv4_str(&octets.join(".")));
    }

    #[test]
    fn rgb_channels_follow_range(r in 0u32..512, g in any::<u8>(), b in any::<u8>()) {
        let text = format!("rgb({r}, {g}, {b})");
        prop_assert_eq!(is_color_str(&text, &ColorFormat::Rgb.into()), r <= 255);
    }
}
