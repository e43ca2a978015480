//! IPv4 classification tests

use core_types::Value;
use type_checks::{is_ipv4, is_ipv4_str};

#[test]
fn test_boundaries() {
    assert!(is_ipv4_str("255.255.255.255"));
    assert!(is_ipv4_str("0.0.0.0"));
    assert!(!is_ipv4_str("256.1.1.1"));
    assert!(!is_ipv4_str("1.1.1.260"));
}

#[test]
fn test_leading_zeros_rejected() {
    assert!(!is_ipv4_str("01.1.1.1"));
    assert!(!is_ipv4_str("1.001.1.1"));
    assert!(is_ipv4_str("1.0.1.10"));
}

#[test]
fn test_wrong_shapes() {
    for text in ["", "1.2.3", "1.2.3.4.", ".1.2.3.4", "1.2.3.4:80", "1.2.3.4 ", "::1"] {
        assert!(!is_ipv4_str(text), "{text:?}");
    }
}

#[test]
fn test_value_inputs() {
    assert!(is_ipv4(&Value::string("10.0.0.1")));
    assert!(!is_ipv4(&Value::Double(10.0)));
    assert!(!is_ipv4(&Value::array(vec![Value::string("10.0.0.1")])));
}
