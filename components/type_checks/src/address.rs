//! IPv4 dotted-quad recognition.

use std::sync::LazyLock;

use core_types::Value;
use regex::Regex;

/// Decimal 0-255 without leading zeros (other than `0` itself).
const OCTET: &str = r"(?:2(?:[0-4][0-9]|5[0-5])|1[0-9]{2}|[1-9]?[0-9])";

static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    log::debug!("compiling IPv4 pattern");
    Regex::new(&format!(r"^{OCTET}(?:\.{OCTET}){{3}}$")).expect("IPv4 pattern is valid")
});

/// Whether `text` is exactly four dot-separated decimal octets.
///
/// No CIDR suffix, surrounding whitespace, signs, or octal/hex octets.
///
/// # Examples
///
/// ```
/// use type_checks::is_ipv4_str;
///
/// assert!(is_ipv4_str("255.255.255.255"));
/// assert!(!is_ipv4_str("256.1.1.1"));
/// assert!(!is_ipv4_str("01.1.1.1"));
/// ```
pub fn is_ipv4_str(text: &str) -> bool {
    IPV4_PATTERN.is_match(text)
}

/// Classifies `value` as an IPv4 address. Non-string values are `false`.
pub fn is_ipv4(value: &Value) -> bool {
    value.as_text().is_some_and(is_ipv4_str)
}
