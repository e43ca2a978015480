//! Numeric and integer recognition.
//!
//! Recognition is a two-step policy: a typed check on the value's internal
//! tag, then (in [`NumericMode::Loose`] only) a textual check of string
//! values against the numeric-literal grammar. Both steps are public so each
//! can be exercised alone.

use std::sync::LazyLock;

use core_types::Value;
use regex::Regex;

use crate::primitive::is_string;

/// Optional sign, digits or a decimal fraction, optional exponent.
const NUMERIC_LITERAL: &str = r"(?i)^[-+]?(?:[0-9]+|[0-9]*\.[0-9]+)(?:e[-+]?[0-9]+)?$";

static NUMERIC_LITERAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    log::debug!("compiling numeric literal pattern");
    Regex::new(NUMERIC_LITERAL).expect("numeric literal pattern is valid")
});

/// Whether numeric-looking text counts as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumericMode {
    /// Only values whose runtime representation is numeric qualify
    Strict,
    /// Strings matching the numeric-literal grammar also qualify
    #[default]
    Loose,
}

impl NumericMode {
    /// Returns true for [`NumericMode::Strict`]
    pub fn is_strict(self) -> bool {
        self == NumericMode::Strict
    }
}

/// `true` selects strict mode, matching the `strict` flag convention.
impl From<bool> for NumericMode {
    fn from(strict: bool) -> Self {
        if strict {
            NumericMode::Strict
        } else {
            NumericMode::Loose
        }
    }
}

/// Whether `text` is a decimal numeric literal such as `-1`, `.5` or `2.5E-3`.
///
/// No surrounding whitespace, hex/octal prefixes, `Infinity` or `NaN`.
///
/// # Examples
///
/// ```
/// use type_checks::is_numeric_literal;
///
/// assert!(is_numeric_literal("42"));
/// assert!(is_numeric_literal("-.5e+10"));
/// assert!(!is_numeric_literal("1."));
/// assert!(!is_numeric_literal(" 1"));
/// assert!(!is_numeric_literal("0x10"));
/// ```
pub fn is_numeric_literal(text: &str) -> bool {
    NUMERIC_LITERAL_PATTERN.is_match(text)
}

/// Whether `text` is a numeric literal whose value is a finite whole number.
///
/// `"1.0"` and `"1.5e1"` pass, `"15e-2"` does not. Literals that overflow to
/// infinity, such as `"1e400"`, are rejected.
pub fn is_integer_literal(text: &str) -> bool {
    is_numeric_literal(text) && text.parse::<f64>().is_ok_and(is_exact_integer)
}

/// `Number.isInteger` on a number: finite with no fractional part.
pub fn is_exact_integer(n: f64) -> bool {
    n.is_finite() && n.trunc() == n
}

/// Classifies `value` as a number.
///
/// Any value tagged `Number` passes, including `NaN`, infinities and Number
/// wrapper objects. In loose mode, strings matching
/// [`is_numeric_literal`] pass too.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use type_checks::{is_number, NumericMode};
///
/// assert!(is_number(&Value::Double(f64::NAN), NumericMode::Strict));
/// assert!(is_number(&Value::string("3.14"), NumericMode::Loose));
/// assert!(!is_number(&Value::string("3.14"), NumericMode::Strict));
/// ```
pub fn is_number(value: &Value, mode: NumericMode) -> bool {
    if value.class_tag() == "Number" {
        return true;
    }
    !mode.is_strict() && is_numeric_text(value)
}

/// Classifies `value` as an integer.
///
/// Number primitives pass when [`is_exact_integer`] holds; Number wrapper
/// objects never do. In loose mode, strings pass when
/// [`is_integer_literal`] holds.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use type_checks::{is_integer, NumericMode};
///
/// assert!(is_integer(&Value::string("42"), NumericMode::Loose));
/// assert!(!is_integer(&Value::string("42"), NumericMode::Strict));
/// assert!(!is_integer(&Value::Double(42.5), NumericMode::Loose));
/// ```
pub fn is_integer(value: &Value, mode: NumericMode) -> bool {
    if is_number(value, NumericMode::Strict) {
        return value.as_number().is_some_and(is_exact_integer);
    }
    !mode.is_strict() && is_string(value) && value.as_text().is_some_and(is_integer_literal)
}

fn is_numeric_text(value: &Value) -> bool {
    is_string(value) && value.as_text().is_some_and(is_numeric_literal)
}
