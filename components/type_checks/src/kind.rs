//! The classification space as a value.
//!
//! Classifications overlap: `"42"` is a `String`, and in loose mode also a
//! `Number` and an `Integer`. [`classify`] reports all of them.

use std::fmt;
use std::str::FromStr;

use core_types::Value;

use crate::error::ParseNameError;
use crate::number::{is_integer, is_number, NumericMode};
use crate::primitive::{
    is_boolean, is_date, is_function, is_object, is_regexp, is_string, is_symbol, is_undefined,
};

/// One classification a value may satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// See [`is_undefined`]
    Undefined,
    /// See [`is_string`]
    String,
    /// See [`is_boolean`]
    Boolean,
    /// See [`is_number`]
    Number,
    /// See [`is_integer`]
    Integer,
    /// See [`is_object`]
    Object,
    /// See [`is_function`]
    Function,
    /// See [`is_symbol`]
    Symbol,
    /// See [`is_date`]
    Date,
    /// See [`is_regexp`]
    RegExp,
}

impl ValueKind {
    /// Every kind, in declaration order
    pub const ALL: [ValueKind; 10] = [
        ValueKind::Undefined,
        ValueKind::String,
        ValueKind::Boolean,
        ValueKind::Number,
        ValueKind::Integer,
        ValueKind::Object,
        ValueKind::Function,
        ValueKind::Symbol,
        ValueKind::Date,
        ValueKind::RegExp,
    ];

    /// Lowercase kind name
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::Integer => "integer",
            ValueKind::Object => "object",
            ValueKind::Function => "function",
            ValueKind::Symbol => "symbol",
            ValueKind::Date => "date",
            ValueKind::RegExp => "regexp",
        }
    }

    /// Run this kind's predicate. `mode` only affects `Number` and `Integer`.
    pub fn check(self, value: &Value, mode: NumericMode) -> bool {
        match self {
            ValueKind::Undefined => is_undefined(value),
            ValueKind::String => is_string(value),
            ValueKind::Boolean => is_boolean(value),
            ValueKind::Number => is_number(value, mode),
            ValueKind::Integer => is_integer(value, mode),
            ValueKind::Object => is_object(value),
            ValueKind::Function => is_function(value),
            ValueKind::Symbol => is_symbol(value),
            ValueKind::Date => is_date(value),
            ValueKind::RegExp => is_regexp(value),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError::ValueKind(s.to_string()))
    }
}

/// Every kind `value` satisfies, in [`ValueKind::ALL`] order.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use type_checks::{classify, NumericMode, ValueKind};
///
/// let kinds = classify(&Value::string("42"), NumericMode::Loose);
/// assert_eq!(kinds, vec![ValueKind::String, ValueKind::Number, ValueKind::Integer]);
///
/// assert!(classify(&Value::Null, NumericMode::Loose).is_empty());
/// ```
pub fn classify(value: &Value, mode: NumericMode) -> Vec<ValueKind> {
    ValueKind::ALL
        .into_iter()
        .filter(|kind| kind.check(value, mode))
        .collect()
}
