//! Tag-based checks for the primitive and built-in object kinds.
//!
//! Each check answers from `typeof` ([`Value::type_of`]) or from the
//! internal tag ([`Value::class_tag`]). Wrapper objects carry the tag of the
//! primitive they box, so `new String("a")` passes [`is_string`] just like
//! `"a"` does.

use core_types::Value;

/// `typeof value === "undefined"`
pub fn is_undefined(value: &Value) -> bool {
    value.type_of() == "undefined"
}

/// Internal tag is exactly `String`.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use type_checks::is_string;
///
/// assert!(is_string(&Value::string("")));
/// assert!(is_string(&Value::string("abc").to_object().unwrap()));
/// assert!(!is_string(&Value::Smi(1)));
/// ```
pub fn is_string(value: &Value) -> bool {
    value.class_tag() == "String"
}

/// Internal tag is exactly `Boolean`.
pub fn is_boolean(value: &Value) -> bool {
    value.class_tag() == "Boolean"
}

/// `typeof value === "object"` and the value is not `null`.
pub fn is_object(value: &Value) -> bool {
    value.type_of() == "object" && !matches!(value, Value::Null)
}

/// `typeof value === "function"`, or an object whose internal tag is
/// `Function` (host objects that are not callable but claim to be functions).
///
/// # Examples
///
/// ```
/// use core_types::{JsObject, ObjectClass, Value};
/// use type_checks::is_function;
///
/// assert!(is_function(&Value::function("f")));
///
/// let exotic = JsObject::new(ObjectClass::Object).with_to_string_tag("Function");
/// assert!(is_function(&Value::from(exotic)));
///
/// assert!(!is_function(&Value::object()));
/// ```
pub fn is_function(value: &Value) -> bool {
    value.type_of() == "function" || (is_object(value) && value.class_tag() == "Function")
}

/// `typeof value === "symbol"` or internal tag is `Symbol`.
pub fn is_symbol(value: &Value) -> bool {
    value.type_of() == "symbol" || value.class_tag() == "Symbol"
}

/// Internal tag is exactly `Date`.
pub fn is_date(value: &Value) -> bool {
    value.class_tag() == "Date"
}

/// Internal tag is exactly `RegExp`.
pub fn is_regexp(value: &Value) -> bool {
    value.class_tag() == "RegExp"
}
