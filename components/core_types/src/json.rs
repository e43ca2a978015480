//! Conversion from parsed JSON documents.

use crate::Value;

/// JSON maps onto the value model the way `JSON.parse` would build it.
///
/// Integral numbers that fit in 32 bits become `Smi`, other numbers become
/// `Double`. Object members are not modelled and are dropped.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let json: serde_json::Value = serde_json::from_str(r#"[1, "a", null]"#).unwrap();
/// let value = Value::from(json);
/// assert_eq!(value.class_tag(), "Array");
/// assert_eq!(value.to_string(), "1,a,");
/// ```
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                match n.as_i64().and_then(|i| i32::try_from(i).ok()) {
                    Some(smi) => Value::Smi(smi),
                    None => Value::Double(n.as_f64().unwrap_or(f64::NAN)),
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(_) => Value::object(),
        }
    }
}
