//! JavaScript value representation.
//!
//! This module provides the core `Value` enum covering every kind of value a
//! script can hand to a classifier: primitives stored inline and heap objects
//! carrying their built-in class.

use num_bigint::BigInt;
use std::fmt;

use crate::{JsObject, ObjectClass, Symbol};

/// Represents any JavaScript value.
///
/// Numbers keep the engine's split between small integers (`Smi`) and
/// doubles; both report the `"number"` type and the `Number` tag.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::Smi(42);
/// let float = Value::Double(3.14);
///
/// assert_eq!(undefined.type_of(), "undefined");
/// assert_eq!(number.type_of(), "number");
/// assert_eq!(float.class_tag(), "Number");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// Small integer (fits in 32 bits, tagged representation)
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// JavaScript string value
    String(std::string::String),
    /// JavaScript symbol value
    Symbol(Symbol),
    /// JavaScript BigInt (arbitrary precision integer)
    BigInt(BigInt),
    /// Heap-allocated object
    Object(JsObject),
}

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a number value
    pub fn number(n: f64) -> Self {
        Value::Double(n)
    }

    /// Create a fresh, unique symbol value
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Symbol::new(description))
    }

    /// Create an empty ordinary object
    pub fn object() -> Self {
        Value::Object(JsObject::new(ObjectClass::Object))
    }

    /// Create an array object from elements
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Object(JsObject::new(ObjectClass::Array(elements)))
    }

    /// Create a callable function object
    pub fn function(name: impl Into<String>) -> Self {
        Value::Object(JsObject::new(ObjectClass::Function { name: name.into() }))
    }

    /// Create a Date object from a time value in milliseconds since the epoch
    pub fn date(time_value: f64) -> Self {
        Value::Object(JsObject::new(ObjectClass::Date(time_value)))
    }

    /// Create a RegExp object
    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::Object(JsObject::new(ObjectClass::RegExp {
            source: source.into(),
            flags: flags.into(),
        }))
    }

    /// Create an Error object
    pub fn error(message: impl Into<String>) -> Self {
        Value::Object(JsObject::new(ObjectClass::Error {
            message: message.into(),
        }))
    }

    /// The ToObject operation: box a primitive into its wrapper object.
    ///
    /// Objects are returned unchanged. `undefined` and `null` have no
    /// wrapper and yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// let boxed = Value::string("abc").to_object().unwrap();
    /// assert_eq!(boxed.type_of(), "object");
    /// assert_eq!(boxed.class_tag(), "String");
    /// assert!(Value::Null.to_object().is_none());
    /// ```
    pub fn to_object(&self) -> Option<Value> {
        let class = match self {
            Value::Undefined | Value::Null => return None,
            Value::Boolean(b) => ObjectClass::Boolean(*b),
            Value::Smi(n) => ObjectClass::Number(f64::from(*n)),
            Value::Double(n) => ObjectClass::Number(*n),
            Value::String(s) => ObjectClass::String(s.clone()),
            Value::Symbol(s) => ObjectClass::Symbol(s.clone()),
            Value::BigInt(n) => ObjectClass::BigInt(n.clone()),
            Value::Object(_) => return Some(self.clone()),
        };
        Some(Value::Object(JsObject::new(class)))
    }

    /// Returns the JavaScript typeof result for this value.
    ///
    /// - undefined → "undefined"
    /// - null → "object" (historical quirk)
    /// - callable objects → "function"
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Undefined.type_of(), "undefined");
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::Boolean(true).type_of(), "boolean");
    /// assert_eq!(Value::function("f").type_of(), "function");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // JavaScript quirk
            Value::Boolean(_) => "boolean",
            Value::Smi(_) | Value::Double(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::BigInt(_) => "bigint",
            Value::Object(obj) if obj.is_callable() => "function",
            Value::Object(_) => "object",
        }
    }

    /// Returns the internal tag, as embedded by `Object.prototype.toString`
    /// in `[object <tag>]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Null.class_tag(), "Null");
    /// assert_eq!(Value::string("x").class_tag(), "String");
    /// assert_eq!(Value::regexp("a+", "g").class_tag(), "RegExp");
    /// ```
    pub fn class_tag(&self) -> &str {
        match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Smi(_) | Value::Double(_) => "Number",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::BigInt(_) => "BigInt",
            Value::Object(obj) => obj.class_tag(),
        }
    }

    /// Text carried by a string primitive or a String wrapper object.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Object(obj) => match obj.class() {
                ObjectClass::String(s) => Some(s),
                _ => None,
            },
            _ => None,
        }
    }

    /// Numeric value of a number primitive. Wrapper objects yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Smi(n) => Some(f64::from(*n)),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Smi(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<JsObject> for Value {
    fn from(obj: JsObject) -> Self {
        Value::Object(obj)
    }
}

/// Number-to-string conversion shared by primitives and Number wrappers.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        // Integer-valued doubles display without decimal point
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

/// Implementation of Display trait for JavaScript string conversion.
///
/// This follows JavaScript's `String()` conversion rules, simplified for
/// objects without a custom representation to `[object <tag>]`.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Undefined.to_string(), "undefined");
/// assert_eq!(Value::Null.to_string(), "null");
/// assert_eq!(Value::Boolean(true).to_string(), "true");
/// assert_eq!(Value::Smi(42).to_string(), "42");
/// assert_eq!(Value::array(vec![Value::Smi(1), Value::string("a")]).to_string(), "1,a");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Smi(n) => write!(f, "{}", n),
            Value::Double(n) => write_number(f, *n),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::Object(obj) => match obj.class() {
                ObjectClass::Array(elements) => {
                    for (i, element) in elements.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        // null and undefined elements join as empty strings
                        if !matches!(element, Value::Undefined | Value::Null) {
                            write!(f, "{}", element)?;
                        }
                    }
                    Ok(())
                }
                ObjectClass::Function { name } => {
                    write!(f, "function {}() {{ [native code] }}", name)
                }
                ObjectClass::Error { message } if message.is_empty() => write!(f, "Error"),
                ObjectClass::Error { message } => write!(f, "Error: {}", message),
                ObjectClass::Boolean(b) => write!(f, "{}", b),
                ObjectClass::Number(n) => write_number(f, *n),
                ObjectClass::String(s) => write!(f, "{}", s),
                ObjectClass::Symbol(s) => write!(f, "{}", s),
                ObjectClass::BigInt(n) => write!(f, "{}", n),
                ObjectClass::RegExp { source, flags } => write!(f, "/{}/{}", source, flags),
                _ => write!(f, "[object {}]", obj.class_tag()),
            },
        }
    }
}
