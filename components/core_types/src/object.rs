//! Heap object representation.
//!
//! Objects carry the built-in kind they were created as ([`ObjectClass`]),
//! whether they are callable, and an optional `Symbol.toStringTag` override.
//! Together these determine both `typeof` and the internal tag reported by
//! `Object.prototype.toString`.

use num_bigint::BigInt;

use crate::{Symbol, Value};

/// The built-in kind of a heap object.
///
/// Wrapper variants (`Boolean`, `Number`, `String`, `Symbol`, `BigInt`)
/// hold the primitive they box, as produced by `new String("x")` and friends.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectClass {
    /// Ordinary object (`{}`)
    Object,
    /// Array exotic object
    Array(Vec<Value>),
    /// Function object
    Function {
        /// The function's `name` property
        name: String,
    },
    /// Error instance
    Error {
        /// The error message
        message: String,
    },
    /// Arguments exotic object
    Arguments,
    /// Boolean wrapper object
    Boolean(bool),
    /// Number wrapper object
    Number(f64),
    /// String wrapper object
    String(String),
    /// Symbol wrapper object (`Object(sym)`)
    Symbol(Symbol),
    /// BigInt wrapper object (`Object(1n)`)
    BigInt(BigInt),
    /// Date instance holding its time value in milliseconds
    Date(f64),
    /// RegExp instance
    RegExp {
        /// Pattern source text
        source: String,
        /// Flag characters
        flags: String,
    },
}

impl ObjectClass {
    /// The builtin tag for this class, as used by `Object.prototype.toString`.
    pub fn name(&self) -> &'static str {
        match self {
            ObjectClass::Object => "Object",
            ObjectClass::Array(_) => "Array",
            ObjectClass::Function { .. } => "Function",
            ObjectClass::Error { .. } => "Error",
            ObjectClass::Arguments => "Arguments",
            ObjectClass::Boolean(_) => "Boolean",
            ObjectClass::Number(_) => "Number",
            ObjectClass::String(_) => "String",
            ObjectClass::Symbol(_) => "Symbol",
            ObjectClass::BigInt(_) => "BigInt",
            ObjectClass::Date(_) => "Date",
            ObjectClass::RegExp { .. } => "RegExp",
        }
    }
}

/// A JavaScript heap object.
///
/// # Examples
///
/// ```
/// use core_types::{JsObject, ObjectClass};
///
/// let date = JsObject::new(ObjectClass::Date(0.0));
/// assert_eq!(date.class_tag(), "Date");
/// assert!(!date.is_callable());
///
/// let spoofed = JsObject::new(ObjectClass::Object).with_to_string_tag("Date");
/// assert_eq!(spoofed.class_tag(), "Date");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsObject {
    class: ObjectClass,
    callable: bool,
    to_string_tag: Option<String>,
}

impl JsObject {
    /// Create an object of the given class.
    ///
    /// Function objects are callable; every other class starts non-callable.
    pub fn new(class: ObjectClass) -> Self {
        let callable = matches!(class, ObjectClass::Function { .. });
        JsObject {
            class,
            callable,
            to_string_tag: None,
        }
    }

    /// Override whether the object has a `[[Call]]` slot.
    ///
    /// Host objects may be callable without being functions, or report the
    /// `Function` tag without being callable.
    pub fn with_callable(mut self, callable: bool) -> Self {
        self.callable = callable;
        self
    }

    /// Set the `Symbol.toStringTag` property.
    pub fn with_to_string_tag(mut self, tag: impl Into<String>) -> Self {
        self.to_string_tag = Some(tag.into());
        self
    }

    /// The object's built-in class
    pub fn class(&self) -> &ObjectClass {
        &self.class
    }

    /// Whether `typeof` reports this object as `"function"`
    pub fn is_callable(&self) -> bool {
        self.callable
    }

    /// The internal tag: the `Symbol.toStringTag` override if present,
    /// otherwise the class name.
    pub fn class_tag(&self) -> &str {
        self.to_string_tag
            .as_deref()
            .unwrap_or_else(|| self.class.name())
    }
}
