//! Core JavaScript value types.
//!
//! This crate provides the value model inspected by the type-check
//! predicates: primitives, symbols and heap objects with their internal tags.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of JavaScript values
//! - [`Symbol`] - Unique, unforgeable symbol tokens
//! - [`JsObject`] - Heap objects and their [`ObjectClass`]
//!
//! # Examples
//!
//! ```
//! use core_types::{JsObject, ObjectClass, Value};
//!
//! let num = Value::Smi(42);
//! assert_eq!(num.type_of(), "number");
//! assert_eq!(num.class_tag(), "Number");
//!
//! let callable_host = JsObject::new(ObjectClass::Object).with_callable(true);
//! assert_eq!(Value::from(callable_host).type_of(), "function");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod json;
mod object;
mod symbol;
mod value;

pub use object::{JsObject, ObjectClass};
pub use symbol::Symbol;
pub use value::Value;
