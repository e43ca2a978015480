//! Runtime type checks for JavaScript values
//!
//! This crate provides total predicates over [`core_types::Value`]:
//! - Primitive and built-in kinds (undefined, string, boolean, object,
//!   function, symbol, date, regexp)
//! - Numbers and integers, with strict or loose handling of numeric text
//! - Color literals (hex, rgb, rgba, hsl, hsla)
//! - IPv4 addresses
//!
//! Every check returns `false` for values of the wrong shape; none of them
//! can fail or panic.
//!
//! # Example
//!
//! ```
//! use core_types::Value;
//! use type_checks::{is_color, is_integer, is_ipv4, ColorFormat, ColorSelector, NumericMode};
//!
//! assert!(is_integer(&Value::string("42"), NumericMode::Loose));
//! assert!(!is_integer(&Value::string("42"), NumericMode::Strict));
//!
//! let hex_or_rgb = ColorSelector::from_iter([ColorFormat::Hex, ColorFormat::Rgb]);
//! assert!(is_color(&Value::string("#FFF"), &hex_or_rgb));
//! assert!(!is_color(&Value::string("hsl(0, 0%, 0%)"), &hex_or_rgb));
//!
//! assert!(is_ipv4(&Value::string("192.168.0.1")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod address;
pub mod color;
pub mod error;
pub mod kind;
pub mod number;
pub mod primitive;

// Re-export main types for convenience
pub use address::{is_ipv4, is_ipv4_str};
pub use color::{is_color, is_color_str, matching_formats, ColorFormat, ColorSelector};
pub use error::ParseNameError;
pub use kind::{classify, ValueKind};
pub use number::{
    is_exact_integer, is_integer, is_integer_literal, is_number, is_numeric_literal, NumericMode,
};
pub use primitive::{
    is_boolean, is_date, is_function, is_object, is_regexp, is_string, is_symbol, is_undefined,
};
