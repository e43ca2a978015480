//! Errors for the fallible edges of the crate.
//!
//! The classifiers themselves are total; only parsing caller-supplied names
//! can fail.

use thiserror::Error;

/// A name that does not identify a supported value kind or color format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNameError {
    /// Not one of `hex`, `rgb`, `rgba`, `hsl`, `hsla`
    #[error("unknown color format `{0}` (expected one of hex, rgb, rgba, hsl, hsla)")]
    ColorFormat(String),
    /// Not one of the value kind names
    #[error("unknown value kind `{0}`")]
    ValueKind(String),
}
