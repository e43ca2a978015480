//! JavaScript Symbol primitive.
//!
//! Symbols are unforgeable tokens: every call to [`Symbol::new`] yields a
//! value that compares equal only to its own clones, regardless of the
//! description attached to it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A JavaScript Symbol value.
///
/// Each symbol has a unique internal ID and an optional description used
/// only for display.
///
/// # Examples
///
/// ```
/// use core_types::Symbol;
///
/// let a = Symbol::new(Some("hex"));
/// let b = Symbol::new(Some("hex"));
///
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// assert_eq!(a.description(), Some("hex"));
/// ```
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<String>,
}

impl Symbol {
    /// Create a new unique symbol with an optional description
    pub fn new(description: Option<&str>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::Relaxed);
        Symbol {
            id,
            description: description.map(str::to_string),
        }
    }

    /// Get the unique ID of this symbol
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the description of this symbol
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Formats as `Symbol(description)`, or `Symbol()` without one.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) if !desc.is_empty() => write!(f, "Symbol({})", desc),
            _ => write!(f, "Symbol()"),
        }
    }
}
