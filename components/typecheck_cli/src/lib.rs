//! Type-check CLI Library
//!
//! Provides the Checker and supporting modules for the `typecheck` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod checker;
pub mod cli;
pub mod error;
pub mod repl;

pub use checker::{Check, Checker, Report};
pub use cli::Cli;
pub use error::{CliError, CliResult};
