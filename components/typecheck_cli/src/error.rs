//! Error types for the CLI

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Input given with `--json` is not valid JSON
    #[error("invalid JSON input `{input}`: {source}")]
    Json {
        /// The offending input
        input: String,
        /// Parser error
        source: serde_json::Error,
    },

    /// `--only` named something that is not a check
    #[error("unknown check `{0}` (expected a value kind, `color` or `ipv4`)")]
    UnknownCheck(String),

    /// REPL error
    #[error("REPL error: {0}")]
    ReplError(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
