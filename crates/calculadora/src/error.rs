//! Error types for the CLI.

use calcular::core::EvalError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Everything that can go wrong outside the expression engine itself
#[derive(Debug, Error)]
pub enum CliError {
    /// Expression evaluation error surfaced by the engine
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvalError),

    /// Reading the session script or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal keypad shell failed to start, draw, or restore
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl CliError {
    /// Wraps a terminal shell failure
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal(message.into())
    }
}
