//! Expression evaluation core: operators, tokens, parsing, evaluation.

pub mod evaluator;
mod operator;
pub mod parser;

pub use operator::Operator;
pub(crate) use operator::check_finite;

use thiserror::Error;

/// Result type for expression evaluation
pub type EvalResult<T> = Result<T, EvalError>;

/// The single evaluation error taxonomy.
///
/// Every failure in the expression pipeline is an `EvalError`; the variants
/// label the cause for diagnostics, and every one of them is handled by the
/// same engine policy (blank the current entry, keep the total).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Empty expression provided
    #[error("Empty expression")]
    Empty,
    /// Expression text failed to tokenize or parse
    #[error("Malformed expression: {0}")]
    Malformed(String),
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result left the finite f64 range
    #[error("Overflow: result exceeds finite range")]
    Overflow,
    /// Square root of a negative operand
    #[error("Square root of negative number")]
    NegativeSquareRoot,
}
