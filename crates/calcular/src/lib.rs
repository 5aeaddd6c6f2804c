//! Calcular - Two-Line Calculator Expression Engine
//!
//! This crate implements the expression state machine behind a desktop-style
//! calculator with two display lines: a committed total expression on top and
//! the entry being typed underneath. Digits grow the entry, operators commit
//! it onto the total, and evaluation folds the whole total back into a single
//! result entry that the next keystroke can extend.
//!
//! The expression language is deliberately small: decimal literals, the four
//! infix operators with standard precedence, and a leading minus so committed
//! negative results re-parse. Anything else is reported as a malformed
//! expression, the entry line blanks, and the committed total survives for
//! the user to continue from.
//!
//! # Example
//!
//! ```rust
//! use calcular::prelude::*;
//!
//! let mut engine = ExpressionEngine::new();
//! engine.push_digit('4');
//! engine.push_operator(Operator::Multiply);
//! assert_eq!(engine.total_display(), "4 × ");
//!
//! engine.push_digit('5');
//! engine.evaluate().unwrap();
//! assert_eq!(engine.current_display(), "20");
//!
//! // Results feed the next expression
//! engine.push_operator(Operator::Add);
//! engine.push_digit('2');
//! engine.evaluate().unwrap();
//! assert_eq!(engine.current_display(), "22");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod engine;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{evaluate, evaluate_str};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{EvalError, EvalResult, Operator};
    pub use crate::engine::{format_value, ExpressionEngine};
}
