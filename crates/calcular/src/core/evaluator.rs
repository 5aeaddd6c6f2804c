//! AST evaluation for the restricted expression language.

use crate::core::parser::{AstNode, Parser};
use crate::core::{check_finite, EvalResult};

/// Evaluates an AST node and returns the result
pub fn evaluate(node: &AstNode) -> EvalResult<f64> {
    match node {
        AstNode::Number(n) => Ok(*n),
        // Negating a finite value cannot overflow
        AstNode::Negate(inner) => Ok(-evaluate(inner)?),
        AstNode::BinaryOp { left, op, right } => {
            let left_val = evaluate(left)?;
            let right_val = evaluate(right)?;
            op.apply(left_val, right_val)
        }
    }
}

/// Parses and evaluates a string expression.
///
/// Guarantees a finite result: oversized literals saturate to infinity in
/// `str::parse`, so the finite check runs on the final value rather than
/// only inside operator application.
pub fn evaluate_str(input: &str) -> EvalResult<f64> {
    let ast = Parser::parse_str(input)?;
    let value = evaluate(&ast)?;
    check_finite(value)
}
