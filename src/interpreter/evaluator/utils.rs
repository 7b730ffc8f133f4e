use std::fmt::Display;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Builds the error for an operator applied to two concrete operands of the
/// wrong kinds.
///
/// # Example
/// ```
/// use diophant::{
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::{evaluator::utils::operand_mismatch, value::core::Value},
/// };
///
/// let error = operand_mismatch(BinaryOperator::Plus, &Value::Boolean(true), &Value::from(1));
/// assert_eq!(error,
///            RuntimeError::InvalidOperation { details: "cannot apply '+' to boolean and rational".to_string() });
/// ```
#[must_use]
pub fn operand_mismatch(op: impl Display, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::InvalidOperation { details: format!("cannot apply '{op}' to {} and {}",
                                                      left.kind(),
                                                      right.kind()) }
}

/// Builds the error for a prefix operator applied to a concrete operand of
/// the wrong kind.
#[must_use]
pub fn unary_mismatch(op: impl Display, operand: &Value) -> RuntimeError {
    RuntimeError::InvalidOperation { details: format!("cannot apply '{op}' to {}", operand.kind()) }
}
