use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::{
            core::{Environment, EvalResult},
            utils::unary_mismatch,
        },
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates a unary operation on an already evaluated operand.
    ///
    /// Supported operators:
    /// - `Negate`: exact negation of a rational.
    /// - `Plus`: identity on a rational.
    /// - `Not`: boolean negation.
    ///
    /// The reserved prefixes `~` and `*`, and any operator applied to a
    /// symbolic operand, produce a residual unary node.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `operand`: Input value.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use diophant::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// // Negation
    /// let v = Environment::eval_unary(UnaryOperator::Negate, Value::from(5)).unwrap();
    /// assert_eq!(v, Value::from(-5));
    ///
    /// // Boolean not
    /// let v = Environment::eval_unary(UnaryOperator::Not, Value::Boolean(false)).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// // Residual
    /// let v = Environment::eval_unary(UnaryOperator::Negate, Value::symbol("x")).unwrap();
    /// assert_eq!(v.to_string(), "-x");
    ///
    /// // Wrong kind
    /// assert!(Environment::eval_unary(UnaryOperator::Not, Value::from(1)).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, operand: Value) -> EvalResult<Value> {
        if op.is_reserved() || operand.is_symbolic() {
            return Ok(Value::unary(op, operand));
        }

        match (op, &operand) {
            (UnaryOperator::Negate, Value::Rational(r)) => Ok(Value::Rational(-r)),
            (UnaryOperator::Plus, Value::Rational(r)) => Ok(Value::Rational(r.clone())),
            (UnaryOperator::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
            _ => Err(unary_mismatch(op, &operand)),
        }
    }
}
