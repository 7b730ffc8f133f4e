use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            core::{Environment, EvalResult},
            utils::operand_mismatch,
        },
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates an arithmetic operator on two rationals.
    ///
    /// All results are exact and in lowest terms. `%` is the truncated
    /// remainder, and `^` requires an integer exponent no larger than
    /// [`MAX_EXPONENT`](crate::util::num::MAX_EXPONENT) in magnitude.
    ///
    /// # Errors
    /// - `InvalidOperation` if either operand is not a rational.
    /// - `DivisionByZero` for `/` or `%` by zero, or a zero base raised to a
    ///   negative power.
    /// - `ExponentTooLarge` for a fractional or oversized exponent.
    ///
    /// # Example
    /// ```
    /// use diophant::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let third = Environment::eval_arithmetic(BinaryOperator::Divide,
    ///                                          &Value::from(1),
    ///                                          &Value::from(3)).unwrap();
    /// let sixth = Environment::eval_arithmetic(BinaryOperator::Divide,
    ///                                          &Value::from(1),
    ///                                          &Value::from(6)).unwrap();
    /// let sum = Environment::eval_arithmetic(BinaryOperator::Plus, &third, &sixth).unwrap();
    /// assert_eq!(sum.to_string(), "1/2");
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let (Value::Rational(a), Value::Rational(b)) = (left, right) else {
            return Err(operand_mismatch(op, left, right));
        };

        let result = match op {
            BinaryOperator::Plus => a + b,
            BinaryOperator::Minus => a - b,
            BinaryOperator::Times => a * b,
            BinaryOperator::Divide => a.checked_div(b)?,
            BinaryOperator::Modulo => a.checked_rem(b)?,
            BinaryOperator::Power => a.checked_pow(b)?,
            _ => return Err(operand_mismatch(op, left, right)),
        };

        Ok(Value::Rational(result))
    }
}
