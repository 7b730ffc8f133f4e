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
    /// Evaluates a comparison operator.
    ///
    /// Two rationals support all six comparisons. Two booleans, and two
    /// nulls, support only `==` and `!=`.
    ///
    /// # Errors
    /// Any other pair of concrete operands is an `InvalidOperation`.
    ///
    /// # Example
    /// ```
    /// use diophant::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let gt = Environment::eval_comparison(BinaryOperator::Greater,
    ///                                       &Value::from(3),
    ///                                       &Value::from(2)).unwrap();
    /// assert_eq!(gt, Value::Boolean(true));
    ///
    /// let nulls =
    ///     Environment::eval_comparison(BinaryOperator::Equal, &Value::Null, &Value::Null).unwrap();
    /// assert_eq!(nulls, Value::Boolean(true));
    ///
    /// assert!(Environment::eval_comparison(BinaryOperator::Less,
    ///                                      &Value::Boolean(false),
    ///                                      &Value::Boolean(true)).is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, Unequal};

        let result = match (left, right) {
            (Value::Rational(a), Value::Rational(b)) => match op {
                Equal => a == b,
                Unequal => a != b,
                GreaterEqual => a >= b,
                LessEqual => a <= b,
                Greater => a > b,
                Less => a < b,
                _ => return Err(operand_mismatch(op, left, right)),
            },
            (Value::Boolean(a), Value::Boolean(b)) if matches!(op, Equal | Unequal) => {
                (a == b) == (op == Equal)
            },
            (Value::Null, Value::Null) if matches!(op, Equal | Unequal) => op == Equal,
            _ => return Err(operand_mismatch(op, left, right)),
        };

        Ok(Value::Boolean(result))
    }
}
