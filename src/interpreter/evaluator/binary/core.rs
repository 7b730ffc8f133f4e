use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// If either operand is symbolic the node is rebuilt as a residual over
    /// the evaluated operands. Otherwise the operator is routed to its handler:
    /// arithmetic to `eval_arithmetic`, relational and equality operators to
    /// `eval_comparison`, `&&` and `||` to `eval_logic`. The reserved
    /// operators `~`, `->`, `&`, `|` and `=>` have no reduction rule and
    /// always produce a residual.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use diophant::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let result = Environment::eval_binary(BinaryOperator::Plus, Value::from(3), Value::from(4));
    /// assert_eq!(result.unwrap(), Value::from(7));
    ///
    /// let residual =
    ///     Environment::eval_binary(BinaryOperator::Arrow, Value::from(1), Value::Boolean(true));
    /// assert_eq!(residual.unwrap().to_string(), "1 -> true");
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Arrow, BooleanAnd, BooleanOr, Divide, Equal, Greater, GreaterEqual,
            IntuitionisticAnd, IntuitionisticImplies, IntuitionisticOr, Less, LessEqual, Minus,
            Modulo, Plus, Power, Tilde, Times, Unequal,
        };

        if left.is_symbolic() || right.is_symbolic() {
            return Ok(Value::binary(left, op, right));
        }

        match op {
            Plus | Minus | Times | Divide | Modulo | Power => {
                Self::eval_arithmetic(op, &left, &right)
            },
            Equal | Unequal | GreaterEqual | LessEqual | Greater | Less => {
                Self::eval_comparison(op, &left, &right)
            },
            BooleanAnd | BooleanOr => Self::eval_logic(op, &left, &right),
            Tilde | Arrow | IntuitionisticAnd | IntuitionisticOr | IntuitionisticImplies => {
                Ok(Value::binary(left, op, right))
            },
        }
    }
}
