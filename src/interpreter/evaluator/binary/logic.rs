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
    /// Evaluates `&&` or `||` on two booleans.
    ///
    /// Both operands have already been evaluated by the time this runs, so
    /// neither operator short-circuits.
    ///
    /// # Errors
    /// `InvalidOperation` unless both operands are booleans.
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        match (op, left, right) {
            (BinaryOperator::BooleanAnd, Value::Boolean(a), Value::Boolean(b)) => {
                Ok(Value::Boolean(*a && *b))
            },
            (BinaryOperator::BooleanOr, Value::Boolean(a), Value::Boolean(b)) => {
                Ok(Value::Boolean(*a || *b))
            },
            _ => Err(operand_mismatch(op, left, right)),
        }
    }
}
