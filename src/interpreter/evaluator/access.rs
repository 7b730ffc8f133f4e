use crate::{
    ast::Member,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates application of an evaluated callee to an evaluated argument.
    ///
    /// The language has no function values, so applying a symbolic callee
    /// yields a residual application and applying anything concrete fails.
    ///
    /// # Errors
    /// `InvalidOperation` if the callee is concrete.
    pub fn eval_apply(function: Value, argument: Value) -> EvalResult<Value> {
        if function.is_symbolic() {
            return Ok(Value::apply(function, argument));
        }
        Err(RuntimeError::InvalidOperation { details: format!("cannot apply {} as a function",
                                                              function.kind()) })
    }

    /// Evaluates member access on an evaluated object.
    ///
    /// - `.name` on an object returns the earliest entry with that key.
    /// - `.n` on a list returns element `n`, counting from zero.
    /// - Any accessor on a symbolic target yields a residual.
    ///
    /// # Errors
    /// - `UnknownMember` if an object has no entry with the key.
    /// - `IndexOutOfBounds` if a list is too short.
    /// - `InvalidOperation` for any other target.
    ///
    /// # Example
    /// ```
    /// use diophant::{
    ///     ast::Member,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let list = Value::from(vec![Value::from(10), Value::from(20)]);
    /// let second = Environment::eval_member(list.clone(), &Member::Index(1)).unwrap();
    /// assert_eq!(second, Value::from(20));
    /// assert!(Environment::eval_member(list, &Member::Index(2)).is_err());
    ///
    /// let object = Value::object(vec![("a".to_string(), Value::from(1)),
    ///                                 ("a".to_string(), Value::from(2))]);
    /// let first = Environment::eval_member(object, &Member::Name("a".to_string())).unwrap();
    /// assert_eq!(first, Value::from(1));
    /// ```
    pub fn eval_member(object: Value, member: &Member) -> EvalResult<Value> {
        if object.is_symbolic() {
            return Ok(Value::member(object, member.clone()));
        }

        match (&object, member) {
            (Value::Object(entries), Member::Name(name)) => {
                entries.iter()
                       .find(|(key, _)| key == name)
                       .map(|(_, value)| value.clone())
                       .ok_or_else(|| RuntimeError::UnknownMember { member: name.clone() })
            },
            (Value::List(elements), Member::Index(index)) => {
                elements.get(*index)
                        .cloned()
                        .ok_or(RuntimeError::IndexOutOfBounds { len:   elements.len(),
                                                                found: *index, })
            },
            _ => Err(RuntimeError::InvalidOperation { details: format!("cannot access member '{member}' of {}",
                                                                       object.kind()) }),
        }
    }
}
