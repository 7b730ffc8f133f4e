use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the symbol environment of a session.
///
/// This struct holds every binding and declaration made so far. Both tables
/// are append-only: a name is bound at most once and declared at most once,
/// and nothing is ever removed or replaced.
///
/// ## Usage
///
/// `Environment` is created once per session and passed to every statement's
/// reduction. Bound values are stored unevaluated; [`Environment::evaluate`]
/// resolves them each time a symbol is looked up.
#[derive(Debug)]
pub struct Environment {
    /// Name to bound expression.
    bindings:     HashMap<String, Value>,
    /// Name to declared type expression.
    declarations: HashMap<String, Value>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates a new environment seeded with `null`, `true` and `false`.
    ///
    /// # Example
    /// ```
    /// use diophant::interpreter::{evaluator::core::Environment, value::core::Value};
    ///
    /// let env = Environment::new();
    /// assert_eq!(env.lookup("true"), Some(&Value::Boolean(true)));
    /// assert_eq!(env.lookup("x"), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let bindings = HashMap::from([("null".to_string(), Value::Null),
                                      ("true".to_string(), Value::Boolean(true)),
                                      ("false".to_string(), Value::Boolean(false))]);
        Self { bindings,
               declarations: HashMap::new() }
    }

    /// Returns the unevaluated expression bound to `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Returns the declared type of `name`.
    #[must_use]
    pub fn declaration(&self, name: &str) -> Option<&Value> {
        self.declarations.get(name)
    }

    /// The number of bound names, seeds included.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Binds `name` to `value` without evaluating it.
    ///
    /// # Errors
    /// Returns [`RuntimeError::AlreadyDefined`] if `name` is already bound,
    /// whatever it is bound to.
    ///
    /// # Example
    /// ```
    /// use diophant::interpreter::{evaluator::core::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// assert!(env.define("x", Value::from(5)).is_ok());
    /// assert!(env.define("x", Value::from(5)).is_err());
    /// assert!(env.define("null", Value::Null).is_err());
    /// ```
    pub fn define(&mut self, name: &str, value: Value) -> EvalResult<()> {
        if self.bindings.contains_key(name) {
            return Err(RuntimeError::AlreadyDefined { name: name.to_string() });
        }
        debug!(name, %value, "bind");
        self.bindings.insert(name.to_string(), value);
        Ok(())
    }

    /// Records that `name` has type `ty`.
    ///
    /// A declared name that has no binding evaluates to itself.
    ///
    /// # Errors
    /// Returns [`RuntimeError::AlreadyDeclared`] if `name` was declared before.
    pub fn declare(&mut self, name: &str, ty: Value) -> EvalResult<()> {
        if self.declarations.contains_key(name) {
            return Err(RuntimeError::AlreadyDeclared { name: name.to_string() });
        }
        debug!(name, %ty, "declare");
        self.declarations.insert(name.to_string(), ty);
        Ok(())
    }

    /// Evaluates an expression against this environment.
    ///
    /// Evaluation reduces every subexpression it can and rebuilds the rest as
    /// a residual:
    /// - `null`, booleans, rationals and strings are returned unchanged.
    /// - Symbols are resolved through their bindings, recursively. A declared
    ///   but unbound symbol stays symbolic.
    /// - Lists and objects evaluate their elements in order.
    /// - Operator, application and member nodes evaluate their operands left
    ///   to right, then reduce.
    ///
    /// # Errors
    /// Fails on an unbound, undeclared symbol, on a binding that refers to
    /// itself, and on any operator error such as division by zero.
    ///
    /// # Example
    /// ```
    /// use diophant::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::from(5)).unwrap();
    ///
    /// let expr = Value::binary(Value::symbol("x"), BinaryOperator::Times, Value::from(2));
    /// assert_eq!(env.evaluate(&expr).unwrap(), Value::from(10));
    ///
    /// assert!(env.evaluate(&Value::symbol("y")).is_err());
    /// ```
    pub fn evaluate(&self, value: &Value) -> EvalResult<Value> {
        self.eval(value, &mut HashSet::new())
    }

    /// Evaluates `value`, tracking the symbols currently being resolved.
    fn eval(&self, value: &Value, resolving: &mut HashSet<String>) -> EvalResult<Value> {
        match value {
            Value::Null | Value::Boolean(_) | Value::Rational(_) | Value::String(_) => {
                Ok(value.clone())
            },
            Value::Symbol(name) => self.eval_symbol(value, name, resolving),
            Value::List(elements) => {
                let elements = elements.iter()
                                       .map(|element| self.eval(element, resolving))
                                       .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(elements))
            },
            Value::Object(entries) => {
                let entries =
                    entries.iter()
                           .map(|(key, entry)| Ok((key.clone(), self.eval(entry, resolving)?)))
                           .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::object(entries))
            },
            Value::Unary { op, operand } => {
                let operand = self.eval(operand, resolving)?;
                Self::eval_unary(*op, operand)
            },
            Value::Binary { left, op, right } => {
                let left = self.eval(left, resolving)?;
                let right = self.eval(right, resolving)?;
                Self::eval_binary(*op, left, right)
            },
            Value::Apply { function, argument } => {
                let function = self.eval(function, resolving)?;
                let argument = self.eval(argument, resolving)?;
                Self::eval_apply(function, argument)
            },
            Value::Member { object, member } => {
                let object = self.eval(object, resolving)?;
                Self::eval_member(object, member)
            },
        }
    }

    /// Resolves a symbol through its binding.
    ///
    /// # Parameters
    /// - `symbol`: The symbol node itself, returned as-is when the name is
    ///   declared but unbound.
    /// - `name`: The symbol's name.
    /// - `resolving`: Names whose bindings are being evaluated further up the
    ///   call chain.
    fn eval_symbol(&self,
                   symbol: &Value,
                   name: &str,
                   resolving: &mut HashSet<String>)
                   -> EvalResult<Value> {
        let Some(bound) = self.bindings.get(name) else {
            if self.declarations.contains_key(name) {
                trace!(name, "declared symbol stays symbolic");
                return Ok(symbol.clone());
            }
            return Err(RuntimeError::UndefinedSymbol { name: name.to_string() });
        };

        if !resolving.insert(name.to_string()) {
            return Err(RuntimeError::CircularDefinition { name: name.to_string() });
        }
        trace!(name, %bound, "resolve");
        let result = self.eval(bound, resolving);
        resolving.remove(name);
        result
    }
}
