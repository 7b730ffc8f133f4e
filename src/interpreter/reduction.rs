use tracing::trace;

use crate::{
    ast::{Assignment, BinaryOperator, Expr, LiteralValue, Member, Statement, UnaryOperator},
    error::{Error, ParseError, RuntimeError},
    interpreter::{evaluator::core::Environment, value::core::Value},
};

/// One grammar-rule completion, in the order the rules finish.
///
/// A parse tree is turned into a flat sequence of completions by a
/// post-order walk: every operand's completions precede its operator's, and
/// an assignment's target and value precede the assignment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<'a> {
    /// A literal was matched. Pushes one leaf.
    Literal(&'a LiteralValue),
    /// An identifier was matched. Pushes one symbol.
    Identifier(&'a str),
    /// A prefix operation finished. Pops one, pushes one.
    Unary(UnaryOperator),
    /// An infix operation finished. Pops two, pushes one.
    Binary(BinaryOperator),
    /// An application finished. Pops two, pushes one.
    Apply,
    /// A member accessor finished. Pops one, pushes one.
    Member(&'a Member),
    /// A list literal with this many elements finished.
    List(usize),
    /// An object literal with these keys finished.
    Object(Vec<&'a str>),
    /// A `:=` or `=` suffix finished. Pops value and target, binds, pushes
    /// the value.
    Bind,
    /// A `:` suffix finished. Pops the optional initializer, the type and the
    /// target.
    Declare {
        /// Whether an `= value` initializer follows the type.
        initialized: bool,
    },
}

/// Flattens a statement into its rule completions.
///
/// # Example
/// ```
/// use diophant::interpreter::{
///     parser::core::parse_line,
///     reduction::{Completion, completions},
/// };
///
/// let statement = parse_line("x := -y").unwrap();
/// let events = completions(&statement);
/// assert_eq!(events.len(), 4);
/// assert_eq!(events[0], Completion::Identifier("x"));
/// assert_eq!(events[3], Completion::Bind);
/// ```
#[must_use]
pub fn completions(statement: &Statement) -> Vec<Completion<'_>> {
    let mut out = Vec::new();
    push_expr(&statement.expr, &mut out);

    match &statement.assignment {
        Some(Assignment::Infer(value) | Assignment::Set(value)) => {
            push_expr(value, &mut out);
            out.push(Completion::Bind);
        },
        Some(Assignment::Declare { ty, value }) => {
            push_expr(ty, &mut out);
            if let Some(value) = value {
                push_expr(value, &mut out);
            }
            out.push(Completion::Declare { initialized: value.is_some() });
        },
        None => {},
    }

    out
}

/// Appends the completions of `expr` in post-order.
fn push_expr<'a>(expr: &'a Expr, out: &mut Vec<Completion<'a>>) {
    match expr {
        Expr::Literal { value } => out.push(Completion::Literal(value)),
        Expr::Identifier { name } => out.push(Completion::Identifier(name)),
        Expr::List { elements } => {
            for element in elements {
                push_expr(element, out);
            }
            out.push(Completion::List(elements.len()));
        },
        Expr::Object { entries } => {
            for (_, value) in entries {
                push_expr(value, out);
            }
            out.push(Completion::Object(entries.iter().map(|(key, _)| key.as_str()).collect()));
        },
        Expr::Member { object, member } => {
            push_expr(object, out);
            out.push(Completion::Member(member));
        },
        Expr::Apply { function, argument } => {
            push_expr(function, out);
            push_expr(argument, out);
            out.push(Completion::Apply);
        },
        Expr::UnaryOp { op, expr } => {
            push_expr(expr, out);
            out.push(Completion::Unary(*op));
        },
        Expr::BinaryOp { left, op, right } => {
            push_expr(left, out);
            push_expr(right, out);
            out.push(Completion::Binary(*op));
        },
    }
}

/// The operand stack of one statement.
///
/// A `Reduction` borrows the session environment for the duration of one
/// statement. Completions build expression nodes on the stack; assignment
/// completions write to the environment. [`Reduction::finish`] evaluates
/// whatever single value is left.
pub struct Reduction<'env> {
    stack:       Vec<Value>,
    environment: &'env mut Environment,
}

impl<'env> Reduction<'env> {
    /// Starts an empty stack over `environment`.
    pub fn new(environment: &'env mut Environment) -> Self {
        Self { stack: Vec::new(),
               environment }
    }

    /// The current number of values on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Applies one completion to the stack.
    ///
    /// # Errors
    /// - `InvalidOperation` if an assignment target is not a symbol.
    /// - `AlreadyDefined` or `AlreadyDeclared` if the target was bound or
    ///   declared before.
    /// - `IncompleteStatement` if the stack holds fewer operands than the
    ///   completion consumes.
    pub fn apply(&mut self, completion: Completion<'_>) -> Result<(), Error> {
        trace!(?completion, depth = self.depth(), "complete");

        match completion {
            Completion::Literal(literal) => self.stack.push(Value::from(literal)),
            Completion::Identifier(name) => self.stack.push(Value::symbol(name)),
            Completion::Unary(op) => {
                let operand = self.pop()?;
                self.stack.push(Value::unary(op, operand));
            },
            Completion::Binary(op) => {
                let right = self.pop()?;
                let left = self.pop()?;
                self.stack.push(Value::binary(left, op, right));
            },
            Completion::Apply => {
                let argument = self.pop()?;
                let function = self.pop()?;
                self.stack.push(Value::apply(function, argument));
            },
            Completion::Member(member) => {
                let object = self.pop()?;
                self.stack.push(Value::member(object, member.clone()));
            },
            Completion::List(len) => {
                let elements = self.pop_many(len)?;
                self.stack.push(Value::from(elements));
            },
            Completion::Object(keys) => {
                let values = self.pop_many(keys.len())?;
                let entries = keys.into_iter()
                                  .map(str::to_string)
                                  .zip(values)
                                  .collect();
                self.stack.push(Value::object(entries));
            },
            Completion::Bind => {
                let value = self.pop()?;
                let name = self.pop_target()?;
                self.environment.define(&name, value.clone())?;
                self.stack.push(value);
            },
            Completion::Declare { initialized } => {
                let value = if initialized { Some(self.pop()?) } else { None };
                let ty = self.pop()?;
                let name = self.pop_target()?;

                if value.is_some() && self.environment.lookup(&name).is_some() {
                    return Err(RuntimeError::AlreadyDefined { name }.into());
                }
                self.environment.declare(&name, ty)?;
                if let Some(value) = value {
                    self.environment.define(&name, value.clone())?;
                    self.stack.push(value);
                }
            },
        }

        Ok(())
    }

    /// Completes the statement.
    ///
    /// # Returns
    /// - `None` if the stack is empty.
    /// - `Some(value)` with the evaluated single value otherwise.
    ///
    /// # Errors
    /// `IncompleteStatement` if more than one value is left, or any
    /// evaluation error.
    pub fn finish(mut self) -> Result<Option<Value>, Error> {
        match self.stack.len() {
            0 => Ok(None),
            1 => {
                let value = self.pop()?;
                let result = self.environment.evaluate(&value)?;
                trace!(%result, "statement");
                Ok(Some(result))
            },
            depth => Err(ParseError::IncompleteStatement { depth }.into()),
        }
    }

    fn pop(&mut self) -> Result<Value, Error> {
        self.stack
            .pop()
            .ok_or(ParseError::IncompleteStatement { depth: 0 }.into())
    }

    /// Pops the top `len` values, returned in push order.
    fn pop_many(&mut self, len: usize) -> Result<Vec<Value>, Error> {
        let start = self.stack
                        .len()
                        .checked_sub(len)
                        .ok_or(ParseError::IncompleteStatement { depth: self.stack.len() })?;
        Ok(self.stack.split_off(start))
    }

    /// Pops an assignment target, which must be a symbol.
    fn pop_target(&mut self) -> Result<String, Error> {
        match self.pop()? {
            Value::Symbol(name) => Ok(name.to_string()),
            other => Err(RuntimeError::InvalidOperation { details: format!("cannot assign to {}",
                                                                           other.kind()) }.into()),
        }
    }
}

/// Reduces one parsed statement against `environment`.
///
/// The statement's completions are applied in order, then the stack is
/// finished.
///
/// # Errors
/// Any error from [`Reduction::apply`] or [`Reduction::finish`]. Bindings made
/// by completions before the failure are kept.
pub fn reduce(statement: &Statement, environment: &mut Environment) -> Result<Option<Value>, Error> {
    let mut reduction = Reduction::new(environment);
    for completion in completions(statement) {
        reduction.apply(completion)?;
    }
    reduction.finish()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::parser::core::parse_line;

    fn max_depth(source: &str) -> (usize, usize) {
        let statement = parse_line(source).unwrap();
        let mut environment = Environment::new();
        let mut reduction = Reduction::new(&mut environment);
        let mut deepest = 0;
        for completion in completions(&statement) {
            reduction.apply(completion).unwrap();
            deepest = deepest.max(reduction.depth());
        }
        (deepest, reduction.depth())
    }

    #[test]
    fn statements_end_with_at_most_one_value() {
        for source in ["1 + 2 * 3",
                       "[1, [2, 3], {a: 4}]",
                       "f x y.0",
                       "x := (1 + 2) * 3",
                       "t : a -> b",
                       "u : a = 1 / 2",
                       "-!~*+x"]
        {
            let (_, depth) = max_depth(source);
            assert!(depth <= 1, "{source} left {depth} values");
        }
    }

    #[test]
    fn declaration_without_value_leaves_empty_stack() {
        assert_eq!(max_depth("t : a -> b").1, 0);
    }

    #[test]
    fn operands_pile_up_before_their_operator() {
        assert_eq!(max_depth("1 + 2 * 3").0, 3);
        assert_eq!(max_depth("1 * 2 + 3").0, 2);
    }

    #[test]
    fn assignment_target_must_be_a_symbol() {
        let statement = parse_line("1 := 2").unwrap();
        let mut environment = Environment::new();
        let error = reduce(&statement, &mut environment).unwrap_err();
        assert!(matches!(error, Error::Runtime(RuntimeError::InvalidOperation { .. })));
    }

    #[test]
    fn leftover_operands_are_rejected() {
        let mut environment = Environment::new();
        let mut reduction = Reduction::new(&mut environment);
        let one = LiteralValue::from(1_i64);
        reduction.apply(Completion::Literal(&one)).unwrap();
        reduction.apply(Completion::Literal(&one)).unwrap();
        let error = reduction.finish().unwrap_err();
        assert!(matches!(error, Error::Parse(ParseError::IncompleteStatement { depth: 2 })));
    }

    #[test]
    fn missing_operands_are_rejected() {
        let mut environment = Environment::new();
        let mut reduction = Reduction::new(&mut environment);
        let error = reduction.apply(Completion::Binary(BinaryOperator::Plus)).unwrap_err();
        assert!(matches!(error, Error::Parse(ParseError::IncompleteStatement { .. })));
    }
}
