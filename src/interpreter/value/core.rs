use std::{
    fmt::{self, Display, Formatter},
    rc::Rc,
};

use crate::{
    ast::{Associativity, BinaryOperator, LiteralValue, Member, UnaryOperator, precedence},
    interpreter::value::rational::Rational,
};

/// Represents a runtime value in the interpreter.
///
/// A `Value` is either a concrete datum (null, boolean, rational, string,
/// list, object) or a symbolic node that could not be reduced further. Nodes
/// are immutable and share their children through [`Rc`], so the environment
/// and any number of parents may hold the same subexpression.
///
/// `Display` renders the canonical text form: the same surface syntax the
/// node could have been parsed from, with parentheses only where the operator
/// ladder requires them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The unit value, bound to `null`.
    Null,
    /// A truth value, bound to `true` and `false`.
    Boolean(bool),
    /// An exact rational number.
    Rational(Rational),
    /// A string, escapes kept verbatim.
    String(Rc<str>),
    /// A named reference that is resolved against the environment.
    Symbol(Rc<str>),
    /// An ordered list of values.
    List(Rc<Vec<Self>>),
    /// Key/value entries in insertion order. Keys may repeat.
    Object(Rc<Vec<(String, Self)>>),
    /// A prefix operation.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Rc<Self>,
    },
    /// An infix operation.
    Binary {
        /// Left operand.
        left:  Rc<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Rc<Self>,
    },
    /// Application by juxtaposition.
    Apply {
        /// The callee.
        function: Rc<Self>,
        /// The argument.
        argument: Rc<Self>,
    },
    /// Member access `object.member`.
    Member {
        /// The accessed value.
        object: Rc<Self>,
        /// The accessor.
        member: Member,
    },
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<Rational> for Value {
    fn from(v: Rational) -> Self {
        Self::Rational(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Rational(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Rational(v.into())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => Self::Rational(Rational::integer(n.clone())),
            LiteralValue::String(s) => Self::String(s.as_str().into()),
        }
    }
}

impl Value {
    /// Creates a symbol node.
    ///
    /// # Example
    /// ```
    /// use diophant::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::symbol("x").to_string(), "x");
    /// ```
    #[must_use]
    pub fn symbol(name: &str) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates a string node from the raw text between the quotes.
    #[must_use]
    pub fn string(text: &str) -> Self {
        Self::String(text.into())
    }

    /// Creates an object node.
    #[must_use]
    pub fn object(entries: Vec<(String, Self)>) -> Self {
        Self::Object(Rc::new(entries))
    }

    /// Creates a prefix operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Rc::new(operand) }
    }

    /// Creates an infix operation node.
    ///
    /// # Example
    /// ```
    /// use diophant::{ast::BinaryOperator, interpreter::value::core::Value};
    ///
    /// let sum = Value::binary(Value::symbol("a"), BinaryOperator::Plus, Value::from(1));
    /// assert_eq!(sum.to_string(), "a + 1");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::Binary { left: Rc::new(left),
                       op,
                       right: Rc::new(right) }
    }

    /// Creates an application node.
    #[must_use]
    pub fn apply(function: Self, argument: Self) -> Self {
        Self::Apply { function: Rc::new(function),
                      argument: Rc::new(argument), }
    }

    /// Creates a member access node.
    #[must_use]
    pub fn member(object: Self, member: Member) -> Self {
        Self::Member { object: Rc::new(object),
                       member }
    }

    /// Returns `true` if the value is an unresolved form: a symbol or an
    /// operator, application or member node.
    ///
    /// Operations on symbolic operands produce residual nodes instead of
    /// errors.
    #[must_use]
    pub const fn is_symbolic(&self) -> bool {
        matches!(self,
                 Self::Symbol(_)
                 | Self::Unary { .. }
                 | Self::Binary { .. }
                 | Self::Apply { .. }
                 | Self::Member { .. })
    }

    /// The print-time precedence of this node.
    ///
    /// Concrete leaves bind tightest. A negative integer prints with a leading
    /// `-` and so ranks as a unary node; a non-integer rational prints as
    /// `n/d` and ranks with division.
    ///
    /// # Example
    /// ```
    /// use diophant::interpreter::value::{core::Value, rational::Rational};
    ///
    /// assert_eq!(Value::from(3).precedence(), 0);
    /// assert_eq!(Value::from(-3).precedence(), 200);
    /// assert_eq!(Value::from(Rational::checked_new(1, 3).unwrap()).precedence(), 400);
    /// ```
    #[must_use]
    pub fn precedence(&self) -> u32 {
        match self {
            Self::Rational(r) if !r.is_integer() => precedence::POWER,
            Self::Rational(r) if r.is_negative() => precedence::UNARY,
            Self::Unary { .. } => precedence::UNARY,
            Self::Binary { op, .. } => op.precedence(),
            Self::Apply { .. } => precedence::APPLY,
            Self::Member { .. } => precedence::MEMBER,
            _ => precedence::LEAF,
        }
    }

    /// A short name for the kind of value, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Rational(_) => "rational",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::List(_) => "list",
            Self::Object(_) => "object",
            Self::Unary { .. } => "unary expression",
            Self::Binary { .. } => "binary expression",
            Self::Apply { .. } => "application",
            Self::Member { .. } => "member access",
        }
    }
}

/// Writes `child`, wrapped in parentheses when `parenthesize` holds.
fn write_child(f: &mut Formatter<'_>, child: &Value, parenthesize: bool) -> fmt::Result {
    if parenthesize {
        write!(f, "({child})")
    } else {
        write!(f, "{child}")
    }
}

/// Returns `true` if `key` can be written without quotes.
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next()
         .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Rational(r) => write!(f, "{r}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Symbol(name) => write!(f, "{name}"),
            Self::List(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Object(entries) => {
                write!(f, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    if is_identifier(key) {
                        write!(f, "{key}: {value}")?;
                    } else {
                        write!(f, "\"{key}\": {value}")?;
                    }
                }
                write!(f, "}}")
            },
            Self::Unary { op, operand } => {
                write!(f, "{op}")?;
                write_child(f, operand, operand.precedence() > precedence::UNARY)
            },
            Self::Binary { left, op, right } => {
                let own = op.precedence();
                let associativity = op.associativity();

                let left_parens = left.precedence() > own
                                  || (left.precedence() == own
                                      && associativity != Associativity::Left);
                let right_parens = right.precedence() > own
                                   || (right.precedence() == own
                                       && associativity != Associativity::Right);

                write_child(f, left, left_parens)?;
                write!(f, " {op} ")?;
                write_child(f, right, right_parens)
            },
            Self::Apply { function, argument } => {
                write_child(f, function, function.precedence() > precedence::APPLY)?;
                write!(f, " ")?;
                write_child(f, argument, argument.precedence() >= precedence::APPLY)
            },
            Self::Member { object, member } => {
                write_child(f, object, object.precedence() > precedence::MEMBER)?;
                write!(f, ".{member}")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sym(name: &str) -> Value {
        Value::symbol(name)
    }

    #[test]
    fn nested_same_tier_prints_by_associativity() {
        let left = Value::binary(Value::binary(sym("a"), BinaryOperator::Minus, sym("b")),
                                 BinaryOperator::Minus,
                                 sym("c"));
        assert_eq!(left.to_string(), "a - b - c");

        let right = Value::binary(sym("a"),
                                  BinaryOperator::Minus,
                                  Value::binary(sym("b"), BinaryOperator::Minus, sym("c")));
        assert_eq!(right.to_string(), "a - (b - c)");

        let arrow = Value::binary(sym("a"),
                                  BinaryOperator::Arrow,
                                  Value::binary(sym("b"), BinaryOperator::Arrow, sym("c")));
        assert_eq!(arrow.to_string(), "a -> b -> c");

        let arrow = Value::binary(Value::binary(sym("a"), BinaryOperator::Arrow, sym("b")),
                                  BinaryOperator::Arrow,
                                  sym("c"));
        assert_eq!(arrow.to_string(), "(a -> b) -> c");
    }

    #[test]
    fn comparisons_parenthesize_equal_children() {
        let chained = Value::binary(Value::binary(sym("a"), BinaryOperator::Less, sym("b")),
                                    BinaryOperator::Equal,
                                    sym("c"));
        assert_eq!(chained.to_string(), "(a < b) == c");
    }

    #[test]
    fn rationals_print_at_their_precedence() {
        let third = Value::from(Rational::checked_new(1, 3).unwrap());
        let product = Value::binary(sym("x"), BinaryOperator::Times, third.clone());
        assert_eq!(product.to_string(), "x * (1/3)");

        let applied = Value::apply(sym("f"), Value::from(-2));
        assert_eq!(applied.to_string(), "f (-2)");

        let difference = Value::binary(Value::from(1), BinaryOperator::Minus, Value::from(-2));
        assert_eq!(difference.to_string(), "1 - -2");

        let power = Value::binary(third, BinaryOperator::Power, Value::from(2));
        assert_eq!(power.to_string(), "1/3 ^ 2");
    }

    #[test]
    fn application_and_members() {
        let nested = Value::apply(Value::apply(sym("f"), sym("x")), sym("y"));
        assert_eq!(nested.to_string(), "f x y");

        let inner = Value::apply(sym("f"), Value::apply(sym("g"), sym("x")));
        assert_eq!(inner.to_string(), "f (g x)");

        let member = Value::member(Value::apply(sym("f"), sym("x")), Member::Name("y".into()));
        assert_eq!(member.to_string(), "(f x).y");

        let chain = Value::member(Value::member(sym("a"), Member::Index(0)), Member::Name("b".into()));
        assert_eq!(chain.to_string(), "a.0.b");
    }

    #[test]
    fn unary_operands() {
        let negated = Value::unary(UnaryOperator::Negate,
                                   Value::binary(sym("a"), BinaryOperator::Plus, sym("b")));
        assert_eq!(negated.to_string(), "-(a + b)");

        let not = Value::unary(UnaryOperator::Not, Value::apply(sym("f"), sym("x")));
        assert_eq!(not.to_string(), "!f x");
    }

    #[test]
    fn concrete_leaves() {
        let list = Value::from(vec![Value::Null, Value::from(true), Value::string("a\\n")]);
        assert_eq!(list.to_string(), r#"[null, true, "a\n"]"#);

        let object = Value::object(vec![("a".into(), Value::from(1)),
                                        ("two words".into(), Value::from(vec![]))]);
        assert_eq!(object.to_string(), r#"{a: 1, "two words": []}"#);

        assert_eq!(Value::object(vec![]).to_string(), "{}");
    }
}
