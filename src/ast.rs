use num_bigint::BigInt;

/// Print-time precedence constants.
///
/// Larger numbers bind more loosely. The grammar fixes how source text
/// associates; these values are only consulted when an expression tree is
/// rendered back to text, to decide where parentheses are required.
pub mod precedence {
    /// Literals, symbols, lists, objects.
    pub const LEAF: u32 = 0;
    /// `object.member`
    pub const MEMBER: u32 = 50;
    /// Juxtaposition `f x`.
    pub const APPLY: u32 = 100;
    /// Prefix `~ + * - !`.
    pub const UNARY: u32 = 200;
    /// `* % ~`
    pub const MULTIPLICATIVE: u32 = 300;
    /// `^ /`
    pub const POWER: u32 = 400;
    /// `-`
    pub const MINUS: u32 = 500;
    /// `+`
    pub const PLUS: u32 = 600;
    /// `== != >= <= > <`
    pub const COMPARISON: u32 = 700;
    /// `&&`
    pub const BOOLEAN_AND: u32 = 800;
    /// `||`
    pub const BOOLEAN_OR: u32 = 900;
    /// `->`
    pub const ARROW: u32 = 1000;
    /// `&`
    pub const INTUITIONISTIC_AND: u32 = 1100;
    /// `|`
    pub const INTUITIONISTIC_OR: u32 = 1200;
    /// `=>`
    pub const INTUITIONISTIC_IMPLIES: u32 = 1300;
}

/// Represents a literal value as written in source code.
///
/// Decimal and hexadecimal integers both become `Integer`; strings keep the
/// raw text between the quotes, escapes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// An arbitrary-precision integer literal.
    Integer(BigInt),
    /// A string literal without its quotes.
    String(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<BigInt> for LiteralValue {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// The accessor after a `.` in `object.member`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    /// `.3`: a zero-based list position.
    Index(usize),
    /// `.name`: an object key.
    Name(String),
}

impl std::fmt::Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// A node of the parse tree produced by the grammar.
///
/// `Expr` mirrors the surface syntax one to one. It is never evaluated
/// directly: the reduction pass walks it in rule-completion order and builds
/// runtime [`Value`](crate::interpreter::value::core::Value) nodes on the
/// operand stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric or string literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a symbol by name.
    Identifier {
        /// Name of the symbol.
        name: String,
    },
    /// List literal `[a, b, c]`.
    List {
        /// Elements of the list, in source order.
        elements: Vec<Self>,
    },
    /// Object literal `{k: a, k: b}`.
    Object {
        /// Key/value entries in source order. Keys may repeat.
        entries: Vec<(String, Self)>,
    },
    /// Member access `object.member`.
    Member {
        /// The expression being accessed.
        object: Box<Self>,
        /// The accessor.
        member: Member,
    },
    /// Application by juxtaposition `function argument`.
    Apply {
        /// The callee.
        function: Box<Self>,
        /// The argument.
        argument: Box<Self>,
    },
    /// A prefix operation.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// An infix operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// The optional assignment suffix of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// `target := value`
    Infer(Expr),
    /// `target = value`
    Set(Expr),
    /// `target : type` or `target : type = value`
    Declare {
        /// The declared type expression.
        ty:    Expr,
        /// The optional initializer.
        value: Option<Expr>,
    },
}

/// Represents one input line.
///
/// A statement is an expression optionally followed by exactly one
/// assignment suffix, in which case the expression is the assignment target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The expression, or the assignment target.
    pub expr:       Expr,
    /// The assignment suffix, if any.
    pub assignment: Option<Assignment>,
}

/// How same-precedence operators group when chained.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` is `(a op b) op c`.
    Left,
    /// `a op b op c` is `a op (b op c)`.
    Right,
    /// The operator does not chain.
    None,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Multiplication (`*`)
    Times,
    /// Truncated remainder (`%`)
    Modulo,
    /// Reserved (`~`)
    Tilde,
    /// Exponentiation (`^`)
    Power,
    /// Division (`/`)
    Divide,
    /// Subtraction (`-`)
    Minus,
    /// Addition (`+`)
    Plus,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    Unequal,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Boolean and (`&&`)
    BooleanAnd,
    /// Boolean or (`||`)
    BooleanOr,
    /// Arrow (`->`)
    Arrow,
    /// Intuitionistic and (`&`)
    IntuitionisticAnd,
    /// Intuitionistic or (`|`)
    IntuitionisticOr,
    /// Intuitionistic implication (`=>`)
    IntuitionisticImplies,
}

impl BinaryOperator {
    /// The print-time precedence of this operator's tier.
    ///
    /// # Example
    /// ```
    /// use diophant::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Times.precedence() < BinaryOperator::Plus.precedence());
    /// assert_eq!(BinaryOperator::IntuitionisticImplies.precedence(), 1300);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u32 {
        use precedence::{
            ARROW, BOOLEAN_AND, BOOLEAN_OR, COMPARISON, INTUITIONISTIC_AND,
            INTUITIONISTIC_IMPLIES, INTUITIONISTIC_OR, MINUS, MULTIPLICATIVE, PLUS, POWER,
        };

        match self {
            Self::Times | Self::Modulo | Self::Tilde => MULTIPLICATIVE,
            Self::Power | Self::Divide => POWER,
            Self::Minus => MINUS,
            Self::Plus => PLUS,
            Self::Equal
            | Self::Unequal
            | Self::GreaterEqual
            | Self::LessEqual
            | Self::Greater
            | Self::Less => COMPARISON,
            Self::BooleanAnd => BOOLEAN_AND,
            Self::BooleanOr => BOOLEAN_OR,
            Self::Arrow => ARROW,
            Self::IntuitionisticAnd => INTUITIONISTIC_AND,
            Self::IntuitionisticOr => INTUITIONISTIC_OR,
            Self::IntuitionisticImplies => INTUITIONISTIC_IMPLIES,
        }
    }

    /// How chains of this operator's tier group.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Arrow | Self::IntuitionisticImplies => Associativity::Right,
            _ if self.is_comparison() => Associativity::None,
            _ => Associativity::Left,
        }
    }

    /// Returns `true` for `== != >= <= > <`.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Equal
                 | Self::Unequal
                 | Self::GreaterEqual
                 | Self::LessEqual
                 | Self::Greater
                 | Self::Less)
    }

    /// Returns `true` for operators that have no reduction rule and always
    /// evaluate to a residual.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self,
                 Self::Tilde
                 | Self::Arrow
                 | Self::IntuitionisticAnd
                 | Self::IntuitionisticOr
                 | Self::IntuitionisticImplies)
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Boolean not (`!x`).
    Not,
    /// Identity on numbers (`+x`).
    Plus,
    /// Reserved (`~x`).
    Tilde,
    /// Reserved (`*x`).
    Star,
}

impl UnaryOperator {
    /// Returns `true` for operators that have no reduction rule.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Tilde | Self::Star)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Arrow, BooleanAnd, BooleanOr, Divide, Equal, Greater, GreaterEqual,
            IntuitionisticAnd, IntuitionisticImplies, IntuitionisticOr, Less, LessEqual, Minus,
            Modulo, Plus, Power, Tilde, Times, Unequal,
        };
        let operator = match self {
            Times => "*",
            Modulo => "%",
            Tilde => "~",
            Power => "^",
            Divide => "/",
            Minus => "-",
            Plus => "+",
            Equal => "==",
            Unequal => "!=",
            GreaterEqual => ">=",
            LessEqual => "<=",
            Greater => ">",
            Less => "<",
            BooleanAnd => "&&",
            BooleanOr => "||",
            Arrow => "->",
            IntuitionisticAnd => "&",
            IntuitionisticOr => "|",
            IntuitionisticImplies => "=>",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
            Self::Plus => "+",
            Self::Tilde => "~",
            Self::Star => "*",
        };
        write!(f, "{operator}")
    }
}
