use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Position, Token},
        parser::{core::ParseResult, unary::parse_unary, utils::binary},
    },
};

/// Parses intuitionistic implication, the loosest tier.
///
/// `=>` is right-associative: `a => b => c` is `a => (b => c)`.
///
/// The rule is: `implication := disjunction ("=>" implication)?`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the operand itself if no `=>` follows.
pub fn parse_implication<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let left = parse_intuitionistic_or(tokens)?;
    if let Some((Token::FatArrow, _)) = tokens.peek() {
        tokens.next();
        let right = parse_implication(tokens)?;
        return Ok(binary(left, BinaryOperator::IntuitionisticImplies, right));
    }
    Ok(left)
}

/// Parses `|` chains.
///
/// The rule is: `disjunction := conjunction ("|" conjunction)*`
pub fn parse_intuitionistic_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_left_associative(tokens,
                           &[BinaryOperator::IntuitionisticOr],
                           parse_intuitionistic_and)
}

/// Parses `&` chains.
///
/// The rule is: `conjunction := arrow ("&" arrow)*`
pub fn parse_intuitionistic_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_left_associative(tokens, &[BinaryOperator::IntuitionisticAnd], parse_arrow)
}

/// Parses the right-associative arrow `->`.
///
/// The rule is: `arrow := boolean_or ("->" arrow)?`
pub fn parse_arrow<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let left = parse_boolean_or(tokens)?;
    if let Some((Token::Arrow, _)) = tokens.peek() {
        tokens.next();
        let right = parse_arrow(tokens)?;
        return Ok(binary(left, BinaryOperator::Arrow, right));
    }
    Ok(left)
}

/// Parses logical OR (`||`) expressions.
///
/// The rule is: `boolean_or := boolean_and ("||" boolean_and)*`
pub fn parse_boolean_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_left_associative(tokens, &[BinaryOperator::BooleanOr], parse_boolean_and)
}

/// Parses logical AND (`&&`) expressions.
///
/// The rule is: `boolean_and := comparison ("&&" comparison)*`
pub fn parse_boolean_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_left_associative(tokens, &[BinaryOperator::BooleanAnd], parse_comparison)
}

/// Parses a comparison.
///
/// Comparisons do not chain: at most one comparison operator joins two
/// additive operands. In `a < b < c` the second `<` is left unconsumed and
/// the caller reports it.
///
/// The rule is: `comparison := addition (("==" | "!=" | ">=" | "<=" | ">" |
/// "<") addition)?`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::BinaryOp` node, or the operand itself.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let left = parse_addition(tokens)?;
    if let Some((token, _)) = tokens.peek()
       && let Some(op) = token_to_binary_operator(token)
       && op.is_comparison()
    {
        tokens.next();
        let right = parse_addition(tokens)?;
        return Ok(binary(left, op, right));
    }
    Ok(left)
}

/// Parses addition.
///
/// `+` sits one tier looser than `-`, so `a - b + c` groups as
/// `(a - b) + c` and `a + b - c` as `a + (b - c)`.
///
/// The rule is: `addition := subtraction ("+" subtraction)*`
pub fn parse_addition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_left_associative(tokens, &[BinaryOperator::Plus], parse_subtraction)
}

/// Parses subtraction.
///
/// The rule is: `subtraction := power ("-" power)*`
pub fn parse_subtraction<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_left_associative(tokens, &[BinaryOperator::Minus], parse_power)
}

/// Parses power and division.
///
/// Both operators share one left-associative tier that binds more loosely
/// than multiplication: `a * b / c` is `(a * b) / c` and `a / b * c` is
/// `a / (b * c)`.
///
/// The rule is: `power := multiplicative (("^" | "/") multiplicative)*`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Power, BinaryOperator::Divide],
                           parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*`, `%` and the reserved `~`.
///
/// The rule is: `multiplicative := unary (("*" | "%" | "~") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Times, BinaryOperator::Modulo, BinaryOperator::Tilde],
                           parse_unary)
}

/// Folds `operand (op operand)*` to the left for any `op` in `operators`.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operators: &[BinaryOperator],
                                 operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut left = operand(tokens)?;
    while let Some((token, _)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && operators.contains(&op)
    {
        tokens.next();
        let right = operand(tokens)?;
        left = binary(left, op, right);
    }
    Ok(left)
}

/// Maps a token to its binary operator, if it has one.
///
/// `*` and `~` also have prefix readings; this mapping is only consulted in
/// infix position.
///
/// # Example
/// ```
/// use diophant::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::FatArrow),
///            Some(BinaryOperator::IntuitionisticImplies));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    use BinaryOperator::{
        Arrow, BooleanAnd, BooleanOr, Divide, Equal, Greater, GreaterEqual, IntuitionisticAnd,
        IntuitionisticImplies, IntuitionisticOr, Less, LessEqual, Minus, Modulo, Plus, Power,
        Tilde, Times, Unequal,
    };

    Some(match token {
        Token::Star => Times,
        Token::Percent => Modulo,
        Token::Tilde => Tilde,
        Token::Caret => Power,
        Token::Slash => Divide,
        Token::Minus => Minus,
        Token::Plus => Plus,
        Token::EqualEqual => Equal,
        Token::BangEqual => Unequal,
        Token::GreaterEqual => GreaterEqual,
        Token::LessEqual => LessEqual,
        Token::Greater => Greater,
        Token::Less => Less,
        Token::DoubleAmpersand => BooleanAnd,
        Token::DoublePipe => BooleanOr,
        Token::Arrow => Arrow,
        Token::Ampersand => IntuitionisticAnd,
        Token::Pipe => IntuitionisticOr,
        Token::FatArrow => IntuitionisticImplies,
        _ => return None,
    })
}
