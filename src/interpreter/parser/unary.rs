use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Member, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_comma_separated, parse_object_entry},
        },
    },
    util::num::bigint_to_usize_checked,
};

/// Parses a unary expression.
///
/// Supports the prefix operators `~`, `+`, `*`, `-` and `!`.
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!(-x)`. They bind more loosely than application and member access:
/// `-f x` is `-(f x)`.
///
/// Grammar:
/// ```text
///     unary := ("~" | "+" | "*" | "-" | "!") unary
///            | application
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or an application-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    if let Some((token, _)) = tokens.peek()
       && let Some(op) = token_to_unary_operator(token)
    {
        tokens.next();
        let expr = parse_unary(tokens)?;
        return Ok(Expr::UnaryOp { op,
                                  expr: Box::new(expr) });
    }
    parse_application(tokens)
}

/// Parses application by juxtaposition.
///
/// An argument must be separated from its callee by whitespace, so `f x`
/// applies `f` while `f(x)` stops after `f`. Application is left-associative:
/// `f x y` is `(f x) y`.
///
/// Grammar:
/// ```text
///     application := structure (<whitespace> structure)*
/// ```
pub(crate) fn parse_application<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut function = parse_structure(tokens)?;
    while let Some((token, position)) = tokens.peek()
          && position.spaced
          && token.starts_factor()
    {
        let argument = parse_structure(tokens)?;
        function = Expr::Apply { function: Box::new(function),
                                 argument: Box::new(argument), };
    }
    Ok(function)
}

/// Parses a factor followed by any number of `.member` accessors.
///
/// Grammar:
/// ```text
///     structure := factor ("." (index | identifier))*
/// ```
pub(crate) fn parse_structure<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut object = parse_factor(tokens)?;
    while let Some((Token::Dot, _)) = tokens.peek() {
        tokens.next();
        let member = parse_member(tokens)?;
        object = Expr::Member { object: Box::new(object),
                                member };
    }
    Ok(object)
}

/// Parses the accessor after a `.`: a decimal index or an identifier.
fn parse_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Member>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Decimal(index), position)) => {
            let index = bigint_to_usize_checked(index,
                                                ParseError::LiteralTooLarge { column: position.column })?;
            Ok(Member::Index(index))
        },
        Some((Token::Identifier(name), _)) => Ok(Member::Name(name.clone())),
        Some((tok, position)) => {
            Err(ParseError::UnexpectedToken { token:  format!("Expected member name or index after '.', found {tok:?}"),
                                              column: position.column, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    }
}

/// Parses a factor, the atomic unit of the grammar.
///
/// Factors include:
/// - decimal and hexadecimal integers
/// - strings
/// - identifiers
/// - parenthesized expressions
/// - list literals (`[ ... ]`)
/// - object literals (`{ key: value, ... }`)
///
/// Grammar (simplified):
/// ```text
///     factor := integer
///             | string
///             | identifier
///             | "(" expression ")"
///             | "[" elements "]"
///             | "{" entries "}"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
///
/// # Returns
/// The parsed factor [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { column: 0 })?;

    match peeked {
        (Token::Decimal(..) | Token::Hexadecimal(..) | Token::String(..), _) => parse_literal(tokens),
        (Token::Identifier(name), _) => {
            let name = name.clone();
            tokens.next();
            Ok(Expr::Identifier { name })
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::LBracket, _) => parse_list_literal(tokens),
        (Token::LBrace, _) => parse_object_literal(tokens),
        (tok, position) => Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                             column: position.column, }),
    }
}

/// Parses a literal value.
///
/// Supported literal types:
/// - decimal integers (`42`)
/// - hexadecimal integers (`0x2a`)
/// - strings (`"text"`)
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a literal token.
///
/// # Returns
/// An [`Expr::Literal`] node.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Decimal(n) | Token::Hexadecimal(n), _)) => {
            Ok(Expr::Literal { value: LiteralValue::from(n.clone()) })
        },
        Some((Token::String(s), _)) => Ok(Expr::Literal { value: LiteralValue::from(s.as_str()) }),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                                   column: position.column, }),
        None => Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    }
}

/// Parses an expression enclosed in parentheses.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// Returns [`ParseError::ExpectedClosing`] pointing at the opening
/// parenthesis if the `)` is missing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let open = match tokens.next() {
        Some((Token::LParen, position)) => position.column,
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:  format!("expected '(', found {tok:?}"),
                                                     column: position.column, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    };

    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosing { delimiter: ')',
                                               column:    open, }),
    }
}

/// Parses a list literal of the form `[ expr1, expr2, ..., exprN ]`.
///
/// An empty list `[]` is accepted.
///
/// Grammar: `list := "[" (expression ("," expression)*)? "]"`
fn parse_list_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let open = match tokens.next() {
        Some((_, position)) => position.column,
        None => return Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    };

    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket, ']', open)?;

    Ok(Expr::List { elements })
}

/// Parses an object literal of the form `{ key: expr, ... }`.
///
/// Keys are identifiers or strings and may repeat. An empty object `{}` is
/// accepted.
///
/// Grammar: `object := "{" (entry ("," entry)*)? "}"`
fn parse_object_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let open = match tokens.next() {
        Some((_, position)) => position.column,
        None => return Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    };

    let entries = parse_comma_separated(tokens, parse_object_entry, &Token::RBrace, '}', open)?;

    Ok(Expr::Object { entries })
}

/// Maps a token in prefix position to its unary operator.
const fn token_to_unary_operator(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::Tilde => Some(UnaryOperator::Tilde),
        Token::Plus => Some(UnaryOperator::Plus),
        Token::Star => Some(UnaryOperator::Star),
        Token::Minus => Some(UnaryOperator::Negate),
        Token::Bang => Some(UnaryOperator::Not),
        _ => None,
    }
}
