use std::iter::Peekable;

use crate::{
    ast::{Assignment, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses one statement and requires that it consumes every token.
///
/// A statement is an expression optionally followed by exactly one assignment
/// suffix:
///
/// ```text
///     statement := expression
///                | expression ":=" expression
///                | expression "=" expression
///                | expression ":" expression ("=" expression)?
/// ```
///
/// The grammar accepts any expression as the target; rejecting non-symbol
/// targets is left to evaluation.
///
/// # Errors
/// Returns [`ParseError::UnexpectedTrailingTokens`] if anything follows the
/// statement, including a second assignment suffix.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let expr = parse_expression(tokens)?;

    let assignment = match tokens.peek() {
        Some((Token::ColonEquals, _)) => {
            tokens.next();
            Some(Assignment::Infer(parse_expression(tokens)?))
        },
        Some((Token::Equals, _)) => {
            tokens.next();
            Some(Assignment::Set(parse_expression(tokens)?))
        },
        Some((Token::Colon, _)) => {
            tokens.next();
            let ty = parse_expression(tokens)?;
            let value = if let Some((Token::Equals, _)) = tokens.peek() {
                tokens.next();
                Some(parse_expression(tokens)?)
            } else {
                None
            };
            Some(Assignment::Declare { ty, value })
        },
        _ => None,
    };

    if let Some((tok, position)) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:  format!("{tok:?}"),
                                                          column: position.column, });
    }

    Ok(Statement { expr, assignment })
}
