use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list and object literals. It repeatedly calls
/// `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after the opening delimiter.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (`]` or `}`).
/// - `delimiter`: The closing character, for error messages.
/// - `open`: Column of the opening delimiter.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the line ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    delimiter: char,
    open: usize)
    -> Result<Vec<T>, ParseError>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:  format!("Expected ',' or {closing:?}, found {tok:?}"),
                                                         column: position.column, });
            },
            None => {
                return Err(ParseError::ExpectedClosing { delimiter,
                                                         column: open });
            },
        }
    }
    Ok(items)
}

/// Parses one `key: value` entry of an object literal.
///
/// The key is an identifier or a string literal.
///
/// # Errors
/// Returns a `ParseError` if the key or the `:` is missing, or if the value
/// fails to parse.
pub(in crate::interpreter::parser) fn parse_object_entry<'a, I>(tokens: &mut Peekable<I>)
                                                                -> ParseResult<(String, Expr)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let key = match tokens.next() {
        Some((Token::Identifier(s) | Token::String(s), _)) => s.clone(),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:  format!("Expected object key, found {tok:?}"),
                                                     column: position.column, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    };

    match tokens.next() {
        Some((Token::Colon, _)) => {},
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:  format!("Expected ':' after object key, found {tok:?}"),
                                                     column: position.column, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    }

    let value = parse_expression(tokens)?;
    Ok((key, value))
}

/// Builds an [`Expr::BinaryOp`] node.
pub(in crate::interpreter::parser) fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right) }
}
