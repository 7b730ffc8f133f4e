use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token, tokenize},
        parser::{binary::parse_implication, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the loosest tier, intuitionistic implication, and recursively
/// descends through the precedence ladder.
///
/// Grammar: `expression := implication`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_implication(tokens)
}

/// Lexes and parses one input line into a [`Statement`].
///
/// Any input left after the statement is an error, as is an empty line.
///
/// # Errors
/// Returns the first lexing or grammar error. End-of-input errors report the
/// column just past the end of `source`.
///
/// # Example
/// ```
/// use diophant::{
///     ast::{Assignment, Expr},
///     interpreter::parser::core::parse_line,
/// };
///
/// let statement = parse_line("x := 1 + 2").unwrap();
/// assert_eq!(statement.expr, Expr::Identifier { name: "x".to_string() });
/// assert!(matches!(statement.assignment, Some(Assignment::Infer(_))));
///
/// assert!(parse_line("(1 + 2").is_err());
/// assert!(parse_line("1 +").is_err());
/// ```
pub fn parse_line(source: &str) -> ParseResult<Statement> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    parse_statement(&mut iter).map_err(|error| match error {
                                  ParseError::UnexpectedEndOfInput { .. } => {
                                      ParseError::UnexpectedEndOfInput { column: source.len() + 1 }
                                  },
                                  other => other,
                              })
}
