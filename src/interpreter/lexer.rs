use logos::Logos;
use num_bigint::BigInt;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Hexadecimal integer literal: `0x` followed by whole bytes, such as
    /// `0x`, `0x0f` or `0xdeadbeef`. An odd digit count is not matched.
    #[regex(r"0x([0-9a-fA-F][0-9a-fA-F])*", parse_hexadecimal)]
    Hexadecimal(BigInt),
    /// Decimal integer literal: `0` or a nonzero digit followed by digits.
    #[regex(r"0|[1-9][0-9]*", parse_decimal)]
    Decimal(BigInt),
    /// Double-quoted string. The payload is the raw text between the quotes;
    /// a backslash followed by any printable character is kept verbatim.
    #[regex(r#""([^"\\]|\\[ -~])*""#, parse_string)]
    String(String),
    /// Identifier tokens such as `x`, `_tmp` or `true`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `:=`
    #[token(":=")]
    ColonEquals,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Equals,
    /// `=>`
    #[token("=>")]
    FatArrow,
    /// `->`
    #[token("->")]
    Arrow,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `~`
    #[token("~")]
    Tilde,
    /// `!`
    #[token("!")]
    Bang,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Whitespace is insignificant between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` if the token can begin a factor, which is what an
    /// application argument must be.
    #[must_use]
    pub const fn starts_factor(&self) -> bool {
        matches!(self,
                 Self::Hexadecimal(_)
                 | Self::Decimal(_)
                 | Self::String(_)
                 | Self::Identifier(_)
                 | Self::LParen
                 | Self::LBracket
                 | Self::LBrace)
    }
}

/// Where a token sits in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based byte column of the first character.
    pub column: usize,
    /// `true` if whitespace separates this token from the previous one.
    pub spaced: bool,
}

/// Tokenizes one statement line.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] for the first character sequence no
/// token matches.
///
/// # Example
/// ```
/// use diophant::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("f  0x0aff").unwrap();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].0, Token::Identifier("f".to_string()));
/// assert_eq!(tokens[1].0, Token::Hexadecimal(2815.into()));
/// assert!(tokens[1].1.spaced);
///
/// assert!(tokenize("x # y").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut previous_end = 0;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let position = Position { column: span.start + 1,
                                  spaced: span.start > previous_end, };
        previous_end = span.end;

        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            return Err(ParseError::UnexpectedToken { token:  lexer.slice().to_string(),
                                                     column: position.column, });
        }
    }

    Ok(tokens)
}

/// Parses a decimal integer literal from the current token slice.
///
/// # Returns
/// - `Some(BigInt)`: The parsed value.
/// - `None`: If the slice is not a valid decimal integer.
fn parse_decimal(lex: &mut logos::Lexer<Token>) -> Option<BigInt> {
    BigInt::parse_bytes(lex.slice().as_bytes(), 10)
}

/// Parses a hexadecimal literal from the current token slice.
///
/// The digits after `0x` are read as an unsigned big-endian number. `0x` with
/// no digits is zero.
fn parse_hexadecimal(lex: &mut logos::Lexer<Token>) -> Option<BigInt> {
    let digits = &lex.slice()[2..];
    if digits.is_empty() {
        return Some(BigInt::default());
    }
    BigInt::parse_bytes(digits.as_bytes(), 16)
}

/// Strips the surrounding quotes from a string literal.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
