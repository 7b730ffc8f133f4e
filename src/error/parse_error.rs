#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Columns are 1-based byte offsets within the statement line.
pub enum ParseError {
    /// Found a token (or a character sequence the lexer does not know) where
    /// the grammar does not allow it.
    #[error("Unexpected token at column {column}: {token}.")]
    UnexpectedToken {
        /// The token encountered, or a description of what was expected.
        token:  String,
        /// The column where the error occurred.
        column: usize,
    },
    /// Reached the end of the line while a rule was still open.
    #[error("Unexpected end of input at column {column}.")]
    UnexpectedEndOfInput {
        /// The column just past the last token.
        column: usize,
    },
    /// A closing delimiter was expected but not found.
    #[error("Expected closing '{delimiter}' for the group opened at column {column}.")]
    ExpectedClosing {
        /// The delimiter that was expected.
        delimiter: char,
        /// The column of the opening delimiter.
        column:    usize,
    },
    /// Found extra tokens after a complete statement.
    #[error("Extra tokens after statement at column {column}: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The column where the extra input starts.
        column: usize,
    },
    /// A member index was too large to address anything.
    #[error("Member index at column {column} is too large.")]
    LiteralTooLarge {
        /// The column of the offending literal.
        column: usize,
    },
    /// The operand stack held more than one value when the statement
    /// completed.
    #[error("Incomplete statement: {depth} values left on the operand stack.")]
    IncompleteStatement {
        /// The number of values that were left.
        depth: usize,
    },
}
