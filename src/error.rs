/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// statement line. Parse errors include unknown tokens, unbalanced brackets,
/// missing operands and anything left over after a complete statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing a statement on
/// the operand stack or evaluating the resulting expression: unknown symbols,
/// rebinding, division by zero and operands of the wrong kind.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure a session can report for a single input line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The line did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The line parsed but could not be reduced or evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
