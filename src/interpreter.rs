/// The evaluator module reduces expression nodes against the environment.
///
/// The evaluator resolves symbols lazily through their bindings, performs
/// exact arithmetic, comparisons and boolean logic, and rebuilds anything it
/// cannot reduce as a residual expression. It also owns the append-only
/// symbol environment.
///
/// # Responsibilities
/// - Evaluates expression nodes, performing all supported operations.
/// - Stores bindings and declarations under single assignment.
/// - Reports runtime errors such as undefined symbols, division by zero and
///   invalid operations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads one raw statement line and produces a stream
/// of tokens, each corresponding to a meaningful language element such as a
/// number, string, identifier, operator or delimiter.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their column and
///   whether whitespace preceded them.
/// - Handles decimal, hexadecimal and string literals, and identifiers.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the parse tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a [`Statement`](crate::ast::Statement) that mirrors the surface syntax.
///
/// # Responsibilities
/// - Implements the operator precedence ladder and juxtaposition.
/// - Validates correct grammar and syntax, reporting errors with their column.
/// - Accepts exactly one optional assignment suffix per statement.
pub mod parser;
/// The reduction module turns a parse tree into an expression on the operand
/// stack.
///
/// A parsed statement is flattened into rule completions, which are applied
/// one at a time to an operand stack. Assignments bind into the environment
/// as they complete; the value left at the end is evaluated.
pub mod reduction;
/// The value module defines the runtime expression nodes.
///
/// This module declares the `Value` enum used both for concrete data and for
/// residual symbolic expressions, together with exact rational numbers and the
/// canonical printer.
///
/// # Responsibilities
/// - Defines the `Value` enum and its constructors.
/// - Assigns each node its print-time precedence.
/// - Renders nodes back to parseable text.
pub mod value;
