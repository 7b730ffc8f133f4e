//! # diophant
//!
//! diophant is a small symbolic-computation language written in Rust.
//! It parses one statement per line, evaluates it with exact rational
//! arithmetic against an append-only symbol environment, and prints the
//! result in canonical form. Anything that cannot be reduced, such as an
//! operation on a declared but unbound symbol, is kept as a residual
//! expression instead of failing.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::Error, interpreter::value::core::Value, session::Session};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of one input line as a tree, together with the
/// operator enums and their precedence and associativity.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Fixes the print-time precedence of every operator tier.
pub mod ast;
/// Program options for the command-line driver.
///
/// Reads the database URL and HTTP listener port from the command line, the
/// process environment or an env file, and validates them. The interpreter
/// itself never reads these values.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// reducing or evaluating a statement. It standardizes error reporting and
/// carries detailed information about failures, including columns for parse
/// errors and symbol names for runtime errors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Combines them into one error type for the session driver.
pub mod error;
/// Orchestrates the entire process of statement execution.
///
/// This module ties together lexing, parsing, reduction, evaluation and value
/// representation to provide a complete runtime for a statement line.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, reduction, evaluator and
///   value types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// The read-eval-print session that drives the interpreter line by line.
pub mod session;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines from arbitrary-precision integers
/// to machine integers, used for exponents and member indices.
pub mod util;

/// Returns the last value produced by a multi-line script.
///
/// Each non-blank line of `source` is processed as one statement in a fresh
/// session. Execution stops at the first failing line.
///
/// # Returns
/// The value of the last statement that produced one, or `None` if no
/// statement did.
///
/// # Errors
/// Returns the error of the first line that fails to parse or evaluate.
///
/// # Examples
/// ```
/// use diophant::get_result;
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let res = get_result("x := 1 / 3\nx + 1 / 6").unwrap();
/// assert_eq!(res.unwrap().to_string(), "1/2");
///
/// // Example with an intentional error (undefined symbol).
/// let res = get_result("y := x + 1\ny");
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str) -> Result<Option<Value>, Error> {
    let mut session = Session::new();
    let mut result = None;

    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        if let Some(value) = session.process_line(line)? {
            result = Some(value);
        }
    }

    Ok(result)
}
