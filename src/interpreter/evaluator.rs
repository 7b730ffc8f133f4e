/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: exact
/// arithmetic, comparisons and boolean logic. Reserved operators and symbolic
/// operands produce residual nodes.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation, identity and logical NOT.
pub mod unary;

/// Core evaluation logic and the symbol environment.
///
/// Contains the main evaluation engine, the append-only bindings and
/// declarations, and lazy symbol resolution.
pub mod core;

/// Application and member access.
pub mod access;

/// Utility functions for evaluation.
///
/// Provides error builders shared by the operator handlers.
pub mod utils;
