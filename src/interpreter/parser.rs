/// Entry points: whole lines and full expressions.
pub mod core;

/// The binary operator ladder, from `* % ~` out to `=>`.
pub mod binary;

/// Prefix operators, application, member access and factors.
pub mod unary;

/// Statements and their assignment suffixes.
pub mod statement;

/// Helpers shared by the grammar rules.
pub mod utils;
