/// Dispatch on the operator and residual construction.
pub mod core;

/// Exact rational arithmetic: `+ - * / % ^`.
pub mod arithmetic;

/// Comparison operators.
pub mod comparison;

/// Boolean `&&` and `||`.
pub mod logic;
