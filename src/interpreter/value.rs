/// Exact rational numbers.
///
/// Defines the `Rational` type used for every number in the language. Values
/// are kept in lowest terms with a positive denominator, so structural
/// equality is numeric equality.
///
/// Includes checked division, truncated remainder and bounded integer powers.
pub mod rational;

/// The runtime expression node and its canonical printer.
pub mod core;
