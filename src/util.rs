/// Numeric conversion helpers.
///
/// This module provides safe functions for converting arbitrary-precision
/// integers into machine integers (exponents, member indices) without risking
/// silent truncation.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and within range, or the caller-supplied error otherwise.
pub mod num;
