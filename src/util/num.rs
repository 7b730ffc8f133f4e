use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Largest exponent magnitude `^` will compute exactly.
///
/// Exact powers grow linearly in digit count with the exponent, so anything
/// past this bound is rejected instead of allocating without limit.
pub const MAX_EXPONENT: u32 = 65_536;

/// Largest numerator or denominator, in bits, that `^` will produce.
///
/// A bounded exponent alone does not bound the result, since `^` chains
/// associate to the left and each step multiplies the size again.
pub const MAX_RESULT_BITS: u64 = 1 << 22;

/// Safely converts a `BigInt` to `u32` if and only if it is exactly
/// representable and no larger than `limit`.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative, exceeds `u32::MAX`, or
/// exceeds `limit`.
///
/// ## Example
/// ```
/// use diophant::util::num::bigint_to_u32_checked;
/// use num_bigint::BigInt;
///
/// assert_eq!(bigint_to_u32_checked(&BigInt::from(45), 100, "too big"), Ok(45));
/// assert!(bigint_to_u32_checked(&BigInt::from(-1), 100, "too big").is_err());
/// assert!(bigint_to_u32_checked(&BigInt::from(101), 100, "too big").is_err());
/// ```
pub fn bigint_to_u32_checked<E>(value: &BigInt, limit: u32, error: E) -> Result<u32, E> {
    match value.to_u32() {
        Some(n) if n <= limit => Ok(n),
        _ => Err(error),
    }
}

/// Safely converts a `BigInt` to a `usize` if and only if it can be
/// represented exactly.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds the maximum
/// representable `usize`.
///
/// ## Example
/// ```
/// use diophant::util::num::bigint_to_usize_checked;
/// use num_bigint::BigInt;
///
/// assert_eq!(bigint_to_usize_checked(&BigInt::from(42), ()), Ok(42));
/// assert_eq!(bigint_to_usize_checked(&BigInt::from(-1), ()), Err(()));
///
/// let huge = BigInt::from(u64::MAX) * BigInt::from(u64::MAX);
/// assert_eq!(bigint_to_usize_checked(&huge, ()), Err(()));
/// ```
pub fn bigint_to_usize_checked<E>(value: &BigInt, error: E) -> Result<usize, E> {
    value.to_usize().ok_or(error)
}
