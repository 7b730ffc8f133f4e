use std::{fmt::Display, ops};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{MAX_EXPONENT, MAX_RESULT_BITS, bigint_to_u32_checked},
};

/// An exact rational number.
///
/// The denominator is always positive and coprime with the numerator; every
/// constructor reduces to lowest terms, so two equal numbers always compare
/// equal structurally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

/// A rational number that is known not to be zero.
///
/// Division only accepts a `NonZero` divisor; the checked operations on
/// [`Rational`] build one and report [`RuntimeError::DivisionByZero`] when
/// they cannot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonZero(Rational);

impl NonZero {
    /// Wraps `value` if it is not zero.
    ///
    /// # Example
    /// ```
    /// use diophant::interpreter::value::rational::{NonZero, Rational};
    ///
    /// assert!(NonZero::new(Rational::from(3)).is_some());
    /// assert!(NonZero::new(Rational::from(0)).is_none());
    /// ```
    #[must_use]
    pub fn new(value: Rational) -> Option<Self> {
        (!value.is_zero()).then_some(Self(value))
    }

    /// The wrapped value.
    #[must_use]
    pub const fn get(&self) -> &Rational {
        &self.0
    }
}

impl Rational {
    /// Builds `numerator / denominator`, reduced to lowest terms.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] if `denominator` is zero.
    ///
    /// # Example
    /// ```
    /// use diophant::interpreter::value::rational::Rational;
    ///
    /// let half = Rational::checked_new(4, 8).unwrap();
    /// assert_eq!(half.to_string(), "1/2");
    ///
    /// let two = Rational::checked_new(4, 2).unwrap();
    /// assert_eq!(two, Rational::from(2));
    ///
    /// let negative = Rational::checked_new(3, -6).unwrap();
    /// assert_eq!(negative.to_string(), "-1/2");
    ///
    /// assert!(Rational::checked_new(1, 0).is_err());
    /// ```
    pub fn checked_new(numerator: impl Into<BigInt>,
                       denominator: impl Into<BigInt>)
                       -> EvalResult<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(Self(BigRational::new(numerator.into(), denominator)))
    }

    /// Builds the integer `n / 1`.
    #[must_use]
    pub fn integer(n: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(n.into()))
    }

    /// The numerator, carrying the sign.
    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    /// The denominator, always positive.
    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    /// Returns `true` if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Returns `true` for zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` for values strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Divides by a divisor that cannot be zero.
    #[must_use]
    pub fn divide(&self, divisor: &NonZero) -> Self {
        Self(&self.0 / &divisor.get().0)
    }

    /// Divides by `rhs`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] if `rhs` is zero.
    ///
    /// # Example
    /// ```
    /// use diophant::{error::RuntimeError, interpreter::value::rational::Rational};
    ///
    /// let third = Rational::from(1).checked_div(&Rational::from(3)).unwrap();
    /// assert_eq!(third.to_string(), "1/3");
    ///
    /// let err = Rational::from(5).checked_div(&Rational::from(0)).unwrap_err();
    /// assert_eq!(err, RuntimeError::DivisionByZero);
    /// ```
    pub fn checked_div(&self, rhs: &Self) -> EvalResult<Self> {
        let divisor = NonZero::new(rhs.clone()).ok_or(RuntimeError::DivisionByZero)?;
        Ok(self.divide(&divisor))
    }

    /// Truncated remainder: `self - rhs * trunc(self / rhs)`.
    ///
    /// The sign of a nonzero result follows `self`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] if `rhs` is zero.
    ///
    /// # Example
    /// ```
    /// use diophant::interpreter::value::rational::Rational;
    ///
    /// let r = Rational::from(7).checked_rem(&Rational::from(3)).unwrap();
    /// assert_eq!(r, Rational::from(1));
    ///
    /// let r = Rational::from(-7).checked_rem(&Rational::from(3)).unwrap();
    /// assert_eq!(r, Rational::from(-1));
    /// ```
    pub fn checked_rem(&self, rhs: &Self) -> EvalResult<Self> {
        let quotient = self.checked_div(rhs)?.0.trunc();
        Ok(Self(&self.0 - &rhs.0 * quotient))
    }

    /// Raises to an integer power.
    ///
    /// Negative exponents take the reciprocal of the positive power.
    ///
    /// # Errors
    /// - [`RuntimeError::ExponentTooLarge`] if `exponent` is not an integer or
    ///   its magnitude exceeds [`MAX_EXPONENT`].
    /// - [`RuntimeError::DivisionByZero`] for zero raised to a negative power.
    ///
    /// # Example
    /// ```
    /// use diophant::interpreter::value::rational::Rational;
    ///
    /// let base = Rational::checked_new(2, 3).unwrap();
    /// let cube = base.checked_pow(&Rational::from(3)).unwrap();
    /// assert_eq!(cube.to_string(), "8/27");
    ///
    /// let inverse = base.checked_pow(&Rational::from(-2)).unwrap();
    /// assert_eq!(inverse.to_string(), "9/4");
    ///
    /// assert!(base.checked_pow(&Rational::checked_new(1, 2).unwrap()).is_err());
    ///
    /// let huge = Rational::from(2).checked_pow(&Rational::from(65_536)).unwrap();
    /// assert!(huge.checked_pow(&Rational::from(65_536)).is_err());
    /// ```
    pub fn checked_pow(&self, exponent: &Self) -> EvalResult<Self> {
        let too_large = || RuntimeError::ExponentTooLarge { exponent: exponent.to_string() };
        if !exponent.is_integer() {
            return Err(too_large());
        }
        let magnitude =
            bigint_to_u32_checked(&exponent.numerator().abs(), MAX_EXPONENT, too_large())?;

        let base_bits = self.numerator().bits().max(self.denominator().bits());
        if base_bits.saturating_mul(u64::from(magnitude)) > MAX_RESULT_BITS {
            return Err(too_large());
        }

        let numerator = self.numerator().pow(magnitude);
        let denominator = self.denominator().pow(magnitude);

        if exponent.is_negative() {
            Self::checked_new(denominator, numerator)
        } else {
            Self::checked_new(numerator, denominator)
        }
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::integer(n)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denominator().is_one() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl ops::Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        Rational(&self.0 + &rhs.0)
    }
}

impl ops::Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Rational {
        Rational(&self.0 - &rhs.0)
    }
}

impl ops::Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        Rational(&self.0 * &rhs.0)
    }
}

impl ops::Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}
