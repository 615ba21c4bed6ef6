/*
    Exact rational value
*/

mod arithmetic;

use std::cmp::Ordering;
use std::fmt;

use rug::Rational;

use crate::{BigInt, Error, Number, Result};

/// An exact fraction of two arbitrary-precision integers.
///
/// The value is always kept in canonical form: lowest terms, with a
/// positive denominator. The denominator is never zero; constructing a
/// rational with one is an error, not a representable value.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigRat(pub(crate) Rational);

// Constructors and getters
impl BigRat {
    /// Returns a new `BigRat` with a value of 0/1.
    pub fn zero() -> Self {
        Self(Rational::new())
    }

    /// Returns the ratio `num / den`, reduced to canonical form.
    ///
    /// A zero `den` reports [`Error::ZeroDenominator`].
    pub fn new(num: i64, den: i64) -> Result<Self> {
        if den == 0 {
            return Err(Error::ZeroDenominator);
        }
        Ok(Self(Rational::from((num, den))))
    }

    /// Returns the numerator. Carries the sign of the value.
    pub fn numer(&self) -> BigInt {
        BigInt(self.0.numer().clone())
    }

    /// Returns the denominator, always positive.
    pub fn denom(&self) -> BigInt {
        BigInt(self.0.denom().clone())
    }
}

// Implementing `Number` for `BigRat`
impl Number for BigRat {
    fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    fn abs(&self) -> Self {
        BigRat::abs(self)
    }
}

// Implementing `Display` for `BigRat`
impl fmt::Display for BigRat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
