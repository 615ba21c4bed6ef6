/*
    Arithmetic
*/

use super::*;

// Arithmetic operations, all exact
impl BigRat {
    /// Returns `|self|`.
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        Self(Rational::from(&self.0 + &other.0))
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        Self(Rational::from(&self.0 - &other.0))
    }

    /// Returns `self * other`.
    pub fn mul(&self, other: &Self) -> Self {
        Self(Rational::from(&self.0 * &other.0))
    }

    /// Returns `self / other`.
    ///
    /// A zero `other` reports [`Error::DivisionByZero`].
    pub fn div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(Rational::from(&self.0 / &other.0)))
    }

    /// Returns the reciprocal `1 / self`.
    ///
    /// A zero `self` reports [`Error::DivisionByZero`].
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(self.0.clone().recip()))
    }
}
