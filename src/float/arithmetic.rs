/*
    Arithmetic
*/

use super::*;

// Arithmetic operations, each rounded to nearest at `PREC` bits
impl BigFloat {
    /// Returns `|self|`.
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        Self(Float::with_val(Self::PREC, &self.0 + &other.0))
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        Self(Float::with_val(Self::PREC, &self.0 - &other.0))
    }

    /// Returns `self * other`.
    pub fn mul(&self, other: &Self) -> Self {
        Self(Float::with_val(Self::PREC, &self.0 * &other.0))
    }

    /// Returns `self / other`.
    ///
    /// There is no infinity to return: a divisor comparing equal to zero
    /// reports [`Error::DivisionByZero`].
    pub fn div(&self, other: &Self) -> Result<Self> {
        if other.0.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(Float::with_val(Self::PREC, &self.0 / &other.0)))
    }

    /// Returns the square root of `self`.
    ///
    /// Defined for non-negative operands only; a negative operand
    /// reports [`Error::NegativeSqrt`].
    pub fn sqrt(&self) -> Result<Self> {
        if self.0.is_sign_negative() && !self.0.is_zero() {
            return Err(Error::NegativeSqrt);
        }
        Ok(Self(self.0.clone().sqrt()))
    }

    /// Returns `self ^ exponent` for a signed integer exponent.
    ///
    /// A zero exponent yields 1. A positive exponent is computed by
    /// `exponent - 1` sequential multiplications, so the cost grows
    /// linearly with the exponent. A negative exponent yields the
    /// reciprocal of the positive power; a zero base then reports
    /// [`Error::DivisionByZero`].
    pub fn pow(&self, exponent: i64) -> Result<Self> {
        if exponent == 0 {
            return Ok(Self(Float::with_val(Self::PREC, 1)));
        }
        let mut acc = self.clone();
        for _ in 1..exponent.unsigned_abs() {
            acc = acc.mul(self);
        }
        if exponent < 0 {
            let one = Self(Float::with_val(Self::PREC, 1));
            return one.div(&acc);
        }
        Ok(acc)
    }
}
