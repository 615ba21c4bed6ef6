/*
    Arithmetic
*/

use rug::ops::Pow;

use super::*;

// Arithmetic operations
impl BigInt {
    /// Returns `|self|`.
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        Self(Integer::from(&self.0 + &other.0))
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        Self(Integer::from(&self.0 - &other.0))
    }

    /// Returns `self * other`.
    pub fn mul(&self, other: &Self) -> Self {
        Self(Integer::from(&self.0 * &other.0))
    }

    /// Returns `self / other`, truncated toward zero.
    ///
    /// Truncation means the quotient of mixed-sign operands rounds toward
    /// zero: `(-7) / 2 == -3`. Together with [`rem`](Self::rem) this
    /// satisfies `self == q * other + r` with `|r| < |other|` and `r`
    /// taking the sign of `self`.
    pub fn div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(Integer::from(&self.0 / &other.0)))
    }

    /// Returns the remainder of `self / other` under truncating division.
    ///
    /// The remainder takes the sign of `self`: `(-7) % 2 == -1`.
    pub fn rem(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(Integer::from(&self.0 % &other.0)))
    }

    /// Returns `self + 1`.
    pub fn incr(&self) -> Self {
        Self(Integer::from(&self.0 + 1))
    }

    /// Returns `self - 1`.
    pub fn decr(&self) -> Self {
        Self(Integer::from(&self.0 - 1))
    }

    /// Returns the product of all integers in the range `[a, b]`.
    ///
    /// An empty range (`a > b`) yields the empty product, 1. A range
    /// spanning zero yields 0.
    pub fn range_product(a: i64, b: i64) -> Self {
        let mut acc = Integer::from(1);
        for i in a..=b {
            acc *= i;
        }
        Self(acc)
    }

    /// Returns `self ^ exponent mod |modulus|`, with the result in
    /// `[0, |modulus|)`.
    ///
    /// A zero `modulus` selects plain exponentiation instead of reducing;
    /// that path requires `exponent` to be a non-negative value fitting
    /// in a `u32` and reports [`Error::ExponentOutOfRange`] otherwise.
    /// Under a non-zero modulus a negative exponent is resolved through
    /// the modular inverse of the base, reporting
    /// [`Error::NotInvertible`] when no inverse exists.
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Result<Self> {
        if modulus.is_zero() {
            let e = exponent.0.to_u32().ok_or(Error::ExponentOutOfRange)?;
            return Ok(Self(self.0.clone().pow(e)));
        }
        let m = modulus.0.clone().abs();
        match self.0.clone().pow_mod(&exponent.0, &m) {
            Ok(r) => Ok(Self(r)),
            Err(_) => Err(Error::NotInvertible),
        }
    }

    /// Returns `self ^ exponent`, defined as
    /// [`mod_pow`](Self::mod_pow) with a zero modulus.
    pub fn pow(&self, exponent: &Self) -> Result<Self> {
        self.mod_pow(exponent, &Self::zero())
    }

    /// Returns the integer square root, the floor of the true root.
    ///
    /// The root of a negative operand is not a representable value and
    /// reports [`Error::NegativeSqrt`].
    pub fn sqrt(&self) -> Result<Self> {
        if self.0.cmp0() == Ordering::Less {
            return Err(Error::NegativeSqrt);
        }
        Ok(Self(self.0.clone().sqrt()))
    }
}
