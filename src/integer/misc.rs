/*
    Binomial coefficients, extended GCD, random values
*/

use rug::rand::RandState;

use super::*;

// Miscellaneous operations
impl BigInt {
    /// Returns the binomial coefficient `C(n, k)`.
    ///
    /// `k < 0` or `k > n` yields 0. Computed as
    /// `(n-k+1) * ... * n / k!` after reducing `k` to `min(k, n - k)`.
    pub fn binomial(n: i64, k: i64) -> Self {
        if k < 0 || k > n {
            return Self::zero();
        }
        let k = k.min(n - k);
        if k == 0 {
            return Self::from(1);
        }
        let num = Self::range_product(n - k + 1, n);
        let den = Self::range_product(1, k);
        Self(num.0 / den.0)
    }

    /// Returns `(g, x, y)` where `g` is the greatest common divisor of
    /// `self` and `other` and `g == self * x + other * y`.
    ///
    /// `g` is never negative; it is 0 only when both inputs are 0.
    pub fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let (g, x, y) = self
            .0
            .clone()
            .extended_gcd(other.0.clone(), Integer::new());
        (Self(g), Self(x), Self(y))
    }

    /// Returns a uniformly distributed value in `[0, self)` drawn from
    /// `rng`.
    ///
    /// The generator belongs to the caller: seeding it with a fixed value
    /// makes the sequence reproducible, and synchronizing it across
    /// threads is the caller's responsibility. A bound that is not
    /// strictly positive reports [`Error::RandomBound`].
    pub fn random_below(&self, rng: &mut RandState) -> Result<Self> {
        if self.0.cmp0() != Ordering::Greater {
            return Err(Error::RandomBound);
        }
        Ok(Self(self.0.clone().random_below(rng)))
    }
}
