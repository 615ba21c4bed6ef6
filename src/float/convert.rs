/*
    Conversions between `BigFloat` and `BigInt`
*/

use super::*;

// Integer conversions
impl BigFloat {
    /// Returns the greatest integer less than or equal to `self`.
    pub fn floor(&self) -> BigInt {
        match self.0.clone().floor().to_integer() {
            Some(i) => BigInt(i),
            // floor of a finite value is a finite integer
            None => panic!("unreachable"),
        }
    }

    /// Rounds `self` to an integer by adding one half and truncating
    /// toward zero. Positive halfway cases round up: `round(2.5) == 3`.
    /// The truncation pulls negative values toward zero, so
    /// `round(-2.5) == -2` and `round(-2.75) == -2`.
    ///
    /// Operates on a private copy; `self` is unchanged.
    pub fn round(&self) -> BigInt {
        let shifted = Float::with_val(Self::PREC, &self.0 + 0.5f64);
        match shifted.trunc().to_integer() {
            Some(i) => BigInt(i),
            None => panic!("unreachable"),
        }
    }
}

// Implementing `From<&BigInt>` for `BigFloat`
impl From<&BigInt> for BigFloat {
    /// Converts exactly when the integer's magnitude fits in
    /// [`BigFloat::PREC`] mantissa bits; wider values round to the
    /// nearest representable float. This is a defined lossy conversion,
    /// not an error.
    fn from(i: &BigInt) -> Self {
        Self(Float::with_val(Self::PREC, &i.0))
    }
}
