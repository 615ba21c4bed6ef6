/*
    Fixed-precision floating-point value
*/

mod arithmetic;
mod convert;

use std::cmp::Ordering;
use std::fmt;

use rug::Float;

use crate::{BigInt, Error, Number, Result};

/// A floating-point value with an unbounded exponent and a mantissa held
/// at [`BigFloat::PREC`] bits.
///
/// Every constructor fixes the precision, so an instance at any other
/// precision cannot exist; there is no per-call precision to forget.
///
/// Only finite values are representable. [`BigFloat::try_from`] rejects
/// NaN and infinite inputs, and the operations that could otherwise
/// manufacture a non-finite value (division by an exact zero, the square
/// root of a negative value) report errors instead. Comparison is
/// therefore total.
///
/// Like the other value types, a `BigFloat` is never mutated by an
/// operation; results are freshly allocated.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct BigFloat(pub(crate) Float);

// Constructors and getters
impl BigFloat {
    /// Mantissa precision, in bits, of every `BigFloat`.
    pub const PREC: u32 = 256;

    /// Returns a new `BigFloat` with a value of 0.
    pub fn zero() -> Self {
        Self(Float::with_val(Self::PREC, 0))
    }

    /// Returns the mantissa precision of this value, always
    /// [`BigFloat::PREC`].
    pub fn prec(&self) -> u32 {
        self.0.prec()
    }
}

// Implementing `Default` for `BigFloat`
impl Default for BigFloat {
    fn default() -> Self {
        Self::zero()
    }
}

// Implementing `TryFrom<f64>` for `BigFloat`
impl TryFrom<f64> for BigFloat {
    type Error = Error;

    /// Converts exactly; every finite `f64` fits in 256 mantissa bits.
    /// NaN and infinities report [`Error::NotFinite`].
    fn try_from(f: f64) -> Result<Self> {
        if !f.is_finite() {
            return Err(Error::NotFinite);
        }
        Ok(Self(Float::with_val(Self::PREC, f)))
    }
}

// Implementing `Number` for `BigFloat`
impl Number for BigFloat {
    fn compare(&self, other: &Self) -> Ordering {
        match self.0.partial_cmp(&other.0) {
            Some(ord) => ord,
            // no NaN can be constructed
            None => panic!("unreachable"),
        }
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn abs(&self) -> Self {
        BigFloat::abs(self)
    }
}

// Implementing `Display` for `BigFloat`
impl fmt::Display for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
