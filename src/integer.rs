/*
    Arbitrary-precision signed integer
*/

mod arithmetic;
mod bitwise;
mod misc;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rug::Integer;

use crate::{Error, Number, Result};

/// An arbitrary-precision signed integer.
///
/// A `BigInt` is immutable from the operation layer's point of view:
/// every arithmetic, bitwise, and comparison operation reads its operands
/// and returns a freshly allocated result. Each holder owns its value
/// independently; nothing in this crate aliases a `BigInt` behind the
/// caller's back.
///
/// Distinct values may be read from any number of threads at once. A
/// single value must not be written (for example, replaced through a
/// `&mut` binding) while another thread reads it without caller-supplied
/// synchronization.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigInt(pub(crate) Integer);

// Constructors
impl BigInt {
    /// Returns a new `BigInt` with a value of 0.
    pub fn zero() -> Self {
        Self(Integer::new())
    }

    /// Parses `s` as an integer written in the given radix.
    ///
    /// This is the only string entry point. The radix must lie in
    /// `2..=36`; digits above 9 are the letters `a..=z` in either case,
    /// and a leading `-` negates the value. A malformed string reports
    /// [`Error::Parse`] so the failure is never mistaken for a parsed
    /// zero.
    pub fn from_str_radix(s: &str, radix: i32) -> Result<Self> {
        if !(2..=36).contains(&radix) {
            return Err(Error::InvalidRadix(radix));
        }
        match Integer::from_str_radix(s, radix) {
            Ok(i) => Ok(Self(i)),
            Err(_) => Err(Error::Parse {
                input: s.to_owned(),
                radix,
            }),
        }
    }
}

// Implementing `From<i64>` for `BigInt`
impl From<i64> for BigInt {
    fn from(i: i64) -> Self {
        Self(Integer::from(i))
    }
}

// Implementing `FromStr` for `BigInt` (decimal)
impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_radix(s, 10)
    }
}

// Implementing `Number` for `BigInt`
impl Number for BigInt {
    fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    fn abs(&self) -> Self {
        BigInt::abs(self)
    }
}

// Implementing `Display` for `BigInt`
impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
