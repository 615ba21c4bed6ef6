/*
    Error type
*/

use thiserror::Error;

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure an operation in this crate can report.
///
/// All errors are surfaced synchronously to the immediate caller as an
/// `Err` value. There is no transient failure mode anywhere in the crate,
/// so there is nothing to retry; callers decide whether to substitute a
/// default or abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input string is not a valid integer in the requested radix.
    ///
    /// Reported instead of silently producing a zero, which would be
    /// indistinguishable from a successfully parsed `"0"`.
    #[error("cannot parse {input:?} as an integer in radix {radix}")]
    Parse { input: String, radix: i32 },

    /// The requested radix is outside the supported `2..=36` range.
    #[error("invalid radix {0}, expected 2 <= radix <= 36")]
    InvalidRadix(i32),

    /// Division (or remainder) by an exact zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Square root of a negative operand.
    #[error("square root of a negative value")]
    NegativeSqrt,

    /// Plain (modulus-free) exponentiation requires an exponent in
    /// `0..=u32::MAX`.
    #[error("exponent out of range for plain exponentiation")]
    ExponentOutOfRange,

    /// A negative exponent was used with a modulus the base is not
    /// invertible under.
    #[error("base has no inverse under the given modulus")]
    NotInvertible,

    /// `random_below` requires a strictly positive bound.
    #[error("random bound must be positive")]
    RandomBound,

    /// A rational was constructed with a zero denominator.
    #[error("zero denominator")]
    ZeroDenominator,

    /// A float was constructed from a NaN or infinite `f64`.
    ///
    /// Only finite values are representable; see [`crate::BigFloat`].
    #[error("value is not finite")]
    NotFinite,
}
