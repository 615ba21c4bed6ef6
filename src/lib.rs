/*
    Top-level
*/

mod error;
mod number;

pub mod float;
pub mod integer;
pub mod rational;

pub use error::*;
pub use number::*;

pub use float::BigFloat;
pub use integer::BigInt;
pub use rational::BigRat;

pub use rug::rand::RandState;

/// Crate version, exposed for compatibility signaling.
/// It has no runtime effect.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
