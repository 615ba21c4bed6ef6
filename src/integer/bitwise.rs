/*
    Bitwise operations
*/

use super::*;

// Bitwise operations, two's-complement over the conceptual
// infinite-width representation.
impl BigInt {
    /// Returns `self AND other`.
    pub fn and(&self, other: &Self) -> Self {
        Self(Integer::from(&self.0 & &other.0))
    }

    /// Returns `self AND NOT other`.
    pub fn and_not(&self, other: &Self) -> Self {
        let mask = Integer::from(!&other.0);
        Self(Integer::from(&self.0 & &mask))
    }

    /// Returns `self OR other`.
    pub fn or(&self, other: &Self) -> Self {
        Self(Integer::from(&self.0 | &other.0))
    }

    /// Returns `self XOR other`.
    pub fn xor(&self, other: &Self) -> Self {
        Self(Integer::from(&self.0 ^ &other.0))
    }

    /// Returns the bitwise complement `NOT self`, which is `-self - 1`.
    pub fn not(&self) -> Self {
        Self(Integer::from(!&self.0))
    }

    /// Returns the value of bit `index`.
    ///
    /// Negative values are viewed in two's complement, so their high
    /// bits are all set.
    pub fn bit(&self, index: u32) -> bool {
        self.0.get_bit(index)
    }

    /// Returns the number of bits in `|self|`; zero has length 0.
    pub fn bit_length(&self) -> u32 {
        self.0.significant_bits()
    }

    /// Returns `self << n`.
    ///
    /// The shift amount is unsigned, so a negative shift is rejected at
    /// the type level.
    pub fn shl(&self, n: u32) -> Self {
        Self(Integer::from(&self.0 << n))
    }

    /// Returns `self >> n`, an arithmetic shift that preserves sign.
    pub fn shr(&self, n: u32) -> Self {
        Self(Integer::from(&self.0 >> n))
    }
}
