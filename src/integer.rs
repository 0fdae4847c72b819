//! # Integer helpers
//!
//! Greatest common factor and lowest common multiple over 64-bit signed integers, exposed as an
//! extension trait so call sites read in infix style.
//!
//! These helpers do not protect against overflow; `lowest_common_multiple` in particular can
//! overflow for large coprime inputs.

/// Common-factor arithmetic on integers.
pub trait IntegerMath {
    /// The greatest common factor of `self` and `other`.
    ///
    /// Computed with the Euclidean algorithm (repeated remainder).
    fn greatest_common_factor(self, other: Self) -> Self;

    /// The lowest common multiple of `self` and `other`.
    fn lowest_common_multiple(self, other: Self) -> Self;
}

impl IntegerMath for i64 {
    fn greatest_common_factor(self, other: Self) -> Self {
        let (mut value, mut remainder) = (self, other);
        while remainder != 0 {
            (value, remainder) = (remainder, value % remainder);
        }
        value
    }

    fn lowest_common_multiple(self, other: Self) -> Self {
        (self / self.greatest_common_factor(other)) * other
    }
}
