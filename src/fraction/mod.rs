//! # Fractions
//!
//! An exact rational number as a numerator and denominator pair. The denominator is always
//! positive and never zero; the sign lives in the numerator. The pair is deliberately *not* kept
//! in lowest terms: `2/4` and `1/2` are distinct representations of the same value, and only an
//! explicit [`Fraction::simplified`] reduces. Equality, ordering and addition therefore never
//! look at raw fields directly but first align both operands to a common denominator.
use std::fmt;

use rust_decimal::Decimal;

use crate::error::FractionError;
use crate::integer::IntegerMath;

mod cmp;
mod macros;
mod ops;
mod parse;
mod simplify;

/// An exact fraction with a 64-bit numerator and denominator.
///
/// Arithmetic does not guard against overflow; results silently wrap or truncate when an
/// intermediate product exceeds the `i64` range.
#[derive(Copy, Clone, Debug)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Create a new fraction from a numerator and denominator.
    ///
    /// A negative denominator is normalized away by negating both fields.
    ///
    /// # Errors
    ///
    /// `FractionError::DivisionByZero` if `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
        if denominator == 0 {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Self::normalized(numerator, denominator))
    }

    /// Store a pair whose denominator is known to be nonzero, moving its sign into the numerator.
    fn normalized(numerator: i64, denominator: i64) -> Self {
        debug_assert_ne!(denominator, 0);

        if denominator < 0 {
            Self { numerator: -numerator, denominator: -denominator }
        } else {
            Self { numerator, denominator }
        }
    }

    /// The numerator, exactly as stored: not necessarily reduced, carrying the sign.
    #[must_use]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// The denominator, exactly as stored: not necessarily reduced, always positive.
    #[must_use]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// This fraction reduced to lowest terms.
    ///
    /// The reduction divides both fields by their greatest common divisor, found by prime
    /// factorization of the smaller field. A fraction already in lowest terms comes back
    /// field-for-field identical, so the operation is idempotent.
    #[must_use]
    pub fn simplified(&self) -> Self {
        // Zero has no prime factorization; it reduces to 0/1 directly.
        if self.numerator == 0 {
            return Self { numerator: 0, denominator: 1 };
        }

        let divisor = simplify::greatest_common_divisor(self);
        Self::normalized(self.numerator / divisor, self.denominator / divisor)
    }

    /// Format as a mixed number: a whole part if there is one, a remainder fraction if there is
    /// one, e.g. `26/9` as `"2 8/9"` and `27/9` as `"3"`. Zero formats as `"0"`.
    ///
    /// The remainder fraction is not reduced, matching the `Display` form.
    #[must_use]
    pub fn to_proper_string(&self) -> String {
        if self.numerator == 0 {
            return "0".to_string();
        }

        let sign = if self.numerator < 0 { "-" } else { "" };
        let magnitude = self.numerator.abs();
        let whole = magnitude / self.denominator;
        let remainder = magnitude % self.denominator;

        let whole_part = if whole != 0 {
            format!("{} ", whole)
        } else {
            String::new()
        };
        let fraction_part = if remainder != 0 {
            format!("{}/{}", remainder, self.denominator)
        } else {
            String::new()
        };

        format!("{}{}{}", sign, whole_part, fraction_part).trim_end().to_string()
    }

    /// Approximate this fraction as a single precision float.
    ///
    /// Lossy and one-way: the exact value is in general not recoverable.
    #[must_use]
    pub fn to_f32(&self) -> f32 {
        self.numerator as f32 / self.denominator as f32
    }

    /// Approximate this fraction as a double precision float.
    ///
    /// Lossy and one-way: the exact value is in general not recoverable.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Approximate this fraction as a decimal floating point number.
    ///
    /// Uses `Decimal`'s division, which rounds to 28-29 significant digits. Lossy and one-way.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.numerator) / Decimal::from(self.denominator)
    }

    /// Divide by another fraction, propagating the failure when the divisor is zero.
    ///
    /// This is the `Result` form of the `/` operator, which panics instead.
    ///
    /// # Errors
    ///
    /// `FractionError::DivisionByZero` if `divisor` has a zero numerator, which would become the
    /// zero denominator of the reciprocal.
    pub fn checked_div(self, divisor: Self) -> Result<Self, FractionError> {
        Self::new(
            self.numerator * divisor.denominator,
            self.denominator * divisor.numerator,
        ).map(|quotient| quotient.simplified())
    }

    /// Scale both fractions onto their lowest common denominator.
    ///
    /// When the denominators already match both values come back unchanged. This alignment is
    /// what equality, ordering, addition and subtraction are built on.
    fn to_common_denominator(left: Self, right: Self) -> (Self, Self) {
        if left.denominator == right.denominator {
            return (left, right);
        }

        let lowest_common_multiple = left.denominator.lowest_common_multiple(right.denominator);
        let left_multiplier = lowest_common_multiple / left.denominator;
        let right_multiplier = lowest_common_multiple / right.denominator;

        (
            Self::normalized(
                left.numerator * left_multiplier,
                left.denominator * left_multiplier,
            ),
            Self::normalized(
                right.numerator * right_multiplier,
                right.denominator * right_multiplier,
            ),
        )
    }
}

impl From<i64> for Fraction {
    /// A whole number as a fraction over one.
    fn from(value: i64) -> Self {
        Self { numerator: value, denominator: 1 }
    }
}

impl fmt::Display for Fraction {
    /// Always `"{numerator}/{denominator}"`, unreduced.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
