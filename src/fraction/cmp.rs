//! # Comparison and equality
//!
//! Comparisons among fractions and against integers are exact: both operands are aligned to a
//! common denominator and the numerators decide. Comparisons against floating point and decimal
//! types are of a different kind: the fraction is first converted, lossily, and the target
//! type's own comparison decides. Each target type gets its own explicit impl pair rather than
//! relying on numeric promotion.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;

use crate::fraction::Fraction;

mod exact {
    use super::*;

    impl PartialEq for Fraction {
        fn eq(&self, other: &Self) -> bool {
            let (left, right) = Fraction::to_common_denominator(*self, *other);
            left.numerator == right.numerator
        }
    }

    impl Eq for Fraction {
    }

    impl Ord for Fraction {
        fn cmp(&self, other: &Self) -> Ordering {
            let (left, right) = Fraction::to_common_denominator(*self, *other);
            left.numerator.cmp(&right.numerator)
        }
    }

    impl PartialOrd for Fraction {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl PartialEq<i64> for Fraction {
        fn eq(&self, other: &i64) -> bool {
            self == &Fraction::from(*other)
        }
    }

    impl PartialEq<Fraction> for i64 {
        fn eq(&self, other: &Fraction) -> bool {
            other == self
        }
    }

    impl PartialOrd<i64> for Fraction {
        fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
            self.partial_cmp(&Fraction::from(*other))
        }
    }

    impl PartialOrd<Fraction> for i64 {
        fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
            other.partial_cmp(self).map(Ordering::reverse)
        }
    }
}

mod approximate {
    use super::*;

    impl PartialEq<f32> for Fraction {
        fn eq(&self, other: &f32) -> bool {
            self.to_f32() == *other
        }
    }

    impl PartialEq<Fraction> for f32 {
        fn eq(&self, other: &Fraction) -> bool {
            other == self
        }
    }

    impl PartialOrd<f32> for Fraction {
        fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
            self.to_f32().partial_cmp(other)
        }
    }

    impl PartialOrd<Fraction> for f32 {
        fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
            self.partial_cmp(&other.to_f32())
        }
    }

    impl PartialEq<f64> for Fraction {
        fn eq(&self, other: &f64) -> bool {
            self.to_f64() == *other
        }
    }

    impl PartialEq<Fraction> for f64 {
        fn eq(&self, other: &Fraction) -> bool {
            other == self
        }
    }

    impl PartialOrd<f64> for Fraction {
        fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
            self.to_f64().partial_cmp(other)
        }
    }

    impl PartialOrd<Fraction> for f64 {
        fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
            self.partial_cmp(&other.to_f64())
        }
    }

    impl PartialEq<Decimal> for Fraction {
        fn eq(&self, other: &Decimal) -> bool {
            self.to_decimal() == *other
        }
    }

    impl PartialEq<Fraction> for Decimal {
        fn eq(&self, other: &Fraction) -> bool {
            other == self
        }
    }

    impl PartialOrd<Decimal> for Fraction {
        fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
            self.to_decimal().partial_cmp(other)
        }
    }

    impl PartialOrd<Fraction> for Decimal {
        fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
            self.partial_cmp(&other.to_decimal())
        }
    }
}

impl Hash for Fraction {
    /// Equal fractions must hash equally even when their representations differ, so the hash is
    /// taken over the simplified form: `1/2` and `2/4` land in the same bucket.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical = self.simplified();
        canonical.numerator.hash(state);
        canonical.denominator.hash(state);
    }
}
