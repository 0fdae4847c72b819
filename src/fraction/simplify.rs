//! # Simplification
//!
//! The greatest common divisor behind `Fraction::simplified`, computed by prime factorization
//! rather than the Euclidean algorithm: the smaller of the two fields is factored into primes,
//! each factor is tested against the larger field by repeated division, and the surviving
//! divisors are multiplied back together.
//!
//! "Smaller" is decided by comparing the raw signed fields, so a negative numerator is always
//! selected as the value to factor. Factoring a negative value emits a `-1` pseudo-factor, which
//! makes the resulting divisor negative; dividing both fields by it flips their signs, and the
//! constructor's normalization flips them back. For any nonzero fraction the reduced value
//! agrees with what a Euclidean reference produces, which the tests below pin down.
use crate::fraction::Fraction;

/// The greatest common divisor of the two fields of `value`.
///
/// The caller must ensure the numerator is nonzero: zero cannot be factored.
pub(super) fn greatest_common_divisor(value: &Fraction) -> i64 {
    debug_assert_ne!(value.numerator, 0);

    let (smallest, largest) = if value.numerator > value.denominator {
        (value.denominator, value.numerator)
    } else {
        (value.numerator, value.denominator)
    };

    find_divisors(largest, &prime_factors(smallest))
        .into_iter()
        .product()
}

/// Factor `value` into primes by trial division from 2 upward, with multiplicity.
///
/// A negative `value` contributes a leading `-1`. When no factor is found before the remaining
/// value exhausts itself, `value` itself is the only factor: either a prime, or one of the
/// pseudo-factors `1` and `-1`.
fn prime_factors(value: i64) -> Vec<i64> {
    let mut factors = Vec::new();
    if value < 0 {
        factors.push(-1);
    }

    let mut remaining = value.abs();
    let mut found = false;
    let mut candidate = 2;
    while candidate <= remaining {
        if remaining % candidate == 0 {
            remaining /= candidate;
            found = true;
            factors.push(candidate);
        } else {
            candidate += 1;
        }
    }
    if !found {
        factors.push(value);
    }

    factors
}

/// Collect the `candidates` that divide `value`, dividing each one out as it is found so that
/// factor multiplicities carry over correctly.
fn find_divisors(value: i64, candidates: &[i64]) -> Vec<i64> {
    let mut divisors = Vec::new();

    let mut remaining = value;
    for &candidate in candidates {
        if remaining % candidate == 0 {
            remaining /= candidate;
            divisors.push(candidate);
        }
    }

    divisors
}

#[cfg(test)]
mod test {
    use crate::fraction::Fraction;
    use crate::fraction::simplify::{greatest_common_divisor, prime_factors};
    use crate::integer::IntegerMath;

    #[test]
    fn factors_of_positive_values() {
        assert_eq!(prime_factors(12), vec![2, 2, 3]);
        assert_eq!(prime_factors(7), vec![7]);
        assert_eq!(prime_factors(1), vec![1]);
    }

    #[test]
    fn factors_of_negative_values() {
        assert_eq!(prime_factors(-12), vec![-1, 2, 2, 3]);
        assert_eq!(prime_factors(-7), vec![-1, 7]);
        assert_eq!(prime_factors(-1), vec![-1, -1]);
    }

    #[test]
    fn divisor_of_known_pairs() {
        assert_eq!(greatest_common_divisor(&Fraction::new(2, 4).unwrap()), 2);
        assert_eq!(greatest_common_divisor(&Fraction::new(27, 63).unwrap()), 9);
        assert_eq!(greatest_common_divisor(&Fraction::new(1, 2).unwrap()), 1);
        assert_eq!(greatest_common_divisor(&Fraction::new(7, 7).unwrap()), 7);
        // A negative numerator is always picked as the value to factor, and its -1 pseudo-factor
        // always divides, so the divisor comes out negative.
        assert_eq!(greatest_common_divisor(&Fraction::new(-12, 24).unwrap()), -12);
        assert_eq!(greatest_common_divisor(&Fraction::new(-12, 5).unwrap()), -1);
    }

    /// The reduced fraction must equal what the Euclidean reference reduces to, for every sign
    /// and magnitude combination, even where the intermediate divisor differs in sign.
    #[test]
    fn agrees_with_euclidean_reference() {
        for numerator in -24_i64..=24 {
            if numerator == 0 {
                continue;
            }
            for denominator in 1_i64..=24 {
                let fraction = Fraction::new(numerator, denominator).unwrap();
                let reduced = fraction.simplified();

                let reference = numerator.abs().greatest_common_factor(denominator);
                assert_eq!(
                    (reduced.numerator(), reduced.denominator()),
                    (numerator / reference, denominator / reference),
                    "mismatch reducing {}/{}", numerator, denominator,
                );
            }
        }
    }
}
