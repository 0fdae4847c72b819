//! # Construction shorthands

/// Shorthand for creating a fraction in tests.
///
/// One argument makes a whole number, two arguments a numerator/denominator pair.
#[macro_export]
macro_rules! F {
    ($value:expr) => {
        $crate::Fraction::from($value as i64)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::Fraction::new($numerator, $denominator).unwrap()
    };
}
