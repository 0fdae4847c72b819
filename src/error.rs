//! # Error reporting for fraction construction
//!
//! A fraction can only fail to exist at a construction site: a zero denominator, or input text
//! that doesn't match the mixed-number grammar. Arithmetic on existing fractions never produces
//! an error value; dividing by a zero fraction panics, because the zero numerator would become a
//! zero denominator.
use std::error::Error;
use std::fmt;

/// A `FractionError` is created when a fraction could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    /// A zero denominator was supplied directly, or arose as a derived denominator.
    DivisionByZero,
    /// Input text does not match the mixed-number grammar, or a numeric token within a matched
    /// shape failed integer parsing.
    ///
    /// The contained `String` is the offending input, for diagnostics.
    InvalidFormat(String),
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FractionError::DivisionByZero => {
                write!(f, "denominator cannot be zero")
            },
            FractionError::InvalidFormat(input) => {
                write!(f, "value \"{}\" is not in the expected format", input)
            },
        }
    }
}

impl Error for FractionError {
}

#[cfg(test)]
mod test {
    use crate::error::FractionError;

    #[test]
    fn display() {
        assert_eq!(
            FractionError::DivisionByZero.to_string(),
            "denominator cannot be zero",
        );
        assert_eq!(
            FractionError::InvalidFormat("NOT VALID".to_string()).to_string(),
            "value \"NOT VALID\" is not in the expected format",
        );
    }
}
