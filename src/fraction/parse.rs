//! # Parsing of mixed-number notation
//!
//! Accepted shape, after trimming surrounding whitespace:
//!
//! ```text
//! [sign] [digits] [whitespace] [sign] digits "/" [sign] digits
//! ```
//!
//! The leading `[sign][digits]` is an optional whole part; the `numerator/denominator` part is
//! mandatory. Each of the three numbers may carry its own `+` or `-`. The fractional part's sign
//! always adds magnitude away from zero in the whole part's direction: `"3 -12/-17"` is
//! `3 + 12/17 = 63/17`, and a whole part of `-3` would subtract the fractional numerator.
use std::str::FromStr;

use crate::error::FractionError;
use crate::fraction::Fraction;

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parse mixed-number notation.
    ///
    /// # Errors
    ///
    /// `FractionError::InvalidFormat` when the input does not match the grammar or a numeric
    /// token overflows 64 bits; `FractionError::DivisionByZero` when the denominator token is
    /// zero.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || FractionError::InvalidFormat(input.to_string());

        let trimmed = input.trim();
        if !is_well_formed(trimmed) {
            return Err(invalid());
        }

        let tokens = trimmed.split_whitespace().collect::<Vec<_>>();
        let first = *tokens.first().ok_or_else(invalid)?;
        // A first token with a whole number in it never contains a slash, so when it parses, the
        // fractional part is the second token.
        let (whole, fractional) = match first.parse::<i64>() {
            Ok(whole) => (whole, *tokens.get(1).ok_or_else(invalid)?),
            Err(_) => (0, first),
        };

        let (numerator_token, denominator_token) = fractional.split_once('/').ok_or_else(invalid)?;
        let mut numerator = numerator_token.parse::<i64>().map_err(|_| invalid())?;
        let mut denominator = denominator_token.parse::<i64>().map_err(|_| invalid())?;
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        // The fractional part widens the whole part's magnitude, whatever its own sign was.
        numerator = if whole < 0 {
            whole * denominator - numerator
        } else {
            whole * denominator + numerator
        };

        Fraction::new(numerator, denominator)
    }
}

impl TryFrom<&str> for Fraction {
    type Error = FractionError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        input.parse()
    }
}

/// Whether trimmed input matches the mixed-number shape.
///
/// The part after the slash is a straight signed number. The part before it must end in the
/// signed numerator and may start with a signed whole part and separating blanks, which is
/// unambiguous when matched back to front.
fn is_well_formed(text: &str) -> bool {
    let Some((lead, tail)) = text.split_once('/') else {
        return false;
    };
    is_signed_digits(tail) && is_whole_then_numerator(lead)
}

fn is_signed_digits(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

/// Match `[sign] [digits] [blanks] [sign] digits` from the end of `text` backwards.
fn is_whole_then_numerator(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut position = bytes.len();

    let numerator_end = position;
    while position > 0 && bytes[position - 1].is_ascii_digit() {
        position -= 1;
    }
    if position == numerator_end {
        // The numerator needs at least one digit.
        return false;
    }
    if position > 0 && matches!(bytes[position - 1], b'+' | b'-') {
        position -= 1;
    }
    while position > 0 && matches!(bytes[position - 1], b' ' | b'\t') {
        position -= 1;
    }
    while position > 0 && bytes[position - 1].is_ascii_digit() {
        position -= 1;
    }
    if position > 0 && matches!(bytes[position - 1], b'+' | b'-') {
        position -= 1;
    }

    position == 0
}

#[cfg(test)]
mod test {
    use crate::error::FractionError;
    use crate::fraction::Fraction;

    fn parts(input: &str) -> (i64, i64) {
        let fraction = input.parse::<Fraction>().unwrap();
        (fraction.numerator(), fraction.denominator())
    }

    #[test]
    fn plain_fractions() {
        assert_eq!(parts("12/17"), (12, 17));
        assert_eq!(parts("-12/17"), (-12, 17));
        assert_eq!(parts("12/-17"), (-12, 17));
        assert_eq!(parts("-12/-17"), (12, 17));
        assert_eq!(parts("+3/4"), (3, 4));
    }

    #[test]
    fn mixed_numbers() {
        assert_eq!(parts("1 1/2"), (3, 2));
        assert_eq!(parts("3 -12/-17"), (63, 17));
        assert_eq!(parts("-1 1/2"), (-3, 2));
        assert_eq!(parts("-3 -12/-17"), (-63, 17));
        assert_eq!(parts("2\t1/3"), (7, 3));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(parts("  1/2  "), (1, 2));
        assert_eq!(parts("\t1 1/2\n"), (3, 2));
    }

    #[test]
    fn invalid_shapes_are_rejected() {
        for input in [
            "NOT VALID",
            "",
            "3",
            "1/2/3",
            "1//2",
            "/2",
            "1/",
            "- 1/2",
            "1.5/2",
            "1 2 3/4",
        ] {
            assert_eq!(
                input.parse::<Fraction>(),
                Err(FractionError::InvalidFormat(input.to_string())),
                "expected {:?} to be rejected", input,
            );
        }
    }

    #[test]
    fn error_carries_the_offending_input() {
        let error = "  what  ".parse::<Fraction>().unwrap_err();
        assert_eq!(error, FractionError::InvalidFormat("  what  ".to_string()));
    }

    #[test]
    fn tokens_matching_the_shape_can_still_fail_integer_parsing() {
        // "3-1/2" matches the shape with zero separating blanks, but "3-1" is no integer.
        assert_eq!(
            "3-1/2".parse::<Fraction>(),
            Err(FractionError::InvalidFormat("3-1/2".to_string())),
        );
    }

    #[test]
    fn zero_denominator_is_division_by_zero() {
        assert_eq!("1/0".parse::<Fraction>(), Err(FractionError::DivisionByZero));
        assert_eq!("3 1/0".parse::<Fraction>(), Err(FractionError::DivisionByZero));
    }

    #[test]
    fn try_from_delegates_to_from_str() {
        let fraction = Fraction::try_from("12/17").unwrap();
        assert_eq!((fraction.numerator(), fraction.denominator()), (12, 17));
        assert!(Fraction::try_from("twelve seventeenths").is_err());
    }
}
