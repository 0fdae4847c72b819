//! # Exact fraction arithmetic
//!
//! Fractions are stored as a 64-bit numerator and denominator pair, so every operation is exact:
//! no precision is lost until a caller explicitly converts to a floating point or decimal type.
//! Overflow of the underlying integers is not detected; callers are responsible for keeping
//! intermediate products representable.
#![warn(missing_docs)]

pub mod error;
pub mod fraction;
pub mod integer;

pub use error::FractionError;
pub use fraction::Fraction;
