//! # Field operations
//!
//! The four arithmetic operators together with their assigning and reference variants. Addition
//! and subtraction align both operands to a common denominator first; multiplication and
//! division cross-multiply the stored fields. Every operator hands back a simplified result.
//!
//! None of the operations guard against overflow of the intermediate products.

mod add {
    use std::iter::Sum;
    use std::ops::{Add, AddAssign};

    use num_traits::Zero;

    use crate::fraction::Fraction;

    impl Add for Fraction {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            let (left, right) = Self::to_common_denominator(self, rhs);
            Self::normalized(left.numerator + right.numerator, left.denominator).simplified()
        }
    }

    impl Add<&Fraction> for Fraction {
        type Output = Self;

        fn add(self, rhs: &Self) -> Self::Output {
            Add::add(self, *rhs)
        }
    }

    impl Add for &Fraction {
        type Output = Fraction;

        fn add(self, rhs: Self) -> Self::Output {
            Add::add(*self, *rhs)
        }
    }

    impl AddAssign for Fraction {
        fn add_assign(&mut self, rhs: Self) {
            *self = Add::add(*self, rhs);
        }
    }

    impl AddAssign<&Fraction> for Fraction {
        fn add_assign(&mut self, rhs: &Self) {
            *self = Add::add(*self, *rhs);
        }
    }

    impl Sum for Fraction {
        fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
            iter.fold(Self::zero(), Add::add)
        }
    }
}

mod sub {
    use std::ops::{Sub, SubAssign};

    use crate::fraction::Fraction;

    impl Sub for Fraction {
        type Output = Self;

        fn sub(self, rhs: Self) -> Self::Output {
            let (left, right) = Self::to_common_denominator(self, rhs);
            Self::normalized(left.numerator - right.numerator, left.denominator).simplified()
        }
    }

    impl Sub<&Fraction> for Fraction {
        type Output = Self;

        fn sub(self, rhs: &Self) -> Self::Output {
            Sub::sub(self, *rhs)
        }
    }

    impl Sub for &Fraction {
        type Output = Fraction;

        fn sub(self, rhs: Self) -> Self::Output {
            Sub::sub(*self, *rhs)
        }
    }

    impl SubAssign for Fraction {
        fn sub_assign(&mut self, rhs: Self) {
            *self = Sub::sub(*self, rhs);
        }
    }

    impl SubAssign<&Fraction> for Fraction {
        fn sub_assign(&mut self, rhs: &Self) {
            *self = Sub::sub(*self, *rhs);
        }
    }
}

mod mul {
    use std::ops::{Mul, MulAssign};

    use crate::fraction::Fraction;

    impl Mul for Fraction {
        type Output = Self;

        fn mul(self, rhs: Self) -> Self::Output {
            Self::normalized(
                self.numerator * rhs.numerator,
                self.denominator * rhs.denominator,
            ).simplified()
        }
    }

    impl Mul<&Fraction> for Fraction {
        type Output = Self;

        fn mul(self, rhs: &Self) -> Self::Output {
            Mul::mul(self, *rhs)
        }
    }

    impl Mul for &Fraction {
        type Output = Fraction;

        fn mul(self, rhs: Self) -> Self::Output {
            Mul::mul(*self, *rhs)
        }
    }

    impl MulAssign for Fraction {
        fn mul_assign(&mut self, rhs: Self) {
            *self = Mul::mul(*self, rhs);
        }
    }

    impl MulAssign<&Fraction> for Fraction {
        fn mul_assign(&mut self, rhs: &Self) {
            *self = Mul::mul(*self, *rhs);
        }
    }
}

mod div {
    use std::ops::{Div, DivAssign};

    use crate::fraction::Fraction;

    impl Div for Fraction {
        type Output = Self;

        /// Multiply by the reciprocal of `rhs`.
        ///
        /// # Panics
        ///
        /// When `rhs` has a zero numerator, which would become a zero denominator. Use
        /// `Fraction::checked_div` to propagate the failure instead.
        fn div(self, rhs: Self) -> Self::Output {
            match self.checked_div(rhs) {
                Ok(quotient) => quotient,
                Err(error) => panic!("{}", error),
            }
        }
    }

    impl Div<&Fraction> for Fraction {
        type Output = Self;

        fn div(self, rhs: &Self) -> Self::Output {
            Div::div(self, *rhs)
        }
    }

    impl Div for &Fraction {
        type Output = Fraction;

        fn div(self, rhs: Self) -> Self::Output {
            Div::div(*self, *rhs)
        }
    }

    impl DivAssign for Fraction {
        fn div_assign(&mut self, rhs: Self) {
            *self = Div::div(*self, rhs);
        }
    }

    impl DivAssign<&Fraction> for Fraction {
        fn div_assign(&mut self, rhs: &Self) {
            *self = Div::div(*self, *rhs);
        }
    }
}

mod neg {
    use std::ops::Neg;

    use crate::fraction::Fraction;

    impl Neg for Fraction {
        type Output = Self;

        fn neg(self) -> Self::Output {
            Self {
                numerator: -self.numerator,
                denominator: self.denominator,
            }
        }
    }

    impl Neg for &Fraction {
        type Output = Fraction;

        fn neg(self) -> Self::Output {
            Neg::neg(*self)
        }
    }
}

mod identities {
    use num_traits::{One, Zero};

    use crate::fraction::Fraction;

    impl Zero for Fraction {
        fn zero() -> Self {
            Self { numerator: 0, denominator: 1 }
        }

        fn is_zero(&self) -> bool {
            self.numerator == 0
        }
    }

    impl One for Fraction {
        fn one() -> Self {
            Self { numerator: 1, denominator: 1 }
        }
    }
}
