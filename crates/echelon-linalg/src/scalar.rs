//! Scalar traits for the elimination engine.
//!
//! Vectors, matrices and forward reduction work over any [`Scalar`]: plain
//! `i64` (the integer-only variant) or [`Rational`]. Back substitution needs
//! multiplicative inverses and is restricted to [`Field`].

use std::fmt::{Debug, Display};
use std::ops::{Mul, Neg, Sub};

use num_traits::{One, Zero};

use echelon_integers::{ArithmeticError, Rational};

/// An exact scalar usable as a matrix entry.
///
/// # Laws
///
/// - `quotient(y)` is exact whenever `y` divides `self` (always, for a field)
/// - Otherwise `self - quotient(y) * y` is strictly smaller in magnitude than `y`
pub trait Scalar:
    Clone
    + PartialEq
    + Debug
    + Display
    + Zero
    + One
    + From<i64>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Returns true if this value can act as a pivot without rescaling.
    fn is_unit(&self) -> bool;

    /// Returns true if `|self| >= |other|`.
    fn abs_ge(&self, other: &Self) -> bool;

    /// Quotient used to cancel `self` against `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    fn quotient(&self, divisor: &Self) -> Result<Self, ArithmeticError>;

    /// Returns the value as an integer, if it is one.
    fn to_integer(&self) -> Option<i64>;

    /// Canonical representative of the value, used after row combinations.
    #[must_use]
    fn reduced(&self) -> Self {
        self.clone()
    }
}

/// A scalar with multiplicative inverses.
pub trait Field: Scalar {
    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the value is zero.
    fn inverse(&self) -> Result<Self, ArithmeticError>;
}

impl Scalar for i64 {
    fn is_unit(&self) -> bool {
        self.unsigned_abs() == 1
    }

    fn abs_ge(&self, other: &Self) -> bool {
        self.unsigned_abs() >= other.unsigned_abs()
    }

    fn quotient(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        // Overflow (`i64::MIN / -1`) is left to the native operator.
        if *divisor == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self / divisor)
    }

    fn to_integer(&self) -> Option<i64> {
        Some(*self)
    }
}

impl Scalar for Rational {
    fn is_unit(&self) -> bool {
        self.is_one()
    }

    fn abs_ge(&self, other: &Self) -> bool {
        self.abs() >= other.abs()
    }

    fn quotient(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        // Reduced once here so the row update multiplies small terms.
        self.checked_div(divisor).map(|q| q.simplify())
    }

    fn to_integer(&self) -> Option<i64> {
        Rational::to_integer(self)
    }

    fn reduced(&self) -> Self {
        self.simplify()
    }
}

impl Field for Rational {
    fn inverse(&self) -> Result<Self, ArithmeticError> {
        self.recip()
    }
}
