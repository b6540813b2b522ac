//! Exact rational numbers over machine integers.
//!
//! The denominator is kept strictly positive so the sign always lives in the
//! numerator. Arithmetic only performs a cheap simplification step (exact
//! divisibility of numerator by denominator or the reverse); reduction to
//! lowest terms happens on demand via [`Rational::simplify`] and whenever the
//! value is displayed.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use crate::{bcd, ArithmeticError};

/// An exact fraction `numer / denom` with `denom > 0`.
///
/// Two rationals compare equal when they denote the same value, regardless
/// of whether either is in lowest terms.
#[derive(Clone, Copy)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// A negative denominator is normalised by moving the sign to the
    /// numerator. The fraction is not reduced.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `denom` is zero.
    pub fn new(numer: i64, denom: i64) -> Result<Self, ArithmeticError> {
        match denom.cmp(&0) {
            Ordering::Equal => Err(ArithmeticError::DivisionByZero),
            Ordering::Less => Ok(Self {
                numer: -numer,
                denom: -denom,
            }),
            Ordering::Greater => Ok(Self { numer, denom }),
        }
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self { numer: n, denom: 1 }
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numer(&self) -> i64 {
        self.numer
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub const fn denom(&self) -> i64 {
        self.denom
    }

    /// Returns the truncated integer quotient and the remainder.
    #[must_use]
    pub const fn to_int(&self) -> (i64, i64) {
        (self.numer / self.denom, self.numer % self.denom)
    }

    /// Returns true if the value is an integer.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.numer % self.denom == 0
    }

    /// Converts to an integer if the value is integral.
    #[must_use]
    pub const fn to_integer(&self) -> Option<i64> {
        if self.is_integer() {
            Some(self.numer / self.denom)
        } else {
            None
        }
    }

    /// Floating-point approximation, for diagnostics only.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Returns the absolute value.
    #[must_use]
    pub const fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom,
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub const fn signum(&self) -> i64 {
        self.numer.signum()
    }

    /// Sign of `self - other`: -1, 0 or 1.
    ///
    /// Cross products are taken in `i128`, so unreduced operands with small
    /// values never overflow here.
    #[must_use]
    pub fn compare(&self, other: &Self) -> i64 {
        let lhs = i128::from(self.numer) * i128::from(other.denom);
        let rhs = i128::from(other.numer) * i128::from(self.denom);
        match lhs.cmp(&rhs) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Reduces to lowest terms.
    #[must_use]
    pub fn simplify(&self) -> Self {
        let f = bcd(&[self.numer, self.denom]);
        Self {
            numer: self.numer / f,
            denom: self.denom / f,
        }
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.numer == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::new(self.numer * rhs.denom, self.denom * rhs.numer)?.cheap_simplify())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the value is zero.
    pub fn recip(&self) -> Result<Self, ArithmeticError> {
        Self::one().checked_div(self)
    }

    /// Multiplies by an integer.
    #[must_use]
    pub fn scale(&self, factor: i64) -> Self {
        *self * Self::from_integer(factor)
    }

    /// Divides by an integer.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_scale_div(&self, divisor: i64) -> Result<Self, ArithmeticError> {
        self.checked_div(&Self::from_integer(divisor))
    }

    /// Collapses the fraction when one part divides the other exactly.
    ///
    /// Cheaper than [`Rational::simplify`]; keeps magnitudes in check across
    /// long chains of row combinations without a gcd per operation.
    fn cheap_simplify(self) -> Self {
        if self.numer % self.denom == 0 {
            Self {
                numer: self.numer / self.denom,
                denom: 1,
            }
        } else if self.denom % self.numer == 0 {
            Self {
                numer: self.numer.signum(),
                denom: self.denom / self.numer.abs(),
            }
        } else {
            self
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numer == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(1)
    }

    fn is_one(&self) -> bool {
        self.numer == self.denom
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == 0
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other).cmp(&0)
    }
}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.simplify();
        reduced.numer.hash(state);
        reduced.denom.hash(state);
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numer, self.denom)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reduced = self.simplify();
        if reduced.denom == 1 {
            write!(f, "{}", reduced.numer)
        } else {
            write!(f, "{}/{}", reduced.numer, reduced.denom)
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            numer: self.numer * rhs.denom + rhs.numer * self.denom,
            denom: self.denom * rhs.denom,
        }
        .cheap_simplify()
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            numer: self.numer * rhs.denom - rhs.numer * self.denom,
            denom: self.denom * rhs.denom,
        }
        .cheap_simplify()
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            numer: self.numer * rhs.numer,
            denom: self.denom * rhs.denom,
        }
        .cheap_simplify()
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}
