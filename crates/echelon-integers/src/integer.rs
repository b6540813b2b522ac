//! Integer utilities.
//!
//! Helpers shared by rational simplification and by pivot search in the
//! elimination engine. Absolute value and sign come straight from `i64`
//! (`abs`, `unsigned_abs`, `signum`).

use crate::ArithmeticError;

/// Returns the smallest absolute value in `xs`, or `None` if it is empty.
#[must_use]
pub fn min_abs(xs: &[i64]) -> Option<u64> {
    xs.iter().map(|x| x.unsigned_abs()).min()
}

/// Computes the non-negative greatest common divisor of two integers.
///
/// `gcd(0, 0)` is `0`.
#[must_use]
pub fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a;
    let mut b = b;

    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }

    a.abs()
}

/// Computes the greatest common divisor of a set of integers.
///
/// Returns 1 for an empty set or a set of zeros, since every integer
/// divides zero and there is no largest one.
#[must_use]
pub fn bcd(xs: &[i64]) -> i64 {
    match xs.iter().fold(0, |acc, &x| gcd(acc, x)) {
        0 => 1,
        g => g,
    }
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, s, t)` such that `a*s + b*t = g` and `g = gcd(a, b) >= 0`.
#[must_use]
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1, 0);
    let (mut old_t, mut t) = (0, 1);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }

    if old_r < 0 {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Bezout coefficients combining two coprime integers into a unit.
///
/// `a` carries the sign of `x` and `b` the sign of `y`, so both products
/// `a*x` and `b*y` are non-negative. Exactly one identity holds:
/// - `a*x - b*y = 1` when `flipped` is false
/// - `b*y - a*x = 1` when `flipped` is true
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bezout {
    /// Coefficient of `x`.
    pub a: i64,
    /// Coefficient of `y`.
    pub b: i64,
    /// Whether the `y` term is the positive one.
    pub flipped: bool,
}

impl Bezout {
    /// Evaluates the combination that equals 1.
    #[must_use]
    pub fn combine(&self, x: i64, y: i64) -> i64 {
        if self.flipped {
            self.b * y - self.a * x
        } else {
            self.a * x - self.b * y
        }
    }
}

/// Finds Bezout coefficients for a pair of non-zero coprime integers.
///
/// # Errors
///
/// Returns [`ArithmeticError::ZeroOperand`] if either argument is zero and
/// [`ArithmeticError::NotCoprime`] if they share a factor.
pub fn find_scalars(x: i64, y: i64) -> Result<Bezout, ArithmeticError> {
    if x == 0 || y == 0 {
        return Err(ArithmeticError::ZeroOperand { x, y });
    }

    // |x|*s + |y|*t = 1 with s and t of opposite sign (or one of them zero).
    let (g, s, t) = extended_gcd(x.abs(), y.abs());
    if g != 1 {
        return Err(ArithmeticError::NotCoprime { x, y, gcd: g });
    }

    let (m, n, flipped) = if s > 0 { (s, -t, false) } else { (-s, t, true) };

    Ok(Bezout {
        a: x.signum() * m,
        b: y.signum() * n,
        flipped,
    })
}
