//! Fixed-length vectors of exact scalars.
//!
//! Arithmetic returns new vectors and leaves its operands untouched. The
//! in-place row operations used by [`Matrix`](crate::Matrix) are crate
//! private.

use std::fmt;
use std::ops::Index;

use echelon_integers::{bcd, Rational};

use crate::error::{check_dimension, check_index, Result};
use crate::scalar::Scalar;

/// An ordered, fixed-length sequence of scalars.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Vector<T> {
    values: Vec<T>,
}

impl<T> Vector<T> {
    /// Creates a vector from its entries.
    #[must_use]
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the vector has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a reference to the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`](crate::LinalgError::IndexOutOfRange)
    /// if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.len())?;
        Ok(&self.values[index])
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Consumes the vector, returning its entries.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}

impl<T: Scalar> Vector<T> {
    /// Creates a vector of integer-valued scalars.
    #[must_use]
    pub fn from_ints(xs: &[i64]) -> Self {
        Self::new(xs.iter().map(|&x| T::from(x)).collect())
    }

    /// Creates a zero vector.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![T::zero(); len])
    }

    /// Creates the basis vector with a one at `index` and zeros elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`](crate::LinalgError::IndexOutOfRange)
    /// if `index >= len`.
    pub fn basis(index: usize, len: usize) -> Result<Self> {
        check_index(index, len)?;
        let mut v = Self::zeros(len);
        v.values[index] = T::one();
        Ok(v)
    }

    /// Dot product with another vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`](crate::LinalgError::InvalidDimension)
    /// if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<T> {
        check_dimension(self.len(), other.len())?;
        Ok(self
            .values
            .iter()
            .zip(&other.values)
            .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }

    /// Multiplies every entry by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &T) -> Self {
        Self::new(self.values.iter().map(|v| v.clone() * factor.clone()).collect())
    }

    /// Element-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`](crate::LinalgError::InvalidDimension)
    /// if the lengths differ.
    pub fn minus(&self, other: &Self) -> Result<Self> {
        check_dimension(self.len(), other.len())?;
        Ok(Self::new(
            self.values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
        ))
    }

    /// Index of the first non-zero entry.
    #[must_use]
    pub fn leading_index(&self) -> Option<usize> {
        self.values.iter().position(|v| !v.is_zero())
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| v.is_zero())
    }

    /// In place: `self -= factor * other`. Lengths must already agree.
    pub(crate) fn sub_scaled_assign(&mut self, other: &Self, factor: &T) {
        debug_assert_eq!(self.len(), other.len());
        for (a, b) in self.values.iter_mut().zip(&other.values) {
            *a = (a.clone() - b.clone() * factor.clone()).reduced();
        }
    }

    /// In place: `self *= factor`.
    pub(crate) fn scale_assign(&mut self, factor: &T) {
        for a in &mut self.values {
            *a = (a.clone() * factor.clone()).reduced();
        }
    }
}

impl Vector<i64> {
    /// Greatest common divisor of the entries.
    #[must_use]
    pub fn bcd(&self) -> i64 {
        bcd(&self.values)
    }

    /// Divides every entry by the gcd of all entries.
    pub fn simplify(&mut self) {
        let g = self.bcd();
        for v in &mut self.values {
            *v /= g;
        }
    }

    /// Returns a copy divided by the gcd of all entries.
    #[must_use]
    pub fn simplified(&self) -> Self {
        let mut v = self.clone();
        v.simplify();
        v
    }
}

impl Vector<Rational> {
    /// Returns a copy with every entry in lowest terms.
    #[must_use]
    pub fn simplified(&self) -> Self {
        Self::new(self.values.iter().map(Rational::simplify).collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinalgError;

    #[test]
    fn test_from_ints() {
        let v: Vector<Rational> = Vector::from_ints(&[1, -2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.get(1), Ok(&Rational::from(-2)));
        assert_eq!(v.to_string(), "[1,-2,3]");
    }

    #[test]
    fn test_basis() {
        let v: Vector<i64> = Vector::basis(2, 4).unwrap();
        assert_eq!(v.as_slice(), &[0, 0, 1, 0]);
        assert_eq!(
            Vector::<i64>::basis(4, 4),
            Err(LinalgError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_get_out_of_range() {
        let v: Vector<i64> = Vector::from_ints(&[1, 2]);
        assert_eq!(
            v.get(2),
            Err(LinalgError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_dot() {
        let a: Vector<i64> = Vector::from_ints(&[1, 2, 4]);
        let b: Vector<i64> = Vector::from_ints(&[9, 3, 8]);
        assert_eq!(a.dot(&b), Ok(47));
    }

    #[test]
    fn test_dot_length_mismatch() {
        let a: Vector<Rational> = Vector::from_ints(&[1, 2, 4]);
        let b: Vector<Rational> = Vector::from_ints(&[9, 3]);
        assert_eq!(
            a.dot(&b),
            Err(LinalgError::InvalidDimension { expected: 3, found: 2 })
        );
    }

    #[test]
    fn test_scale_and_minus() {
        let a: Vector<Rational> = Vector::from_ints(&[2, 4, 6]);
        let half = Rational::new(1, 2).unwrap();
        let scaled = a.scale(&half);
        assert_eq!(scaled.to_string(), "[1,2,3]");

        let diff = a.minus(&scaled).unwrap();
        assert_eq!(diff.to_string(), "[1,2,3]");

        // operands are untouched
        assert_eq!(a.to_string(), "[2,4,6]");

        let short: Vector<Rational> = Vector::from_ints(&[1]);
        assert!(matches!(
            a.minus(&short),
            Err(LinalgError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_leading_index() {
        let v: Vector<i64> = Vector::from_ints(&[0, 0, 5, 1]);
        assert_eq!(v.leading_index(), Some(2));
        assert!(!v.is_zero());

        let z: Vector<i64> = Vector::zeros(3);
        assert_eq!(z.leading_index(), None);
        assert!(z.is_zero());
    }

    #[test]
    fn test_simplify() {
        let cases = [
            (vec![2, 4], vec![1, 2]),
            (vec![2, 5], vec![2, 5]),
            (vec![2], vec![1]),
            (vec![-6, 9, 0], vec![-2, 3, 0]),
            (vec![0, 0], vec![0, 0]),
        ];
        for (input, expected) in cases {
            let mut v: Vector<i64> = Vector::new(input);
            v.simplify();
            assert_eq!(v.into_inner(), expected);
        }
    }

    #[test]
    fn test_simplified_leaves_input() {
        let v: Vector<i64> = Vector::new(vec![2, 4]);
        let s = v.simplified();
        assert_eq!(s.as_slice(), &[1, 2]);
        assert_eq!(v.as_slice(), &[2, 4]);
    }

    #[test]
    fn test_rational_simplified() {
        let v = Vector::new(vec![
            Rational::new(2, 4).unwrap(),
            Rational::new(3, -6).unwrap(),
        ]);
        let s = v.simplified();
        assert_eq!((s[0].numer(), s[0].denom()), (1, 2));
        assert_eq!((s[1].numer(), s[1].denom()), (-1, 2));
        assert_eq!((v[0].numer(), v[0].denom()), (2, 4));
    }

    #[test]
    fn test_display_fractions() {
        let v = Vector::new(vec![Rational::new(4, 6).unwrap(), Rational::from(-1)]);
        assert_eq!(v.to_string(), "[2/3,-1]");
    }
}
