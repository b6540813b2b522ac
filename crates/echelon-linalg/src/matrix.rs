//! Row-owning matrices of exact scalars.
//!
//! A matrix is a sequence of equal-length [`Vector`] rows. Swapping rows
//! exchanges ownership without copying entries, and every structural
//! operation that produces a new matrix allocates independent storage.

use std::fmt;
use std::ops::Index;

use crate::elimination::{self, EliminationConfig};
use crate::error::{check_dimension, check_index, Result};
use crate::scalar::{Field, Scalar};
use crate::vector::Vector;

/// Dense matrix stored as a list of rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Matrix<T> {
    rows: Vec<Vector<T>>,
}

impl<T> Matrix<T> {
    /// Creates a matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`](crate::LinalgError::InvalidDimension)
    /// if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vector<T>>) -> Result<Self> {
        if let Some(first) = rows.first() {
            let num_cols = first.len();
            for row in &rows {
                check_dimension(num_cols, row.len())?;
            }
        }
        Ok(Self { rows })
    }

    /// Returns `(num_rows, num_cols)`; `(0, 0)` for an empty matrix.
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        (self.num_rows(), self.num_cols())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.rows.first().map_or(0, Vector::len)
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }

    /// Returns a reference to the entry at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`](crate::LinalgError::IndexOutOfRange)
    /// if either index is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        self.row(row)?.get(col)
    }

    /// Returns the specified row.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`](crate::LinalgError::IndexOutOfRange)
    /// if `row >= num_rows()`.
    pub fn row(&self, row: usize) -> Result<&Vector<T>> {
        check_index(row, self.num_rows())?;
        Ok(&self.rows[row])
    }

    /// Returns all rows.
    #[must_use]
    pub fn rows(&self) -> &[Vector<T>] {
        &self.rows
    }

    /// Consumes the matrix, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vector<T>> {
        self.rows
    }

    /// Swaps two rows in place.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`](crate::LinalgError::IndexOutOfRange)
    /// if either index is not a row of the matrix.
    pub fn swap_rows(&mut self, i: usize, k: usize) -> Result<()> {
        check_index(i, self.num_rows())?;
        check_index(k, self.num_rows())?;
        self.rows.swap(i, k);
        Ok(())
    }

    /// Replaces a row. The caller guarantees `row` is in range and the
    /// length matches.
    pub(crate) fn set_row(&mut self, row: usize, values: Vector<T>) {
        debug_assert_eq!(values.len(), self.num_cols());
        self.rows[row] = values;
    }

    /// Borrows `target` mutably and `source` immutably. Rows must differ.
    fn row_pair_mut(&mut self, target: usize, source: usize) -> (&mut Vector<T>, &Vector<T>) {
        assert_ne!(target, source, "row operation needs two distinct rows");
        if target < source {
            let (lo, hi) = self.rows.split_at_mut(source);
            (&mut lo[target], &hi[0])
        } else {
            let (lo, hi) = self.rows.split_at_mut(target);
            (&mut hi[0], &lo[source])
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Creates a matrix of integer-valued scalars.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`](crate::LinalgError::InvalidDimension)
    /// if the rows do not all have the same length.
    pub fn from_int_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        Self::from_rows(rows.iter().map(|r| Vector::from_ints(r.as_ref())).collect())
    }

    /// Creates a matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            rows: vec![Vector::zeros(num_cols); num_rows],
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self {
            rows: (0..n)
                .map(|i| {
                    (0..n)
                        .map(|j| if i == j { T::one() } else { T::zero() })
                        .collect()
                })
                .collect(),
        }
    }

    /// Returns a column as a vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`](crate::LinalgError::IndexOutOfRange)
    /// if `col >= num_cols()`.
    pub fn col(&self, col: usize) -> Result<Vector<T>> {
        check_index(col, self.num_cols())?;
        Ok(self.rows.iter().map(|row| row[col].clone()).collect())
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            rows: (0..self.num_cols())
                .map(|j| self.rows.iter().map(|row| row[j].clone()).collect())
                .collect(),
        }
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// `B` is transposed once so every entry is a row-by-row dot product.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidDimension`](crate::LinalgError::InvalidDimension)
    /// if `self.num_cols() != other.num_rows()`.
    pub fn mat_mul(&self, other: &Self) -> Result<Self> {
        check_dimension(self.num_cols(), other.num_rows())?;

        let columns = other.transpose();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                columns
                    .rows
                    .iter()
                    .map(|col| row.dot(col))
                    .collect::<Result<Vector<T>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }

    /// Column index of the first non-zero entry of `row`.
    ///
    /// Returns `None` for a zero row or an out-of-range index.
    #[must_use]
    pub fn leading_column(&self, row: usize) -> Option<usize> {
        self.rows.get(row).and_then(Vector::leading_index)
    }

    /// Checks row-echelon form.
    ///
    /// Leading columns strictly increase down the matrix and zero rows only
    /// appear below every non-zero row.
    #[must_use]
    pub fn is_row_echelon(&self) -> bool {
        let mut previous: Option<usize> = None;
        let mut seen_zero_row = false;

        for row in &self.rows {
            match row.leading_index() {
                None => seen_zero_row = true,
                Some(_) if seen_zero_row => return false,
                Some(col) => {
                    if previous.is_some_and(|p| col <= p) {
                        return false;
                    }
                    previous = Some(col);
                }
            }
        }

        true
    }

    /// Checks reduced row-echelon form.
    ///
    /// In addition to row-echelon form, every pivot is one and is the only
    /// non-zero entry of its column.
    #[must_use]
    pub fn is_reduced_row_echelon(&self) -> bool {
        if !self.is_row_echelon() {
            return false;
        }

        self.rows.iter().enumerate().all(|(i, row)| {
            row.leading_index().map_or(true, |col| {
                row[col].is_one()
                    && self
                        .rows
                        .iter()
                        .enumerate()
                        .all(|(k, other)| k == i || other[col].is_zero())
            })
        })
    }

    /// Row operation: `row[target] -= factor * row[source]`.
    pub(crate) fn sub_scaled_row(&mut self, target: usize, source: usize, factor: &T) {
        let (target_row, source_row) = self.row_pair_mut(target, source);
        target_row.sub_scaled_assign(source_row, factor);
    }

    /// Row operation: `row[target] *= factor`.
    pub(crate) fn scale_row(&mut self, row: usize, factor: &T) {
        self.rows[row].scale_assign(factor);
    }

    /// Forward elimination to row-echelon form with the default pivot
    /// strategy. The matrix itself is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates scalar arithmetic failures.
    pub fn gauss_reduction(&self) -> Result<Self> {
        elimination::gauss_reduction(self)
    }

    /// Forward elimination with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Propagates scalar arithmetic failures.
    pub fn gauss_reduction_with(&self, config: &EliminationConfig) -> Result<Self> {
        elimination::gauss_reduction_with(self, config)
    }
}

impl<T: Field> Matrix<T> {
    /// Reduced row-echelon form via Gauss-Jordan elimination.
    ///
    /// # Errors
    ///
    /// Propagates scalar arithmetic failures.
    pub fn gauss_jordan(&self) -> Result<Self> {
        elimination::gauss_jordan(self)
    }

    /// Gauss-Jordan elimination with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Propagates scalar arithmetic failures.
    pub fn gauss_jordan_with(&self, config: &EliminationConfig) -> Result<Self> {
        elimination::gauss_jordan_with(self, config)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "{row}")?;
        }
        write!(f, "]")
    }
}
