//! Forward reduction and back substitution over exact scalars.
//!
//! Both entry points copy the input and work on the copy, so the caller's
//! matrix is never modified, even when an operation fails part way.
//!
//! # Algorithm
//!
//! Forward reduction walks the columns left to right, keeping a separate
//! pivot-row cursor. For each column it looks for a unit entry first. When
//! none exists it either combines two coprime integer entries with Bezout
//! coefficients into a unit ([`PivotStrategy::Bezout`]) or runs a Euclidean
//! reduction between the pivot row and every row below it
//! ([`PivotStrategy::Subtractive`]). Over the rationals each Euclidean step
//! is an exact division, so one subtraction clears an entry; over the
//! integers the truncated quotient shrinks it until it vanishes.
//!
//! Back substitution scales each pivot to one and clears the entries above
//! it, from the last row upwards.

use log::{debug, trace};

use echelon_integers::{find_scalars, gcd};

use crate::error::Result;
use crate::matrix::Matrix;
use crate::scalar::{Field, Scalar};

/// How to obtain a pivot when a column has no unit entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PivotStrategy {
    /// Euclidean reduction between pairs of rows.
    #[default]
    Subtractive,
    /// Combine two rows with coprime integer entries into a unit pivot,
    /// falling back to [`PivotStrategy::Subtractive`] when no such pair exists.
    ///
    /// The replaced row is scaled by a Bezout coefficient, which need not be
    /// a unit. Over `i64` the echelon form can therefore differ from the
    /// subtractive one by row multiples; over a field both reach the same
    /// reduced form.
    Bezout,
}

/// Configuration for Gaussian elimination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EliminationConfig {
    /// Pivot selection when no unit entry is available.
    pub pivot_strategy: PivotStrategy,
}

impl EliminationConfig {
    /// Returns the configuration with a different pivot strategy.
    #[must_use]
    pub fn with_pivot_strategy(mut self, pivot_strategy: PivotStrategy) -> Self {
        self.pivot_strategy = pivot_strategy;
        self
    }
}

/// Reduces a matrix to row-echelon form with the default configuration.
///
/// # Errors
///
/// Propagates scalar arithmetic failures.
pub fn gauss_reduction<T: Scalar>(matrix: &Matrix<T>) -> Result<Matrix<T>> {
    gauss_reduction_with(matrix, &EliminationConfig::default())
}

/// Reduces a matrix to row-echelon form.
///
/// Singular and rank-deficient inputs are not errors: columns without a
/// pivot are skipped and dependent rows end up as zero rows at the bottom.
///
/// # Errors
///
/// Propagates scalar arithmetic failures.
pub fn gauss_reduction_with<T: Scalar>(
    matrix: &Matrix<T>,
    config: &EliminationConfig,
) -> Result<Matrix<T>> {
    let mut m = matrix.clone();
    let (num_rows, num_cols) = m.dims();
    debug!(
        "forward reduction of {num_rows}x{num_cols} matrix ({:?} pivots)",
        config.pivot_strategy
    );

    let mut pivot_row = 0;
    for col in 0..num_cols {
        if pivot_row >= num_rows {
            break;
        }

        if !place_pivot(&mut m, pivot_row, col, config)? {
            trace!("column {col} has no pivot");
            continue;
        }

        eliminate_below(&mut m, pivot_row, col)?;
        pivot_row += 1;
    }

    debug!("forward reduction placed {pivot_row} pivots");
    Ok(m)
}

/// Reduces a matrix to reduced row-echelon form with the default
/// configuration.
///
/// # Errors
///
/// Propagates scalar arithmetic failures.
pub fn gauss_jordan<T: Field>(matrix: &Matrix<T>) -> Result<Matrix<T>> {
    gauss_jordan_with(matrix, &EliminationConfig::default())
}

/// Reduces a matrix to reduced row-echelon form.
///
/// # Errors
///
/// Propagates scalar arithmetic failures.
pub fn gauss_jordan_with<T: Field>(
    matrix: &Matrix<T>,
    config: &EliminationConfig,
) -> Result<Matrix<T>> {
    let mut m = gauss_reduction_with(matrix, config)?;

    for row in (0..m.num_rows()).rev() {
        let Some(col) = m.leading_column(row) else {
            continue;
        };

        let pivot = m[(row, col)].clone();
        if !pivot.is_one() {
            let inv = pivot.inverse()?;
            m.scale_row(row, &inv);
        }

        // Clear the pivot column above
        for above in 0..row {
            if m[(above, col)].is_zero() {
                continue;
            }
            let factor = m[(above, col)].clone();
            m.sub_scaled_row(above, row, &factor);
        }
    }

    Ok(m)
}

/// Moves a non-zero entry of `col` into `pivot_row`.
///
/// Returns false if the column is zero from `pivot_row` down.
fn place_pivot<T: Scalar>(
    m: &mut Matrix<T>,
    pivot_row: usize,
    col: usize,
    config: &EliminationConfig,
) -> Result<bool> {
    if let Some(row) = (pivot_row..m.num_rows()).find(|&r| m[(r, col)].is_unit()) {
        trace!("unit pivot at ({row}, {col})");
        m.swap_rows(pivot_row, row)?;
        return Ok(true);
    }

    if config.pivot_strategy == PivotStrategy::Bezout && bezout_pivot(m, pivot_row, col)? {
        return Ok(true);
    }

    subtractive_pivot(m, pivot_row, col)?;
    Ok(!m[(pivot_row, col)].is_zero())
}

/// Builds a unit pivot from two rows whose entries in `col` are coprime
/// integers.
fn bezout_pivot<T: Scalar>(m: &mut Matrix<T>, pivot_row: usize, col: usize) -> Result<bool> {
    let num_rows = m.num_rows();

    for i in pivot_row..num_rows {
        let Some(x) = m[(i, col)].to_integer().filter(|&x| x != 0) else {
            continue;
        };

        for k in i + 1..num_rows {
            let Some(y) = m[(k, col)].to_integer().filter(|&y| y != 0) else {
                continue;
            };
            if gcd(x, y) != 1 {
                continue;
            }

            let bz = find_scalars(x, y)?;
            let a = T::from(bz.a);
            let b = T::from(bz.b);

            // The replaced row keeps a non-zero coefficient, so the row
            // space is unchanged over a field.
            let (target, combined) = if bz.flipped {
                (k, m.row(k)?.scale(&b).minus(&m.row(i)?.scale(&a))?)
            } else {
                (i, m.row(i)?.scale(&a).minus(&m.row(k)?.scale(&b))?)
            };
            trace!(
                "bezout pivot from rows {i} and {k} at column {col}: a={}, b={}",
                bz.a,
                bz.b
            );

            m.set_row(target, combined.iter().map(T::reduced).collect());
            m.swap_rows(pivot_row, target)?;
            return Ok(true);
        }
    }

    Ok(false)
}

/// Euclidean reduction of every row below `pivot_row` against it.
///
/// Afterwards `col` is zero in every row below `pivot_row`, and the pivot
/// entry is non-zero unless the whole column was.
fn subtractive_pivot<T: Scalar>(m: &mut Matrix<T>, pivot_row: usize, col: usize) -> Result<()> {
    for row in pivot_row + 1..m.num_rows() {
        if m[(row, col)].is_zero() {
            continue;
        }
        if m[(pivot_row, col)].is_zero() {
            m.swap_rows(pivot_row, row)?;
            continue;
        }

        loop {
            let x = m[(pivot_row, col)].clone();
            let y = m[(row, col)].clone();
            if x.is_zero() || y.is_zero() {
                break;
            }

            if x.abs_ge(&y) {
                let q = x.quotient(&y)?;
                m.sub_scaled_row(pivot_row, row, &q);
            } else {
                let q = y.quotient(&x)?;
                m.sub_scaled_row(row, pivot_row, &q);
            }
        }

        if m[(pivot_row, col)].is_zero() {
            trace!("survivor of column {col} is row {row}, swapping into {pivot_row}");
            m.swap_rows(pivot_row, row)?;
        }
    }

    Ok(())
}

/// Clears `col` below the pivot.
fn eliminate_below<T: Scalar>(m: &mut Matrix<T>, pivot_row: usize, col: usize) -> Result<()> {
    let pivot = m[(pivot_row, col)].clone();

    for row in pivot_row + 1..m.num_rows() {
        if m[(row, col)].is_zero() {
            continue;
        }
        let factor = m[(row, col)].quotient(&pivot)?;
        m.sub_scaled_row(row, pivot_row, &factor);
    }

    Ok(())
}
