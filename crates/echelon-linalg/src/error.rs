//! Errors raised by vector and matrix operations.

use echelon_integers::ArithmeticError;
use thiserror::Error;

/// Failure of a vector, matrix or elimination operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operands have incompatible lengths or shapes.
    #[error("invalid dimension: expected {expected}, found {found}")]
    InvalidDimension {
        /// The length or size required by the operation.
        expected: usize,
        /// The length or size actually supplied.
        found: usize,
    },
    /// An element or row index lies outside the valid range.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The exclusive upper bound.
        len: usize,
    },
    /// A scalar operation failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// Result type for linear algebra operations.
pub type Result<T> = std::result::Result<T, LinalgError>;

pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(LinalgError::IndexOutOfRange { index, len })
    }
}

pub(crate) fn check_dimension(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(LinalgError::InvalidDimension { expected, found })
    }
}
