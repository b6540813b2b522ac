//! # echelon-linalg
//!
//! Exact linear algebra over rationals and machine integers.
//!
//! This crate provides:
//! - Fixed-length vectors with dot products, scaling and subtraction
//! - Row-owning matrices with transpose, multiplication and row swaps
//! - Forward reduction to row-echelon form (`gauss_reduction`)
//! - Back substitution to reduced row-echelon form (`gauss_jordan`)
//!
//! ## Pivot Selection
//!
//! Unit entries are always preferred. Otherwise:
//! - Subtractive (default): Euclidean reduction between pairs of rows
//! - Bezout: combine two coprime integer entries into a unit

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod elimination;
pub mod error;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use elimination::{
    gauss_jordan, gauss_jordan_with, gauss_reduction, gauss_reduction_with, EliminationConfig,
    PivotStrategy,
};
pub use error::{LinalgError, Result};
pub use matrix::Matrix;
pub use scalar::{Field, Scalar};
pub use vector::Vector;

#[cfg(test)]
mod proptests;
