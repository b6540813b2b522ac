//! # Echelon
//!
//! Exact row reduction of linear systems over the rationals.
//!
//! Echelon reduces matrices to row-echelon and reduced row-echelon form
//! without any floating-point rounding. Entries are exact fractions of
//! machine integers; pivots are chosen to avoid fractions where possible.
//!
//! ## Features
//!
//! - **Exact Scalars**: `Rational` with a positive-denominator invariant
//! - **Integer Utilities**: set gcd, extended Euclid, Bezout coefficients
//! - **Containers**: bounds-checked `Vector` and `Matrix`
//! - **Elimination**: `gauss_reduction` and `gauss_jordan`, copy-on-entry
//!
//! ## Quick Start
//!
//! ```rust
//! use echelon::prelude::*;
//!
//! let m: Matrix<Rational> = Matrix::from_int_rows(&[[2, 3, 1], [5, 4, 2], [4, 2, 7]])?;
//! let rref = m.gauss_jordan()?;
//! assert_eq!(rref, Matrix::identity(3));
//! assert_eq!(rref.to_string(), "[[1,0,0]\n [0,1,0]\n [0,0,1]]");
//! # Ok::<(), echelon::linalg::LinalgError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use echelon_integers as integers;
pub use echelon_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use echelon_integers::{ArithmeticError, Rational};
    pub use echelon_linalg::{
        gauss_jordan, gauss_reduction, EliminationConfig, Field, LinalgError, Matrix,
        PivotStrategy, Scalar, Vector,
    };
}
