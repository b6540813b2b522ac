//! # echelon-integers
//!
//! Machine-integer utilities and exact rational arithmetic for Echelon.
//!
//! This crate provides:
//! - Integer helpers (`gcd`, `bcd`, `min_abs`, extended Euclid)
//! - Bezout coefficient search for unit-pivot construction (`find_scalars`)
//! - Exact rationals over `i64` (`Rational`)
//!
//! ## Performance Notes
//!
//! - Values are plain `i64` pairs; there is no heap allocation
//! - Arithmetic only collapses exact divisibility; full reduction to lowest
//!   terms is requested explicitly with [`Rational::simplify`]
//! - Overflow of the native integers is not guarded

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use integer::{bcd, extended_gcd, find_scalars, gcd, min_abs, Bezout};
pub use rational::Rational;
