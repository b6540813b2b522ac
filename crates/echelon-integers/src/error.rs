//! Errors raised by scalar arithmetic.

use thiserror::Error;

/// Failure of an exact integer or rational operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// A zero denominator was supplied, or a value was divided by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Bezout coefficients were requested for a zero operand.
    #[error("bezout coefficients are undefined for a zero operand ({x}, {y})")]
    ZeroOperand {
        /// First operand.
        x: i64,
        /// Second operand.
        y: i64,
    },
    /// Bezout coefficients were requested for a pair sharing a factor.
    #[error("{x} and {y} are not coprime (gcd {gcd})")]
    NotCoprime {
        /// First operand.
        x: i64,
        /// Second operand.
        y: i64,
        /// Their greatest common divisor.
        gcd: i64,
    },
}
