//! Error types for money construction and arithmetic.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money constructors and operations.
///
/// Operand type mismatches (adding a float, comparing against a float) are
/// compile errors, not variants here: the trait impls that would accept them
/// simply do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// A constructor or parser was handed a value it cannot turn into a
    /// whole number of minor units.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A scalar operand was outside an operation's accepted range, such as
    /// a NaN multiplication factor.
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    /// A divisor was zero, whether a plain number or a zero money value.
    #[error("Division by zero")]
    DivisionByZero,

    /// The result does not fit in the signed 64-bit minor-unit range.
    #[error("Amount overflow")]
    Overflow,
}
