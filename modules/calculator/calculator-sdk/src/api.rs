//! Calculator API trait and types
//!
//! Contract trait and types for the calculator.

use std::fmt;

/// Message carried by the error returned when dividing by zero.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Cannot divide by zero.";

/// Message carried by the error returned for the square root of a negative number.
pub const NEGATIVE_SQUARE_ROOT_MESSAGE: &str = "Cannot calculate square root of a negative number.";

/// Calculator API trait
///
/// Stateless arithmetic over `f64`. Only `divide` and `square_root` can
/// reject their input; every other operation follows IEEE-754 rules and
/// never fails.
pub trait CalculatorClientV1: Send + Sync {
    /// Add two numbers and return the sum.
    fn add(&self, a: f64, b: f64) -> f64;

    /// Subtract `b` from `a`.
    fn subtract(&self, a: f64, b: f64) -> f64;

    /// Multiply two numbers and return the product.
    fn multiply(&self, a: f64, b: f64) -> f64;

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// Returns `CalculatorError::InvalidArgument` when `b` is zero.
    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Raise `base` to `exponent`.
    fn power(&self, base: f64, exponent: f64) -> f64;

    /// Non-negative square root of `num`.
    ///
    /// # Errors
    /// Returns `CalculatorError::InvalidArgument` when `num` is negative.
    fn square_root(&self, num: f64) -> Result<f64, CalculatorError>;

    /// Apply a binary operation to `a` and `b`.
    ///
    /// # Errors
    /// Returns `CalculatorError::InvalidArgument` for `BinaryOp::Divide` with a zero divisor.
    fn apply(&self, op: BinaryOp, a: f64, b: f64) -> Result<f64, CalculatorError> {
        match op {
            BinaryOp::Add => Ok(self.add(a, b)),
            BinaryOp::Subtract => Ok(self.subtract(a, b)),
            BinaryOp::Multiply => Ok(self.multiply(a, b)),
            BinaryOp::Divide => self.divide(a, b),
            BinaryOp::Power => Ok(self.power(a, b)),
        }
    }
}

/// Binary operations exposed by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Infix symbol used when rendering `a <symbol> b`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// An argument lies outside the operation's valid domain.
    #[error("{message}")]
    InvalidArgument { message: &'static str },
}

impl CalculatorError {
    #[must_use]
    pub const fn divide_by_zero() -> Self {
        Self::InvalidArgument {
            message: DIVIDE_BY_ZERO_MESSAGE,
        }
    }

    #[must_use]
    pub const fn negative_square_root() -> Self {
        Self::InvalidArgument {
            message: NEGATIVE_SQUARE_ROOT_MESSAGE,
        }
    }

    /// Human-readable message carried by the error.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidArgument { message } => *message,
        }
    }
}
