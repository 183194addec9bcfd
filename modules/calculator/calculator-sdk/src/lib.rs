//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator:
//! - API trait (`CalculatorClientV1`)
//! - Error type (`CalculatorError`)
//! - Binary operation selector (`BinaryOp`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{BinaryOp, CalculatorClientV1};
//!
//! let client: Arc<dyn CalculatorClientV1> = /* obtained from the calculator crate */;
//! let sum = client.add(1.0, 2.0);
//! let quotient = client.apply(BinaryOp::Divide, 8.0, 2.0)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{
    BinaryOp, CalculatorClientV1, CalculatorError, DIVIDE_BY_ZERO_MESSAGE,
    NEGATIVE_SQUARE_ROOT_MESSAGE,
};
