//! Calculator Module
//!
//! Stateless arithmetic over `f64`: add, subtract, multiply, divide, power
//! and square root.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core business logic
//! - `domain/local_client.rs` - `CalculatorClientV1` implementation backed by the service
//!
//! External consumers should depend on `calculator-sdk` for the API trait
//! and obtain a client through [`LocalCalculatorClient`].

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[doc(hidden)]
pub mod domain;

pub use domain::{LocalCalculatorClient, Service};
