//! Domain layer for calculator module
//!
//! Contains business logic for arithmetic operations.

pub mod local_client;
pub mod service;

pub use local_client::LocalCalculatorClient;
pub use service::Service;
