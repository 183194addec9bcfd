//! Local `CalculatorClientV1` implementation
//!
//! Exposes the domain [`Service`] through the SDK contract so consumers can
//! hold an `Arc<dyn CalculatorClientV1>` without depending on the domain type.

use std::sync::Arc;

use calculator_sdk::{CalculatorClientV1, CalculatorError};

use super::service::Service;

/// In-process client that delegates every call to the domain service.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCalculatorClient {
    service: Service,
}

impl LocalCalculatorClient {
    #[must_use]
    pub const fn new(service: Service) -> Self {
        Self { service }
    }

    /// Build a shareable client handle backed by a fresh service.
    #[must_use]
    pub fn shared() -> Arc<dyn CalculatorClientV1> {
        Arc::new(Self::new(Service::new()))
    }
}

impl CalculatorClientV1 for LocalCalculatorClient {
    fn add(&self, a: f64, b: f64) -> f64 {
        self.service.add(a, b)
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        self.service.subtract(a, b)
    }

    fn multiply(&self, a: f64, b: f64) -> f64 {
        self.service.multiply(a, b)
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.service.divide(a, b)
    }

    fn power(&self, base: f64, exponent: f64) -> f64 {
        self.service.power(base, exponent)
    }

    fn square_root(&self, num: f64) -> Result<f64, CalculatorError> {
        self.service.square_root(num)
    }
}
