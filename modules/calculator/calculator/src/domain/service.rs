//! Domain service for calculator
//!
//! Contains the core business logic for arithmetic operations.

use calculator_sdk::CalculatorError;
use tracing::{debug, warn};

/// Domain service that performs arithmetic operations.
///
/// This is a stateless service: every call is independent and results
/// follow IEEE-754 semantics. Only `divide` and `square_root` reject
/// their input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Add two numbers and return the sum.
    #[must_use]
    pub fn add(self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    /// Subtract `b` from `a`.
    #[must_use]
    pub fn subtract(self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    /// Multiply two numbers and return the product.
    #[must_use]
    pub fn multiply(self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// A NaN divisor is not equal to zero and yields NaN.
    ///
    /// # Errors
    /// Returns `CalculatorError::InvalidArgument` when `b == 0` (either sign).
    pub fn divide(self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        debug!(a, b, "performing division");
        if b == 0.0 {
            warn!(a, "rejected division by zero");
            return Err(CalculatorError::divide_by_zero());
        }
        Ok(a / b)
    }

    /// Raise `base` to `exponent`.
    #[must_use]
    pub fn power(self, base: f64, exponent: f64) -> f64 {
        debug!(base, exponent, "performing exponentiation");
        base.powf(exponent)
    }

    /// Square root of `num`.
    ///
    /// # Errors
    /// Returns `CalculatorError::InvalidArgument` when `num < 0`.
    pub fn square_root(self, num: f64) -> Result<f64, CalculatorError> {
        debug!(num, "performing square root");
        if num < 0.0 {
            warn!(num, "rejected square root of a negative number");
            return Err(CalculatorError::negative_square_root());
        }
        Ok(num.sqrt())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use calculator_sdk::{DIVIDE_BY_ZERO_MESSAGE, NEGATIVE_SQUARE_ROOT_MESSAGE};
    use tracing_test::traced_test;

    const SAMPLES: [f64; 9] = [0.0, 1.0, -1.0, 2.5, -3.75, 1e-9, 1e9, 123.456, -0.5];

    #[test]
    fn test_add() {
        let service = Service::new();
        assert_eq!(service.add(2.0, 3.0), 5.0);
    }

    #[test]
    fn test_subtract() {
        let service = Service::new();
        assert_eq!(service.subtract(5.0, 2.0), 3.0);
    }

    #[test]
    fn test_multiply() {
        let service = Service::new();
        assert_eq!(service.multiply(4.0, 3.0), 12.0);
    }

    #[test]
    fn test_divide() {
        let service = Service::new();
        assert_eq!(service.divide(8.0, 2.0), Ok(4.0));
    }

    #[test]
    fn test_power() {
        let service = Service::new();
        assert_eq!(service.power(2.0, 3.0), 8.0);
        assert_eq!(service.power(4.0, 0.5), 2.0);
        assert_eq!(service.power(2.0, -1.0), 0.5);
    }

    #[test]
    fn test_power_negative_base_fractional_exponent_is_nan() {
        let service = Service::new();
        assert!(service.power(-8.0, 0.5).is_nan());
    }

    #[test]
    fn test_square_root() {
        let service = Service::new();
        assert_eq!(service.square_root(16.0), Ok(4.0));
        assert_eq!(service.square_root(0.0), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero_fails() {
        let service = Service::new();
        for a in SAMPLES {
            let err = service.divide(a, 0.0).unwrap_err();
            assert!(matches!(err, CalculatorError::InvalidArgument { .. }));
            assert_eq!(err.to_string(), DIVIDE_BY_ZERO_MESSAGE);
        }
        assert_eq!(
            service.divide(5.0, -0.0),
            Err(CalculatorError::divide_by_zero())
        );
    }

    #[test]
    fn test_square_root_of_negative_fails() {
        let service = Service::new();
        for n in [-1.0, -0.25, -16.0, -1e-300, f64::NEG_INFINITY] {
            let err = service.square_root(n).unwrap_err();
            assert!(matches!(err, CalculatorError::InvalidArgument { .. }));
            assert_eq!(err.to_string(), NEGATIVE_SQUARE_ROOT_MESSAGE);
        }
    }

    #[test]
    fn test_add_and_multiply_commute() {
        let service = Service::new();
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(service.add(a, b), service.add(b, a), "add({a}, {b})");
                assert_eq!(
                    service.multiply(a, b),
                    service.multiply(b, a),
                    "multiply({a}, {b})"
                );
            }
        }
    }

    #[test]
    fn test_divide_inverts_multiply() {
        let service = Service::new();
        for a in SAMPLES {
            for b in SAMPLES.into_iter().filter(|b| *b != 0.0) {
                let roundtrip = service.divide(service.multiply(a, b), b).unwrap();
                let tolerance = 1e-12 * a.abs().max(1.0);
                assert!(
                    (roundtrip - a).abs() <= tolerance,
                    "divide(multiply({a}, {b}), {b}) = {roundtrip}"
                );
            }
        }
    }

    #[test]
    fn test_special_values_propagate() {
        let service = Service::new();
        assert!(service.add(f64::NAN, 1.0).is_nan());
        assert_eq!(service.add(f64::INFINITY, 1.0), f64::INFINITY);
        assert!(service.subtract(f64::INFINITY, f64::INFINITY).is_nan());
        assert!(service.multiply(f64::INFINITY, 0.0).is_nan());
        assert!(service.divide(1.0, f64::NAN).unwrap().is_nan());
        assert_eq!(service.divide(1.0, f64::INFINITY), Ok(0.0));
        assert!(service.square_root(f64::NAN).unwrap().is_nan());
        assert_eq!(service.square_root(f64::INFINITY), Ok(f64::INFINITY));
    }

    #[test]
    fn test_square_root_of_negative_zero() {
        let service = Service::new();
        let root = service.square_root(-0.0).unwrap();
        assert_eq!(root, 0.0);
        assert!(root.is_sign_negative());
    }

    #[test]
    #[traced_test]
    fn test_rejections_are_logged() {
        let service = Service::new();
        let _ = service.divide(1.0, 0.0);
        let _ = service.square_root(-4.0);
        assert!(logs_contain("rejected division by zero"));
        assert!(logs_contain("rejected square root of a negative number"));
    }

    #[test]
    #[traced_test]
    fn test_operations_emit_debug_events() {
        let service = Service::new();
        let _ = service.power(2.0, 10.0);
        assert!(logs_contain("performing exponentiation"));
    }
}
