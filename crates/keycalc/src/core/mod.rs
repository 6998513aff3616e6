//! Arithmetic core: operators, number formatting, result validation and the
//! evaluation tape.
//!
//! Everything in here is pure. The key-driven state machine that strings
//! these pieces together lives in [`crate::engine`].

pub mod format;
pub mod history;
mod operations;

pub use operations::Operator;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// The engine never hands these to its caller while processing keys: every
/// evaluation failure is turned into the error display plus a full reset.
/// They surface only through the lower-level APIs (`Operator::apply`,
/// `KeyEvent::from_label`, `EngineConfig::validate`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division with a zero right operand
    #[error("Division by zero")]
    DivisionByZero,
    /// Arithmetic produced NaN or infinity
    #[error("Non-finite result: {0}")]
    NonFinite(f64),
    /// Result rejected by the [`ResultValidator`]
    #[error("Anomaly violation: {0}")]
    Anomaly(AnomalyViolation),
    /// Key label outside the recognized alphabet
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
    /// Engine configuration is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CalcError {
    /// Returns true if this error is an evaluation failure (as opposed to a
    /// rejected key or configuration)
    #[must_use]
    pub const fn is_evaluation_failure(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero | Self::NonFinite(_) | Self::Anomaly(_)
        )
    }
}

/// Anomalies detected in a computed value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnomalyViolation {
    /// NaN detected in result
    #[error("NaN detected")]
    NaN,
    /// Infinity detected in result
    #[error("Infinite value detected")]
    Infinite,
    /// Result exceeds maximum magnitude
    #[error("Overflow: {0} exceeds maximum magnitude")]
    Overflow(f64),
}

/// Guard applied to every value the engine computes.
///
/// A rejected value counts as an evaluation failure and resets the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultValidator {
    /// Maximum allowed result magnitude
    pub max_magnitude: f64,
    /// Reject NaN/Infinity
    pub check_special_values: bool,
}

impl Default for ResultValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultValidator {
    /// Default maximum magnitude: anything finite is accepted
    pub const DEFAULT_MAX_MAGNITUDE: f64 = f64::MAX;

    /// Creates a validator that only rejects non-finite values
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_magnitude: Self::DEFAULT_MAX_MAGNITUDE,
            check_special_values: true,
        }
    }

    /// Creates a validator with a custom maximum magnitude
    #[must_use]
    pub const fn with_max_magnitude(max_magnitude: f64) -> Self {
        Self {
            max_magnitude,
            check_special_values: true,
        }
    }

    /// Validates a computed value
    pub fn validate(&self, value: f64) -> Result<f64, AnomalyViolation> {
        if self.check_special_values && value.is_nan() {
            return Err(AnomalyViolation::NaN);
        }
        if self.check_special_values && value.is_infinite() {
            return Err(AnomalyViolation::Infinite);
        }
        if value.abs() > self.max_magnitude {
            return Err(AnomalyViolation::Overflow(value));
        }
        Ok(value)
    }
}

impl From<AnomalyViolation> for CalcError {
    fn from(v: AnomalyViolation) -> Self {
        Self::Anomaly(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_unknown_key() {
        let err = CalcError::UnknownKey("sqrt".into());
        assert_eq!(err.to_string(), "Unknown key: \"sqrt\"");
    }

    #[test]
    fn test_calc_error_display_anomaly() {
        let err = CalcError::Anomaly(AnomalyViolation::NaN);
        assert_eq!(err.to_string(), "Anomaly violation: NaN detected");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }

    #[test]
    fn test_evaluation_failure_classification() {
        assert!(CalcError::DivisionByZero.is_evaluation_failure());
        assert!(CalcError::NonFinite(f64::INFINITY).is_evaluation_failure());
        assert!(CalcError::Anomaly(AnomalyViolation::Infinite).is_evaluation_failure());
        assert!(!CalcError::UnknownKey("x".into()).is_evaluation_failure());
        assert!(!CalcError::InvalidConfig("x".into()).is_evaluation_failure());
    }

    // ===== ResultValidator tests =====

    #[test]
    fn test_validator_default_accepts_finite() {
        let v = ResultValidator::default();
        assert_eq!(v.validate(42.0), Ok(42.0));
        assert_eq!(v.validate(f64::MAX), Ok(f64::MAX));
        assert_eq!(v.validate(-f64::MAX), Ok(-f64::MAX));
    }

    #[test]
    fn test_validator_rejects_nan() {
        let v = ResultValidator::new();
        assert_eq!(v.validate(f64::NAN), Err(AnomalyViolation::NaN));
    }

    #[test]
    fn test_validator_rejects_infinity() {
        let v = ResultValidator::new();
        assert_eq!(v.validate(f64::INFINITY), Err(AnomalyViolation::Infinite));
        assert_eq!(
            v.validate(f64::NEG_INFINITY),
            Err(AnomalyViolation::Infinite)
        );
    }

    #[test]
    fn test_validator_max_magnitude() {
        let v = ResultValidator::with_max_magnitude(100.0);
        assert_eq!(v.validate(100.0), Ok(100.0));
        assert_eq!(v.validate(-100.0), Ok(-100.0));
        assert!(matches!(
            v.validate(150.0),
            Err(AnomalyViolation::Overflow(_))
        ));
        assert!(matches!(
            v.validate(-150.0),
            Err(AnomalyViolation::Overflow(_))
        ));
    }

    #[test]
    fn test_validator_special_values_disabled() {
        let mut v = ResultValidator::new();
        v.check_special_values = false;
        assert!(v.validate(f64::NAN).is_ok());
    }

    #[test]
    fn test_anomaly_converts_into_calc_error() {
        let err: CalcError = AnomalyViolation::Overflow(1e10).into();
        assert!(matches!(err, CalcError::Anomaly(AnomalyViolation::Overflow(_))));
    }
}
