//! Engine configuration

use crate::core::format::{parse_entry, DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS};
use crate::core::history::Tape;
use crate::core::{CalcError, CalcResult, ResultValidator};
use serde::{Deserialize, Serialize};

/// Display text shown after an evaluation failure
pub const DEFAULT_ERROR_TEXT: &str = "Error";

/// Configuration for a [`crate::engine::CalculatorEngine`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Significant digits used when formatting numbers
    pub significant_digits: usize,
    /// Sentinel display text after an evaluation failure
    pub error_text: String,
    /// Maximum number of evaluations kept on the tape
    pub tape_capacity: usize,
    /// Largest accepted result magnitude
    pub max_magnitude: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            error_text: DEFAULT_ERROR_TEXT.to_string(),
            tape_capacity: Tape::DEFAULT_MAX_ENTRIES,
            max_magnitude: ResultValidator::DEFAULT_MAX_MAGNITUDE,
        }
    }
}

impl EngineConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set significant digits
    #[must_use]
    pub const fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Set the error sentinel text
    #[must_use]
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Set tape capacity
    #[must_use]
    pub const fn with_tape_capacity(mut self, capacity: usize) -> Self {
        self.tape_capacity = capacity;
        self
    }

    /// Set maximum result magnitude
    #[must_use]
    pub const fn with_max_magnitude(mut self, max_magnitude: f64) -> Self {
        self.max_magnitude = max_magnitude;
        self
    }

    /// Checks that every setting is in range
    pub fn validate(&self) -> CalcResult<()> {
        if !(1..=MAX_SIGNIFICANT_DIGITS).contains(&self.significant_digits) {
            return Err(CalcError::InvalidConfig(format!(
                "significant_digits must be between 1 and {MAX_SIGNIFICANT_DIGITS}, got {}",
                self.significant_digits
            )));
        }
        if self.tape_capacity == 0 {
            return Err(CalcError::InvalidConfig(
                "tape_capacity must be at least 1".to_string(),
            ));
        }
        if self.max_magnitude.is_nan() || self.max_magnitude <= 0.0 {
            return Err(CalcError::InvalidConfig(format!(
                "max_magnitude must be positive, got {}",
                self.max_magnitude
            )));
        }
        if self.error_text.is_empty() {
            return Err(CalcError::InvalidConfig(
                "error_text must not be empty".to_string(),
            ));
        }
        // A numeric sentinel would be indistinguishable from a result
        if parse_entry(&self.error_text).is_some() {
            return Err(CalcError::InvalidConfig(format!(
                "error_text must not look like a number, got {:?}",
                self.error_text
            )));
        }
        Ok(())
    }

    /// Builds the result validator for this configuration
    #[must_use]
    pub const fn validator(&self) -> ResultValidator {
        ResultValidator::with_max_magnitude(self.max_magnitude)
    }
}
