//! Key-driven calculator state machine
//!
//! [`CalculatorEngine`] owns the whole arithmetic state of one calculator
//! session. The presentation layer feeds it one key at a time through
//! [`CalculatorEngine::apply`] (or [`CalculatorEngine::press`] with a button
//! label) and renders the returned text verbatim.
//!
//! Evaluation is immediate and left to right: an operator key evaluates the
//! entry against the operator that was pending *before* it, so `2 + 3 * 4 =`
//! yields `20`. Equals keeps the pending operator so that a bare `=` replays
//! the last operator and operand (`5 + 3 =` shows `8`, a second `=` shows
//! `11`).
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! assert_eq!(engine.press_all(["5", "+", "3", "="]), "8");
//! assert_eq!(engine.apply(KeyEvent::Equals), "11");
//! ```

use crate::config::EngineConfig;
use crate::core::format::{format_number, parse_entry};
use crate::core::history::Tape;
use crate::core::{CalcError, CalcResult, Operator, ResultValidator};
use crate::key::KeyEvent;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Arithmetic state of a calculator session
///
/// `Default` is the construction state; AllClear and every evaluation
/// failure return the engine to it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineState {
    /// Left operand / running result
    pub accumulator: f64,
    /// Raw text of the operand being typed; empty means no active entry
    pub input: String,
    /// Operator awaiting a right operand
    pub pending: Option<Operator>,
    /// Right operand of the most recent equals, replayed by a bare `=`
    pub last_operand: Option<f64>,
    /// Set by equals until the next digit, dot or operator
    pub just_evaluated: bool,
}

impl EngineState {
    /// Returns true if the display is driven by the entry buffer
    #[must_use]
    pub fn has_entry(&self) -> bool {
        !self.input.is_empty()
    }
}

/// Serializable view of an engine: display, state and tape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Current display text
    pub display: String,
    /// Arithmetic state
    pub state: EngineState,
    /// Evaluation tape
    pub tape: Tape,
}

impl EngineSnapshot {
    /// Serializes the snapshot as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Whether a handled key changes what the display shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Render,
    Keep,
}

/// The calculator state machine
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    state: EngineState,
    display: String,
    tape: Tape,
    validator: ResultValidator,
    config: EngineConfig,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine with a custom configuration.
    ///
    /// The configuration is used as given; see [`Self::try_with_config`].
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let state = EngineState::default();
        let display = format_number(state.accumulator, config.significant_digits);
        Self {
            state,
            display,
            tape: Tape::with_capacity(config.tape_capacity),
            validator: config.validator(),
            config,
        }
    }

    /// Creates an engine after validating the configuration
    pub fn try_with_config(config: EngineConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Read-only view of the arithmetic state
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Evaluation tape
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns true while the error sentinel is displayed
    #[must_use]
    pub fn shows_error(&self) -> bool {
        self.display == self.config.error_text
    }

    /// Empties the evaluation tape
    pub fn clear_tape(&mut self) {
        self.tape.clear();
    }

    /// Captures display, state and tape
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            display: self.display.clone(),
            state: self.state.clone(),
            tape: self.tape.clone(),
        }
    }

    /// Applies a button label.
    ///
    /// Labels outside the key alphabet are ignored: nothing changes and
    /// `None` is returned.
    pub fn press(&mut self, label: &str) -> Option<&str> {
        match KeyEvent::from_label(label) {
            Ok(key) => Some(self.apply(key)),
            Err(err) => {
                trace!(%err, "ignoring key");
                None
            }
        }
    }

    /// Applies a sequence of labels and returns the final display
    pub fn press_all<I, S>(&mut self, labels: I) -> &str
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.press(label.as_ref());
        }
        &self.display
    }

    /// Applies one key and returns the new display text
    pub fn apply(&mut self, key: KeyEvent) -> &str {
        let outcome = match key {
            KeyEvent::Digit(d) if d > 9 => {
                trace!(digit = d, "ignoring out-of-range digit");
                return &self.display;
            }
            KeyEvent::Digit(_) | KeyEvent::DoubleZero => {
                if let Some(text) = key.entry_text() {
                    self.enter_digits(text);
                }
                Ok(Outcome::Render)
            }
            KeyEvent::Dot => {
                self.enter_dot();
                Ok(Outcome::Render)
            }
            KeyEvent::Operator(op) => self.choose_operator(op),
            KeyEvent::Equals => self.equals(),
            KeyEvent::Percent => self.percent(),
            KeyEvent::Clear => {
                self.state.input.clear();
                self.state.just_evaluated = false;
                Ok(Outcome::Render)
            }
            KeyEvent::AllClear => {
                self.state = EngineState::default();
                Ok(Outcome::Render)
            }
        };

        match outcome {
            Ok(Outcome::Render) => self.render(),
            Ok(Outcome::Keep) => {}
            Err(err) => {
                warn!(%err, key = %key, "evaluation failed, resetting");
                self.state = EngineState::default();
                self.display.clone_from(&self.config.error_text);
            }
        }

        debug!(key = %key, display = %self.display, "applied key");
        &self.display
    }

    fn enter_digits(&mut self, text: &str) {
        if self.state.just_evaluated {
            // Typing after a result discards it
            self.state = EngineState::default();
        }
        self.state.just_evaluated = false;

        let input = &mut self.state.input;
        if input.is_empty() || input.as_str() == "0" {
            input.clear();
            input.push_str(if text == "00" { "0" } else { text });
        } else {
            input.push_str(text);
        }
    }

    fn enter_dot(&mut self) {
        if self.state.just_evaluated && self.state.pending.is_none() {
            self.state = EngineState::default();
        }
        self.state.just_evaluated = false;

        let input = &mut self.state.input;
        if input.is_empty() {
            input.push_str("0.");
        } else if !input.contains(['.', 'E']) {
            input.push('.');
        }
    }

    fn choose_operator(&mut self, op: Operator) -> CalcResult<Outcome> {
        if self.state.has_entry() {
            // The entry completes the previously pending operator
            let right = self.entry_value()?;
            self.state.accumulator = self.evaluate(right)?;
            self.state.input.clear();
        }
        self.state.pending = Some(op);
        self.state.just_evaluated = false;
        Ok(Outcome::Render)
    }

    fn equals(&mut self) -> CalcResult<Outcome> {
        let right = if self.state.has_entry() {
            self.entry_value()?
        } else if let (Some(_), Some(last)) = (self.state.pending, self.state.last_operand) {
            last
        } else {
            trace!("nothing to evaluate");
            return Ok(Outcome::Keep);
        };

        self.state.accumulator = self.evaluate(right)?;
        self.state.last_operand = Some(right);
        self.state.input.clear();
        self.state.just_evaluated = true;
        Ok(Outcome::Render)
    }

    fn percent(&mut self) -> CalcResult<Outcome> {
        let entry = parse_entry(&self.state.input);
        if let Some(typed) = entry.filter(|v| v.is_infinite()) {
            return Err(CalcError::NonFinite(typed));
        }

        if self.state.pending.is_some() {
            // Percentage of the left operand becomes the right operand
            let base = self.state.accumulator;
            let value = self.validator.validate(base * entry.unwrap_or(base) / 100.0)?;
            self.state.input = self.format(value);
        } else if let Some(current) = entry {
            let value = self.validator.validate(current / 100.0)?;
            self.state.input = self.format(value);
        } else {
            self.state.accumulator = self.validator.validate(self.state.accumulator / 100.0)?;
        }

        self.state.just_evaluated = false;
        Ok(Outcome::Render)
    }

    /// Evaluates `accumulator <pending> right`; no pending operator yields
    /// `right` unchanged
    fn evaluate(&mut self, right: f64) -> CalcResult<f64> {
        let left = self.state.accumulator;
        let Some(op) = self.state.pending else {
            return self.validator.validate(right).map_err(CalcError::from);
        };

        let result = self.validator.validate(op.apply(left, right)?)?;
        let expression = format!("{} {op} {}", self.format(left), self.format(right));
        let result_text = self.format(result);
        debug!(%expression, result, "evaluated");
        self.tape.record(expression, result, result_text);
        Ok(result)
    }

    /// Unparsable entries count as zero; an entry too large for `f64` fails
    fn entry_value(&self) -> CalcResult<f64> {
        match parse_entry(&self.state.input) {
            Some(typed) if typed.is_infinite() => Err(CalcError::NonFinite(typed)),
            entry => Ok(entry.unwrap_or(0.0)),
        }
    }

    fn format(&self, value: f64) -> String {
        format_number(value, self.config.significant_digits)
    }

    fn render(&mut self) {
        self.display = if self.state.has_entry() {
            self.state.input.clone()
        } else {
            self.format(self.state.accumulator)
        };
    }
}
