//! Keycalc - keypad calculator engine
//!
//! Turns a stream of discrete key presses (digits, decimal point, the four
//! binary operators, percent, equals, clear and all-clear) into arithmetic
//! state and the text of a single numeric display.
//!
//! The whole state machine lives in [`engine::CalculatorEngine`]. A front end
//! calls [`engine::CalculatorEngine::apply`] (or `press` with the button
//! label) once per key and renders the returned string verbatim.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//!
//! // Left-to-right evaluation, no precedence
//! assert_eq!(engine.press_all(["2", "+", "3", "*", "4", "="]), "20");
//!
//! // Percent of the left operand: 8 - 5% of 8
//! engine.apply(KeyEvent::AllClear);
//! assert_eq!(engine.press_all(["8", "-", "5", "%", "="]), "7.6");
//!
//! // Failures show a sentinel and reset
//! engine.apply(KeyEvent::AllClear);
//! assert_eq!(engine.press_all(["5", "/", "0", "="]), "Error");
//! assert_eq!(engine.state(), &EngineState::default());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod engine;
pub mod key;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::core::format::{format_number, parse_entry};
    pub use crate::core::history::{Tape, TapeEntry};
    pub use crate::core::{AnomalyViolation, CalcError, CalcResult, Operator, ResultValidator};
    pub use crate::driver::{CalculatorDriver, KeypadDriver};
    pub use crate::engine::{CalculatorEngine, EngineSnapshot, EngineState};
    pub use crate::key::KeyEvent;
    pub use crate::keypad::{Keypad, KeypadButton};
}
