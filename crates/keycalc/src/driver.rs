//! Unified calculator driver
//!
//! **Write the key sequence once, run it against every front end.**
//!
//! [`CalculatorDriver`] is the narrow interface a presentation layer offers:
//! press a labelled key, read the display, reset. The `verify_*` functions
//! are reusable checks that any driver must satisfy.

use crate::engine::CalculatorEngine;
use crate::key::KeyEvent;
use crate::keypad::Keypad;

/// Abstract driver for key-by-key calculator interaction
pub trait CalculatorDriver {
    /// Presses the key with the given label; unknown labels are ignored
    fn press(&mut self, label: &str);

    /// Current display text
    fn display(&self) -> String;

    /// Returns the calculator to its freshly constructed state
    fn reset(&mut self);

    /// Presses each label in order and returns the final display
    fn press_sequence(&mut self, labels: &[&str]) -> String {
        for label in labels {
            self.press(label);
        }
        self.display()
    }
}

impl CalculatorDriver for CalculatorEngine {
    fn press(&mut self, label: &str) {
        CalculatorEngine::press(self, label);
    }

    fn display(&self) -> String {
        CalculatorEngine::display(self).to_string()
    }

    fn reset(&mut self) {
        self.apply(KeyEvent::AllClear);
    }
}

/// Driver that routes every label through a keypad button, the way a click
/// reaches the engine from a drawn keypad
#[derive(Debug, Default)]
pub struct KeypadDriver {
    keypad: Keypad,
    engine: CalculatorEngine,
    clicks: Vec<String>,
}

impl KeypadDriver {
    /// Creates a driver over the standard keypad and a default engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver over an existing engine
    #[must_use]
    pub fn with_engine(engine: CalculatorEngine) -> Self {
        Self {
            keypad: Keypad::new(),
            engine,
            clicks: Vec::new(),
        }
    }

    /// Simulates a click on a keypad element
    pub fn click(&mut self, element_id: &str) -> Option<&str> {
        let key = self.keypad.handle_click(element_id)?;
        self.clicks.push(element_id.to_string());
        Some(self.engine.apply(key))
    }

    /// Element ids clicked so far
    #[must_use]
    pub fn clicks(&self) -> &[String] {
        &self.clicks
    }

    /// The underlying engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// The keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, label: &str) {
        let id = match self.keypad.find_button_by_label(label) {
            Some(button) => button.id.clone(),
            None => return,
        };
        self.click(&id);
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn reset(&mut self) {
        self.press("AC");
        self.clicks.clear();
    }
}

// ===== Shared Behavior Checks =====
// These work with ANY CalculatorDriver implementation

/// Verifies digit and decimal-point entry
pub fn verify_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.press_sequence(&["1", "2", "3"]), "123");
    driver.reset();
    assert_eq!(driver.press_sequence(&["0", "0", "7"]), "7");
    driver.reset();
    assert_eq!(driver.press_sequence(&["00"]), "0");
    driver.reset();
    assert_eq!(driver.press_sequence(&["1", ".", "2", "."]), "1.2");
    driver.reset();
    assert_eq!(driver.press_sequence(&["."]), "0.");
    driver.reset();
}

/// Verifies the four operators and left-to-right chaining
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.press_sequence(&["2", "+", "3", "="]), "5");
    driver.reset();
    assert_eq!(driver.press_sequence(&["1", "0", "-", "4", "="]), "6");
    driver.reset();
    assert_eq!(driver.press_sequence(&["6", "*", "7", "="]), "42");
    driver.reset();
    assert_eq!(driver.press_sequence(&["2", "0", "/", "4", "="]), "5");
    driver.reset();
    // No precedence: (2 + 3) * 4
    assert_eq!(driver.press_sequence(&["2", "+", "3", "*", "4", "="]), "20");
    driver.reset();
}

/// Verifies that a bare `=` replays the last operator and operand
pub fn verify_repeated_equals<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.press_sequence(&["5", "+", "3", "="]), "8");
    assert_eq!(driver.press_sequence(&["="]), "11");
    assert_eq!(driver.press_sequence(&["="]), "14");
    driver.reset();
}

/// Verifies both percent conventions
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.press_sequence(&["8", "-", "5", "%"]), "0.4");
    assert_eq!(driver.press_sequence(&["="]), "7.6");
    driver.reset();
    assert_eq!(driver.press_sequence(&["5", "0", "%"]), "0.5");
    driver.reset();
}

/// Verifies that a failed evaluation shows the sentinel and recovers
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.press_sequence(&["5", "/", "0", "="]), "Error");
    assert_eq!(driver.press_sequence(&["4", "+", "1", "="]), "5");
    driver.reset();
}

/// Verifies result formatting
pub fn verify_formatting<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.press_sequence(&["1", "/", "4", "="]), "0.25");
    driver.reset();
    assert_eq!(driver.press_sequence(&["9", "+", "0", "="]), "9");
    driver.reset();
    assert_eq!(driver.press_sequence(&["1", "/", "3", "="]), "0.333333333333333");
    driver.reset();
}

/// Complete verification suite
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_entry(driver);
    verify_basic_arithmetic(driver);
    verify_repeated_equals(driver);
    verify_percent(driver);
    verify_error_recovery(driver);
    verify_formatting(driver);
}
