//! Standard calculator keypad
//!
//! Describes the button grid a presentation layer draws and maps a clicked
//! button back to its [`KeyEvent`].
//!
//! ```text
//! [AC] [ C] [ %] [ /]
//! [ 7] [ 8] [ 9] [ *]
//! [ 4] [ 5] [ 6] [ -]
//! [ 1] [ 2] [ 3] [ +]
//! [00] [ 0] [ .] [ =]
//! ```

use crate::core::Operator;
use crate::key::KeyEvent;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Key this button sends
    pub key: KeyEvent,
    /// Element id, e.g. `btn-7` or `btn-plus`
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button and derives its element id from the key
    #[must_use]
    pub fn new(key: KeyEvent, row: usize, col: usize) -> Self {
        Self {
            id: button_id(key),
            key,
            row,
            col,
        }
    }

    /// Label printed on the button
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.key.label()
    }
}

/// Element id for a key
#[must_use]
pub fn button_id(key: KeyEvent) -> String {
    match key {
        KeyEvent::Digit(d) => format!("btn-{d}"),
        KeyEvent::DoubleZero => "btn-00".to_string(),
        KeyEvent::Dot => "btn-decimal".to_string(),
        KeyEvent::Operator(op) => format!("btn-{}", op_name(op)),
        KeyEvent::Equals => "btn-equals".to_string(),
        KeyEvent::Percent => "btn-percent".to_string(),
        KeyEvent::Clear => "btn-clear".to_string(),
        KeyEvent::AllClear => "btn-all-clear".to_string(),
    }
}

const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// The 5x4 button grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        use KeyEvent::{AllClear, Clear, Digit, Dot, DoubleZero, Equals, Percent};
        let op = KeyEvent::Operator;

        let layout = [
            [AllClear, Clear, Percent, op(Operator::Divide)],
            [Digit(7), Digit(8), Digit(9), op(Operator::Multiply)],
            [Digit(4), Digit(5), Digit(6), op(Operator::Subtract)],
            [Digit(1), Digit(2), Digit(3), op(Operator::Add)],
            [DoubleZero, Digit(0), Dot, Equals],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, keys)| {
                keys.iter()
                    .enumerate()
                    .map(move |(col, key)| KeypadButton::new(*key, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: layout.len(),
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons, row-major
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its printed label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButton> {
        let label = label.trim();
        self.buttons.iter().find(|b| b.label() == label)
    }

    /// Maps a click on an element to the key it sends
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeyEvent> {
        self.find_button_by_id(element_id).map(|b| b.key)
    }
}
