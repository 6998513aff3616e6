//! Key events and their labels
//!
//! The presentation layer identifies keys by the label printed on the
//! button. The recognized alphabet is `0`-`9`, `00`, `.`, `+`, `-`, `*`, `/`,
//! `=`, `%`, `C` and `AC`.

use crate::core::{CalcError, CalcResult, Operator};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyEvent {
    /// A digit key (0-9)
    Digit(u8),
    /// The `00` shortcut
    DoubleZero,
    /// Decimal point
    Dot,
    /// A binary operator
    Operator(Operator),
    /// Evaluate
    Equals,
    /// Percent
    Percent,
    /// Cancel the current entry
    Clear,
    /// Reset everything
    AllClear,
}

impl KeyEvent {
    /// Every key in the alphabet, digits first
    pub const ALL: [Self; 20] = [
        Self::Digit(0),
        Self::Digit(1),
        Self::Digit(2),
        Self::Digit(3),
        Self::Digit(4),
        Self::Digit(5),
        Self::Digit(6),
        Self::Digit(7),
        Self::Digit(8),
        Self::Digit(9),
        Self::DoubleZero,
        Self::Dot,
        Self::Operator(Operator::Add),
        Self::Operator(Operator::Subtract),
        Self::Operator(Operator::Multiply),
        Self::Operator(Operator::Divide),
        Self::Equals,
        Self::Percent,
        Self::Clear,
        Self::AllClear,
    ];

    /// Parses a button label.
    ///
    /// Surrounding whitespace is ignored; anything outside the alphabet is
    /// [`CalcError::UnknownKey`].
    pub fn from_label(label: &str) -> CalcResult<Self> {
        let key = match label.trim() {
            "00" => Self::DoubleZero,
            "." => Self::Dot,
            "=" => Self::Equals,
            "%" => Self::Percent,
            "C" => Self::Clear,
            "AC" => Self::AllClear,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(c as u8 - b'0'),
                    (Some(c), None) => match Operator::from_symbol(c) {
                        Some(op) => Self::Operator(op),
                        None => return Err(CalcError::UnknownKey(label.to_string())),
                    },
                    _ => return Err(CalcError::UnknownKey(label.to_string())),
                }
            }
        };
        Ok(key)
    }

    /// Returns the button label for this key
    #[must_use]
    pub const fn label(&self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Digit(d) => {
                if (*d as usize) < DIGITS.len() {
                    DIGITS[*d as usize]
                } else {
                    "?"
                }
            }
            Self::DoubleZero => "00",
            Self::Dot => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Percent => "%",
            Self::Clear => "C",
            Self::AllClear => "AC",
        }
    }

    /// Returns the text this key appends to the entry buffer, if any
    #[must_use]
    pub const fn entry_text(&self) -> Option<&'static str> {
        match self {
            Self::Digit(_) | Self::DoubleZero => Some(self.label()),
            _ => None,
        }
    }
}

impl FromStr for KeyEvent {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl std::fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== from_label =====

    #[test]
    fn test_digits_parse() {
        for d in 0..=9u8 {
            assert_eq!(
                KeyEvent::from_label(&d.to_string()).unwrap(),
                KeyEvent::Digit(d)
            );
        }
    }

    #[test]
    fn test_special_labels_parse() {
        assert_eq!(KeyEvent::from_label("00").unwrap(), KeyEvent::DoubleZero);
        assert_eq!(KeyEvent::from_label(".").unwrap(), KeyEvent::Dot);
        assert_eq!(KeyEvent::from_label("=").unwrap(), KeyEvent::Equals);
        assert_eq!(KeyEvent::from_label("%").unwrap(), KeyEvent::Percent);
        assert_eq!(KeyEvent::from_label("C").unwrap(), KeyEvent::Clear);
        assert_eq!(KeyEvent::from_label("AC").unwrap(), KeyEvent::AllClear);
    }

    #[test]
    fn test_operator_labels_parse() {
        assert_eq!(
            KeyEvent::from_label("+").unwrap(),
            KeyEvent::Operator(Operator::Add)
        );
        assert_eq!(
            KeyEvent::from_label("-").unwrap(),
            KeyEvent::Operator(Operator::Subtract)
        );
        assert_eq!(
            KeyEvent::from_label("*").unwrap(),
            KeyEvent::Operator(Operator::Multiply)
        );
        assert_eq!(
            KeyEvent::from_label("/").unwrap(),
            KeyEvent::Operator(Operator::Divide)
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(KeyEvent::from_label(" 7 ").unwrap(), KeyEvent::Digit(7));
        assert_eq!(KeyEvent::from_label("AC\n").unwrap(), KeyEvent::AllClear);
    }

    #[test]
    fn test_unknown_labels_rejected() {
        for label in ["", "000", "12", "^", "ac", "c", "x", "CE", "sqrt", "٣"] {
            assert_eq!(
                KeyEvent::from_label(label),
                Err(CalcError::UnknownKey(label.to_string())),
                "label {label:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_str() {
        let key: KeyEvent = "9".parse().unwrap();
        assert_eq!(key, KeyEvent::Digit(9));
        assert!("?".parse::<KeyEvent>().is_err());
    }

    // ===== label =====

    #[test]
    fn test_label_round_trips_for_every_key() {
        for key in KeyEvent::ALL {
            assert_eq!(KeyEvent::from_label(key.label()).unwrap(), key);
        }
    }

    #[test]
    fn test_out_of_range_digit_label() {
        assert_eq!(KeyEvent::Digit(12).label(), "?");
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(KeyEvent::AllClear.to_string(), "AC");
        assert_eq!(KeyEvent::Operator(Operator::Divide).to_string(), "/");
    }

    #[test]
    fn test_entry_text() {
        assert_eq!(KeyEvent::Digit(4).entry_text(), Some("4"));
        assert_eq!(KeyEvent::DoubleZero.entry_text(), Some("00"));
        assert_eq!(KeyEvent::Dot.entry_text(), None);
        assert_eq!(KeyEvent::Equals.entry_text(), None);
    }
}
