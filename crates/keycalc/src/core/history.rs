//! Evaluation tape
//!
//! A bounded record of every evaluation the engine performed, oldest first.
//! The tape sits beside the arithmetic state: clearing the calculator does
//! not erase it.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single evaluation on the tape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// What was evaluated, e.g. `"5 + 3"`
    pub expression: String,
    /// The numeric result
    pub result: f64,
    /// The result as it was displayed
    pub result_text: String,
    /// When the evaluation happened (Unix epoch millis)
    pub timestamp: u64,
}

impl TapeEntry {
    /// Creates a new entry stamped with the current time
    #[must_use]
    pub fn new(expression: String, result: f64, result_text: String) -> Self {
        Self::with_timestamp(expression, result, result_text, Self::current_timestamp())
    }

    /// Creates an entry with a specific timestamp (for testing)
    #[must_use]
    pub fn with_timestamp(
        expression: String,
        result: f64,
        result_text: String,
        timestamp: u64,
    ) -> Self {
        Self {
            expression,
            result,
            result_text,
            timestamp,
        }
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Returns `"<expression> = <result>"`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result_text)
    }
}

/// Bounded evaluation tape; the oldest entry is evicted first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    max_entries: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a tape with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a tape holding at most `max_entries` entries
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            max_entries,
        }
    }

    /// Appends an entry, evicting the oldest when full
    pub fn push(&mut self, entry: TapeEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records an evaluation
    pub fn record(&mut self, expression: impl Into<String>, result: f64, result_text: impl Into<String>) {
        self.push(TapeEntry::new(expression.into(), result, result_text.into()));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tape is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the capacity
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Iterates newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Returns the oldest entry
    #[must_use]
    pub fn first(&self) -> Option<&TapeEntry> {
        self.entries.front()
    }

    /// Renders one `"<expression> = <result>"` line per entry
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(TapeEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn entry(expr: &str, result: f64) -> TapeEntry {
        TapeEntry::with_timestamp(expr.into(), result, result.to_string(), 1000)
    }

    // ===== TapeEntry tests =====

    #[test]
    fn test_tape_entry_new_is_stamped() {
        let e = TapeEntry::new("2 + 2".into(), 4.0, "4".into());
        assert_eq!(e.expression, "2 + 2");
        assert_eq!(e.result, 4.0);
        assert!(e.timestamp > 0);
    }

    #[test]
    fn test_tape_entry_display_uses_result_text() {
        let e = TapeEntry::with_timestamp("1 / 4".into(), 0.25, "0.25".into(), 1);
        assert_eq!(e.display(), "1 / 4 = 0.25");
    }

    #[test]
    fn test_tape_entry_serde() {
        let e = TapeEntry::with_timestamp("5 + 3".into(), 8.0, "8".into(), 42);
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"expression\":\"5 + 3\""));
        assert!(json.contains("\"result_text\":\"8\""));
        let back: TapeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    // ===== Tape tests =====

    #[test]
    fn test_tape_new() {
        let tape = Tape::new();
        assert!(tape.is_empty());
        assert_eq!(tape.max_entries(), Tape::DEFAULT_MAX_ENTRIES);
    }

    #[test]
    fn test_tape_record() {
        let mut tape = Tape::new();
        tape.record("3 + 4", 7.0, "7");
        assert_eq!(tape.len(), 1);
        assert_eq!(tape.last().unwrap().display(), "3 + 4 = 7");
    }

    #[test]
    fn test_tape_evicts_oldest() {
        let mut tape = Tape::with_capacity(3);
        for i in 1..=4 {
            tape.push(entry(&i.to_string(), f64::from(i)));
        }
        assert_eq!(tape.len(), 3);
        assert_eq!(tape.first().unwrap().result, 2.0);
        assert_eq!(tape.last().unwrap().result, 4.0);
    }

    #[test]
    fn test_tape_zero_capacity_keeps_nothing() {
        let mut tape = Tape::with_capacity(0);
        tape.push(entry("1", 1.0));
        assert!(tape.is_empty());
    }

    #[test]
    fn test_tape_iter_orders() {
        let mut tape = Tape::new();
        tape.push(entry("a", 1.0));
        tape.push(entry("b", 2.0));
        let fwd: Vec<_> = tape.iter().map(|e| e.expression.as_str()).collect();
        let rev: Vec<_> = tape.iter_rev().map(|e| e.expression.as_str()).collect();
        assert_eq!(fwd, vec!["a", "b"]);
        assert_eq!(rev, vec!["b", "a"]);
    }

    #[test]
    fn test_tape_clear() {
        let mut tape = Tape::new();
        tape.push(entry("1", 1.0));
        tape.clear();
        assert!(tape.is_empty());
    }

    #[test]
    fn test_tape_export_formatted() {
        let mut tape = Tape::new();
        tape.record("5 + 3", 8.0, "8");
        tape.record("8 + 3", 11.0, "11");
        assert_eq!(tape.export_formatted(), "5 + 3 = 8\n8 + 3 = 11");
    }
}
