//! Standard calculator keypad
//!
//! Describes the 19 buttons a rendering layer draws and the `(value,
//! KeyType)` pair each one sends to the engine.
//!
//! Layout:
//! ```text
//! [ AC ] [ ± ] [ % ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9 ] [ × ]
//! [ 4  ] [ 5 ] [ 6 ] [ − ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [    0     ] [ . ] [ = ]
//! ```

use crate::core::{Engine, FunctionKey, Key, KeyType, Operator};
use crate::error::KeyError;

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDef {
    /// Text printed on the button
    pub label: &'static str,
    /// Token sent to the engine
    pub value: &'static str,
    /// Key category sent alongside the value
    pub key_type: KeyType,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column of the leftmost cell (0-indexed)
    pub col: usize,
    /// Number of columns the button spans
    pub span: usize,
}

impl KeyDef {
    const fn new(
        label: &'static str,
        value: &'static str,
        key_type: KeyType,
        row: usize,
        col: usize,
    ) -> Self {
        Self {
            label,
            value,
            key_type,
            row,
            col,
            span: 1,
        }
    }

    const fn wide(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Returns the typed key this button sends
    pub fn key(&self) -> Result<Key, KeyError> {
        Key::parse(self.value, self.key_type)
    }

    /// Returns true if the button spans more than one column
    #[must_use]
    pub const fn is_wide(&self) -> bool {
        self.span > 1
    }

    /// Returns true if the button occupies the given grid cell
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// Keypad layout
#[derive(Debug, Clone)]
pub struct Keypad {
    keys: Vec<KeyDef>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// Creates the standard four-function keypad
    #[must_use]
    pub fn standard() -> Self {
        use KeyType::{Function, Number, Operator as Op};

        let keys = vec![
            // Row 0: AC ± % ÷
            KeyDef::new("AC", "AC", Function, 0, 0),
            KeyDef::new("\u{b1}", "+/-", Function, 0, 1),
            KeyDef::new("%", "%", Function, 0, 2),
            KeyDef::new("\u{f7}", "/", Op, 0, 3),
            // Row 1: 7 8 9 ×
            KeyDef::new("7", "7", Number, 1, 0),
            KeyDef::new("8", "8", Number, 1, 1),
            KeyDef::new("9", "9", Number, 1, 2),
            KeyDef::new("\u{d7}", "*", Op, 1, 3),
            // Row 2: 4 5 6 −
            KeyDef::new("4", "4", Number, 2, 0),
            KeyDef::new("5", "5", Number, 2, 1),
            KeyDef::new("6", "6", Number, 2, 2),
            KeyDef::new("\u{2212}", "-", Op, 2, 3),
            // Row 3: 1 2 3 +
            KeyDef::new("1", "1", Number, 3, 0),
            KeyDef::new("2", "2", Number, 3, 1),
            KeyDef::new("3", "3", Number, 3, 2),
            KeyDef::new("+", "+", Op, 3, 3),
            // Row 4: 0 (wide) . =
            KeyDef::new("0", "0", Number, 4, 0).wide(2),
            KeyDef::new(".", ".", Number, 4, 2),
            KeyDef::new("=", "=", Op, 4, 3),
        ];

        Self {
            keys,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns all buttons in reading order
    #[must_use]
    pub fn keys(&self) -> &[KeyDef] {
        &self.keys
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the keypad has no buttons
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the button covering a grid cell
    #[must_use]
    pub fn key_at(&self, row: usize, col: usize) -> Option<&KeyDef> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.keys.iter().find(|k| k.covers(row, col))
    }

    /// Finds a button by its printed label
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&KeyDef> {
        self.keys.iter().find(|k| k.label == label)
    }

    /// Finds a button by the token it sends
    #[must_use]
    pub fn find_by_value(&self, value: &str) -> Option<&KeyDef> {
        self.keys.iter().find(|k| k.value == value)
    }

    /// Resolves a user-typed token to a button.
    ///
    /// Tries the label, then the value, then operator and function aliases
    /// (`x`, `±`, `−`...).
    #[must_use]
    pub fn key_for_token(&self, token: &str) -> Option<&KeyDef> {
        self.find_by_label(token)
            .or_else(|| self.find_by_value(token))
            .or_else(|| {
                Operator::from_token(token)
                    .map(|op| op.token())
                    .or_else(|| FunctionKey::from_token(token).map(|f| f.token()))
                    .and_then(|value| self.find_by_value(value))
            })
    }

    /// Presses the button matching `token`
    pub fn press(&self, engine: &mut Engine, token: &str) -> Result<(), KeyError> {
        let key = self
            .key_for_token(token)
            .ok_or_else(|| KeyError::UnknownLabel(token.to_string()))?;
        engine.handle_key(key.value, key.key_type);
        Ok(())
    }

    /// Presses a whitespace-separated sequence of buttons.
    ///
    /// Every token is resolved before any is pressed, so an unknown token
    /// leaves the engine untouched.
    pub fn press_sequence(&self, engine: &mut Engine, tokens: &str) -> Result<(), KeyError> {
        let keys = tokens
            .split_whitespace()
            .map(|token| {
                self.key_for_token(token)
                    .ok_or_else(|| KeyError::UnknownLabel(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for key in keys {
            engine.handle_key(key.value, key.key_type);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ===== Layout tests =====

    #[test]
    fn test_standard_keypad_size() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.len(), 19);
        assert!(!keypad.is_empty());
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_every_cell_is_covered_once() {
        let keypad = Keypad::standard();
        let (rows, cols) = keypad.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                let covering = keypad.keys().iter().filter(|k| k.covers(row, col)).count();
                assert_eq!(covering, 1, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_zero_is_wide() {
        let keypad = Keypad::standard();
        let zero = keypad.find_by_label("0").unwrap();
        assert!(zero.is_wide());
        assert_eq!(keypad.key_at(4, 0), Some(zero));
        assert_eq!(keypad.key_at(4, 1), Some(zero));
        assert_eq!(keypad.key_at(4, 2).unwrap().label, ".");
    }

    #[test]
    fn test_key_at_out_of_bounds() {
        let keypad = Keypad::standard();
        assert!(keypad.key_at(5, 0).is_none());
        assert!(keypad.key_at(0, 4).is_none());
    }

    #[test]
    fn test_labels_and_values_unique() {
        let keypad = Keypad::standard();
        let labels: HashSet<_> = keypad.keys().iter().map(|k| k.label).collect();
        let values: HashSet<_> = keypad.keys().iter().map(|k| k.value).collect();
        assert_eq!(labels.len(), keypad.len());
        assert_eq!(values.len(), keypad.len());
    }

    #[test]
    fn test_every_key_parses() {
        let keypad = Keypad::standard();
        for def in keypad.keys() {
            let key = def.key().unwrap();
            assert_eq!(key.key_type(), def.key_type, "{}", def.label);
        }
    }

    #[test]
    fn test_operator_column() {
        let keypad = Keypad::standard();
        let ops: Vec<_> = (0..4)
            .map(|row| keypad.key_at(row, 3).unwrap().key().unwrap())
            .collect();
        let expected: Vec<_> = Operator::ALL.iter().map(|op| Key::Operator(*op)).collect();
        assert_eq!(ops, expected);
    }

    // ===== Lookup tests =====

    #[test]
    fn test_find_by_label_glyphs() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.find_by_label("÷").unwrap().value, "/");
        assert_eq!(keypad.find_by_label("×").unwrap().value, "*");
        assert_eq!(keypad.find_by_label("−").unwrap().value, "-");
        assert_eq!(keypad.find_by_label("±").unwrap().value, "+/-");
    }

    #[test]
    fn test_key_for_token_aliases() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.key_for_token("*").unwrap().label, "×");
        assert_eq!(keypad.key_for_token("x").unwrap().label, "×");
        assert_eq!(keypad.key_for_token("+/-").unwrap().label, "±");
        assert_eq!(keypad.key_for_token("-").unwrap().label, "−");
        assert!(keypad.key_for_token("sin").is_none());
    }

    // ===== Press tests =====

    #[test]
    fn test_press_by_label() {
        let keypad = Keypad::standard();
        let mut engine = Engine::new();
        for label in ["3", "6", "+", "6", "="] {
            keypad.press(&mut engine, label).unwrap();
        }
        assert_eq!(engine.display(), "42");
        assert_eq!(engine.last_calculation(), "36 + 6");
    }

    #[test]
    fn test_press_unknown_label() {
        let keypad = Keypad::standard();
        let mut engine = Engine::new();
        assert_eq!(
            keypad.press(&mut engine, "sqrt"),
            Err(KeyError::UnknownLabel("sqrt".into()))
        );
    }

    #[test]
    fn test_press_sequence() {
        let keypad = Keypad::standard();
        let mut engine = Engine::new();
        keypad.press_sequence(&mut engine, "8 ÷ 4 =").unwrap();
        assert_eq!(engine.display(), "2");
    }

    #[test]
    fn test_press_sequence_is_all_or_nothing() {
        let keypad = Keypad::standard();
        let mut engine = Engine::new();
        assert!(keypad.press_sequence(&mut engine, "5 + ^ 3").is_err());
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.state().operator(), None);
    }
}
