//! Typed key model
//!
//! The input-dispatch layer speaks in `(value, KeyType)` string pairs. This
//! module turns those pairs into [`Key`] values so the state machine only
//! ever sees well-formed input.

use serde::{Deserialize, Serialize};

use crate::error::{CalcResult, EvalError, KeyError};

/// Category of a keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    /// Digits and the decimal point
    Number,
    /// Binary operators and `=`
    Operator,
    /// `AC`, `+/-` and `%`
    Function,
}

/// Pending binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the glyph shown on the keypad and in the last-calculation line
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{d7}",
            Self::Divide => "\u{f7}",
        }
    }

    /// Returns the ASCII token a keypad button sends for this operator
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Parses an operator from either its glyph or its ASCII token
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" | "\u{2212}" => Some(Self::Subtract),
            "*" | "\u{d7}" | "x" => Some(Self::Multiply),
            "/" | "\u{f7}" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    pub fn apply(&self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(EvalError::NonFinite(result))
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Function keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionKey {
    /// Reset everything (AC)
    AllClear,
    /// Negate the displayed number (+/-)
    ToggleSign,
    /// Divide the displayed number by 100 (%)
    Percent,
}

impl FunctionKey {
    /// Returns the token a keypad button sends for this key
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::AllClear => "AC",
            Self::ToggleSign => "+/-",
            Self::Percent => "%",
        }
    }

    /// Parses a function key token
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "AC" => Some(Self::AllClear),
            "+/-" | "\u{b1}" => Some(Self::ToggleSign),
            "%" => Some(Self::Percent),
            _ => None,
        }
    }
}

/// A single well-formed key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// One of the four binary operators
    Operator(Operator),
    /// Commit (=)
    Equals,
    /// AC, +/- or %
    Function(FunctionKey),
}

impl Key {
    /// Parses a `(value, key_type)` pair as sent by the input-dispatch layer.
    ///
    /// The key type decides which tokens are acceptable: `"%"` is only valid
    /// as a [`KeyType::Function`], `"="` only as a [`KeyType::Operator`].
    pub fn parse(value: &str, key_type: KeyType) -> Result<Self, KeyError> {
        match key_type {
            KeyType::Number => Self::parse_number(value),
            KeyType::Operator => match value {
                "=" => Ok(Self::Equals),
                _ => Operator::from_token(value)
                    .map(Self::Operator)
                    .ok_or_else(|| KeyError::InvalidOperator(value.to_string())),
            },
            KeyType::Function => FunctionKey::from_token(value)
                .map(Self::Function)
                .ok_or_else(|| KeyError::InvalidFunction(value.to_string())),
        }
    }

    fn parse_number(value: &str) -> Result<Self, KeyError> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some('.'), None) => Ok(Self::Decimal),
            (Some(c), None) => c
                .to_digit(10)
                .map(|d| Self::Digit(d as u8))
                .ok_or_else(|| KeyError::InvalidNumber(value.to_string())),
            _ => Err(KeyError::InvalidNumber(value.to_string())),
        }
    }

    /// Returns the key type this key is dispatched with
    #[must_use]
    pub const fn key_type(&self) -> KeyType {
        match self {
            Self::Digit(_) | Self::Decimal => KeyType::Number,
            Self::Operator(_) | Self::Equals => KeyType::Operator,
            Self::Function(_) => KeyType::Function,
        }
    }

    /// Returns the character a number key appends to the display
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(_) | Self::Equals | Self::Function(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Operator tests =====

    #[test]
    fn test_operator_glyphs() {
        assert_eq!(Operator::Add.glyph(), "+");
        assert_eq!(Operator::Subtract.glyph(), "−");
        assert_eq!(Operator::Multiply.glyph(), "×");
        assert_eq!(Operator::Divide.glyph(), "÷");
    }

    #[test]
    fn test_operator_display_uses_glyph() {
        assert_eq!(Operator::Divide.to_string(), "÷");
    }

    #[test]
    fn test_operator_from_ascii_and_glyph() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_token(op.token()), Some(op));
            assert_eq!(Operator::from_token(op.glyph()), Some(op));
        }
    }

    #[test]
    fn test_operator_from_unknown() {
        assert_eq!(Operator::from_token("^"), None);
        assert_eq!(Operator::from_token("="), None);
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operator::Subtract.apply(9.0, 4.0), Ok(5.0));
        assert_eq!(Operator::Multiply.apply(6.0, 2.0), Ok(12.0));
        assert_eq!(Operator::Divide.apply(8.0, 4.0), Ok(2.0));
    }

    #[test]
    fn test_operator_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(0.0, -0.0),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_operator_overflow() {
        assert!(matches!(
            Operator::Multiply.apply(f64::MAX, 2.0),
            Err(EvalError::NonFinite(_))
        ));
    }

    // ===== FunctionKey tests =====

    #[test]
    fn test_function_key_round_trip_token() {
        for key in [
            FunctionKey::AllClear,
            FunctionKey::ToggleSign,
            FunctionKey::Percent,
        ] {
            assert_eq!(FunctionKey::from_token(key.token()), Some(key));
        }
    }

    #[test]
    fn test_function_key_plus_minus_glyph() {
        assert_eq!(FunctionKey::from_token("±"), Some(FunctionKey::ToggleSign));
    }

    // ===== Key::parse tests =====

    #[test]
    fn test_parse_digits() {
        for d in 0..=9u8 {
            let token = d.to_string();
            assert_eq!(Key::parse(&token, KeyType::Number), Ok(Key::Digit(d)));
        }
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Key::parse(".", KeyType::Number), Ok(Key::Decimal));
    }

    #[test]
    fn test_parse_number_rejects_multi_char() {
        assert_eq!(
            Key::parse("12", KeyType::Number),
            Err(KeyError::InvalidNumber("12".into()))
        );
        assert!(Key::parse("", KeyType::Number).is_err());
        assert!(Key::parse("a", KeyType::Number).is_err());
    }

    #[test]
    fn test_parse_operators() {
        assert_eq!(
            Key::parse("×", KeyType::Operator),
            Ok(Key::Operator(Operator::Multiply))
        );
        assert_eq!(Key::parse("=", KeyType::Operator), Ok(Key::Equals));
    }

    #[test]
    fn test_parse_type_mismatch() {
        assert!(matches!(
            Key::parse("5", KeyType::Operator),
            Err(KeyError::InvalidOperator(_))
        ));
        assert!(matches!(
            Key::parse("+", KeyType::Number),
            Err(KeyError::InvalidNumber(_))
        ));
        assert!(matches!(
            Key::parse("=", KeyType::Function),
            Err(KeyError::InvalidFunction(_))
        ));
    }

    #[test]
    fn test_key_type_round_trip() {
        let keys = [
            Key::Digit(3),
            Key::Decimal,
            Key::Operator(Operator::Add),
            Key::Equals,
            Key::Function(FunctionKey::Percent),
        ];
        for key in keys {
            let token = match key {
                Key::Digit(_) | Key::Decimal => key.to_char().unwrap().to_string(),
                Key::Operator(op) => op.token().to_string(),
                Key::Equals => "=".to_string(),
                Key::Function(f) => f.token().to_string(),
            };
            assert_eq!(Key::parse(&token, key.key_type()), Ok(key));
        }
    }

    #[test]
    fn test_key_type_serde_lowercase() {
        let json = serde_json::to_string(&KeyType::Operator).unwrap();
        assert_eq!(json, "\"operator\"");
    }
}
