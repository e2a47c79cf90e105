//! Error types for the calculator engine
//!
//! None of these escape [`Engine::handle_key`](crate::core::Engine::handle_key):
//! the engine matches them at its boundary and either ignores the key or shows
//! the `"Error"` sentinel.

use thiserror::Error;

/// Result type for engine-internal fallible steps
pub type CalcResult<T> = Result<T, EvalError>;

/// A key token that does not belong to the key type it was sent with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Not a digit or decimal point
    #[error("Invalid number key: {0:?}")]
    InvalidNumber(String),

    /// Not one of `+ − × ÷ =` or their ASCII aliases
    #[error("Invalid operator key: {0:?}")]
    InvalidOperator(String),

    /// Not one of `AC`, `+/-`, `%`
    #[error("Invalid function key: {0:?}")]
    InvalidFunction(String),

    /// No keypad button carries this label or value
    #[error("Unknown key label: {0:?}")]
    UnknownLabel(String),
}

/// Failure while evaluating a binary operation
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalError {
    /// Right operand of a division was zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Result overflowed to infinity or became NaN
    #[error("Non-finite result: {0}")]
    NonFinite(f64),
}

/// Invalid [`EngineConfig`](crate::config::EngineConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input cap must allow at least one character
    #[error("Invalid input length: {0} (must be at least 1)")]
    InvalidInputLength(usize),

    /// Precision outside what an `f64` can carry
    #[error("Invalid {field}: {value} (must be 1-17 significant digits)")]
    InvalidPrecision {
        /// Name of the offending field
        field: &'static str,
        /// Rejected value
        value: usize,
    },

    /// Malformed JSON
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
