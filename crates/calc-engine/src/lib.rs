//! Calc Engine - key-driven four-function calculator
//!
//! The engine consumes one key event at a time (digits, decimal point,
//! operators and function keys) and keeps the two strings a calculator face
//! shows: the running display and the last completed calculation.
//!
//! - **Left to right**: `2 + 3 × 4 =` gives `20`; there is no precedence
//! - **Last operator wins**: `5 + × 3 =` gives `15`
//! - **No float noise**: results are rounded to significant digits, so
//!   `0.1 + 0.2 =` shows `0.3`
//! - **Never fails outward**: division by zero shows `Error`, malformed keys
//!   are ignored
//!
//! # Example
//!
//! ```rust
//! use calc_engine::prelude::*;
//!
//! let mut engine = Engine::new();
//! for (value, key_type) in [
//!     ("3", KeyType::Number),
//!     ("6", KeyType::Number),
//!     ("+", KeyType::Operator),
//!     ("6", KeyType::Number),
//!     ("=", KeyType::Operator),
//! ] {
//!     engine.handle_key(value, key_type);
//! }
//!
//! assert_eq!(engine.display(), "42");
//! assert_eq!(engine.last_calculation(), "36 + 6");
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
pub mod error;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::core::{
        Engine, EngineState, FunctionKey, Key, KeyType, Operator, Snapshot, ERROR_DISPLAY,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::error::{ConfigError, EvalError, KeyError};
    pub use crate::keypad::{KeyDef, Keypad};
}
