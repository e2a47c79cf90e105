//! Core calculator: key model, numeral formatting and the state machine

pub mod engine;
pub mod format;
pub mod key;

pub use engine::{Engine, EngineState, Snapshot, ERROR_DISPLAY};
pub use key::{FunctionKey, Key, KeyType, Operator};
