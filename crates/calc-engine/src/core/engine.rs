//! Calculator engine: the key-driven state machine
//!
//! Every key press is one synchronous transition on [`EngineState`]. The
//! engine never fails outward: malformed keys are ignored and arithmetic
//! failures become the `"Error"` display sentinel.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::core::format::{parse_display, render_number, round_significant};
use crate::core::key::{FunctionKey, Key, KeyType, Operator};
use crate::error::{CalcResult, ConfigError, EvalError};

/// Display text shown after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

/// Display text of a freshly reset engine
const INITIAL_DISPLAY: &str = "0";

/// Mutable state of the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    display: String,
    previous_value: Option<f64>,
    operator: Option<Operator>,
    waiting_for_operand: bool,
    last_calculation: String,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            previous_value: None,
            operator: None,
            waiting_for_operand: false,
            last_calculation: String::new(),
        }
    }
}

impl EngineState {
    /// Text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left operand of the pending operation
    #[must_use]
    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    /// Pending operator
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Whether the next digit starts a new number
    #[must_use]
    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// `"<prev> <op> <current>"` of the last commit, or empty
    #[must_use]
    pub fn last_calculation(&self) -> &str {
        &self.last_calculation
    }

    /// Whether the display shows the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }
}

/// The two strings a rendering layer shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Main display
    pub display: String,
    /// Last completed calculation (may be empty)
    pub last_calculation: String,
}

/// Four-function calculator engine
#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: EngineState,
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a validated custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: EngineState::default(),
            config,
        })
    }

    /// Returns the active configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the full state (read-only)
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Last completed calculation, or empty
    #[must_use]
    pub fn last_calculation(&self) -> &str {
        self.state.last_calculation()
    }

    /// Captures both output strings
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.state.display.clone(),
            last_calculation: self.state.last_calculation.clone(),
        }
    }

    /// Handles one key event from the input-dispatch layer.
    ///
    /// Tokens that are not valid for `key_type` are logged and ignored.
    pub fn handle_key(&mut self, value: &str, key_type: KeyType) {
        match Key::parse(value, key_type) {
            Ok(key) => self.press(key),
            Err(err) => warn!(%err, ?key_type, "ignoring key"),
        }
    }

    /// Applies an already-typed key
    pub fn press(&mut self, key: Key) {
        trace!(?key, "key pressed");
        match key {
            Key::Digit(_) | Key::Decimal => {
                if let Some(ch) = key.to_char() {
                    self.input_number(ch);
                }
            }
            Key::Operator(op) => self.input_operator(op),
            Key::Equals => self.commit(),
            Key::Function(function) => self.input_function(function),
        }
    }

    fn input_number(&mut self, ch: char) {
        let state = &mut self.state;

        if state.waiting_for_operand && state.operator.is_none() {
            state.last_calculation.clear();
        }

        if state.waiting_for_operand {
            state.display = if ch == '.' {
                "0.".to_string()
            } else {
                ch.to_string()
            };
            state.waiting_for_operand = false;
            return;
        }

        if ch == '.' && state.display.contains('.') {
            return;
        }
        if state.display.chars().count() >= self.config.max_input_len {
            return;
        }

        if state.display == INITIAL_DISPLAY && ch != '.' {
            state.display = ch.to_string();
        } else {
            state.display.push(ch);
        }
    }

    fn input_operator(&mut self, op: Operator) {
        self.state.last_calculation.clear();

        if self.state.operator.is_some() && self.state.waiting_for_operand {
            debug!(%op, "replacing pending operator");
            self.state.operator = Some(op);
            return;
        }

        let Some(current) = parse_display(&self.state.display) else {
            debug!(%op, display = %self.state.display, "operator ignored, no operand");
            return;
        };

        match (self.state.previous_value, self.state.operator) {
            (None, _) => self.state.previous_value = Some(current),
            (Some(previous), Some(pending)) => match self.evaluate(previous, pending, current) {
                Ok(result) => {
                    debug!(previous, %pending, current, result, "chained evaluation");
                    self.state.previous_value = Some(result);
                    self.state.display = render_number(result);
                }
                Err(err) => {
                    self.fail(err);
                    return;
                }
            },
            (Some(_), None) => {}
        }

        self.state.waiting_for_operand = true;
        self.state.operator = Some(op);
    }

    fn commit(&mut self) {
        let (Some(previous), Some(op)) = (self.state.previous_value, self.state.operator) else {
            trace!("commit ignored, nothing pending");
            return;
        };
        let Some(current) = parse_display(&self.state.display) else {
            return;
        };

        self.state.last_calculation = format!(
            "{} {} {}",
            render_number(previous),
            op.glyph(),
            render_number(current)
        );

        let outcome = self
            .evaluate(previous, op, current)
            .map(|result| round_significant(result, self.config.display_precision));

        match outcome {
            Ok(result) => {
                debug!(calculation = %self.state.last_calculation, result, "committed");
                self.state.display = render_number(result);
                self.state.previous_value = None;
                self.state.operator = None;
                self.state.waiting_for_operand = true;
            }
            Err(err) => self.fail(err),
        }
    }

    fn input_function(&mut self, function: FunctionKey) {
        match function {
            FunctionKey::AllClear => {
                debug!("all clear");
                self.state = EngineState::default();
            }
            FunctionKey::ToggleSign => {
                // Sign flips textually so a half-typed "5." keeps its point
                match parse_display(&self.state.display) {
                    Some(value) if value != 0.0 => {
                        self.state.display = match self.state.display.strip_prefix('-') {
                            Some(magnitude) => magnitude.to_string(),
                            None => format!("-{}", self.state.display),
                        };
                    }
                    _ => {}
                }
            }
            FunctionKey::Percent => {
                if let Some(value) = parse_display(&self.state.display) {
                    let percent = round_significant(value / 100.0, self.config.internal_precision);
                    self.state.display = render_number(percent);
                    self.state.waiting_for_operand = true;
                }
            }
        }
    }

    fn evaluate(&self, lhs: f64, op: Operator, rhs: f64) -> CalcResult<f64> {
        op.apply(lhs, rhs)
            .map(|result| round_significant(result, self.config.internal_precision))
    }

    /// Shows the error sentinel and drops the pending operation
    fn fail(&mut self, err: EvalError) {
        debug!(%err, "evaluation failed");
        self.state.display = ERROR_DISPLAY.to_string();
        self.state.previous_value = None;
        self.state.operator = None;
        self.state.waiting_for_operand = true;
    }
}
