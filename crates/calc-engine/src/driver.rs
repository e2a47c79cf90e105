//! Calculator driver and reusable behaviour suites
//!
//! A [`CalculatorDriver`] presses labelled buttons and reads back the two
//! display strings, whatever sits behind it. The `verify_*` functions are
//! written once against the trait and run against any driver: the in-process
//! [`EngineDriver`] here, or a rendering layer's own driver.

use crate::core::{Engine, FunctionKey, Key};
use crate::error::KeyError;
use crate::keypad::Keypad;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use calc_engine::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.press_all(&["5", "+", "3", "="]).unwrap();
/// assert_eq!(driver.display(), "8");
/// assert_eq!(driver.last_calculation(), "5 + 3");
/// ```
pub trait CalculatorDriver {
    /// Presses the button with the given label
    fn press(&mut self, label: &str) -> Result<(), KeyError>;

    /// Presses several buttons in order
    fn press_all(&mut self, labels: &[&str]) -> Result<(), KeyError> {
        for label in labels {
            self.press(label)?;
        }
        Ok(())
    }

    /// Gets the main display text
    fn display(&self) -> String;

    /// Gets the last-calculation line
    fn last_calculation(&self) -> String;

    /// Resets the calculator (AC)
    fn clear(&mut self);
}

/// Driver that talks to an [`Engine`] directly through the standard keypad
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: Engine,
    keypad: Keypad,
}

impl EngineDriver {
    /// Creates a driver around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver around an existing engine
    #[must_use]
    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            keypad: Keypad::standard(),
        }
    }

    /// Returns a reference to the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns a mutable reference to the underlying engine
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, label: &str) -> Result<(), KeyError> {
        self.keypad.press(&mut self.engine, label)
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn last_calculation(&self) -> String {
        self.engine.last_calculation().to_string()
    }

    fn clear(&mut self) {
        self.engine.press(Key::Function(FunctionKey::AllClear));
    }
}

// ===== Reusable behaviour suites =====
// These work with ANY CalculatorDriver implementation

/// Verifies the display starts at "0" with no history
pub fn verify_initial_display<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.last_calculation(), "");
}

/// Verifies digits concatenate on the display
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> Result<(), KeyError> {
    driver.clear();
    driver.press_all(&["7", "8", "9"])?;
    assert_eq!(driver.display(), "789");
    driver.clear();
    Ok(())
}

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> Result<(), KeyError> {
    let cases: [(&[&str], &str); 4] = [
        (&["5", "+", "3", "="], "8"),
        (&["9", "\u{2212}", "4", "="], "5"),
        (&["6", "\u{d7}", "2", "="], "12"),
        (&["8", "\u{f7}", "4", "="], "2"),
    ];

    for (keys, expected) in cases {
        driver.clear();
        driver.press_all(keys)?;
        assert_eq!(driver.display(), expected, "keys {keys:?}");
    }
    driver.clear();
    Ok(())
}

/// Verifies AC resets a half-entered calculation
pub fn verify_all_clear<D: CalculatorDriver>(driver: &mut D) -> Result<(), KeyError> {
    driver.clear();
    driver.press_all(&["5", "+", "3", "AC"])?;
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.last_calculation(), "");

    // Nothing pending: '=' must do nothing
    driver.press("=")?;
    assert_eq!(driver.display(), "0");
    Ok(())
}

/// Verifies sign toggling is its own inverse
pub fn verify_toggle_sign<D: CalculatorDriver>(driver: &mut D) -> Result<(), KeyError> {
    driver.clear();
    driver.press_all(&["5", "\u{b1}"])?;
    assert_eq!(driver.display(), "-5");
    driver.press("\u{b1}")?;
    assert_eq!(driver.display(), "5");
    driver.clear();
    Ok(())
}

/// Verifies percent divides the display by 100
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) -> Result<(), KeyError> {
    driver.clear();
    driver.press_all(&["5", "0", "%"])?;
    assert_eq!(driver.display(), "0.5");
    driver.clear();
    Ok(())
}

/// Verifies division by zero shows "Error" and recovers on the next digit
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> Result<(), KeyError> {
    driver.clear();
    driver.press_all(&["5", "\u{f7}", "0", "="])?;
    assert_eq!(driver.display(), "Error");

    driver.press("7")?;
    assert_eq!(driver.display(), "7");
    driver.clear();
    Ok(())
}

/// Verifies the last-calculation line and its clearing on new input
pub fn verify_calculation_history<D: CalculatorDriver>(driver: &mut D) -> Result<(), KeyError> {
    driver.clear();
    assert_eq!(driver.last_calculation(), "");

    driver.press_all(&["3", "6", "+", "6", "="])?;
    assert_eq!(driver.display(), "42");
    assert_eq!(driver.last_calculation(), "36 + 6");

    driver.clear();
    driver.press_all(&["1", "0", "\u{2212}", "2", "="])?;
    assert_eq!(driver.last_calculation(), "10 \u{2212} 2");

    driver.press("7")?;
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.last_calculation(), "");
    driver.clear();
    Ok(())
}

/// Verifies float noise never reaches the display
pub fn verify_precision<D: CalculatorDriver>(driver: &mut D) -> Result<(), KeyError> {
    driver.clear();
    driver.press_all(&["0", ".", "1", "+", "0", ".", "2", "="])?;
    assert_eq!(driver.display(), "0.3");
    driver.clear();
    Ok(())
}

/// Runs every suite above
pub fn run_all_suites<D: CalculatorDriver>(driver: &mut D) -> Result<(), KeyError> {
    verify_initial_display(driver);
    verify_digit_entry(driver)?;
    verify_basic_arithmetic(driver)?;
    verify_all_clear(driver)?;
    verify_toggle_sign(driver)?;
    verify_percent(driver)?;
    verify_division_by_zero(driver)?;
    verify_calculation_history(driver)?;
    verify_precision(driver)?;
    Ok(())
}
