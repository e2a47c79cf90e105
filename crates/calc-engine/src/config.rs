//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Highest significant-digit count an `f64` can meaningfully carry
const MAX_PRECISION: usize = 17;

/// Tunables for the calculator engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum display length while typing a number
    pub max_input_len: usize,
    /// Significant digits of a committed result
    pub display_precision: usize,
    /// Significant digits kept after every evaluation
    pub internal_precision: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_len: Self::DEFAULT_MAX_INPUT_LEN,
            display_precision: Self::DEFAULT_DISPLAY_PRECISION,
            internal_precision: Self::DEFAULT_INTERNAL_PRECISION,
        }
    }
}

impl EngineConfig {
    /// Default input cap
    pub const DEFAULT_MAX_INPUT_LEN: usize = 9;
    /// Default display precision
    pub const DEFAULT_DISPLAY_PRECISION: usize = 9;
    /// Default internal precision
    pub const DEFAULT_INTERNAL_PRECISION: usize = 15;

    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input cap
    #[must_use]
    pub const fn with_max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = len;
        self
    }

    /// Set the display precision
    #[must_use]
    pub const fn with_display_precision(mut self, digits: usize) -> Self {
        self.display_precision = digits;
        self
    }

    /// Set the internal precision
    #[must_use]
    pub const fn with_internal_precision(mut self, digits: usize) -> Self {
        self.internal_precision = digits;
        self
    }

    /// Parses a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field is within range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_len == 0 {
            return Err(ConfigError::InvalidInputLength(self.max_input_len));
        }
        for (field, value) in [
            ("display_precision", self.display_precision),
            ("internal_precision", self.internal_precision),
        ] {
            if !(1..=MAX_PRECISION).contains(&value) {
                return Err(ConfigError::InvalidPrecision { field, value });
            }
        }
        Ok(())
    }
}
