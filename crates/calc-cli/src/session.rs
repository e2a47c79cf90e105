//! Keypad session: feeds key sequences to one engine and renders its output

use calc_engine::config::EngineConfig;
use calc_engine::core::Engine;
use calc_engine::keypad::Keypad;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::error::CliResult;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Last calculation (when present) above the display
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

/// Loads an engine configuration, falling back to defaults without a path
pub fn load_config(path: Option<&Path>) -> CliResult<EngineConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let config = EngineConfig::from_json(&text)?;
            info!(path = %path.display(), ?config, "loaded config");
            Ok(config)
        }
        None => Ok(EngineConfig::default()),
    }
}

/// One calculator engine driven through the standard keypad
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    keypad: Keypad,
    format: OutputFormat,
}

impl Session {
    /// Creates a session with a validated configuration
    pub fn new(config: EngineConfig, format: OutputFormat) -> CliResult<Self> {
        Ok(Self {
            engine: Engine::with_config(config)?,
            keypad: Keypad::standard(),
            format,
        })
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Presses a whitespace-separated key sequence
    pub fn apply(&mut self, keys: &str) -> CliResult<()> {
        debug!(keys, "applying key sequence");
        self.keypad.press_sequence(&mut self.engine, keys)?;
        Ok(())
    }

    /// Renders the current displays
    pub fn render(&self) -> CliResult<String> {
        match self.format {
            OutputFormat::Text => {
                let last = self.engine.last_calculation();
                if last.is_empty() {
                    Ok(self.engine.display().to_string())
                } else {
                    Ok(format!("{last}\n{}", self.engine.display()))
                }
            }
            OutputFormat::Json => Ok(serde_json::to_string(&self.engine.snapshot())?),
        }
    }

    /// Applies one key sequence per input line, printing after each.
    ///
    /// Blank lines are skipped.
    pub fn run_lines<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> CliResult<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            self.apply(&line)?;
            writeln!(out, "{}", self.render()?)?;
        }
        Ok(())
    }
}
