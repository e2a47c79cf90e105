//! CLI argument definitions

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Four-function keypad calculator
#[derive(Parser, Debug)]
#[command(name = "calc", version, about = "Four-function keypad calculator")]
#[command(after_help = "Keys are keypad labels or values: 0-9 . + - x * / = AC +/- %\n\
                        With no KEYS, each stdin line is a key sequence.")]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the displays as JSON
    #[arg(long)]
    pub json: bool,

    /// Engine configuration file (JSON)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keys to press, e.g. `5 + 3 =`
    #[arg(allow_hyphen_values = true, value_name = "KEYS")]
    pub keys: Vec<String>,
}

impl Cli {
    /// Joins the positional keys into a single key sequence
    #[must_use]
    pub fn key_sequence(&self) -> Option<String> {
        if self.keys.is_empty() {
            None
        } else {
            Some(self.keys.join(" "))
        }
    }
}
