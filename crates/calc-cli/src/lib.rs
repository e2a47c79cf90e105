//! Calc CLI Library
//!
//! Command-line input-dispatch layer for the calculator engine: maps typed
//! keypad labels to key events and prints the two displays.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod error;
mod session;

pub use commands::Cli;
pub use error::{CliError, CliResult};
pub use session::{load_config, OutputFormat, Session};

use std::io::{BufRead, Write};

/// Runs the CLI: keys from the command line, or one sequence per input line
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> CliResult<()> {
    let config = load_config(cli.config.as_deref())?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut session = Session::new(config, format)?;

    match cli.key_sequence() {
        Some(keys) => {
            session.apply(&keys)?;
            writeln!(out, "{}", session.render()?)?;
            Ok(())
        }
        None => session.run_lines(input, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_to_string(args: &[&str], input: &str) -> CliResult<String> {
        let cli = Cli::parse_from(args);
        let mut out = Vec::new();
        run(&cli, input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_with_keys() {
        let out = run_to_string(&["calc", "6", "x", "2", "="], "").unwrap();
        assert_eq!(out, "6 × 2\n12\n");
    }

    #[test]
    fn test_run_keys_in_one_argument() {
        let out = run_to_string(&["calc", "9 - 4 ="], "").unwrap();
        assert_eq!(out, "9 − 4\n5\n");
    }

    #[test]
    fn test_run_from_input_lines() {
        let out = run_to_string(&["calc"], "5 / 0 =\n7\n").unwrap();
        assert_eq!(out, "5 ÷ 0\nError\n7\n");
    }

    #[test]
    fn test_run_json() {
        let out = run_to_string(&["calc", "--json", "5", "0", "%"], "").unwrap();
        assert_eq!(out, "{\"display\":\"0.5\",\"last_calculation\":\"\"}\n");
    }
}
