//! Calc CLI: press calculator keys from the command line
//!
//! ## Usage
//!
//! ```bash
//! calc 5 + 3 =              # prints "5 + 3" then "8"
//! calc --json 5 0 %         # {"display":"0.5","last_calculation":""}
//! echo "3 6 + 6 =" | calc   # one key sequence per line
//! ```

use calc_cli::{run, Cli};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    match run(&cli, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` count
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
