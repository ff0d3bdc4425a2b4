//! Renju referee
//!
//! Runs one game between humans at the terminal and move-generating
//! programs, keeping the transcript up to date after every turn.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;

use renju::cli::DriverArgs;
use renju::driver::{Driver, Headless, Outcome, Seat};
use renju::logging;
use renju::tui::TerminalFrontend;

/// Log file used on the terminal board when `--log-file` is not given
const TUI_LOG_FILE: &str = "renju.log";

fn main() -> Result<ExitCode> {
    let args = DriverArgs::parse();
    // stderr would draw over the alternate screen.
    let log_file = match (&args.log_file, args.headless) {
        (Some(path), _) => Some(path.clone()),
        (None, false) => Some(PathBuf::from(TUI_LOG_FILE)),
        (None, true) => None,
    };
    logging::init(log_file.as_deref())?;

    if args.headless && args.has_human() {
        bail!("--headless needs a program for both --first and --second");
    }

    let config = args.config();
    let first = Seat::from_arg(args.first.as_deref(), args.seed);
    // Different stream for the second seat when both are the built-in solver.
    let second = Seat::from_arg(args.second.as_deref(), args.seed.map(|s| s.wrapping_add(1)));

    let outcome = if config.headless {
        Driver::new(config, first, second, Headless).run()?
    } else {
        let frontend = TerminalFrontend::new()?;
        // The frontend is dropped with the driver, restoring the terminal
        // before anything is printed.
        Driver::new(config, first, second, frontend).run()?
    };

    info!(?outcome, "Run complete");
    match outcome {
        Outcome::Finished { winner, turns } => {
            match winner {
                Some(winner) => println!("{winner} wins after {turns} turns"),
                None => println!("Game over after {turns} turns"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Stalled { turns } => {
            println!("No moves left after {turns} turns");
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Quit => {
            eprintln!("Game aborted");
            Ok(ExitCode::FAILURE)
        }
    }
}
