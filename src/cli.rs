//! Command-line interfaces for the binaries.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::driver::DriverConfig;
use crate::engine::IllegalMovePolicy;

/// How an illegal move is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PolicyArg {
    /// The player who made it loses
    #[default]
    Lose,
    /// The move is refused and the player tries again
    Reject,
}

impl From<PolicyArg> for IllegalMovePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Lose => IllegalMovePolicy::LoseOnIllegal,
            PolicyArg::Reject => IllegalMovePolicy::RejectIllegal,
        }
    }
}

/// Play a game of Renju in the terminal
#[derive(Parser, Debug)]
#[command(name = "renju")]
#[command(about = "Renju referee for humans and move-generating programs", long_about = None)]
#[command(version)]
pub struct DriverArgs {
    /// Command that plays First (omit for a human, `builtin` for the built-in solver)
    #[arg(short, long)]
    pub first: Option<String>,

    /// Command that plays Second (omit for a human, `builtin` for the built-in solver)
    #[arg(short, long)]
    pub second: Option<String>,

    /// Transcript file, truncated at start
    #[arg(short, long, default_value = "./score_sheet.txt")]
    pub out: PathBuf,

    /// What happens to an illegal move
    #[arg(long, value_enum, default_value_t = PolicyArg::Lose)]
    pub policy: PolicyArg,

    /// Milliseconds the board is shown before a program moves
    #[arg(long, default_value = "500")]
    pub delay_ms: u64,

    /// Rejected program moves tolerated per turn before giving up
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: u32,

    /// Don't draw anything; both players must be programs
    #[arg(long)]
    pub headless: bool,

    /// Seed for the built-in solver
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs here instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl DriverArgs {
    pub fn config(&self) -> DriverConfig {
        DriverConfig {
            out: self.out.clone(),
            policy: self.policy.into(),
            delay: Duration::from_millis(self.delay_ms),
            max_attempts: self.max_attempts,
            headless: self.headless,
        }
    }

    /// `true` if either seat is left to a human.
    pub fn has_human(&self) -> bool {
        self.first.is_none() || self.second.is_none()
    }
}

/// Reference move generator: reads a transcript, prints "X Y"
#[derive(Parser, Debug)]
#[command(name = "random-solver")]
#[command(version)]
pub struct SolverArgs {
    /// Transcript of the game so far
    pub transcript: PathBuf,

    /// RNG seed for reproducible choices
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Desktop Renju board
#[derive(Parser, Debug)]
#[command(name = "renju-gui")]
#[command(version)]
pub struct GuiArgs {
    /// What happens to an illegal move
    #[arg(long, value_enum, default_value_t = PolicyArg::Reject)]
    pub policy: PolicyArg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_defaults() {
        let args = DriverArgs::try_parse_from(["renju"]).unwrap();
        assert!(args.has_human());
        assert!(!args.headless);

        let config = args.config();
        assert_eq!(config, DriverConfig::default());
    }

    #[test]
    fn test_driver_flags() {
        let args = DriverArgs::try_parse_from([
            "renju",
            "-f",
            "python3 gen.py",
            "--second",
            "builtin",
            "-o",
            "game.txt",
            "--policy",
            "reject",
            "--delay-ms",
            "0",
            "--max-attempts",
            "5",
            "--headless",
            "--seed",
            "9",
        ])
        .unwrap();

        assert_eq!(args.first.as_deref(), Some("python3 gen.py"));
        assert_eq!(args.second.as_deref(), Some("builtin"));
        assert!(!args.has_human());
        assert_eq!(args.seed, Some(9));

        let config = args.config();
        assert_eq!(config.out, PathBuf::from("game.txt"));
        assert_eq!(config.policy, IllegalMovePolicy::RejectIllegal);
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.max_attempts, 5);
        assert!(config.headless);
    }

    #[test]
    fn test_bad_policy_rejected() {
        assert!(DriverArgs::try_parse_from(["renju", "--policy", "maybe"]).is_err());
        assert!(DriverArgs::try_parse_from(["renju", "--max-attempts", "0"]).is_err());
    }

    #[test]
    fn test_solver_args() {
        let args = SolverArgs::try_parse_from(["random-solver", "sheet.txt", "--seed", "3"]).unwrap();
        assert_eq!(args.transcript, PathBuf::from("sheet.txt"));
        assert_eq!(args.seed, Some(3));
        assert!(SolverArgs::try_parse_from(["random-solver"]).is_err());
    }

    #[test]
    fn test_gui_args() {
        let args = GuiArgs::try_parse_from(["renju-gui"]).unwrap();
        assert_eq!(IllegalMovePolicy::from(args.policy), IllegalMovePolicy::RejectIllegal);
    }
}
