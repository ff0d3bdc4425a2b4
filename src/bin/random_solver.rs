//! Reference move generator
//!
//! Reads the transcript named on the command line and prints the chosen
//! point as "X Y". Prints nothing when the player to move has no legal
//! point, which the driver treats as a pass.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use renju::cli::SolverArgs;
use renju::solver::RandomSolver;
use renju::{logging, transcript, IllegalMovePolicy};

fn main() -> Result<()> {
    let args = SolverArgs::parse();
    logging::init(None)?;

    let renju = transcript::load(&args.transcript, IllegalMovePolicy::LoseOnIllegal)
        .with_context(|| format!("failed to load {}", args.transcript.display()))?;
    debug!(turn = renju.turn(), putter = %renju.putter(), "Position loaded");

    if let Some(pos) = RandomSolver::new(args.seed).choose(&renju) {
        println!("{} {}", pos.row(), pos.col());
    }
    Ok(())
}
