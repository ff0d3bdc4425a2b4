//! Non-interactive move sources.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::{debug, instrument, warn};

use crate::board::Pos;
use crate::engine::Renju;
use crate::solver::RandomSolver;

/// What a source wants to do with its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Place(Pos),
    Pass,
}

/// A program-controlled seat.
pub trait MoveSource {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Produce a move for `renju.putter()`.
    ///
    /// `transcript` has already been written with the current history.
    fn next_move(&mut self, renju: &Renju, transcript: &Path) -> Result<Reply>;
}

/// Parse a move generator's stdout: exactly two whitespace-separated
/// integers, row then column.
pub fn parse_reply(stdout: &str) -> Result<Pos> {
    let numbers = stdout
        .split_whitespace()
        .map(|tok| {
            tok.parse::<i32>()
                .with_context(|| format!("not an integer: {tok:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let [row, col] = numbers.as_slice() else {
        bail!("expected \"X Y\", got {:?}", stdout.trim());
    };
    Ok(Pos::new(*row, *col)?)
}

/// External move generator.
///
/// The command line is split on whitespace and run with the transcript path
/// appended as the last argument. Empty output is a pass.
#[derive(Debug, Clone)]
pub struct ExternalProgram {
    command: String,
}

impl ExternalProgram {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl MoveSource for ExternalProgram {
    fn name(&self) -> &str {
        &self.command
    }

    #[instrument(skip_all, fields(command = %self.command, turn = renju.turn()))]
    fn next_move(&mut self, renju: &Renju, transcript: &Path) -> Result<Reply> {
        let mut parts = self.command.split_whitespace();
        let Some(program) = parts.next() else {
            bail!("empty move generator command");
        };

        let output = Command::new(program)
            .args(parts)
            .arg(transcript)
            .output()
            .with_context(|| format!("failed to run move generator {:?}", self.command))?;

        if !output.status.success() {
            warn!(
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "Move generator exited with failure"
            );
            bail!("move generator {:?} exited with {}", self.command, output.status);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            debug!("Move generator passed");
            return Ok(Reply::Pass);
        }
        let pos = parse_reply(&stdout)
            .with_context(|| format!("bad reply from move generator {:?}", self.command))?;
        debug!(%pos, "Move generator replied");
        Ok(Reply::Place(pos))
    }
}

/// The reference solver, run in-process.
#[derive(Debug, Clone)]
pub struct BuiltinSolver {
    solver: RandomSolver,
}

impl BuiltinSolver {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            solver: RandomSolver::new(seed),
        }
    }
}

impl MoveSource for BuiltinSolver {
    fn name(&self) -> &str {
        "builtin"
    }

    fn next_move(&mut self, renju: &Renju, _transcript: &Path) -> Result<Reply> {
        Ok(self
            .solver
            .choose(renju)
            .map_or(Reply::Pass, Reply::Place))
    }
}
