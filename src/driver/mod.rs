//! Turn-loop driver
//!
//! Alternates between the two seats until the game ends, applying every
//! move through [`Renju::add_move`] and rewriting the transcript after each
//! turn. Seats are either a human at the terminal (through a [`Frontend`])
//! or a program ([`MoveSource`]).

pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::{info, instrument, warn};

use crate::board::{Player, Pos};
use crate::engine::{IllegalMovePolicy, Move, Renju};
use crate::error::MoveError;
use crate::transcript;

pub use sources::{BuiltinSolver, ExternalProgram, MoveSource, Reply};

/// Seat argument that selects the in-process solver
pub const BUILTIN: &str = "builtin";

/// Driver settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Transcript path, truncated at start
    pub out: PathBuf,
    pub policy: IllegalMovePolicy,
    /// How long the board stays up before a program moves
    pub delay: Duration,
    /// Rejected program moves tolerated per turn
    pub max_attempts: u32,
    pub headless: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            out: PathBuf::from("./score_sheet.txt"),
            policy: IllegalMovePolicy::default(),
            delay: Duration::from_millis(500),
            max_attempts: 3,
            headless: false,
        }
    }
}

/// How long a passive view stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    Delay(Duration),
    UntilEnter,
}

/// Where the board is shown and human moves come from.
pub trait Frontend {
    /// Show the board without taking a move.
    fn show(&mut self, renju: &Renju, pause: Pause) -> Result<()>;

    /// Let a human pick a legal point for the putter. `None` means quit.
    fn prompt(&mut self, renju: &Renju) -> Result<Option<Pos>>;
}

/// No display at all; only program seats can play.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Frontend for Headless {
    fn show(&mut self, _renju: &Renju, _pause: Pause) -> Result<()> {
        Ok(())
    }

    fn prompt(&mut self, renju: &Renju) -> Result<Option<Pos>> {
        bail!("{} is a human seat but there is no terminal", renju.putter())
    }
}

/// Who plays one colour
pub enum Seat {
    Human,
    Program(Box<dyn MoveSource>),
}

impl Seat {
    /// Seat from a command-line value: omitted is a human, `builtin` the
    /// reference solver, anything else an external command.
    pub fn from_arg(arg: Option<&str>, seed: Option<u64>) -> Self {
        match arg {
            None => Seat::Human,
            Some(BUILTIN) => Seat::Program(Box::new(BuiltinSolver::new(seed))),
            Some(command) => Seat::Program(Box::new(ExternalProgram::new(command))),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Seat::Human)
    }

    fn name(&self) -> &str {
        match self {
            Seat::Human => "human",
            Seat::Program(source) => source.name(),
        }
    }
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat({})", self.name())
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game finished; `winner` is `None` only if the engine set none.
    Finished { winner: Option<Player>, turns: usize },
    /// Both players passed in a row, so nobody can move.
    Stalled { turns: usize },
    /// A human quit from the prompt.
    Quit,
}

enum TurnEnd {
    Played,
    Passed,
    Quit,
}

/// Runs one game between two seats
pub struct Driver<F: Frontend> {
    config: DriverConfig,
    renju: Renju,
    seats: [Seat; 2],
    frontend: F,
}

impl<F: Frontend> Driver<F> {
    pub fn new(config: DriverConfig, first: Seat, second: Seat, frontend: F) -> Self {
        let renju = Renju::with_policy(config.policy);
        Self {
            config,
            renju,
            seats: [first, second],
            frontend,
        }
    }

    pub fn renju(&self) -> &Renju {
        &self.renju
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    fn seat_index(player: Player) -> usize {
        match player {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    fn save(&self) -> Result<()> {
        transcript::dump(&self.config.out, &self.renju)
            .with_context(|| format!("failed to write {}", self.config.out.display()))
    }

    /// Play one game to the end.
    #[instrument(
        skip_all,
        fields(
            out = %self.config.out.display(),
            policy = ?self.config.policy,
            first = self.seats[0].name(),
            second = self.seats[1].name(),
        )
    )]
    pub fn run(&mut self) -> Result<Outcome> {
        self.renju.reset();
        self.save()?;
        info!("Game started");

        let mut passes = 0;
        while !self.renju.finished() {
            match self.play_turn()? {
                TurnEnd::Quit => {
                    info!(turn = self.renju.turn(), "Player quit");
                    return Ok(Outcome::Quit);
                }
                TurnEnd::Passed => passes += 1,
                TurnEnd::Played => passes = 0,
            }
            self.save()?;

            if passes >= 2 {
                warn!(turn = self.renju.turn(), "Both players passed, stopping");
                self.frontend.show(&self.renju, Pause::UntilEnter)?;
                return Ok(Outcome::Stalled {
                    turns: self.renju.turn(),
                });
            }
        }

        self.frontend.show(&self.renju, Pause::UntilEnter)?;
        let winner = self.renju.winner();
        let turns = self.renju.turn();
        match winner {
            Some(winner) => info!(%winner, turns, "Game finished"),
            None => info!(turns, "Game finished without a winner"),
        }
        Ok(Outcome::Finished { winner, turns })
    }

    fn play_turn(&mut self) -> Result<TurnEnd> {
        let putter = self.renju.putter();
        let seat = &mut self.seats[Self::seat_index(putter)];
        let mut attempts = 0;

        loop {
            let reply = match seat {
                // Nothing to confirm, so the human passes without a prompt.
                Seat::Human if self.renju.legal_moves().next().is_none() => {
                    self.frontend
                        .show(&self.renju, Pause::Delay(self.config.delay))?;
                    Reply::Pass
                }
                Seat::Human => match self.frontend.prompt(&self.renju)? {
                    Some(pos) => Reply::Place(pos),
                    None => return Ok(TurnEnd::Quit),
                },
                Seat::Program(source) => {
                    self.frontend
                        .show(&self.renju, Pause::Delay(self.config.delay))?;
                    source
                        .next_move(&self.renju, &self.config.out)
                        .with_context(|| format!("{putter} ({}) failed to move", source.name()))?
                }
            };

            let pos = match reply {
                Reply::Place(pos) => pos,
                Reply::Pass => {
                    self.renju.pass_turn()?;
                    info!(%putter, turn = self.renju.turn(), "Pass");
                    return Ok(TurnEnd::Passed);
                }
            };

            match self.renju.add_move(Move::at(pos)) {
                Ok(()) => {
                    info!(%putter, %pos, turn = self.renju.turn(), "Stone placed");
                    return Ok(TurnEnd::Played);
                }
                Err(MoveError::ForbiddenMove { reason, winner, .. }) => {
                    warn!(%putter, %pos, %reason, %winner, "Illegal move loses the game");
                    return Ok(TurnEnd::Played);
                }
                Err(MoveError::IllegalPosition { reason, .. }) => {
                    attempts += 1;
                    warn!(%putter, %pos, %reason, attempts, "Move rejected");
                    if !seat.is_human() && attempts >= self.config.max_attempts {
                        bail!("{putter} made {attempts} illegal moves in a row, last at {pos}: {reason}");
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DriverConfig::default();
        assert_eq!(config.out, PathBuf::from("./score_sheet.txt"));
        assert_eq!(config.policy, IllegalMovePolicy::LoseOnIllegal);
        assert_eq!(config.max_attempts, 3);
        assert!(!config.headless);
    }

    #[test]
    fn test_seat_from_arg() {
        assert!(Seat::from_arg(None, None).is_human());
        assert_eq!(format!("{:?}", Seat::from_arg(Some("builtin"), Some(1))), "Seat(builtin)");
        assert_eq!(
            format!("{:?}", Seat::from_arg(Some("python3 gen.py"), None)),
            "Seat(python3 gen.py)"
        );
    }

    #[test]
    fn test_headless_cannot_prompt() {
        assert!(Headless.prompt(&Renju::new()).is_err());
        assert!(Headless.show(&Renju::new(), Pause::UntilEnter).is_ok());
    }

    #[test]
    fn test_builtin_game_finishes() {
        let dir = tempfile::tempdir().unwrap();
        let config = DriverConfig {
            out: dir.path().join("sheet.txt"),
            delay: Duration::ZERO,
            headless: true,
            ..DriverConfig::default()
        };
        let mut driver = Driver::new(
            config,
            Seat::from_arg(Some(BUILTIN), Some(1)),
            Seat::from_arg(Some(BUILTIN), Some(2)),
            Headless,
        );

        let outcome = driver.run().unwrap();
        let renju = driver.renju();
        assert!(matches!(
            outcome,
            Outcome::Finished { .. } | Outcome::Stalled { .. }
        ));

        let saved = transcript::load(&driver.config().out, renju.policy()).unwrap();
        assert_eq!(saved.history(), renju.history());
    }
}
