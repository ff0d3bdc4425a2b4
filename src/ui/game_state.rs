//! Game session behind the desktop board

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::board::{Player, Pos};
use crate::engine::{IllegalMovePolicy, Move, Renju};
use crate::error::MoveError;
use crate::solver::RandomSolver;

/// Who sits at the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs built-in solver
    VsSolver { human: Player },
    /// Player vs Player (hotseat)
    Hotseat,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::VsSolver {
            human: Player::First,
        }
    }
}

/// Time spent on the current move
pub struct MoveTimer {
    start_time: Instant,
    pub last_move_duration: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            last_move_duration: None,
        }
    }
}

impl MoveTimer {
    pub fn restart(&mut self) {
        self.last_move_duration = Some(self.elapsed());
        self.start_time = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// One game on the desktop board
pub struct Session {
    pub renju: Renju,
    pub mode: GameMode,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    solver: RandomSolver,
}

impl Session {
    pub fn new(mode: GameMode, policy: IllegalMovePolicy) -> Self {
        Self {
            renju: Renju::with_policy(policy),
            mode,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            solver: RandomSolver::new(None),
        }
    }

    /// Same mode and policy, empty board
    pub fn reset(&mut self) {
        self.renju.reset();
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::VsSolver { human } => self.renju.putter() == human,
            GameMode::Hotseat => true,
        }
    }

    pub fn is_solver_turn(&self) -> bool {
        !self.renju.finished() && !self.is_human_turn()
    }

    /// Play a clicked point for the human to move.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.renju.finished() {
            return Err("Game is over".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        self.apply(pos)
    }

    fn apply(&mut self, pos: Pos) -> Result<(), String> {
        let putter = self.renju.putter();
        match self.renju.add_move(Move::at(pos)) {
            Ok(()) => {
                debug!(%putter, %pos, "Stone placed");
                self.after_turn();
                Ok(())
            }
            // The game is over; say why instead of treating it as a failure.
            Err(err @ MoveError::ForbiddenMove { .. }) => {
                info!(%putter, %pos, %err, "Forbidden move");
                self.after_turn();
                self.message = Some(err.to_string());
                Ok(())
            }
            Err(err) => Err(err.to_string()),
        }
    }

    fn after_turn(&mut self) {
        self.suggested_move = None;
        self.message = None;
        self.move_timer.restart();
        if let Some(winner) = self.renju.winner() {
            info!(%winner, turn = self.renju.turn(), "Game over");
        }
    }

    /// Let the solver move if it is its turn. Passes when it has no move.
    pub fn play_solver_turn(&mut self) {
        if !self.is_solver_turn() {
            return;
        }
        match self.solver.choose(&self.renju) {
            Some(pos) => {
                if let Err(msg) = self.apply(pos) {
                    self.message = Some(msg);
                }
            }
            None => {
                if self.renju.pass_turn().is_ok() {
                    self.message = Some("Solver passed".to_string());
                }
            }
        }
    }

    /// Mark a point for the human to move: a winning point if there is
    /// one, otherwise whatever the solver would play.
    pub fn request_suggestion(&mut self) {
        if self.renju.finished() || !self.is_human_turn() {
            return;
        }
        let mut hinter = self.solver.clone();
        self.suggested_move = hinter.choose(&self.renju);
        if self.suggested_move.is_none() {
            self.message = Some("No legal move".to_string());
        }
    }

    /// Take back the last move, and the solver's reply before it when
    /// playing against the solver.
    pub fn undo(&mut self) {
        let count = match self.mode {
            GameMode::VsSolver { human } if self.renju.turn() >= 2 => {
                // Back to the human's turn.
                if self.renju.putter() == human { 2 } else { 1 }
            }
            _ => 1,
        };

        for _ in 0..count {
            if self.renju.undo().is_err() {
                break;
            }
        }
        self.suggested_move = None;
        self.message = None;
        self.move_timer = MoveTimer::default();
    }

    /// Short line for the turn card
    pub fn status(&self) -> String {
        if self.renju.finished() {
            return match self.renju.winner() {
                Some(winner) => format!("{winner} wins"),
                None => "Game over".to_string(),
            };
        }
        if self.is_human_turn() {
            "Your turn".to_string()
        } else {
            "Solver to move".to_string()
        }
    }
}
