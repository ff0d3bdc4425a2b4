//! Renju rule engine
//!
//! [`Renju`] is the whole game state: the board, the ordered move history,
//! and the terminal flags. It is changed only through [`Renju::add_move`],
//! [`Renju::pass_turn`], [`Renju::undo`] and [`Renju::reset`]; every call
//! runs to completion (legality, placement, win check) before returning.
//!
//! # Move flow
//!
//! 1. Resolve the moving player (an unset player means "whoever is to move")
//! 2. Refuse if the game is already over
//! 3. Legality: centre opening, empty target, forbidden patterns for First
//! 4. Place the stone and record it
//! 5. Check the four axes through the new stone for five in a row
//!
//! How an illegal move is treated is fixed per instance by
//! [`IllegalMovePolicy`].
//!
//! The engine holds no locks. Callers sharing one instance across threads
//! must put all mutators behind a single mutex.

use std::fmt;

use crate::board::{Board, Player, Pos, Square, CENTER};
use crate::error::{MoveError, OutOfBounds, Violation};
use crate::rules::{count_runs, forbidden_pattern, has_five_at_pos, winning_line};

/// A stone placement request.
///
/// `player: None` means "the player to move when this is applied".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pos: Pos,
    player: Option<Player>,
}

impl Move {
    pub fn new(pos: Pos, player: Option<Player>) -> Self {
        Self { pos, player }
    }

    /// A move for whoever is to move
    pub fn at(pos: Pos) -> Self {
        Self::new(pos, None)
    }

    /// A move for an explicit player
    pub fn by(pos: Pos, player: Player) -> Self {
        Self::new(pos, Some(player))
    }

    /// Build from raw coordinates, e.g. a move generator's output.
    pub fn from_coords(row: i32, col: i32) -> Result<Self, OutOfBounds> {
        Pos::new(row, col).map(Self::at)
    }

    #[inline]
    pub fn pos(self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn player(self) -> Option<Player> {
        self.player
    }
}

impl From<Pos> for Move {
    fn from(pos: Pos) -> Self {
        Self::at(pos)
    }
}

/// One recorded turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entry {
    /// A stone was placed
    Stone { pos: Pos, player: Player },
    /// The player to move skipped the turn
    Pass,
}

impl Entry {
    pub fn pos(self) -> Option<Pos> {
        match self {
            Entry::Stone { pos, .. } => Some(pos),
            Entry::Pass => None,
        }
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Entry::Stone { player, .. } => Some(player),
            Entry::Pass => None,
        }
    }
}

/// What [`Renju::add_move`] does with a move that fails the legality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IllegalMovePolicy {
    /// Refuse the move and leave the game untouched.
    RejectIllegal,
    /// The player to move loses on the spot.
    #[default]
    LoseOnIllegal,
}

/// Renju game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renju {
    board: Board,
    history: Vec<Entry>,
    finished: bool,
    winner: Option<Player>,
    policy: IllegalMovePolicy,
}

impl Renju {
    /// Fresh game under the default policy ([`IllegalMovePolicy::LoseOnIllegal`])
    pub fn new() -> Self {
        Self::with_policy(IllegalMovePolicy::default())
    }

    pub fn with_policy(policy: IllegalMovePolicy) -> Self {
        Self {
            board: Board::new(),
            history: Vec::with_capacity(crate::board::TOTAL_CELLS),
            finished: false,
            winner: None,
            policy,
        }
    }

    /// Back to an empty board; the policy is kept.
    pub fn reset(&mut self) {
        *self = Self::with_policy(self.policy);
    }

    #[inline]
    pub fn policy(&self) -> IllegalMovePolicy {
        self.policy
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn square(&self, pos: Pos) -> Square {
        self.board.get(pos)
    }

    /// Recorded turns in play order
    #[inline]
    pub fn history(&self) -> &[Entry] {
        &self.history
    }

    /// Number of recorded turns; 0 before the first move
    #[inline]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    /// Player to move next
    #[inline]
    pub fn putter(&self) -> Player {
        Player::for_turn(self.turn())
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Position of the most recent entry, if it was a stone
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().and_then(|e| e.pos())
    }

    /// The completed five (or longer) if the game ended on one
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let winner = self.winner?;
        match self.history.last()? {
            Entry::Stone { pos, player } if *player == winner => {
                winning_line(&self.board, *pos, winner)
            }
            _ => None,
        }
    }

    /// Player a move would be played for
    #[inline]
    pub fn resolve(&self, mv: Move) -> Player {
        mv.player.unwrap_or_else(|| self.putter())
    }

    /// Run lengths through the move's point as if it were played, in
    /// horizontal, anti-diagonal, vertical, main-diagonal order.
    pub fn runs(&self, mv: Move) -> [u8; 4] {
        count_runs(&self.board, mv.pos, self.resolve(mv))
    }

    /// Why `mv` would be refused, or `None` if it is legal.
    ///
    /// The opening-move rule only looks at the point: any player may open,
    /// as long as it is on the centre.
    pub fn violation(&self, mv: Move) -> Option<Violation> {
        let player = self.resolve(mv);

        if self.turn() == 0 && mv.pos != CENTER {
            return Some(Violation::NotCenter);
        }
        if !self.board.is_empty(mv.pos) {
            return Some(Violation::Occupied);
        }
        forbidden_pattern(&self.board, mv.pos, player)
    }

    /// `true` if `mv` may be played now. Does not look at `finished`.
    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.violation(mv).is_none()
    }

    /// Every point the player to move may legally take
    pub fn legal_moves(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_legal(Move::at(pos)))
    }

    /// Apply a move.
    ///
    /// Fails with [`MoveError::GameAlreadyFinished`] once the game is over.
    /// An illegal move fails with [`MoveError::IllegalPosition`] under
    /// [`IllegalMovePolicy::RejectIllegal`] and leaves the game untouched;
    /// under [`IllegalMovePolicy::LoseOnIllegal`] the game ends with the
    /// opponent of the player to move as winner, and
    /// [`MoveError::ForbiddenMove`] is returned.
    pub fn add_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let player = self.resolve(mv);
        let pos = mv.pos;

        if self.finished {
            return Err(MoveError::GameAlreadyFinished);
        }

        if let Some(reason) = self.violation(Move::by(pos, player)) {
            return Err(match self.policy {
                IllegalMovePolicy::RejectIllegal => MoveError::IllegalPosition { pos, reason },
                IllegalMovePolicy::LoseOnIllegal => {
                    let winner = self.putter().opponent();
                    self.finished = true;
                    self.winner = Some(winner);
                    MoveError::ForbiddenMove {
                        pos,
                        reason,
                        winner,
                    }
                }
            });
        }

        self.board.place_stone(pos, player);
        self.history.push(Entry::Stone { pos, player });

        if has_five_at_pos(&self.board, pos, player) {
            self.finished = true;
            self.winner = Some(player);
        }

        Ok(())
    }

    /// Skip the turn of the player to move. No legality or win check.
    pub fn pass_turn(&mut self) -> Result<(), MoveError> {
        if self.finished {
            return Err(MoveError::GameAlreadyFinished);
        }
        self.history.push(Entry::Pass);
        Ok(())
    }

    /// Take back the last entry and return it.
    ///
    /// Always clears `finished` and `winner`, including after a forfeit,
    /// where the history itself is unchanged by the refused move.
    pub fn undo(&mut self) -> Result<Entry, MoveError> {
        let entry = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        if let Some(pos) = entry.pos() {
            self.board.remove_stone(pos);
        }
        self.finished = false;
        self.winner = None;
        Ok(entry)
    }
}

impl Default for Renju {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain ASCII board: `o` First, `x` Second, `.` empty.
impl fmt::Display for Renju {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.rows() {
            for square in row {
                let c = match square {
                    Square::Occupied(Player::First) => 'o',
                    Square::Occupied(Player::Second) => 'x',
                    Square::Empty => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        if self.finished {
            match self.winner {
                Some(winner) => writeln!(f, "GAME IS FINISHED: WINNER = {winner}")?,
                None => writeln!(f, "GAME IS FINISHED")?,
            }
        }
        Ok(())
    }
}
