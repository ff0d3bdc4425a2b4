//! Error types shared by the engine and the transcript codec.

use derive_more::{Display, Error, From};

use crate::board::{Player, Pos};

/// A coordinate outside `0..BOARD_SIZE` on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("coordinate ({row}, {col}) is outside the board")]
pub struct OutOfBounds {
    pub row: i32,
    pub col: i32,
}

/// Why a move failed the legality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Violation {
    /// The opening move was not played on the centre point.
    #[display("the first move must be played at the centre")]
    NotCenter,
    #[display("the point is already occupied")]
    Occupied,
    /// First made runs of exactly three on two or more axes.
    #[display("double-three")]
    DoubleThree,
    /// First made runs of exactly four on two or more axes.
    #[display("double-four")]
    DoubleFour,
    /// First made a run longer than five.
    #[display("overline")]
    Overline,
}

/// Error returned by the engine's mutators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Rejected under [`IllegalMovePolicy::RejectIllegal`](crate::IllegalMovePolicy);
    /// the game state is unchanged.
    #[display("illegal move at {pos}: {reason}")]
    IllegalPosition { pos: Pos, reason: Violation },
    /// Rejected under [`IllegalMovePolicy::LoseOnIllegal`](crate::IllegalMovePolicy);
    /// the game is over and `winner` has been recorded.
    #[display("forbidden move at {pos} ({reason}); {winner} wins")]
    ForbiddenMove {
        pos: Pos,
        reason: Violation,
        winner: Player,
    },
    #[display("game is already finished")]
    GameAlreadyFinished,
    #[display("nothing to undo")]
    NothingToUndo,
}

/// Error reading, writing or replaying a transcript.
#[derive(Debug, Display, Error, From)]
pub enum TranscriptError {
    /// Malformed line. `field` is the 0-based comma-separated field.
    #[display("malformed transcript field {field}: {message}")]
    Parse { field: usize, message: String },
    /// The engine refused a recorded move. `index` is 1-based.
    #[display("transcript move {index} was rejected: {source}")]
    Replay { index: usize, source: MoveError },
    #[display("transcript I/O failed: {_0}")]
    #[from]
    Io(#[error(source)] std::io::Error),
}

impl TranscriptError {
    pub(crate) fn parse(field: usize, message: impl Into<String>) -> Self {
        TranscriptError::Parse {
            field,
            message: message.into(),
        }
    }
}
