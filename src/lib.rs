//! Renju rule engine, referee and frontends
//!
//! Renju is five-in-a-row on a 15x15 board where the first player is
//! barred from certain patterns:
//! - The opening stone goes on the centre point
//! - Five or more in a row wins
//! - First may not make a double-three, a double-four or an overline
//!
//! # Architecture
//!
//! - [`board`]: Geometry, players and the stone grid
//! - [`rules`]: Run counting, win detection and forbidden patterns
//! - [`engine`]: The [`Renju`] game state and its mutators
//! - [`transcript`]: The one-line score sheet format
//! - [`solver`]: Reference move chooser (immediate win, else random)
//! - [`driver`]: Turn loop between humans and move-generating programs
//! - [`tui`]: Terminal board and cursor selection
//! - [`ui`]: Desktop board
//!
//! # Quick Start
//!
//! ```
//! use renju::{Move, MoveError, Pos, Renju, Violation, CENTER};
//!
//! let mut game = Renju::new();
//! game.add_move(Move::at(CENTER)).unwrap();
//! game.add_move(Move::at(Pos::new(6, 6).unwrap())).unwrap();
//!
//! // The point is taken: under the default policy the mover loses.
//! let err = game.add_move(Move::at(CENTER)).unwrap_err();
//! assert!(matches!(
//!     err,
//!     MoveError::ForbiddenMove { reason: Violation::Occupied, .. }
//! ));
//! assert!(game.finished());
//!
//! println!("{game}");
//! ```

pub mod board;
pub mod cli;
pub mod driver;
pub mod engine;
pub mod error;
pub mod logging;
pub mod rules;
pub mod solver;
pub mod transcript;
pub mod tui;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Square, BOARD_SIZE, CENTER};
pub use engine::{Entry, IllegalMovePolicy, Move, Renju};
pub use error::{MoveError, OutOfBounds, TranscriptError, Violation};
