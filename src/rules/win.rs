//! Run counting and five-in-a-row detection
//!
//! Two ways to find a win:
//! 1. [`has_five_at_pos`] looks only at the four axes through the stone that
//!    was just placed. Only the last move can complete a line, so this is
//!    all the engine needs after each move.
//! 2. [`scan_for_five`] walks every row, column and diagonal of the board.
//!    It needs no move context and is used to cross-check the first.

use crate::board::{Board, Player, Pos, BOARD_SIZE, DIRECTIONS};

/// Winning run length
pub const FIVE: u8 = 5;

/// Length of the `player` run through `pos` along one axis.
///
/// `pos` itself counts as one stone of `player` whatever the board holds
/// there, so this can be asked before the stone is placed.
#[inline]
pub fn run_length(board: &Board, pos: Pos, player: Player, (dr, dc): (i8, i8)) -> u8 {
    let mut count = 1u8;
    for sign in [1i32, -1] {
        let mut step = sign;
        while let Some(next) = pos.offset(dr, dc, step) {
            if !board.is_player(next, player) {
                break;
            }
            count += 1;
            step += sign;
        }
    }
    count
}

/// Run lengths through `pos` on each axis, in [`DIRECTIONS`] order:
/// horizontal, anti-diagonal, vertical, main diagonal.
pub fn count_runs(board: &Board, pos: Pos, player: Player) -> [u8; 4] {
    DIRECTIONS.map(|dir| run_length(board, pos, player, dir))
}

/// Fast five-in-a-row check at a specific position.
///
/// Overlines count: anything of length five or more wins.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| run_length(board, pos, player, dir) >= FIVE)
}

/// The stones of the first winning run through `pos`, ordered along the
/// axis. `None` if no axis reaches five.
pub fn winning_line(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    DIRECTIONS.iter().find_map(|&(dr, dc)| {
        let mut back = 0;
        while pos
            .offset(dr, dc, -(back + 1))
            .is_some_and(|p| board.is_player(p, player))
        {
            back += 1;
        }
        let line: Vec<Pos> = (-back..)
            .map_while(|step| pos.offset(dr, dc, step))
            .take_while(|&p| p == pos || board.is_player(p, player))
            .collect();
        (line.len() >= FIVE as usize).then_some(line)
    })
}

/// Every line of the board as a list of positions: rows, columns and both
/// diagonal families (only the diagonals long enough to hold five).
fn all_lines() -> impl Iterator<Item = Vec<Pos>> {
    let n = BOARD_SIZE as i32;
    let rows = (0..n).map(move |r| {
        (0..n)
            .filter_map(|c| Pos::new(r, c).ok())
            .collect::<Vec<_>>()
    });
    let cols = (0..n).map(move |c| {
        (0..n)
            .filter_map(|r| Pos::new(r, c).ok())
            .collect::<Vec<_>>()
    });
    // Down-right diagonals keyed by col - row, down-left by row + col.
    let down_right = (-(n - 1)..n).map(move |k| {
        (0..n)
            .filter_map(|r| Pos::new(r, r + k).ok())
            .collect::<Vec<_>>()
    });
    let down_left = (0..2 * n - 1).map(move |k| {
        (0..n)
            .filter_map(|r| Pos::new(r, k - r).ok())
            .collect::<Vec<_>>()
    });
    rows.chain(cols)
        .chain(down_right)
        .chain(down_left)
        .filter(|line: &Vec<Pos>| line.len() >= FIVE as usize)
}

/// Full-board scan for five or more in a row.
///
/// Returns the owner of the first run found. Costs a pass over every
/// line, so the engine only uses [`has_five_at_pos`].
pub fn scan_for_five(board: &Board) -> Option<Player> {
    for line in all_lines() {
        let mut owner = None;
        let mut count = 0u8;
        for pos in line {
            match board.get(pos).player() {
                Some(p) if owner == Some(p) => count += 1,
                Some(p) => {
                    owner = Some(p);
                    count = 1;
                }
                None => {
                    owner = None;
                    count = 0;
                }
            }
            if count >= FIVE {
                return owner;
            }
        }
    }
    None
}
