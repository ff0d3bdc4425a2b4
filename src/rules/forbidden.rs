//! Forbidden moves for the first player
//!
//! Renju forbids First from making, in a single move:
//! - a double-three: exact runs of three on two or more axes
//! - a double-four: exact runs of four on two or more axes
//! - an overline: a run of six or more on any axis
//!
//! Runs are the contiguous counts from [`count_runs`]. Open and closed
//! ends are not distinguished, and an exact five alongside them still
//! counts as forbidden. Second has no forbidden moves.

use crate::board::{Board, Player, Pos};
use crate::error::Violation;

use super::win::{count_runs, FIVE};

/// Number of axes whose run is exactly `len`
#[inline]
fn axes_with_run(runs: &[u8; 4], len: u8) -> usize {
    runs.iter().filter(|&&r| r == len).count()
}

pub fn is_double_three(runs: &[u8; 4]) -> bool {
    axes_with_run(runs, 3) > 1
}

pub fn is_double_four(runs: &[u8; 4]) -> bool {
    axes_with_run(runs, 4) > 1
}

pub fn is_overline(runs: &[u8; 4]) -> bool {
    runs.iter().any(|&r| r > FIVE)
}

/// Classify the pattern `player` would make by playing `pos`.
///
/// `pos` is treated as holding the new stone; its current content is not
/// read, so this is meant to be called before placing. Returns `None` for
/// Second and for any move that forms no forbidden pattern.
pub fn forbidden_pattern(board: &Board, pos: Pos, player: Player) -> Option<Violation> {
    if player == Player::Second {
        return None;
    }

    let runs = count_runs(board, pos, player);
    if is_double_three(&runs) {
        Some(Violation::DoubleThree)
    } else if is_double_four(&runs) {
        Some(Violation::DoubleFour)
    } else if is_overline(&runs) {
        Some(Violation::Overline)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i32, col: i32) -> Pos {
        Pos::new(row, col).unwrap()
    }

    fn board_with(stones: &[(i32, i32)], player: Player) -> Board {
        let mut board = Board::new();
        for &(r, c) in stones {
            board.place_stone(pos(r, c), player);
        }
        board
    }

    #[test]
    fn test_empty_board_not_forbidden() {
        let board = Board::new();
        assert_eq!(forbidden_pattern(&board, pos(7, 7), Player::First), None);
    }

    #[test]
    fn test_single_three_allowed() {
        let board = board_with(&[(7, 6), (7, 8)], Player::First);
        assert_eq!(count_runs(&board, pos(7, 7), Player::First), [3, 1, 1, 1]);
        assert_eq!(forbidden_pattern(&board, pos(7, 7), Player::First), None);
    }

    #[test]
    fn test_double_three_cross_pattern() {
        //     col: 6 7 8
        // row 6:   . F .
        // row 7:   F _ F
        // row 8:   . F .
        let board = board_with(&[(7, 6), (7, 8), (6, 7), (8, 7)], Player::First);
        assert_eq!(
            forbidden_pattern(&board, pos(7, 7), Player::First),
            Some(Violation::DoubleThree)
        );
        assert_eq!(forbidden_pattern(&board, pos(7, 7), Player::Second), None);
    }

    #[test]
    fn test_double_three_diagonal_cross() {
        let board = board_with(&[(6, 6), (8, 8), (6, 8), (8, 6)], Player::First);
        assert_eq!(count_runs(&board, pos(7, 7), Player::First), [1, 3, 1, 3]);
        assert_eq!(
            forbidden_pattern(&board, pos(7, 7), Player::First),
            Some(Violation::DoubleThree)
        );
    }

    #[test]
    fn test_closed_threes_still_count() {
        // Both threes touch the board edge; the run count does not look at ends.
        let board = board_with(&[(0, 1), (0, 2), (1, 0), (2, 0)], Player::First);
        assert_eq!(
            forbidden_pattern(&board, pos(0, 0), Player::First),
            Some(Violation::DoubleThree)
        );
    }

    #[test]
    fn test_gapped_three_is_not_a_run() {
        // _ F F _ _ F: the gap breaks the run, leaving only a two.
        let board = board_with(&[(7, 6), (7, 10), (6, 7), (8, 7)], Player::First);
        assert_eq!(count_runs(&board, pos(7, 7), Player::First), [2, 1, 3, 1]);
        assert_eq!(forbidden_pattern(&board, pos(7, 7), Player::First), None);
    }

    #[test]
    fn test_double_four() {
        let board = board_with(
            &[(7, 4), (7, 5), (7, 6), (4, 7), (5, 7), (6, 7)],
            Player::First,
        );
        assert_eq!(
            forbidden_pattern(&board, pos(7, 7), Player::First),
            Some(Violation::DoubleFour)
        );
    }

    #[test]
    fn test_four_and_three_allowed() {
        let board = board_with(&[(7, 4), (7, 5), (7, 6), (5, 7), (6, 7)], Player::First);
        assert_eq!(count_runs(&board, pos(7, 7), Player::First), [4, 1, 3, 1]);
        assert_eq!(forbidden_pattern(&board, pos(7, 7), Player::First), None);
    }

    #[test]
    fn test_overline() {
        let board = board_with(&[(3, 0), (3, 1), (3, 2), (3, 4), (3, 5)], Player::First);
        assert_eq!(
            forbidden_pattern(&board, pos(3, 3), Player::First),
            Some(Violation::Overline)
        );
    }

    #[test]
    fn test_exact_five_allowed() {
        let board = board_with(&[(3, 0), (3, 1), (3, 2), (3, 4)], Player::First);
        assert_eq!(forbidden_pattern(&board, pos(3, 3), Player::First), None);
    }

    #[test]
    fn test_double_three_checked_before_overline() {
        let board = board_with(
            &[(7, 1), (7, 2), (7, 3), (7, 5), (7, 6), (6, 4), (5, 4), (8, 5), (9, 6)],
            Player::First,
        );
        // Horizontal six, vertical three, main-diagonal three.
        assert_eq!(count_runs(&board, pos(7, 4), Player::First), [6, 1, 3, 3]);
        assert_eq!(
            forbidden_pattern(&board, pos(7, 4), Player::First),
            Some(Violation::DoubleThree)
        );
    }

    #[test]
    fn test_second_never_forbidden() {
        let cross = board_with(&[(7, 6), (7, 8), (6, 7), (8, 7)], Player::Second);
        assert_eq!(forbidden_pattern(&cross, pos(7, 7), Player::Second), None);

        let long = board_with(&[(3, 0), (3, 1), (3, 2), (3, 4), (3, 5)], Player::Second);
        assert_eq!(forbidden_pattern(&long, pos(3, 3), Player::Second), None);
    }

    #[test]
    fn test_pattern_predicates() {
        assert!(is_double_three(&[3, 3, 1, 1]));
        assert!(!is_double_three(&[3, 4, 1, 1]));
        assert!(is_double_four(&[1, 4, 4, 4]));
        assert!(!is_double_four(&[5, 4, 1, 1]));
        assert!(is_overline(&[1, 1, 6, 1]));
        assert!(!is_overline(&[5, 5, 5, 5]));
    }
}
