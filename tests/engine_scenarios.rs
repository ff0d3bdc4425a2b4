//! Whole-game behaviour of the rule engine.

use proptest::prelude::*;

use renju::rules::scan_for_five;
use renju::solver::RandomSolver;
use renju::{IllegalMovePolicy, Move, MoveError, Player, Pos, Renju, Violation, CENTER};

fn pos(row: i32, col: i32) -> Pos {
    Pos::new(row, col).unwrap()
}

fn play(renju: &mut Renju, moves: &[(i32, i32)]) {
    for &(r, c) in moves {
        renju
            .add_move(Move::at(pos(r, c)))
            .unwrap_or_else(|e| panic!("({r}, {c}) refused: {e}"));
    }
}

/// Two rows of four with the fifth points still open.
const ROWS_OF_FOUR: [(i32, i32); 9] = [
    (7, 7),
    (0, 0),
    (1, 0),
    (0, 1),
    (1, 1),
    (0, 2),
    (1, 2),
    (0, 3),
    (1, 3),
];

#[test]
fn test_rows_of_four_do_not_finish() {
    let mut renju = Renju::new();
    play(&mut renju, &ROWS_OF_FOUR);

    assert!(!renju.finished());
    assert_eq!(renju.turn(), 9);
    assert_eq!(renju.putter(), Player::Second);
}

#[test]
fn test_second_completes_row_first() {
    let mut renju = Renju::new();
    play(&mut renju, &ROWS_OF_FOUR);
    play(&mut renju, &[(0, 4)]);

    assert!(renju.finished());
    assert_eq!(renju.winner(), Some(Player::Second));
    assert_eq!(
        renju.add_move(Move::at(pos(1, 4))),
        Err(MoveError::GameAlreadyFinished)
    );
}

#[test]
fn test_first_completes_row_when_second_plays_elsewhere() {
    let mut renju = Renju::new();
    play(&mut renju, &ROWS_OF_FOUR);
    play(&mut renju, &[(14, 14), (1, 4)]);

    assert!(renju.finished());
    assert_eq!(renju.winner(), Some(Player::First));
    assert_eq!(renju.turn(), 11);
}

#[test]
fn test_opening_only_at_center() {
    for p in Pos::all().filter(|&p| p != CENTER) {
        let mut renju = Renju::with_policy(IllegalMovePolicy::RejectIllegal);
        assert_eq!(
            renju.add_move(Move::at(p)),
            Err(MoveError::IllegalPosition {
                pos: p,
                reason: Violation::NotCenter
            })
        );
        assert_eq!(renju.turn(), 0);
    }
    assert!(Renju::new().add_move(Move::at(CENTER)).is_ok());
}

#[test]
fn test_undo_center_restores_fresh_state() {
    let mut renju = Renju::new();
    renju.add_move(Move::by(CENTER, Player::First)).unwrap();
    renju.undo().unwrap();
    assert_eq!(renju, Renju::new());
}

#[test]
fn test_five_on_every_axis() {
    let second = [(0, 0), (0, 2), (0, 4), (0, 6)];
    let lines: [[(i32, i32); 5]; 4] = [
        [(7, 7), (7, 8), (7, 9), (7, 10), (7, 11)],
        [(7, 7), (8, 7), (9, 7), (10, 7), (11, 7)],
        [(7, 7), (8, 8), (9, 9), (10, 10), (11, 11)],
        [(7, 7), (8, 6), (9, 5), (10, 4), (11, 3)],
    ];

    for line in lines {
        let mut renju = Renju::new();
        for i in 0..4 {
            play(&mut renju, &[line[i], second[i]]);
        }
        assert!(!renju.finished(), "four stones must not win: {line:?}");

        play(&mut renju, &[line[4]]);
        assert!(renju.finished(), "{line:?}");
        assert_eq!(renju.winner(), Some(Player::First));
        assert_eq!(scan_for_five(renju.board()), Some(Player::First));
    }
}

#[test]
fn test_second_wins_on_diagonal() {
    let mut renju = Renju::new();
    play(
        &mut renju,
        &[
            (7, 7),
            (0, 0),
            (9, 3),
            (1, 1),
            (11, 9),
            (2, 2),
            (13, 1),
            (3, 3),
            (3, 13),
            (4, 4),
        ],
    );
    assert!(renju.finished());
    assert_eq!(renju.winner(), Some(Player::Second));
}

/// First to move, with (7, 9) completing a horizontal and a vertical three.
fn double_three_setup(policy: IllegalMovePolicy) -> Renju {
    let mut renju = Renju::with_policy(policy);
    play(
        &mut renju,
        &[(7, 7), (0, 0), (7, 8), (0, 2), (5, 9), (0, 4), (6, 9), (0, 6)],
    );
    renju
}

#[test]
fn test_double_three_rejected() {
    let mut renju = double_three_setup(IllegalMovePolicy::RejectIllegal);
    let before = renju.clone();

    assert_eq!(
        renju.add_move(Move::at(pos(7, 9))),
        Err(MoveError::IllegalPosition {
            pos: pos(7, 9),
            reason: Violation::DoubleThree
        })
    );
    assert_eq!(renju, before);
}

#[test]
fn test_double_three_loses() {
    let mut renju = double_three_setup(IllegalMovePolicy::LoseOnIllegal);

    assert_eq!(
        renju.add_move(Move::at(pos(7, 9))),
        Err(MoveError::ForbiddenMove {
            pos: pos(7, 9),
            reason: Violation::DoubleThree,
            winner: Player::Second
        })
    );
    assert!(renju.finished());
    assert_eq!(renju.winner(), Some(Player::Second));
    assert_eq!(renju.turn(), 8);
}

#[test]
fn test_double_three_allowed_for_second() {
    let mut renju = Renju::with_policy(IllegalMovePolicy::RejectIllegal);
    play(
        &mut renju,
        &[
            (7, 7),
            (3, 3),
            (0, 0),
            (3, 4),
            (0, 2),
            (1, 5),
            (0, 4),
            (2, 5),
            (0, 6),
        ],
    );
    assert_eq!(renju.runs(Move::at(pos(3, 5))), [3, 1, 3, 1]);
    play(&mut renju, &[(3, 5)]);
    assert!(!renju.finished());
}

#[test]
fn test_same_point_judged_per_player() {
    let renju = double_three_setup(IllegalMovePolicy::RejectIllegal);
    let target = pos(7, 9);
    assert!(!renju.is_legal(Move::by(target, Player::First)));
    assert!(renju.is_legal(Move::by(target, Player::Second)));
}

/// Row 7 and column 10 each hold three of First's stones ending next to (7, 10).
const DOUBLE_FOUR_SETUP: [(i32, i32); 12] = [
    (7, 7),
    (0, 0),
    (7, 8),
    (0, 2),
    (4, 10),
    (0, 4),
    (5, 10),
    (0, 6),
    (7, 9),
    (0, 8),
    (6, 10),
    (0, 10),
];

/// Row 7 holds First's stones on both sides of (7, 10), three and two.
const OVERLINE_SETUP: [(i32, i32); 10] = [
    (7, 7),
    (0, 0),
    (7, 8),
    (0, 2),
    (7, 9),
    (0, 4),
    (7, 11),
    (0, 6),
    (7, 12),
    (0, 8),
];

#[test]
fn test_double_four_and_overline_rejected() {
    for (setup, reason) in [
        (&DOUBLE_FOUR_SETUP[..], Violation::DoubleFour),
        (&OVERLINE_SETUP[..], Violation::Overline),
    ] {
        let mut renju = Renju::with_policy(IllegalMovePolicy::RejectIllegal);
        play(&mut renju, setup);
        let before = renju.clone();

        assert_eq!(
            renju.add_move(Move::at(pos(7, 10))),
            Err(MoveError::IllegalPosition {
                pos: pos(7, 10),
                reason
            })
        );
        assert_eq!(renju, before);
        assert!(renju.is_legal(Move::by(pos(7, 10), Player::Second)));
    }
}

#[test]
fn test_double_four_and_overline_lose() {
    for (setup, reason) in [
        (&DOUBLE_FOUR_SETUP[..], Violation::DoubleFour),
        (&OVERLINE_SETUP[..], Violation::Overline),
    ] {
        let mut renju = Renju::new();
        play(&mut renju, setup);

        assert_eq!(
            renju.add_move(Move::at(pos(7, 10))),
            Err(MoveError::ForbiddenMove {
                pos: pos(7, 10),
                reason,
                winner: Player::Second
            })
        );
        assert!(renju.finished());
        assert_eq!(renju.winner(), Some(Player::Second));
        assert_eq!(renju.turn(), setup.len());
    }
}

proptest! {
    #[test]
    fn prop_pos_on_board(row in 0i32..15, col in 0i32..15) {
        let p = Pos::new(row, col).unwrap();
        prop_assert_eq!((p.row(), p.col()), (row as usize, col as usize));
    }

    #[test]
    fn prop_pos_off_board(
        row in prop_oneof![i32::MIN..0, 15..i32::MAX],
        col in any::<i32>(),
        swap in any::<bool>(),
    ) {
        let (row, col) = if swap { (col, row) } else { (row, col) };
        prop_assert!(Pos::new(row, col).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// The per-move win check agrees with a full-board scan after every move.
    #[test]
    fn prop_local_win_check_matches_scan(seed in any::<u64>()) {
        let mut renju = Renju::new();
        let mut solver = RandomSolver::new(Some(seed));

        for _ in 0..150 {
            let Some(p) = solver.choose(&renju) else { break };
            let mover = renju.putter();
            prop_assert!(renju.add_move(Move::at(p)).is_ok());

            let scanned = scan_for_five(renju.board());
            prop_assert_eq!(renju.finished(), scanned.is_some());
            if renju.finished() {
                prop_assert_eq!(renju.winner(), Some(mover));
                prop_assert_eq!(scanned, Some(mover));
                break;
            }
        }
    }

    /// Undoing every move of a game gets back to an empty board.
    #[test]
    fn prop_undo_all_is_fresh(seed in any::<u64>(), plies in 1usize..40) {
        let mut renju = Renju::new();
        let mut solver = RandomSolver::new(Some(seed));

        for _ in 0..plies {
            match solver.choose(&renju) {
                Some(p) => prop_assert!(renju.add_move(Move::at(p)).is_ok()),
                None => break,
            }
            prop_assert_eq!(renju.board().stone_count(), renju.turn());
        }
        while renju.undo().is_ok() {}
        prop_assert_eq!(renju, Renju::new());
    }
}
