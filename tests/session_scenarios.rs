//! End-to-end games played through the public session API.

use std::collections::HashSet;

use connect_four::error::MoveError;
use connect_four::game::win::has_four_in_a_row;
use connect_four::game::{
    Board, Cell, Direction, GameSession, GameStatus, Outcome, Player, Run, COLS, ROWS,
};

fn play_all(session: &mut GameSession, columns: &[isize]) -> Vec<Outcome> {
    columns.iter().map(|&c| session.play_move(c)).collect()
}

#[test]
fn test_columns_fill_bottom_to_top() {
    for col in 0..COLS {
        let mut session = GameSession::new();
        for expected_row in (0..ROWS).rev() {
            match session.play_move(col as isize) {
                Outcome::Placed { row, column, .. } => {
                    assert_eq!((row, column), (expected_row, col));
                }
                other => panic!("column {col}: unexpected {other:?}"),
            }
        }
        let before = session.clone();
        assert_eq!(
            session.play_move(col as isize),
            Outcome::Rejected {
                reason: MoveError::ColumnFull { column: col }
            }
        );
        assert_eq!(session, before);
    }
}

#[test]
fn test_turns_alternate() {
    let mut session = GameSession::new();
    let mut expected = Player::One;
    for col in [0, 1, 2, 4, 5, 6, 0, 1, 2, 4, 5, 6] {
        assert_eq!(session.active_player(), expected);
        match session.play_move(col) {
            Outcome::Placed { player, next, .. } => {
                assert_eq!(player, expected);
                assert_eq!(next, expected.other());
            }
            other => panic!("unexpected {other:?}"),
        }
        expected = expected.other();
    }
}

#[test]
fn test_rejections_do_not_switch_turn() {
    let mut session = GameSession::new();
    session.play_move(2);
    assert_eq!(session.active_player(), Player::Two);
    assert!(session.play_move(-5).is_rejected());
    assert!(session.play_move(100).is_rejected());
    assert_eq!(session.active_player(), Player::Two);
    assert!(matches!(
        session.play_move(2),
        Outcome::Placed {
            player: Player::Two,
            row: 4,
            ..
        }
    ));
}

#[test]
fn test_horizontal_win_on_seventh_move() {
    let mut session = GameSession::new();
    let outcomes = play_all(&mut session, &[3, 3, 4, 4, 5, 5, 6]);

    let expected_rows = [5, 4, 5, 4, 5, 4];
    for (outcome, row) in outcomes.iter().zip(expected_rows) {
        assert!(matches!(outcome, Outcome::Placed { row: r, .. } if *r == row));
    }
    assert_eq!(
        outcomes[6],
        Outcome::Win {
            player: Player::One,
            row: 5,
            column: 6,
            run: Run {
                start: (5, 3),
                direction: Direction::Horizontal
            }
        }
    );
    assert_eq!(session.status(), GameStatus::Won(Player::One));
    for col in 3..7 {
        assert_eq!(session.board().get(5, col), Cell::One);
    }
}

#[test]
fn test_full_board_without_run_is_tie() {
    let mut session = GameSession::new();
    let columns = [
        0, 1, 0, 1, 0, 1, 2, 3, 2, 3, 2, 3, 4, 5, 4, 5, 4, 5, 6, 0, 1, 0, 1, 0, 1, 2, 3, 2, 3,
        2, 3, 4, 5, 4, 5, 4, 5, 6, 6, 6, 6, 6,
    ];
    let outcomes = play_all(&mut session, &columns);

    assert!(outcomes[..41]
        .iter()
        .all(|o| matches!(o, Outcome::Placed { .. })));
    assert_eq!(outcomes[41], Outcome::Tie { row: 0, column: 6 });
    assert_eq!(session.status(), GameStatus::Tied);
    assert!(session.board().is_full());
    assert!(!has_four_in_a_row(session.board(), Player::One));
    assert!(!has_four_in_a_row(session.board(), Player::Two));
}

#[test]
fn test_invalid_columns_leave_state_unchanged() {
    let mut session = GameSession::new();
    session.play_move(0);
    let before = session.clone();

    for column in [-1, COLS as isize] {
        assert_eq!(
            session.play_move(column),
            Outcome::Rejected {
                reason: MoveError::InvalidColumn { column, cols: COLS }
            }
        );
    }
    assert_eq!(session, before);
}

#[test]
fn test_terminal_session_rejects_repeatedly() {
    let mut session = GameSession::new();
    play_all(&mut session, &[3, 3, 4, 4, 5, 5, 6]);
    let board = session.board_snapshot();
    let active = session.active_player();

    for column in (-2..10).cycle().take(50) {
        assert_eq!(
            session.play_move(column),
            Outcome::Rejected {
                reason: MoveError::GameOver
            }
        );
    }
    assert_eq!(session.board(), &board);
    assert_eq!(session.active_player(), active);
    assert_eq!(session.moves_played(), 7);
}

#[test]
fn test_board_snapshot_is_detached() {
    let mut session = GameSession::new();
    session.play_move(1);
    let snapshot = session.board_snapshot();
    session.play_move(1);
    assert_eq!(snapshot.piece_count(), 1);
    assert_eq!(session.board().piece_count(), 2);
}

#[derive(Default)]
struct Tally {
    wins: usize,
    ties: usize,
}

fn explore(session: &GameSession, visited: &mut HashSet<Vec<Cell>>, tally: &mut Tally) {
    for col in session.legal_columns() {
        let mover = session.active_player();
        let mut next = session.clone();
        let outcome = next.play_move(col as isize);
        if !visited.insert(next.board().cells().to_vec()) {
            continue;
        }
        let board = next.board();

        match outcome {
            Outcome::Win { player, run, .. } => {
                tally.wins += 1;
                assert_eq!(player, mover);
                assert_eq!(next.status(), GameStatus::Won(mover));
                assert!(has_four_in_a_row(board, mover));
                assert!(!has_four_in_a_row(board, mover.other()));
                assert!(run.cells().iter().all(|&(r, c)| board.get(r, c) == mover.to_cell()));
            }
            Outcome::Tie { .. } => {
                tally.ties += 1;
                assert_eq!(next.status(), GameStatus::Tied);
                assert!(board.is_full());
                assert!(!has_four_in_a_row(board, Player::One));
                assert!(!has_four_in_a_row(board, Player::Two));
            }
            Outcome::Placed { next: to_move, .. } => {
                assert_eq!(to_move, mover.other());
                assert!(!board.is_full());
                assert!(!has_four_in_a_row(board, Player::One));
                assert!(!has_four_in_a_row(board, Player::Two));
                explore(&next, visited, tally);
            }
            Outcome::Rejected { reason } => panic!("legal column {col} rejected: {reason}"),
        }
    }
}

#[test]
fn test_exhaustive_small_board() {
    let board = Board::with_dimensions(4, 4).unwrap();
    let session = GameSession::with_board(board).unwrap();

    let mut visited = HashSet::new();
    visited.insert(session.board().cells().to_vec());
    let mut tally = Tally::default();
    explore(&session, &mut visited, &mut tally);

    assert_eq!(visited.len(), 161_029);
    assert_eq!(tally.wins, 21_404);
    assert_eq!(tally.ties, 5_336);
}
