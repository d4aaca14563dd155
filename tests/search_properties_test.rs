//! Whole-game properties of the minimax engine.
//!
//! These walk every position reachable by legal alternating play with X
//! moving first.

use std::collections::HashSet;
use tictactoe_core::{
    Board, BoardInvariants, Cell, GameOutcome, GameSession, InvariantSet, Mark, Move,
    SearchEngine, find_best_move,
};

/// Every reachable position, terminal ones included.
fn reachable_positions() -> HashSet<Board> {
    fn walk(board: &Board, to_move: Mark, seen: &mut HashSet<Board>) {
        if !seen.insert(board.clone()) {
            return;
        }
        if board.outcome_for(Mark::X, Mark::O).is_over() {
            return;
        }
        let open: Vec<Move> = board.empty_cells().collect();
        for mv in open {
            let mut next = board.clone();
            next.place(mv.row, mv.col, to_move).expect("empty cell");
            walk(&next, to_move.opponent(), seen);
        }
    }

    let mut seen = HashSet::new();
    walk(&Board::new(), Mark::X, &mut seen);
    seen
}

fn side_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}

#[test]
fn test_reachable_positions_never_have_two_winners() {
    let positions = reachable_positions();
    assert_eq!(positions.len(), 5478);
    for board in &positions {
        assert!(
            !(board.is_winner(Mark::X) && board.is_winner(Mark::O)),
            "both sides win on\n{}",
            board
        );
        assert!(BoardInvariants::check_all(board).is_ok());
    }
}

#[test]
fn test_best_move_is_always_an_empty_cell() {
    for board in reachable_positions() {
        if board.outcome_for(Mark::X, Mark::O).is_over() {
            continue;
        }
        let mark = side_to_move(&board);
        let mut probe = board.clone();
        let mv = find_best_move(&mut probe, mark, mark.opponent()).expect("moves remain");

        assert_eq!(probe, board, "search changed the board");
        assert_eq!(board.cell(mv.row, mv.col), Some(Cell::Empty));
    }
}

#[test]
fn test_engine_never_loses_against_any_human_line() {
    fn explore(session: &GameSession, finished: &mut usize) {
        let open: Vec<Move> = session.board().empty_cells().collect();
        for mv in open {
            let mut next = session.clone();
            let report = next.play(mv.row, mv.col).expect("legal move");
            assert_ne!(
                report.outcome(),
                &GameOutcome::PlayerWins,
                "engine lost after history {:?}",
                next.history()
            );
            if report.outcome().is_over() {
                *finished += 1;
            } else {
                explore(&next, finished);
            }
        }
    }

    let mut finished = 0;
    explore(&GameSession::new(), &mut finished);
    assert!(finished > 0);
}

#[test]
fn test_optimal_play_from_empty_board_is_a_draw() {
    let mut board = Board::new();
    let mut to_move = Mark::X;
    while !board.outcome_for(Mark::X, Mark::O).is_over() {
        let engine = SearchEngine::new(to_move, to_move.opponent());
        let mv = engine.find_best_move(&mut board).expect("moves remain");
        board.place(mv.row, mv.col, to_move).expect("engine picks empty cells");
        to_move = to_move.opponent();
    }
    assert_eq!(board.outcome_for(Mark::X, Mark::O), GameOutcome::Draw);
}

#[test]
fn test_engine_blocks_open_top_row() {
    let mut board = Board::new();
    board.place(0, 0, Mark::X).expect("valid placement");
    board.place(0, 1, Mark::X).expect("valid placement");

    let mv = find_best_move(&mut board, Mark::O, Mark::X).expect("moves remain");
    assert_eq!(mv, Move::new(0, 2));
}

#[test]
fn test_engine_moving_first_takes_top_left() {
    let mut board = Board::new();
    let mv = find_best_move(&mut board, Mark::O, Mark::X).expect("moves remain");
    assert_eq!(mv, Move::new(0, 0));
    assert_eq!(board, Board::new());
}

#[test]
fn test_ties_go_to_first_cell_in_scan_order() {
    // Every reply to a corner opening except the centre loses for O; with
    // the centre taken by O, the next human move leaves several drawing
    // replies and the first of them must be chosen.
    let mut board = Board::new();
    board.place(0, 0, Mark::X).expect("valid placement");
    let engine = SearchEngine::new(Mark::O, Mark::X);
    assert_eq!(engine.find_best_move(&mut board), Ok(Move::new(1, 1)));

    board.place(1, 1, Mark::O).expect("valid placement");
    board.place(2, 2, Mark::X).expect("valid placement");
    let report = engine.analyze(&mut board).expect("moves remain");
    assert_eq!(report.score(), &0);

    let first_drawing = board
        .empty_cells()
        .find(|mv| {
            let mut probe = board.clone();
            probe.place(mv.row, mv.col, Mark::O).expect("empty cell");
            engine.evaluate(&mut probe, false) == 0
        })
        .expect("a drawing reply exists");
    assert_eq!(report.best(), &first_drawing);
}
