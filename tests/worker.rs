//! Integration tests for the background search worker.

use std::thread;
use std::time::Duration;

use raychess::board::Board;
use raychess::engine::spawn_search;

#[test]
fn background_search_returns_a_legal_move() {
    let mut board = Board::new();
    let moves = board.legal_moves();
    let handle = spawn_search(&board, moves.clone());
    let best = handle
        .wait()
        .expect("search from the initial position finds a move");
    assert!(moves.contains(&best));
}

#[test]
fn cancelled_search_discards_its_result() {
    let mut board = Board::new();
    let moves = board.legal_moves();
    let handle = spawn_search(&board, moves);
    handle.cancel();
    assert!(handle.wait().is_none());
}

#[test]
fn poll_yields_the_result_once_the_worker_exits() {
    let mut board = Board::new();
    let moves = board.legal_moves();
    let handle = spawn_search(&board, moves);

    while !handle.is_finished() {
        thread::sleep(Duration::from_millis(1));
    }
    let outcome = handle.poll().expect("finished worker has published");
    assert!(outcome.is_some());

    // The slot is a single-shot cell; a second poll is empty.
    assert!(handle.poll().is_none());
}

#[test]
fn caller_board_stays_usable_during_search() {
    let mut board = Board::new();
    let moves = board.legal_moves();
    let handle = spawn_search(&board, moves.clone());

    // The worker owns a clone; mutating the original is fine.
    board.make_move(&moves[0]);
    board.undo_move().expect("one move to undo");

    assert!(handle.wait().is_some());
}

#[test]
fn search_finds_the_back_rank_mate() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1").expect("valid fen");
    let moves = board.legal_moves();
    let best = spawn_search(&board, moves)
        .wait()
        .expect("mate in one is found");
    assert_eq!(best.to_string(), "a1a8");
}
