//! Negamax search with alpha-beta pruning.

use rand::seq::SliceRandom;
use rand::Rng;

use super::eval::CHECKMATE_SCORE;
use super::{Board, Move};

/// Fixed search depth in plies.
pub const SEARCH_DEPTH: u32 = 3;

/// Pick the best move for the side to move, searching `SEARCH_DEPTH`
/// plies. `moves` must be the legal moves of `board`'s current
/// position. Root moves are shuffled first so equal-scoring lines are
/// not always resolved the same way.
///
/// Returns `None` when no root move scores above the worst possible
/// value: `moves` was empty, or every line runs into a forced mate.
#[must_use]
pub fn find_best_move(board: &mut Board, mut moves: Vec<Move>) -> Option<Move> {
    moves.shuffle(&mut rand::thread_rng());

    let mut best_move = None;
    let mut best_score = -CHECKMATE_SCORE;
    let mut alpha = -CHECKMATE_SCORE;
    let beta = CHECKMATE_SCORE;
    let sign = board.side_to_move().sign();

    for m in moves {
        board.make_move(&m);
        let replies = board.legal_moves();
        let score = -negamax(board, replies, SEARCH_DEPTH - 1, -beta, -alpha, -sign);
        board
            .undo_move()
            .expect("a move was just made, so the history is non-empty");

        if score > best_score {
            log::debug!("new best {m}: {score}");
            best_score = score;
            best_move = Some(m);
        }
        if score > alpha {
            alpha = score;
        }
    }

    log::debug!("search done, score {best_score}");
    best_move
}

/// Pick a uniformly random element of `moves`.
#[must_use]
pub fn find_random_move(moves: &[Move]) -> Move {
    moves[rand::thread_rng().gen_range(0..moves.len())]
}

/// Negamax over `board` with `moves` as the current legal moves.
///
/// Scores are from the perspective of the side to move, so `sign` is
/// +1 for White and -1 for Black and flips on each recursion along
/// with the negated, swapped window.
pub(crate) fn negamax(
    board: &mut Board,
    moves: Vec<Move>,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    sign: i32,
) -> i32 {
    if depth == 0 || moves.is_empty() {
        return sign * board.evaluate();
    }

    let mut best = -CHECKMATE_SCORE;
    for m in moves {
        board.make_move(&m);
        let replies = board.legal_moves();
        let score = -negamax(board, replies, depth - 1, -beta, -alpha, -sign);
        board
            .undo_move()
            .expect("a move was just made, so the history is non-empty");

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}
