//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal move generation (checks, pins, castling, en passant)
//! - `perft.rs` - Node-count verification of move generation
//! - `make_unmake.rs` - Make/undo correctness and history handling
//! - `edge_cases.rs` - Special positions (mates, stalemate, promotion)
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Negamax search
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod eval;
mod proptest;

use crate::board::{Board, Square};

/// Play a scripted move, panicking if it is not legal in `board`.
fn play(board: &mut Board, from: Square, to: Square) {
    let mv = board
        .legal_moves()
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .unwrap_or_else(|| panic!("scripted move {from}{to} is not legal"));
    board.make_move(&mv);
}
