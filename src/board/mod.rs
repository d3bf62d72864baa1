//! Chess board representation and game logic.
//!
//! Uses a mailbox (8x8 array) representation with full legal move
//! generation: castling, en passant, promotions, pins and checks.
//!
//! # Example
//! ```
//! use raychess::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod analysis;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, HistoryError, SquareError};
pub use eval::{CHECKMATE_SCORE, STALEMATE_SCORE};
pub use fen::START_FEN;
pub use search::{find_best_move, find_random_move, SEARCH_DEPTH};
pub use state::Board;
pub use types::{CastleRights, Color, Move, Piece, Square};
