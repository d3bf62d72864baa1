//! A chess rules engine with a fixed-depth negamax search.
//!
//! The [`board`] module holds the position, legal move generation and
//! the search itself; the [`engine`] module runs a search on a worker
//! thread with coarse cancellation.

pub mod board;
pub mod engine;
pub mod sync;

pub use board::{Board, CastleRights, Color, Move, Piece, Square};
pub use engine::{spawn_search, SearchHandle};
pub use sync::CancelToken;
