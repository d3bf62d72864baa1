//! Core value types for the chess engine.

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastleRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
