//! Static position evaluation.
//!
//! Material plus fixed piece-square tables, in tenths of a pawn so the
//! 0.1-weighted positional term stays exact in integer arithmetic.
//! Positive scores favor White.

use super::{Board, Color, Piece};

/// Score for a delivered checkmate; also the search window bound.
pub const CHECKMATE_SCORE: i32 = 10_000;
/// Stalemate is a dead draw.
pub const STALEMATE_SCORE: i32 = 0;

/// Material in tenths of a pawn, indexed by [`Piece::index`]. The king
/// carries no material weight; mate is scored separately.
const MATERIAL: [i32; 6] = [10, 30, 30, 50, 80, 0];

// Desirability tables indexed [row][file] with row 0 = Black's back
// rank. The pawn table is from White's perspective and mirrored
// vertically for Black; the king has no table.

const PAWN_TABLE: [[i32; 8]; 8] = [
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

const BISHOP_TABLE: [[i32; 8]; 8] = [
    [4, 3, 2, 1, 1, 2, 3, 4],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [4, 3, 2, 1, 1, 2, 3, 4],
];

const ROOK_TABLE: [[i32; 8]; 8] = [
    [4, 3, 4, 4, 4, 4, 3, 4],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [4, 3, 4, 4, 4, 4, 3, 4],
];

const QUEEN_TABLE: [[i32; 8]; 8] = [
    [1, 1, 1, 3, 1, 1, 1, 1],
    [1, 2, 3, 3, 3, 1, 1, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 1, 2, 3, 3, 1, 1, 1],
    [1, 1, 1, 3, 1, 1, 1, 1],
];

impl Board {
    /// Score the position from White's point of view.
    ///
    /// Reads the terminal flags set by the last legal-move generation:
    /// checkmate scores a mate constant signed for the side that
    /// delivered it, stalemate scores zero.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        if self.checkmate {
            return if self.side_to_move == Color::White {
                -CHECKMATE_SCORE
            } else {
                CHECKMATE_SCORE
            };
        }
        if self.stalemate {
            return STALEMATE_SCORE;
        }

        let mut score = 0;
        for row in 0..8 {
            for file in 0..8 {
                let Some((color, piece)) = self.squares[row][file] else {
                    continue;
                };
                let positional = match piece {
                    Piece::Pawn => {
                        let r = if color == Color::White { row } else { 7 - row };
                        PAWN_TABLE[r][file]
                    }
                    Piece::Knight => KNIGHT_TABLE[row][file],
                    Piece::Bishop => BISHOP_TABLE[row][file],
                    Piece::Rook => ROOK_TABLE[row][file],
                    Piece::Queen => QUEEN_TABLE[row][file],
                    Piece::King => 0,
                };
                score += color.sign() * (MATERIAL[piece.index()] + positional);
            }
        }
        score
    }

    /// Raw material balance in tenths of a pawn, without positional
    /// terms or terminal flags.
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        let mut score = 0;
        for row in 0..8 {
            for file in 0..8 {
                if let Some((color, piece)) = self.squares[row][file] {
                    score += color.sign() * MATERIAL[piece.index()];
                }
            }
        }
        score
    }
}
