//! Move value type.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::Board;

/// A single ply, recorded with everything needed for exact undo.
///
/// A `Move` is a snapshot taken at construction time: it captures the
/// moved and captured pieces from the board it was built against and
/// never references a live board afterwards. Construction does not
/// validate legality; a move is legal iff it appears in
/// [`Board::legal_moves`].
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: (Color, Piece),
    pub captured: Option<(Color, Piece)>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
}

impl Move {
    /// Create an ordinary move (including ordinary captures) between
    /// two squares of `board`. The origin square must be occupied;
    /// callers translating untrusted input (a board click, a text
    /// command) should use [`Move::try_new`] instead.
    #[must_use]
    pub fn new(from: Square, to: Square, board: &Board) -> Self {
        Move::try_new(from, to, board).expect("move origin square must be occupied")
    }

    /// Create a move between two arbitrary squares of `board`, or
    /// `None` when the origin is empty and there is no piece to record.
    /// No legality check is made either way; a move is legal iff it
    /// appears in [`Board::legal_moves`].
    #[must_use]
    pub fn try_new(from: Square, to: Square, board: &Board) -> Option<Self> {
        let piece_moved = board.piece_at(from)?;
        let captured = board.piece_at(to);
        let is_promotion =
            piece_moved.1 == Piece::Pawn && to.row() == piece_moved.0.pawn_promotion_row();
        Some(Move {
            from,
            to,
            piece_moved,
            captured,
            is_en_passant: false,
            is_castle: false,
            is_promotion,
        })
    }

    /// Create an en-passant capture. The captured piece is the
    /// opposite-color pawn, not the (empty) destination square content.
    #[must_use]
    pub fn en_passant(from: Square, to: Square, board: &Board) -> Self {
        let mut mv = Move::new(from, to, board);
        mv.is_en_passant = true;
        mv.captured = Some((mv.piece_moved.0.opponent(), Piece::Pawn));
        mv
    }

    /// Create a castling move (king moving two files)
    #[must_use]
    pub fn castle(from: Square, to: Square, board: &Board) -> Self {
        let mut mv = Move::new(from, to, board);
        mv.is_castle = true;
        mv
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Simplified move text: `O-O` / `O-O-O` for castling, bare
    /// destination for pawn pushes, `<file>x<dest>` for pawn captures,
    /// `<letter>[x]<dest>` for everything else. Intentionally free of
    /// disambiguation and check suffixes.
    #[must_use]
    pub fn notation(&self) -> String {
        if self.is_castle {
            return if self.to.file() == 6 {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }

        if self.piece_moved.1 == Piece::Pawn {
            return if self.is_capture() {
                format!("{}x{}", (self.from.file() as u8 + b'a') as char, self.to)
            } else {
                self.to.to_string()
            };
        }

        let letter = self.piece_moved.1.to_char().to_ascii_uppercase();
        if self.is_capture() {
            format!("{letter}x{}", self.to)
        } else {
            format!("{letter}{}", self.to)
        }
    }
}

/// Two moves are the same move iff they share origin, destination and
/// promotion-ness; the remaining fields are derivable from the board
/// the move was built against.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.is_promotion == other.is_promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.is_promotion.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
