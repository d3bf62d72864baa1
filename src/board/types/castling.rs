//! Castling rights snapshot type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Castling rights for both sides, stored as four independent flags.
///
/// Snapshots of this value are pushed onto the board's castle-rights
/// log after every move, so a right cleared by a move reappears only
/// through undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastleRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastleRights {
    /// All castling rights (the starting position)
    #[must_use]
    pub const fn all() -> Self {
        CastleRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastleRights {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    /// Check whether a side still holds a specific right
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        match (color, kingside) {
            (Color::White, true) => self.white_kingside,
            (Color::White, false) => self.white_queenside,
            (Color::Black, true) => self.black_kingside,
            (Color::Black, false) => self.black_queenside,
        }
    }

    /// Clear a specific right; rights are never set back outside undo
    #[inline]
    pub fn clear(&mut self, color: Color, kingside: bool) {
        match (color, kingside) {
            (Color::White, true) => self.white_kingside = false,
            (Color::White, false) => self.white_queenside = false,
            (Color::Black, true) => self.black_kingside = false,
            (Color::Black, false) => self.black_queenside = false,
        }
    }

    /// Clear both rights for a color (a king move)
    #[inline]
    pub fn clear_both(&mut self, color: Color) {
        self.clear(color, true);
        self.clear(color, false);
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        CastleRights::all()
    }
}
