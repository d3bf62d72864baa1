use super::error::HistoryError;
use super::{Board, Move, Piece, Square};

impl Board {
    /// Apply a move to the board.
    ///
    /// Handles the special cases in one pass: en-passant removes the
    /// bypassed pawn, promotion always places a queen, castling also
    /// relocates the rook. The move plus the post-move castle-rights
    /// and en-passant snapshots are pushed onto the three parallel
    /// logs, which is what makes [`Board::undo_move`] exact.
    pub fn make_move(&mut self, m: &Move) {
        let (color, piece) = m.piece_moved;

        self.squares[m.from.row()][m.from.file()] = None;
        self.squares[m.to.row()][m.to.file()] = Some((color, piece));

        if piece == Piece::King {
            self.king_square[color.index()] = m.to;
        }

        // A two-square pawn advance arms en passant for exactly one ply.
        if piece == Piece::Pawn && m.from.row().abs_diff(m.to.row()) == 2 {
            let passed_row = (m.from.row() + m.to.row()) / 2;
            self.en_passant_target = Some(Square(passed_row, m.from.file()));
        } else {
            self.en_passant_target = None;
        }

        if m.is_en_passant {
            // The captured pawn sits on the origin's row, destination's file.
            self.squares[m.from.row()][m.to.file()] = None;
        }

        if m.is_promotion {
            self.squares[m.to.row()][m.to.file()] = Some((color, Piece::Queen));
        }

        self.update_castle_rights(m);

        if m.is_castle {
            let (rook_from_f, rook_to_f) = if m.to.file() == 6 { (7, 5) } else { (0, 3) };
            let rook = self.squares[m.to.row()][rook_from_f]
                .take()
                .expect("castling move without rook on its home square");
            self.squares[m.to.row()][rook_to_f] = Some(rook);
        }

        self.side_to_move = self.side_to_move.opponent();
        self.move_log.push(*m);
        self.castle_rights_log.push(self.castle_rights);
        self.en_passant_log.push(self.en_passant_target);

        #[cfg(debug_assertions)]
        self.assert_log_invariant();
    }

    /// Undo the most recent move, restoring board, side to move, king
    /// locations, castle rights and en-passant target exactly.
    ///
    /// Returns the undone move, or [`HistoryError::EmptyHistory`] when
    /// nothing has been applied; the three logs are never popped out
    /// of step.
    pub fn undo_move(&mut self) -> Result<Move, HistoryError> {
        let m = self.move_log.pop().ok_or(HistoryError::EmptyHistory)?;
        let (color, piece) = m.piece_moved;

        self.squares[m.from.row()][m.from.file()] = Some((color, piece));
        self.squares[m.to.row()][m.to.file()] = m.captured;

        if piece == Piece::King {
            self.king_square[color.index()] = m.from;
        }

        if m.is_en_passant {
            // The pawn was captured one row behind the destination, not
            // on the destination square itself.
            self.squares[m.to.row()][m.to.file()] = None;
            self.squares[m.from.row()][m.to.file()] = m.captured;
        }

        if m.is_castle {
            let (rook_home_f, rook_castled_f) = if m.to.file() == 6 { (7, 5) } else { (0, 3) };
            let rook = self.squares[m.to.row()][rook_castled_f]
                .take()
                .expect("undoing castling without rook on its castled square");
            self.squares[m.to.row()][rook_home_f] = Some(rook);
        }

        self.side_to_move = self.side_to_move.opponent();

        self.castle_rights_log.pop();
        self.en_passant_log.pop();
        self.castle_rights = self
            .castle_rights_log
            .last()
            .copied()
            .unwrap_or(self.root_castle_rights);
        self.en_passant_target = self
            .en_passant_log
            .last()
            .copied()
            .unwrap_or(self.root_en_passant);

        // Stale terminal flags must never survive an undo.
        self.checkmate = false;
        self.stalemate = false;

        #[cfg(debug_assertions)]
        self.assert_log_invariant();

        Ok(m)
    }

    /// Clear castle rights lost by this move. Rights only ever
    /// decrease here; they come back exclusively through undo.
    fn update_castle_rights(&mut self, m: &Move) {
        let (color, piece) = m.piece_moved;

        match piece {
            Piece::King => self.castle_rights.clear_both(color),
            Piece::Rook => {
                if m.from == Square(color.back_row(), 0) {
                    self.castle_rights.clear(color, false);
                } else if m.from == Square(color.back_row(), 7) {
                    self.castle_rights.clear(color, true);
                }
            }
            _ => {}
        }

        // A rook captured on its home square clears the right for its
        // owner even if that rook never moved.
        if let Some((victim_color, Piece::Rook)) = m.captured {
            if m.to == Square(victim_color.back_row(), 0) {
                self.castle_rights.clear(victim_color, false);
            } else if m.to == Square(victim_color.back_row(), 7) {
                self.castle_rights.clear(victim_color, true);
            }
        }
    }

    #[cfg(debug_assertions)]
    pub(crate) fn assert_log_invariant(&self) {
        debug_assert_eq!(self.move_log.len(), self.castle_rights_log.len());
        debug_assert_eq!(self.move_log.len(), self.en_passant_log.len());
        for color in super::Color::BOTH {
            debug_assert_eq!(
                self.piece_at(self.king_square[color.index()]),
                Some((color, Piece::King)),
                "king cache out of sync for {color}"
            );
        }
    }
}
