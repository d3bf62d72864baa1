use super::super::analysis::ALL_DIRECTIONS;
use super::super::{Board, Move, Square};

impl Board {
    /// King steps, each validated by re-running the king scan from the
    /// destination (the real king stays transparent to the rays), plus
    /// castling.
    pub(crate) fn king_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        for dir in ALL_DIRECTIONS {
            let Some(to) = from.offset(dir.0, dir.1) else {
                continue;
            };
            if let Some((c, _)) = self.piece_at(to) {
                if c == color {
                    continue;
                }
            }
            if !self.king_scan(to, color).in_check {
                moves.push(Move::new(from, to, self));
            }
        }
        self.castle_moves(from, moves);
    }

    /// Castling requires the right to still be held, an unattacked
    /// king, empty squares between king and rook, and unattacked
    /// transit/landing squares. The rook's own square is exempt from
    /// the attack check.
    fn castle_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        if self.is_square_attacked(from, color) {
            return;
        }

        if self.castle_rights.has(color, true) {
            if let (Some(step), Some(landing)) = (from.offset(0, 1), from.offset(0, 2)) {
                if self.is_empty(step)
                    && self.is_empty(landing)
                    && !self.is_square_attacked(step, color)
                    && !self.is_square_attacked(landing, color)
                {
                    moves.push(Move::castle(from, landing, self));
                }
            }
        }

        if self.castle_rights.has(color, false) {
            if let (Some(step), Some(landing), Some(rook_path)) =
                (from.offset(0, -1), from.offset(0, -2), from.offset(0, -3))
            {
                if self.is_empty(step)
                    && self.is_empty(landing)
                    && self.is_empty(rook_path)
                    && !self.is_square_attacked(step, color)
                    && !self.is_square_attacked(landing, color)
                {
                    moves.push(Move::castle(from, landing, self));
                }
            }
        }
    }
}
