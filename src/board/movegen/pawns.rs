use super::super::analysis::Pin;
use super::super::{Board, Move, Square};
use super::{pin_allows, pin_direction};

impl Board {
    pub(crate) fn pawn_moves(&self, from: Square, pins: &[Pin], moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();
        let pin = pin_direction(pins, from);

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) && pin_allows(pin, (dir, 0)) {
                moves.push(Move::new(from, forward, self));
                if from.row() == color.pawn_start_row() {
                    let double = from
                        .offset(2 * dir, 0)
                        .expect("double advance from the home row stays on the board");
                    if self.is_empty(double) {
                        moves.push(Move::new(from, double, self));
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            if !pin_allows(pin, (dir, df)) {
                continue;
            }
            match self.piece_at(target) {
                Some((target_color, _)) if target_color != color => {
                    moves.push(Move::new(from, target, self));
                }
                None if Some(target) == self.en_passant_target => {
                    if !self.en_passant_exposes_king(from, target) {
                        moves.push(Move::en_passant(from, target, self));
                    }
                }
                _ => {}
            }
        }
    }

    /// The one case normal pin tracking cannot see: capturing en
    /// passant removes two pawns from the king's rank at once, which
    /// can uncover a rook or queen along that rank. Scan the rank
    /// outward from the king, treating both vanishing pawns as empty.
    fn en_passant_exposes_king(&self, from: Square, target: Square) -> bool {
        let color = self.side_to_move;
        let king_sq = self.king_square(color);
        if king_sq.row() != from.row() {
            return false;
        }

        let captured_sq = Square(from.row(), target.file());
        let step: isize = if from.file() > king_sq.file() { 1 } else { -1 };

        for dist in 1..8 {
            let Some(sq) = king_sq.offset(0, step * dist) else {
                return false;
            };
            if sq == from || sq == captured_sq {
                continue;
            }
            match self.piece_at(sq) {
                None => {}
                Some((c, p)) if c != color && p.attacks_straight() => return true,
                Some(_) => return false,
            }
        }
        false
    }
}
