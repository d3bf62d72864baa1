use super::super::analysis::{Pin, KNIGHT_OFFSETS};
use super::super::{Board, Move, Square};
use super::pin_direction;

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, pins: &[Pin], moves: &mut Vec<Move>) {
        // A pinned knight can never stay on its pin ray.
        if pin_direction(pins, from).is_some() {
            return;
        }
        let color = self.side_to_move;
        for off in KNIGHT_OFFSETS {
            let Some(to) = from.offset(off.0, off.1) else {
                continue;
            };
            match self.piece_at(to) {
                Some((c, _)) if c == color => {}
                _ => moves.push(Move::new(from, to, self)),
            }
        }
    }
}
