use super::super::analysis::Pin;
use super::super::{Board, Move, Square};
use super::{pin_allows, pin_direction};

impl Board {
    /// Ray-walk moves for bishops, rooks and queens over the given
    /// direction set, stopping at the first occupied square (included
    /// as a capture when hostile).
    pub(crate) fn slider_moves(
        &self,
        from: Square,
        directions: &[(isize, isize)],
        pins: &[Pin],
        moves: &mut Vec<Move>,
    ) {
        let color = self.side_to_move;
        let pin = pin_direction(pins, from);

        for &dir in directions {
            if !pin_allows(pin, dir) {
                continue;
            }
            for dist in 1..8 {
                let Some(to) = from.offset(dir.0 * dist as isize, dir.1 * dist as isize) else {
                    break;
                };
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to, self)),
                    Some((c, _)) if c != color => {
                        moves.push(Move::new(from, to, self));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
