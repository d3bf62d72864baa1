//! Legal move generation.
//!
//! `pseudo_moves` dispatches on piece type and already honors pins;
//! `legal_moves` layers the check rules on top: single check restricts
//! destinations to the block-or-capture set, double check allows king
//! moves only. King moves themselves are validated square by square
//! against the king scan, so the output never leaves the mover's own
//! king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::analysis::Pin;
use super::{Board, Move, Piece, Square};

/// Pin ray for the piece on `sq`, if it is pinned.
pub(crate) fn pin_direction(pins: &[Pin], sq: Square) -> Option<(isize, isize)> {
    pins.iter().find(|p| p.square == sq).map(|p| p.dir)
}

/// Whether a pinned piece may move along `dir` (either sign of the pin
/// ray is allowed).
pub(crate) fn pin_allows(pin: Option<(isize, isize)>, dir: (isize, isize)) -> bool {
    match pin {
        None => true,
        Some(p) => p == dir || p == (-dir.0, -dir.1),
    }
}

impl Board {
    /// Generate all legal moves for the side to move and refresh the
    /// derived `in_check` / `checkmate` / `stalemate` flags.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let scan = self.pins_and_checks();
        self.in_check = scan.in_check;
        let color = self.side_to_move;
        let king_sq = self.king_square(color);

        let moves = if scan.in_check {
            if scan.checks.len() == 1 {
                let mut moves = self.pseudo_moves(&scan.pins);
                let check = scan.checks[0];
                let checker_is_knight =
                    self.piece_at(check.attacker).map(|(_, p)| p) == Some(Piece::Knight);

                // Squares that block the check or capture the checker.
                let mut valid_squares = Vec::new();
                if checker_is_knight {
                    valid_squares.push(check.attacker);
                } else {
                    for dist in 1..8 {
                        let Some(sq) =
                            king_sq.offset(check.dir.0 * dist as isize, check.dir.1 * dist as isize)
                        else {
                            break;
                        };
                        valid_squares.push(sq);
                        if sq == check.attacker {
                            break;
                        }
                    }
                }

                moves.retain(|m| {
                    m.piece_moved.1 == Piece::King || valid_squares.contains(&m.to)
                });
                moves
            } else {
                // Double check: only the king can resolve it.
                let mut moves = Vec::new();
                self.king_moves(king_sq, &mut moves);
                moves
            }
        } else {
            self.pseudo_moves(&scan.pins)
        };

        if moves.is_empty() {
            self.checkmate = scan.in_check;
            self.stalemate = !scan.in_check;
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        moves
    }

    /// All moves for the side to move before check filtering. Pin
    /// constraints are applied here; king moves are already fully
    /// validated.
    pub(crate) fn pseudo_moves(&self, pins: &[Pin]) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..8 {
            for file in 0..8 {
                let from = Square(row, file);
                let Some((color, piece)) = self.piece_at(from) else {
                    continue;
                };
                if color != self.side_to_move {
                    continue;
                }
                match piece {
                    Piece::Pawn => self.pawn_moves(from, pins, &mut moves),
                    Piece::Knight => self.knight_moves(from, pins, &mut moves),
                    Piece::Bishop => {
                        self.slider_moves(from, &super::analysis::DIAGONALS, pins, &mut moves);
                    }
                    Piece::Rook => {
                        self.slider_moves(from, &super::analysis::ORTHOGONALS, pins, &mut moves);
                    }
                    Piece::Queen => {
                        self.slider_moves(from, &super::analysis::ALL_DIRECTIONS, pins, &mut moves);
                    }
                    Piece::King => self.king_moves(from, &mut moves),
                }
            }
        }
        moves
    }

    /// Count leaf nodes of the legal-move tree to `depth`.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for m in &moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.undo_move().expect("perft always has a move to undo");
        }
        nodes
    }
}
