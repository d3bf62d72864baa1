//! Attack and pin analysis.
//!
//! Everything here is read-only ray-casting over the mailbox board:
//! `is_square_attacked` answers the castling transit question, and
//! `king_scan` produces the in-check flag plus the pin and check lists
//! that drive legal-move filtering.

use super::{Board, Color, Piece, Square};

pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
pub(crate) const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A friendly piece that may only move along its pin ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pin {
    pub square: Square,
    /// Ray direction from the king through the pinned piece; either
    /// sign of this vector is a legal movement line.
    pub dir: (isize, isize),
}

/// An enemy piece currently giving check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Check {
    pub attacker: Square,
    /// Direction from the king toward the attacker. For a knight this
    /// is the knight offset itself and defines no blocking line.
    pub dir: (isize, isize),
}

/// Result of scanning outward from a king square.
#[derive(Clone, Debug, Default)]
pub(crate) struct KingScan {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

/// Whether `piece` (owned by `attacker`) attacks along `dir` at ray
/// distance `dist`, where `dir` points from the target toward the
/// piece. Pawns only attack at distance 1 on the diagonal consistent
/// with their forward direction; kings only at distance 1.
fn attacks_along(piece: Piece, attacker: Color, dir: (isize, isize), dist: usize) -> bool {
    let diagonal = dir.0 != 0 && dir.1 != 0;
    match piece {
        Piece::Knight => false,
        Piece::King => dist == 1,
        Piece::Pawn => dist == 1 && diagonal && dir.0 == -attacker.pawn_direction(),
        _ if diagonal => piece.attacks_diagonally(),
        _ => piece.attacks_straight(),
    }
}

impl Board {
    /// Whether any enemy piece of `defender` attacks `square`.
    ///
    /// Ray-casts along all 8 directions to the first occupied square
    /// (a friendly piece blocks the ray) and probes the 8 knight
    /// offsets independently.
    pub(crate) fn is_square_attacked(&self, square: Square, defender: Color) -> bool {
        for dir in ALL_DIRECTIONS {
            for dist in 1..8 {
                let Some(sq) = square.offset(dir.0 * dist as isize, dir.1 * dist as isize) else {
                    break;
                };
                match self.piece_at(sq) {
                    Some((color, _)) if color == defender => break,
                    Some((color, piece)) => {
                        if attacks_along(piece, color, dir, dist) {
                            return true;
                        }
                        break;
                    }
                    None => {}
                }
            }
        }

        let enemy = defender.opponent();
        for off in KNIGHT_OFFSETS {
            if let Some(sq) = square.offset(off.0, off.1) {
                if self.piece_at(sq) == Some((enemy, Piece::Knight)) {
                    return true;
                }
            }
        }

        false
    }

    /// Run the pin/check scan from the side-to-move's king.
    pub(crate) fn pins_and_checks(&self) -> KingScan {
        let color = self.side_to_move;
        self.king_scan(self.king_square(color), color)
    }

    /// Scan outward from `king_sq` as if `ally`'s king stood there.
    ///
    /// Along each ray, the first friendly non-king piece is a pin
    /// candidate; a matching enemy slider behind it confirms the pin,
    /// with no candidate it is a check. The ally king itself is
    /// transparent to the walk, so the same scan validates hypothetical
    /// king destinations while the real king still occupies its square.
    pub(crate) fn king_scan(&self, king_sq: Square, ally: Color) -> KingScan {
        let mut scan = KingScan::default();

        for dir in ALL_DIRECTIONS {
            let mut possible_pin: Option<Square> = None;
            for dist in 1..8 {
                let Some(sq) = king_sq.offset(dir.0 * dist as isize, dir.1 * dist as isize) else {
                    break;
                };
                match self.piece_at(sq) {
                    Some((color, Piece::King)) if color == ally => {}
                    Some((color, _)) if color == ally => {
                        if possible_pin.is_none() {
                            possible_pin = Some(sq);
                        } else {
                            // Second friendly piece: nothing on this ray.
                            break;
                        }
                    }
                    Some((color, piece)) => {
                        if attacks_along(piece, color, dir, dist) {
                            match possible_pin {
                                None => {
                                    scan.in_check = true;
                                    scan.checks.push(Check { attacker: sq, dir });
                                }
                                Some(pinned) => {
                                    scan.pins.push(Pin {
                                        square: pinned,
                                        dir,
                                    });
                                }
                            }
                        }
                        break;
                    }
                    None => {}
                }
            }
        }

        // Knights check independently of the ray walk and never pin.
        let enemy = ally.opponent();
        for off in KNIGHT_OFFSETS {
            if let Some(sq) = king_sq.offset(off.0, off.1) {
                if self.piece_at(sq) == Some((enemy, Piece::Knight)) {
                    scan.in_check = true;
                    scan.checks.push(Check {
                        attacker: sq,
                        dir: off,
                    });
                }
            }
        }

        scan
    }
}
