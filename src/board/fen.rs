//! FEN parsing and serialization.

use super::error::FenError;
use super::{Board, CastleRights, Color, Piece, Square};

/// FEN for the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Build a board from a FEN string.
    ///
    /// The first four fields (placement, side to move, castling
    /// rights, en passant target) are required; halfmove and fullmove
    /// counters are accepted and ignored. The resulting board has an
    /// empty move history rooted at the parsed position.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::TooManyRanks { found: ranks.len() });
        }
        let mut king_counts = [0usize; 2];
        for (row, rank) in ranks.iter().enumerate() {
            let mut file = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                if file >= 8 {
                    return Err(FenError::TooManyFiles { rank: row, files: file + 1 });
                }
                let piece = Piece::from_char(c.to_ascii_lowercase())
                    .ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if piece == Piece::King {
                    king_counts[color.index()] += 1;
                    board.king_square[color.index()] = Square(row, file);
                }
                board.squares[row][file] = Some((color, piece));
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles { rank: row, files: file });
            }
        }
        for color in Color::BOTH {
            let found = king_counts[color.index()];
            if found != 1 {
                return Err(FenError::BadKingCount {
                    color: match color {
                        Color::White => "White",
                        Color::Black => "Black",
                    },
                    found,
                });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastleRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => rights.white_kingside = true,
                    'Q' => rights.white_queenside = true,
                    'k' => rights.black_kingside = true,
                    'q' => rights.black_queenside = true,
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }
        board.castle_rights = rights;
        board.root_castle_rights = rights;

        if parts[3] != "-" {
            let target: Square = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            board.en_passant_target = Some(target);
            board.root_en_passant = Some(target);
        }

        Ok(board)
    }

    /// Serialize the current position as a FEN string. The halfmove
    /// clock is not tracked, so it is always emitted as 0.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for row in 0..8 {
            let mut empties = 0;
            for file in 0..8 {
                match self.squares[row][file] {
                    None => empties += 1,
                    Some((color, piece)) => {
                        if empties > 0 {
                            fen.push(char::from_digit(empties, 10).unwrap_or('0'));
                            empties = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                }
            }
            if empties > 0 {
                fen.push(char::from_digit(empties, 10).unwrap_or('0'));
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let r = self.castle_rights;
        if !(r.white_kingside || r.white_queenside || r.black_kingside || r.black_queenside) {
            fen.push('-');
        } else {
            if r.white_kingside {
                fen.push('K');
            }
            if r.white_queenside {
                fen.push('Q');
            }
            if r.black_kingside {
                fen.push('k');
            }
            if r.black_queenside {
                fen.push('q');
            }
        }

        fen.push(' ');
        match self.en_passant_target {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        let fullmove = self.move_log.len() / 2 + 1;
        fen.push_str(&format!(" 0 {fullmove}"));

        fen
    }
}
