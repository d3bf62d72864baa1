//! Error types for chess board operations.

use std::fmt;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Too many ranks in position string
    TooManyRanks { found: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// A side has no king (or more than one)
    BadKingCount { color: &'static str, found: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::TooManyRanks { found } => {
                write!(f, "FEN must have 8 ranks, found {found}")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::BadKingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move-history operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Undo was requested with no applied moves to undo
    EmptyHistory,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::EmptyHistory => write!(f, "No move to undo: history is empty"),
        }
    }
}

impl std::error::Error for HistoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_too_few_parts() {
        let err = FenError::TooFewParts { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_invalid_side() {
        let err = FenError::InvalidSideToMove {
            found: "X".to_string(),
        };
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn test_square_error_row_bounds() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_history_error_display() {
        let err = HistoryError::EmptyHistory;
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = FenError::TooFewParts { found: 2 };
        let err2 = FenError::TooFewParts { found: 2 };
        assert_eq!(err1, err2);
    }
}
