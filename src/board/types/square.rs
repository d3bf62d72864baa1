//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (row, file).
///
/// Row 0 is Black's back rank (rank 8); row 7 is White's back rank
/// (rank 1). File 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, file)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, file: usize) -> Option<Self> {
        if row < 8 && file < 8 {
            Some(Square(row, file))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = Black's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Step from this square by a (row, file) offset, returning `None`
    /// when the result falls off the board. Ray walks are built on this.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, df: isize) -> Option<Self> {
        let row = self.0 as isize + dr;
        let file = self.1 as isize + df;
        if (0..8).contains(&row) && (0..8).contains(&file) {
            Some(Square(row as usize, file as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, file): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(row, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = match chars[0] {
            'a'..='h' => chars[0] as usize - 'a' as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let row = match chars[1] {
            '1'..='8' => 8 - (chars[1] as usize - '0' as usize),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square(row, file))
    }
}
