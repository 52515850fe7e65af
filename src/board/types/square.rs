//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, packed into one byte (high nibble file, low nibble rank).
///
/// Rank 0 is the first rank of the layout string, the top row of the drawn board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square((file << 4) | rank))
        } else {
            None
        }
    }

    /// Create a square from coordinates known to be on the board.
    #[inline]
    #[must_use]
    pub(crate) const fn at(file: u8, rank: u8) -> Self {
        Square(((file & 7) << 4) | (rank & 7))
    }

    /// File (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 >> 4
    }

    /// Rank (0-7, where 0 = top row of the layout)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 & 0x0F
    }

    /// The packed byte representation
    #[inline]
    #[must_use]
    pub const fn to_packed(self) -> u8 {
        self.0
    }

    /// Unpack a byte produced by [`Square::to_packed`]
    #[must_use]
    pub const fn from_packed(byte: u8) -> Option<Self> {
        Square::new(byte >> 4, byte & 0x0F)
    }

    /// Index into a 64-entry table (rank-major)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.rank() as usize) * 8 + self.file() as usize
    }

    /// Inverse of [`Square::index`]
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Square::at((idx % 8) as u8, (idx / 8) as u8)
    }

    /// The square `df` files and `dr` ranks away, or `None` if that is off the board
    #[inline]
    #[must_use]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file() as i8 + df;
        let rank = self.rank() as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::at(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares, top row first
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, 8 - self.rank())
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square::at(file, rank))
    }
}

/// Parses algebraic names (`e2`) with White drawn at the bottom.
impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        match (bytes[0], bytes[1]) {
            (f @ b'a'..=b'h', r @ b'1'..=b'8') => Ok(Square::at(f - b'a', 7 - (r - b'1'))),
            _ => Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_layout() {
        let sq = Square::new(4, 6).unwrap();
        assert_eq!(sq.to_packed(), 0x46);
        assert_eq!(Square::from_packed(0x46), Some(sq));
        assert_eq!(Square::from_packed(0x48), None);
    }

    #[test]
    fn test_new_rejects_off_board() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn test_offset_edges() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Square::new(1, 2));
    }

    #[test]
    fn test_algebraic_names() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!((e2.file(), e2.rank()), (4, 6));
        assert_eq!(e2.to_string(), "e2");
        let a8: Square = "a8".parse().unwrap();
        assert_eq!((a8.file(), a8.rank()), (0, 0));
        assert!("i1".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
    }

    #[test]
    fn test_index_round_trip() {
        for sq in Square::all() {
            assert_eq!(Square::from_index(sq.index()), sq);
        }
        assert_eq!(Square::all().count(), 64);
    }
}
