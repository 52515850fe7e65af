//! Move types and per-square move sets.

use std::fmt;
use std::ops::{BitOr, Index};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

const FLAG_CAPTURE: u8 = 1 << 0;
const FLAG_CASTLE: u8 = 1 << 1;
const FLAG_EN_PASSANT: u8 = 1 << 2;
const FLAG_PROMOTE_QUEEN: u8 = 1 << 3;

/// Special-case markers attached to a move, represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const NONE: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(FLAG_CAPTURE);
    pub const CASTLE: MoveFlags = MoveFlags(FLAG_CASTLE);
    pub const EN_PASSANT: MoveFlags = MoveFlags(FLAG_EN_PASSANT);
    pub const PROMOTE_TO_QUEEN: MoveFlags = MoveFlags(FLAG_PROMOTE_QUEEN);

    /// Check if every flag in `other` is set
    #[inline]
    #[must_use]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set the flags in `other`
    #[inline]
    pub fn insert(&mut self, other: MoveFlags) {
        self.0 |= other.0;
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for MoveFlags {
    type Output = MoveFlags;

    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | rhs.0)
    }
}

/// A move: its end square plus special-case flags.
///
/// The start square is carried by the enclosing [`MoveSet`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    to: Square,
    flags: MoveFlags,
}

impl Move {
    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(to: Square) -> Self {
        Move::new(to, MoveFlags::NONE)
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(to: Square) -> Self {
        Move::new(to, MoveFlags::CAPTURE)
    }

    /// Create an en passant capture landing on `to`
    #[inline]
    #[must_use]
    pub const fn en_passant(to: Square) -> Self {
        Move::new(to, MoveFlags(FLAG_CAPTURE | FLAG_EN_PASSANT))
    }

    /// Create a castle move; `rook` is the square of the rook being castled with
    #[inline]
    #[must_use]
    pub const fn castle(rook: Square) -> Self {
        Move::new(rook, MoveFlags::CASTLE)
    }

    #[inline]
    #[must_use]
    pub const fn new(to: Square, flags: MoveFlags) -> Self {
        Move { to, flags }
    }

    /// Get the destination square (the rook's square for castling)
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn flags(self) -> MoveFlags {
        self.flags
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.flags.contains(MoveFlags::CASTLE)
    }

    /// Returns true if the moving pawn turns into a queen
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.flags.contains(MoveFlags::PROMOTE_TO_QUEEN)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn promoting(self) -> Self {
        Move::new(self.to, MoveFlags(self.flags.0 | FLAG_PROMOTE_QUEEN))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}", self.to)?;
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        if self.is_promotion() {
            write!(f, " =Q")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to)?;
        if self.is_promotion() {
            write!(f, "q")?;
        }
        Ok(())
    }
}

/// Moves available to the piece on one start square, in generation order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveSet {
    from: Square,
    moves: Vec<Move>,
    captures: Vec<Move>,
}

impl MoveSet {
    #[must_use]
    pub fn new(from: Square) -> Self {
        MoveSet {
            from,
            moves: Vec::new(),
            captures: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
        if mv.is_capture() {
            self.captures.push(mv);
        }
    }

    /// The square every move in this set starts from
    #[must_use]
    pub fn from(&self) -> Square {
        self.from
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// The capture moves, a subsequence of [`MoveSet::as_slice`]
    #[must_use]
    pub fn captures(&self) -> &[Move] {
        &self.captures
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Look up the move ending on `to`
    #[must_use]
    pub fn get(&self, to: Square) -> Option<Move> {
        self.moves.iter().copied().find(|m| m.to() == to)
    }

    #[must_use]
    pub fn contains(&self, to: Square) -> bool {
        self.get(to).is_some()
    }

    /// Keep only the moves for which `keep` returns true
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(|m| keep(m));
        let moves = &self.moves;
        self.captures.retain(|c| moves.contains(c));
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Index<usize> for MoveSet {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
