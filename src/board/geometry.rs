//! Precomputed distance-to-edge table used by the sliding-piece generators.

use once_cell::sync::Lazy;

use super::Square;

/// Straight directions as (file, rank) deltas: left, right, down, up.
pub(crate) const STRAIGHT_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal directions: left-down, right-down, left-up, right-up.
///
/// Bit 0 of the index picks right over left, bit 1 picks up over down.
pub(crate) const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Steps from a square to the board edge in each direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeDistance {
    straight: [u8; 4],
    diagonal: [u8; 4],
}

impl EdgeDistance {
    fn new(file: u8, rank: u8) -> Self {
        let straight = [file, 7 - file, rank, 7 - rank];
        let mut diagonal = [0; 4];
        for (i, d) in diagonal.iter_mut().enumerate() {
            *d = straight[i & 1].min(straight[2 + (i >> 1)]);
        }
        EdgeDistance { straight, diagonal }
    }

    /// Steps to the edge along `STRAIGHT_DIRECTIONS[dir]`
    #[inline]
    #[must_use]
    pub fn straight(&self, dir: usize) -> u8 {
        self.straight[dir]
    }

    /// Steps to the edge along `DIAGONAL_DIRECTIONS[dir]`
    #[inline]
    #[must_use]
    pub fn diagonal(&self, dir: usize) -> u8 {
        self.diagonal[dir]
    }
}

static EDGE_DISTANCES: Lazy<[EdgeDistance; 64]> = Lazy::new(|| {
    let mut table = [EdgeDistance::new(0, 0); 64];
    for sq in Square::all() {
        table[sq.index()] = EdgeDistance::new(sq.file(), sq.rank());
    }
    table
});

/// Distance record for `sq`
#[inline]
#[must_use]
pub fn edge_distance(sq: Square) -> &'static EdgeDistance {
    &EDGE_DISTANCES[sq.index()]
}
