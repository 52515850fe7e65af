//! Pseudo-legal move generation.
//!
//! Moves respect board edges and occupancy but may still leave the mover's
//! king attacked; `legality` filters those out.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::{castle_king_file, castle_rook_file};

use super::{Board, Color, Move, MoveSet, Piece, Square};

/// A piece to generate moves for.
///
/// Usually a real piece read from the board, but the attack detector also
/// synthesizes hypothetical movers on squares they do not occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Mover {
    pub square: Square,
    pub color: Color,
    pub piece: Piece,
    pub has_moved: bool,
}

/// Whether king generation may append castling moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Castling {
    Allowed,
    Skip,
}

impl Board {
    /// The mover standing on `sq`, if any
    pub(crate) fn mover_at(&self, sq: Square) -> Option<Mover> {
        self.piece_entry(sq).map(|e| Mover {
            square: sq,
            color: e.color,
            piece: e.piece,
            has_moved: e.move_count > 0,
        })
    }

    pub(crate) fn generate_moves_for(&self, mover: &Mover, castling: Castling) -> MoveSet {
        let mut moves = MoveSet::new(mover.square);
        match mover.piece {
            Piece::Pawn => self.generate_pawn_moves(mover, &mut moves),
            Piece::Knight => self.generate_knight_moves(mover, &mut moves),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.generate_slider_moves(mover, &mut moves);
            }
            Piece::King => self.generate_king_moves(mover, castling, &mut moves),
        }
        moves
    }

    /// Pseudo-legal moves of the piece on `sq` (castling excluded).
    ///
    /// Returns an empty set for an empty square.
    #[must_use]
    pub fn pseudo_legal_moves(&self, sq: Square) -> MoveSet {
        match self.mover_at(sq) {
            Some(mover) => self.generate_moves_for(&mover, Castling::Skip),
            None => MoveSet::new(sq),
        }
    }

    /// Quiet move onto an empty square or capture of an enemy piece; nothing for own pieces.
    ///
    /// Returns true if `to` was empty, i.e. a ray may continue past it.
    pub(crate) fn push_step(&self, color: Color, to: Square, moves: &mut MoveSet) -> bool {
        match self.color_on(to) {
            None => {
                moves.push(Move::quiet(to));
                true
            }
            Some(other) if other != color => {
                moves.push(Move::capture(to));
                false
            }
            Some(_) => false,
        }
    }
}
