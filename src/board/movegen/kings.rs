use super::super::{Board, Color, Move, MoveSet, Piece, Square};
use super::{Castling, Mover};

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Files of the queenside and kingside corner rooks.
const ROOK_FILES: [u8; 2] = [0, 7];

/// File a castling king lands on, given the rook's file
pub(crate) const fn castle_king_file(rook_file: u8) -> u8 {
    if rook_file == 7 {
        6
    } else {
        2
    }
}

/// File a castling rook lands on, given its starting file
pub(crate) const fn castle_rook_file(rook_file: u8) -> u8 {
    if rook_file == 7 {
        5
    } else {
        3
    }
}

impl Board {
    pub(crate) fn generate_king_moves(
        &self,
        mover: &Mover,
        castling: Castling,
        moves: &mut MoveSet,
    ) {
        for (df, dr) in KING_OFFSETS {
            if let Some(to) = mover.square.offset(df, dr) {
                self.push_step(mover.color, to, moves);
            }
        }

        if castling == Castling::Allowed
            && !mover.has_moved
            && !self.is_square_attacked(mover.square, mover.color)
        {
            for rook_file in ROOK_FILES {
                if self.can_castle(mover.square, mover.color, rook_file) {
                    moves.push(Move::castle(Square::at(rook_file, mover.square.rank())));
                }
            }
        }
    }

    fn can_castle(&self, king_sq: Square, color: Color, rook_file: u8) -> bool {
        let rank = king_sq.rank();
        let king_file = castle_king_file(rook_file);
        let rook_sq = Square::at(rook_file, rank);
        match self.piece_entry(rook_sq) {
            Some(rook)
                if rook.color == color && rook.piece == Piece::Rook && rook.move_count == 0 => {}
            _ => return false,
        }

        let (lo, hi) = if rook_file < king_sq.file() {
            (rook_file + 1, king_sq.file())
        } else {
            (king_sq.file() + 1, rook_file)
        };
        if !(lo..hi).all(|file| self.is_empty(Square::at(file, rank))) {
            return false;
        }

        // Landing squares must be free unless the castling pair itself stands there.
        let lands_free = |file: u8| {
            let sq = Square::at(file, rank);
            sq == king_sq || sq == rook_sq || self.is_empty(sq)
        };
        if !lands_free(king_file) || !lands_free(castle_rook_file(rook_file)) {
            return false;
        }

        // Every square the king crosses, destination included.
        let from = king_sq.file();
        let path: Vec<u8> = if king_file > from {
            (from + 1..=king_file).collect()
        } else if king_file < from {
            (king_file..from).rev().collect()
        } else {
            Vec::new()
        };
        path.into_iter()
            .all(|file| !self.is_square_attacked(Square::at(file, rank), color))
    }
}
