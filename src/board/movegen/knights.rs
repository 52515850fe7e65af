use super::super::{Board, MoveSet};
use super::Mover;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, mover: &Mover, moves: &mut MoveSet) {
        for (df, dr) in KNIGHT_OFFSETS {
            if let Some(to) = mover.square.offset(df, dr) {
                self.push_step(mover.color, to, moves);
            }
        }
    }
}
