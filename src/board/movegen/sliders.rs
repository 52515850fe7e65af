use super::super::geometry::{edge_distance, DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};
use super::super::{Board, MoveSet};
use super::Mover;

impl Board {
    /// Ray moves for bishops, rooks and queens, bounded by the edge-distance table.
    pub(crate) fn generate_slider_moves(&self, mover: &Mover, moves: &mut MoveSet) {
        let distances = edge_distance(mover.square);

        if mover.piece.slides_straight() {
            for (dir, &(df, dr)) in STRAIGHT_DIRECTIONS.iter().enumerate() {
                self.cast_ray(mover, (df, dr), distances.straight(dir), moves);
            }
        }
        if mover.piece.slides_diagonally() {
            for (dir, &(df, dr)) in DIAGONAL_DIRECTIONS.iter().enumerate() {
                self.cast_ray(mover, (df, dr), distances.diagonal(dir), moves);
            }
        }
    }

    fn cast_ray(&self, mover: &Mover, (df, dr): (i8, i8), steps: u8, moves: &mut MoveSet) {
        for step in 1..=steps as i8 {
            let Some(to) = mover.square.offset(df * step, dr * step) else {
                break;
            };
            if !self.push_step(mover.color, to, moves) {
                break;
            }
        }
    }
}
