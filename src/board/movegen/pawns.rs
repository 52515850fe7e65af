use super::super::{Board, Move, MoveSet, Piece};
use super::Mover;

impl Board {
    pub(crate) fn generate_pawn_moves(&self, mover: &Mover, moves: &mut MoveSet) {
        let color = mover.color;
        let dir = self.perspective.pawn_direction(color);
        let home_rank = self.perspective.home_rank(color);
        let final_rank = self.perspective.final_rank(color);
        let from = mover.square;

        let promote = |mv: Move| {
            if mv.to().rank() == final_rank {
                mv.promoting()
            } else {
                mv
            }
        };

        if let Some(forward) = from.offset(0, dir) {
            if self.is_empty(forward) {
                moves.push(promote(Move::quiet(forward)));
                if from.rank() == home_rank {
                    if let Some(double) = from.offset(0, 2 * dir) {
                        if self.is_empty(double) {
                            moves.push(Move::quiet(double));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(df, dir) else {
                continue;
            };
            match self.color_on(target) {
                Some(other) if other != color => moves.push(promote(Move::capture(target))),
                Some(_) => {}
                None => {
                    // En passant: the enemy pawn beside us made its double step last move.
                    let Some(beside) = from.offset(df, 0) else {
                        continue;
                    };
                    if self.en_passant != Some(beside) {
                        continue;
                    }
                    if let Some(victim) = self.piece_entry(beside) {
                        if victim.color != color
                            && victim.piece == Piece::Pawn
                            && victim.move_count == 1
                        {
                            moves.push(Move::en_passant(target));
                        }
                    }
                }
            }
        }
    }
}
