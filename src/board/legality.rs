//! Legality filtering and attack detection.
//!
//! Attack detection places a hypothetical piece of each kind, in the
//! defender's color, on the tested square. Whatever that piece could capture
//! is exactly the set of enemy pieces of the same kind that attack the square.
//! Pawns work too because the hypothetical pawn has the defender's color, so
//! its capture diagonals point at the squares attacking pawns stand on.

use super::movegen::{Castling, Mover};
use super::{ApplyMode, Board, Color, MoveSet, Piece, Square};

impl Board {
    fn probe_mover(square: Square, defender: Color, piece: Piece) -> Mover {
        Mover {
            square,
            color: defender,
            piece,
            has_moved: true,
        }
    }

    /// True if any piece of `defender`'s opponent attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, defender: Color) -> bool {
        Piece::ALL.iter().any(|&piece| {
            let probe = Board::probe_mover(square, defender, piece);
            let moves = self.generate_moves_for(&probe, Castling::Skip);
            moves.captures().iter().any(|mv| {
                self.piece_entry(mv.to())
                    .is_some_and(|e| e.color != defender && e.piece == piece)
            })
        })
    }

    /// The six hypothetical move sets the attack detector inspects for `square`.
    #[must_use]
    pub fn attack_probes(&self, square: Square, defender: Color) -> Vec<(Piece, MoveSet)> {
        Piece::ALL
            .iter()
            .map(|&piece| {
                let probe = Board::probe_mover(square, defender, piece);
                (piece, self.generate_moves_for(&probe, Castling::Skip))
            })
            .collect()
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color)
    }

    /// Legal moves of the piece on `sq`; empty for an empty square.
    ///
    /// Each pseudo-legal candidate is probed: applied, checked for an attack
    /// on the mover's king, and unmade before the next candidate.
    pub fn legal_moves(&mut self, sq: Square) -> MoveSet {
        let Some(mover) = self.mover_at(sq) else {
            return MoveSet::new(sq);
        };
        let mut moves = self.generate_moves_for(&mover, Castling::Allowed);
        let color = mover.color;

        // Kings are never captured; a layout may still leave one en prise.
        moves.retain(|mv| self.piece_on(mv.to()) != Some(Piece::King));
        moves.retain(|mv| match self.apply(sq, *mv, ApplyMode::Probe) {
            Ok(info) => {
                let safe = !self.is_in_check(color);
                self.unmake(info);
                safe
            }
            Err(err) => {
                log::error!("dropping {sq}{mv}: {err}");
                false
            }
        });
        moves
    }

    /// Legal move sets of every piece of the side to move, skipping pieces without moves.
    pub fn all_legal_moves(&mut self) -> Vec<MoveSet> {
        let color = self.side_to_move;
        let squares: Vec<Square> = self.pieces(color).map(|e| e.square).collect();
        squares
            .into_iter()
            .map(|sq| self.legal_moves(sq))
            .filter(|set| !set.is_empty())
            .collect()
    }

    /// True if the side to move has at least one legal move.
    pub fn has_legal_move(&mut self) -> bool {
        let color = self.side_to_move;
        let squares: Vec<Square> = self.pieces(color).map(|e| e.square).collect();
        squares.into_iter().any(|sq| !self.legal_moves(sq).is_empty())
    }

    pub fn is_checkmate(&mut self) -> bool {
        let color = self.side_to_move;
        self.is_in_check(color) && !self.has_legal_move()
    }

    pub fn is_stalemate(&mut self) -> bool {
        let color = self.side_to_move;
        !self.is_in_check(color) && !self.has_legal_move()
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let sets = self.all_legal_moves();
        if depth == 1 {
            return sets.iter().map(|set| set.len() as u64).sum();
        }

        let mut nodes = 0;
        for set in &sets {
            for mv in set {
                match self.apply(set.from(), *mv, ApplyMode::Commit) {
                    Ok(info) => {
                        nodes += self.perft(depth - 1);
                        self.unmake(info);
                    }
                    Err(err) => log::error!("perft skipped {}{mv}: {err}", set.from()),
                }
            }
        }
        nodes
    }
}
