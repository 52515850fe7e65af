use super::movegen::{castle_king_file, castle_rook_file};
use super::{ApplyMode, Board, Color, Move, Piece, PieceId, Square, StateError, UnmakeInfo};

impl Board {
    fn set_square(&mut self, id: PieceId, to: Square) {
        self.entry_mut(id).square = to;
        self.grid[to.index()] = Some(id);
        let entry = self.entry(id);
        if entry.piece == Piece::King {
            self.king_squares[entry.color.index()] = to;
        }
    }

    /// Apply `mv` for the piece on `from`.
    ///
    /// A commit also hands the turn to the other side; a probe leaves the side
    /// to move alone. Every apply must be reverted with [`Board::unmake`] before
    /// another apply at the same level. Nothing is mutated when an error is
    /// returned.
    pub fn apply(
        &mut self,
        from: Square,
        mv: Move,
        mode: ApplyMode,
    ) -> Result<UnmakeInfo, StateError> {
        let mover = self
            .id_at(from)
            .ok_or(StateError::EmptySquare { square: from })?;

        let mut info = UnmakeInfo {
            from,
            mv,
            mode,
            mover,
            captured: None,
            rook: None,
            promoted: false,
            previous_king_squares: self.king_squares,
            previous_side_to_move: self.side_to_move,
            previous_en_passant: self.en_passant,
            previous_move_number: self.move_number,
        };

        if mv.is_castling() {
            let rook = self
                .id_at(mv.to())
                .ok_or(StateError::MissingRook { square: mv.to() })?;
            let rank = from.rank();
            let king_to = Square::at(castle_king_file(mv.to().file()), rank);
            let rook_to = Square::at(castle_rook_file(mv.to().file()), rank);

            let king = self.entry(mover);
            let partner = self.entry(rook);
            let lands_free = |sq: Square| sq == from || sq == mv.to() || self.is_empty(sq);
            if king.piece != Piece::King
                || rook == mover
                || partner.piece != Piece::Rook
                || partner.color != king.color
                || mv.to().rank() != rank
                || !lands_free(king_to)
                || !lands_free(rook_to)
            {
                return Err(StateError::InvalidCastle { square: mv.to() });
            }

            self.grid[from.index()] = None;
            self.grid[mv.to().index()] = None;
            self.set_square(mover, king_to);
            self.set_square(rook, rook_to);
            self.entry_mut(mover).move_count += 1;
            self.entry_mut(rook).move_count += 1;
            self.en_passant = None;
            info.rook = Some(rook);
        } else {
            let capture_sq = if mv.is_en_passant() {
                Square::at(mv.to().file(), from.rank())
            } else {
                mv.to()
            };
            let victim = if mv.is_capture() {
                let victim = self
                    .id_at(capture_sq)
                    .ok_or(StateError::MissingCapture { square: capture_sq })?;
                let target = self.entry(victim);
                if target.color == self.entry(mover).color {
                    return Err(StateError::FriendlyCapture { square: capture_sq });
                }
                if target.piece == Piece::King {
                    return Err(StateError::KingCapture { square: capture_sq });
                }
                let color = target.color;
                let pos = self.piece_lists[color.index()]
                    .iter()
                    .position(|&id| id == victim)
                    .ok_or(StateError::GridMismatch { square: capture_sq })?;
                Some((victim, color, pos))
            } else {
                None
            };
            if !mv.is_capture() && !self.is_empty(mv.to()) {
                return Err(StateError::OccupiedTarget { square: mv.to() });
            }

            if let Some((victim, color, pos)) = victim {
                self.piece_lists[color.index()].remove(pos);
                self.grid[capture_sq.index()] = None;
                info.captured = Some((victim, pos));
            }

            self.grid[from.index()] = None;
            self.set_square(mover, mv.to());
            let entry = self.entry_mut(mover);
            entry.move_count += 1;
            let (color, piece) = (entry.color, entry.piece);

            self.en_passant = None;
            if piece == Piece::Pawn {
                if from.rank().abs_diff(mv.to().rank()) == 2 {
                    self.en_passant = Some(mv.to());
                }
                if mv.to().rank() == self.perspective.final_rank(color) {
                    self.entry_mut(mover).piece = Piece::Queen;
                    info.promoted = true;
                }
            }
        }

        match mode {
            ApplyMode::Commit => {
                if self.side_to_move == Color::Black {
                    self.move_number += 1;
                }
                self.side_to_move = self.side_to_move.opponent();
                log::debug!("committed {from}{mv:?}");
            }
            ApplyMode::Probe => log::trace!("probing {from}{mv:?}"),
        }
        Ok(info)
    }

    /// Exactly reverse the `apply` that produced `info`.
    pub fn unmake(&mut self, info: UnmakeInfo) {
        let mv = info.mv;

        if let Some(rook) = info.rook {
            let king_now = self.entry(info.mover).square;
            let rook_now = self.entry(rook).square;
            self.grid[king_now.index()] = None;
            self.grid[rook_now.index()] = None;
            self.set_square(info.mover, info.from);
            self.set_square(rook, mv.to());
            self.entry_mut(info.mover).move_count -= 1;
            self.entry_mut(rook).move_count -= 1;
        } else {
            self.grid[mv.to().index()] = None;
            let entry = self.entry_mut(info.mover);
            entry.move_count -= 1;
            if info.promoted {
                entry.piece = Piece::Pawn;
            }
            self.set_square(info.mover, info.from);

            if let Some((victim, pos)) = info.captured {
                let entry = *self.entry(victim);
                self.grid[entry.square.index()] = Some(victim);
                self.piece_lists[entry.color.index()].insert(pos, victim);
            }
        }

        self.king_squares = info.previous_king_squares;
        self.side_to_move = info.previous_side_to_move;
        self.en_passant = info.previous_en_passant;
        self.move_number = info.previous_move_number;
    }
}
