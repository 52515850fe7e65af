use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, Perspective, Piece, Square, StateError};

/// Index of a piece in the board's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The single record of a piece.
///
/// Captured pieces keep their entry (with the square they were taken on) so
/// that unmake can put them back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceEntry {
    pub color: Color,
    pub piece: Piece,
    pub square: Square,
    pub move_count: u32,
}

/// A piece as seen by the visual layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceView {
    pub color: Color,
    pub piece: Piece,
    pub square: Square,
}

impl From<&PieceEntry> for PieceView {
    fn from(entry: &PieceEntry) -> Self {
        PieceView {
            color: entry.color,
            piece: entry.piece,
            square: entry.square,
        }
    }
}

/// How a move is applied: a probe is reverted right away, a commit is part of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyMode {
    Probe,
    Commit,
}

/// Everything `unmake` needs to reverse one `apply`.
///
/// Not `Clone`: `unmake` consumes the token, so each apply is reverted at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a probe must be reverted with Board::unmake"]
pub struct UnmakeInfo {
    pub(crate) from: Square,
    pub(crate) mv: Move,
    pub(crate) mode: ApplyMode,
    pub(crate) mover: PieceId,
    /// Captured piece and its former index in its color's piece list
    pub(crate) captured: Option<(PieceId, usize)>,
    /// Rook moved by castling
    pub(crate) rook: Option<PieceId>,
    pub(crate) promoted: bool,
    pub(crate) previous_king_squares: [Square; 2],
    pub(crate) previous_side_to_move: Color,
    pub(crate) previous_en_passant: Option<Square>,
    pub(crate) previous_move_number: u32,
}

impl UnmakeInfo {
    /// Start square of the move this token reverts
    #[must_use]
    pub fn from(&self) -> Square {
        self.from
    }

    /// The move this token reverts
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    #[must_use]
    pub fn mode(&self) -> ApplyMode {
        self.mode
    }

    /// True if the move turned a pawn into a queen
    #[must_use]
    pub fn promoted(&self) -> bool {
        self.promoted
    }
}

/// Authoritative board state.
///
/// Pieces live in `arena`; the grid and the per-color lists only hold ids, so a
/// piece's square is stored exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) arena: Vec<PieceEntry>,
    pub(crate) grid: [Option<PieceId>; 64],
    pub(crate) piece_lists: [Vec<PieceId>; 2],
    pub(crate) king_squares: [Square; 2],
    pub(crate) side_to_move: Color,
    pub(crate) perspective: Perspective,
    /// Pawn that advanced two squares in the last applied move
    pub(crate) en_passant: Option<Square>,
    pub(crate) move_number: u32,
}

impl Board {
    /// The standard starting position, White to move and drawn at the bottom.
    pub fn new() -> Self {
        let mut board = Board::empty(Perspective::White);
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        // Scan order matches the layout loader: top row first.
        for (file, piece) in back_rank.iter().enumerate() {
            board.add_piece(Square::at(file as u8, 0), Color::Black, *piece);
        }
        for file in 0..8 {
            board.add_piece(Square::at(file, 1), Color::Black, Piece::Pawn);
        }
        for file in 0..8 {
            board.add_piece(Square::at(file, 6), Color::White, Piece::Pawn);
        }
        for (file, piece) in back_rank.iter().enumerate() {
            board.add_piece(Square::at(file as u8, 7), Color::White, *piece);
        }
        board
    }

    pub(crate) fn empty(perspective: Perspective) -> Self {
        Board {
            arena: Vec::with_capacity(32),
            grid: [None; 64],
            piece_lists: [Vec::with_capacity(16), Vec::with_capacity(16)],
            king_squares: [Square::at(0, 0); 2],
            side_to_move: Color::White,
            perspective,
            en_passant: None,
            move_number: 1,
        }
    }

    /// Create a piece on an empty square. Callers guarantee the square is free.
    pub(crate) fn add_piece(&mut self, sq: Square, color: Color, piece: Piece) -> PieceId {
        let id = PieceId(self.arena.len() as u8);
        self.arena.push(PieceEntry {
            color,
            piece,
            square: sq,
            move_count: 0,
        });
        self.grid[sq.index()] = Some(id);
        self.piece_lists[color.index()].push(id);
        if piece == Piece::King {
            self.king_squares[color.index()] = sq;
        }
        id
    }

    #[inline]
    pub(crate) fn entry(&self, id: PieceId) -> &PieceEntry {
        &self.arena[id.index()]
    }

    #[inline]
    pub(crate) fn entry_mut(&mut self, id: PieceId) -> &mut PieceEntry {
        &mut self.arena[id.index()]
    }

    #[inline]
    pub(crate) fn id_at(&self, sq: Square) -> Option<PieceId> {
        self.grid[sq.index()]
    }

    /// The piece standing on `sq`
    #[must_use]
    pub fn piece_entry(&self, sq: Square) -> Option<&PieceEntry> {
        self.id_at(sq).map(|id| self.entry(id))
    }

    /// Color and kind of the piece on `sq`
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.piece_entry(sq).map(|e| (e.color, e.piece))
    }

    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_entry(sq).map(|e| e.piece)
    }

    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_entry(sq).map(|e| e.color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.grid[sq.index()].is_none()
    }

    /// The pieces of `color` still on the board, in list order
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &PieceEntry> + '_ {
        self.piece_lists[color.index()]
            .iter()
            .map(move |&id| self.entry(id))
    }

    /// Number of pieces of `color` and kind `piece` on the board
    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces(color).filter(|e| e.piece == piece).count()
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    /// Full-move number: starts at 1 and advances after each Black move
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Verify that grid, piece lists and king cache agree.
    pub fn check_invariants(&self) -> Result<(), StateError> {
        let mut listed = 0;
        for color in Color::BOTH {
            for &id in &self.piece_lists[color.index()] {
                let entry = self.entry(id);
                if entry.color != color || self.id_at(entry.square) != Some(id) {
                    return Err(StateError::GridMismatch {
                        square: entry.square,
                    });
                }
                listed += 1;
            }

            let king_sq = self.king_square(color);
            if self.piece_at(king_sq) != Some((color, Piece::King)) {
                return Err(StateError::KingCacheMismatch {
                    color,
                    square: king_sq,
                });
            }
        }

        let occupied = self.grid.iter().filter(|cell| cell.is_some()).count();
        if occupied != listed {
            let stray = Square::all()
                .find(|&sq| {
                    self.id_at(sq).is_some_and(|id| {
                        let e = self.entry(id);
                        !self.piece_lists[e.color.index()].contains(&id)
                    })
                })
                .unwrap_or(Square::at(0, 0));
            return Err(StateError::GridMismatch { square: stray });
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Text diagram of the board, top row first, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8 {
            for file in 0..8 {
                let c = self
                    .piece_at(Square::at(file, rank))
                    .map_or('.', |(color, piece)| piece.to_layout_char(color));
                if file > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.side_to_move)
    }
}
