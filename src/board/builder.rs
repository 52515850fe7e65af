//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing layout strings,
//! including pieces that count as having moved already.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let sq = |name: &str| name.parse::<Square>().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(sq("e1"), Color::White, Piece::King)
//!     .piece(sq("e8"), Color::Black, Piece::King)
//!     .piece(sq("a2"), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_at(sq("a2")), Some((Color::White, Piece::Pawn)));
//! ```

use super::{Board, Color, LayoutError, Perspective, Piece, Square};

#[derive(Clone, Copy, Debug)]
struct Placement {
    square: Square,
    color: Color,
    piece: Piece,
    move_count: u32,
}

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<Placement>,
    side_to_move: Color,
    perspective: Perspective,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            perspective: Perspective::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for color in Color::BOTH {
            for entry in board.pieces(color) {
                builder = builder.piece(entry.square, entry.color, entry.piece);
            }
        }
        builder
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|p| p.square != square);
        self.pieces.push(Placement {
            square,
            color,
            piece,
            move_count: 0,
        });
        self
    }

    /// Mark the piece on `square` as having moved once.
    ///
    /// Blocks castling with that king or rook and double steps are still
    /// decided by rank, so this mainly matters for kings and rooks.
    #[must_use]
    pub fn moved(mut self, square: Square) -> Self {
        if let Some(p) = self.pieces.iter_mut().find(|p| p.square == square) {
            p.move_count += 1;
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.square != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set which side is drawn at the bottom (controls pawn direction).
    #[must_use]
    pub const fn perspective(mut self, perspective: Perspective) -> Self {
        self.perspective = perspective;
        self
    }

    /// Build the board.
    ///
    /// Pieces are created in layout scan order. Fails unless each color has
    /// exactly one king.
    pub fn build(mut self) -> Result<Board, LayoutError> {
        for color in Color::BOTH {
            match self
                .pieces
                .iter()
                .filter(|p| p.color == color && p.piece == Piece::King)
                .count()
            {
                0 => return Err(LayoutError::MissingKing { color }),
                1 => {}
                _ => return Err(LayoutError::DuplicateKing { color }),
            }
        }

        self.pieces.sort_by_key(|p| p.square.index());
        let mut board = Board::empty(self.perspective);
        for p in &self.pieces {
            let id = board.add_piece(p.square, p.color, p.piece);
            board.entry_mut(id).move_count = p.move_count;
        }
        board.side_to_move = self.side_to_move;
        Ok(board)
    }
}
