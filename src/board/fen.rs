use std::str::FromStr;

use super::error::LayoutError;
use super::{Board, Color, Perspective, Piece, Square};

/// Standard starting layout, White to move.
pub const START_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

impl Board {
    /// Load a board from a layout string, drawn with White at the bottom.
    ///
    /// The first field holds 8 slash-separated ranks, top row first; the
    /// second field's first character selects the side to move (`w` for
    /// White, anything else for Black). Further standard FEN fields are
    /// accepted and ignored.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        Board::from_layout_with(layout, Perspective::White)
    }

    /// Load a board from a layout string drawn from `perspective`'s side.
    pub fn from_layout_with(layout: &str, perspective: Perspective) -> Result<Self, LayoutError> {
        let mut board = Board::empty(perspective);
        let mut fields = layout.split_whitespace();
        let placement = fields.next().unwrap_or("");

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::WrongRankCount { found: ranks.len() });
        }

        let mut kings_seen = [false; 2];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                    continue;
                }

                let piece = Piece::from_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(LayoutError::WrongFileCount {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                if piece == Piece::King {
                    if kings_seen[color.index()] {
                        return Err(LayoutError::DuplicateKing { color });
                    }
                    kings_seen[color.index()] = true;
                }
                board.add_piece(Square::at(file as u8, rank_idx as u8), color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(LayoutError::WrongFileCount {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        for color in Color::BOTH {
            if !kings_seen[color.index()] {
                return Err(LayoutError::MissingKing { color });
            }
        }

        let side = fields.next().ok_or(LayoutError::MissingSideToMove)?;
        board.side_to_move = if side.starts_with('w') {
            Color::White
        } else {
            Color::Black
        };

        log::debug!(
            "loaded layout '{}' ({} white, {} black pieces, {} to move)",
            placement,
            board.piece_lists[Color::White.index()].len(),
            board.piece_lists[Color::Black.index()].len(),
            board.side_to_move
        );
        Ok(board)
    }

    /// The board field of the layout string, re-derived from the grid.
    #[must_use]
    pub fn placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in 0..8 {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::at(file, rank)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_layout_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// Placement plus side-to-move token.
    #[must_use]
    pub fn to_layout(&self) -> String {
        let active = if self.side_to_move == Color::White {
            "w"
        } else {
            "b"
        };
        format!("{} {}", self.placement(), active)
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_layout(s)
    }
}
