//! Game session: the surface a visual layer talks to.
//!
//! A `Game` owns one `Board`, answers "what can this piece do", commits
//! requested moves after checking them against the legal set, and reports
//! what changed so the caller can update its drawing.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, GameStatus};
//! use chess_rules::board::Square;
//!
//! let mut game = Game::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! let mv = game.move_set_for(e2).get(e4).unwrap();
//! let result = game.attempt_move(e2, mv).unwrap();
//! assert_eq!(result.moved[0].to, e4);
//! assert_eq!(game.status(), GameStatus::Ongoing);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    ApplyMode, Board, Color, LayoutError, Move, MoveError, MoveSet, Perspective, Piece, PieceView,
    Square, UnmakeInfo, START_LAYOUT,
};

/// How to set up a new game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Layout string: placement plus side to move
    pub layout: String,
    /// Which side is drawn at the bottom
    pub perspective: Perspective,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            layout: START_LAYOUT.to_string(),
            perspective: Perspective::White,
        }
    }
}

/// One piece changing squares as part of a committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceMovement {
    pub color: Color,
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

/// What a committed move changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveResult {
    /// The mover first, then the rook when castling
    pub moved: Vec<PieceMovement>,
    /// The piece taken, with the square it was taken on
    pub captured: Option<PieceView>,
    /// Square of a pawn that became a queen
    pub promoted: Option<Square>,
    pub castled: bool,
}

/// Every piece on the board, for redrawing from scratch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSnapshot {
    pub pieces: Vec<PieceView>,
    pub side_to_move: Color,
    pub perspective: Perspective,
    pub move_number: u32,
}

impl BoardSnapshot {
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&PieceView> {
        self.pieces.iter().find(|p| p.square == square)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

/// Broken invariants are errors; ordinary illegal attempts are warnings.
fn rejection_level(err: &MoveError) -> log::Level {
    match err {
        MoveError::Inconsistent(_) => log::Level::Error,
        _ => log::Level::Warn,
    }
}

/// A game in progress.
#[derive(Debug)]
pub struct Game {
    board: Board,
    last_move: Option<UnmakeInfo>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new())
    }

    /// A game from a layout string, White drawn at the bottom.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        Board::from_layout(layout).map(Game::from_board)
    }

    pub fn with_config(config: &GameConfig) -> Result<Self, LayoutError> {
        Board::from_layout_with(&config.layout, config.perspective).map(Game::from_board)
    }

    /// Wrap a board built elsewhere, e.g. with `BoardBuilder`.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            last_move: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[must_use]
    pub fn perspective(&self) -> Perspective {
        self.board.perspective()
    }

    /// Legal moves of the piece on `square`; empty for an empty square.
    ///
    /// Pieces of the side not to move get their moves too, so a caller can
    /// show them; `attempt_move` is what enforces turns.
    pub fn move_set_for(&mut self, square: Square) -> MoveSet {
        self.board.legal_moves(square)
    }

    /// Commit `mv` for the piece on `from` if it is legal for the side to move.
    ///
    /// Only the move's target square is taken from the caller; the flags come
    /// from the generated legal move. On error nothing changes.
    pub fn attempt_move(&mut self, from: Square, mv: Move) -> Result<MoveResult, MoveError> {
        let result = self.commit(from, mv);
        if let Err(err) = &result {
            log::log!(rejection_level(err), "rejected move {from}{}: {err}", mv.to());
        }
        result
    }

    fn commit(&mut self, from: Square, requested: Move) -> Result<MoveResult, MoveError> {
        let (color, piece) = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        let to_move = self.board.side_to_move();
        if color != to_move {
            return Err(MoveError::WrongSide {
                square: from,
                to_move,
            });
        }

        let mv = self
            .board
            .legal_moves(from)
            .get(requested.to())
            .ok_or(MoveError::IllegalMove {
                from,
                to: requested.to(),
            })?;

        let info = self.board.apply(from, mv, ApplyMode::Commit)?;

        let mut moved = vec![PieceMovement {
            color,
            piece,
            from,
            to: self.board.entry(info.mover).square,
        }];
        if let Some(rook) = info.rook {
            let entry = self.board.entry(rook);
            moved.push(PieceMovement {
                color,
                piece: entry.piece,
                from: mv.to(),
                to: entry.square,
            });
        }
        let captured = info
            .captured
            .map(|(id, _)| PieceView::from(self.board.entry(id)));
        let promoted = info.promoted().then(|| mv.to());

        self.last_move = Some(info);
        Ok(MoveResult {
            moved,
            captured,
            promoted,
            castled: mv.is_castling(),
        })
    }

    /// Revert the last committed move. Only one level is kept.
    pub fn take_back(&mut self) -> Result<(), MoveError> {
        let info = self.last_move.take().ok_or(MoveError::NothingToTakeBack)?;
        log::debug!("taking back {}{}", info.from(), info.mv());
        self.board.unmake(info);
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let pieces = Color::BOTH
            .iter()
            .flat_map(|&color| self.board.pieces(color).map(PieceView::from))
            .collect();
        BoardSnapshot {
            pieces,
            side_to_move: self.board.side_to_move(),
            perspective: self.board.perspective(),
            move_number: self.board.move_number(),
        }
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.board.side_to_move())
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.board.is_checkmate()
    }

    pub fn is_stalemate(&mut self) -> bool {
        self.board.is_stalemate()
    }

    pub fn status(&mut self) -> GameStatus {
        let in_check = self.is_in_check();
        match (in_check, self.board.has_legal_move()) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }
}
