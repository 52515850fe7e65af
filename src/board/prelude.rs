//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    ApplyMode, Board, BoardBuilder, Color, LayoutError, Move, MoveError, MoveSet, Perspective,
    Piece, Square, SquareError,
};
pub use crate::game::{Game, GameConfig, GameStatus, MoveResult};
