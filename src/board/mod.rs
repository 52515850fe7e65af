//! Board state and chess rules.
//!
//! An arena-backed 8x8 board with per-color piece lists and a king-square
//! cache. Moves are generated per square, filtered for legality with a
//! make/unmake probe, and committed with the same reversible `apply`.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let mut board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let moves = board.legal_moves(e2);
//! assert_eq!(moves.len(), 2);
//! ```

mod builder;
mod error;
mod fen;
pub mod geometry;
mod legality;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{LayoutError, MoveError, SquareError, StateError};
pub use fen::START_LAYOUT;
pub use state::{ApplyMode, Board, PieceEntry, PieceId, PieceView, UnmakeInfo};
pub use types::{Color, Move, MoveFlags, MoveSet, Perspective, Piece, Square};
