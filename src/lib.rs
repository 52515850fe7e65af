//! Chess rules engine: board state, legal move generation, attack detection,
//! reversible move application, and checkmate/stalemate detection.
//!
//! The [`board`] module holds the rules; [`game`] wraps a board in the
//! session surface a visual layer uses.

pub mod board;
pub mod game;

pub use board::{Board, BoardBuilder, Color, Move, MoveSet, Perspective, Piece, Square};
pub use game::{BoardSnapshot, Game, GameConfig, GameStatus, MoveResult, PieceMovement};
