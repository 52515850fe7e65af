//! Core chess types.
//!
//! This module contains the value types shared by every component:
//! - `Piece`, `Color` and `Perspective`
//! - `Square` - packed one-byte board coordinate
//! - `Move`, `MoveFlags` and `MoveSet` - per-square move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveFlags, MoveSet};
pub use piece::{Color, Perspective, Piece};
pub use square::Square;
