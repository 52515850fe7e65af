//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `fen.rs` - Layout loading and rendering
//! - `movegen.rs` - Per-piece move generation
//! - `legality.rs` - Attack detection, pins and checks
//! - `make_unmake.rs` - Apply/unmake correctness
//! - `edge_cases.rs` - Special positions and rules
//! - `perft.rs` - Node counts against published values
//! - `proptest.rs` - Property-based tests

mod fen;
mod proptest;

use crate::board::{ApplyMode, Board, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse()
        .unwrap_or_else(|e| panic!("bad square {name}: {e}"))
}

/// Commit the legal move `from` -> `to`, panicking if it is not legal.
pub(super) fn play(board: &mut Board, from: &str, to: &str) {
    let from = sq(from);
    let mv = board
        .legal_moves(from)
        .get(sq(to))
        .unwrap_or_else(|| panic!("{from}{to} is not legal"));
    let _ = board.apply(from, mv, ApplyMode::Commit).unwrap();
}
