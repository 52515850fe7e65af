//! Layout loading, validation and rendering.

use super::sq;
use crate::board::{Board, Color, LayoutError, Perspective, Piece, START_LAYOUT};

#[test]
fn test_start_layout_matches_new() {
    let board = Board::from_layout(START_LAYOUT).unwrap();
    assert_eq!(board, Board::new());
    assert_eq!(board.to_layout(), START_LAYOUT);
}

#[test]
fn test_start_piece_counts() {
    let board = Board::new();
    for color in Color::BOTH {
        assert_eq!(board.count(color, Piece::Pawn), 8);
        assert_eq!(board.count(color, Piece::Knight), 2);
        assert_eq!(board.count(color, Piece::Bishop), 2);
        assert_eq!(board.count(color, Piece::Rook), 2);
        assert_eq!(board.count(color, Piece::Queen), 1);
        assert_eq!(board.count(color, Piece::King), 1);
        assert_eq!(board.pieces(color).count(), 16);
    }
    assert_eq!(board.king_square(Color::White), sq("e1"));
    assert_eq!(board.king_square(Color::Black), sq("e8"));
    assert_eq!(board.move_number(), 1);
}

#[test]
fn test_extra_fields_ignored() {
    let board = Board::from_layout("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
        .unwrap();
    assert_eq!(board, Board::new());
}

#[test]
fn test_black_to_move() {
    let board: Board = "4k3/8/8/8/8/8/8/4K3 b".parse().unwrap();
    assert_eq!(board.side_to_move(), Color::Black);
    assert_eq!(board.to_layout(), "4k3/8/8/8/8/8/8/4K3 b");
}

#[test]
fn test_wrong_rank_count() {
    assert_eq!(
        Board::from_layout("8/8/8 w").unwrap_err(),
        LayoutError::WrongRankCount { found: 3 }
    );
}

#[test]
fn test_short_rank() {
    assert_eq!(
        Board::from_layout("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w").unwrap_err(),
        LayoutError::WrongFileCount { rank: 1, files: 7 }
    );
}

#[test]
fn test_long_rank() {
    let err = Board::from_layout("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w").unwrap_err();
    assert_eq!(err, LayoutError::WrongFileCount { rank: 2, files: 9 });
}

#[test]
fn test_invalid_piece_letter() {
    assert_eq!(
        Board::from_layout("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w").unwrap_err(),
        LayoutError::InvalidPiece { char: 'X' }
    );
}

#[test]
fn test_missing_side_to_move() {
    assert_eq!(
        Board::from_layout("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap_err(),
        LayoutError::MissingSideToMove
    );
}

#[test]
fn test_king_count_validated() {
    assert_eq!(
        Board::from_layout("kk6/8/8/8/8/8/8/4K3 w").unwrap_err(),
        LayoutError::DuplicateKing {
            color: Color::Black
        }
    );
    assert_eq!(
        Board::from_layout("8/8/8/8/8/8/8/4K3 w").unwrap_err(),
        LayoutError::MissingKing {
            color: Color::Black
        }
    );
}

#[test]
fn test_perspective_kept_on_load() {
    let board = Board::from_layout_with(START_LAYOUT, Perspective::Black).unwrap();
    assert_eq!(board.perspective(), Perspective::Black);
    assert_eq!(board.placement(), Board::new().placement());
}

#[test]
fn test_display_diagram() {
    let text = Board::new().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "r n b q k b n r");
    assert_eq!(lines[4], ". . . . . . . .");
    assert_eq!(lines[7], "R N B Q K B N R");
    assert_eq!(lines[8], "White to move");
}

#[test]
fn test_scan_order_piece_lists() {
    let board = Board::from_layout("4k3/8/8/8/8/8/PP6/R3K3 w").unwrap();
    let white: Vec<_> = board.pieces(Color::White).map(|e| e.square).collect();
    assert_eq!(white, vec![sq("a2"), sq("b2"), sq("a1"), sq("e1")]);
}
