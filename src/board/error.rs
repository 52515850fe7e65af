//! Error types for board operations.

use std::fmt;

use super::{Color, Square};

/// Error type for layout (FEN board-array) loading failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The board field does not have exactly 8 slash-separated ranks
    WrongRankCount { found: usize },
    /// A rank's digit runs and piece letters do not add up to 8 files
    WrongFileCount { rank: usize, files: usize },
    /// Invalid piece character in the board field
    InvalidPiece { char: char },
    /// The side-to-move field is missing
    MissingSideToMove,
    /// A color has more than one king
    DuplicateKing { color: Color },
    /// A color has no king
    MissingKing { color: Color },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRankCount { found } => {
                write!(f, "Layout must have 8 ranks, found {found}")
            }
            LayoutError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in layout")
            }
            LayoutError::MissingSideToMove => write!(f, "Layout has no side-to-move field"),
            LayoutError::DuplicateKing { color } => {
                write!(f, "Layout has more than one {color} king")
            }
            LayoutError::MissingKing { color } => write!(f, "Layout has no {color} king"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Broken board invariants detected while applying or checking a move.
///
/// These signal a programming error; the operation that hit one leaves the
/// board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// No piece stands on the move's start square
    EmptySquare { square: Square },
    /// A capture found nothing to capture
    MissingCapture { square: Square },
    /// A quiet move's destination is occupied
    OccupiedTarget { square: Square },
    /// A castle move has no piece on the rook square
    MissingRook { square: Square },
    /// A castle move's mover, rook or landing squares do not allow castling
    InvalidCastle { square: Square },
    /// A capture targets a piece of the mover's own color
    FriendlyCapture { square: Square },
    /// A capture targets a king
    KingCapture { square: Square },
    /// The grid and a piece list disagree about a square
    GridMismatch { square: Square },
    /// The cached king square does not hold that color's king
    KingCacheMismatch { color: Color, square: Square },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::EmptySquare { square } => write!(f, "No piece on start square {square}"),
            StateError::MissingCapture { square } => {
                write!(f, "Capture on {square} found no piece")
            }
            StateError::OccupiedTarget { square } => {
                write!(f, "Quiet move onto occupied square {square}")
            }
            StateError::MissingRook { square } => {
                write!(f, "Castling found no piece on {square}")
            }
            StateError::InvalidCastle { square } => {
                write!(f, "Cannot castle with the piece on {square}")
            }
            StateError::FriendlyCapture { square } => {
                write!(f, "Capture on {square} targets an own piece")
            }
            StateError::KingCapture { square } => write!(f, "Capture on {square} targets a king"),
            StateError::GridMismatch { square } => {
                write!(f, "Grid and piece list disagree on {square}")
            }
            StateError::KingCacheMismatch { color, square } => {
                write!(f, "{color} king cache points at {square} which holds no {color} king")
            }
        }
    }
}

impl std::error::Error for StateError {}

/// Error type for rejected move attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the requested start square
    EmptySquare { square: Square },
    /// The piece on the start square does not belong to the side to move
    WrongSide { square: Square, to_move: Color },
    /// The requested move is not in the legal move set
    IllegalMove { from: Square, to: Square },
    /// There is no committed move to take back
    NothingToTakeBack,
    /// The board refused the move because an invariant is broken
    Inconsistent(StateError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => write!(f, "No piece on {square}"),
            MoveError::WrongSide { square, to_move } => {
                write!(f, "Piece on {square} cannot move, {to_move} is to move")
            }
            MoveError::IllegalMove { from, to } => write!(f, "Illegal move {from}{to}"),
            MoveError::NothingToTakeBack => write!(f, "No move to take back"),
            MoveError::Inconsistent(err) => write!(f, "Inconsistent board state: {err}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Inconsistent(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StateError> for MoveError {
    fn from(err: StateError) -> Self {
        MoveError::Inconsistent(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_layout_error_wrong_rank_count() {
        let err = LayoutError::WrongRankCount { found: 7 };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('8'));
    }

    #[test]
    fn test_layout_error_invalid_piece() {
        let err = LayoutError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_layout_error_duplicate_king() {
        let err = LayoutError::DuplicateKing {
            color: Color::Black,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_square_error_file_bounds() {
        let err = SquareError::FileOutOfBounds { file: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_move_error_illegal_move() {
        let err = MoveError::IllegalMove {
            from: sq("e2"),
            to: sq("e5"),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_move_error_wraps_state_error() {
        let err: MoveError = StateError::EmptySquare { square: sq("d4") }.into();
        assert!(err.to_string().contains("d4"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_clone() {
        let err = LayoutError::InvalidPiece { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
