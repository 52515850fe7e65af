//! Property-based tests using proptest.

use crate::board::{ApplyMode, Board, Color, Move, Square, UnmakeInfo};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn legal_pairs(board: &mut Board) -> Vec<(Square, Move)> {
    board
        .all_legal_moves()
        .into_iter()
        .flat_map(|set| {
            let from = set.from();
            set.into_iter().map(move |mv| (from, mv))
        })
        .collect()
}

/// Play up to `num_moves` random legal moves, returning the unmake tokens.
fn random_playout(board: &mut Board, rng: &mut StdRng, num_moves: usize) -> Vec<UnmakeInfo> {
    let mut history = Vec::new();
    for _ in 0..num_moves {
        let moves = legal_pairs(board);
        let Some(&(from, mv)) = moves.choose(rng) else {
            break;
        };
        history.push(board.apply(from, mv, ApplyMode::Commit).unwrap());
    }
    history
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: apply followed by unmake restores board state exactly
    #[test]
    fn prop_apply_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = board.clone();

        let mut history = random_playout(&mut board, &mut rng, num_moves);
        while let Some(info) = history.pop() {
            board.unmake(info);
        }

        prop_assert_eq!(board, initial);
    }

    /// Property: probing any pseudo-legal move and unmaking it changes nothing
    #[test]
    fn prop_pseudo_legal_probe_restores_state(seed in seed_strategy(), num_moves in 0..30usize) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let _history = random_playout(&mut board, &mut rng, num_moves);
        let snapshot = board.clone();

        for color in Color::BOTH {
            let squares: Vec<Square> = board.pieces(color).map(|e| e.square).collect();
            for from in squares {
                for mv in board.pseudo_legal_moves(from) {
                    let info = board.apply(from, mv, ApplyMode::Probe).unwrap();
                    board.unmake(info);
                    prop_assert_eq!(&board, &snapshot);
                }
            }
        }
    }

    /// Property: grid, piece lists and king cache stay consistent
    #[test]
    fn prop_invariants_hold(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = legal_pairs(&mut board);
            let Some(&(from, mv)) = moves.choose(&mut rng) else {
                break;
            };
            let _ = board.apply(from, mv, ApplyMode::Commit).unwrap();
            prop_assert_eq!(board.check_invariants(), Ok(()));
        }
    }

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..20usize) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let _history = random_playout(&mut board, &mut rng, num_moves);

        let color = board.side_to_move();
        for (from, mv) in legal_pairs(&mut board) {
            let info = board.apply(from, mv, ApplyMode::Probe).unwrap();
            prop_assert!(!board.is_in_check(color), "{}{} left king in check", from, mv);
            board.unmake(info);
        }
    }

    /// Property: only castling moves end on a square holding an own piece
    #[test]
    fn prop_no_own_color_destination(seed in seed_strategy(), num_moves in 0..30usize) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let _history = random_playout(&mut board, &mut rng, num_moves);

        let color = board.side_to_move();
        for (_, mv) in legal_pairs(&mut board) {
            if mv.is_castling() {
                prop_assert_eq!(board.color_on(mv.to()), Some(color));
            } else {
                prop_assert_ne!(board.color_on(mv.to()), Some(color));
            }
            prop_assert_eq!(mv.is_capture() && !mv.is_en_passant(), board.color_on(mv.to()) == Some(color.opponent()));
        }
    }

    /// Property: layout round-trip preserves placement and side to move
    #[test]
    fn prop_layout_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let _history = random_playout(&mut board, &mut rng, num_moves);

        let layout = board.to_layout();
        let restored = Board::from_layout(&layout).unwrap();
        prop_assert_eq!(restored.placement(), board.placement());
        prop_assert_eq!(restored.side_to_move(), board.side_to_move());
        for color in Color::BOTH {
            prop_assert_eq!(restored.king_square(color), board.king_square(color));
        }
    }

    /// Property: checkmate and stalemate are exclusive and agree with the move list
    #[test]
    fn prop_terminal_states_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let _history = random_playout(&mut board, &mut rng, num_moves);

        let mate = board.is_checkmate();
        let stale = board.is_stalemate();
        prop_assert!(!(mate && stale));
        prop_assert_eq!(mate || stale, board.all_legal_moves().is_empty());
    }
}
