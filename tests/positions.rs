use serde::Deserialize;

use chess_rules::board::{Move, Square};
use chess_rules::game::{Game, GameStatus};

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
    mates: Vec<Mate>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    layout: String,
    status: String,
    legal_moves: usize,
}

#[derive(Deserialize)]
struct Mate {
    name: String,
    layout: String,
    from: String,
    to: String,
}

fn load() -> PositionSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn position_suite() {
    for position in load().positions {
        let mut game = Game::from_layout(&position.layout)
            .unwrap_or_else(|e| panic!("{}: {e}", position.name));

        let total: usize = game
            .board()
            .clone()
            .all_legal_moves()
            .iter()
            .map(|set| set.len())
            .sum();
        assert_eq!(
            total, position.legal_moves,
            "legal move count for {}",
            position.name
        );
        assert_eq!(
            game.status().to_string(),
            position.status,
            "status for {}",
            position.name
        );
    }
}

#[test]
fn mate_in_one_suite() {
    for mate in load().mates {
        let mut game = Game::from_layout(&mate.layout).unwrap();
        let from: Square = mate.from.parse().unwrap();
        let to: Square = mate.to.parse().unwrap();

        assert_eq!(game.status(), GameStatus::Ongoing, "{}", mate.name);
        game.attempt_move(from, Move::quiet(to))
            .unwrap_or_else(|e| panic!("{}: {e}", mate.name));
        assert!(game.is_checkmate(), "mate in one failed for {}", mate.name);
    }
}
