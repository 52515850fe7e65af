use std::env;
use std::process::ExitCode;

use chess_rules::board::START_LAYOUT;
use chess_rules::game::Game;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let layout = if args.is_empty() {
        START_LAYOUT.to_string()
    } else {
        args.join(" ")
    };

    let mut game = match Game::from_layout(&layout) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("usage: layout_status [<placement> <side>]");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", game.board());
    println!("status: {}", game.status());
    println!("move_number: {}", game.board().move_number());

    let mut board = game.board().clone();
    let sets = board.all_legal_moves();
    let total: usize = sets.iter().map(|set| set.len()).sum();
    println!("legal_moves: {total}");
    for set in &sets {
        let targets: Vec<String> = set.iter().map(|mv| mv.to_string()).collect();
        println!("{}: {}", set.from(), targets.join(" "));
    }
    ExitCode::SUCCESS
}
