use std::io::{self, BufReader};
use std::process;

use c4_rs::c4::render::column_header;
use c4_rs::c4::{GameState, Player, Status};
use c4_rs::play::play_game;
use c4_rs::strategy::{HumanStrategy, PlayerStrategy, RandomStrategy};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlayerType {
    /// Human, reading columns from stdin
    H,
    /// Random
    R,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player who moves first
    #[arg(value_enum)]
    first_player: Option<Player>,

    /// Players participating in the game, P1 first (default r,r)
    #[arg(short, long, value_delimiter = ',', value_enum)]
    players: Vec<PlayerType>,

    /// Seed for random players
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn strategy(player_type: PlayerType, seed: Option<u64>) -> Box<dyn PlayerStrategy> {
    match player_type {
        // Unbuffered beyond stdin's own buffer so two humans can share it
        PlayerType::H => Box::new(HumanStrategy::new(
            BufReader::with_capacity(1, io::stdin()),
            io::stdout(),
        )),
        PlayerType::R => match seed {
            Some(seed) => Box::new(RandomStrategy::seeded(seed)),
            None => Box::new(RandomStrategy::new()),
        },
    }
}

fn visualise_state(state: &GameState) {
    println!("\n{}", column_header());
    println!("{}", state.board());
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let players = match args.players.as_slice() {
        [] => vec![PlayerType::R, PlayerType::R],
        [_, _] => args.players.clone(),
        _ => Args::command()
            .error(
                ErrorKind::WrongNumberOfValues,
                "--players takes exactly two player types",
            )
            .exit(),
    };
    let mut strategies = [
        strategy(players[0], args.seed),
        strategy(players[1], args.seed.map(|seed| seed.wrapping_add(1))),
    ];

    let first_player = args.first_player.unwrap_or_default();
    println!("Connect Four, first player: {}", first_player);
    let state = GameState::new(first_player);
    visualise_state(&state);

    let state = match play_game(state, &mut strategies, visualise_state) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("Game stopped: {}", err);
            process::exit(1);
        }
    };

    match state.status() {
        Status::Won(player) => println!("Player {} has won the game!", player),
        Status::Draw => println!("Game ended in a draw!"),
        Status::InProgress => unreachable!("play_game only returns finished games"),
    }

    if args.json {
        match serde_json::to_string(&state) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Failed to serialise final state: {}", err);
                process::exit(1);
            }
        }
    }
}
