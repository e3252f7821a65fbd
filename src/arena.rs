//! Plays configured players against one another over many games
use std::io::Write;
use std::path::PathBuf;
use std::{process, thread};

use c4_rs::c4::{GameState, Player};
use c4_rs::config::ArenaSettings;
use c4_rs::play::{play_game, Tally};
use clap::Parser;
use env_logger::fmt::Formatter;
use log::Record;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    config_file: PathBuf,

    /// Print the tally as JSON instead of a table
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let thread_id = thread::current().id();
            let timestamp = buf.timestamp_millis();
            writeln!(
                buf,
                "[{}] [Thread: {:?}] [{}] - {}",
                timestamp,
                thread_id,
                record.level(),
                record.args()
            )
        })
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = match ArenaSettings::load(&args.config_file) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let mut tally = Tally::default();
    for episode in 0..settings.episodes {
        log::info!("Starting episode {}", episode);
        let mut strategies = settings.strategies(episode);
        match play_game(
            GameState::new(settings.first_player),
            &mut strategies,
            |_| {},
        ) {
            Ok(state) => {
                log::debug!("Episode {} final board:\n{}", episode, state.board());
                tally.record(state.status());
            }
            Err(err) => {
                eprintln!("Episode {} stopped: {}", episode, err);
                process::exit(1);
            }
        }
    }

    if args.json {
        match serde_json::to_string(&tally) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Failed to serialise tally: {}", err);
                process::exit(1);
            }
        }
        return;
    }

    let total = tally.games() as f64;
    println!("Player\tWins\tPercentage");
    for player in [Player::P1, Player::P2] {
        let wins = tally.wins(player);
        println!(
            "{}\t{}\t{:>5.2}%",
            player,
            wins,
            (100.0 * wins as f64) / total
        );
    }
    println!(
        "Draw\t{}\t{:>5.2}%",
        tally.draws,
        (100.0 * tally.draws as f64) / total
    );
}
