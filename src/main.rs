//! Strictly Quoridor - terminal match runner
//!
//! Seats humans and bots around a board and plays until someone wins.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::BufReader;
use std::path::PathBuf;
use strictly_quoridor::{
    Board, HeuristicStrategy, HumanStrategy, MatchConfig, RandomStrategy, Strategy, StrategyKind,
    TurnController,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            players,
            seats,
            seed,
            max_turns,
            json,
        } => {
            let config = load_match_config(config, players, seats, seed, max_turns)?;
            play(&config, json)
        }
    }
}

/// Builds the match config from an optional file plus command-line overrides.
#[instrument]
fn load_match_config(
    path: Option<PathBuf>,
    players: Option<usize>,
    seats: Vec<StrategyKind>,
    seed: Option<u64>,
    max_turns: Option<usize>,
) -> Result<MatchConfig> {
    let mut config = match path {
        Some(path) => MatchConfig::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => MatchConfig::default(),
    };

    if let Some(players) = players {
        config = config.with_players(players);
    }
    if !seats.is_empty() {
        config = config.with_seats(seats);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(max_turns) = max_turns {
        config = config.with_max_turns(max_turns);
    }

    config.validate()?;
    Ok(config)
}

/// Creates one strategy per seat.
///
/// Bots get their own ChaCha stream: `seed + seat index` when seeded,
/// entropy otherwise.
fn build_seats(config: &MatchConfig) -> Vec<Box<dyn Strategy>> {
    let rng_for = |index: usize| match config.seed() {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(index as u64)),
        None => ChaCha8Rng::from_entropy(),
    };

    config
        .seats()
        .iter()
        .enumerate()
        .map(|(index, kind)| -> Box<dyn Strategy> {
            let name = format!("{} {}", kind, index + 1);
            match kind {
                // Human seats share stdin; a one-byte buffer keeps one seat
                // from reading ahead into another seat's lines.
                StrategyKind::Human => Box::new(HumanStrategy::new(
                    name,
                    BufReader::with_capacity(1, std::io::stdin()),
                    std::io::stdout(),
                )),
                StrategyKind::Easy => Box::new(RandomStrategy::new(name, rng_for(index))),
                StrategyKind::Hard => Box::new(HeuristicStrategy::new(name, rng_for(index))),
            }
        })
        .collect()
}

/// Plays one match to completion, printing the board after every turn.
#[instrument(skip(config), fields(players = config.players()))]
fn play(config: &MatchConfig, json: bool) -> Result<()> {
    let board = Board::new(*config.players())?;
    let mut game = TurnController::with_board(board)
        .with_max_attempts(*config.max_attempts())
        .with_max_turns(*config.max_turns());
    let mut seats = build_seats(config);

    info!(seats = ?config.seats(), seed = ?config.seed(), "Starting match");
    println!("{}", game.board().display());

    let winner = game.run_observed(&mut seats, |game| {
        if let Some(turn) = game.history().last() {
            println!("Player {}: {}", turn.player, turn.action);
        }
        println!("{}", game.board().display());
    })?;

    println!("Player {} wins after {} turns!", winner, game.turns_played());

    if json {
        println!("{}", serde_json::to_string_pretty(&game.board().snapshot())?);
    }
    Ok(())
}
