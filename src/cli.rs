//! Command-line interface for strictly_quoridor.

use clap::{Parser, Subcommand};
use strictly_quoridor::StrategyKind;

/// Strictly Quoridor - rule-checked Quoridor for humans and bots
#[derive(Parser, Debug)]
#[command(name = "strictly_quoridor")]
#[command(about = "Play Quoridor against humans and bots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal
    Play {
        /// Path to a match config file (TOML)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Number of players (2-4)
        #[arg(short, long)]
        players: Option<usize>,

        /// Seat type in join order; repeat once per player
        #[arg(short, long = "seat", value_name = "human|easy|hard")]
        seats: Vec<StrategyKind>,

        /// Seed for the bots' random sources
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many turns without a winner
        #[arg(long)]
        max_turns: Option<usize>,

        /// Print the final board as JSON
        #[arg(long)]
        json: bool,
    },
}
