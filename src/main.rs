//! Scrabble Solver - CLI
//!
//! Play rounds against the optimal word, or query the engine directly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use scrabble_solver::{
    commands::{BestConfig, PlayConfig, find_best, rate_word, run_play},
    core::{LetterPool, NUM_LETTERS},
    engine::{BagDraw, Engine, TileBag},
    output::{write_best_result, write_round_result},
    wordlists::standard_game_data,
};
use std::io;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "scrabble_solver",
    about = "Form a word from drawn letters and see how it compares with the best possible word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters drawn per round
    #[arg(short = 'n', long, global = true, default_value_t = NUM_LETTERS)]
    letters_count: usize,

    /// Seed for the letter draw (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Search word lengths in parallel
    #[arg(short, long, global = true)]
    parallel: bool,

    /// Log engine activity to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Find the best word for a set of letters
    Best {
        /// Letters to use, e.g. "CATERSX" or "C,A,T"
        letters: String,

        /// List every valid word, not just the best one
        #[arg(short, long)]
        all: bool,
    },

    /// Rate a word against a set of letters
    Rate {
        /// Letters to use, e.g. "CATERSX" or "C,A,T"
        letters: String,

        /// The word to rate
        word: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data = standard_game_data().context("embedded tile pouch is invalid")?;
    let engine = data.engine();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let config = PlayConfig {
                letters_count: cli.letters_count,
                parallel: cli.parallel,
            };
            run_play_command(&engine, &data.pouch, cli.seed, config)
        }
        Commands::Best { letters, all } => {
            let config = BestConfig {
                parallel: cli.parallel,
                list_all: all,
            };
            run_best_command(&engine, &letters, config)
        }
        Commands::Rate { letters, word } => {
            run_rate_command(&engine, &letters, &word, cli.parallel)
        }
    }
}

fn parse_letters(letters: &str) -> Result<LetterPool> {
    letters
        .parse()
        .with_context(|| format!("invalid letters '{letters}'"))
}

fn run_play_command(
    engine: &Engine,
    pouch: &TileBag,
    seed: Option<u64>,
    config: PlayConfig,
) -> Result<()> {
    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut draw = BagDraw::new(pouch, rng);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run_play(engine, &mut draw, config, &mut input, &mut out)?;
    Ok(())
}

fn run_best_command(engine: &Engine, letters: &str, config: BestConfig) -> Result<()> {
    let letters = parse_letters(letters)?;
    let result = find_best(engine, letters, config)?;
    write_best_result(&mut io::stdout().lock(), &result)?;
    Ok(())
}

fn run_rate_command(engine: &Engine, letters: &str, word: &str, parallel: bool) -> Result<()> {
    let letters = parse_letters(letters)?;
    let result = rate_word(engine, letters, word, parallel)?;
    write_round_result(&mut io::stdout().lock(), &result)?;
    Ok(())
}
