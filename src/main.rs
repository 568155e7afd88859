//! Nim-Rust: play Nim on the console.
//!
//! ## Usage
//!
//! - `nim-rust` - Play a game, asking for anything not configured
//! - `nim-rust play --piles 3,5,7 --mode optimal` - Play with settings given up front
//! - `nim-rust hint --piles 3,5,7` - Show the nim-sum and the winning move
//! - `nim-rust example-config` - Print an example `nim.toml`

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use nim_rust::board::Board;
use nim_rust::config::{GameConfig, Mode};
use nim_rust::console::Console;
use nim_rust::constants::DEFAULT_CONFIG_FILE;
use nim_rust::game::Game;
use nim_rust::strategy::winning_move;

/// Nim-Rust: the game of Nim against humans or bots
#[derive(Parser)]
#[command(name = "nim-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (the default)
    Play(PlayArgs),
    /// Show the nim-sum of a position and its winning move
    Hint {
        /// Pile sizes, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        piles: Vec<u32>,
    },
    /// Print an example configuration file
    ExampleConfig,
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Config file (defaults to ./nim.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pile sizes, comma separated
    #[arg(long, value_delimiter = ',')]
    piles: Vec<u32>,

    /// Who plays
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Move before the bot, even if the config file says otherwise
    #[arg(long, conflicts_with = "second")]
    first: bool,

    /// Let the bot move first
    #[arg(long)]
    second: bool,

    /// Names for the human seats, in seat order
    #[arg(long = "name")]
    names: Vec<String>,

    /// Seed for the bots' random choices
    #[arg(long)]
    seed: Option<u64>,
}

impl PlayArgs {
    fn overrides(&self) -> GameConfig {
        GameConfig {
            piles: (!self.piles.is_empty()).then(|| self.piles.clone()),
            mode: self.mode,
            human_first: match (self.first, self.second) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            names: self.names.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Some(Commands::Play(args)) => play(&args),
        Some(Commands::Hint { piles }) => hint(piles),
        Some(Commands::ExampleConfig) => {
            print!("{}", GameConfig::example_toml()?);
            Ok(())
        }
        None => play(&PlayArgs::default()),
    }
}

fn play(args: &PlayArgs) -> anyhow::Result<()> {
    let file_config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    let config = file_config.merge(args.overrides());
    config.validate().context("invalid game settings")?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let (board, players) = console.setup(&config).context("game setup failed")?;

    let mut game = Game::new(board, players)?;
    game.run(&mut console)?;
    Ok(())
}

fn hint(piles: Vec<u32>) -> anyhow::Result<()> {
    let board = Board::new(piles).context("invalid board")?;
    println!("{board}");
    println!("nim-sum: {}", board.nim_sum());
    match winning_move(&board) {
        Some(mv) => println!("winning move: {mv}"),
        None => println!("no winning move: every move leaves the opponent a won position"),
    }
    Ok(())
}
