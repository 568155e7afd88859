//! Nim-Rust: the game of Nim with a nim-sum playing bot.
//!
//! Players take turns removing objects from a single pile; whoever takes the
//! last object wins. The engine keeps the piles, checks moves and runs the
//! turn loop, while players supply moves: humans through the console, bots
//! by uniform random choice or by nim-sum analysis.
//!
//! ## Modules
//!
//! - [`constants`] - Default board, rendering and player labels
//! - [`board`] - Piles, move legality and board rendering
//! - [`strategy`] - Nim-sum, winning move and random move selection
//! - [`player`] - Human and bot players
//! - [`game`] - Turn loop and game notifications
//! - [`config`] - TOML and command-line game settings
//! - [`console`] - Line-based console front end
//! - [`error`] - Structured error types
//!
//! ## Example
//!
//! ```
//! use nim_rust::board::Board;
//! use nim_rust::game::Game;
//! use nim_rust::player::Player;
//! use nim_rust::strategy::winning_move;
//!
//! let board = Board::default();
//! let best = winning_move(&board).unwrap();
//! println!("From {:?}: {best}", board.piles());
//!
//! // Let the bots play it out
//! let players = vec![Player::optimal(Some(1)), Player::random(Some(2))];
//! let mut game = Game::new(board, players).unwrap();
//! let outcome = game.run_headless().unwrap();
//! assert_eq!(outcome.label, "STRATEGICALLY_OPTIMAL_MOVE_BOT");
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod player;
pub mod strategy;
