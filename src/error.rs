//! Structured error types for the engine, the players and configuration.

use std::path::PathBuf;

/// Reasons a move is rejected by [`Board::apply_move`](crate::board::Board::apply_move).
///
/// Pile numbers are 1-based, as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the board is already empty")]
    EmptyBoard,

    #[error("must remove at least one object")]
    ZeroAmount,

    #[error("pile {pile} does not exist (board has {piles} piles)")]
    PileOutOfRange { pile: usize, piles: usize },

    #[error("pile {pile} holds {available} objects, cannot remove {amount}")]
    AmountTooLarge {
        pile: usize,
        amount: u32,
        available: u32,
    },
}

/// Reasons a pile configuration cannot become a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("a board needs at least one pile")]
    NoPiles,

    #[error("pile {pile} is empty; every pile needs at least one object")]
    EmptyPile { pile: usize },

    #[error("a board holds at most {max} piles, got {count}")]
    TooManyPiles { count: usize, max: usize },

    #[error("pile {pile} holds {size} objects; the limit is {max}")]
    PileTooLarge { pile: usize, size: u32, max: u32 },
}

/// Errors raised while a player produces a move.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("failed to read move: {0}")]
    Input(#[from] std::io::Error),

    #[error("input closed before a legal move was entered")]
    InputClosed,

    #[error("{label} produced an illegal move: {source}")]
    BotMoveRejected { label: String, source: MoveError },
}

/// Errors that end a game before it has a winner.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error("failed to write to the game view: {0}")]
    View(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("failed to read setup answer: {0}")]
    Prompt(#[from] std::io::Error),
}
