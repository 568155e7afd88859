//! Game settings, loadable from TOML and overridable from the command line.
//!
//! Every setting is optional. Whatever is still missing after the file and
//! the command line have been merged is asked for on the console.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::SECOND_SEAT_SEED_OFFSET;
use crate::error::ConfigError;
use crate::player::Player;

/// Who sits at the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two humans
    Versus,
    /// Human against the nim-sum bot
    Optimal,
    /// Human against the random bot
    Random,
    /// Nim-sum bot (moving first) against the random bot
    Bots,
}

impl Mode {
    /// Number of human seats.
    pub fn humans(self) -> usize {
        match self {
            Mode::Versus => 2,
            Mode::Optimal | Mode::Random => 1,
            Mode::Bots => 0,
        }
    }

    /// Whether turn order is a choice in this mode.
    pub fn has_turn_choice(self) -> bool {
        self.humans() == 1
    }

    /// Seat players in turn order.
    ///
    /// `names` are handed to the human seats in order; missing names fall
    /// back to `Player N`. `human_first` only matters with a single human.
    pub fn seat(self, human_first: bool, names: &[String], seed: Option<u64>) -> Vec<Player> {
        let name = |i: usize| {
            names
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("Player {}", i + 1))
        };
        let second_seed = seed.map(|s| s ^ SECOND_SEAT_SEED_OFFSET);
        let (human, bot) = match self {
            Mode::Versus => return vec![Player::human(name(0)), Player::human(name(1))],
            Mode::Bots => return vec![Player::optimal(seed), Player::random(second_seed)],
            Mode::Optimal => (Player::human(name(0)), Player::optimal(seed)),
            Mode::Random => (Player::human(name(0)), Player::random(seed)),
        };
        if human_first {
            vec![human, bot]
        } else {
            vec![bot, human]
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pile sizes in board order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piles: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_first: Option<bool>,
    /// Names for the human seats, in seat order.
    pub names: Vec<String>,
    /// Seed for the bots' random choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, or an empty configuration if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board()?;
        if let Some(mode) = self.mode {
            self.check_names(mode)?;
        }
        if self.names.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::Validation("names must not be blank".into()));
        }
        Ok(())
    }

    /// Reject more names than `mode` has human seats.
    ///
    /// Runs again once an interactively chosen mode is known.
    pub fn check_names(&self, mode: Mode) -> Result<(), ConfigError> {
        if self.names.len() > mode.humans() {
            return Err(ConfigError::Validation(format!(
                "{} names given but {mode:?} mode has {} human seats",
                self.names.len(),
                mode.humans()
            )));
        }
        Ok(())
    }

    /// The configured board, if piles were given.
    pub fn board(&self) -> Result<Option<Board>, ConfigError> {
        match &self.piles {
            Some(piles) => Ok(Some(Board::new(piles.clone())?)),
            None => Ok(None),
        }
    }

    /// Layer `overrides` on top of `self`; anything set in `overrides` wins.
    pub fn merge(self, overrides: GameConfig) -> GameConfig {
        GameConfig {
            piles: overrides.piles.or(self.piles),
            mode: overrides.mode.or(self.mode),
            human_first: overrides.human_first.or(self.human_first),
            names: if overrides.names.is_empty() {
                self.names
            } else {
                overrides.names
            },
            seed: overrides.seed.or(self.seed),
        }
    }

    /// A fully populated example configuration as TOML.
    pub fn example_toml() -> Result<String, toml::ser::Error> {
        let example = GameConfig {
            piles: Some(crate::constants::DEFAULT_PILES.to_vec()),
            mode: Some(Mode::Optimal),
            human_first: Some(true),
            names: vec!["Player 1".to_string()],
            seed: None,
        };
        toml::to_string_pretty(&example)
    }
}
