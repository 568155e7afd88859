//! Constants for the default board, rendering, and player labels.

// =============================================================================
// Board Setup
// =============================================================================

/// Pile sizes used when no custom board is supplied.
pub const DEFAULT_PILES: [u32; 3] = [3, 5, 7];

/// Most piles a board may have.
pub const MAX_PILES: usize = 64;

/// Most objects a single pile may hold. Each object is drawn as one marker.
pub const MAX_PILE_SIZE: u32 = 1_000;

/// Character drawn once per object when rendering a pile.
pub const PILE_MARKER: char = '*';

// =============================================================================
// Player Labels
// =============================================================================

/// Label of the uniform-random bot.
pub const RANDOM_BOT_LABEL: &str = "RANDOM_MOVE_BOT";

/// Label of the nim-sum bot.
pub const OPTIMAL_BOT_LABEL: &str = "STRATEGICALLY_OPTIMAL_MOVE_BOT";

// =============================================================================
// Configuration
// =============================================================================

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "nim.toml";

/// Offset mixed into the seed of the second bot so two seeded bots differ.
pub const SECOND_SEAT_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;
