//! Nim board: the ordered piles, move legality and rendering.
//!
//! Piles are addressed by their 1-based position on the board. A pile that
//! reaches zero is removed straight away, so the board never holds an empty
//! pile and the game is over exactly when no piles remain.

use std::fmt;

use crate::constants::{DEFAULT_PILES, MAX_PILE_SIZE, MAX_PILES, PILE_MARKER};
use crate::error::{BoardError, MoveError};

/// A move: take `amount` objects from the pile at 1-based position `pile`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub pile: usize,
    pub amount: u32,
}

impl Move {
    pub fn new(pile: usize, amount: u32) -> Self {
        Self { pile, amount }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "remove {} from pile {}", self.amount, self.pile)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    piles: Vec<u32>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            piles: DEFAULT_PILES.to_vec(),
        }
    }
}

impl Board {
    /// Build a board from pile sizes, in order.
    ///
    /// Rejects an empty configuration, any pile of size zero, and boards
    /// beyond [`MAX_PILES`] piles or [`MAX_PILE_SIZE`] objects per pile.
    pub fn new(piles: Vec<u32>) -> Result<Self, BoardError> {
        if piles.is_empty() {
            return Err(BoardError::NoPiles);
        }
        if piles.len() > MAX_PILES {
            return Err(BoardError::TooManyPiles {
                count: piles.len(),
                max: MAX_PILES,
            });
        }
        for (i, &size) in piles.iter().enumerate() {
            if size == 0 {
                return Err(BoardError::EmptyPile { pile: i + 1 });
            }
            if size > MAX_PILE_SIZE {
                return Err(BoardError::PileTooLarge {
                    pile: i + 1,
                    size,
                    max: MAX_PILE_SIZE,
                });
            }
        }
        Ok(Self { piles })
    }

    pub fn piles(&self) -> &[u32] {
        &self.piles
    }

    pub fn pile_count(&self) -> usize {
        self.piles.len()
    }

    /// Size of the pile at 1-based position `pile`, if it exists.
    pub fn pile(&self, pile: usize) -> Option<u32> {
        pile.checked_sub(1).and_then(|i| self.piles.get(i)).copied()
    }

    /// Total number of objects left on the board.
    pub fn total(&self) -> u64 {
        self.piles.iter().map(|&p| u64::from(p)).sum()
    }

    /// Bitwise XOR of all pile sizes.
    pub fn nim_sum(&self) -> u32 {
        self.piles.iter().fold(0, |acc, &p| acc ^ p)
    }

    /// True once every object has been taken.
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Check a move without applying it.
    pub fn validate(&self, pile: usize, amount: u32) -> Result<(), MoveError> {
        if self.is_empty() {
            return Err(MoveError::EmptyBoard);
        }
        if amount == 0 {
            return Err(MoveError::ZeroAmount);
        }
        let available = self.pile(pile).ok_or(MoveError::PileOutOfRange {
            pile,
            piles: self.pile_count(),
        })?;
        if available < amount {
            return Err(MoveError::AmountTooLarge {
                pile,
                amount,
                available,
            });
        }
        Ok(())
    }

    /// Remove `amount` objects from the pile at 1-based position `pile`.
    ///
    /// On error the board is left untouched. On success, a pile that drops
    /// to zero is removed and the remaining piles keep their order.
    pub fn apply_move(&mut self, pile: usize, amount: u32) -> Result<(), MoveError> {
        self.validate(pile, amount)?;
        let i = pile - 1;
        self.piles[i] -= amount;
        if self.piles[i] == 0 {
            self.piles.remove(i);
        }
        log::debug!("removed {amount} from pile {pile}, board now {:?}", self.piles);
        Ok(())
    }

    /// Apply a [`Move`].
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        self.apply_move(mv.pile, mv.amount)
    }
}

/// Renders one line per pile, numbered from 1, with each row of markers
/// indented by half the difference to the largest pile.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(&max) = self.piles.iter().max() else {
            return writeln!(f, "=== Board is empty ===");
        };
        writeln!(f, "=== Current Board ===")?;
        for (i, &pile) in self.piles.iter().enumerate() {
            let gap = ((max - pile) / 2) as usize;
            let markers: String = std::iter::repeat_n(PILE_MARKER, pile as usize).collect();
            writeln!(f, "{}) {}{}", i + 1, " ".repeat(gap), markers)?;
        }
        Ok(())
    }
}
