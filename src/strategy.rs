//! Move selection for the automated players.
//!
//! The optimal player relies on the nim-sum: a position whose piles XOR to
//! zero is lost for the player to move, and from any other position there is
//! a move that brings the nim-sum back to zero.

use fastrand::Rng;

use crate::board::{Board, Move};

/// True if the player to move wins under optimal play.
pub fn is_winning(board: &Board) -> bool {
    board.nim_sum() != 0
}

/// The move that leaves the board with a nim-sum of zero.
///
/// Scans piles from the first and returns the first one that can be reduced
/// to `pile ^ nim_sum`. Returns `None` on an empty board or when the nim-sum
/// is already zero.
pub fn winning_move(board: &Board) -> Option<Move> {
    let nim_sum = board.nim_sum();
    if nim_sum == 0 {
        return None;
    }
    board
        .piles()
        .iter()
        .enumerate()
        .find_map(|(i, &pile)| {
            let reduced = pile ^ nim_sum;
            (reduced < pile).then(|| Move::new(i + 1, pile - reduced))
        })
}

/// A uniformly random legal move: pile first, then amount within that pile.
///
/// Bounds come from the board as it is now. Returns `None` on an empty board.
pub fn random_move(board: &Board, rng: &mut Rng) -> Option<Move> {
    if board.is_empty() {
        return None;
    }
    let pile = rng.usize(1..=board.pile_count());
    let size = board.pile(pile)?;
    Some(Move::new(pile, rng.u32(1..=size)))
}

/// The winning move if one exists, otherwise a uniformly random move.
pub fn optimal_move(board: &Board, rng: &mut Rng) -> Option<Move> {
    match winning_move(board) {
        Some(mv) => {
            log::debug!("nim-sum {}, playing {mv}", board.nim_sum());
            Some(mv)
        }
        None => {
            let mv = random_move(board, rng);
            if let Some(mv) = mv {
                log::warn!("nim-sum is zero, no winning move; falling back to {mv}");
            }
            mv
        }
    }
}
