//! Players: the sources of moves plugged into the turn loop.
//!
//! Humans are asked for moves through a [`MoveInput`] until the board accepts
//! one. Bots compute their move from the board and own their random source.

use std::io;

use fastrand::Rng;

use crate::board::{Board, Move};
use crate::constants::{OPTIMAL_BOT_LABEL, RANDOM_BOT_LABEL};
use crate::error::{MoveError, PlayerError};
use crate::strategy::{optimal_move, random_move};

/// What a human entered when asked for a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveRequest {
    Move(Move),
    /// Something was entered but it is not a pile and an amount.
    Unreadable,
    /// No more input will arrive.
    Closed,
}

/// Where human moves come from.
pub trait MoveInput {
    /// Ask the named player for a move on `board`.
    fn request_move(&mut self, board: &Board, name: &str) -> io::Result<MoveRequest>;

    /// Tell the player their last entry was refused. `None` means it could
    /// not be read at all.
    fn notify_invalid(&mut self, reason: Option<&MoveError>) -> io::Result<()>;
}

/// Input source for games without human players.
#[derive(Debug, Default)]
pub struct NoInput;

impl MoveInput for NoInput {
    fn request_move(&mut self, _board: &Board, _name: &str) -> io::Result<MoveRequest> {
        Ok(MoveRequest::Closed)
    }

    fn notify_invalid(&mut self, _reason: Option<&MoveError>) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug)]
pub enum Player {
    Human { name: String },
    Random { rng: Rng },
    Optimal { rng: Rng },
}

impl Player {
    pub fn human(name: impl Into<String>) -> Self {
        Player::Human { name: name.into() }
    }

    /// Uniform-random bot; `seed` makes its choices reproducible.
    pub fn random(seed: Option<u64>) -> Self {
        Player::Random { rng: new_rng(seed) }
    }

    /// Nim-sum bot; `seed` drives its fallback when no winning move exists.
    pub fn optimal(seed: Option<u64>) -> Self {
        Player::Optimal { rng: new_rng(seed) }
    }

    /// Display name: the entered name for humans, a fixed tag for bots.
    pub fn label(&self) -> &str {
        match self {
            Player::Human { name } => name.as_str(),
            Player::Random { .. } => RANDOM_BOT_LABEL,
            Player::Optimal { .. } => OPTIMAL_BOT_LABEL,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human { .. })
    }

    /// Produce this player's move, play it on `board` and return it.
    ///
    /// Every variant gets its move this way. Humans are asked through
    /// `input` until the board accepts their move; bots ignore `input`, and
    /// a bot move the board refuses is an error.
    pub fn take_turn(
        &mut self,
        board: &mut Board,
        input: &mut dyn MoveInput,
    ) -> Result<Move, PlayerError> {
        let mv = match self {
            Player::Human { name } => return human_turn(name, board, input),
            Player::Random { rng } => random_move(board, rng),
            Player::Optimal { rng } => optimal_move(board, rng),
        };
        let result = match mv {
            Some(mv) => board.play(mv).map(|()| mv),
            None => Err(MoveError::EmptyBoard),
        };
        result.map_err(|source| PlayerError::BotMoveRejected {
            label: self.label().to_string(),
            source,
        })
    }
}

fn human_turn(
    name: &str,
    board: &mut Board,
    input: &mut dyn MoveInput,
) -> Result<Move, PlayerError> {
    loop {
        match input.request_move(board, name)? {
            MoveRequest::Move(mv) => match board.play(mv) {
                Ok(()) => return Ok(mv),
                Err(err) => {
                    log::warn!("{name} tried an illegal move ({mv}): {err}");
                    input.notify_invalid(Some(&err))?;
                }
            },
            MoveRequest::Unreadable => input.notify_invalid(None)?,
            MoveRequest::Closed => return Err(PlayerError::InputClosed),
        }
    }
}

fn new_rng(seed: Option<u64>) -> Rng {
    match seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed list of requests and records refusals.
    struct Scripted {
        requests: VecDeque<MoveRequest>,
        refusals: Vec<Option<MoveError>>,
    }

    impl Scripted {
        fn new(requests: &[MoveRequest]) -> Self {
            Self {
                requests: requests.iter().copied().collect(),
                refusals: Vec::new(),
            }
        }
    }

    impl MoveInput for Scripted {
        fn request_move(&mut self, _board: &Board, _name: &str) -> io::Result<MoveRequest> {
            Ok(self.requests.pop_front().unwrap_or(MoveRequest::Closed))
        }

        fn notify_invalid(&mut self, reason: Option<&MoveError>) -> io::Result<()> {
            self.refusals.push(reason.cloned());
            Ok(())
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Player::human("alice").label(), "alice");
        assert_eq!(Player::random(None).label(), "RANDOM_MOVE_BOT");
        assert_eq!(
            Player::optimal(None).label(),
            "STRATEGICALLY_OPTIMAL_MOVE_BOT"
        );
    }

    #[test]
    fn test_human_retries_until_legal() {
        let mut board = Board::default();
        let mut input = Scripted::new(&[
            MoveRequest::Move(Move::new(2, 0)),
            MoveRequest::Unreadable,
            MoveRequest::Move(Move::new(1, 10)),
            MoveRequest::Move(Move::new(3, 4)),
        ]);
        let mut player = Player::human("bob");

        let mv = player.take_turn(&mut board, &mut input).unwrap();

        assert_eq!(mv, Move::new(3, 4));
        assert_eq!(board.piles(), &[3, 5, 3]);
        assert_eq!(input.refusals.len(), 3);
        assert_eq!(input.refusals[0], Some(MoveError::ZeroAmount));
        assert_eq!(input.refusals[1], None);
    }

    #[test]
    fn test_human_closed_input_is_error() {
        let mut board = Board::default();
        let mut player = Player::human("bob");
        let err = player.take_turn(&mut board, &mut NoInput).unwrap_err();
        assert!(matches!(err, PlayerError::InputClosed));
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_optimal_bot_plays_winning_move() {
        let mut board = Board::default();
        let mut bot = Player::optimal(Some(3));
        let mv = bot.take_turn(&mut board, &mut NoInput).unwrap();
        assert_eq!(mv, Move::new(1, 1));
        assert_eq!(board.piles(), &[2, 5, 7]);
    }

    #[test]
    fn test_bot_on_empty_board_is_rejected() {
        let mut board = Board::new(vec![1]).unwrap();
        board.apply_move(1, 1).unwrap();
        let mut bot = Player::random(Some(3));
        let err = bot.take_turn(&mut board, &mut NoInput).unwrap_err();
        assert!(matches!(
            err,
            PlayerError::BotMoveRejected {
                source: MoveError::EmptyBoard,
                ..
            }
        ));
    }

    #[test]
    fn test_seeded_bots_repeat_themselves() {
        let mut a = Player::random(Some(11));
        let mut b = Player::random(Some(11));
        for _ in 0..20 {
            let mut board_a = Board::new(vec![9, 12, 4, 30]).unwrap();
            let mut board_b = board_a.clone();
            assert_eq!(
                a.take_turn(&mut board_a, &mut NoInput).unwrap(),
                b.take_turn(&mut board_b, &mut NoInput).unwrap()
            );
        }
    }

    #[test]
    fn test_every_variant_moves_through_take_turn() {
        let mut input = Scripted::new(&[MoveRequest::Move(Move::new(2, 1))]);
        let mut players = vec![
            Player::human("uma"),
            Player::random(Some(5)),
            Player::optimal(Some(5)),
        ];
        for player in &mut players {
            let mut board = Board::default();
            let mv = player.take_turn(&mut board, &mut input).unwrap();
            assert_eq!(board.total(), 15 - u64::from(mv.amount));
        }
        assert!(input.requests.is_empty());
    }
}
