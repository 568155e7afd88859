//! Turn loop: players move in a fixed rotation until the board is empty.
//!
//! Under normal play the player who takes the last object wins, so the game
//! ends on the turn that empties the board and that turn's mover is the winner.

use std::io;

use crate::board::{Board, Move};
use crate::error::GameError;
use crate::player::{MoveInput, NoInput, Player};

/// Receives what happens during a game. Every method defaults to doing nothing.
pub trait GameView {
    /// Called before each turn.
    fn show_board(&mut self, _board: &Board) -> io::Result<()> {
        Ok(())
    }

    fn announce_turn(&mut self, _label: &str) -> io::Result<()> {
        Ok(())
    }

    /// Called after a move has been applied.
    fn announce_move(&mut self, _label: &str, _mv: Move) -> io::Result<()> {
        Ok(())
    }

    fn announce_winner(&mut self, _outcome: &Outcome) -> io::Result<()> {
        Ok(())
    }
}

impl GameView for NoInput {}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Seat of the winner in the rotation (0-based).
    pub seat: usize,
    pub label: String,
    /// 0-based turn on which the last object was taken.
    pub turn: usize,
}

#[derive(Debug)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
}

impl Game {
    /// Seat `players` in the given order. At least one player is required.
    pub fn new(board: Board, players: Vec<Player>) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(Self { board, players })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Play to the end, reporting to `frontend` and reading human moves from it.
    pub fn run<F>(&mut self, frontend: &mut F) -> Result<Outcome, GameError>
    where
        F: GameView + MoveInput,
    {
        log::info!(
            "starting game on {:?} with {}",
            self.board.piles(),
            self.players
                .iter()
                .map(Player::label)
                .collect::<Vec<_>>()
                .join(" vs ")
        );

        let mut turn = 0;
        loop {
            frontend.show_board(&self.board)?;

            let seat = turn % self.players.len();
            let player = &mut self.players[seat];
            frontend.announce_turn(player.label())?;

            let mv = player.take_turn(&mut self.board, &mut *frontend)?;
            frontend.announce_move(player.label(), mv)?;

            if self.board.is_empty() {
                let outcome = Outcome {
                    seat,
                    label: player.label().to_string(),
                    turn,
                };
                log::info!("{} won on move {}", outcome.label, outcome.turn);
                frontend.announce_winner(&outcome)?;
                return Ok(outcome);
            }
            turn += 1;
        }
    }

    /// Play to the end with no frontend. Only bots can take part.
    pub fn run_headless(&mut self) -> Result<Outcome, GameError> {
        self.run(&mut NoInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every notification as a line of text.
    #[derive(Default)]
    struct Transcript {
        lines: Vec<String>,
    }

    impl GameView for Transcript {
        fn show_board(&mut self, board: &Board) -> io::Result<()> {
            self.lines.push(format!("board {:?}", board.piles()));
            Ok(())
        }

        fn announce_turn(&mut self, label: &str) -> io::Result<()> {
            self.lines.push(format!("turn {label}"));
            Ok(())
        }

        fn announce_winner(&mut self, outcome: &Outcome) -> io::Result<()> {
            self.lines
                .push(format!("winner {} {}", outcome.label, outcome.turn));
            Ok(())
        }
    }

    impl MoveInput for Transcript {
        fn request_move(
            &mut self,
            _board: &Board,
            _name: &str,
        ) -> io::Result<crate::player::MoveRequest> {
            Ok(crate::player::MoveRequest::Closed)
        }

        fn notify_invalid(&mut self, _reason: Option<&crate::error::MoveError>) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_requires_a_player() {
        assert!(matches!(
            Game::new(Board::default(), vec![]),
            Err(GameError::NoPlayers)
        ));
    }

    #[test]
    fn test_single_pile_optimal_first_mover_wins_on_turn_zero() {
        let board = Board::new(vec![5]).unwrap();
        let players = vec![Player::optimal(Some(1)), Player::random(Some(2))];
        let mut game = Game::new(board, players).unwrap();
        let mut transcript = Transcript::default();

        let outcome = game.run(&mut transcript).unwrap();

        assert_eq!(outcome.seat, 0);
        assert_eq!(outcome.turn, 0);
        assert_eq!(outcome.label, "STRATEGICALLY_OPTIMAL_MOVE_BOT");
        assert!(game.board().is_empty());
        assert_eq!(
            transcript.lines,
            vec![
                "board [5]",
                "turn STRATEGICALLY_OPTIMAL_MOVE_BOT",
                "winner STRATEGICALLY_OPTIMAL_MOVE_BOT 0",
            ]
        );
    }

    #[test]
    fn test_optimal_beats_random_from_winning_position() {
        for seed in 0..20 {
            let players = vec![Player::optimal(Some(seed)), Player::random(Some(seed + 100))];
            let mut game = Game::new(Board::default(), players).unwrap();
            let outcome = game.run_headless().unwrap();
            assert_eq!(outcome.seat, 0, "seed {seed}");
            assert_eq!(outcome.turn % 2, 0);
        }
    }

    #[test]
    fn test_winner_seat_matches_turn_parity() {
        for seed in 0..20 {
            let players = vec![Player::random(Some(seed)), Player::random(Some(seed + 7))];
            let mut game = Game::new(Board::new(vec![4, 6, 9]).unwrap(), players).unwrap();
            let outcome = game.run_headless().unwrap();
            assert_eq!(outcome.seat, outcome.turn % 2);
        }
    }

    #[test]
    fn test_single_seat_rotation() {
        let mut game =
            Game::new(Board::new(vec![2, 3]).unwrap(), vec![Player::random(Some(9))]).unwrap();
        let outcome = game.run_headless().unwrap();
        assert_eq!(outcome.seat, 0);
        assert!(outcome.turn < 5);
    }

    #[test]
    fn test_human_without_input_aborts() {
        let mut game = Game::new(Board::default(), vec![Player::human("carol")]).unwrap();
        let err = game.run_headless().unwrap_err();
        assert!(matches!(
            err,
            GameError::Player(crate::error::PlayerError::InputClosed)
        ));
    }
}
