//! Line-based console front end.
//!
//! Reads whitespace-separated answers from any [`BufRead`] and writes the
//! board, prompts and announcements to any [`Write`], so the same code serves
//! a terminal and in-memory tests.
//!
//! ## Example
//!
//! ```ignore
//! use std::io;
//! use nim_rust::console::Console;
//! let stdin = io::stdin();
//! let mut console = Console::new(stdin.lock(), io::stdout());
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::board::{Board, Move};
use crate::constants::{MAX_PILE_SIZE, MAX_PILES};
use crate::config::{GameConfig, Mode};
use crate::error::{ConfigError, MoveError};
use crate::game::{GameView, Outcome};
use crate::player::{MoveInput, MoveRequest, Player};

pub struct Console<R, W> {
    input: R,
    output: W,
    /// Words read but not yet consumed.
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next whitespace-separated word, or `None` once input is exhausted.
    fn next_word(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            // Text after '#' is a comment
            let line = line.split('#').next().unwrap_or_default();
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Like [`Self::next_word`] but treats end of input as an error.
    fn require_word(&mut self) -> io::Result<String> {
        self.next_word()?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input closed during setup")
        })
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Ask until the answer parses and passes `accept`.
    fn ask_number<T: FromStr>(
        &mut self,
        question: &str,
        accept: impl Fn(&T) -> bool,
    ) -> io::Result<T> {
        loop {
            self.say(question)?;
            let word = self.require_word()?;
            match word.parse::<T>() {
                Ok(n) if accept(&n) => return Ok(n),
                _ => self.say(&format!("'{word}' is not a valid answer"))?,
            }
        }
    }

    fn ask_yes_no(&mut self, question: &str) -> io::Result<String> {
        self.say(question)?;
        self.require_word()
    }

    /// Board setup: the default board unless the player asks for a custom one.
    ///
    /// Any answer other than `n` starts the custom board dialogue.
    pub fn ask_board(&mut self) -> io::Result<Board> {
        self.say("\n=== Game Setup ===")?;
        let answer = self.ask_yes_no("Custom board? [y/n]")?;
        if answer == "n" {
            self.say("")?;
            return Ok(Board::default());
        }

        let rows = self.ask_number::<usize>("\nEnter a number of rows: ", |&n| {
            (1..=MAX_PILES).contains(&n)
        })?;
        let mut piles = Vec::new();
        for i in 1..=rows {
            let question = format!("Enter a number for the amount of objects in row {i}: ");
            piles.push(self.ask_number::<u32>(&question, |&n| (1..=MAX_PILE_SIZE).contains(&n))?);
        }
        self.say("")?;
        Board::new(piles).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Mode menu. Anything other than `1`, `2` or `4` picks the random bot.
    pub fn ask_mode(&mut self) -> io::Result<Mode> {
        self.say(
            "1) play 1v1 \n2) against optimal bot \n3) against random bot \n4) watch the bots play",
        )?;
        let mode = match self.require_word()?.as_str() {
            "1" => Mode::Versus,
            "2" => Mode::Optimal,
            "4" => Mode::Bots,
            _ => Mode::Random,
        };
        Ok(mode)
    }

    /// `y` means the human moves first.
    pub fn ask_go_first(&mut self) -> io::Result<bool> {
        Ok(self.ask_yes_no("go first? [y/n]")? == "y")
    }

    pub fn ask_name(&mut self) -> io::Result<String> {
        self.say("\nEnter your name: ")?;
        let name = self.require_word()?;
        self.say("")?;
        Ok(name)
    }

    /// Fill in whatever `config` leaves open by asking, then seat the players.
    pub fn setup(&mut self, config: &GameConfig) -> Result<(Board, Vec<Player>), ConfigError> {
        let board = match config.board()? {
            Some(board) => board,
            None => self.ask_board()?,
        };
        let mode = match config.mode {
            Some(mode) => mode,
            None => self.ask_mode()?,
        };
        config.check_names(mode)?;
        let human_first = match config.human_first {
            Some(first) => first,
            None if mode.has_turn_choice() => self.ask_go_first()?,
            None => true,
        };
        let mut names = config.names.clone();
        while names.len() < mode.humans() {
            names.push(self.ask_name()?);
        }
        Ok((board, mode.seat(human_first, &names, config.seed)))
    }
}

impl<R: BufRead, W: Write> GameView for Console<R, W> {
    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.output, "\n{board}")?;
        self.output.flush()
    }

    fn announce_turn(&mut self, label: &str) -> io::Result<()> {
        self.say(&format!("\n{label}'s turn:\n"))
    }

    fn announce_move(&mut self, label: &str, mv: Move) -> io::Result<()> {
        self.say(&format!(
            "{label} took {} from row {}",
            mv.amount, mv.pile
        ))
    }

    fn announce_winner(&mut self, outcome: &Outcome) -> io::Result<()> {
        self.say(&format!(
            "\n=== {} won on move {} ! ===",
            outcome.label, outcome.turn
        ))
    }
}

impl<R: BufRead, W: Write> MoveInput for Console<R, W> {
    fn request_move(&mut self, _board: &Board, _name: &str) -> io::Result<MoveRequest> {
        self.say("Enter row: ")?;
        let Some(row) = self.next_word()? else {
            return Ok(MoveRequest::Closed);
        };
        self.say("Enter amount: ")?;
        let Some(amount) = self.next_word()? else {
            return Ok(MoveRequest::Closed);
        };
        self.say("")?;

        match (row.parse::<usize>(), amount.parse::<u32>()) {
            (Ok(pile), Ok(amount)) => Ok(MoveRequest::Move(Move::new(pile, amount))),
            _ => Ok(MoveRequest::Unreadable),
        }
    }

    fn notify_invalid(&mut self, reason: Option<&MoveError>) -> io::Result<()> {
        match reason {
            Some(err) => self.say(&format!("\n>>> Invalid move! try again! <<< ({err})\n")),
            None => self.say("\n>>> Invalid move! try again! <<<\n"),
        }
    }
}
