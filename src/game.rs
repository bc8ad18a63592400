//! Text-mode game loop: a human against the engine
//!
//! The session owns the authoritative board. Input and output are generic
//! so the loop runs on stdin/stdout in the binary and on in-memory buffers
//! in tests.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::board::{Board, Cell, Pos, COLS, COMPUTER_MARKER, HUMAN_MARKER};
use crate::engine::AIEngine;
use crate::error::GameError;
use crate::rules::wins_at;

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Win,
    Draw,
    /// The human typed `exit`
    Exit,
    /// Input ran out mid-game
    Closed,
}

/// One human-versus-computer session, possibly spanning several games.
pub struct GameSession<R, W> {
    board: Board,
    engine: AIEngine,
    turn: u8,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    pub fn new(engine: AIEngine, input: R, output: W) -> Self {
        Self {
            board: Board::new(),
            engine,
            turn: HUMAN_MARKER,
            input,
            output,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker of the player to move
    pub fn turn(&self) -> u8 {
        self.turn
    }

    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    /// Consume the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Drop `player`'s marker into `column`.
    ///
    /// Returns the filled cell, or `None` if the player is not 1 or 2 or the
    /// column is out of range or full.
    pub fn play_turn(&mut self, player: u8, column: usize) -> Option<Pos> {
        let cell = match Cell::from_marker(player) {
            Some(cell @ (Cell::Human | Cell::Computer)) => cell,
            _ => return None,
        };
        self.board.drop(column, cell).ok()
    }

    /// Hand the move to the other player.
    pub fn switch_turn(&mut self) -> Result<(), GameError> {
        self.turn = match self.turn {
            HUMAN_MARKER => COMPUTER_MARKER,
            COMPUTER_MARKER => HUMAN_MARKER,
            other => return Err(GameError::InvalidTurn(other)),
        };
        Ok(())
    }

    /// Whether the marker at `pos` completes four in a row.
    pub fn check_win(&self, pos: Pos) -> bool {
        wins_at(&self.board, Some(pos))
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Empty the board and give the first move back to the human.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = HUMAN_MARKER;
    }

    /// Play games until the human exits or input ends.
    ///
    /// The engine, and with it the best-move cache, carries over from one
    /// game to the next.
    pub fn run(&mut self) -> Result<(), GameError> {
        loop {
            let outcome = self.play_game()?;
            if outcome == Outcome::Closed {
                return Ok(());
            }

            // Still asked after `exit`, but then the answer cannot restart
            self.prompt("Exit? (yes or no): ")?;
            let answer = self.read_line()?;
            if outcome == Outcome::Exit || answer.map_or(true, |answer| answer == "yes") {
                return Ok(());
            }

            writeln!(self.output, "Starting new game")?;
            self.reset();
        }
    }

    fn play_game(&mut self) -> Result<Outcome, GameError> {
        self.turn = HUMAN_MARKER;

        loop {
            let placed = if self.turn == HUMAN_MARKER {
                write!(self.output, "{}", self.board)?;
                self.prompt("Choose column: ")?;
                let Some(line) = self.read_line()? else {
                    return Ok(Outcome::Closed);
                };
                if line == "exit" {
                    return Ok(Outcome::Exit);
                }

                let Some(column) = parse_column(&line) else {
                    writeln!(self.output, "Invalid input, try again")?;
                    continue;
                };
                if !self.board.is_column_open(column) {
                    writeln!(self.output, "Column is full, try a different column")?;
                    continue;
                }
                self.play_turn(self.turn, column)
            } else {
                let column = self.engine.select_move(&self.board)?;
                let pos = self
                    .play_turn(self.turn, column)
                    .ok_or(GameError::IllegalEngineMove { column })?;
                debug!(column, "computer played");
                Some(pos)
            };

            let Some(pos) = placed else {
                continue;
            };

            if self.check_win(pos) {
                writeln!(self.output, "Winner: {}", self.turn)?;
                write!(self.output, "{}", self.board)?;
                return Ok(Outcome::Win);
            }
            if self.is_full() {
                writeln!(self.output, "No winner. Out of turns")?;
                return Ok(Outcome::Draw);
            }

            self.switch_turn()?;
            writeln!(self.output, "Player {}'s turn", self.turn)?;
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Next trimmed input line, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Parse a 1-based column as typed by the human.
fn parse_column(input: &str) -> Option<usize> {
    match input.parse::<usize>() {
        Ok(n) if (1..=COLS).contains(&n) => Some(n - 1),
        _ => None,
    }
}
