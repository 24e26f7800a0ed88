use std::collections::VecDeque;
use std::io::{self, BufRead};

use minefield_core::{Command, Coord, Coord2};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid number {0}")]
    InvalidNumber(String),
    #[error("Cell {row} {col} is outside the field")]
    OutOfRange { row: Coord, col: Coord },
    #[error("Invalid Command {0}")]
    InvalidCommand(String),
    #[error("Input ended")]
    Eof,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InputError {
    /// Errors the player cannot recover from by typing again.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Eof | Self::Io(_))
    }
}

/// Whitespace separated tokens over any line breaking.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::Eof);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Reads `<row> <col> <mine|free>` with 1-based coordinates.
pub fn read_command<R: BufRead>(
    input: &mut TokenReader<R>,
    size: Coord2,
) -> Result<Command, InputError> {
    let row = input.next_token()?;
    let col = input.next_token()?;
    let command = input.next_token()?;
    parse_command(&row, &col, &command, size)
}

pub fn parse_command(
    row: &str,
    col: &str,
    command: &str,
    size: Coord2,
) -> Result<Command, InputError> {
    let row = parse_index(row)?;
    let col = parse_index(col)?;
    if row == 0 || col == 0 || row > size.0 || col > size.1 {
        return Err(InputError::OutOfRange { row, col });
    }
    let coords = (row - 1, col - 1);

    match command {
        "mine" => Ok(Command::Mark(coords)),
        "free" => Ok(Command::Reveal(coords)),
        other => Err(InputError::InvalidCommand(other.to_owned())),
    }
}

fn parse_index(token: &str) -> Result<Coord, InputError> {
    token
        .parse()
        .map_err(|_| InputError::InvalidNumber(token.to_owned()))
}
