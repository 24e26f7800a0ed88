use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use minefield_core::{CellCount, Command, Coord2, Game, GameConfig, GameState, MoveOutcome};

use crate::input::{InputError, TokenReader, read_command};

/// Prompts until the player gives a mine count that fits the grid.
pub fn ask_config<R: BufRead, W: Write>(
    size: Coord2,
    input: &mut TokenReader<R>,
    out: &mut W,
) -> Result<GameConfig> {
    loop {
        writeln!(out, "How many mines do you want on the field?")?;
        let token = input.next_token().context("reading the mine count")?;
        match token.parse::<CellCount>() {
            Ok(mines) => match GameConfig::new(size, mines) {
                Ok(config) => return Ok(config),
                Err(err) => writeln!(out, "{err}")?,
            },
            Err(_) => writeln!(out, "{}", InputError::InvalidNumber(token))?,
        }
    }
}

/// Runs the game to its end and returns the final state.
pub fn play<R: BufRead, W: Write>(
    mut game: Game,
    input: &mut TokenReader<R>,
    out: &mut W,
) -> Result<GameState> {
    while !game.is_finished() {
        write!(out, "{}", game.view(false))?;
        play_turn(&mut game, input, out)?;
    }

    write!(out, "{}", game.view(true))?;
    match game.state() {
        GameState::Won(_) => writeln!(out, "Congratulations! You found all the mines!")?,
        GameState::Lost => writeln!(out, "You stepped on a mine and failed!")?,
        GameState::Active => {}
    }
    out.flush()?;
    Ok(game.state())
}

/// Re-prompts until one move changes the board.
fn play_turn<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut TokenReader<R>,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out, "Set/unset mines marks or claim a cell as free:")?;
        out.flush()?;

        let command = match read_command(input, game.size()) {
            Ok(command) => command,
            Err(err) if err.is_fatal() => return Err(err).context("reading a move"),
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        let outcome = game.play(command)?;
        tracing::debug!(?command, ?outcome, "move played");

        match (command, outcome) {
            (Command::Mark(_), MoveOutcome::AlreadyExplored) => {
                writeln!(out, "Cell is already explored")?;
            }
            (Command::Reveal(_), MoveOutcome::AlreadyExplored) => {}
            _ => return Ok(()),
        }
    }
}
