#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use layout::*;
pub use render::*;
pub use types::*;
pub use win::{WinCondition, has_won};

mod board;
mod cell;
mod error;
mod game;
mod generator;
mod layout;
mod render;
mod types;
pub mod win;

/// Validated grid size and requested mine count for a new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    size: Coord2,
    mines: CellCount,
}

impl GameConfig {
    /// Rejects empty grids and mine counts that leave no safe cell.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        if mines >= mult(size.0, size.1) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self { size, mines })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}
