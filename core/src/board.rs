use alloc::vec;
use ndarray::Array2;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was already revealed, nothing changed.
    AlreadyRevealed,
    /// The cell holds a mine, nothing changed and the caller decides the loss.
    HitMine,
    /// The cell, and possibly a cascade around it, is now revealed.
    Revealed,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            AlreadyRevealed => false,
            HitMine => false,
            Revealed => true,
        }
    }
}

/// Grid of cells stored row-major, owning every cell for the whole game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Cell>,
}

/// Builds a fresh all-hidden board from `layout`.
pub fn build_board(layout: &MineLayout) -> Board {
    Board::new(layout)
}

impl Board {
    pub fn new(layout: &MineLayout) -> Self {
        let size = layout.size();
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in layout.mines() {
            mine_mask[coords.to_nd_index()] = true;
        }

        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if mine_mask[coords.to_nd_index()] {
                Cell::new(true, 0)
            } else {
                let count = mine_mask
                    .iter_neighbors(coords)
                    .filter(|&pos| mine_mask[pos.to_nd_index()])
                    .count();
                Cell::new(false, count as u8)
            }
        });

        let board = Self { cells };
        log::debug!(
            "board built: {}x{} with {} mines",
            size.0,
            size.1,
            board.mine_count()
        );
        board
    }

    pub fn size(&self) -> Coord2 {
        array_size(&self.cells)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if contains(self.size(), coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Panics when `coords` is outside the board, see [`Board::validate_coords`].
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    /// Panics when `coords` is outside the board.
    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_mine()
    }

    /// Every cell with its coordinates, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_mine())
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(|cell| cell.state() == CellState::Revealed)
    }

    /// Toggles the flag on an unrevealed cell.
    pub fn mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellState::*;
        use MarkOutcome::*;

        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        Ok(match cell.state() {
            Hidden => {
                cell.set_state(Flagged);
                Changed
            }
            Flagged => {
                cell.set_state(Hidden);
                Changed
            }
            Revealed => NoChange,
        })
    }

    /// Reveals a safe cell, flagged or not, cascading through zero cells.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = self.cell_at(coords);

        if cell.state() == CellState::Revealed {
            return Ok(RevealOutcome::AlreadyRevealed);
        }
        if cell.is_mine() {
            return Ok(RevealOutcome::HitMine);
        }

        let opened = self.reveal_from(coords);
        if opened > 1 {
            log::debug!("cascade from {:?} opened {} cells", coords, opened);
        }
        Ok(RevealOutcome::Revealed)
    }

    /// Worklist flood fill; a popped cell that is already revealed is skipped,
    /// so each coordinate is opened at most once.
    fn reveal_from(&mut self, start: Coord2) -> CellCount {
        let mut to_visit = vec![start];
        let mut opened = 0;

        while let Some(coords) = to_visit.pop() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.state() == CellState::Revealed {
                continue;
            }
            cell.set_state(CellState::Revealed);
            opened += 1;

            if cell.adjacent_mines() == 0 && !cell.is_mine() {
                let cells = &self.cells;
                to_visit.extend(
                    cells
                        .iter_neighbors(coords)
                        .filter(|&pos| cells[pos.to_nd_index()].state().is_unrevealed()),
                );
            }
        }

        opened
    }

    fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        let count = self.cells.iter().filter(|cell| predicate(cell)).count();
        CellCount::try_from(count).unwrap_or(CellCount::MAX)
    }
}
