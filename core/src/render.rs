use core::fmt;

use crate::*;

/// What a renderer shows for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Hidden,
    Flagged,
    Empty,
    Count(u8),
    Mine,
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.pad("."),
            Self::Flagged => f.pad("*"),
            Self::Empty => f.pad("/"),
            Self::Count(count) => fmt::Display::fmt(count, f),
            Self::Mine => f.pad("X"),
        }
    }
}

impl Cell {
    /// Glyph for this cell; `reveal_mines` exposes every unrevealed mine, as
    /// done for the final board.
    pub fn glyph(self, reveal_mines: bool) -> Glyph {
        match self.state() {
            CellState::Hidden | CellState::Flagged if reveal_mines && self.is_mine() => Glyph::Mine,
            CellState::Hidden => Glyph::Hidden,
            CellState::Flagged => Glyph::Flagged,
            CellState::Revealed if self.is_mine() => Glyph::Mine,
            CellState::Revealed => match self.adjacent_mines() {
                0 => Glyph::Empty,
                count => Glyph::Count(count),
            },
        }
    }
}

/// Read-only text view of a board with 1-based row and column labels.
#[derive(Copy, Clone, Debug)]
pub struct BoardView<'a> {
    board: &'a Board,
    reveal_mines: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, reveal_mines: bool) -> Self {
        Self {
            board,
            reveal_mines,
        }
    }

    /// Panics when `coords` is outside the board.
    pub fn glyph_at(&self, coords: Coord2) -> Glyph {
        self.board.cell_at(coords).glyph(self.reveal_mines)
    }
}

fn digits(value: Coord) -> usize {
    value.checked_ilog10().map_or(1, |d| d as usize + 1)
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.board.size();
        let label_width = digits(rows);
        let cell_width = digits(cols);
        let inner_width = usize::from(cols) * (cell_width + 1);

        write!(f, "{:label_width$}|", "")?;
        for col in 0..cols {
            write!(f, "{:>cell_width$} ", col + 1)?;
        }
        writeln!(f, "|")?;
        writeln!(f, "{:-<label_width$}|{:-<inner_width$}|", "", "")?;

        for row in 0..rows {
            write!(f, "{:>label_width$}|", row + 1)?;
            for col in 0..cols {
                write!(f, "{:>cell_width$} ", self.glyph_at((row, col)))?;
            }
            writeln!(f, "|")?;
        }

        writeln!(f, "{:-<label_width$}|{:-<inner_width$}|", "", "")?;
        writeln!(f, "{:label_width$}|{:inner_width$}|", "", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::new(&MineLayout::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn glyphs_follow_cell_state() {
        let mut board = board((3, 3), &[(0, 0)]);
        board.mark((0, 0)).unwrap();
        board.reveal((0, 1)).unwrap();
        board.reveal((2, 2)).unwrap();

        assert_eq!(board.cell_at((0, 0)).glyph(false), Glyph::Flagged);
        assert_eq!(board.cell_at((0, 1)).glyph(false), Glyph::Count(1));
        assert_eq!(board.cell_at((2, 2)).glyph(false), Glyph::Empty);
        assert_eq!(board.cell_at((0, 0)).glyph(true), Glyph::Mine);
    }

    #[test]
    fn hidden_cells_keep_their_secret_until_reveal_all() {
        let board = board((2, 2), &[(1, 1)]);

        assert_eq!(board.cell_at((1, 1)).glyph(false), Glyph::Hidden);
        assert_eq!(board.cell_at((1, 1)).glyph(true), Glyph::Mine);
        assert_eq!(board.cell_at((0, 0)).glyph(true), Glyph::Hidden);
    }

    #[test]
    fn glyph_text() {
        assert_eq!(Glyph::Hidden.to_string(), ".");
        assert_eq!(Glyph::Flagged.to_string(), "*");
        assert_eq!(Glyph::Empty.to_string(), "/");
        assert_eq!(Glyph::Count(3).to_string(), "3");
        assert_eq!(Glyph::Mine.to_string(), "X");
    }

    #[test]
    fn board_view_layout() {
        let mut board = board((2, 3), &[(0, 0)]);
        board.reveal((1, 2)).unwrap();

        let text = BoardView::new(&board, false).to_string();

        assert_eq!(
            text,
            " |1 2 3 |\n\
             -|------|\n\
             1|. 1 / |\n\
             2|. 1 / |\n\
             -|------|\n \
             |      |\n"
        );
    }

    #[test]
    fn label_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(Coord::MAX), 5);
    }

    #[test]
    #[should_panic]
    fn glyph_outside_the_board_panics() {
        let board = board((2, 2), &[]);
        BoardView::new(&board, true).glyph_at((0, 2));
    }

    #[test]
    fn board_view_widens_labels_for_large_grids() {
        let board = board((10, 2), &[]);

        let text = BoardView::new(&board, false).to_string();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("  |1 2 |"));
        assert_eq!(lines.next(), Some("--|----|"));
        assert_eq!(lines.next(), Some(" 1|. . |"));
        assert_eq!(lines.nth(8), Some("10|. . |"));
    }
}
