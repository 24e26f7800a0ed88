//! Win evaluation, recomputed from the board on every call.

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WinCondition {
    /// Every safe cell is revealed.
    AllSafeRevealed,
    /// Every mine is flagged and no safe cell is.
    AllMinesFlagged,
}

pub fn evaluate(board: &Board) -> Option<WinCondition> {
    let mut mines: CellCount = 0;
    let mut revealed: CellCount = 0;
    let mut flagged_mines: CellCount = 0;
    let mut flagged_safe: CellCount = 0;

    for (_, cell) in board.cells() {
        match (cell.state(), cell.is_mine()) {
            (CellState::Revealed, _) => revealed += 1,
            (CellState::Flagged, true) => flagged_mines += 1,
            (CellState::Flagged, false) => flagged_safe += 1,
            (CellState::Hidden, _) => {}
        }
        if cell.is_mine() {
            mines += 1;
        }
    }

    if revealed == board.total_cells() - mines {
        Some(WinCondition::AllSafeRevealed)
    } else if flagged_mines == mines && flagged_safe == 0 {
        Some(WinCondition::AllMinesFlagged)
    } else {
        None
    }
}

/// Never reports a loss, mine hits are the caller's to detect.
pub fn has_won(board: &Board) -> bool {
    evaluate(board).is_some()
}
