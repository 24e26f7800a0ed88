use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Mine coordinates chosen for one game, kept as drawn: a coordinate may
/// appear more than once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MineLayout {
    size: Coord2,
    mines: Vec<Coord2>,
}

impl MineLayout {
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        if mine_coords.iter().any(|&coords| !contains(size, coords)) {
            return Err(GameError::InvalidCoords);
        }
        Ok(Self {
            size,
            mines: mine_coords.to_vec(),
        })
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    /// Every drawn coordinate, duplicates included.
    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }

    /// Mines actually placed on the grid.
    pub fn distinct_mine_count(&self) -> CellCount {
        let distinct: BTreeSet<_> = self.mines.iter().collect();
        CellCount::try_from(distinct.len()).unwrap_or(CellCount::MAX)
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mines.contains(&coords)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        count_adjacent_mines(self, coords)
    }
}

/// Mines around `coords`, or 0 when `coords` is itself a mine.
pub fn count_adjacent_mines(layout: &MineLayout, coords: Coord2) -> u8 {
    if layout.contains_mine(coords) {
        return 0;
    }
    let count = neighbors(layout.size(), coords)
        .filter(|&pos| layout.contains_mine(pos))
        .count();
    // at most 8 neighbors
    count as u8
}

/// Draws `count` independent uniform coordinates; collisions are not redrawn.
pub fn generate_mine_layout<R: Rng>(size: Coord2, count: CellCount, rng: &mut R) -> MineLayout {
    let (rows, cols) = size;
    if rows == 0 || cols == 0 {
        log::warn!("Empty {}x{} grid, no mines placed", rows, cols);
        return MineLayout {
            size,
            mines: Vec::new(),
        };
    }
    let mines: Vec<Coord2> = (0..count)
        .map(|_| (rng.random_range(0..rows), rng.random_range(0..cols)))
        .collect();
    let layout = MineLayout { size, mines };

    let placed = layout.distinct_mine_count();
    if placed != count {
        log::warn!(
            "Duplicate mine coordinates drawn, requested: {}, placed: {}",
            count,
            placed
        );
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn from_mine_coords_rejects_out_of_bounds() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            MineLayout::from_mine_coords((0, 3), &[]),
            Err(GameError::InvalidSize)
        );
    }

    #[test]
    fn mine_reports_zero_adjacent() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (0, 1), (1, 0)]).unwrap();

        assert_eq!(count_adjacent_mines(&layout, (0, 0)), 0);
        assert_eq!(count_adjacent_mines(&layout, (1, 1)), 3);
        assert_eq!(count_adjacent_mines(&layout, (2, 2)), 0);
        assert_eq!(layout.adjacent_mine_count((0, 2)), 1);
    }

    #[test]
    fn duplicate_coordinates_count_once_per_neighbor() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(1, 1), (1, 1)]).unwrap();

        assert_eq!(layout.mines().len(), 2);
        assert_eq!(layout.distinct_mine_count(), 1);
        assert_eq!(count_adjacent_mines(&layout, (0, 0)), 1);
    }

    #[test]
    fn generated_layout_is_in_bounds_and_sized() {
        let mut rng = SmallRng::seed_from_u64(7);
        let layout = generate_mine_layout((9, 4), 20, &mut rng);

        assert_eq!(layout.size(), (9, 4));
        assert_eq!(layout.mines().len(), 20);
        assert!(layout.mines().iter().all(|&pos| contains((9, 4), pos)));
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let first = generate_mine_layout((9, 9), 10, &mut SmallRng::seed_from_u64(42));
        let second = generate_mine_layout((9, 9), 10, &mut SmallRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn empty_grid_gets_no_mines() {
        let layout = generate_mine_layout((0, 3), 1, &mut SmallRng::seed_from_u64(0));

        assert_eq!(layout.size(), (0, 3));
        assert!(layout.mines().is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        // a single cell grid forces every draw onto the same coordinate
        let layout = generate_mine_layout((1, 1), 3, &mut SmallRng::seed_from_u64(0));

        assert_eq!(layout.mines(), &[(0, 0); 3]);
        assert_eq!(layout.distinct_mine_count(), 1);
    }
}
