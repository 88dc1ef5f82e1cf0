use rand::Rng;
use rand_xorshift::XorShiftRng;
use tracing::trace;

use super::{log_built, require_orthogonal_edges, seeded_rng, Maze};
use crate::cells::{Coordinate, Direction};
use crate::errors::*;
use crate::grid::Grid;

/// A rectangle of cells still to be divided.
#[derive(Debug, Copy, Clone)]
struct Region {
    row: usize,
    column: usize,
    height: usize,
    width: usize,
}

/// Recursive division: the only wall adder of the family. Starts from a grid with every
/// orthogonal passage open, then splits regions in two with a wall that has a single gap,
/// across the longer side, until every region is a single row or column wide.
#[derive(Debug, Clone)]
pub struct RecursiveDivision<R = XorShiftRng> {
    rng: R,
}

impl RecursiveDivision<XorShiftRng> {
    pub fn from_seed(seed: u64) -> RecursiveDivision<XorShiftRng> {
        RecursiveDivision::new(seeded_rng(seed))
    }
}

impl<R: Rng> RecursiveDivision<R> {
    pub fn new(rng: R) -> RecursiveDivision<R> {
        RecursiveDivision { rng }
    }

    /// Open every orthogonal edge. Diagonal edges stay walled.
    fn open_all(grid: &mut Grid) -> Result<()> {
        grid.reset_paths(false);
        for cell in grid.iter() {
            for &dir in &[Direction::East, Direction::South] {
                if let Some(neighbour) = grid.neighbour_at_direction(cell, dir) {
                    let _ = grid.connect_path(cell, neighbour, true)?;
                }
            }
        }
        Ok(())
    }

    /// Wall off `region` into two halves, leaving one passage. Returns the halves.
    fn divide(&mut self, grid: &mut Grid, region: Region) -> Result<(Region, Region)> {
        let horizontal_wall = if region.height == region.width {
            self.rng.gen()
        } else {
            region.height > region.width
        };

        if horizontal_wall {
            // wall along the south side of row `split`
            let split = region.row + self.rng.gen_range(0..region.height - 1);
            let passage = region.column + self.rng.gen_range(0..region.width);
            trace!(row = split, passage, "horizontal wall");

            for column in (region.column..region.column + region.width).filter(|&c| c != passage) {
                let above = grid.index_of(Coordinate::new(split, column))?;
                let below = grid.index_of(Coordinate::new(split + 1, column))?;
                grid.disconnect_path(above, below, true)?;
            }

            let north_height = split - region.row + 1;
            Ok((Region { height: north_height, ..region },
                Region { row: split + 1, height: region.height - north_height, ..region }))
        } else {
            // wall along the east side of column `split`
            let split = region.column + self.rng.gen_range(0..region.width - 1);
            let passage = region.row + self.rng.gen_range(0..region.height);
            trace!(column = split, passage, "vertical wall");

            for row in (region.row..region.row + region.height).filter(|&r| r != passage) {
                let west = grid.index_of(Coordinate::new(row, split))?;
                let east = grid.index_of(Coordinate::new(row, split + 1))?;
                grid.disconnect_path(west, east, true)?;
            }

            let west_width = split - region.column + 1;
            Ok((Region { width: west_width, ..region },
                Region { column: split + 1, width: region.width - west_width, ..region }))
        }
    }
}

impl<R: Rng> Maze for RecursiveDivision<R> {
    type Rng = R;

    fn name(&self) -> &'static str {
        "recursive-division"
    }

    fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    fn build(&mut self, grid: &mut Grid) -> Result<()> {
        require_orthogonal_edges(grid)?;
        RecursiveDivision::<R>::open_all(grid)?;

        // An explicit stack of pending regions rather than call recursion, deep splits on thin
        // grids would otherwise grow the call stack with the grid size.
        let mut regions = vec![Region {
                                   row: 0,
                                   column: 0,
                                   height: grid.rows().0,
                                   width: grid.columns().0,
                               }];
        while let Some(region) = regions.pop() {
            if region.height <= 1 || region.width <= 1 {
                continue;
            }
            let (first, second) = self.divide(grid, region)?;
            regions.push(second);
            regions.push(first);
        }

        log_built(self.name(), grid);
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::{ColumnsCount, RowsCount};

    #[test]
    fn five_by_five_grid() {
        let mut g = Grid::with_edges(RowsCount(5), ColumnsCount(5), true, false).unwrap();
        RecursiveDivision::from_seed(10).build(&mut g).unwrap();
        assert!(g.cells_without_paths().is_empty());
        assert_eq!(g.path_count(), 24);
        assert!(g.is_spanning_tree());
    }

    #[test]
    fn open_grid_before_division() {
        let mut g = Grid::with_edges(RowsCount(3), ColumnsCount(4), true, true).unwrap();
        RecursiveDivision::<XorShiftRng>::open_all(&mut g).unwrap();
        assert_eq!(g.path_count(), 3 * 3 + 4 * 2);
        assert!(g.cells().iter().all(|c| c.paths().iter().all(|(d, _)| !d.is_diagonal())));
    }

    #[test]
    fn one_division_leaves_a_single_passage() {
        let mut g = Grid::with_edges(RowsCount(4), ColumnsCount(2), true, false).unwrap();
        RecursiveDivision::<XorShiftRng>::open_all(&mut g).unwrap();
        let open = g.path_count();
        let mut maze = RecursiveDivision::from_seed(3);
        let region = Region { row: 0, column: 0, height: 4, width: 2 };
        let (north, south) = maze.divide(&mut g, region).unwrap();
        // taller than wide, so the wall is horizontal and spans both columns but one
        assert_eq!(g.path_count(), open - 1);
        assert_eq!(north.height + south.height, 4);
        assert_eq!((north.width, south.width), (2, 2));
        assert_eq!(south.row, north.height);
    }

    #[test]
    fn wide_grids_span() {
        let mut g = Grid::with_edges(RowsCount(3), ColumnsCount(40), true, false).unwrap();
        RecursiveDivision::from_seed(8).build(&mut g).unwrap();
        assert!(g.is_spanning_tree());
    }
}
