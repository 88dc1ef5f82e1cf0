use rand::seq::SliceRandom;
use rand::Rng;
use rand_xorshift::XorShiftRng;

use super::{log_built, require_connected_edges, seeded_rng, Maze};
use crate::errors::*;
use crate::grid::Grid;

/// Recursive backtracker: a randomised depth first search kept on an explicit stack.
///
/// Long winding corridors with relatively few, short dead ends.
#[derive(Debug, Clone)]
pub struct Backtracker<R = XorShiftRng> {
    rng: R,
}

impl Backtracker<XorShiftRng> {
    pub fn from_seed(seed: u64) -> Backtracker<XorShiftRng> {
        Backtracker::new(seeded_rng(seed))
    }
}

impl<R: Rng> Backtracker<R> {
    pub fn new(rng: R) -> Backtracker<R> {
        Backtracker { rng }
    }
}

impl<R: Rng> Maze for Backtracker<R> {
    type Rng = R;

    fn name(&self) -> &'static str {
        "backtracker"
    }

    fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    fn build(&mut self, grid: &mut Grid) -> Result<()> {
        require_connected_edges(grid)?;
        grid.reset_paths(false);

        let mut stack = vec![grid.random_cell(&mut self.rng)];
        while let Some(&current) = stack.last() {
            let unvisited = grid.neighbours_without_paths(current);
            match unvisited.choose(&mut self.rng) {
                Some(&next) => stack.push(grid.connect_path(current, next, true)?),
                None => {
                    let _ = stack.pop();
                }
            }
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
    fn two_by_two_grid() {
        let mut g = Grid::with_edges(RowsCount(2), ColumnsCount(2), true, false).unwrap();
        Backtracker::from_seed(1).build(&mut g).unwrap();
        assert_eq!(g.path_count(), 3);
        assert!(g.is_connected());
        // a 2x2 depth first search is always a single corridor
        assert_eq!(g.dead_ends().len(), 2);
    }

    #[test]
    fn spans_the_grid() {
        let mut g = Grid::with_edges(RowsCount(20), ColumnsCount(20), true, false).unwrap();
        Backtracker::from_seed(3).build(&mut g).unwrap();
        assert!(g.is_spanning_tree());
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = Grid::with_edges(RowsCount(9), ColumnsCount(9), true, true).unwrap();
        let mut b = a.clone();
        Backtracker::from_seed(77).build(&mut a).unwrap();
        Backtracker::from_seed(77).build(&mut b).unwrap();
        assert_eq!(a.cells(), b.cells());
    }
}
