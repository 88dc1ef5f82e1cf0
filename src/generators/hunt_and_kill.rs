use rand::seq::SliceRandom;
use rand::Rng;
use rand_xorshift::XorShiftRng;
use tracing::trace;

use super::{log_built, require_connected_edges, seeded_rng, Maze};
use crate::errors::*;
use crate::grid::Grid;

/// Hunt and kill: random walk through unvisited cells until stuck (kill), then scan the grid
/// row by row for the first unvisited cell bordering the maze and join it on (hunt).
#[derive(Debug, Clone)]
pub struct HuntAndKill<R = XorShiftRng> {
    rng: R,
}

impl HuntAndKill<XorShiftRng> {
    pub fn from_seed(seed: u64) -> HuntAndKill<XorShiftRng> {
        HuntAndKill::new(seeded_rng(seed))
    }
}

impl<R: Rng> HuntAndKill<R> {
    pub fn new(rng: R) -> HuntAndKill<R> {
        HuntAndKill { rng }
    }

    /// Returns the newly joined cell to resume killing from, or None when the maze is complete.
    fn hunt(&mut self, grid: &mut Grid) -> Result<Option<usize>> {
        for index in grid.iter() {
            if !grid[index].paths().is_empty() {
                continue;
            }
            let visited = grid.neighbours_with_paths(index);
            if let Some(&neighbour) = visited.choose(&mut self.rng) {
                let _ = grid.connect_path(index, neighbour, true)?;
                trace!(cell = index, "hunt found an unvisited cell");
                return Ok(Some(index));
            }
        }
        Ok(None)
    }
}

impl<R: Rng> Maze for HuntAndKill<R> {
    type Rng = R;

    fn name(&self) -> &'static str {
        "hunt-kill"
    }

    fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    fn build(&mut self, grid: &mut Grid) -> Result<()> {
        require_connected_edges(grid)?;
        grid.reset_paths(false);

        let mut current = Some(grid.random_cell(&mut self.rng));
        while let Some(cell) = current {
            let unvisited = grid.neighbours_without_paths(cell);
            current = match unvisited.choose(&mut self.rng) {
                Some(&next) => Some(grid.connect_path(cell, next, true)?),
                None => self.hunt(grid)?,
            };
        }

        log_built(self.name(), grid);
        Ok(())
    }
}
