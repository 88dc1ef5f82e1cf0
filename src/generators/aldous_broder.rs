use bit_set::BitSet;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_xorshift::XorShiftRng;

use super::{log_built, require_connected_edges, seeded_rng, Maze};
use crate::errors::*;
use crate::grid::Grid;

/// Aldous-Broder: a random walk that carves into every cell the first time it is entered.
///
/// Every spanning tree of the grid is equally likely (a uniform spanning tree), but the walk
/// spends a long time crossing already visited territory before it finds the last few cells.
#[derive(Debug, Clone)]
pub struct AldousBroder<R = XorShiftRng> {
    rng: R,
}

impl AldousBroder<XorShiftRng> {
    pub fn from_seed(seed: u64) -> AldousBroder<XorShiftRng> {
        AldousBroder::new(seeded_rng(seed))
    }
}

impl<R: Rng> AldousBroder<R> {
    pub fn new(rng: R) -> AldousBroder<R> {
        AldousBroder { rng }
    }
}

impl<R: Rng> Maze for AldousBroder<R> {
    type Rng = R;

    fn name(&self) -> &'static str {
        "aldous-broder"
    }

    fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    fn build(&mut self, grid: &mut Grid) -> Result<()> {
        require_connected_edges(grid)?;
        grid.reset_paths(false);

        let cells_count = grid.size();
        let mut visited = BitSet::with_capacity(cells_count);
        let mut current = grid.random_cell(&mut self.rng);
        let _ = visited.insert(current);
        let mut unvisited_count = cells_count - 1;

        while unvisited_count > 0 {
            let neighbours = grid.neighbours(current);
            let next = *neighbours.choose(&mut self.rng)
                .ok_or(ErrorKind::DisconnectedTopology)?;

            if visited.insert(next) {
                let _ = grid.connect_path(current, next, true)?;
                unvisited_count -= 1;
            }
            current = next;
        }

        log_built(self.name(), grid);
        Ok(())
    }
}
