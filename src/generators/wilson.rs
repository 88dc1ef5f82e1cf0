use bit_set::BitSet;
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_xorshift::XorShiftRng;
use tracing::trace;

use super::{log_built, require_connected_edges, seeded_rng, Maze};
use crate::errors::*;
use crate::grid::Grid;
use crate::utils;

/// Wilson's algorithm: loop-erased random walks from unvisited cells until they hit the maze.
///
/// Like Aldous-Broder this samples a uniform spanning tree. It is slow to start, as the first
/// walk has to find the single seeded cell, and then speeds up as the maze grows.
#[derive(Debug, Clone)]
pub struct Wilson<R = XorShiftRng> {
    rng: R,
}

impl Wilson<XorShiftRng> {
    pub fn from_seed(seed: u64) -> Wilson<XorShiftRng> {
        Wilson::new(seeded_rng(seed))
    }
}

impl<R: Rng> Wilson<R> {
    pub fn new(rng: R) -> Wilson<R> {
        Wilson { rng }
    }
}

impl<R: Rng> Maze for Wilson<R> {
    type Rng = R;

    fn name(&self) -> &'static str {
        "wilson"
    }

    fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    fn build(&mut self, grid: &mut Grid) -> Result<()> {
        require_connected_edges(grid)?;
        grid.reset_paths(false);

        let cells_count = grid.size();
        let mut visited = BitSet::with_capacity(cells_count);
        let _ = visited.insert(grid.random_cell(&mut self.rng));

        // Walks start from each cell in a random order, skipping any that an earlier walk joined.
        let mut starts = grid.iter().collect::<Vec<_>>();
        starts.shuffle(&mut self.rng);

        // The walk in order, plus each walk cell's position in it for constant time loop erasure.
        let mut walk: Vec<usize> = Vec::with_capacity(cells_count);
        let mut walk_positions = utils::fnv_hashmap::<usize, usize>(cells_count);

        for start in starts {
            if visited.contains(start) {
                continue;
            }
            walk.clear();
            walk_positions.clear();
            walk.push(start);
            let _ = walk_positions.insert(start, 0);

            let mut current = start;
            while !visited.contains(current) {
                let neighbours = grid.neighbours(current);
                let next = *neighbours.choose(&mut self.rng)
                    .ok_or(ErrorKind::DisconnectedTopology)?;

                if let Some(&position) = walk_positions.get(&next) {
                    // erase the loop back to where the walk first crossed `next`
                    for erased in walk.drain(position + 1..) {
                        let _ = walk_positions.remove(&erased);
                    }
                } else {
                    let _ = walk_positions.insert(next, walk.len());
                    walk.push(next);
                }
                current = next;
            }

            trace!(walk_length = walk.len(), "joined walk to maze");
            for (&a, &b) in walk.iter().tuple_windows() {
                let _ = grid.connect_path(a, b, true)?;
                let _ = visited.insert(a);
            }
        }

        log_built(self.name(), grid);
        Ok(())
    }
}
