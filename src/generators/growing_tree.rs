use rand::seq::SliceRandom;
use rand::Rng;
use rand_xorshift::XorShiftRng;

use super::{log_built, require_connected_edges, seeded_rng, Maze};
use crate::errors::*;
use crate::grid::Grid;
use crate::utils;

/// How the growing tree picks which active cell to grow from next.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum SelectionStrategy {
    /// Uniformly random: behaves like a simplified Prim's algorithm.
    Random,
    /// Most recently added: behaves like the recursive backtracker.
    Newest,
    /// Least recently added: long straight corridors radiating from the start.
    Oldest,
    /// Newest with the given probability, otherwise random.
    Mixed { newest_probability: f64 },
}

impl Default for SelectionStrategy {
    fn default() -> SelectionStrategy {
        SelectionStrategy::Random
    }
}

impl SelectionStrategy {
    fn validate(self) -> Result<SelectionStrategy> {
        if let SelectionStrategy::Mixed { newest_probability } = self {
            let _ = utils::check_probability("newest probability", newest_probability)?;
        }
        Ok(self)
    }

    /// Position in an active list of `active_count` (> 0) cells.
    fn select<R: Rng>(self, rng: &mut R, active_count: usize) -> usize {
        let newest = active_count - 1;
        match self {
            SelectionStrategy::Random => rng.gen_range(0..active_count),
            SelectionStrategy::Newest => newest,
            SelectionStrategy::Oldest => 0,
            SelectionStrategy::Mixed { newest_probability } => {
                if rng.gen_bool(newest_probability) {
                    newest
                } else {
                    rng.gen_range(0..active_count)
                }
            }
        }
    }
}

/// Growing tree: keep a list of active cells, grow the maze from one of them into an unvisited
/// neighbour, and retire cells that have no unvisited neighbours left.
#[derive(Debug, Clone)]
pub struct GrowingTree<R = XorShiftRng> {
    rng: R,
    strategy: SelectionStrategy,
}

impl GrowingTree<XorShiftRng> {
    pub fn from_seed(seed: u64) -> GrowingTree<XorShiftRng> {
        GrowingTree::new(seeded_rng(seed))
    }
}

impl<R: Rng> GrowingTree<R> {
    pub fn new(rng: R) -> GrowingTree<R> {
        GrowingTree {
            rng,
            strategy: SelectionStrategy::default(),
        }
    }

    pub fn with_strategy(rng: R, strategy: SelectionStrategy) -> Result<GrowingTree<R>> {
        Ok(GrowingTree {
            rng,
            strategy: strategy.validate()?,
        })
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }
}

impl<R: Rng> Maze for GrowingTree<R> {
    type Rng = R;

    fn name(&self) -> &'static str {
        "growing-tree"
    }

    fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    fn build(&mut self, grid: &mut Grid) -> Result<()> {
        require_connected_edges(grid)?;
        grid.reset_paths(false);

        let mut active = vec![grid.random_cell(&mut self.rng)];
        while !active.is_empty() {
            let position = self.strategy.select(&mut self.rng, active.len());
            let cell = active[position];
            let unvisited = grid.neighbours_without_paths(cell);
            match unvisited.choose(&mut self.rng) {
                Some(&next) => active.push(grid.connect_path(cell, next, true)?),
                None => {
                    let _ = active.remove(position);
                }
            }
        }

        log_built(self.name(), grid);
        Ok(())
    }
}
